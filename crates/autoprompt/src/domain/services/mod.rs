//! Domain Services
//!
//! Stateless operations over domain entities.

pub mod composer;

pub use composer::{compose, format_keywords, parse_keywords, status_for};
