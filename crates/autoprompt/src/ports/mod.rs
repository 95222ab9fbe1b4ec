//! Ports (Interfaces)
//!
//! Abstract interfaces that define how a host drives the domain layer.
//!
//! Implementations of these traits live in `components/`.

mod component;

pub use component::*;
