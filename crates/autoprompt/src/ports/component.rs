//! Component Port
//!
//! Abstract interface a flow host uses to drive a component.
//!
//! The host owns the lifecycle: it sets inputs, calls [`Component::run`],
//! then reads [`Component::status`] for display.

use async_trait::async_trait;

use crate::domain::entities::{ComponentInfo, Message};
use crate::domain::errors::DomainError;

/// Pluggable unit of a flow
///
/// # Example
///
/// ```rust,ignore
/// use autoprompt::ports::Component;
///
/// async fn execute(component: &mut dyn Component) -> Result<String, DomainError> {
///     let message = component.run().await?;
///     tracing::info!("{}: {:?}", component.info().name, component.status());
///     Ok(message.text)
/// }
/// ```
#[async_trait]
pub trait Component: Send + Sync {
    /// Identity and input/output declarations
    fn info(&self) -> ComponentInfo;

    /// Status text recorded by the last run, if any
    fn status(&self) -> Option<&str>;

    /// Produce the component's output from its current inputs
    async fn run(&mut self) -> Result<Message, DomainError>;
}
