//! Component metadata
//!
//! Describes a component's identity, inputs and outputs so a host can
//! render a form for it and wire its output into a flow.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// What kind of widget an input needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum InputType {
    /// Free text
    Text,
    /// One value out of a fixed option list
    Select,
}

/// A declared component input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InputSpec {
    pub name: String,
    pub display_name: String,
    /// Help text shown next to the input
    pub info: String,
    pub input_type: InputType,
    /// Allowed values (select inputs only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Preselected value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Hidden behind an "advanced" toggle in the host UI
    #[serde(default)]
    pub advanced: bool,
}

impl InputSpec {
    pub fn text(name: &str, display_name: &str, info: &str) -> Self {
        Self {
            name: name.to_string(),
            display_name: display_name.to_string(),
            info: info.to_string(),
            input_type: InputType::Text,
            options: Vec::new(),
            value: None,
            advanced: false,
        }
    }

    pub fn select<I, S>(name: &str, display_name: &str, info: &str, options: I, value: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_string(),
            display_name: display_name.to_string(),
            info: info.to_string(),
            input_type: InputType::Select,
            options: options.into_iter().map(Into::into).collect(),
            value: Some(value.to_string()),
            advanced: false,
        }
    }

    pub fn advanced(mut self) -> Self {
        self.advanced = true;
        self
    }
}

/// A declared component output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OutputSpec {
    pub name: String,
    pub display_name: String,
    /// Component method that produces this output
    pub method: String,
}

/// ComponentInfo - Identity and I/O declarations of a component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ComponentInfo {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub icon: String,
    pub inputs: Vec<InputSpec>,
    pub outputs: Vec<OutputSpec>,
}

impl ComponentInfo {
    /// Look up an input declaration by name
    pub fn input(&self, name: &str) -> Option<&InputSpec> {
        self.inputs.iter().find(|i| i.name == name)
    }
}
