//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use autoprompt::{ComponentInfo, InputType, InputSpec, ModelFamily, OutputSpec, Tone};

use crate::models::{ComposeRequest, ComposeResponse, OptionsResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::compose::compose_prompt,
        super::compose::list_options,
        super::compose::component_info,
    ),
    info(
        title = "Autoprompt API",
        version = "0.2.0",
        description = "Auto System Prompt - compose system prompts from a goal, keywords, tone and target model family.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Compose", description = "Compose - Generate system prompts"),
    ),
    components(
        schemas(
            // Compose
            ComposeRequest,
            ComposeResponse,
            OptionsResponse,
            Tone,
            ModelFamily,
            // Component
            ComponentInfo,
            InputSpec,
            InputType,
            OutputSpec,
        )
    ),
)]
pub struct ApiDoc;
