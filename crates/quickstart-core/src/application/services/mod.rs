//! Application services - orchestrate use cases.
//!
//! `QuickstartService` drives a whole run; `PromptEngine` and
//! `RenderService` are the pieces it is built from.

pub mod prompt;
pub mod quickstart;
pub mod render;

pub use prompt::PromptEngine;
pub use quickstart::{
    MAKEFILE, PELICANCONF, PUBLISHCONF, QuickstartOutcome, QuickstartRequest, QuickstartService,
    TASKS, questions,
};
pub use render::{GenerationFailure, GenerationReport, RenderService};
