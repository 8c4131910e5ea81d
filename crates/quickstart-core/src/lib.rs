//! Quickstart Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for
//! `pelican-quickstart`, the interactive generator for new Pelican site
//! skeletons, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         quickstart-cli (CLI)            │
//! │   (terminal prompts, config, logging)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (QuickstartService, PromptEngine, ...)  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (PromptIo, Filesystem, TemplateRenderer,│
//! │  TimezoneDatabase)                      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   quickstart-adapters (Infrastructure)  │
//! │ (TeraRenderer, LocalFilesystem, etc)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Defaults, Settings, answer parsing)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use quickstart_core::prelude::*;
//!
//! let service = QuickstartService::new(renderer, filesystem, timezones);
//! let request = QuickstartRequest::new(Defaults::default(), PathArg::from_cli(None), cwd);
//! let outcome = service.run(request, &mut terminal)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

pub use error::{QuickstartError, QuickstartResult};

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationFailure, GenerationReport, PromptEngine, QuickstartOutcome, QuickstartRequest,
        QuickstartService, RenderService,
        ports::{Filesystem, PromptIo, TemplateRenderer, TimezoneDatabase},
    };
    pub use crate::domain::{
        Answer, AnswerKind, Defaults, GithubPagesKind, Pagination, PathArg, SettingValue,
        Settings, TemplateVars,
    };
    pub use crate::error::{ErrorCategory, QuickstartError, QuickstartResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
