//! WELL-Redesign Core Library
//!
//! This library provides the core functionality for the WELL interior
//! redesign tool: composing a natural-language prompt from selected WELL
//! building-standard features and requesting an img2img rendering from an
//! external generation backend.
//!
//! # Overview
//!
//! The user supplies an interior photograph and a set of WELL feature
//! selections (daylight, greenery, materials, acoustics, circulation).
//! The library handles:
//!
//! - **Prompt Composition**: deterministic feature-to-prompt mapping via
//!   the [`prompt`] module
//! - **Source Images**: loading and format validation via [`image_input`]
//! - **Backend Integration**: the multipart generation request via
//!   [`backend`]
//! - **Bootstrap**: backend address resolution via [`config`]
//!
//! # Quick Start
//!
//! The simplest way to use the library is through the [`WellRedesign`]
//! facade:
//!
//! ```ignore
//! use well_redesign_core::{GenerationRequestSpec, SourceImage, WellRedesign};
//!
//! // Resolve the backend address from the environment or bootstrap file
//! let app = WellRedesign::new()?;
//!
//! let image = SourceImage::from_path("living_room.jpg".as_ref())?;
//! let rendered = app.redesign(&image, &spec).await?;
//! std::fs::write("redesigned_interior.png", rendered)?;
//! ```
//!
//! # Module Structure
//!
//! - [`backend`]: Generation backend client
//! - [`config`]: Backend address bootstrap
//! - [`error`]: Error types and result aliases
//! - [`image_input`]: Source-image loading and validation
//! - [`prompt`]: Prompt composition
//! - [`settings`]: Persisted metric defaults
//! - [`spec`]: Request specification types

pub mod backend;
pub mod config;
pub mod error;
pub mod image_input;
pub mod prompt;
pub mod settings;
pub mod spec;

// Re-export primary types for convenience
pub use backend::BackendClient;
pub use config::Config;
pub use error::{AppError, Result};
pub use image_input::SourceImage;
pub use settings::Settings;
pub use spec::{GenerationRequestSpec, StyleHint};

/// Main entry point for the WELL redesign workflow.
///
/// This struct provides a facade over the configuration and backend
/// subsystems. It's the recommended way to use the library for most
/// use cases.
pub struct WellRedesign {
    config: Config,
    client: BackendClient,
}

impl WellRedesign {
    /// Creates a new instance with the default bootstrap lookup.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ConfigMissing`] when the backend address file
    /// is absent and no environment override is set, or
    /// [`AppError::Config`] when the address is malformed.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Ok(Self::with_config(config))
    }

    /// Creates an instance with a pre-built configuration.
    ///
    /// Use this when the backend address comes from somewhere other than
    /// the standard bootstrap lookup, such as a CLI flag.
    pub fn with_config(config: Config) -> Self {
        let client = BackendClient::new(&config);
        Self { config, client }
    }

    /// Composes the prompt for a spec without contacting the backend.
    ///
    /// Useful for previewing what a submission would send (`--dry-run`).
    pub fn prompt_for(&self, spec: &GenerationRequestSpec) -> String {
        prompt::compose(spec)
    }

    /// Runs one full redesign submission: compose, send, return the
    /// rendered image bytes.
    ///
    /// The spec is consumed conceptually once; calling again with the
    /// same inputs issues a fresh, independent request.
    pub async fn redesign(
        &self,
        image: &SourceImage,
        spec: &GenerationRequestSpec,
    ) -> Result<Vec<u8>> {
        let prompt = prompt::compose(spec);
        self.client.generate(image, &prompt, spec.style_hint).await
    }

    /// Returns a reference to the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Initializes the library by loading environment variables.
///
/// Call this once at application startup before using any other functions.
/// This loads `.env` files if present and sets up the environment.
pub fn init() {
    let _ = dotenvy::dotenv();
}
