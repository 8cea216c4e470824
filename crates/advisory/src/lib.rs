//! Navigation Advisories
//!
//! Decides when a frame deserves spoken guidance and prepares it:
//! - Signature-aware or fixed-interval advisory throttling
//! - English/Arabic prompt composition from aggregated frame facts
//! - Speech hand-off with fallback phrases for failed requests
//! - [`NavigationSession`], the per-stream context object tying it together

pub mod config;
pub mod prompt;
pub mod session;
pub mod speech;
pub mod throttle;

pub use config::SessionConfig;
pub use prompt::{Locale, PromptComposer, PromptConfig};
pub use session::{AdvisoryRequest, FrameOutcome, NavigationSession};
pub use speech::{hand_off, AdvisoryFailure, SpeechSink};
pub use throttle::{AdvisoryThrottle, ThrottlePolicy, ThrottleState};

use spatial::SpatialError;
use thiserror::Error;

/// Advisory errors
#[derive(Error, Debug)]
pub enum AdvisoryError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid position settings: {0}")]
    Spatial(#[from] SpatialError),

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),

    #[error("Speech output failed: {0}")]
    Speech(String),
}
