//! Session configuration

use crate::prompt::{Locale, PromptConfig};
use crate::throttle::ThrottlePolicy;
use crate::AdvisoryError;
use frame_aggregator::AggregatorConfig;
use serde::{Deserialize, Serialize};
use spatial::PositionConfig;
use std::time::Duration;

/// Settings for one navigation session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Minimum seconds between advisories for an unchanged scene
    pub cooldown_seconds: u64,

    pub throttle_policy: ThrottlePolicy,

    /// Detections at or below this confidence are dropped from the snapshot
    pub confidence_floor: f32,

    pub locale: Locale,

    pub position: PositionConfig,

    pub prompt: PromptConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cooldown_seconds: 30,
            throttle_policy: ThrottlePolicy::SignatureAware,
            confidence_floor: 0.01,
            locale: Locale::En,
            position: PositionConfig::default(),
            prompt: PromptConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Fewer, higher-confidence advisories
    pub fn quiet() -> Self {
        Self {
            cooldown_seconds: 60,
            prompt: PromptConfig {
                min_confidence: 0.5,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Flat interval gate with no scene-change check
    pub fn fixed_interval(seconds: u64) -> Self {
        Self {
            cooldown_seconds: seconds,
            throttle_policy: ThrottlePolicy::FixedInterval,
            ..Default::default()
        }
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_secs(self.cooldown_seconds)
    }

    pub fn aggregator_config(&self) -> AggregatorConfig {
        AggregatorConfig {
            confidence_floor: self.confidence_floor,
            position: self.position.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), AdvisoryError> {
        if !(0.0..1.0).contains(&self.confidence_floor) {
            return Err(AdvisoryError::Config(format!(
                "confidence_floor must be in [0, 1), got {}",
                self.confidence_floor
            )));
        }
        if !(0.0..=1.0).contains(&self.prompt.min_confidence) {
            return Err(AdvisoryError::Config(format!(
                "prompt.min_confidence must be in [0, 1], got {}",
                self.prompt.min_confidence
            )));
        }
        if self.prompt.reply_word_target == 0 {
            return Err(AdvisoryError::Config(
                "prompt.reply_word_target must be positive".into(),
            ));
        }
        self.position.validate()?;
        Ok(())
    }
}
