//! Navigation session: one camera stream's mutable state

use crate::config::SessionConfig;
use crate::prompt::{Locale, PromptComposer};
use crate::throttle::AdvisoryThrottle;
use crate::AdvisoryError;
use frame_aggregator::{FrameAggregator, FrameSnapshot, RawDetection};
use serde::{Deserialize, Serialize};
use spatial::WalkabilityReport;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tracing::{debug, info};

/// An advisory cleared by the throttle, ready for the transport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryRequest {
    /// Sequence number of the frame that triggered it
    pub sequence: u64,
    pub signature: String,
    pub locale: Locale,
    pub prompt: String,
}

/// Result of processing one frame
#[derive(Debug, Clone)]
pub struct FrameOutcome {
    pub snapshot: Arc<FrameSnapshot>,
    pub walkability: WalkabilityReport,
    /// Present only when the throttle allowed a new advisory
    pub advisory: Option<AdvisoryRequest>,
}

#[derive(Debug)]
struct SessionState {
    aggregator: FrameAggregator,
    throttle: AdvisoryThrottle,
}

/// Owns the aggregator and throttle for one session.
///
/// Aggregation, the throttle check and its update happen under one lock, so
/// concurrent callers are serialized frame by frame.
#[derive(Debug)]
pub struct NavigationSession {
    config: SessionConfig,
    composer: PromptComposer,
    state: Mutex<SessionState>,
}

impl NavigationSession {
    pub fn new(config: SessionConfig) -> Result<Self, AdvisoryError> {
        config.validate()?;

        let state = SessionState {
            aggregator: FrameAggregator::new(config.aggregator_config()),
            throttle: AdvisoryThrottle::new(config.throttle_policy, config.cooldown()),
        };
        info!(
            "Navigation session started (locale {}, {:?} throttle, cooldown {}s)",
            config.locale, config.throttle_policy, config.cooldown_seconds
        );

        Ok(Self {
            composer: PromptComposer::new(config.prompt.clone()),
            config,
            state: Mutex::new(state),
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn locale(&self) -> Locale {
        self.config.locale
    }

    /// Aggregate one frame and decide whether it warrants an advisory
    pub fn process_frame<I>(&self, detections: I, now: Instant) -> Result<FrameOutcome, AdvisoryError>
    where
        I: IntoIterator<Item = RawDetection>,
    {
        let (snapshot, issue) = {
            let mut state = self.state.lock().map_err(|e| {
                AdvisoryError::LockPoisoned(format!("Session state: {}", e))
            })?;
            let snapshot = state.aggregator.aggregate(detections);
            let issue = state.throttle.try_issue(&snapshot.signature, now);
            (snapshot, issue)
        };

        let walkability = snapshot.walkability();

        let advisory = if issue {
            let prompt = self
                .composer
                .compose(&snapshot, &walkability, self.config.locale);
            info!(
                "Advisory issued for frame {} (scene '{}')",
                snapshot.sequence, snapshot.signature
            );
            Some(AdvisoryRequest {
                sequence: snapshot.sequence,
                signature: snapshot.signature.clone(),
                locale: self.config.locale,
                prompt,
            })
        } else {
            debug!("Frame {} throttled", snapshot.sequence);
            None
        };

        Ok(FrameOutcome {
            snapshot,
            walkability,
            advisory,
        })
    }

    /// Latest snapshot, if any frame has been processed
    pub fn last_snapshot(&self) -> Result<Option<Arc<FrameSnapshot>>, AdvisoryError> {
        let state = self.state.lock().map_err(|e| {
            AdvisoryError::LockPoisoned(format!("Session state: {}", e))
        })?;
        Ok(state.aggregator.last_snapshot())
    }

    /// Prompt for a spoken question, built against the latest snapshot
    pub fn voice_query_prompt(&self, question: &str) -> Result<String, AdvisoryError> {
        let snapshot = self.last_snapshot()?;
        Ok(self
            .composer
            .compose_query(snapshot.as_deref(), question, self.config.locale))
    }

    pub fn frames_processed(&self) -> Result<u64, AdvisoryError> {
        let state = self.state.lock().map_err(|e| {
            AdvisoryError::LockPoisoned(format!("Session state: {}", e))
        })?;
        Ok(state.aggregator.frames_processed())
    }

    pub fn advisories_issued(&self) -> Result<u64, AdvisoryError> {
        let state = self.state.lock().map_err(|e| {
            AdvisoryError::LockPoisoned(format!("Session state: {}", e))
        })?;
        Ok(state.throttle.issued_count())
    }
}
