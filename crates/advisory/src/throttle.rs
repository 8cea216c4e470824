//! Advisory throttle: interval plus scene-change gating

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::debug;

/// Throttle policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThrottlePolicy {
    /// Issue on any signature change, or on an unchanged scene once the cooldown elapsed
    #[default]
    SignatureAware,
    /// Issue only when the interval elapsed, ignoring the signature
    FixedInterval,
}

/// Session state of the throttle; updated only when an advisory is issued
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThrottleState {
    pub last_request: Option<Instant>,
    pub last_signature: Option<String>,
}

/// Decides per frame whether a new advisory should be issued
#[derive(Debug, Clone)]
pub struct AdvisoryThrottle {
    policy: ThrottlePolicy,
    cooldown: Duration,
    state: ThrottleState,
    issued_count: u64,
}

impl AdvisoryThrottle {
    pub fn new(policy: ThrottlePolicy, cooldown: Duration) -> Self {
        Self {
            policy,
            cooldown,
            state: ThrottleState::default(),
            issued_count: 0,
        }
    }

    pub fn signature_aware(cooldown: Duration) -> Self {
        Self::new(ThrottlePolicy::SignatureAware, cooldown)
    }

    pub fn fixed_interval(interval: Duration) -> Self {
        Self::new(ThrottlePolicy::FixedInterval, interval)
    }

    /// Whether an advisory for `signature` may be issued at `now`
    pub fn should_issue(&self, signature: &str, now: Instant) -> bool {
        let last = match self.state.last_request {
            Some(last) => last,
            None => return true,
        };

        let elapsed = now.saturating_duration_since(last);
        let cooled_down = elapsed >= self.cooldown;

        match self.policy {
            ThrottlePolicy::FixedInterval => cooled_down,
            ThrottlePolicy::SignatureAware => {
                let unchanged = self.state.last_signature.as_deref() == Some(signature);
                if unchanged && !cooled_down {
                    debug!("Advisory suppressed: scene '{}' unchanged, {:?} of {:?} elapsed",
                        signature, elapsed, self.cooldown);
                }
                !unchanged || cooled_down
            }
        }
    }

    /// Record that an advisory was issued
    pub fn record_issued(&mut self, signature: &str, now: Instant) {
        self.state.last_request = Some(now);
        self.state.last_signature = Some(signature.to_string());
        self.issued_count += 1;
    }

    /// Check and record in one step; returns whether the advisory was issued
    pub fn try_issue(&mut self, signature: &str, now: Instant) -> bool {
        if self.should_issue(signature, now) {
            self.record_issued(signature, now);
            true
        } else {
            false
        }
    }

    pub fn policy(&self) -> ThrottlePolicy {
        self.policy
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    pub fn state(&self) -> &ThrottleState {
        &self.state
    }

    pub fn issued_count(&self) -> u64 {
        self.issued_count
    }

    /// Forget the last issued advisory
    pub fn reset(&mut self) {
        self.state = ThrottleState::default();
    }
}
