//! Prompt composition
//!
//! Renders a [`FrameSnapshot`] and its [`WalkabilityReport`] into the text
//! handed to the remote vision-language model. Section order is fixed:
//! walkable space, critical, high, medium, safe (only when nothing critical
//! or high is present), then the closing task block. All wording comes from
//! the locale tables in [`templates`].

pub mod templates;

use crate::AdvisoryError;
use frame_aggregator::{DetectionFacts, FrameSnapshot, SeverityTier};
use serde::{Deserialize, Serialize};
use spatial::{Corridor, WalkabilityReport};
use std::fmt;
use std::str::FromStr;
use templates::{fill, Templates};
use tracing::debug;

/// Output language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    pub fn templates(&self) -> &'static Templates {
        match self {
            Locale::En => &templates::EN,
            Locale::Ar => &templates::AR,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = AdvisoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ar" | "arabic" => Ok(Locale::Ar),
            other => Err(AdvisoryError::UnknownLocale(other.to_string())),
        }
    }
}

/// Prompt rendering parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Word limit requested for the model's reply
    pub reply_word_target: u32,
    /// Cap on safe-tier items
    pub max_safe_items: usize,
    /// Entries below this confidence are left out of the prompt text
    pub min_confidence: f32,
    /// Cap on scene items listed in a voice-query prompt
    pub max_query_items: usize,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            reply_word_target: 30,
            max_safe_items: 3,
            min_confidence: 0.0,
            max_query_items: 5,
        }
    }
}

/// Builds advisory and voice-query prompts. Pure; safe to share.
#[derive(Debug, Clone, Default)]
pub struct PromptComposer {
    config: PromptConfig,
}

impl PromptComposer {
    pub fn new(config: PromptConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PromptConfig {
        &self.config
    }

    /// Compose the advisory prompt for one frame
    pub fn compose(
        &self,
        snapshot: &FrameSnapshot,
        walkability: &WalkabilityReport,
        locale: Locale,
    ) -> String {
        let t = locale.templates();
        let mut sections: Vec<String> = vec![t.title.to_string()];

        sections.push(self.walkable_section(t, walkability));

        let critical = self.visible(snapshot, SeverityTier::Critical);
        let high = self.visible(snapshot, SeverityTier::High);
        let medium = self.visible(snapshot, SeverityTier::Medium);
        let mut listed = critical.len() + high.len() + medium.len();

        for (header, items) in [
            (t.critical_header, &critical),
            (t.high_header, &high),
            (t.medium_header, &medium),
        ] {
            if !items.is_empty() {
                sections.push(self.item_section(t, header, items));
            }
        }

        if critical.is_empty() && high.is_empty() {
            let mut safe = self.visible(snapshot, SeverityTier::Safe);
            safe.truncate(self.config.max_safe_items);
            if !safe.is_empty() {
                listed += safe.len();
                sections.push(self.item_section(t, t.safe_header, &safe));
            }
        }

        if listed == 0 {
            sections.push(t.clear_scene.to_string());
        }

        let words = self.config.reply_word_target.to_string();
        sections.push(fill(t.closing, &[("words", words.as_str())]));

        debug!(
            "Composed {} prompt for frame {} ({} items listed)",
            locale, snapshot.sequence, listed
        );
        sections.join("\n\n")
    }

    /// Compose a prompt answering a spoken question against the latest frame
    pub fn compose_query(
        &self,
        snapshot: Option<&FrameSnapshot>,
        question: &str,
        locale: Locale,
    ) -> String {
        let t = locale.templates();
        let mut sections = vec![
            t.query_title.to_string(),
            fill(t.query_question, &[("question", question.trim())]),
        ];

        let scene = match snapshot {
            None => t.query_no_frame.to_string(),
            Some(snapshot) => {
                let mut items: Vec<&DetectionFacts> = snapshot
                    .entries
                    .iter()
                    .filter(|e| e.detection.clamped_confidence() >= self.config.min_confidence)
                    .collect();
                items.sort_by(|a, b| {
                    b.tier
                        .cmp(&a.tier)
                        .then_with(|| a.priority.cmp(&b.priority))
                        .then_with(|| {
                            a.position
                                .distance_meters
                                .total_cmp(&b.position.distance_meters)
                        })
                });
                items.truncate(self.config.max_query_items);

                if items.is_empty() {
                    t.clear_scene.to_string()
                } else {
                    self.item_section(t, t.query_scene_header, &items)
                }
            }
        };
        sections.push(scene);
        let words = self.config.reply_word_target.to_string();
        sections.push(fill(t.query_closing, &[("words", words.as_str())]));

        sections.join("\n\n")
    }

    fn visible<'a>(&self, snapshot: &'a FrameSnapshot, tier: SeverityTier) -> Vec<&'a DetectionFacts> {
        snapshot
            .tier(tier)
            .into_iter()
            .filter(|e| e.detection.clamped_confidence() >= self.config.min_confidence)
            .collect()
    }

    fn walkable_section(&self, t: &Templates, report: &WalkabilityReport) -> String {
        let mut lines = vec![t.walkable_header.to_string()];
        for corridor in [Corridor::Left, Corridor::Center, Corridor::Right] {
            let state = report.corridor(corridor);
            let clearance = format!("{:.1}", state.clearance_m);
            lines.push(fill(
                t.corridor_line,
                &[
                    ("corridor", t.corridor(corridor)),
                    ("state", if state.blocked { t.blocked } else { t.open }),
                    ("clearance", clearance.as_str()),
                ],
            ));
        }
        lines.push(fill(t.heading_line, &[("heading", t.heading(report.heading))]));
        lines.join("\n")
    }

    fn item_section(&self, t: &Templates, header: &str, items: &[&DetectionFacts]) -> String {
        let mut lines = Vec::with_capacity(items.len() + 1);
        lines.push(header.to_string());
        lines.extend(items.iter().map(|item| render_item(t, item)));
        lines.join("\n")
    }
}

fn render_item(t: &Templates, item: &DetectionFacts) -> String {
    let pos = &item.position;
    let confidence = ((item.detection.clamped_confidence() * 100.0).round() as u32).to_string();
    let meters = format!("{:.1}", pos.distance_meters);
    fill(
        t.item_line,
        &[
            ("label", item.label.as_str()),
            ("confidence", confidence.as_str()),
            ("zone", t.zone(pos.horizontal_zone)),
            ("vertical", t.vertical(pos.vertical_zone)),
            ("meters", meters.as_str()),
            ("band", t.band(pos.distance_band)),
            ("category", t.category(item.category)),
            ("urgency", t.urgency(pos.urgency)),
            ("action", t.instruction(pos.horizontal_zone)),
        ],
    )
}
