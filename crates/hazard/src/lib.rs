//! Hazard Classification
//!
//! Maps detector labels to hazard categories and combines the category
//! with distance and path membership into an obstacle priority
//! (1 = most urgent, 4 = least).

mod classifier;

pub use classifier::{classify, normalize_label, priority, HazardCategory, Priority};
