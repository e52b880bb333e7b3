//! # mind-core
//!
//! Core types and pure logic for MindEase.
//!
//! This crate provides the foundational pieces shared across the MindEase crates:
//! - The fixed set of mood labels and the mood → score table
//! - The `MoodEntry` record written to the mood log
//! - The keyword-based risk classifier and its `RiskCategory` result
//! - Static self-care content selected by risk category
//! - Cross-cutting error types
//!
//! Nothing in here touches the filesystem.

pub mod care;
pub mod errors;
pub mod mood;
pub mod risk;

pub use errors::CoreError;
pub use mood::{Mood, MoodEntry, DEFAULT_SCORE, score_for_label};
pub use risk::{Analysis, RiskCategory, analyze, classify};
