//! # Resource Evaluation Engine
//!
//! Evaluates an external web resource (a video or book URL) and produces a
//! structured report: normalized license metadata plus quality, adaptability
//! and reusability scores.
//!
//! ## Overview
//!
//! This crate handles:
//! - Resource classification by URL host patterns
//! - License metadata fetching from the video and document providers, with a
//!   session-scoped cache and degrade-in-place error handling
//! - Offline heuristic evaluation when no network is available
//! - Orchestration of the cache / online / offline data-sourcing paths over a
//!   persistent report store

pub mod adapter;
pub mod classify;
pub mod error;
pub mod license;
pub mod offline;
pub mod providers;
pub mod report;
pub mod scores;
pub mod service;

pub use adapter::LicenseProviderAdapter;
pub use classify::{classify, ResourceKind};
pub use error::{EvaluationError, Result};
pub use license::{AccessInfo, LicenseInfo};
pub use offline::OfflineEvaluator;
pub use report::EvaluationReport;
pub use service::EvaluationService;
