//! PageSpeed-style performance reports.
//!
//! Raw lab measurements are classified against fixed Web Vitals thresholds and
//! assembled into display-ready records: metric cards, colored category
//! scores, a Core Web Vitals verdict, and static recommendation lists.

pub mod config;
pub mod core;
pub mod error;

pub use crate::core::catalog::{RecommendationCatalog, build_general_recommendations};
pub use crate::core::classify::{Direction, Thresholds, classify};
pub use crate::core::metrics::{MetricInfo, MetricKind, build_metric_info};
pub use crate::core::report::{FinalReport, Severity};
pub use crate::core::score::{ScoreColor, score_to_color};
pub use crate::core::summary::{SummaryEntry, technical_summary};
pub use crate::core::{PerformanceMetrics, build_report};
pub use crate::error::ReportError;
