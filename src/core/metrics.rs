use crate::core::classify::{Bands, Direction, Thresholds};
use crate::core::report::Severity;
use crate::error::ReportError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

pub const LCP_THRESHOLDS: Thresholds = Thresholds::new(2.5, 4.0);
pub const INP_THRESHOLDS: Thresholds = Thresholds::new(200.0, 500.0);
pub const CLS_THRESHOLDS: Thresholds = Thresholds::new(0.1, 0.25);
pub const FCP_THRESHOLDS: Thresholds = Thresholds::new(1.8, 3.0);
pub const TTFB_THRESHOLDS: Thresholds = Thresholds::new(0.8, 1.8);

const LCP_RECOMMENDATIONS: &[&str] = &[
    "Optimize and compress images (use WebP format)",
    "Implement lazy loading for images",
    "Remove render-blocking JavaScript and CSS",
    "Use a Content Delivery Network (CDN)",
    "Implement server-side rendering or static site generation",
    "Minimize CSS and JavaScript file sizes",
    "Preload critical resources",
];

const INP_RECOMMENDATIONS: &[&str] = &[
    "Optimize JavaScript execution time",
    "Break up long tasks into smaller chunks",
    "Use web workers for heavy computations",
    "Implement code splitting",
    "Minimize main thread work",
    "Defer non-critical JavaScript",
];

const CLS_RECOMMENDATIONS: &[&str] = &[
    "Always include size attributes on images and videos",
    "Reserve space for ad slots and embeds",
    "Avoid inserting content above existing content",
    "Use CSS aspect-ratio for responsive images",
    "Preload fonts and use font-display: swap",
    "Ensure buttons and UI elements have fixed dimensions",
];

const FCP_RECOMMENDATIONS: &[&str] = &[
    "Eliminate render-blocking resources",
    "Minify CSS and JavaScript",
    "Remove unused CSS",
    "Implement efficient cache policies",
    "Reduce server response times",
];

const TTFB_RECOMMENDATIONS: &[&str] = &[
    "Use a faster web host or upgrade hosting plan",
    "Implement server-side caching",
    "Use a CDN to serve static assets",
    "Optimize database queries",
    "Enable HTTP/2 or HTTP/3",
    "Minimize server-side processing time",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Seconds,
    Milliseconds,
    Unitless,
}

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Lcp,
    Inp,
    Cls,
    Fcp,
    Ttfb,
}

impl MetricKind {
    pub const ALL: [MetricKind; 5] = [Self::Lcp, Self::Inp, Self::Cls, Self::Fcp, Self::Ttfb];
    pub const CORE_WEB_VITALS: [MetricKind; 3] = [Self::Lcp, Self::Inp, Self::Cls];

    pub fn abbrev(self) -> &'static str {
        match self {
            Self::Lcp => "LCP",
            Self::Inp => "INP",
            Self::Cls => "CLS",
            Self::Fcp => "FCP",
            Self::Ttfb => "TTFB",
        }
    }

    pub fn full_name(self) -> &'static str {
        match self {
            Self::Lcp => "Largest Contentful Paint",
            Self::Inp => "Interaction to Next Paint",
            Self::Cls => "Cumulative Layout Shift",
            Self::Fcp => "First Contentful Paint",
            Self::Ttfb => "Time to First Byte",
        }
    }

    pub fn display_name(self) -> String {
        format!("{} ({})", self.full_name(), self.abbrev())
    }

    pub fn unit(self) -> Unit {
        match self {
            Self::Lcp | Self::Fcp | Self::Ttfb => Unit::Seconds,
            Self::Inp => Unit::Milliseconds,
            Self::Cls => Unit::Unitless,
        }
    }

    pub fn default_thresholds(self) -> Thresholds {
        match self {
            Self::Lcp => LCP_THRESHOLDS,
            Self::Inp => INP_THRESHOLDS,
            Self::Cls => CLS_THRESHOLDS,
            Self::Fcp => FCP_THRESHOLDS,
            Self::Ttfb => TTFB_THRESHOLDS,
        }
    }

    pub fn direction(self) -> Direction {
        Direction::LowerIsBetter
    }

    pub fn is_core_web_vital(self) -> bool {
        Self::CORE_WEB_VITALS.contains(&self)
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Lcp => {
                "Measures loading performance. LCP marks the time at which the largest text or image is painted."
            }
            Self::Inp => {
                "Measures responsiveness. INP assesses how quickly a page responds to user interactions."
            }
            Self::Cls => {
                "Measures visual stability. CLS quantifies unexpected layout shifts during page load."
            }
            Self::Fcp => "Measures when the first content appears on screen.",
            Self::Ttfb => "Measures server response time and network latency.",
        }
    }

    pub fn recommendations(self) -> &'static [&'static str] {
        match self {
            Self::Lcp => LCP_RECOMMENDATIONS,
            Self::Inp => INP_RECOMMENDATIONS,
            Self::Cls => CLS_RECOMMENDATIONS,
            Self::Fcp => FCP_RECOMMENDATIONS,
            Self::Ttfb => TTFB_RECOMMENDATIONS,
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbrev())
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricInfo {
    pub metric: MetricKind,
    pub name: String,
    pub value: String,
    pub severity: Severity,
    pub description: String,
    pub recommendations: Vec<String>,
}

pub fn format_value(kind: MetricKind, value: f64) -> String {
    match kind.unit() {
        Unit::Seconds => format!("{:.1}s", round_half_up(value, 1)),
        Unit::Milliseconds => format!("{:.0}ms", round_half_up(value, 0)),
        Unit::Unitless => format!("{:.2}", round_half_up(value, 2)),
    }
}

// `{:.N}` alone rounds ties to even; dashboards round them up.
fn round_half_up(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    let rounded = (value * factor).round() / factor;
    // folds -0.0 into 0.0
    if rounded == 0.0 { 0.0 } else { rounded }
}

pub fn build_metric_info(kind: MetricKind, value: f64) -> Result<MetricInfo, ReportError> {
    build_metric_info_with(kind, value, kind.default_thresholds())
}

pub fn build_metric_info_with(
    kind: MetricKind,
    value: f64,
    thresholds: Thresholds,
) -> Result<MetricInfo, ReportError> {
    if !value.is_finite() || (kind.unit() != Unit::Unitless && value < 0.0) {
        return Err(ReportError::invalid_measurement(kind.abbrev(), value));
    }

    let severity = Bands::new(thresholds, kind.direction())
        .evaluate(value)
        .map_err(|_| ReportError::invalid_measurement(kind.abbrev(), value))?;
    debug!(metric = %kind, value, severity = severity.as_str(), "classified metric");

    Ok(MetricInfo {
        metric: kind,
        name: kind.display_name(),
        value: format_value(kind, value),
        severity,
        description: kind.description().to_string(),
        recommendations: kind
            .recommendations()
            .iter()
            .map(|item| item.to_string())
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_values_per_unit() {
        assert_eq!(format_value(MetricKind::Lcp, 2.8), "2.8s");
        assert_eq!(format_value(MetricKind::Inp, 156.0), "156ms");
        assert_eq!(format_value(MetricKind::Cls, 0.36), "0.36");
        assert_eq!(format_value(MetricKind::Ttfb, 1.9), "1.9s");
        assert_eq!(format_value(MetricKind::Fcp, 3.0), "3.0s");
    }

    #[test]
    fn formats_ties_upward() {
        assert_eq!(format_value(MetricKind::Lcp, 2.25), "2.3s");
        assert_eq!(format_value(MetricKind::Fcp, 0.25), "0.3s");
        assert_eq!(format_value(MetricKind::Cls, 0.125), "0.13");
        assert_eq!(format_value(MetricKind::Inp, 156.5), "157ms");
    }

    #[test]
    fn formats_negative_zero_without_sign() {
        assert_eq!(format_value(MetricKind::Ttfb, -0.0), "0.0s");
        assert_eq!(format_value(MetricKind::Cls, -0.001), "0.00");

        let info = build_metric_info(MetricKind::Ttfb, -0.0).expect("zero is a valid time");
        assert_eq!(info.value, "0.0s");
        assert_eq!(info.severity, Severity::Good);
    }

    #[test]
    fn headline_cls_is_poor() {
        let info = build_metric_info(MetricKind::Cls, 0.36).expect("valid cls");
        assert_eq!(info.severity, Severity::Poor);
        assert_eq!(info.name, "Cumulative Layout Shift (CLS)");
        assert_eq!(info.value, "0.36");
    }

    #[test]
    fn recommendation_counts_match_metric() {
        let counts: Vec<usize> = MetricKind::ALL
            .iter()
            .map(|kind| kind.recommendations().len())
            .collect();
        assert_eq!(counts, vec![7, 6, 6, 5, 6]);
    }

    #[test]
    fn builds_full_record() {
        let info = build_metric_info(MetricKind::Lcp, 2.8).expect("valid lcp");
        assert_eq!(info.metric, MetricKind::Lcp);
        assert_eq!(info.name, "Largest Contentful Paint (LCP)");
        assert_eq!(info.value, "2.8s");
        assert_eq!(info.severity, Severity::NeedsImprovement);
        assert!(info.description.starts_with("Measures loading performance."));
        assert_eq!(
            info.recommendations.first().map(String::as_str),
            Some("Optimize and compress images (use WebP format)")
        );
    }

    #[test]
    fn rejects_non_finite_and_negative_times() {
        let err = build_metric_info(MetricKind::Ttfb, f64::INFINITY).unwrap_err();
        assert_eq!(
            err,
            ReportError::InvalidMeasurement {
                metric: "TTFB".to_string(),
                value: f64::INFINITY,
            }
        );
        assert!(build_metric_info(MetricKind::Lcp, -0.5).is_err());
        assert!(build_metric_info(MetricKind::Inp, f64::NAN).is_err());
    }

    #[test]
    fn custom_thresholds_override_defaults() {
        let strict = Thresholds::new(2.0, 2.5);
        let info = build_metric_info_with(MetricKind::Lcp, 2.8, strict).expect("valid lcp");
        assert_eq!(info.severity, Severity::Poor);
    }

    #[test]
    fn splits_core_web_vitals() {
        let core: Vec<MetricKind> = MetricKind::ALL
            .into_iter()
            .filter(|kind| kind.is_core_web_vital())
            .collect();
        assert_eq!(core, MetricKind::CORE_WEB_VITALS.to_vec());
    }
}
