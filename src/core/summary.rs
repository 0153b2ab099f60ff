use crate::core::metrics::{MetricInfo, MetricKind};
use crate::core::report::{CoreWebVitalsAssessment, Severity};
use crate::core::score::{CategoryKind, CategoryScore};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SummaryEntry {
    pub title: String,
    pub detail: String,
}

impl SummaryEntry {
    fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
        }
    }
}

pub fn technical_summary(
    assessment: &CoreWebVitalsAssessment,
    metrics: &[&MetricInfo],
    scores: &[CategoryScore],
) -> Vec<SummaryEntry> {
    let find = |kind: MetricKind| metrics.iter().copied().find(|info| info.metric == kind);
    let flagged = |kind: MetricKind| find(kind).is_some_and(|info| info.severity != Severity::Good);
    let value = |kind: MetricKind| find(kind).map_or("n/a", |info| info.value.as_str());

    let mut entries = Vec::new();

    if let Some(worst) = assessment.failing.first().and_then(|kind| find(*kind)) {
        let detail = match worst.severity {
            Severity::Poor => format!(
                "The website fails Core Web Vitals primarily due to high {} ({}).",
                worst.metric.full_name(),
                worst.value
            ),
            _ => format!(
                "The website fails Core Web Vitals; {} ({}) needs improvement.",
                worst.metric.full_name(),
                worst.value
            ),
        };
        entries.push(SummaryEntry::new("Critical Issues", detail));
    }

    if flagged(MetricKind::Lcp) || flagged(MetricKind::Cls) {
        entries.push(SummaryEntry::new(
            "Image Optimization",
            "Images likely need optimization. Convert to modern formats (WebP/AVIF), \
             implement lazy loading, and specify dimensions to prevent layout shifts.",
        ));
    }

    if flagged(MetricKind::Lcp) || flagged(MetricKind::Fcp) {
        entries.push(SummaryEntry::new(
            "Loading Performance",
            format!(
                "LCP of {} and FCP of {} indicate the main content takes too long to appear.",
                value(MetricKind::Lcp),
                value(MetricKind::Fcp)
            ),
        ));
    }

    if flagged(MetricKind::Inp) {
        entries.push(SummaryEntry::new(
            "Responsiveness",
            format!(
                "INP of {} means the page is slow to respond to user interactions.",
                value(MetricKind::Inp)
            ),
        ));
    }

    if flagged(MetricKind::Ttfb) {
        entries.push(SummaryEntry::new(
            "Server Response",
            format!(
                "TTFB of {} suggests server optimization is needed.",
                value(MetricKind::Ttfb)
            ),
        ));
    }

    // the performance score aggregates the metrics above
    entries.extend(
        scores
            .iter()
            .filter(|score| score.category != CategoryKind::Performance)
            .filter(|score| score.color.severity() != Severity::Good)
            .map(|score| {
                SummaryEntry::new(
                    score.name.clone(),
                    format!("Score of {} needs improvement.", score.score),
                )
            }),
    );

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::metrics::build_metric_info;
    use crate::core::score::ScoreColor;

    fn info(kind: MetricKind, value: f64) -> MetricInfo {
        build_metric_info(kind, value).expect("valid measurement")
    }

    fn score(category: CategoryKind, value: u8, color: ScoreColor) -> CategoryScore {
        CategoryScore {
            category,
            name: category.label().to_string(),
            score: value,
            color,
            hex: color.hex(),
        }
    }

    #[test]
    fn names_worst_vital_with_its_value() {
        let lcp = info(MetricKind::Lcp, 2.8);
        let cls = info(MetricKind::Cls, 0.36);
        let vitals = vec![lcp.clone(), cls.clone()];
        let assessment = CoreWebVitalsAssessment::from_metrics(&vitals);

        let entries = technical_summary(&assessment, &[&lcp, &cls], &[]);
        assert_eq!(entries[0].title, "Critical Issues");
        assert_eq!(
            entries[0].detail,
            "The website fails Core Web Vitals primarily due to high Cumulative Layout Shift (0.36)."
        );
    }

    #[test]
    fn mentions_needs_improvement_when_nothing_is_poor() {
        let inp = info(MetricKind::Inp, 320.0);
        let assessment = CoreWebVitalsAssessment::from_metrics(std::slice::from_ref(&inp));

        let entries = technical_summary(&assessment, &[&inp], &[]);
        let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Critical Issues", "Responsiveness"]);
        assert_eq!(
            entries[0].detail,
            "The website fails Core Web Vitals; Interaction to Next Paint (320ms) needs improvement."
        );
        assert_eq!(
            entries[1].detail,
            "INP of 320ms means the page is slow to respond to user interactions."
        );
    }

    #[test]
    fn healthy_inputs_produce_no_entries() {
        let lcp = info(MetricKind::Lcp, 1.1);
        let ttfb = info(MetricKind::Ttfb, 0.2);
        let assessment = CoreWebVitalsAssessment::from_metrics(std::slice::from_ref(&lcp));
        let scores = [
            score(CategoryKind::Performance, 97, ScoreColor::Green),
            score(CategoryKind::Seo, 100, ScoreColor::Green),
        ];

        assert!(technical_summary(&assessment, &[&lcp, &ttfb], &scores).is_empty());
    }

    #[test]
    fn weak_performance_score_alone_adds_nothing() {
        let assessment = CoreWebVitalsAssessment::from_metrics(&[]);
        let scores = [
            score(CategoryKind::Performance, 40, ScoreColor::Red),
            score(CategoryKind::Accessibility, 69, ScoreColor::Amber),
        ];

        let entries = technical_summary(&assessment, &[], &scores);
        assert_eq!(
            entries,
            vec![SummaryEntry::new("Accessibility", "Score of 69 needs improvement.")]
        );
    }
}
