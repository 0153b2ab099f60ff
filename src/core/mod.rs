pub mod catalog;
pub mod classify;
pub mod metrics;
pub mod report;
pub mod score;
pub mod summary;

use crate::config::Config;
use crate::core::catalog::{RecommendationCatalog, build_general_recommendations};
use crate::core::metrics::{MetricInfo, MetricKind, build_metric_info_with};
use crate::core::report::{
    ConfigSummary, CoreWebVitalsAssessment, Counts, FinalReport, PriorityAction, Severity,
};
use crate::core::score::{CategoryScore, category_scores};
use crate::core::summary::technical_summary;
use crate::error::ReportError;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PerformanceMetrics {
    pub performance: u8,
    pub accessibility: u8,
    pub best_practices: u8,
    pub seo: u8,
    // lcp, fcp and ttfb in seconds, inp in milliseconds
    pub lcp: f64,
    pub inp: f64,
    pub cls: f64,
    pub fcp: f64,
    pub ttfb: f64,
}

impl Default for PerformanceMetrics {
    fn default() -> Self {
        Self {
            performance: 76,
            accessibility: 69,
            best_practices: 77,
            seo: 85,
            lcp: 2.8,
            inp: 156.0,
            cls: 0.36,
            fcp: 2.7,
            ttfb: 1.9,
        }
    }
}

impl PerformanceMetrics {
    pub fn value(&self, kind: MetricKind) -> f64 {
        match kind {
            MetricKind::Lcp => self.lcp,
            MetricKind::Inp => self.inp,
            MetricKind::Cls => self.cls,
            MetricKind::Fcp => self.fcp,
            MetricKind::Ttfb => self.ttfb,
        }
    }
}

pub fn build_report(
    metrics: &PerformanceMetrics,
    cfg: &Config,
) -> Result<FinalReport, ReportError> {
    let scores = category_scores(metrics, &cfg.score_bands)?;

    let mut core_web_vitals = Vec::new();
    let mut other_metrics = Vec::new();
    for kind in MetricKind::ALL {
        let info = build_metric_info_with(
            kind,
            metrics.value(kind),
            cfg.thresholds.for_metric(kind),
        )?;
        if kind.is_core_web_vital() {
            core_web_vitals.push(info);
        } else {
            other_metrics.push(info);
        }
    }

    let recommendations = build_general_recommendations();
    let assessment = CoreWebVitalsAssessment::from_metrics(&core_web_vitals);
    let all_metrics: Vec<&MetricInfo> = core_web_vitals.iter().chain(&other_metrics).collect();
    let priority_actions = priority_actions(&all_metrics, &scores, &recommendations);
    let summary = technical_summary(&assessment, &all_metrics, &scores);
    let counts = Counts::from_metrics(all_metrics.iter().copied());
    let exit = report::evaluate_exit(&all_metrics, &scores, cfg);

    info!(
        site = %cfg.site.url,
        passed = assessment.passed,
        poor = counts.poor,
        "assembled report"
    );

    Ok(FinalReport {
        site: cfg.site.clone(),
        scores,
        core_web_vitals,
        other_metrics,
        assessment,
        summary,
        priority_actions,
        recommendations,
        counts,
        config: ConfigSummary {
            fail_on: cfg.general.fail_on,
            min_performance: cfg.general.min_performance,
        },
        exit,
    })
}

fn priority_actions(
    metrics: &[&MetricInfo],
    scores: &[CategoryScore],
    catalog: &RecommendationCatalog,
) -> Vec<PriorityAction> {
    let mut flagged: Vec<&MetricInfo> = metrics
        .iter()
        .copied()
        .filter(|info| info.severity != Severity::Good)
        .collect();
    flagged.sort_by_key(|info| info.severity.rank());

    let mut actions: Vec<PriorityAction> = flagged
        .into_iter()
        .filter_map(|info| {
            let first = info.recommendations.first()?;
            Some(PriorityAction {
                severity: info.severity,
                title: format!("Improve {}", info.metric.full_name()),
                action: first.clone(),
            })
        })
        .collect();

    let mut weak_scores: Vec<&CategoryScore> = scores
        .iter()
        .filter(|score| score.color.severity() != Severity::Good)
        .collect();
    weak_scores.sort_by_key(|score| (score.color.severity().rank(), score.score));

    actions.extend(weak_scores.into_iter().filter_map(|score| {
        let section = score.category.catalog_category()?;
        let first = catalog.items(section).first()?;
        Some(PriorityAction {
            severity: score.color.severity(),
            title: format!("Improve {} ({})", score.name, score.score),
            action: first.to_string(),
        })
    }));

    actions
}
