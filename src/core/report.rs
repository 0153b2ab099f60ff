use crate::config::{Config, FailOn, SiteConfig};
use crate::core::catalog::RecommendationCatalog;
use crate::core::metrics::{MetricInfo, MetricKind};
use crate::core::score::{CategoryKind, CategoryScore, ScoreColor};
use crate::core::summary::SummaryEntry;
use colored::Colorize;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Good,
    NeedsImprovement,
    Poor,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::NeedsImprovement => "needs-improvement",
            Self::Poor => "poor",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::NeedsImprovement => "Needs Improvement",
            Self::Poor => "Poor",
        }
    }

    pub fn meets_fail_on(self, fail_on: FailOn) -> bool {
        match fail_on {
            FailOn::None => false,
            FailOn::Poor => matches!(self, Self::Poor),
            FailOn::NeedsImprovement => matches!(self, Self::Poor | Self::NeedsImprovement),
        }
    }

    // worst first
    pub fn rank(self) -> u8 {
        match self {
            Self::Poor => 0,
            Self::NeedsImprovement => 1,
            Self::Good => 2,
        }
    }

    fn colored(self) -> String {
        let tag = self.label().to_uppercase();
        match self {
            Self::Good => tag.green().bold().to_string(),
            Self::NeedsImprovement => tag.yellow().bold().to_string(),
            Self::Poor => tag.red().bold().to_string(),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Counts {
    pub good: usize,
    pub needs_improvement: usize,
    pub poor: usize,
    pub total: usize,
}

impl Counts {
    pub fn from_metrics<'a>(metrics: impl IntoIterator<Item = &'a MetricInfo>) -> Self {
        let mut counts = Self::default();
        for metric in metrics {
            match metric.severity {
                Severity::Good => counts.good += 1,
                Severity::NeedsImprovement => counts.needs_improvement += 1,
                Severity::Poor => counts.poor += 1,
            }
            counts.total += 1;
        }
        counts
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CoreWebVitalsAssessment {
    pub passed: bool,
    pub failing: Vec<MetricKind>,
}

impl CoreWebVitalsAssessment {
    pub fn from_metrics(core_web_vitals: &[MetricInfo]) -> Self {
        let mut failing: Vec<&MetricInfo> = core_web_vitals
            .iter()
            .filter(|info| info.severity != Severity::Good)
            .collect();
        failing.sort_by_key(|info| info.severity.rank());

        Self {
            passed: failing.is_empty(),
            failing: failing.into_iter().map(|info| info.metric).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PriorityAction {
    pub severity: Severity,
    pub title: String,
    pub action: String,
}

#[derive(Debug, Clone)]
pub struct ExitStatus {
    pub ok: bool,
    pub reasons: Vec<String>,
}

impl ExitStatus {
    pub fn reason_line(&self) -> String {
        self.reasons.join("; ")
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigSummary {
    pub fail_on: FailOn,
    pub min_performance: u8,
}

#[derive(Debug, Clone)]
pub struct FinalReport {
    pub site: SiteConfig,
    pub scores: Vec<CategoryScore>,
    pub core_web_vitals: Vec<MetricInfo>,
    pub other_metrics: Vec<MetricInfo>,
    pub assessment: CoreWebVitalsAssessment,
    pub summary: Vec<SummaryEntry>,
    pub priority_actions: Vec<PriorityAction>,
    pub recommendations: RecommendationCatalog,
    pub counts: Counts,
    pub config: ConfigSummary,
    pub exit: ExitStatus,
}

impl FinalReport {
    pub fn metrics(&self) -> impl Iterator<Item = &MetricInfo> {
        self.core_web_vitals.iter().chain(self.other_metrics.iter())
    }

    pub fn metric(&self, kind: MetricKind) -> Option<&MetricInfo> {
        self.metrics().find(|info| info.metric == kind)
    }

    pub fn score(&self, category: CategoryKind) -> Option<&CategoryScore> {
        self.scores.iter().find(|score| score.category == category)
    }

    pub fn footer(&self) -> String {
        format!(
            "Analysis based on PageSpeed Insights data for {} performance",
            self.site.device.as_str()
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub site: SiteConfig,
    pub scores: Vec<CategoryScore>,
    pub core_web_vitals: Vec<MetricInfo>,
    pub other_metrics: Vec<MetricInfo>,
    pub assessment: CoreWebVitalsAssessment,
    pub summary: Vec<SummaryEntry>,
    pub priority_actions: Vec<PriorityAction>,
    pub recommendations: RecommendationCatalog,
    pub counts: Counts,
    pub config: ConfigSummary,
}

impl From<&FinalReport> for JsonReport {
    fn from(report: &FinalReport) -> Self {
        Self {
            site: report.site.clone(),
            scores: report.scores.clone(),
            core_web_vitals: report.core_web_vitals.clone(),
            other_metrics: report.other_metrics.clone(),
            assessment: report.assessment.clone(),
            summary: report.summary.clone(),
            priority_actions: report.priority_actions.clone(),
            recommendations: report.recommendations,
            counts: report.counts.clone(),
            config: report.config.clone(),
        }
    }
}

pub fn evaluate_exit(
    metrics: &[&MetricInfo],
    scores: &[CategoryScore],
    cfg: &Config,
) -> ExitStatus {
    let mut reasons = Vec::new();

    let performance = scores
        .iter()
        .find(|score| score.category == CategoryKind::Performance)
        .map(|score| score.score);
    if let Some(score) = performance {
        if score < cfg.general.min_performance {
            reasons.push(format!(
                "performance score {} is below min_performance {}",
                score, cfg.general.min_performance
            ));
        }
    }

    let failing: Vec<&str> = metrics
        .iter()
        .filter(|info| info.severity.meets_fail_on(cfg.general.fail_on))
        .map(|info| info.metric.abbrev())
        .collect();
    if !failing.is_empty() {
        reasons.push(match cfg.general.fail_on {
            FailOn::Poor => format!("poor metrics: {}", failing.join(", ")),
            FailOn::NeedsImprovement => {
                format!("metrics needing improvement: {}", failing.join(", "))
            }
            FailOn::None => String::new(),
        });
    }

    ExitStatus {
        ok: reasons.is_empty(),
        reasons,
    }
}

pub fn print_human(report: &FinalReport) {
    println!("{}", "PageSpeed Analysis Report".bold());
    println!("Website: {} ({})", report.site.url, report.site.device);

    println!();
    if report.assessment.passed {
        println!("Core Web Vitals Assessment: {}", "Passed".green().bold());
    } else {
        println!("Core Web Vitals Assessment: {}", "Failed".red().bold());
        for kind in &report.assessment.failing {
            if let Some(info) = report.metric(*kind) {
                let urgency = match info.severity {
                    Severity::Poor => "needs immediate attention",
                    _ => "needs improvement",
                };
                println!("  {} {}", kind.full_name(), urgency);
            }
        }
    }

    println!();
    println!("{}", "Performance Scores".bold());
    for score in &report.scores {
        println!("  {:<16}{}", score.name, colored_score(score.score, score.color));
    }

    print_metric_section("Core Web Vitals", &report.core_web_vitals);
    print_metric_section("Other Notable Metrics", &report.other_metrics);

    println!();
    print_catalog(&report.recommendations);

    if !report.summary.is_empty() {
        println!();
        println!("{}", "Technical Summary".bold());
        for entry in &report.summary {
            println!("  {}: {}", entry.title.bold(), entry.detail);
        }
    }

    if !report.priority_actions.is_empty() {
        println!();
        println!("{}", "Priority Action Items".bold());
        for (idx, item) in report.priority_actions.iter().enumerate() {
            println!(
                "{:>2}. [{}] {}: {}",
                idx + 1,
                item.severity.colored(),
                item.title,
                item.action
            );
        }
    }

    println!();
    println!("{}", report.footer().dimmed());

    println!();
    if report.exit.ok {
        println!("exit: OK");
    } else {
        println!("exit: FAILED ({})", report.exit.reason_line());
    }
}

pub fn print_metric_card(info: &MetricInfo) {
    println!(
        "[{}] {}: {}",
        info.severity.colored(),
        info.name,
        info.value.bold()
    );
    println!("{}", info.description);
    println!("recommendations:");
    for item in &info.recommendations {
        println!("  - {}", item);
    }
}

pub fn print_catalog(catalog: &RecommendationCatalog) {
    println!("{}", "General Recommendations".bold());
    for (category, items) in catalog.categories() {
        println!();
        println!("{}", category.title());
        for item in items {
            println!("  ✓ {}", item);
        }
    }
}

fn print_metric_section(title: &str, metrics: &[MetricInfo]) {
    if metrics.is_empty() {
        return;
    }

    println!();
    println!("{}", title.bold());
    for info in metrics {
        println!();
        print_metric_card(info);
    }
}

fn colored_score(score: u8, color: ScoreColor) -> String {
    let (r, g, b) = color.rgb();
    score.to_string().truecolor(r, g, b).bold().to_string()
}
