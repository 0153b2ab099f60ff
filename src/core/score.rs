use crate::core::PerformanceMetrics;
use crate::core::catalog::CatalogCategory;
use crate::core::classify::{Bands, Direction, Thresholds};
use crate::core::report::Severity;
use crate::error::ReportError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ScoreColor {
    Green,
    Amber,
    Red,
}

impl ScoreColor {
    pub fn hex(self) -> &'static str {
        match self {
            Self::Green => "#10b981",
            Self::Amber => "#f59e0b",
            Self::Red => "#ef4444",
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Green => (0x10, 0xb9, 0x81),
            Self::Amber => (0xf5, 0x9e, 0x0b),
            Self::Red => (0xef, 0x44, 0x44),
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            Self::Green => Severity::Good,
            Self::Amber => Severity::NeedsImprovement,
            Self::Red => Severity::Poor,
        }
    }
}

impl From<Severity> for ScoreColor {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Good => Self::Green,
            Severity::NeedsImprovement => Self::Amber,
            Severity::Poor => Self::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScoreBands {
    pub good: u8,
    pub poor: u8,
}

impl Default for ScoreBands {
    fn default() -> Self {
        Self { good: 90, poor: 50 }
    }
}

impl ScoreBands {
    pub fn validate(&self) -> Result<(), String> {
        if self.good > 100 {
            return Err(format!("good band {} exceeds 100", self.good));
        }
        if self.poor > self.good {
            return Err(format!(
                "poor band {} must not exceed good band {}",
                self.poor, self.good
            ));
        }
        Ok(())
    }

    pub fn color_for(&self, score: u8) -> ScoreColor {
        let bands = Bands::new(
            Thresholds::new(f64::from(self.good), f64::from(self.poor)),
            Direction::HigherIsBetter,
        );
        bands.band(f64::from(score)).into()
    }
}

pub fn score_to_color(score: u8) -> ScoreColor {
    ScoreBands::default().color_for(score)
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryKind {
    Performance,
    Accessibility,
    BestPractices,
    Seo,
}

impl CategoryKind {
    pub const ALL: [CategoryKind; 4] = [
        Self::Performance,
        Self::Accessibility,
        Self::BestPractices,
        Self::Seo,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Performance => "Performance",
            Self::Accessibility => "Accessibility",
            Self::BestPractices => "Best Practices",
            Self::Seo => "SEO",
        }
    }

    pub fn catalog_category(self) -> Option<CatalogCategory> {
        match self {
            Self::Performance => Some(CatalogCategory::Performance),
            Self::Accessibility => Some(CatalogCategory::Accessibility),
            Self::Seo => Some(CatalogCategory::Seo),
            Self::BestPractices => None,
        }
    }

    pub fn score_in(self, metrics: &PerformanceMetrics) -> u8 {
        match self {
            Self::Performance => metrics.performance,
            Self::Accessibility => metrics.accessibility,
            Self::BestPractices => metrics.best_practices,
            Self::Seo => metrics.seo,
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryScore {
    pub category: CategoryKind,
    pub name: String,
    pub score: u8,
    pub color: ScoreColor,
    pub hex: &'static str,
}

pub fn category_scores(
    metrics: &PerformanceMetrics,
    bands: &ScoreBands,
) -> Result<Vec<CategoryScore>, ReportError> {
    CategoryKind::ALL
        .into_iter()
        .map(|category| {
            let score = category.score_in(metrics);
            if score > 100 {
                return Err(ReportError::InvalidScore {
                    category: category.label().to_string(),
                    score,
                });
            }
            let color = bands.color_for(score);
            Ok(CategoryScore {
                category,
                name: category.label().to_string(),
                score,
                color,
                hex: color.hex(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_follow_three_bands() {
        assert_eq!(score_to_color(76), ScoreColor::Amber);
        assert_eq!(score_to_color(90), ScoreColor::Green);
        assert_eq!(score_to_color(49), ScoreColor::Red);
        assert_eq!(score_to_color(50), ScoreColor::Amber);
        assert_eq!(score_to_color(100), ScoreColor::Green);
        assert_eq!(score_to_color(0), ScoreColor::Red);
    }

    #[test]
    fn colors_keep_dashboard_hex_values() {
        assert_eq!(score_to_color(95).hex(), "#10b981");
        assert_eq!(score_to_color(60).hex(), "#f59e0b");
        assert_eq!(score_to_color(10).hex(), "#ef4444");
    }

    #[test]
    fn custom_bands_shift_colors() {
        let bands = ScoreBands { good: 80, poor: 60 };
        assert_eq!(bands.color_for(80), ScoreColor::Green);
        assert_eq!(bands.color_for(59), ScoreColor::Red);
        assert!(bands.validate().is_ok());
        assert!(ScoreBands { good: 40, poor: 60 }.validate().is_err());
        assert!(ScoreBands { good: 120, poor: 60 }.validate().is_err());
    }

    #[test]
    fn scores_all_four_categories() {
        let scores = category_scores(&PerformanceMetrics::default(), &ScoreBands::default())
            .expect("valid scores");
        let summary: Vec<(&str, u8, ScoreColor)> = scores
            .iter()
            .map(|s| (s.name.as_str(), s.score, s.color))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Performance", 76, ScoreColor::Amber),
                ("Accessibility", 69, ScoreColor::Amber),
                ("Best Practices", 77, ScoreColor::Amber),
                ("SEO", 85, ScoreColor::Amber),
            ]
        );
    }

    #[test]
    fn category_scores_carry_hex_color() {
        let metrics = PerformanceMetrics {
            performance: 95,
            seo: 30,
            ..PerformanceMetrics::default()
        };
        let scores = category_scores(&metrics, &ScoreBands::default()).expect("valid scores");
        let hexes: Vec<&str> = scores.iter().map(|s| s.hex).collect();
        assert_eq!(hexes, vec!["#10b981", "#f59e0b", "#f59e0b", "#ef4444"]);
    }

    #[test]
    fn rejects_scores_above_hundred() {
        let metrics = PerformanceMetrics {
            seo: 101,
            ..PerformanceMetrics::default()
        };
        let err = category_scores(&metrics, &ScoreBands::default()).unwrap_err();
        assert_eq!(
            err,
            ReportError::InvalidScore {
                category: "SEO".to_string(),
                score: 101,
            }
        );
    }
}
