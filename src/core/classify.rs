use crate::core::report::Severity;
use crate::error::ReportError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    #[default]
    LowerIsBetter,
    HigherIsBetter,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Thresholds {
    pub good: f64,
    pub poor: f64,
}

impl Thresholds {
    pub const fn new(good: f64, poor: f64) -> Self {
        Self { good, poor }
    }

    pub fn validate(&self, direction: Direction) -> Result<(), String> {
        if !self.good.is_finite() || !self.poor.is_finite() {
            return Err(format!(
                "thresholds must be finite (good = {}, poor = {})",
                self.good, self.poor
            ));
        }

        let ordered = match direction {
            Direction::LowerIsBetter => self.good <= self.poor,
            Direction::HigherIsBetter => self.good >= self.poor,
        };
        if !ordered {
            return Err(format!(
                "good threshold {} must be {} poor threshold {}",
                self.good,
                match direction {
                    Direction::LowerIsBetter => "<=",
                    Direction::HigherIsBetter => ">=",
                },
                self.poor
            ));
        }

        Ok(())
    }
}

// Values sitting exactly on a threshold fall into the better band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bands {
    pub thresholds: Thresholds,
    pub direction: Direction,
}

impl Bands {
    pub const fn new(thresholds: Thresholds, direction: Direction) -> Self {
        Self {
            thresholds,
            direction,
        }
    }

    pub fn evaluate(&self, value: f64) -> Result<Severity, ReportError> {
        if !value.is_finite() {
            return Err(ReportError::invalid_measurement("value", value));
        }
        Ok(self.band(value))
    }

    // callers must have rejected non-finite input
    pub(crate) fn band(&self, value: f64) -> Severity {
        let Thresholds { good, poor } = self.thresholds;
        match self.direction {
            Direction::LowerIsBetter => {
                if value <= good {
                    Severity::Good
                } else if value <= poor {
                    Severity::NeedsImprovement
                } else {
                    Severity::Poor
                }
            }
            Direction::HigherIsBetter => {
                if value >= good {
                    Severity::Good
                } else if value >= poor {
                    Severity::NeedsImprovement
                } else {
                    Severity::Poor
                }
            }
        }
    }
}

pub fn classify(
    value: f64,
    thresholds: Thresholds,
    direction: Direction,
) -> Result<Severity, ReportError> {
    Bands::new(thresholds, direction).evaluate(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LCP: Thresholds = Thresholds::new(2.5, 4.0);
    const INP: Thresholds = Thresholds::new(200.0, 500.0);

    #[test]
    fn lower_is_better_boundaries_favor_better_band() {
        let lower = Direction::LowerIsBetter;
        assert_eq!(classify(2.5, LCP, lower), Ok(Severity::Good));
        assert_eq!(classify(2.500001, LCP, lower), Ok(Severity::NeedsImprovement));
        assert_eq!(classify(4.0, LCP, lower), Ok(Severity::NeedsImprovement));
        assert_eq!(classify(4.000001, LCP, lower), Ok(Severity::Poor));

        assert_eq!(classify(200.0, INP, lower), Ok(Severity::Good));
        assert_eq!(classify(500.0, INP, lower), Ok(Severity::NeedsImprovement));
        assert_eq!(classify(501.0, INP, lower), Ok(Severity::Poor));
    }

    #[test]
    fn higher_is_better_boundaries_favor_better_band() {
        let bands = Thresholds::new(90.0, 50.0);
        let higher = Direction::HigherIsBetter;
        assert_eq!(classify(90.0, bands, higher), Ok(Severity::Good));
        assert_eq!(classify(89.9, bands, higher), Ok(Severity::NeedsImprovement));
        assert_eq!(classify(50.0, bands, higher), Ok(Severity::NeedsImprovement));
        assert_eq!(classify(49.9, bands, higher), Ok(Severity::Poor));
    }

    #[test]
    fn accepts_any_finite_value() {
        let lower = Direction::LowerIsBetter;
        assert_eq!(classify(-3.0, LCP, lower), Ok(Severity::Good));
        assert_eq!(classify(0.0, LCP, lower), Ok(Severity::Good));
        assert_eq!(classify(f64::MAX, LCP, lower), Ok(Severity::Poor));
    }

    #[test]
    fn rejects_non_finite_values() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = classify(value, LCP, Direction::LowerIsBetter);
            assert!(
                matches!(result, Err(ReportError::InvalidMeasurement { .. })),
                "expected InvalidMeasurement for {value}"
            );
        }

        let err = classify(f64::NAN, LCP, Direction::LowerIsBetter).unwrap_err();
        assert_eq!(err.to_string(), "invalid measurement for value: NaN");
    }

    #[test]
    fn repeated_calls_agree() {
        for value in [0.0, 1.2, 2.5, 3.3, 4.0, 9.9] {
            let first = classify(value, LCP, Direction::LowerIsBetter);
            let second = classify(value, LCP, Direction::LowerIsBetter);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn validates_threshold_order() {
        assert!(LCP.validate(Direction::LowerIsBetter).is_ok());
        assert!(LCP.validate(Direction::HigherIsBetter).is_err());
        assert!(
            Thresholds::new(f64::NAN, 4.0)
                .validate(Direction::LowerIsBetter)
                .is_err()
        );
        assert!(
            Thresholds::new(3.0, 3.0)
                .validate(Direction::LowerIsBetter)
                .is_ok()
        );
    }
}
