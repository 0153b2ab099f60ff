use crate::core::PerformanceMetrics;
use crate::core::classify::Thresholds;
use crate::core::metrics::MetricKind;
use crate::core::score::ScoreBands;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "pagescore.toml";

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub site: SiteConfig,
    pub thresholds: ThresholdsConfig,
    pub score_bands: ScoreBands,
    pub measurements: PerformanceMetrics,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub json: bool,
    pub fail_on: FailOn,
    pub min_performance: u8,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            json: false,
            fail_on: FailOn::Poor,
            min_performance: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FailOn {
    #[default]
    Poor,
    NeedsImprovement,
    None,
}

impl fmt::Display for FailOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Poor => write!(f, "poor"),
            Self::NeedsImprovement => write!(f, "needs-improvement"),
            Self::None => write!(f, "none"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    pub url: String,
    pub device: Device,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: "ecoleglobale.com".to_string(),
            device: Device::Mobile,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    #[default]
    Mobile,
    Desktop,
}

impl Device {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mobile => write!(f, "Mobile"),
            Self::Desktop => write!(f, "Desktop"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThresholdsConfig {
    pub lcp: Thresholds,
    pub inp: Thresholds,
    pub cls: Thresholds,
    pub fcp: Thresholds,
    pub ttfb: Thresholds,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            lcp: MetricKind::Lcp.default_thresholds(),
            inp: MetricKind::Inp.default_thresholds(),
            cls: MetricKind::Cls.default_thresholds(),
            fcp: MetricKind::Fcp.default_thresholds(),
            ttfb: MetricKind::Ttfb.default_thresholds(),
        }
    }
}

impl ThresholdsConfig {
    pub fn for_metric(&self, kind: MetricKind) -> Thresholds {
        match kind {
            MetricKind::Lcp => self.lcp,
            MetricKind::Inp => self.inp,
            MetricKind::Cls => self.cls,
            MetricKind::Fcp => self.fcp,
            MetricKind::Ttfb => self.ttfb,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        for kind in MetricKind::ALL {
            if let Err(reason) = self.thresholds.for_metric(kind).validate(kind.direction()) {
                bail!("invalid [thresholds.{}]: {}", kind.to_string().to_lowercase(), reason);
            }
        }
        if let Err(reason) = self.score_bands.validate() {
            bail!("invalid [score_bands]: {}", reason);
        }
        if self.general.min_performance > 100 {
            bail!(
                "invalid [general]: min_performance {} exceeds 100",
                self.general.min_performance
            );
        }
        Ok(())
    }
}

pub fn load_config(cli_config_path: Option<&Path>, cwd: &Path) -> Result<LoadedConfig> {
    if let Some(path) = cli_config_path {
        if !path.exists() {
            bail!(
                "config file not found at {} (passed with --config)",
                path.display()
            );
        }

        return Ok(LoadedConfig {
            config: read_config(path)?,
        });
    }

    let local_path = cwd.join(CONFIG_FILE_NAME);
    if local_path.exists() {
        return Ok(LoadedConfig {
            config: read_config(&local_path)?,
        });
    }

    debug!("no {} found, using defaults", CONFIG_FILE_NAME);
    Ok(LoadedConfig {
        config: Config::default(),
    })
}

pub fn write_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!(
            "refusing to overwrite existing config file: {}",
            path.display()
        );
    }

    let content = default_config_toml()?;
    fs::write(path, content).with_context(|| format!("failed writing {}", path.display()))?;
    Ok(())
}

pub fn default_config_toml() -> Result<String> {
    toml::to_string_pretty(&Config::default()).context("failed to serialize default config")
}

// `.json` files are parsed as JSON, anything else as TOML
pub fn load_measurements(path: &Path) -> Result<PerformanceMetrics> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed reading measurements file {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let metrics = if is_json {
        serde_json::from_str::<PerformanceMetrics>(&content)
            .with_context(|| format!("failed parsing measurements file {}", path.display()))?
    } else {
        toml::from_str::<PerformanceMetrics>(&content)
            .with_context(|| format!("failed parsing measurements file {}", path.display()))?
    };
    Ok(metrics)
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed reading config file {}", path.display()))?;
    let config = toml::from_str::<Config>(&content)
        .with_context(|| format!("failed parsing config file {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid config file {}", path.display()))?;
    Ok(config)
}
