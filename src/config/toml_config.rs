use crate::core::{ConfigProvider, Distance, PartSpec};
use crate::utils::error::{Result, WearError};
use crate::utils::validation::{self, Validate, MAX_DISTANCE};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CHART_WIDTH: usize = 40;
pub const DEFAULT_OUTPUT_PATH: &str = "./reports";
pub const REPORT_FORMATS: [&str; 3] = ["csv", "tsv", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Drop the built-in parts and use only `parts`.
    #[serde(default)]
    pub replace_defaults: bool,
    #[serde(default)]
    pub parts: Vec<PartSpec>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    pub max_distance: Option<Distance>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartConfig {
    pub width: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    pub output_path: Option<String>,
    pub format: Option<String>,
}

impl TomlConfig {
    /// Loads and parses a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(WearError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| WearError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        for part in &self.catalog.parts {
            validation::validate_non_empty_string("catalog.parts.name", &part.name)?;
            validation::validate_range(
                "catalog.parts.lifespan_km",
                part.lifespan_distance,
                1,
                MAX_DISTANCE,
            )?;
        }

        if self.catalog.replace_defaults && self.catalog.parts.is_empty() {
            return Err(WearError::ConfigValidationError {
                field: "catalog.replace_defaults".to_string(),
                message: "replacing the built-in parts requires at least one [[catalog.parts]] entry"
                    .to_string(),
            });
        }

        if let Some(max) = self.input.max_distance {
            validation::validate_range("input.max_distance", max, 1, MAX_DISTANCE)?;
        }

        if let Some(width) = self.chart.width {
            validation::validate_range("chart.width", width, 10, 200)?;
        }

        if let Some(path) = &self.report.output_path {
            validation::validate_path("report.output_path", path)?;
        }

        if let Some(format) = &self.report.format {
            if !REPORT_FORMATS.contains(&format.as_str()) {
                return Err(WearError::InvalidConfigValueError {
                    field: "report.format".to_string(),
                    value: format.clone(),
                    reason: format!(
                        "Unsupported format. Valid formats: {}",
                        REPORT_FORMATS.join(", ")
                    ),
                });
            }
        }

        Ok(())
    }

    pub fn report_format(&self) -> Option<&str> {
        self.report.format.as_deref()
    }
}

impl ConfigProvider for TomlConfig {
    fn extra_parts(&self) -> &[PartSpec] {
        &self.catalog.parts
    }

    fn replace_default_parts(&self) -> bool {
        self.catalog.replace_defaults
    }

    fn max_distance(&self) -> Distance {
        self.input.max_distance.unwrap_or(MAX_DISTANCE)
    }

    fn chart_width(&self) -> usize {
        self.chart.width.unwrap_or(DEFAULT_CHART_WIDTH)
    }

    fn output_path(&self) -> &str {
        self.report
            .output_path
            .as_deref()
            .unwrap_or(DEFAULT_OUTPUT_PATH)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
