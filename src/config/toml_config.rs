use crate::core::ConfigProvider;
use crate::utils::error::{DrillError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_LOWER: u64 = 2;
pub const DEFAULT_UPPER: u64 = 100;
pub const DEFAULT_MAX_INPUT_RETRIES: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub drill: DrillInfo,
    pub classifier: Option<ClassifierConfig>,
    pub perfect: Option<PerfectConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillInfo {
    pub name: String,
    pub description: String,
    pub version: String,
    pub execution_order: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    pub max_input_retries: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerfectConfig {
    pub lower: Option<u64>,
    pub upper: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DrillError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DrillError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${REPORT_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("drill.name", &self.drill.name)?;
        validation::validate_exercise_names("drill.execution_order", &self.drill.execution_order)?;

        if let Some(classifier) = &self.classifier {
            if let Some(retries) = classifier.max_input_retries {
                validation::validate_positive_number("classifier.max_input_retries", retries, 1)?;
            }
        }

        if let Some(output) = &self.output {
            if let Some(path) = &output.path {
                validation::validate_path("output.path", path)?;
            }
        }

        Ok(())
    }

    /// 取得執行順序
    pub fn execution_order(&self) -> &[String] {
        &self.drill.execution_order
    }
}

impl ConfigProvider for TomlConfig {
    fn lower(&self) -> u64 {
        self.perfect
            .as_ref()
            .and_then(|p| p.lower)
            .unwrap_or(DEFAULT_LOWER)
    }

    fn upper(&self) -> u64 {
        self.perfect
            .as_ref()
            .and_then(|p| p.upper)
            .unwrap_or(DEFAULT_UPPER)
    }

    fn max_input_retries(&self) -> usize {
        self.classifier
            .as_ref()
            .and_then(|c| c.max_input_retries)
            .unwrap_or(DEFAULT_MAX_INPUT_RETRIES)
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC_CONFIG: &str = r#"
[drill]
name = "number-drills"
description = "Classification and perfect numbers"
version = "1.0.0"
execution_order = ["classify", "perfect"]

[classifier]
max_input_retries = 5

[perfect]
lower = 2
upper = 500

[output]
path = "./reports"
"#;

    #[test]
    fn test_parse_basic_toml_config() {
        let config = TomlConfig::from_toml_str(BASIC_CONFIG).unwrap();

        assert_eq!(config.drill.name, "number-drills");
        assert_eq!(config.execution_order(), ["classify", "perfect"]);
        assert_eq!(config.max_input_retries(), 5);
        assert_eq!(config.lower(), 2);
        assert_eq!(config.upper(), 500);
        assert_eq!(config.output_path(), Some("./reports"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_optional_sections_fall_back_to_defaults() {
        let minimal = r#"
[drill]
name = "minimal"
description = "Only the required section"
version = "0.1.0"
execution_order = ["perfect"]
"#;
        let config = TomlConfig::from_toml_str(minimal).unwrap();

        assert_eq!(config.lower(), DEFAULT_LOWER);
        assert_eq!(config.upper(), DEFAULT_UPPER);
        assert_eq!(config.max_input_retries(), DEFAULT_MAX_INPUT_RETRIES);
        assert_eq!(config.output_path(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("NUMDRILL_TEST_REPORT_DIR", "/tmp/drill-reports");

        let content = r#"
[drill]
name = "env-drill"
description = "Env substitution"
version = "1.0.0"
execution_order = ["perfect"]

[output]
path = "${NUMDRILL_TEST_REPORT_DIR}"
"#;
        let config = TomlConfig::from_toml_str(content).unwrap();
        assert_eq!(config.output_path(), Some("/tmp/drill-reports"));

        std::env::remove_var("NUMDRILL_TEST_REPORT_DIR");
    }

    #[test]
    fn test_unset_env_var_left_verbatim() {
        let content = r#"
[drill]
name = "env-drill"
description = "Env substitution"
version = "1.0.0"
execution_order = ["perfect"]

[output]
path = "${NUMDRILL_TEST_UNSET_VAR}"
"#;
        let config = TomlConfig::from_toml_str(content).unwrap();
        assert_eq!(config.output_path(), Some("${NUMDRILL_TEST_UNSET_VAR}"));
    }

    #[test]
    fn test_rejects_unknown_exercise_in_order() {
        let content = r#"
[drill]
name = "bad-order"
description = "Unknown exercise"
version = "1.0.0"
execution_order = ["classify", "fibonacci"]
"#;
        let config = TomlConfig::from_toml_str(content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_execution_order() {
        let content = r#"
[drill]
name = "no-order"
description = "Nothing to run"
version = "1.0.0"
execution_order = []
"#;
        let config = TomlConfig::from_toml_str(content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("not even toml = [").unwrap_err();
        assert!(matches!(err, DrillError::ConfigError { .. }));
    }

    #[test]
    fn test_from_file_round_trip() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(BASIC_CONFIG.as_bytes()).unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.drill.name, "number-drills");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, DrillError::IoError(_)));
    }
}
