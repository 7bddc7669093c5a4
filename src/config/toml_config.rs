use crate::site::content::SiteContent;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub backend: Option<BackendSection>,
    pub site: SiteContent,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendSection {
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: String,
    pub filename: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: "./dist".to_string(),
            filename: "index.html".to_string(),
        }
    }
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        let config = toml::from_str(&processed_content)?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${BACKEND_URL})，未設定的變數替換為空字串
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SiteError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_default()
        });

        Ok(result.to_string())
    }

    /// Backend base URL from the `[backend]` section, if set to something non-empty.
    pub fn backend_url(&self) -> Option<&str> {
        self.backend
            .as_ref()
            .and_then(|b| b.base_url.as_deref())
            .filter(|url| !url.trim().is_empty())
    }

    pub fn output_path(&self) -> &str {
        &self.output.path
    }

    pub fn output_filename(&self) -> &str {
        &self.output.filename
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        if let Some(url) = self.backend_url() {
            validate_url("backend.base_url", url)?;
        }
        validate_path("output.path", &self.output.path)?;
        validate_non_empty_string("output.filename", &self.output.filename)?;
        validate_non_empty_string("site.brand", &self.site.brand)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();

        assert!(config.backend_url().is_none());
        assert_eq!(config.output_path(), "./dist");
        assert_eq!(config.output_filename(), "index.html");
        assert_eq!(config.site.brand, "Your Brand");
        assert_eq!(config.site.nav_items.len(), 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_site_section_keeps_other_defaults() {
        let toml_content = r#"
[site]
brand = "Studio North"

[output]
path = "./public"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.site.brand, "Studio North");
        assert_eq!(config.site.services.len(), 3);
        assert_eq!(config.output_path(), "./public");
        assert_eq!(config.output_filename(), "index.html");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BRAND_SITE_TEST_BACKEND", "https://test.api.com");

        let toml_content = r#"
[backend]
base_url = "${BRAND_SITE_TEST_BACKEND}"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.backend_url(), Some("https://test.api.com"));

        std::env::remove_var("BRAND_SITE_TEST_BACKEND");
    }

    #[test]
    fn test_unset_placeholder_counts_as_absent() {
        let toml_content = r#"
[backend]
base_url = "${BRAND_SITE_SURELY_UNSET_VARIABLE}"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert!(config.backend_url().is_none());
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[backend]
base_url = "invalid-url"
"#;

        let config = SiteConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[site]
brand = "File Brand"
contact_email = "hello@file.example"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = SiteConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.site.brand, "File Brand");
        assert_eq!(config.site.contact_email, "hello@file.example");
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = SiteConfig::from_toml_str("[site\nbrand = 1").unwrap_err();
        assert!(matches!(err, SiteError::TomlError(_)));
    }
}
