use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Output location and generated module name for one client.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralOptions {
    /// Name of the generated module; the client file is
    /// `<client_file_path><api_name>.ts`.
    pub api_name: String,
    /// Prefix prepended verbatim to every output file name (typically a
    /// directory ending in `/`).
    #[serde(default)]
    pub client_file_path: String,
}

/// Top-level project configuration loaded from `.ocg.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OcgConfig {
    /// Spec source: a URL or a file path (JSON or YAML).
    pub input: String,
    pub api_name: String,
    pub client_file_path: String,
}

impl Default for OcgConfig {
    fn default() -> Self {
        Self {
            input: "openapi.json".to_string(),
            api_name: "api".to_string(),
            client_file_path: "src/generated/".to_string(),
        }
    }
}

impl OcgConfig {
    pub fn general_options(&self) -> GeneralOptions {
        GeneralOptions {
            api_name: self.api_name.clone(),
            client_file_path: self.client_file_path.clone(),
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".ocg.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<OcgConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: OcgConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# ocg configuration
input: openapi.json      # file path or URL of the OpenAPI document
api_name: api            # generated module name -> <client_file_path><api_name>.ts
client_file_path: src/generated/
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OcgConfig::default();
        assert_eq!(config.input, "openapi.json");
        assert_eq!(config.api_name, "api");
        assert_eq!(config.client_file_path, "src/generated/");
    }

    #[test]
    fn test_parse_config_yaml() {
        let yaml = r#"
input: https://developer.ebay.com/api-docs/buy/deal/openapi.json
api_name: buyDeal
client_file_path: temp/
"#;
        let config: OcgConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(
            config.input,
            "https://developer.ebay.com/api-docs/buy/deal/openapi.json"
        );
        assert_eq!(config.api_name, "buyDeal");
        assert_eq!(config.client_file_path, "temp/");
    }

    #[test]
    fn test_parse_minimal_config() {
        let yaml = "input: spec.yaml\n";
        let config: OcgConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.input, "spec.yaml");
        // Defaults applied
        assert_eq!(config.api_name, "api");
        assert_eq!(config.client_file_path, "src/generated/");
    }

    #[test]
    fn test_default_content_parses() {
        let config: OcgConfig = serde_yaml_ng::from_str(default_config_content()).unwrap();
        assert_eq!(config.api_name, "api");
    }
}
