//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::core::converter::Style;
use crate::core::legacy::DEFAULT_LEGACY_ENCODING;

/// 변환기 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TranslitConfig {
    /// 스타일을 지정하지 않았을 때 쓰는 변환 스타일
    #[serde(default = "default_style")]
    pub default_style: Style,
    /// 레거시 입력 인코딩 이름
    #[serde(default = "default_legacy_encoding")]
    pub legacy_encoding: String,
    /// env_logger 기본 필터 (RUST_LOG가 우선)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// 로마자 스타일에 레거시 입력이 들어오면 먼저 디코딩할지
    #[serde(default = "default_decode_legacy_input")]
    pub decode_legacy_input: bool,
}

fn default_style() -> Style {
    Style::Iso15919
}

fn default_legacy_encoding() -> String {
    DEFAULT_LEGACY_ENCODING.to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_decode_legacy_input() -> bool {
    true
}

impl Default for TranslitConfig {
    fn default() -> Self {
        Self {
            default_style: default_style(),
            legacy_encoding: default_legacy_encoding(),
            log_level: default_log_level(),
            decode_legacy_input: default_decode_legacy_input(),
        }
    }
}

/// 설정 파일 경로: $XDG_CONFIG_HOME/gurmukhi-translit/config.json
/// (없으면 ~/.config, HOME도 없으면 /var/tmp)
pub fn config_path() -> PathBuf {
    let absolute_dir = |var: &str| {
        std::env::var(var)
            .ok()
            .map(PathBuf::from)
            .filter(|p| p.is_absolute() && p.is_dir())
    };

    let base = absolute_dir("XDG_CONFIG_HOME")
        .or_else(|| absolute_dir("HOME").map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    base.join("gurmukhi-translit").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> TranslitConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => parse_config(&content),
        Err(_) => TranslitConfig::default(),
    }
}

/// JSON 문자열에서 설정 파싱 (실패 시 기본값)
pub fn parse_config(content: &str) -> TranslitConfig {
    serde_json::from_str(content).unwrap_or_else(|e| {
        log::warn!("config parse failed, using defaults: {}", e);
        TranslitConfig::default()
    })
}

/// 설정 파일 저장
pub fn save_config(config: &TranslitConfig) -> Result<(), String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("failed to create config directory: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("serialization failed: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("failed to write config file: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TranslitConfig::default();
        assert_eq!(config.default_style, Style::Iso15919);
        assert_eq!(config.legacy_encoding, "anmollipi");
        assert_eq!(config.log_level, "warn");
        assert!(config.decode_legacy_input);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = TranslitConfig {
            default_style: Style::Practical,
            legacy_encoding: "AnmolLipi".to_string(),
            log_level: "debug".to_string(),
            decode_legacy_input: false,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"practical\""));
        let parsed: TranslitConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_backward_compat_missing_field() {
        // 예전 설정 파일에 없는 필드는 기본값
        let json = r#"{"default_style": "legacy"}"#;
        let config: TranslitConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.default_style, Style::Legacy);
        assert_eq!(config.legacy_encoding, "anmollipi");
        assert!(config.decode_legacy_input);
    }

    #[test]
    fn test_parse_config_fallback() {
        assert_eq!(parse_config("not json"), TranslitConfig::default());
        assert_eq!(parse_config(r#"{"default_style": "ipa"}"#), TranslitConfig::default());
    }

    #[test]
    fn test_config_path_file_name() {
        let path = config_path();
        assert!(path.ends_with("gurmukhi-translit/config.json"));
    }
}
