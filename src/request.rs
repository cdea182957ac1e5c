//! 요청/응답 경계
//!
//! `{"text": ..., "style": ...}` 요청을 받아 `{"result": ...}` 또는
//! `{"error": ...}` 를 돌려줍니다. 내부 오류는 문자열 하나로 평탄화됩니다.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::TranslitConfig;
use crate::core::converter::{convert, romanize_legacy, Style};
use crate::core::error::TranslitError;
use crate::core::legacy::decode_legacy;
use crate::detection::{detect_input_kind, validate_gurmukhi_text, InputKind};

/// 변환 요청
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertRequest {
    pub text: String,
    pub style: String,
}

/// 변환 응답
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConvertResponse {
    Ok { result: String },
    Err { error: String },
}

impl ConvertResponse {
    pub fn is_ok(&self) -> bool {
        matches!(self, ConvertResponse::Ok { .. })
    }
}

impl From<Result<String, TranslitError>> for ConvertResponse {
    fn from(result: Result<String, TranslitError>) -> Self {
        match result {
            Ok(result) => ConvertResponse::Ok { result },
            Err(e) => ConvertResponse::Err {
                error: e.to_string(),
            },
        }
    }
}

fn run(request: &ConvertRequest, config: &TranslitConfig) -> Result<String, TranslitError> {
    let style: Style = request.style.parse()?;
    let text = request.text.as_str();
    if text.trim().is_empty() {
        return Err(TranslitError::EmptyInput);
    }

    match style {
        Style::Legacy => Ok(decode_legacy(text, &config.legacy_encoding)?),
        Style::Iso15919 | Style::Practical => {
            if config.decode_legacy_input && detect_input_kind(text) == InputKind::Legacy {
                debug!("treating input as {}", config.legacy_encoding);
                return romanize_legacy(text, &config.legacy_encoding, style);
            }
            validate_gurmukhi_text(text)?;
            convert(text, style)
        }
    }
}

/// 요청 하나 처리
pub fn handle(request: &ConvertRequest, config: &TranslitConfig) -> ConvertResponse {
    info!("convert request: style={}, {} chars", request.style, request.text.chars().count());
    run(request, config).into()
}

/// JSON 요청 본문 처리 -> JSON 응답 본문
pub fn handle_json(body: &str, config: &TranslitConfig) -> String {
    let response = match serde_json::from_str::<ConvertRequest>(body) {
        Ok(request) => handle(&request, config),
        Err(e) => ConvertResponse::Err {
            error: format!("Invalid request: {}", e),
        },
    };
    serde_json::to_string(&response)
        .unwrap_or_else(|e| format!("{{\"error\":\"serialization failed: {}\"}}", e))
}
