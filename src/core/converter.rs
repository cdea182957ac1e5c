//! 통합 변환기
//!
//! 스타일 이름 하나로 세 코덱 중 하나를 고르고,
//! 레거시 입력은 유니코드로 바꾼 뒤 로마자 인코더로 넘깁니다.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::diagnostics::Conversion;
use crate::core::error::TranslitError;
use crate::core::iso15919::{encode_iso15919, encode_iso15919_with_diagnostics};
use crate::core::legacy::{decode_legacy, decode_legacy_with_diagnostics, DEFAULT_LEGACY_ENCODING};
use crate::core::practical::{encode_practical, encode_practical_with_diagnostics};
use crate::detection::{detect_input_kind, InputKind};

/// 변환 스타일
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// 유니코드 구르무키 -> ISO 15919
    Iso15919,
    /// 유니코드 구르무키 -> 실용 로마자
    Practical,
    /// AnmolLipi -> 유니코드 구르무키
    Legacy,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Iso15919, Style::Practical, Style::Legacy];

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Iso15919 => "iso15919",
            Style::Practical => "practical",
            Style::Legacy => "legacy",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Style {
    type Err = TranslitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| TranslitError::UnsupportedStyle(s.to_string()))
    }
}

/// 텍스트를 주어진 스타일로 변환
/// 레거시 스타일은 기본 레거시 인코딩(AnmolLipi)을 사용
pub fn convert(text: &str, style: Style) -> Result<String, TranslitError> {
    match style {
        Style::Iso15919 => Ok(encode_iso15919(text)),
        Style::Practical => Ok(encode_practical(text)),
        Style::Legacy => Ok(decode_legacy(text, DEFAULT_LEGACY_ENCODING)?),
    }
}

/// 진단 정보와 함께 변환 (레거시 스타일은 encoding 사용)
pub fn convert_with_diagnostics(
    text: &str,
    style: Style,
    encoding: &str,
) -> Result<Conversion, TranslitError> {
    match style {
        Style::Iso15919 => Ok(encode_iso15919_with_diagnostics(text)),
        Style::Practical => Ok(encode_practical_with_diagnostics(text)),
        Style::Legacy => Ok(decode_legacy_with_diagnostics(text, encoding)?),
    }
}

/// 레거시 텍스트 -> 유니코드 -> 로마자
/// style이 Legacy면 유니코드 결과를 그대로 반환
pub fn romanize_legacy(text: &str, encoding: &str, style: Style) -> Result<String, TranslitError> {
    let unicode = decode_legacy(text, encoding)?;
    match style {
        Style::Iso15919 => Ok(encode_iso15919(&unicode)),
        Style::Practical => Ok(encode_practical(&unicode)),
        Style::Legacy => Ok(unicode),
    }
}

/// 입력 종류를 판별해서 변환
/// 레거시 입력이 로마자 스타일로 들어오면 먼저 유니코드로 디코딩
pub fn convert_with_detection(
    text: &str,
    style: Style,
    encoding: &str,
) -> Result<String, TranslitError> {
    let kind = detect_input_kind(text);
    debug!("detected {:?} input for {}", kind, style);
    match (kind, style) {
        (InputKind::Legacy, Style::Iso15919 | Style::Practical) => {
            romanize_legacy(text, encoding, style)
        }
        (_, Style::Legacy) => Ok(decode_legacy(text, encoding)?),
        _ => convert(text, style),
    }
}
