//! 변환 오류 타입

use std::fmt;

/// 지원하지 않는 레거시 인코딩 이름
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedEncodingError {
    pub encoding: String,
}

impl UnsupportedEncodingError {
    pub fn new(encoding: impl Into<String>) -> Self {
        Self {
            encoding: encoding.into(),
        }
    }
}

impl fmt::Display for UnsupportedEncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unsupported encoding: {}", self.encoding)
    }
}

impl std::error::Error for UnsupportedEncodingError {}

/// 변환 계층 전체의 오류
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslitError {
    /// 레거시 인코딩 오류
    UnsupportedEncoding(UnsupportedEncodingError),
    /// 알 수 없는 변환 스타일
    UnsupportedStyle(String),
    /// 빈 입력
    EmptyInput,
    /// 구르무키 문자가 없는 입력
    NoGurmukhi,
}

impl fmt::Display for TranslitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslitError::UnsupportedEncoding(e) => write!(f, "{}", e),
            TranslitError::UnsupportedStyle(s) => write!(f, "Unsupported style: {}", s),
            TranslitError::EmptyInput => write!(f, "Text cannot be empty"),
            TranslitError::NoGurmukhi => write!(f, "Text must contain Gurmukhi characters"),
        }
    }
}

impl std::error::Error for TranslitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TranslitError::UnsupportedEncoding(e) => Some(e),
            _ => None,
        }
    }
}

impl From<UnsupportedEncodingError> for TranslitError {
    fn from(e: UnsupportedEncodingError) -> Self {
        TranslitError::UnsupportedEncoding(e)
    }
}
