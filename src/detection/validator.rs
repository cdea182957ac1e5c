//! 입력 텍스트 검증 모듈
//!
//! 로마자 인코더에 넘기기 전에 구르무키 문자가 있는지 확인합니다.
//! 인코더 자체는 이 검사를 하지 않습니다.

use crate::core::error::TranslitError;
use crate::core::tables::{DANDA, DOUBLE_DANDA};

/// 구르무키 블록 (U+0A00 ~ U+0A7F)
pub fn is_gurmukhi(ch: char) -> bool {
    ('\u{0A00}'..='\u{0A7F}').contains(&ch)
}

/// 구르무키와 함께 쓰이는 데바나가리 단다 (। ॥)
pub fn is_danda(ch: char) -> bool {
    ch == DANDA || ch == DOUBLE_DANDA
}

/// 구르무키 문자가 하나라도 있는지
pub fn contains_gurmukhi(text: &str) -> bool {
    text.chars().any(is_gurmukhi)
}

/// 공백을 제외한 문자 중 구르무키 비율 (0.0 ~ 1.0)
pub fn gurmukhi_ratio(text: &str) -> f32 {
    let mut gurmukhi_count = 0;
    let mut total = 0;

    for ch in text.chars().filter(|c| !c.is_whitespace()) {
        total += 1;
        if is_gurmukhi(ch) {
            gurmukhi_count += 1;
        }
    }

    if total == 0 {
        return 0.0;
    }

    gurmukhi_count as f32 / total as f32
}

/// 인코더 입력 검증
///
/// - 공백뿐이면 `EmptyInput`
/// - 구르무키 문자가 없으면 `NoGurmukhi`
pub fn validate_gurmukhi_text(text: &str) -> Result<(), TranslitError> {
    if text.trim().is_empty() {
        return Err(TranslitError::EmptyInput);
    }
    if !contains_gurmukhi(text) {
        return Err(TranslitError::NoGurmukhi);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_gurmukhi() {
        assert!(is_gurmukhi('ਕ'));
        assert!(is_gurmukhi('ੴ'));
        assert!(is_gurmukhi('\u{0A3C}'));
        assert!(!is_gurmukhi('a'));
        assert!(!is_gurmukhi('क'));
        // 단다는 데바나가리 블록
        assert!(!is_gurmukhi('।'));
        assert!(is_danda('।'));
        assert!(is_danda('॥'));
    }

    #[test]
    fn test_contains_gurmukhi() {
        assert!(contains_gurmukhi("ਸਤਿ"));
        assert!(contains_gurmukhi("hello ਜੀ"));
        assert!(!contains_gurmukhi("hello"));
        assert!(!contains_gurmukhi(""));
    }

    #[test]
    fn test_gurmukhi_ratio() {
        assert_eq!(gurmukhi_ratio("ਸਤਿ"), 1.0);
        assert_eq!(gurmukhi_ratio("ab"), 0.0);
        assert!((gurmukhi_ratio("ਕa") - 0.5).abs() < 0.01);
        // 공백은 세지 않음
        assert!((gurmukhi_ratio("ਕ  a ") - 0.5).abs() < 0.01);
        assert_eq!(gurmukhi_ratio("   "), 0.0);
    }

    #[test]
    fn test_validate_gurmukhi_text() {
        assert_eq!(validate_gurmukhi_text("ਪੱਕਾ"), Ok(()));
        assert_eq!(validate_gurmukhi_text("  \n"), Err(TranslitError::EmptyInput));
        assert_eq!(validate_gurmukhi_text("pakka"), Err(TranslitError::NoGurmukhi));
    }
}
