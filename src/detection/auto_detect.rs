//! 입력 종류 자동 감지
//!
//! 텍스트가 유니코드 구르무키인지, AnmolLipi 자판 입력인지 판별합니다.

use log::debug;

use crate::core::anmollipi::is_legacy_key;
use crate::detection::validator::{contains_gurmukhi, gurmukhi_ratio, is_danda, is_gurmukhi};

/// 입력 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// 유니코드 구르무키
    Unicode,
    /// AnmolLipi 키 입력
    Legacy,
    /// 어느 쪽도 아닌 문자가 섞여 있음
    Unsupported,
}

/// 입력 종류 판별
///
/// - ASCII, 구르무키, 단다, AnmolLipi 키가 아닌 문자가 있으면 `Unsupported`
/// - 구르무키 문자가 있으면 `Unicode`
/// - 나머지는 `Legacy` (빈 문자열 포함)
pub fn detect_input_kind(text: &str) -> InputKind {
    for (i, ch) in text.chars().enumerate() {
        let supported = ch.is_ascii() || is_gurmukhi(ch) || is_danda(ch) || is_legacy_key(ch);
        if !supported {
            debug!("unsupported character {:?} (U+{:04X}) at {}", ch, ch as u32, i);
            return InputKind::Unsupported;
        }
    }

    if contains_gurmukhi(text) {
        debug!("unicode input, {:.0}% Gurmukhi", gurmukhi_ratio(text) * 100.0);
        InputKind::Unicode
    } else {
        InputKind::Legacy
    }
}
