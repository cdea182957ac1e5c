//! 구르무키 정규화 유틸리티
//!
//! 구르무키의 점(nukta) 합성 문자 6개(ਲ਼ ਸ਼ ਖ਼ ਗ਼ ਜ਼ ਫ਼)는 유니코드 합성 제외 문자이므로
//! NFC/NFD 모두 "기본 자음 + nukta"로 분해된 형태가 정규형입니다.
//! 구르무키 블록에는 정규 합성 쌍이 없으므로 분해 + 결합 문자 정렬만으로
//! 이 블록의 NFC가 완성됩니다.

use crate::core::tables::{NUKTA, VIRAMA};

/// (합성 문자, 기본 자음) 쌍
const NUKTA_COMPOSITES: [(char, char); 6] = [
    ('\u{0A33}', '\u{0A32}'), // ਲ਼ = ਲ + ਼
    ('\u{0A36}', '\u{0A38}'), // ਸ਼ = ਸ + ਼
    ('\u{0A59}', '\u{0A16}'), // ਖ਼ = ਖ + ਼
    ('\u{0A5A}', '\u{0A17}'), // ਗ਼ = ਗ + ਼
    ('\u{0A5B}', '\u{0A1C}'), // ਜ਼ = ਜ + ਼
    ('\u{0A5E}', '\u{0A2B}'), // ਫ਼ = ਫ + ਼
];

/// 합성 문자를 기본 자음으로 분해 (nukta는 호출자가 붙임)
pub fn decompose_nukta(c: char) -> Option<char> {
    NUKTA_COMPOSITES
        .iter()
        .find(|(composite, _)| *composite == c)
        .map(|(_, base)| *base)
}

/// 기본 자음 + nukta에 해당하는 합성 문자
/// ਕ + ਼ 처럼 합성 문자가 없는 경우 None
pub fn compose_nukta(base: char) -> Option<char> {
    NUKTA_COMPOSITES
        .iter()
        .find(|(_, b)| *b == base)
        .map(|(composite, _)| *composite)
}

/// 정규 결합 클래스 (구르무키에서 0이 아닌 것은 nukta와 virama뿐)
fn combining_class(c: char) -> u8 {
    match c {
        NUKTA => 7,
        VIRAMA => 9,
        _ => 0,
    }
}

/// 정규 분해 + 결합 문자 정렬
fn canonical_decomposition(text: &str) -> String {
    let mut decomposed: Vec<char> = Vec::with_capacity(text.len());
    for c in text.chars() {
        if let Some(base) = decompose_nukta(c) {
            decomposed.push(base);
            decomposed.push(NUKTA);
        } else {
            decomposed.push(c);
        }
    }

    // 결합 클래스가 0이 아닌 연속 구간만 안정 정렬
    let mut start = 0;
    while start < decomposed.len() {
        if combining_class(decomposed[start]) == 0 {
            start += 1;
            continue;
        }
        let mut end = start;
        while end < decomposed.len() && combining_class(decomposed[end]) != 0 {
            end += 1;
        }
        decomposed[start..end].sort_by_key(|c| combining_class(*c));
        start = end;
    }

    decomposed.into_iter().collect()
}

/// 구르무키 텍스트의 NFD
pub fn nfd(text: &str) -> String {
    canonical_decomposition(text)
}

/// 구르무키 텍스트의 NFC
///
/// 합성 제외 문자만 존재하므로 결과는 NFD와 같습니다.
pub fn nfc(text: &str) -> String {
    canonical_decomposition(text)
}
