//! 유니코드 구르무키 -> ISO 15919 로마자
//!
//! 한 번의 왼쪽→오른쪽 스캔이며, 각 위치에서 다음 순서로 규칙을 적용합니다:
//! 1. addak (겹자음)
//! 2. tippi / bindi (비음화)
//! 3. 모음 연속 구분 (`a` 뒤 독립 모음 앞에 `'`)
//! 4. 자음 결합 (virama)
//! 5. 기본 매핑 (내재 모음 `a` 삽입 포함)

use log::warn;

use crate::core::diagnostics::{Codec, Conversion, UnmappedCodepoint};
use crate::core::scan::{fold_glyphs, Cursor, Glyph};
use crate::core::tables::{
    CodecTables, CodepointClass, ADDAK, BINDI, ISO15919, RARA, TIPPI,
};

/// ਰ 가 결합 자음 두 번째일 때의 모음성 r
const VOCALIC_R: &str = "r\u{0325}";

/// ISO 15919 인코더 상태
pub struct IsoEncoder {
    output: String,
    unmapped: Vec<UnmappedCodepoint>,
}

impl IsoEncoder {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            unmapped: Vec::new(),
        }
    }

    /// 텍스트 전체를 인코딩
    pub fn encode(mut self, text: &str) -> Conversion {
        let glyphs = fold_glyphs(text);
        let mut cursor = Cursor::new(&glyphs);
        while !cursor.at_end() {
            let consumed = self.step(&cursor);
            cursor.advance(consumed);
        }
        Conversion {
            output: self.output,
            unmapped: self.unmapped,
        }
    }

    /// 현재 위치에서 규칙 하나를 적용하고 소비한 글리프 수 반환
    fn step(&mut self, cursor: &Cursor) -> usize {
        let Some(glyph) = cursor.current() else {
            return 1;
        };

        if let Some(consumed) = self.try_gemination(cursor, glyph) {
            return consumed;
        }
        if let Some(consumed) = self.try_nasalization(cursor, glyph) {
            return consumed;
        }

        // 모음 연속: "a" 뒤의 독립 모음은 이중모음이 아님을 표시
        if glyph.class() == CodepointClass::IndependentVowel && self.output.ends_with('a') {
            self.output.push('\'');
        }

        if let Some(consumed) = self.try_conjunct(cursor, glyph) {
            return consumed;
        }

        self.emit_default(cursor, glyph);
        1
    }

    /// 내재 모음을 포함한 단위 형태 (자음이면 + "a")
    fn unit_with_vowel(&self, glyph: Glyph) -> Option<String> {
        let tables: &CodecTables = &ISO15919;
        match glyph.class() {
            CodepointClass::Consonant => tables.consonant(glyph).map(|form| format!("{}a", form)),
            CodepointClass::IndependentVowel => tables.vowel(glyph.ch).map(str::to_string),
            CodepointClass::VowelDiacritic => tables.vowel_diacritic(glyph.ch).map(str::to_string),
            _ => None,
        }
    }

    /// 내재 모음 없는 단위 형태
    fn bare_unit(&self, glyph: Glyph) -> Option<&'static str> {
        let tables: &CodecTables = &ISO15919;
        match glyph.class() {
            CodepointClass::Consonant => tables.consonant(glyph),
            CodepointClass::IndependentVowel => tables.vowel(glyph.ch),
            CodepointClass::VowelDiacritic => tables.vowel_diacritic(glyph.ch),
            _ => None,
        }
    }

    /// 단위 + addak + 자음
    fn try_gemination(&mut self, cursor: &Cursor, glyph: Glyph) -> Option<usize> {
        if !cursor.peek_is(1, ADDAK) {
            return None;
        }
        let doubled = cursor.next2().filter(|g| g.class() == CodepointClass::Consonant)?;
        let doubled_form = ISO15919.consonant(doubled)?;
        let unit = self.unit_with_vowel(glyph)?;

        self.output.push_str(&unit);
        self.output.push_str(&geminate(doubled_form));
        if !CodecTables::suppresses_inherent(cursor.peek(3)) {
            self.output.push('a');
        }
        Some(3)
    }

    /// 단위 + tippi / bindi
    fn try_nasalization(&mut self, cursor: &Cursor, glyph: Glyph) -> Option<usize> {
        let next = cursor.next()?;
        if next.is(TIPPI) {
            let unit = self.unit_with_vowel(glyph)?;
            self.output.push_str(&unit);
        } else if next.is(BINDI) {
            let unit = self.bare_unit(glyph)?;
            self.output.push_str(unit);
        } else {
            return None;
        }
        self.output.push_str(ISO15919.modifier(next.ch).unwrap_or_default());
        Some(2)
    }

    /// 자음 + virama + 자음
    ///
    /// 첫 자음만 내재 모음 없이 출력하고 두 번째 자음은 다음 단계에서
    /// 기본 규칙으로 처리합니다. 두 번째가 ਰ 이고 뒤에 모음 부호나
    /// virama가 없으면 `r̥` 를 쓰고, 입력 끝이 아니면 `a` 를 붙입니다.
    fn try_conjunct(&mut self, cursor: &Cursor, glyph: Glyph) -> Option<usize> {
        if glyph.class() != CodepointClass::Consonant
            || cursor.next().map(|g| g.class()) != Some(CodepointClass::ViramaMark)
        {
            return None;
        }
        let second = cursor.next2().filter(|g| g.class() == CodepointClass::Consonant)?;
        let first_form = ISO15919.consonant(glyph)?;
        self.output.push_str(first_form);

        if second.is(RARA) && !CodecTables::suppresses_inherent(cursor.peek(3)) {
            self.output.push_str(VOCALIC_R);
            // 입력 끝이 아니면 내재 모음
            if cursor.peek(3).is_some() {
                self.output.push('a');
            }
            return Some(3);
        }
        Some(2)
    }

    fn emit_default(&mut self, cursor: &Cursor, glyph: Glyph) {
        let tables: &CodecTables = &ISO15919;
        match glyph.class() {
            CodepointClass::Consonant => {
                if let Some(form) = tables.consonant(glyph) {
                    self.output.push_str(form);
                    if !CodecTables::suppresses_inherent(cursor.next()) {
                        self.output.push('a');
                    }
                    return;
                }
            }
            CodepointClass::Whitespace => {
                self.output.push(glyph.ch);
                return;
            }
            CodepointClass::Punctuation => {
                // ASCII 문장 부호는 그대로
                let form = tables.lookup(glyph);
                match form {
                    Some(form) => self.output.push_str(form),
                    None => self.output.push(glyph.ch),
                }
                return;
            }
            _ => {
                if let Some(form) = tables.lookup(glyph) {
                    self.output.push_str(form);
                    return;
                }
            }
        }

        warn!(
            "{}: no mapping for U+{:04X} at {}",
            tables.name,
            glyph.ch as u32,
            cursor.pos()
        );
        self.unmapped
            .push(UnmappedCodepoint::new(Codec::Iso15919, glyph.ch, cursor.pos()));
    }
}

impl Default for IsoEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// 겹자음 형태: 유기음(두 번째 글자가 h)은 첫 글자만 겹침
fn geminate(form: &str) -> String {
    let mut chars = form.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some('h')) => format!("{}{}", first, form),
        _ => format!("{}{}", form, form),
    }
}

/// 유니코드 구르무키를 ISO 15919로 변환
pub fn encode_iso15919(text: &str) -> String {
    encode_iso15919_with_diagnostics(text).output
}

/// 진단 정보와 함께 변환
pub fn encode_iso15919_with_diagnostics(text: &str) -> Conversion {
    if text.is_empty() {
        return Conversion::default();
    }
    IsoEncoder::new().encode(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_cases(cases: &[(&str, &str)]) {
        for (input, expected) in cases {
            assert_eq!(encode_iso15919(input), *expected, "input: {}", input);
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(encode_iso15919(""), "");
    }

    #[test]
    fn test_nasalization() {
        assert_cases(&[
            ("ਹਿੰਮਤ", "hiṁmata"),
            ("ਸਿੰਘ", "siṁgha"),
            ("ਕੰਮ", "kaṁma"),
            ("ਅੰਮ੍ਰਿਤ", "aṁmrita"),
            ("ਸਾਂਝਾ", "sāṃjhā"),
            ("ਨਾਂ", "nāṃ"),
            ("ਮੈਂ", "maiṃ"),
            ("ਸਿਉਂ", "siuṃ"),
            ("ਨਾਉਂ", "nāuṃ"),
        ]);
    }

    #[test]
    fn test_vowel_sequences() {
        assert_cases(&[
            ("ਭਾਈ", "bhāī"),
            ("ਕੌਰ", "kaura"),
            ("ਸਿਉ", "siu"),
            ("ਭਾਉ", "bhāu"),
            ("ਆਈਆਂ", "āīāṃ"),
        ]);
    }

    #[test]
    fn test_hiatus() {
        // 내재 모음 a 뒤의 독립 모음
        assert_eq!(encode_iso15919("ਕਈ"), "ka'ī");
        assert_eq!(encode_iso15919("ਗਉ"), "ga'u");
    }

    #[test]
    fn test_conjuncts() {
        assert_cases(&[
            ("ਪ੍ਰੇਮ", "prēma"),
            ("ਸ੍ਰੀ", "srī"),
            ("ਕ੍ਰਿਪਾ", "kripā"),
            ("ਸ੍ਵਾਮੀ", "svāmī"),
        ]);
    }

    #[test]
    fn test_vocalic_r() {
        // 뒤에 모음 부호가 없으면 r̥, 입력 끝에서는 내재 모음 없음
        assert_eq!(encode_iso15919("ਪ੍ਰ"), "pr\u{0325}");
        assert_eq!(encode_iso15919("ਕ੍ਰਮ"), "kr\u{0325}ama");
        assert_eq!(encode_iso15919("ਪ੍ਰਭੂ"), "pr\u{0325}abhū");
        // 모음 부호가 따르면 일반 r
        assert_eq!(encode_iso15919("ਪ੍ਰੇਮ"), "prēma");
    }

    #[test]
    fn test_gemination() {
        assert_cases(&[
            ("ਪੱਕਾ", "pakkā"),
            ("ਚੱਲਣਾ", "callaṇā"),
            ("ਕੱਚਾ", "kaccā"),
            ("ਕਿੱਤਾ", "kittā"),
            ("ਪੁੱਤਰ", "puttara"),
            ("ਅੱਦਕ", "addaka"),
            ("ਮਿੱਠਾ", "miṭṭhā"),
        ]);
    }

    #[test]
    fn test_geminate_form() {
        assert_eq!(geminate("k"), "kk");
        assert_eq!(geminate("ch"), "cch");
        assert_eq!(geminate("ṭh"), "ṭṭh");
        assert_eq!(geminate("ś"), "śś");
    }

    #[test]
    fn test_gemination_at_end() {
        // 겹자음 뒤 입력 끝: 내재 모음 유지
        assert_eq!(encode_iso15919("ਪੱਕ"), "pakka");
    }

    #[test]
    fn test_punctuation_and_digits() {
        assert_eq!(encode_iso15919("।"), "|");
        assert_eq!(encode_iso15919("॥"), "||");
        assert_eq!(encode_iso15919("੧੯੪੭"), "1947");
        assert_eq!(encode_iso15919("ਕਰ, ਜਲ।"), "kara, jala|");
        assert_eq!(encode_iso15919("ੴ"), "ik ōaṅkār");
    }

    #[test]
    fn test_nukta_forms() {
        // 합성형과 분해형이 같은 결과
        assert_eq!(encode_iso15919("\u{0A36}ਾਹ"), "śāha");
        assert_eq!(encode_iso15919("ਸ\u{0A3C}ਾਹ"), "śāha");
        assert_eq!(encode_iso15919("ਕ\u{0A3C}ਲਮ"), "qalama");
    }

    #[test]
    fn test_lone_diacritic() {
        assert_eq!(encode_iso15919("ਾ"), "ā");
        assert_eq!(encode_iso15919("ੰ"), "ṁ");
    }

    #[test]
    fn test_unmapped() {
        let c = encode_iso15919_with_diagnostics("ਕx");
        assert_eq!(c.output, "ka");
        assert_eq!(c.unmapped.len(), 1);
        assert_eq!(c.unmapped[0].ch, 'x');
        assert_eq!(c.unmapped[0].position, 1);
    }

    #[test]
    fn test_deterministic() {
        let text = "ਸਤਿ ਸ੍ਰੀ ਅਕਾਲ";
        assert_eq!(encode_iso15919(text), encode_iso15919(text));
        assert_eq!(encode_iso15919(text), "sati srī akāla");
    }
}
