//! 유니코드 구르무키 -> 실용 로마자
//!
//! 자판으로 입력하기 쉬운 간단한 표기입니다 (`aa`, `ee`, `oo`, `ch`/`chh`).
//! 비음 표시는 뒤 자음에 따라 `n` / `m` / `ng` 로 읽고,
//! addak은 뒤 자음을 한 번 더 씁니다.

use log::warn;

use crate::core::diagnostics::{Codec, Conversion, UnmappedCodepoint};
use crate::core::scan::{fold_glyphs, Cursor, Glyph};
use crate::core::tables::{
    is_labial, is_sentence_punctuation, CodepointClass, ADAK_BINDI, ADDAK, BINDI, PRACTICAL,
    TIPPI,
};

/// 실용 로마자 인코더 상태
pub struct PracticalEncoder {
    output: String,
    unmapped: Vec<UnmappedCodepoint>,
}

impl PracticalEncoder {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            unmapped: Vec::new(),
        }
    }

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

    fn step(&mut self, cursor: &Cursor) -> usize {
        let Some(glyph) = cursor.current() else {
            return 1;
        };

        let consumed = match glyph.class() {
            CodepointClass::Consonant => match self.emit_consonant(cursor, glyph) {
                Some(consumed) => consumed,
                None => {
                    self.report(cursor, glyph);
                    return 1;
                }
            },
            CodepointClass::IndependentVowel | CodepointClass::VowelDiacritic => {
                match PRACTICAL.lookup(glyph) {
                    Some(form) => self.output.push_str(form),
                    None => {
                        self.report(cursor, glyph);
                        return 1;
                    }
                }
                1
            }
            // 앞 단위 없이 나온 수식 기호는 버림
            CodepointClass::NasalizationMark
            | CodepointClass::GeminationMark
            | CodepointClass::NuktaMark
            | CodepointClass::ViramaMark => return 1,
            CodepointClass::Digit | CodepointClass::SpecialSymbol => {
                match PRACTICAL.lookup(glyph) {
                    Some(form) => self.output.push_str(form),
                    None => self.report(cursor, glyph),
                }
                return 1;
            }
            CodepointClass::Punctuation => {
                match PRACTICAL.lookup(glyph) {
                    Some(form) => self.output.push_str(form),
                    None => self.output.push(glyph.ch),
                }
                return 1;
            }
            CodepointClass::Whitespace => {
                self.output.push(glyph.ch);
                return 1;
            }
            CodepointClass::Unclassified => {
                self.report(cursor, glyph);
                return 1;
            }
        };

        consumed + self.resolve_modifiers(cursor, consumed)
    }

    /// 자음 (+ 모음 부호 / virama)
    fn emit_consonant(&mut self, cursor: &Cursor, glyph: Glyph) -> Option<usize> {
        let form = PRACTICAL.consonant(glyph)?;
        self.output.push_str(form);

        let next = cursor.next();
        match next.map(|g| g.class()) {
            Some(CodepointClass::VowelDiacritic) => {
                if let Some(sign) = next.and_then(|g| PRACTICAL.vowel_diacritic(g.ch)) {
                    self.output.push_str(sign);
                }
                Some(2)
            }
            // virama는 버리고 다음 자음은 따로 처리
            Some(CodepointClass::ViramaMark) => Some(2),
            _ => {
                if !is_word_boundary(next) {
                    self.output.push('a');
                }
                Some(1)
            }
        }
    }

    /// 단위 뒤의 비음 / addak 처리, 소비한 수식 기호 개수 반환
    fn resolve_modifiers(&mut self, cursor: &Cursor, offset: usize) -> usize {
        let mut extra = 0;
        while let Some(mark) = cursor.peek(offset + extra) {
            let after = cursor.peek(offset + extra + 1);
            if mark.is(TIPPI) {
                let nasal = if after.map_or(true, |g| g.class() == CodepointClass::Whitespace) {
                    "ng"
                } else if is_labial(after) {
                    "m"
                } else {
                    "n"
                };
                self.output.push_str(nasal);
            } else if mark.is(BINDI) || mark.is(ADAK_BINDI) {
                self.output.push_str(if is_labial(after) { "m" } else { "n" });
            } else if mark.is(ADDAK) {
                if let Some(form) = after
                    .filter(|g| g.class() == CodepointClass::Consonant)
                    .and_then(|g| PRACTICAL.consonant(g))
                {
                    self.output.push_str(form);
                }
            } else {
                break;
            }
            extra += 1;
        }
        extra
    }

    fn report(&mut self, cursor: &Cursor, glyph: Glyph) {
        warn!(
            "{}: unknown character {:?} (U+{:04X}) at {}",
            PRACTICAL.name,
            glyph.ch,
            glyph.ch as u32,
            cursor.pos()
        );
        self.unmapped
            .push(UnmappedCodepoint::new(Codec::Practical, glyph.ch, cursor.pos()));
    }
}

impl Default for PracticalEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// 입력 끝, 공백, 문장 부호
fn is_word_boundary(next: Option<Glyph>) -> bool {
    match next {
        None => true,
        Some(g) => {
            g.class() == CodepointClass::Whitespace || (!g.nukta && is_sentence_punctuation(g.ch))
        }
    }
}

/// 유니코드 구르무키를 실용 로마자로 변환
pub fn encode_practical(text: &str) -> String {
    encode_practical_with_diagnostics(text).output
}

pub fn encode_practical_with_diagnostics(text: &str) -> Conversion {
    if text.is_empty() {
        return Conversion::default();
    }
    PracticalEncoder::new().encode(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_cases(cases: &[(&str, &str)]) {
        for (input, expected) in cases {
            assert_eq!(encode_practical(input), *expected, "input: {}", input);
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(encode_practical(""), "");
    }

    #[test]
    fn test_independent_vowels() {
        assert_cases(&[
            ("ਅ", "a"),
            ("ਆ", "aa"),
            ("ਈ", "ee"),
            ("ਊ", "oo"),
            ("ਐ", "ai"),
            ("ਔ", "au"),
        ]);
    }

    #[test]
    fn test_vowel_diacritics() {
        assert_cases(&[
            ("ਕਾ", "kaa"),
            ("ਕਿ", "ki"),
            ("ਕੀ", "kee"),
            ("ਕੂ", "koo"),
            ("ਕੇ", "ke"),
            ("ਕੌ", "kau"),
        ]);
    }

    #[test]
    fn test_inherent_vowel_at_boundaries() {
        // 입력 끝, 공백, 문장 부호 앞에서는 a 없음
        assert_eq!(encode_practical("ਕਰ"), "kar");
        assert_eq!(encode_practical("ਘਰ ਜਲ"), "ghar jal");
        assert_eq!(encode_practical("ਘਰ।"), "ghar|");
        assert_eq!(encode_practical("ਕੀਰਤਨੁ"), "keeratanu");
    }

    #[test]
    fn test_tippi() {
        assert_cases(&[("ਸੰਤ", "sant"), ("ਅੰਗ", "ang"), ("ਪੰਜ", "panj")]);
    }

    #[test]
    fn test_tippi_word_final() {
        assert_eq!(encode_practical("ਨੂੰ"), "noong");
        assert_eq!(encode_practical("ਮੈਨੂੰ ਦੱਸ"), "mainoong dass");
    }

    #[test]
    fn test_bindi() {
        assert_cases(&[("ਮਾਂ", "maan"), ("ਕਾਂ", "kaan"), ("ਸਾਂਝ", "saanjh")]);
    }

    #[test]
    fn test_labial_nasalization() {
        assert_cases(&[("ਸੰਪ", "samp"), ("ਸੰਭਵ", "sambhav"), ("ਸੰਮਤ", "sammat")]);
    }

    #[test]
    fn test_gemination() {
        assert_cases(&[("ਪੱਕਾ", "pakkaa"), ("ਚੱਲੀ", "challee"), ("ਕੱਚਾ", "kachchaa")]);
    }

    #[test]
    fn test_virama_dropped() {
        assert_eq!(encode_practical("ਪ੍ਰੇਮ"), "prem");
        assert_eq!(encode_practical("ਸ੍ਵਾਮੀ"), "svaamee");
    }

    #[test]
    fn test_persian_letters() {
        assert_cases(&[
            ("\u{0A5B}ਮੀਨ", "zameen"),
            ("\u{0A36}ਹਿਰ", "shahir"),
            ("ਸ\u{0A3C}ਹਿਰ", "shahir"),
            ("ਕ\u{0A3C}ਲਮ", "qalam"),
        ]);
    }

    #[test]
    fn test_complex_words() {
        assert_cases(&[
            ("ਸਤਿਗੁਰੁ", "satiguru"),
            ("ਵਾਹਿਗੁਰੂ", "vaahiguroo"),
            ("ਸੰਗਤਿ", "sangati"),
        ]);
    }

    #[test]
    fn test_symbols_and_digits() {
        assert_eq!(encode_practical("ੴ"), "ik oankaar");
        assert_eq!(encode_practical("੧੩"), "13");
        assert_eq!(encode_practical("॥"), "||");
    }

    #[test]
    fn test_unknown_characters_reported() {
        let c = encode_practical_with_diagnostics("test");
        assert_eq!(c.output, "");
        assert_eq!(c.unmapped.len(), 4);
        // '$'는 ASCII 문장 부호라 그대로 통과
        assert_eq!(encode_practical("ਕ$"), "ka$");
    }

    #[test]
    fn test_stray_modifiers_skipped() {
        let c = encode_practical_with_diagnostics("ੰੱ");
        assert_eq!(c.output, "");
        assert!(c.is_clean());
    }
}
