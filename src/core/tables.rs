//! 구르무키 문자 분류 및 코덱별 매핑 테이블
//!
//! 테이블은 최초 사용 시 한 번 만들어지고 이후 읽기 전용으로만 쓰입니다.
//! 여러 스레드가 잠금 없이 공유할 수 있습니다.

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

use crate::core::scan::Glyph;

pub const VIRAMA: char = '\u{0A4D}';
pub const TIPPI: char = '\u{0A70}';
pub const BINDI: char = '\u{0A02}';
pub const ADAK_BINDI: char = '\u{0A01}';
pub const ADDAK: char = '\u{0A71}';
pub const NUKTA: char = '\u{0A3C}';
pub const SIHARI: char = '\u{0A3F}';
pub const YAKASH: char = '\u{0A75}';
pub const RARA: char = '\u{0A30}';
pub const YAYYA: char = '\u{0A2F}';
pub const AIRHA: char = '\u{0A05}';
pub const IRI: char = '\u{0A72}';
pub const OORA: char = '\u{0A73}';
pub const DANDA: char = '\u{0964}';
pub const DOUBLE_DANDA: char = '\u{0965}';

/// 코드포인트 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodepointClass {
    Consonant,
    IndependentVowel,
    VowelDiacritic,
    NasalizationMark,
    GeminationMark,
    NuktaMark,
    ViramaMark,
    Digit,
    Punctuation,
    SpecialSymbol,
    Whitespace,
    Unclassified,
}

/// 문자 하나를 분류
/// 자음과 모음 부호는 서로 겹치지 않음
pub fn classify(c: char) -> CodepointClass {
    match c {
        // ਕ..ਨ, ਪ..ਰ, ਲ ਲ਼ ਵ ਸ਼ ਸ ਹ, ਖ਼ ਗ਼ ਜ਼ ੜ ਫ਼ (38개)
        '\u{0A15}'..='\u{0A28}'
        | '\u{0A2A}'..='\u{0A30}'
        | '\u{0A32}'
        | '\u{0A33}'
        | '\u{0A35}'
        | '\u{0A36}'
        | '\u{0A38}'
        | '\u{0A39}'
        | '\u{0A59}'..='\u{0A5C}'
        | '\u{0A5E}' => CodepointClass::Consonant,

        // ਅ..ਊ, ਏ ਐ, ਓ ਔ, 모음 받침 ੲ ੳ
        '\u{0A05}'..='\u{0A0A}'
        | '\u{0A0F}'
        | '\u{0A10}'
        | '\u{0A13}'
        | '\u{0A14}'
        | IRI
        | OORA => CodepointClass::IndependentVowel,

        '\u{0A3E}'..='\u{0A42}' | '\u{0A47}' | '\u{0A48}' | '\u{0A4B}' | '\u{0A4C}' => {
            CodepointClass::VowelDiacritic
        }

        TIPPI | BINDI | ADAK_BINDI => CodepointClass::NasalizationMark,
        ADDAK => CodepointClass::GeminationMark,
        NUKTA => CodepointClass::NuktaMark,
        VIRAMA => CodepointClass::ViramaMark,
        '\u{0A66}'..='\u{0A6F}' => CodepointClass::Digit,

        // ੴ, 비사르가, 우다트
        '\u{0A74}' | '\u{0A03}' | '\u{0A51}' => CodepointClass::SpecialSymbol,

        DANDA | DOUBLE_DANDA => CodepointClass::Punctuation,
        c if c.is_ascii_punctuation() => CodepointClass::Punctuation,
        c if c.is_whitespace() => CodepointClass::Whitespace,

        _ => CodepointClass::Unclassified,
    }
}

/// 문장 부호 중 문장 경계로 취급하는 것
pub fn is_sentence_punctuation(c: char) -> bool {
    matches!(c, DANDA | DOUBLE_DANDA | '.' | ',' | '?' | '!' | ';' | ':')
}

/// 한 코덱의 클래스별 매핑 테이블 묶음
#[derive(Debug)]
pub struct CodecTables {
    pub name: &'static str,
    consonants: HashMap<char, &'static str>,
    /// 합성 문자가 없는 "자음 + nukta" 형태 (기본 자음 기준)
    nukta_consonants: HashMap<char, &'static str>,
    vowels: HashMap<char, &'static str>,
    vowel_diacritics: HashMap<char, &'static str>,
    modifiers: HashMap<char, &'static str>,
    digits: HashMap<char, &'static str>,
    punctuation: HashMap<char, &'static str>,
    symbols: HashMap<char, &'static str>,
}

fn table(pairs: &[(char, &'static str)]) -> HashMap<char, &'static str> {
    pairs.iter().copied().collect()
}

impl CodecTables {
    /// 자음 (nukta 변이형 포함)
    pub fn consonant(&self, glyph: Glyph) -> Option<&'static str> {
        if glyph.nukta {
            if let Some(form) = self.nukta_consonants.get(&glyph.ch) {
                return Some(form);
            }
        }
        self.consonants.get(&glyph.ch).copied()
    }

    pub fn vowel(&self, c: char) -> Option<&'static str> {
        self.vowels.get(&c).copied()
    }

    pub fn vowel_diacritic(&self, c: char) -> Option<&'static str> {
        self.vowel_diacritics.get(&c).copied()
    }

    pub fn modifier(&self, c: char) -> Option<&'static str> {
        self.modifiers.get(&c).copied()
    }

    /// 클래스에 맞는 테이블에서 조회
    /// 매핑이 없으면 None (공백과 ASCII 문장 부호는 그대로 통과)
    pub fn lookup(&self, glyph: Glyph) -> Option<&'static str> {
        let c = glyph.ch;
        match classify(c) {
            CodepointClass::Consonant => self.consonant(glyph),
            CodepointClass::IndependentVowel => self.vowel(c),
            CodepointClass::VowelDiacritic => self.vowel_diacritic(c),
            CodepointClass::NasalizationMark
            | CodepointClass::GeminationMark
            | CodepointClass::NuktaMark
            | CodepointClass::ViramaMark => self.modifier(c),
            CodepointClass::Digit => self.digits.get(&c).copied(),
            CodepointClass::Punctuation => self.punctuation.get(&c).copied(),
            CodepointClass::SpecialSymbol => self.symbols.get(&c).copied(),
            CodepointClass::Whitespace | CodepointClass::Unclassified => None,
        }
    }

    /// 모음 부호나 virama인지 (내재 모음 'a' 생략 조건)
    pub fn suppresses_inherent(glyph: Option<Glyph>) -> bool {
        matches!(
            glyph.map(|g| classify(g.ch)),
            Some(CodepointClass::VowelDiacritic) | Some(CodepointClass::ViramaMark)
        )
    }
}

const DIGITS: [(char, &str); 10] = [
    ('੦', "0"),
    ('੧', "1"),
    ('੨', "2"),
    ('੩', "3"),
    ('੪', "4"),
    ('੫', "5"),
    ('੬', "6"),
    ('੭', "7"),
    ('੮', "8"),
    ('੯', "9"),
];

const PUNCTUATION: [(char, &str); 2] = [(DANDA, "|"), (DOUBLE_DANDA, "||")];

#[rustfmt::skip]
const ISO_CONSONANTS: [(char, &str); 38] = [
    ('ਕ', "k"), ('ਖ', "kh"), ('ਗ', "g"), ('ਘ', "gh"), ('ਙ', "ṅ"),
    ('ਚ', "c"), ('ਛ', "ch"), ('ਜ', "j"), ('ਝ', "jh"), ('ਞ', "ñ"),
    ('ਟ', "ṭ"), ('ਠ', "ṭh"), ('ਡ', "ḍ"), ('ਢ', "ḍh"), ('ਣ', "ṇ"),
    ('ਤ', "t"), ('ਥ', "th"), ('ਦ', "d"), ('ਧ', "dh"), ('ਨ', "n"),
    ('ਪ', "p"), ('ਫ', "ph"), ('ਬ', "b"), ('ਭ', "bh"), ('ਮ', "m"),
    ('ਯ', "y"), ('ਰ', "r"), ('ਲ', "l"), ('ਵ', "v"), ('ਸ', "s"),
    ('ਹ', "h"), ('ੜ', "ṛ"),
    ('\u{0A33}', "ḷ"),  // ਲ਼
    ('\u{0A36}', "ś"),  // ਸ਼
    ('\u{0A59}', "ḵh"), // ਖ਼
    ('\u{0A5A}', "ġ"),  // ਗ਼
    ('\u{0A5B}', "z"),  // ਜ਼
    ('\u{0A5E}', "f"),  // ਫ਼
];

#[rustfmt::skip]
const PRACTICAL_CONSONANTS: [(char, &str); 38] = [
    ('ਕ', "k"), ('ਖ', "kh"), ('ਗ', "g"), ('ਘ', "gh"), ('ਙ', "ng"),
    ('ਚ', "ch"), ('ਛ', "chh"), ('ਜ', "j"), ('ਝ', "jh"), ('ਞ', "ny"),
    ('ਟ', "ṭ"), ('ਠ', "ṭh"), ('ਡ', "ḍ"), ('ਢ', "ḍh"), ('ਣ', "ṇ"),
    ('ਤ', "t"), ('ਥ', "th"), ('ਦ', "d"), ('ਧ', "dh"), ('ਨ', "n"),
    ('ਪ', "p"), ('ਫ', "ph"), ('ਬ', "b"), ('ਭ', "bh"), ('ਮ', "m"),
    ('ਯ', "y"), ('ਰ', "r"), ('ਲ', "l"), ('ਵ', "v"), ('ਸ', "s"),
    ('ਹ', "h"), ('ੜ', "ṛ"),
    ('\u{0A33}', "ḷ"),        // ਲ਼
    ('\u{0A36}', "sh"),       // ਸ਼
    ('\u{0A59}', "k\u{0332}h"), // ਖ਼ (ਖ 와 구분)
    ('\u{0A5A}', "ġh"),       // ਗ਼ (ਘ 와 구분)
    ('\u{0A5B}', "z"),        // ਜ਼
    ('\u{0A5E}', "f"),        // ਫ਼
];

/// 합성 문자가 없는 nukta 자음
const ISO_NUKTA_CONSONANTS: [(char, &str); 1] = [('ਕ', "q")];
const PRACTICAL_NUKTA_CONSONANTS: [(char, &str); 1] = [('ਕ', "q")];

#[rustfmt::skip]
const ISO_VOWELS: [(char, &str); 12] = [
    ('ਅ', "a"), ('ਆ', "ā"), ('ਇ', "i"), ('ਈ', "ī"), ('ਉ', "u"),
    ('ਊ', "ū"), ('ਏ', "ē"), ('ਐ', "ai"), ('ਓ', "ō"), ('ਔ', "au"),
    (IRI, "i"), (OORA, "u"),
];

#[rustfmt::skip]
const PRACTICAL_VOWELS: [(char, &str); 12] = [
    ('ਅ', "a"), ('ਆ', "aa"), ('ਇ', "i"), ('ਈ', "ee"), ('ਉ', "u"),
    ('ਊ', "oo"), ('ਏ', "e"), ('ਐ', "ai"), ('ਓ', "o"), ('ਔ', "au"),
    (IRI, "i"), (OORA, "u"),
];

#[rustfmt::skip]
const ISO_VOWEL_DIACRITICS: [(char, &str); 9] = [
    ('ਾ', "ā"), ('ਿ', "i"), ('ੀ', "ī"), ('ੁ', "u"), ('ੂ', "ū"),
    ('ੇ', "ē"), ('ੈ', "ai"), ('ੋ', "ō"), ('ੌ', "au"),
];

#[rustfmt::skip]
const PRACTICAL_VOWEL_DIACRITICS: [(char, &str); 9] = [
    ('ਾ', "aa"), ('ਿ', "i"), ('ੀ', "ee"), ('ੁ', "u"), ('ੂ', "oo"),
    ('ੇ', "e"), ('ੈ', "ai"), ('ੋ', "o"), ('ੌ', "au"),
];

// virama, addak, nukta는 다른 규칙이 소비하는 구조 표시이므로 빈 문자열
const ISO_MODIFIERS: [(char, &str); 6] = [
    (VIRAMA, ""),
    (TIPPI, "ṁ"),
    (BINDI, "ṃ"),
    (ADAK_BINDI, "m\u{0310}"),
    (ADDAK, ""),
    (NUKTA, ""),
];

const PRACTICAL_MODIFIERS: [(char, &str); 6] = [
    (VIRAMA, ""),
    (TIPPI, "n"),
    (BINDI, "n"),
    (ADAK_BINDI, "n"),
    (ADDAK, ""),
    (NUKTA, ""),
];

const ISO_SYMBOLS: [(char, &str); 3] = [
    ('\u{0A74}', "ik ōaṅkār"), // ੴ
    ('\u{0A03}', "ḥ"),         // 비사르가
    ('\u{0A51}', ""),          // 우다트
];

const PRACTICAL_SYMBOLS: [(char, &str); 3] = [
    ('\u{0A74}', "ik oankaar"),
    ('\u{0A03}', "h"),
    ('\u{0A51}', ""),
];

lazy_static! {
    /// ISO 15919 테이블
    pub static ref ISO15919: CodecTables = CodecTables {
        name: "iso15919",
        consonants: table(&ISO_CONSONANTS),
        nukta_consonants: table(&ISO_NUKTA_CONSONANTS),
        vowels: table(&ISO_VOWELS),
        vowel_diacritics: table(&ISO_VOWEL_DIACRITICS),
        modifiers: table(&ISO_MODIFIERS),
        digits: table(&DIGITS),
        punctuation: table(&PUNCTUATION),
        symbols: table(&ISO_SYMBOLS),
    };

    /// 실용 로마자 테이블
    pub static ref PRACTICAL: CodecTables = CodecTables {
        name: "practical",
        consonants: table(&PRACTICAL_CONSONANTS),
        nukta_consonants: table(&PRACTICAL_NUKTA_CONSONANTS),
        vowels: table(&PRACTICAL_VOWELS),
        vowel_diacritics: table(&PRACTICAL_VOWEL_DIACRITICS),
        modifiers: table(&PRACTICAL_MODIFIERS),
        digits: table(&DIGITS),
        punctuation: table(&PUNCTUATION),
        symbols: table(&PRACTICAL_SYMBOLS),
    };

    /// 비음 표시 뒤에서 'm'으로 읽히는 순음 자음 (ਪ ਫ ਬ ਭ ਮ)
    pub static ref LABIAL_CONSONANTS: HashSet<char> =
        ['ਪ', 'ਫ', 'ਬ', 'ਭ', 'ਮ'].into_iter().collect();
}

/// 순음 자음인지 확인 (nukta 변이형 제외)
pub fn is_labial(glyph: Option<Glyph>) -> bool {
    matches!(glyph, Some(g) if !g.nukta && LABIAL_CONSONANTS.contains(&g.ch))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(c: char) -> Glyph {
        Glyph::new(c)
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify('ਕ'), CodepointClass::Consonant);
        assert_eq!(classify('\u{0A36}'), CodepointClass::Consonant);
        assert_eq!(classify('ੜ'), CodepointClass::Consonant);
        assert_eq!(classify('ਅ'), CodepointClass::IndependentVowel);
        assert_eq!(classify('ਾ'), CodepointClass::VowelDiacritic);
        assert_eq!(classify(TIPPI), CodepointClass::NasalizationMark);
        assert_eq!(classify(BINDI), CodepointClass::NasalizationMark);
        assert_eq!(classify(ADDAK), CodepointClass::GeminationMark);
        assert_eq!(classify(NUKTA), CodepointClass::NuktaMark);
        assert_eq!(classify(VIRAMA), CodepointClass::ViramaMark);
        assert_eq!(classify('੭'), CodepointClass::Digit);
        assert_eq!(classify('।'), CodepointClass::Punctuation);
        assert_eq!(classify(','), CodepointClass::Punctuation);
        assert_eq!(classify('ੴ'), CodepointClass::SpecialSymbol);
        assert_eq!(classify('\n'), CodepointClass::Whitespace);
        assert_eq!(classify('x'), CodepointClass::Unclassified);
        // 미할당 코드포인트
        assert_eq!(classify('\u{0A29}'), CodepointClass::Unclassified);
    }

    #[test]
    fn test_consonant_table_sizes() {
        let consonants = (0x0A00u32..=0x0A7F)
            .filter_map(char::from_u32)
            .filter(|c| classify(*c) == CodepointClass::Consonant)
            .count();
        assert_eq!(consonants, 38);
        for (c, _) in ISO_CONSONANTS {
            assert_eq!(classify(c), CodepointClass::Consonant);
            assert!(PRACTICAL.consonant(glyph(c)).is_some());
        }
    }

    #[test]
    fn test_iso_lookup() {
        assert_eq!(ISO15919.lookup(glyph('ਠ')), Some("ṭh"));
        assert_eq!(ISO15919.lookup(glyph('ਾ')), Some("ā"));
        assert_eq!(ISO15919.lookup(glyph(VIRAMA)), Some(""));
        assert_eq!(ISO15919.lookup(glyph(TIPPI)), Some("ṁ"));
        assert_eq!(ISO15919.lookup(glyph('੫')), Some("5"));
        assert_eq!(ISO15919.lookup(glyph(DOUBLE_DANDA)), Some("||"));
        assert_eq!(ISO15919.lookup(glyph('x')), None);
    }

    #[test]
    fn test_practical_lookup() {
        assert_eq!(PRACTICAL.lookup(glyph('ਚ')), Some("ch"));
        assert_eq!(PRACTICAL.lookup(glyph('ਛ')), Some("chh"));
        assert_eq!(PRACTICAL.lookup(glyph('ੀ')), Some("ee"));
        assert_eq!(PRACTICAL.lookup(glyph('ੴ')), Some("ik oankaar"));
    }

    #[test]
    fn test_table_names_match_codecs() {
        use crate::core::diagnostics::Codec;
        assert_eq!(ISO15919.name, Codec::Iso15919.to_string());
        assert_eq!(PRACTICAL.name, Codec::Practical.to_string());
    }

    #[test]
    fn test_nukta_consonant() {
        let qaqqa = Glyph { ch: 'ਕ', nukta: true };
        assert_eq!(ISO15919.consonant(qaqqa), Some("q"));
        // 변이형이 없으면 기본 자음으로
        let odd = Glyph { ch: 'ਤ', nukta: true };
        assert_eq!(ISO15919.consonant(odd), Some("t"));
    }

    #[test]
    fn test_labials() {
        assert_eq!(LABIAL_CONSONANTS.len(), 5);
        assert!(is_labial(Some(glyph('ਬ'))));
        assert!(!is_labial(Some(glyph('ਗ'))));
        assert!(!is_labial(Some(glyph('\u{0A5E}'))));
        assert!(!is_labial(None));
    }

    #[test]
    fn test_suppresses_inherent() {
        assert!(CodecTables::suppresses_inherent(Some(glyph('ਿ'))));
        assert!(CodecTables::suppresses_inherent(Some(glyph(VIRAMA))));
        assert!(!CodecTables::suppresses_inherent(Some(glyph('ਕ'))));
        assert!(!CodecTables::suppresses_inherent(None));
    }
}
