//! AnmolLipi 자판 키 -> 유니코드 구르무키 매핑
//!
//! 세 종류의 테이블이 있습니다:
//! - 특수 조합: 2~3 글자 키 (단일 키보다 먼저 검사, 선언 순서가 우선순위)
//! - 기본 키: 한 글자 키
//! - 받침 결합 자음: 앞 자음 아래에 붙는 키 (੍ਰ, ੍ਵ 등)

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

/// sihari 키 (자음보다 먼저 입력됨)
pub const SIHARI_KEY: char = 'i';

/// tippi 키 (두 표기 모두 허용)
pub const TIPPI_KEYS: [char; 2] = ['M', 'µ'];

/// 모음 받침 ੳ (tippi에 붙을 모음이 없을 때 삽입)
pub const MUKTA: char = '\u{0A73}';

#[rustfmt::skip]
pub const SPECIAL_COMBINATIONS: &[(&str, &str)] = &[
    ("<>", "ੴ"),
    ("ÅÆ", "ੴ"),
    ("[]", "॥"),
    ("]", "॥"),
    ("[", "।"),
    ("W", "ਾਂ"),
    // udaat
    ("`N", "ਁ"), ("`ˆ", "ਁ"), ("~N", "ਁ"), ("~ˆ", "ਁ"),
    ("ƒ", "ਨੂੰ"),

    // ਅ + 모음 부호
    ("Aw", "ਆ"), ("AW", "ਆਂ"), ("AY", "ਐ"), ("AO", "ਔ"),
    // ੲ + 모음 부호
    ("ie", "ਇ"), ("eI", "ਈ"), ("ey", "ਏ"),
    // ੳ + 모음 부호
    ("au", "ਉ"), ("aU", "ਊ"), ("E", "ਓ"),

    // 자음 + nukta (합성 문자가 있는 것)
    ("sæ", "\u{0A36}"),
    ("Kæ", "\u{0A59}"),
    ("gæ", "\u{0A5A}"),
    ("jæ", "\u{0A5B}"),
    ("Pæ", "\u{0A5E}"),
    ("læ", "\u{0A33}"),
    // 합성 문자가 없는 것
    ("kæ", "\u{0A15}\u{0A3C}"),
    ("Aæ", "\u{0A05}\u{0A3C}"),
];

#[rustfmt::skip]
const BASE_KEYS: &[(char, &str)] = &[
    // 모음 받침
    ('a', "ੳ"), ('A', "ਅ"), ('e', "ੲ"),

    // 모음 부호 (ü, ¨ 는 대체 표기)
    ('w', "ਾ"), ('i', "ਿ"), ('I', "ੀ"),
    ('u', "ੁ"), ('ü', "ੁ"), ('U', "ੂ"), ('¨', "ੂ"),
    ('y', "ੇ"), ('Y', "ੈ"), ('o', "ੋ"), ('O', "ੌ"),

    // 비음, nukta, 비사르가
    ('M', "ੰ"), ('µ', "ੰ"),
    ('N', "ਂ"), ('ˆ', "ਂ"),
    ('æ', "਼"),
    ('Ú', "ਃ"),

    ('¡', "ੴ"), ('¤', "ੴ"),

    // 자음
    ('s', "ਸ"), ('h', "ਹ"), ('k', "ਕ"), ('K', "ਖ"), ('g', "ਗ"),
    ('G', "ਘ"), ('|', "ਙ"), ('c', "ਚ"), ('C', "ਛ"), ('j', "ਜ"),
    ('J', "ਝ"), ('\\', "ਞ"), ('t', "ਟ"), ('T', "ਠ"), ('f', "ਡ"),
    ('F', "ਢ"), ('x', "ਣ"), ('q', "ਤ"), ('Q', "ਥ"), ('d', "ਦ"),
    ('D', "ਧ"), ('n', "ਨ"), ('p', "ਪ"), ('P', "ਫ"), ('b', "ਬ"),
    ('B', "ਭ"), ('m', "ਮ"), ('X', "ਯ"), ('r', "ਰ"), ('l', "ਲ"),
    ('v', "ਵ"), ('V', "ੜ"),

    // 합성 nukta 자음
    ('L', "\u{0A33}"),
    ('S', "\u{0A36}"),
    ('z', "\u{0A5B}"),
    ('Z', "\u{0A5A}"),
    ('^', "\u{0A59}"),
    ('&', "\u{0A5E}"),

    // addak (` 와 ~), virama
    ('`', "ੱ"), ('~', "ੱ"),
    ('@', "੍"),

    ('0', "੦"), ('1', "੧"), ('2', "੨"), ('3', "੩"), ('4', "੪"),
    ('5', "੫"), ('6', "੬"), ('7', "੭"), ('8', "੮"), ('9', "੯"),

    (' ', " "), ('\n', "\n"),
];

#[rustfmt::skip]
const SUBJOINED_KEYS: &[(char, &str)] = &[
    ('H', "੍ਹ"),  // pair haha
    ('†', "੍ਟ"),  // pair tainka
    ('˜', "੍ਨ"),  // pair nanna
    ('œ', "੍ਤ"),  // pair tatta
    ('R', "੍ਰ"),  // pair rara
    ('®', "੍ਰ"),
    ('Î', "੍ਯ"),  // sanyukt yayya
    ('´', "ੵ"),   // yakash
    ('Ï', "ੵ"),
    ('Í', "੍ਵ"),  // pair vava
    ('ç', "੍ਚ"),  // pair chachha
];

lazy_static! {
    /// 한 글자 키 매핑
    pub static ref BASE_MAP: HashMap<char, &'static str> =
        BASE_KEYS.iter().copied().collect();

    /// 받침 결합 자음 매핑
    pub static ref SUBJOINED_MAP: HashMap<char, &'static str> =
        SUBJOINED_KEYS.iter().copied().collect();

    /// 어떤 테이블에든 나오는 키 문자 전체
    static ref LEGACY_KEY_CHARS: HashSet<char> = BASE_KEYS
        .iter()
        .chain(SUBJOINED_KEYS.iter())
        .map(|(key, _)| *key)
        .chain(SPECIAL_COMBINATIONS.iter().flat_map(|(key, _)| key.chars()))
        .collect();
}

/// 한 글자 키 조회
pub fn map_base(key: char) -> Option<&'static str> {
    BASE_MAP.get(&key).copied()
}

/// 받침 결합 자음 키 조회
pub fn map_subjoined(key: char) -> Option<&'static str> {
    SUBJOINED_MAP.get(&key).copied()
}

pub fn is_tippi_key(key: char) -> bool {
    TIPPI_KEYS.contains(&key)
}

/// AnmolLipi 테이블이 인식하는 키인지
pub fn is_legacy_key(key: char) -> bool {
    LEGACY_KEY_CHARS.contains(&key)
}

/// 인식하는 키 전체 (정렬됨)
pub fn legacy_key_chars() -> Vec<char> {
    let mut keys: Vec<char> = LEGACY_KEY_CHARS.iter().copied().collect();
    keys.sort_unstable();
    keys
}
