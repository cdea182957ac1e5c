//! 인코더용 입력 전처리와 스캔 커서
//!
//! 입력을 정규 분해한 뒤 "자음 + nukta"를 하나의 글리프로 묶습니다.
//! 합성 문자(ਸ਼)로 입력하든 분해형(ਸ + ਼)으로 입력하든 같은 글리프가 됩니다.

use crate::core::normalize::{compose_nukta, nfd};
use crate::core::tables::{
    classify, CodepointClass, AIRHA, IRI, NUKTA, OORA, VIRAMA, YAKASH, YAYYA,
};

/// 스캔 단위
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    /// 합성 문자가 없는 nukta 자음 (예: ਕ਼)
    pub nukta: bool,
}

impl Glyph {
    pub fn new(ch: char) -> Self {
        Self { ch, nukta: false }
    }

    pub fn class(&self) -> CodepointClass {
        classify(self.ch)
    }

    pub fn is(&self, ch: char) -> bool {
        self.ch == ch && !self.nukta
    }
}

/// 모음 받침 + 모음 부호 = 독립 모음
fn fold_vowel_carrier(carrier: char, sign: char) -> Option<char> {
    match (carrier, sign) {
        (OORA, 'ੁ') => Some('ਉ'),
        (OORA, 'ੂ') => Some('ਊ'),
        (OORA, 'ੋ') => Some('ਓ'),
        (AIRHA, 'ਾ') => Some('ਆ'),
        (AIRHA, 'ੈ') => Some('ਐ'),
        (AIRHA, 'ੌ') => Some('ਔ'),
        (IRI, 'ਿ') => Some('ਇ'),
        (IRI, 'ੀ') => Some('ਈ'),
        (IRI, 'ੇ') => Some('ਏ'),
        _ => None,
    }
}

/// 텍스트를 글리프 열로 변환
pub fn fold_glyphs(text: &str) -> Vec<Glyph> {
    let decomposed = nfd(text);
    let mut glyphs = Vec::with_capacity(decomposed.len());
    let mut chars = decomposed.chars().peekable();

    while let Some(c) = chars.next() {
        let next = chars.peek().copied();

        if classify(c) == CodepointClass::Consonant && next == Some(NUKTA) {
            chars.next();
            match compose_nukta(c) {
                Some(composite) => glyphs.push(Glyph::new(composite)),
                None => glyphs.push(Glyph { ch: c, nukta: true }),
            }
            continue;
        }

        if let Some(vowel) = next.and_then(|sign| fold_vowel_carrier(c, sign)) {
            chars.next();
            glyphs.push(Glyph::new(vowel));
            continue;
        }

        // yakash는 ੍ਯ 와 같은 결합
        if c == YAKASH {
            glyphs.push(Glyph::new(VIRAMA));
            glyphs.push(Glyph::new(YAYYA));
            continue;
        }

        glyphs.push(Glyph::new(c));
    }

    glyphs
}

/// 글리프 열 위의 커서 (고정 길이 lookahead)
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    glyphs: &'a [Glyph],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(glyphs: &'a [Glyph]) -> Self {
        Self { glyphs, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn current(&self) -> Option<Glyph> {
        self.peek(0)
    }

    pub fn next(&self) -> Option<Glyph> {
        self.peek(1)
    }

    pub fn next2(&self) -> Option<Glyph> {
        self.peek(2)
    }

    pub fn peek(&self, offset: usize) -> Option<Glyph> {
        self.glyphs.get(self.pos + offset).copied()
    }

    /// offset 위치의 글리프가 주어진 문자인지
    pub fn peek_is(&self, offset: usize, ch: char) -> bool {
        self.peek(offset).is_some_and(|g| g.is(ch))
    }

    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n.max(1)).min(self.glyphs.len());
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.glyphs.len()
    }
}
