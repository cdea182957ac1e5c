//! AnmolLipi 레거시 입력 -> 유니코드 구르무키 디코더
//!
//! sihari(ਿ)는 자음보다 먼저 입력되지만 유니코드에서는 자음(과 그 아래
//! 결합 자음들) 뒤에 와야 합니다. 디코더는 sihari를 만나면 출력 위치만
//! 기억해 두었다가 다음 기본 키가 출력된 뒤에 덧붙입니다.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::core::anmollipi::{
    is_tippi_key, map_base, map_subjoined, MUKTA, SIHARI_KEY, SPECIAL_COMBINATIONS,
};
use crate::core::diagnostics::{Codec, Conversion, UnmappedCodepoint};
use crate::core::error::UnsupportedEncodingError;
use crate::core::normalize::nfc;
use crate::core::tables::{classify, CodepointClass, SIHARI, TIPPI};
use crate::core::tokenizer::{longest_match, max_key_len};

/// 지원하는 레거시 인코딩 이름
pub const SUPPORTED_LEGACY_ENCODINGS: &[&str] = &["anmollipi"];

pub const DEFAULT_LEGACY_ENCODING: &str = "anmollipi";

/// 레거시 인코딩
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyEncoding {
    AnmolLipi,
}

impl FromStr for LegacyEncoding {
    type Err = UnsupportedEncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match SUPPORTED_LEGACY_ENCODINGS
            .iter()
            .find(|name| name.eq_ignore_ascii_case(s))
        {
            Some(&"anmollipi") => Ok(LegacyEncoding::AnmolLipi),
            _ => Err(UnsupportedEncodingError::new(s)),
        }
    }
}

impl fmt::Display for LegacyEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LegacyEncoding::AnmolLipi => write!(f, "anmollipi"),
        }
    }
}

/// 디코더 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// 일반 스캔
    Scanning,
    /// sihari 대기 중 (at: sihari를 읽었을 때의 출력 길이)
    SihariPending { at: usize },
}

/// AnmolLipi 디코더
pub struct LegacyDecoder {
    state: State,
    /// 특수 조합 검사 범위 (가장 긴 키 길이)
    combo_window: usize,
    /// 출력 버퍼 (추가만 함)
    output: String,
    unmapped: Vec<UnmappedCodepoint>,
}

impl LegacyDecoder {
    pub fn new() -> Self {
        Self {
            state: State::Scanning,
            combo_window: max_key_len(SPECIAL_COMBINATIONS),
            output: String::new(),
            unmapped: Vec::new(),
        }
    }

    /// 입력 전체를 디코딩
    pub fn decode(mut self, text: &str) -> Conversion {
        let input: Vec<char> = text.chars().collect();
        let mut pos = 0;
        while pos < input.len() {
            pos += self.step(&input, pos);
        }
        self.finish()
    }

    /// pos 위치에서 한 단계 진행, 소비한 문자 수 반환
    fn step(&mut self, input: &[char], pos: usize) -> usize {
        // 특수 조합이 가장 먼저
        let window = &input[..input.len().min(pos + self.combo_window)];
        if let Some(m) = longest_match(window, pos, SPECIAL_COMBINATIONS) {
            debug!("combination at {}: {} chars -> {}", pos, m.key_len, m.target);
            let base_at = self.output.len();
            self.output.push_str(m.target);
            // nukta 자음 조합도 sihari의 자리
            if m.target.chars().next().map(classify) == Some(CodepointClass::Consonant) {
                self.flush_sihari(base_at);
            }
            return m.key_len;
        }

        let key = input[pos];

        if key == SIHARI_KEY {
            self.feed_sihari(key, pos);
            return 1;
        }

        if is_tippi_key(key) {
            if !self.has_vowel_host() {
                self.output.push(MUKTA);
            }
            self.output.push(TIPPI);
            return 1;
        }

        if let Some(mapped) = map_base(key) {
            return self.feed_base(mapped, input, pos);
        }

        debug!("skipping unmapped key {:?} at {}", key, pos);
        self.unmapped
            .push(UnmappedCodepoint::new(Codec::AnmolLipi, key, pos));
        1
    }

    fn feed_sihari(&mut self, key: char, pos: usize) {
        match self.state {
            State::Scanning => {
                self.state = State::SihariPending {
                    at: self.output.len(),
                };
            }
            State::SihariPending { .. } => {
                // 대기 중인 sihari는 하나뿐
                debug!("dropping repeated sihari at {}", pos);
                self.unmapped
                    .push(UnmappedCodepoint::new(Codec::AnmolLipi, key, pos));
            }
        }
    }

    /// 기본 키 + 뒤따르는 결합 자음들
    fn feed_base(&mut self, mapped: &str, input: &[char], pos: usize) -> usize {
        let base_at = self.output.len();
        self.output.push_str(mapped);

        let mut consumed = 1;
        while let Some(stacked) = input.get(pos + consumed).and_then(|c| map_subjoined(*c)) {
            self.output.push_str(stacked);
            consumed += 1;
        }

        self.flush_sihari(base_at);
        consumed
    }

    /// 대기 중인 sihari를 base_at 이후에 출력된 단위 뒤에 붙임
    fn flush_sihari(&mut self, base_at: usize) {
        if let State::SihariPending { at } = self.state {
            if at <= base_at {
                self.output.push(SIHARI);
                self.state = State::Scanning;
            }
        }
    }

    /// tippi가 붙을 모음(자음 포함)이 바로 앞에 있는지
    fn has_vowel_host(&self) -> bool {
        matches!(
            self.output.chars().last().map(classify),
            Some(
                CodepointClass::Consonant
                    | CodepointClass::IndependentVowel
                    | CodepointClass::VowelDiacritic
                    | CodepointClass::NuktaMark
            )
        )
    }

    /// 남은 sihari를 붙이고 줄 단위로 정리
    fn finish(mut self) -> Conversion {
        if let State::SihariPending { .. } = self.state {
            self.output.push(SIHARI);
        }

        let lines: Vec<&str> = self
            .output
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        Conversion {
            output: nfc(&lines.join("\n\n")),
            unmapped: self.unmapped,
        }
    }
}

impl Default for LegacyDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// 레거시 텍스트를 유니코드 구르무키로 변환
pub fn decode_legacy(text: &str, encoding: &str) -> Result<String, UnsupportedEncodingError> {
    decode_legacy_with_diagnostics(text, encoding).map(|c| c.output)
}

/// 진단 정보와 함께 변환
pub fn decode_legacy_with_diagnostics(
    text: &str,
    encoding: &str,
) -> Result<Conversion, UnsupportedEncodingError> {
    let encoding: LegacyEncoding = encoding.parse()?;
    if text.is_empty() {
        return Ok(Conversion::default());
    }

    debug!("decoding {} chars of {}", text.chars().count(), encoding);
    let conversion = match encoding {
        LegacyEncoding::AnmolLipi => LegacyDecoder::new().decode(text),
    };
    Ok(conversion)
}
