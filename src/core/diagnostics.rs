//! 매핑되지 않은 코드포인트 진단
//!
//! 변환은 실패하지 않습니다. 매핑이 없는 문자는 출력에서 빠지고
//! 여기에 기록됩니다.

use std::fmt;

/// 진단을 남긴 코덱
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    Iso15919,
    Practical,
    AnmolLipi,
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Codec::Iso15919 => "iso15919",
            Codec::Practical => "practical",
            Codec::AnmolLipi => "anmollipi",
        };
        write!(f, "{}", name)
    }
}

/// 건너뛴 코드포인트 하나
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmappedCodepoint {
    pub codec: Codec,
    pub ch: char,
    /// 입력에서의 위치 (문자 단위)
    pub position: usize,
}

impl UnmappedCodepoint {
    pub fn new(codec: Codec, ch: char, position: usize) -> Self {
        Self { codec, ch, position }
    }
}

impl fmt::Display for UnmappedCodepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: unmapped U+{:04X} {:?} at {}",
            self.codec, self.ch as u32, self.ch, self.position
        )
    }
}

/// 변환 결과 + 진단
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversion {
    pub output: String,
    pub unmapped: Vec<UnmappedCodepoint>,
}

impl Conversion {
    /// 건너뛴 문자가 없었는지
    pub fn is_clean(&self) -> bool {
        self.unmapped.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let u = UnmappedCodepoint::new(Codec::Practical, 'x', 3);
        assert_eq!(u.to_string(), "practical: unmapped U+0078 'x' at 3");
    }

    #[test]
    fn test_is_clean() {
        let mut c = Conversion::default();
        assert!(c.is_clean());
        c.unmapped.push(UnmappedCodepoint::new(Codec::AnmolLipi, '#', 0));
        assert!(!c.is_clean());
    }
}
