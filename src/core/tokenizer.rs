//! 최장 일치 토크나이저
//!
//! 커서 위치에서 특수 조합 키 중 가장 긴 것을 찾습니다.
//! 길이가 같으면 먼저 선언된 키가 이깁니다.

/// 일치 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// 소비할 입력 문자 수
    pub key_len: usize,
    pub target: &'static str,
}

/// 선언 순서가 우선순위인 조합 테이블에서 최장 일치
pub fn longest_match(
    input: &[char],
    pos: usize,
    combos: &[(&'static str, &'static str)],
) -> Option<Match> {
    let remaining = input.get(pos..)?;
    let mut best: Option<Match> = None;

    for (key, target) in combos {
        let key_len = key.chars().count();
        if key_len == 0 || key_len > remaining.len() {
            continue;
        }
        if !key.chars().zip(remaining).all(|(k, c)| k == *c) {
            continue;
        }
        // 동률이면 기존 것을 유지
        if best.map_or(true, |b| key_len > b.key_len) {
            best = Some(Match {
                key_len,
                target: *target,
            });
        }
    }

    best
}

/// 조합 테이블의 가장 긴 키 길이
pub fn max_key_len(combos: &[(&'static str, &'static str)]) -> usize {
    combos
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0)
}
