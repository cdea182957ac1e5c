//! 구르무키 변환 엔진
//!
//! 세 가지 코덱으로 구성됩니다:
//! - 유니코드 구르무키 → ISO 15919 로마자 (`iso15919`)
//! - 유니코드 구르무키 → 실용 로마자 (`practical`)
//! - AnmolLipi 레거시 키 입력 → 유니코드 구르무키 (`legacy`)
//!
//! 모든 코덱은 순수 함수이며, 공유 상태는 불변 테이블뿐입니다.

pub mod anmollipi;
pub mod converter;
pub mod diagnostics;
pub mod error;
pub mod iso15919;
pub mod legacy;
pub mod normalize;
pub mod practical;
pub mod scan;
pub mod tables;
pub mod tokenizer;
