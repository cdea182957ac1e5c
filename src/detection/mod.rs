//! 입력 감지 및 검증 모듈

mod auto_detect;
pub mod validator;

pub use auto_detect::{detect_input_kind, InputKind};
pub use validator::{contains_gurmukhi, gurmukhi_ratio, is_gurmukhi, validate_gurmukhi_text};
