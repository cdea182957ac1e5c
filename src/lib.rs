pub mod config;
pub mod core;
pub mod detection;
pub mod request;

pub use crate::core::converter::{convert, convert_with_detection, romanize_legacy, Style};
pub use crate::core::diagnostics::{Conversion, UnmappedCodepoint};
pub use crate::core::error::{TranslitError, UnsupportedEncodingError};
pub use crate::core::iso15919::encode_iso15919;
pub use crate::core::legacy::decode_legacy;
pub use crate::core::practical::encode_practical;
pub use crate::detection::{detect_input_kind, InputKind};
