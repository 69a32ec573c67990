//! 归一化模块：文本归一化、数值提取与单位折叠
pub mod text;
pub mod number;
pub mod unit;

pub use self::text::{normalize, RecognizedText};
pub use self::number::extract_number;
pub use self::unit::{builtin_folder, normalize_units};
