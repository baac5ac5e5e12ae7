//! HTTP Acceptヘッダーの解析
//!
//! ヘッダー値を節に分解し、品質値の降順（同値は入力順）に並べて返す。
//! 実際のコンテントネゴシエーションは呼び出し側の責務。

pub mod clause;
pub mod parser;
pub mod utils;

pub use clause::{Clause, DEFAULT_QUALITY};
pub use parser::{parse, AcceptParser, AcceptParserBuilder};
