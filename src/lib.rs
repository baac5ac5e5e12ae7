//! autoneg: HTTP Acceptヘッダーを品質値順の節リストに変換するライブラリ
//!
//! ```
//! let clauses = autoneg::parse("audio/*; q=0.2, audio/basic");
//! assert_eq!(clauses[0].media_type(), "audio/basic");
//! assert_eq!(clauses[1].quality, 0.2);
//! ```

pub mod accept;
pub mod error;

pub use accept::*;
pub use error::*;
