//! エラー型の定義

use thiserror::Error;

/// 単一のメディアレンジを厳密に解析する際のエラー型
///
/// `parse` 自体は失敗しないため、このエラーは `Clause::from_str` からのみ返される
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// `type/subtype` の形になっていないメディアレンジ
    #[error("Invalid media range: {0}")]
    InvalidMediaRange(String),

    /// 区切り文字 `=` を持たない、またはキーがトークンでないパラメータ
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// 数値として解釈できない、または 0〜1 の範囲外の品質値
    #[error("Invalid quality value: {0}")]
    InvalidQuality(String),
}
