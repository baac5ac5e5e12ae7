//! Acceptヘッダーの解析と品質値による並べ替え

use std::cmp::Ordering;
use std::collections::HashMap;
use super::clause::{Clause, DEFAULT_QUALITY};
use super::utils::trim_spaces;

/// Acceptヘッダー値を解析し、品質値の降順に並べた節のリストを返す
///
/// https://www.w3.org/Protocols/rfc2616/rfc2616-sec14.html#sec14.1 の文法を
/// 緩やかに適用する。不正な節やパラメータは捨てられ、この関数は失敗しない。
pub fn parse(header: &str) -> Vec<Clause> {
    AcceptParser::default().parse(header)
}

/// パーサー設定のビルダー
#[derive(Debug, Default, Clone)]
pub struct AcceptParserBuilder {
    max_clauses: Option<usize>,
}

impl AcceptParserBuilder {
    /// 新しいAcceptParserBuilderインスタンスを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 返却する節の最大数を設定（入力順で先頭から数える）
    pub fn max_clauses(mut self, max: usize) -> Self {
        self.max_clauses = Some(max);
        self
    }

    /// パーサーをビルドして返却
    pub fn build(self) -> AcceptParser {
        AcceptParser {
            max_clauses: self.max_clauses,
        }
    }
}

/// Acceptヘッダーのパーサー
#[derive(Debug, Default, Clone)]
pub struct AcceptParser {
    max_clauses: Option<usize>,
}

impl AcceptParser {
    /// 新しいAcceptParserBuilderインスタンスを作成
    pub fn builder() -> AcceptParserBuilder {
        AcceptParserBuilder::new()
    }

    /// 設定された節の上限
    pub fn max_clauses(&self) -> Option<usize> {
        self.max_clauses
    }

    /// ヘッダー値を解析する
    pub fn parse(&self, header: &str) -> Vec<Clause> {
        let mut clauses: Vec<Clause> = Vec::new();

        for segment in header.split(',') {
            if self.max_clauses.is_some_and(|max| clauses.len() >= max) {
                log::debug!("Accept clause limit reached, ignoring the rest of the header");
                break;
            }
            if let Some(clause) = parse_clause(trim_spaces(segment)) {
                clauses.push(clause);
            }
        }

        // 安定ソート: 同じ品質値の節は入力順を保つ
        clauses.sort_by(|a, b| by_quality_desc(a.quality, b.quality));
        clauses
    }
}

/// 1節を解析する。メディアレンジが不正な場合は None
fn parse_clause(segment: &str) -> Option<Clause> {
    // media-range = ( "*/*" | ( type "/" "*" ) | ( type "/" subtype )) *( ";" parameter )
    let mut parts = segment.split(';');
    let media_range = parts.next().unwrap_or_default();

    let types: Vec<&str> = media_range.split('/').collect();
    let (main_type, sub_type) = match types.as_slice() {
        // RFCには無い書き方だが、従来の挙動に合わせて "*/*" として扱う
        ["*"] => ("*", "*"),
        [main_type, sub_type] => match (trim_spaces(main_type), trim_spaces(sub_type)) {
            ("", _) | (_, "") => {
                log::debug!("Dropping Accept media range with empty type: {:?}", media_range);
                return None;
            }
            pair => pair,
        },
        _ => {
            log::debug!("Dropping malformed Accept media range: {:?}", media_range);
            return None;
        }
    };

    let mut quality = DEFAULT_QUALITY;
    let mut parameters = HashMap::new();

    // "q" "=" qvalue *( ";" token [ "=" ( token | quoted-string ) )
    for param in parts {
        let Some((key, value)) = param.split_once('=') else {
            log::trace!("Ignoring Accept parameter without '=': {:?}", param);
            continue;
        };

        let key = trim_spaces(key);
        let value = trim_spaces(value);
        if key == "q" {
            // 解析に失敗した場合は0とする
            quality = value.parse::<f64>().unwrap_or_else(|_| {
                log::trace!("Unparsable Accept quality value {:?}, using 0", value);
                0.0
            });
        } else {
            parameters.insert(key.to_string(), value.to_string());
        }
    }

    Some(Clause {
        main_type: main_type.to_string(),
        sub_type: sub_type.to_string(),
        quality,
        parameters,
    })
}

/// 品質値の降順。NaNは全ての数値より後ろに並べる
fn by_quality_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
