//! Acceptヘッダーの1節（メディアレンジ）を表す型

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::error::Error;
use super::utils::{is_token, trim_spaces};

/// 品質値の既定値（"[...] The default value is q=1"）
pub const DEFAULT_QUALITY: f64 = 1.0;

/// Acceptヘッダーの1節
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    /// 主タイプ（例: `text`、`*`）
    #[serde(rename = "type")]
    pub main_type: String,
    /// サブタイプ（例: `plain`、`*`）
    #[serde(rename = "subType")]
    pub sub_type: String,
    /// 品質値。範囲外の値もそのまま保持する
    #[serde(with = "quality_serde")]
    pub quality: f64,
    /// `q` 以外のパラメータ
    pub parameters: HashMap<String, String>,
}

impl Clause {
    /// 品質値1.0、パラメータなしの節を作成
    pub fn new(main_type: impl Into<String>, sub_type: impl Into<String>) -> Self {
        Self {
            main_type: main_type.into(),
            sub_type: sub_type.into(),
            quality: DEFAULT_QUALITY,
            parameters: HashMap::new(),
        }
    }

    /// 品質値を設定
    pub fn with_quality(mut self, quality: f64) -> Self {
        self.quality = quality;
        self
    }

    /// パラメータを追加（同じキーは上書き）
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// `type/subtype` 形式の文字列を取得
    pub fn media_type(&self) -> String {
        format!("{}/{}", self.main_type, self.sub_type)
    }

    /// `*/*` かどうか
    pub fn is_wildcard(&self) -> bool {
        self.main_type == "*" && self.sub_type == "*"
    }

    /// ヘッダー値の形式に整形する
    ///
    /// パラメータはキー順に並べ、品質値が1.0の場合は `q` を省略する
    pub fn to_header_value(&self) -> String {
        let mut value = self.media_type();

        let mut keys: Vec<&String> = self.parameters.keys().collect();
        keys.sort();
        for key in keys {
            value.push_str(&format!(";{}={}", key, self.parameters[key]));
        }

        if self.quality != DEFAULT_QUALITY {
            value.push_str(&format!(";q={}", self.quality));
        }

        value
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_header_value())
    }
}

impl FromStr for Clause {
    type Err = Error;

    /// 1つのメディアレンジを厳密に解析する
    ///
    /// `parse` と異なり、不正な部分があれば節ごとエラーにする
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = trim_spaces(s);
        let mut parts = s.split(';');
        let media_range = parts.next().unwrap_or_default();

        let types: Vec<&str> = media_range.split('/').collect();
        let mut clause = match types.as_slice() {
            [t] if trim_spaces(t) == "*" => Clause::new("*", "*"),
            [t, sub] => {
                let (t, sub) = (trim_spaces(t), trim_spaces(sub));
                if !is_token(t) || !is_token(sub) {
                    return Err(Error::InvalidMediaRange(media_range.to_string()));
                }
                Clause::new(t, sub)
            }
            _ => return Err(Error::InvalidMediaRange(media_range.to_string())),
        };

        for param in parts {
            let (key, value) = param
                .split_once('=')
                .ok_or_else(|| Error::InvalidParameter(param.to_string()))?;
            let key = trim_spaces(key);
            let value = trim_spaces(value);
            if !is_token(key) {
                return Err(Error::InvalidParameter(param.to_string()));
            }

            if key == "q" {
                let q = value
                    .parse::<f64>()
                    .map_err(|_| Error::InvalidQuality(value.to_string()))?;
                if !(0.0..=1.0).contains(&q) {
                    return Err(Error::InvalidQuality(value.to_string()));
                }
                clause.quality = q;
            } else {
                clause.parameters.insert(key.to_string(), value.to_string());
            }
        }

        Ok(clause)
    }
}

/// 品質値のシリアライズ
///
/// JSONは NaN と無限大を表現できないため、`"NaN"`、`"inf"`、`"-inf"` の文字列で書き出す
mod quality_serde {
    use serde::de::{self, Deserializer};
    use serde::{Deserialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(quality: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if quality.is_nan() {
            serializer.serialize_str("NaN")
        } else if *quality == f64::INFINITY {
            serializer.serialize_str("inf")
        } else if *quality == f64::NEG_INFINITY {
            serializer.serialize_str("-inf")
        } else {
            serializer.serialize_f64(*quality)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(q) => Ok(q),
            Repr::Text(text) => match text.as_str() {
                "NaN" => Ok(f64::NAN),
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                other => Err(de::Error::custom(format!("invalid quality value: {}", other))),
            },
        }
    }
}
