//! Acceptヘッダー解析用の文字列ユーティリティ

/// 前後の空白文字（スペースのみ）を除去する
///
/// タブや改行は対象外
pub fn trim_spaces(s: &str) -> &str {
    s.trim_matches(' ')
}

/// RFC 2616 の separators（空白・タブは `is_ascii_graphic` 側で除外）
const SEPARATORS: &[u8] = b"()<>@,;:\\\"/[]?={}";

/// RFC 2616 の token に該当するかを判定
///
/// 制御文字・空白・非ASCIIと、`/` や `;` を含む区切り文字を拒否する
pub fn is_token(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_graphic() && !SEPARATORS.contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_spaces_only_strips_space() {
        assert_eq!(trim_spaces("  text/html "), "text/html");
        assert_eq!(trim_spaces("\ttext/html\t"), "\ttext/html\t");
        assert_eq!(trim_spaces("   "), "");
    }

    #[test]
    fn test_is_token() {
        assert!(is_token("text"));
        assert!(is_token("vnd.api+json"));
        assert!(is_token("*"));
        assert!(!is_token(""));
        assert!(!is_token("bad token"));
        assert!(!is_token("a/b"));
        assert!(!is_token("\"quoted\""));
        assert!(!is_token("a;b"));
        assert!(!is_token("q=1"));
        assert!(!is_token("tab\t"));
        assert!(!is_token("テキスト"));
    }
}
