//! Push-fragment extraction from server-rendered HTML.
//!
//! Next.js streams its RSC payload into the page as a series of script
//! chunks of the form `self.__next_f.push([1,"<escaped>"])`, where the
//! escaped body is a JSON string literal whose content is itself further
//! JSON. This module finds those chunks with a targeted pattern and recovers
//! the unescaped text; it never parses the page as a DOM.

use std::sync::OnceLock;

use regex::Regex;

/// Matches one inlined push call.
///
/// The string body is `(?:\\.|[^"\\])*`: an escape sequence or any
/// non-quote, non-backslash character. The escape grammar cannot terminate
/// inside an escape, so no non-greedy repetition is needed.
fn push_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"self\.__next_f\.push\(\[1,"((?:\\.|[^"\\])*)"\]\)"#)
            .expect("push pattern is valid")
    })
}

/// Iterate the unescaped push-string fragments in document order.
///
/// Yields nothing when the page contains no push calls; that is the
/// caller's problem to report, not an error here.
pub fn push_strings(html: &str) -> impl Iterator<Item = String> + '_ {
    push_pattern()
        .captures_iter(html)
        .filter_map(|caps| unescape_fragment(caps.get(1)?.as_str()))
}

/// Recover the original text of one escaped string body by parsing it as a
/// JSON string literal. A body the pattern matched but JSON rejects (e.g. a
/// malformed `\u` escape) is dropped.
fn unescape_fragment(escaped: &str) -> Option<String> {
    serde_json::from_str(&format!("\"{escaped}\"")).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_push_calls_yields_nothing() {
        let html = "<html><body><script>console.log('hi')</script></body></html>";
        assert_eq!(push_strings(html).count(), 0);
    }

    #[test]
    fn test_fragments_in_document_order() {
        let html = r#"
            <script>self.__next_f.push([1,"first"])</script>
            <script>self.__next_f.push([1,"second"])</script>
        "#;
        let fragments: Vec<String> = push_strings(html).collect();
        assert_eq!(fragments, vec!["first", "second"]);
    }

    #[test]
    fn test_unescapes_json_string_body() {
        let html = r#"<script>self.__next_f.push([1,"7:{\"a\":\"b \u0026 c\",\"path\":\"x\\y\"}"])</script>"#;
        let fragments: Vec<String> = push_strings(html).collect();
        assert_eq!(fragments, vec![r#"7:{"a":"b & c","path":"x\y"}"#]);
    }

    #[test]
    fn test_ignores_non_data_push_variants() {
        // Chunk tag 0 (bootstrap) and bare pushes are not data chunks.
        let html = r#"
            <script>self.__next_f.push([0])</script>
            <script>self.__next_f.push([1,"real"])</script>
        "#;
        let fragments: Vec<String> = push_strings(html).collect();
        assert_eq!(fragments, vec!["real"]);
    }

    #[test]
    fn test_embedded_escaped_quote_does_not_truncate() {
        let html = r#"<script>self.__next_f.push([1,"say \"hi\" then"])</script>"#;
        let fragments: Vec<String> = push_strings(html).collect();
        assert_eq!(fragments, vec![r#"say "hi" then"#]);
    }

    #[test]
    fn test_invalid_unicode_escape_is_dropped() {
        let html = concat!(
            r#"<script>self.__next_f.push([1,"bad \uZZZZ body"])</script>"#,
            r#"<script>self.__next_f.push([1,"good body"])</script>"#,
        );
        let fragments: Vec<String> = push_strings(html).collect();
        assert_eq!(fragments, vec!["good body"]);
    }
}
