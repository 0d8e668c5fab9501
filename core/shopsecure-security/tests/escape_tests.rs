use pretty_assertions::assert_eq;
use shopsecure_security::escape_html;

// ── Clean input ──────────────────────────────────────────────────

#[test]
fn plain_text_passes_through() {
    assert_eq!(escape_html("hello world"), "hello world");
}

#[test]
fn empty_input() {
    assert_eq!(escape_html(""), "");
}

#[test]
fn unicode_is_preserved() {
    assert_eq!(escape_html("héllo — ✓"), "héllo — ✓");
}

// ── Reserved characters ──────────────────────────────────────────

#[test]
fn escapes_ampersand() {
    assert_eq!(escape_html("a & b"), "a &amp; b");
}

#[test]
fn escapes_angle_brackets() {
    assert_eq!(escape_html("<b>"), "&lt;b&gt;");
}

#[test]
fn escapes_double_quote() {
    assert_eq!(escape_html(r#"say "hi""#), "say &quot;hi&quot;");
}

#[test]
fn escapes_single_quote() {
    assert_eq!(escape_html("it's"), "it&#039;s");
}

#[test]
fn every_occurrence_is_escaped() {
    assert_eq!(escape_html("<<>>"), "&lt;&lt;&gt;&gt;");
}

// ── Application is single-pass ───────────────────────────────────

#[test]
fn already_escaped_text_is_escaped_again_not_recursed() {
    // The ampersand of an existing entity is itself escaped exactly once.
    assert_eq!(escape_html("&amp;"), "&amp;amp;");
}

#[test]
fn script_payload_becomes_inert() {
    assert_eq!(
        escape_html("<script>alert('XSS')</script>"),
        "&lt;script&gt;alert(&#039;XSS&#039;)&lt;/script&gt;"
    );
}

#[test]
fn event_handler_payload_becomes_inert() {
    let escaped = escape_html(r#"<img src="x" onerror="alert(1)">"#);
    assert_eq!(
        escaped,
        "&lt;img src=&quot;x&quot; onerror=&quot;alert(1)&quot;&gt;"
    );
    assert!(!escaped.contains('<'));
    assert!(!escaped.contains('"'));
}
