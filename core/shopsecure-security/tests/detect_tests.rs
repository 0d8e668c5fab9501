use shopsecure_security::detect::{inspect, looks_injected, Surface};
use shopsecure_security::{AuditLog, LogCategory};

// ── Pattern matching ─────────────────────────────────────────────

#[test]
fn matches_script_tag() {
    assert!(looks_injected("<script>alert('XSS')</script>"));
    assert!(looks_injected("text before <script src=evil.js>"));
}

#[test]
fn matches_event_handler_assignment() {
    assert!(looks_injected("<img src=x onerror=alert(1)>"));
    assert!(looks_injected("<body onload=run()>"));
    assert!(looks_injected("onclick=steal()"));
}

#[test]
fn matches_javascript_uri() {
    assert!(looks_injected("<a href=\"javascript:alert(1)\">click</a>"));
    assert!(looks_injected("javascript:void(0)"));
}

#[test]
fn matching_is_case_insensitive() {
    assert!(looks_injected("<SCRIPT>alert(1)</SCRIPT>"));
    assert!(looks_injected("<img ONERROR=x>"));
    assert!(looks_injected("JavaScript:alert(1)"));
}

#[test]
fn clean_text_does_not_match() {
    assert!(!looks_injected("great wireless headphones"));
    assert!(!looks_injected(""));
    assert!(!looks_injected("5 stars, would buy again!"));
}

#[test]
fn word_internal_on_does_not_match() {
    // "on" inside a word followed by '=' is not a handler assignment.
    assert!(!looks_injected("config=5"));
    assert!(!looks_injected("season=winter"));
}

#[test]
fn bare_on_without_name_does_not_match() {
    assert!(!looks_injected("on="));
    assert!(!looks_injected("carry on, nothing here"));
}

// ── Logging ──────────────────────────────────────────────────────

#[test]
fn inspect_logs_error_entry_for_flagged_search() {
    let log = AuditLog::new();
    let flagged = inspect(&log, Surface::Search, "<script>alert(1)</script>");

    assert!(flagged);
    let entries = log.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].category, LogCategory::Error);
    assert!(entries[0].message.contains("Reflected XSS"));
    assert!(entries[0].message.contains("<script>alert(1)</script>"));
}

#[test]
fn inspect_names_the_surface() {
    let log = AuditLog::new();
    inspect(&log, Surface::Review, "<img src=x onerror=alert(1)>");
    inspect(&log, Surface::CartNote, "javascript:alert(1)");

    let entries = log.entries();
    assert!(entries[1].message.contains("Stored XSS"));
    assert!(entries[0].message.contains("DOM-based XSS"));
}

#[test]
fn inspect_ignores_clean_input() {
    let log = AuditLog::new();
    let flagged = inspect(&log, Surface::CartNote, "gift wrap please");
    assert!(!flagged);
    assert!(log.is_empty());
}
