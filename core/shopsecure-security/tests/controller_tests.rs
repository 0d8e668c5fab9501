use std::sync::Arc;

use shopsecure_security::{AuditLog, LogCategory, SecurityController, SecurityMode};

fn controller() -> SecurityController {
    SecurityController::new(Arc::new(AuditLog::new()))
}

// ── Mode state machine ───────────────────────────────────────────

#[test]
fn boots_in_vulnerable_mode() {
    assert_eq!(controller().mode(), SecurityMode::Vulnerable);
}

#[test]
fn toggle_flips_and_returns_new_mode() {
    let ctrl = controller();
    assert_eq!(ctrl.toggle_mode(), SecurityMode::Secure);
    assert_eq!(ctrl.mode(), SecurityMode::Secure);
    assert_eq!(ctrl.toggle_mode(), SecurityMode::Vulnerable);
    assert_eq!(ctrl.mode(), SecurityMode::Vulnerable);
}

#[test]
fn toggle_pair_restores_mode_and_appends_exactly_two_entries() {
    let log = Arc::new(AuditLog::new());
    let ctrl = SecurityController::new(Arc::clone(&log));
    let original = ctrl.mode();

    ctrl.toggle_mode();
    ctrl.toggle_mode();

    assert_eq!(ctrl.mode(), original);
    assert_eq!(log.len(), 2);
}

#[test]
fn entering_secure_logs_info_entering_vulnerable_logs_warning() {
    let log = Arc::new(AuditLog::new());
    let ctrl = SecurityController::new(Arc::clone(&log));

    ctrl.toggle_mode(); // -> secure
    ctrl.toggle_mode(); // -> vulnerable

    let entries = log.entries();
    // Newest first: the vulnerable transition is on top.
    assert_eq!(entries[0].category, LogCategory::Warning);
    assert!(entries[0].message.contains("deactivated"));
    assert_eq!(entries[1].category, LogCategory::Info);
    assert!(entries[1].message.contains("activated"));
}

#[test]
fn mode_read_has_no_side_effects() {
    let log = Arc::new(AuditLog::new());
    let ctrl = SecurityController::new(Arc::clone(&log));
    for _ in 0..10 {
        ctrl.mode();
    }
    assert!(log.is_empty());
}

// ── Sanitize ─────────────────────────────────────────────────────

#[test]
fn vulnerable_mode_is_identity_for_any_input() {
    let ctrl = controller();
    let payload = r#"<script>alert("XSS")</script> & 'more'"#;
    assert_eq!(ctrl.sanitize(payload), payload);
}

#[test]
fn secure_mode_escapes_reserved_characters() {
    let log = Arc::new(AuditLog::new());
    let ctrl = SecurityController::with_mode(SecurityMode::Secure, log);
    assert_eq!(
        ctrl.sanitize("<img src=x onerror=alert(1)>"),
        "&lt;img src=x onerror=alert(1)&gt;"
    );
}

#[test]
fn secure_mode_leaves_clean_input_unchanged() {
    let log = Arc::new(AuditLog::new());
    let ctrl = SecurityController::with_mode(SecurityMode::Secure, log);
    assert_eq!(ctrl.sanitize("wireless headphones"), "wireless headphones");
}

#[test]
fn sanitize_never_writes_the_log() {
    let log = Arc::new(AuditLog::new());
    let ctrl = SecurityController::with_mode(SecurityMode::Secure, Arc::clone(&log));
    ctrl.sanitize("<script>alert(1)</script>");
    ctrl.sanitize("plain");
    assert!(log.is_empty());
}

#[test]
fn mode_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&SecurityMode::Vulnerable).unwrap(),
        "\"vulnerable\""
    );
    assert_eq!(
        serde_json::to_string(&SecurityMode::Secure).unwrap(),
        "\"secure\""
    );
}
