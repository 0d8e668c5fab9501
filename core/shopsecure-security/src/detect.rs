//! Submission-time injection detection.
//!
//! Every path that accepts untrusted text (search term, review fields, cart
//! note) runs its input through [`inspect`] when the submission arrives.
//! The scan is independent of the security mode: it fires in secure mode
//! too, so the log shows attempted attacks whether or not the defense
//! was active.

use crate::audit::{AuditLog, LogCategory};

/// Which submission path an input arrived on. Determines the alert text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Search query parameter — reflected back in the same response.
    Search,
    /// Review title/content/username — stored and replayed to all viewers.
    Review,
    /// Cart note — stored and replayed to the owning user.
    CartNote,
}

/// Returns true if the input contains a substring characteristic of injected
/// markup: a script tag opener, an inline event-handler assignment, or a
/// `javascript:` URI scheme. Matching is ASCII case-insensitive.
#[must_use]
pub fn looks_injected(input: &str) -> bool {
    let lower = input.to_ascii_lowercase();
    lower.contains("<script") || lower.contains("javascript:") || has_event_handler(&lower)
}

/// Matches `on<letters>=` at a word boundary, e.g. `onerror=` or `onload=`,
/// without firing on words that merely contain "on" (`config=` is clean).
fn has_event_handler(lower: &str) -> bool {
    let bytes = lower.as_bytes();
    lower.match_indices("on").any(|(i, _)| {
        let boundary = i == 0 || !bytes[i - 1].is_ascii_alphanumeric();
        if !boundary {
            return false;
        }
        let rest = &bytes[i + 2..];
        let name_len = rest.iter().take_while(|b| b.is_ascii_alphabetic()).count();
        name_len > 0 && rest.get(name_len) == Some(&b'=')
    })
}

/// Scans a submission and, on a match, appends an error entry naming the
/// surface. Returns whether the input was flagged.
pub fn inspect(log: &AuditLog, surface: Surface, input: &str) -> bool {
    if !looks_injected(input) {
        return false;
    }
    let message = match surface {
        Surface::Search => {
            format!("[Alert] Potential Reflected XSS detected in search query: \"{input}\"")
        }
        Surface::Review => "[Alert] Potential Stored XSS detected in review submission".to_string(),
        Surface::CartNote => "[Alert] Potential DOM-based XSS detected in cart note".to_string(),
    };
    log.append(message, LogCategory::Error);
    true
}
