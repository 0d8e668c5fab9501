//! Security mode state machine.
//!
//! One controller exists per server instance (or per test); there is no
//! process-global mode, so concurrent tenants and tests cannot interfere.

use crate::audit::{AuditLog, LogCategory};
use crate::escape::escape_html;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, RwLock};

/// The global rendering mode of a sandbox instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecurityMode {
    /// Untrusted text is emitted raw, byte-for-byte.
    Vulnerable,
    /// Untrusted text is escaped before it reaches any output.
    Secure,
}

impl SecurityMode {
    /// Returns the other mode.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Vulnerable => Self::Secure,
            Self::Secure => Self::Vulnerable,
        }
    }
}

impl fmt::Display for SecurityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vulnerable => write!(f, "vulnerable"),
            Self::Secure => write!(f, "secure"),
        }
    }
}

/// Holds the current [`SecurityMode`] and exposes the escaping transform.
///
/// Mode transitions append one entry to the audit log; `sanitize` never
/// writes anything.
pub struct SecurityController {
    mode: RwLock<SecurityMode>,
    log: Arc<AuditLog>,
}

impl SecurityController {
    /// Creates a controller starting in vulnerable mode — the sandbox boots
    /// with the defense off so the attacks are demonstrable.
    #[must_use]
    pub fn new(log: Arc<AuditLog>) -> Self {
        Self::with_mode(SecurityMode::Vulnerable, log)
    }

    /// Creates a controller starting in the given mode.
    #[must_use]
    pub fn with_mode(mode: SecurityMode, log: Arc<AuditLog>) -> Self {
        Self {
            mode: RwLock::new(mode),
            log,
        }
    }

    /// Current mode. No side effects.
    #[must_use]
    pub fn mode(&self) -> SecurityMode {
        *self.mode.read().unwrap()
    }

    /// Flips the mode, records the transition, and returns the new mode.
    ///
    /// Entering secure logs `info`; entering vulnerable logs `warning`.
    /// Two consecutive toggles restore the original mode and append exactly
    /// two entries.
    pub fn toggle_mode(&self) -> SecurityMode {
        let new_mode = {
            let mut mode = self.mode.write().unwrap();
            *mode = mode.flipped();
            *mode
        };
        match new_mode {
            SecurityMode::Secure => self.log.append(
                "[System] Security mode activated. Input sanitization enabled.",
                LogCategory::Info,
            ),
            SecurityMode::Vulnerable => self.log.append(
                "[Warning] Security mode deactivated. Site is now vulnerable to XSS attacks.",
                LogCategory::Warning,
            ),
        };
        new_mode
    }

    /// Applies the render transform for the current mode.
    ///
    /// Secure mode escapes the five reserved characters once; vulnerable
    /// mode returns the input unchanged. Pure in `(mode, input)` — no state
    /// is touched, the audit log included.
    #[must_use]
    pub fn sanitize(&self, input: &str) -> String {
        match self.mode() {
            SecurityMode::Secure => escape_html(input),
            SecurityMode::Vulnerable => input.to_string(),
        }
    }

    /// The audit log this controller reports transitions to.
    #[must_use]
    pub fn log(&self) -> &Arc<AuditLog> {
        &self.log
    }
}
