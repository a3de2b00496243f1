//! Shared-secret session gate and the error banner.

use tracing::{info, warn};

use vpt_model::{Result, TrackerError};

/// Built-in shared password for the dashboard.
pub const DEFAULT_PASSWORD: &str = "worb";

/// Environment variable overriding [`DEFAULT_PASSWORD`].
pub const PASSWORD_ENV_VAR: &str = "VPT_PASSWORD";

/// Session-scoped authenticated flag.
#[derive(Debug, Clone)]
pub struct SessionGate {
    password: String,
    authenticated: bool,
}

impl Default for SessionGate {
    fn default() -> Self {
        Self::new(DEFAULT_PASSWORD)
    }
}

impl SessionGate {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            authenticated: false,
        }
    }

    /// Gate using `VPT_PASSWORD` when set, the built-in password otherwise.
    pub fn from_env() -> Self {
        match std::env::var(PASSWORD_ENV_VAR) {
            Ok(password) if !password.is_empty() => Self::new(password),
            _ => Self::default(),
        }
    }

    /// Unlocks the session when `password` matches. A wrong password
    /// leaves the current state alone.
    pub fn login(&mut self, password: &str) -> bool {
        if password == self.password {
            self.authenticated = true;
            info!("session unlocked");
            true
        } else {
            warn!("rejected login attempt");
            false
        }
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
        info!("session locked");
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Fails unless the session is unlocked.
    pub fn require(&self) -> Result<()> {
        if self.authenticated {
            Ok(())
        } else {
            Err(TrackerError::operation("access dashboard", "not logged in"))
        }
    }
}

/// User-facing action whose failure is shown in a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Update,
    UpdateLink,
    Delete,
    Export,
}

impl Action {
    fn verb(&self) -> &'static str {
        match self {
            Action::Add => "add video",
            Action::Update => "update video",
            Action::UpdateLink => "update video link",
            Action::Delete => "delete video",
            Action::Export => "export videos",
        }
    }
}

/// Dismissible error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub message: String,
}

impl Banner {
    pub fn from_error(action: Action, error: &TrackerError) -> Self {
        Self {
            message: format!("Failed to {}: {error}", action.verb()),
        }
    }
}
