//! Login gate for the dashboard.
//!
//! Placeholder access control: any non-empty username/password pair is
//! accepted. There is no user store, no hashing and no expiry; the gate only
//! decides whether the dashboard renders. Do not mistake it for security.

use thiserror::Error;

/// Rejected credential submissions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// The username field was left empty.
    #[error("Enter a username")]
    EmptyUsername,
    /// The password field was left empty.
    #[error("Enter a password")]
    EmptyPassword,
}

/// Authentication state for one dashboard window.
///
/// Owned by the controller rather than stored globally so every window (or
/// test) carries its own flag.
#[derive(Debug, Clone, Default)]
pub struct Session {
    authenticated: bool,
}

impl Session {
    /// Whether a login has succeeded in this session.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Accept any non-empty credential pair.
    ///
    /// The raw strings are checked without trimming, so whitespace counts.
    /// Failure leaves the flag untouched and the form can be resubmitted.
    pub fn attempt_login(&mut self, username: &str, password: &str) -> Result<(), CredentialError> {
        if username.is_empty() {
            return Err(CredentialError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(CredentialError::EmptyPassword);
        }
        self.authenticated = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_username_is_rejected() {
        let mut session = Session::default();
        assert_eq!(
            session.attempt_login("", "hunter2"),
            Err(CredentialError::EmptyUsername)
        );
        assert!(!session.is_authenticated());
    }

    #[test]
    fn empty_password_is_rejected() {
        let mut session = Session::default();
        assert_eq!(
            session.attempt_login("ops", ""),
            Err(CredentialError::EmptyPassword)
        );
        assert!(!session.is_authenticated());
    }

    #[test]
    fn non_empty_pair_authenticates() {
        let mut session = Session::default();
        session.attempt_login("a", "b").unwrap();
        assert!(session.is_authenticated());
    }

    #[test]
    fn whitespace_credentials_still_count() {
        let mut session = Session::default();
        session.attempt_login(" ", " ").unwrap();
        assert!(session.is_authenticated());
    }

    #[test]
    fn failure_after_success_keeps_session() {
        let mut session = Session::default();
        session.attempt_login("a", "b").unwrap();
        assert!(session.attempt_login("", "").is_err());
        assert!(session.is_authenticated());
    }
}
