//! # Session State
//!
//! Who is using the app right now, and whether the login prompt is open.
//!
//! ## Status Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Session Status                                    │
//! │                                                                         │
//! │                 continue as guest                                       │
//! │   ┌───────────┐ ────────────────> ┌───────────┐                        │
//! │   │ Anonymous │                   │   Guest   │                        │
//! │   └───────────┘ <──────────────── └───────────┘                        │
//! │        │              logout           │                               │
//! │        │ login                         │ login                         │
//! │        ▼                               ▼                               │
//! │   ┌─────────────────────────────────────────────┐                      │
//! │   │         Authenticated(User)                 │                      │
//! │   └─────────────────────────────────────────────┘                      │
//! │        │ logout                                                        │
//! │        ▼                                                               │
//! │   Anonymous                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The login prompt flag is orthogonal to the status: opening the prompt
//! never changes who is signed in, and dismissing it leaves a guest a
//! guest. Guarded actions open the prompt as a side effect so the UI can
//! react without tracking denials itself.

use serde::{Deserialize, Serialize};

use bazaar_core::types::{Role, User};

use crate::error::StoreError;

// =============================================================================
// Session Status
// =============================================================================

/// The three ways somebody can be using the app.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SessionStatus {
    /// Fresh visitor. Has not signed in or dismissed the login prompt.
    #[default]
    Anonymous,

    /// Explicitly chose to browse without an account.
    Guest,

    /// Signed in with a synthesized account.
    Authenticated(User),
}

// =============================================================================
// Session
// =============================================================================

/// The current session: auth status plus the login prompt flag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    status: SessionStatus,
    login_prompt_open: bool,
}

impl Session {
    /// Creates a fresh anonymous session with the prompt closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current status.
    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    /// Returns the signed-in user, if any.
    pub fn current_user(&self) -> Option<&User> {
        match &self.status {
            SessionStatus::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Whether somebody is signed in.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.status, SessionStatus::Authenticated(_))
    }

    /// Whether the visitor chose guest browsing.
    pub fn is_guest(&self) -> bool {
        matches!(self.status, SessionStatus::Guest)
    }

    /// Whether the login prompt is currently open.
    pub fn login_prompt_open(&self) -> bool {
        self.login_prompt_open
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Opens the login prompt. Status is untouched.
    pub fn request_login(&mut self) {
        self.login_prompt_open = true;
    }

    /// Dismisses the login prompt. Status is untouched.
    pub fn cancel_login(&mut self) {
        self.login_prompt_open = false;
    }

    /// Signs the user in and closes the prompt.
    pub fn login(&mut self, user: User) {
        self.status = SessionStatus::Authenticated(user);
        self.login_prompt_open = false;
    }

    /// Switches to guest browsing and closes the prompt.
    pub fn enter_guest(&mut self) {
        self.status = SessionStatus::Guest;
        self.login_prompt_open = false;
    }

    /// Signs out, returning to anonymous.
    ///
    /// Clearing the cart is the store's job, not the session's.
    pub fn logout(&mut self) {
        self.status = SessionStatus::Anonymous;
    }

    // =========================================================================
    // Guards
    // =========================================================================

    /// Requires a signed-in user with the given role.
    ///
    /// ## Rules
    /// - Signed in with the right role: returns the user
    /// - Signed in with the wrong role: `RoleNotAllowed`, prompt untouched
    /// - Anonymous or guest: `LoginRequired`, and the prompt opens so the
    ///   UI can offer sign-in right away
    pub fn require_role(&mut self, required: Role) -> Result<User, StoreError> {
        match &self.status {
            SessionStatus::Authenticated(user) if user.role() == required => Ok(user.clone()),
            SessionStatus::Authenticated(user) => Err(StoreError::RoleNotAllowed {
                required,
                actual: user.role(),
            }),
            SessionStatus::Anonymous | SessionStatus::Guest => {
                self.login_prompt_open = true;
                Err(StoreError::LoginRequired)
            }
        }
    }
}

// =============================================================================
// Display Name
// =============================================================================

/// Picks the display name for a login submission.
///
/// A non-blank name wins; otherwise the email's local part fills in, so
/// "buyer@example.com" signs in as "buyer".
pub fn display_name(name: &str, email: &str) -> String {
    let trimmed = name.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    email.split('@').next().unwrap_or(email).to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_core::types::Profile;

    fn test_buyer() -> User {
        User {
            id: "buyer-1".to_string(),
            email: "buyer@example.com".to_string(),
            name: "Jane Buyer".to_string(),
            profile: Profile::Buyer {
                age: Some(28),
                country: Some("United States".to_string()),
                gender: None,
            },
        }
    }

    fn test_seller() -> User {
        User {
            id: "seller-1".to_string(),
            email: "seller@example.com".to_string(),
            name: "John Seller".to_string(),
            profile: Profile::Seller {
                company_name: "Fashion Forward Co.".to_string(),
            },
        }
    }

    #[test]
    fn test_fresh_session_is_anonymous() {
        let session = Session::new();
        assert_eq!(session.status(), &SessionStatus::Anonymous);
        assert!(!session.is_authenticated());
        assert!(!session.is_guest());
        assert!(!session.login_prompt_open());
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_prompt_toggles_without_touching_status() {
        let mut session = Session::new();

        session.request_login();
        assert!(session.login_prompt_open());
        assert_eq!(session.status(), &SessionStatus::Anonymous);

        session.cancel_login();
        assert!(!session.login_prompt_open());
        assert_eq!(session.status(), &SessionStatus::Anonymous);
    }

    #[test]
    fn test_login_closes_prompt() {
        let mut session = Session::new();
        session.request_login();

        session.login(test_buyer());

        assert!(session.is_authenticated());
        assert!(!session.login_prompt_open());
        assert_eq!(session.current_user().map(|u| u.name.as_str()), Some("Jane Buyer"));
    }

    #[test]
    fn test_guest_browsing() {
        let mut session = Session::new();
        session.request_login();

        session.enter_guest();

        assert!(session.is_guest());
        assert!(!session.login_prompt_open());

        // Guests can still sign in afterwards
        session.login(test_seller());
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_logout_returns_to_anonymous() {
        let mut session = Session::new();
        session.login(test_buyer());

        session.logout();

        assert_eq!(session.status(), &SessionStatus::Anonymous);
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_require_role_passes_matching_user() {
        let mut session = Session::new();
        session.login(test_buyer());

        let user = session.require_role(Role::Buyer).unwrap();
        assert_eq!(user.id, "buyer-1");
        assert!(!session.login_prompt_open());
    }

    #[test]
    fn test_require_role_rejects_wrong_role() {
        let mut session = Session::new();
        session.login(test_seller());

        let err = session.require_role(Role::Buyer).unwrap_err();
        match err {
            StoreError::RoleNotAllowed { required, actual } => {
                assert_eq!(required, Role::Buyer);
                assert_eq!(actual, Role::Seller);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        // Wrong role is not a missing login, so the prompt stays closed
        assert!(!session.login_prompt_open());
    }

    #[test]
    fn test_require_role_opens_prompt_for_visitors() {
        let mut session = Session::new();

        let err = session.require_role(Role::Buyer).unwrap_err();
        assert!(matches!(err, StoreError::LoginRequired));
        assert!(session.login_prompt_open());

        let mut guest = Session::new();
        guest.enter_guest();
        let err = guest.require_role(Role::Seller).unwrap_err();
        assert!(matches!(err, StoreError::LoginRequired));
        assert!(guest.login_prompt_open());
    }

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(display_name("Jane Buyer", "buyer@example.com"), "Jane Buyer");
        assert_eq!(display_name("  ", "buyer@example.com"), "buyer");
        assert_eq!(display_name("", "seller@example.com"), "seller");
        assert_eq!(display_name("", "no-at-sign"), "no-at-sign");
    }
}
