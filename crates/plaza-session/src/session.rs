use plaza_types::Username;

use crate::error::{SessionError, SessionResult};
use crate::preferences::Preferences;

/// The current login state and everything scoped to it.
///
/// At most one identity is active at a time. Ending the session resets the
/// avatar and preferences along with the identity; nothing here survives
/// logout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    current: Option<Username>,
    avatar: Option<String>,
    preferences: Preferences,
}

impl Session {
    /// A logged-out session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The logged-in identity, if any.
    pub fn current_user(&self) -> Option<&Username> {
        self.current.as_ref()
    }

    /// The logged-in identity, or [`SessionError::NotLoggedIn`].
    pub fn require_user(&self) -> SessionResult<Username> {
        self.current.clone().ok_or(SessionError::NotLoggedIn)
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    /// Begin a session for `username`, replacing any previous state.
    pub fn begin(&mut self, username: Username) {
        *self = Self {
            current: Some(username),
            avatar: None,
            preferences: Preferences::default(),
        };
    }

    /// End the session, dropping everything scoped to it.
    pub fn end(&mut self) {
        *self = Self::new();
    }

    /// The avatar data reference, if one was set this session.
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    pub fn set_avatar(&mut self, reference: impl Into<String>) {
        self.avatar = Some(reference.into());
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn preferences_mut(&mut self) -> &mut Preferences {
        &mut self.preferences
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::PreferenceKind;

    fn user(name: &str) -> Username {
        Username::new(name).unwrap()
    }

    #[test]
    fn fresh_session_is_logged_out() {
        let session = Session::new();
        assert!(!session.is_logged_in());
        assert_eq!(session.require_user(), Err(SessionError::NotLoggedIn));
    }

    #[test]
    fn begin_establishes_the_identity() {
        let mut session = Session::new();
        session.begin(user("mary"));
        assert!(session.is_logged_in());
        assert_eq!(session.require_user().unwrap(), user("mary"));
    }

    #[test]
    fn end_resets_everything_scoped_to_the_identity() {
        let mut session = Session::new();
        session.begin(user("mary"));
        session.set_avatar("data:image/png;base64,YWJj");
        session.preferences_mut().toggle(PreferenceKind::HideLikes);

        session.end();
        assert!(!session.is_logged_in());
        assert_eq!(session.avatar(), None);
        assert_eq!(*session.preferences(), Preferences::default());
    }

    #[test]
    fn a_new_login_starts_from_defaults() {
        let mut session = Session::new();
        session.begin(user("mary"));
        session.preferences_mut().toggle(PreferenceKind::HideDislikes);
        session.begin(user("cire"));
        assert_eq!(*session.preferences(), Preferences::default());
        assert_eq!(session.avatar(), None);
    }
}
