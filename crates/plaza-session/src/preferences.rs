use serde::{Deserialize, Serialize};

/// Which presentation preference a caller is addressing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceKind {
    PrivateProfile,
    HideLikes,
    HideDislikes,
}

/// Presentation preferences scoped to the logged-in identity.
///
/// These shape what the caller renders (whether vote counts on the user's
/// own content are surfaced); they never alter vote state itself. All
/// default to off and reset on logout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub private_profile: bool,
    pub hide_likes: bool,
    pub hide_dislikes: bool,
}

impl Preferences {
    pub fn get(&self, kind: PreferenceKind) -> bool {
        match kind {
            PreferenceKind::PrivateProfile => self.private_profile,
            PreferenceKind::HideLikes => self.hide_likes,
            PreferenceKind::HideDislikes => self.hide_dislikes,
        }
    }

    pub fn set(&mut self, kind: PreferenceKind, value: bool) {
        match kind {
            PreferenceKind::PrivateProfile => self.private_profile = value,
            PreferenceKind::HideLikes => self.hide_likes = value,
            PreferenceKind::HideDislikes => self.hide_dislikes = value,
        }
    }

    /// Flip one preference, returning the new value.
    pub fn toggle(&mut self, kind: PreferenceKind) -> bool {
        let value = !self.get(kind);
        self.set(kind, value);
        value
    }
}
