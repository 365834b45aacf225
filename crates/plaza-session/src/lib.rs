//! Session identity for the Plaza feed engine.
//!
//! One [`Session`] tracks the logged-in identity and everything scoped to
//! it: the avatar data reference and the presentation [`Preferences`].
//! Session state is never persisted -- logout resets all of it.
//!
//! The [`AccountDirectory`] is the persisted record of known accounts
//! (username plus credential secret) that logins are verified against.

pub mod directory;
pub mod error;
pub mod preferences;
pub mod session;

pub use directory::{Account, AccountDirectory};
pub use error::{SessionError, SessionResult};
pub use preferences::{PreferenceKind, Preferences};
pub use session::Session;
