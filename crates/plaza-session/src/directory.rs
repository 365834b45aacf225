use serde::{Deserialize, Serialize};

use plaza_types::Username;

use crate::error::{SessionError, SessionResult};

/// One known account: the username and its credential secret.
///
/// The secret is stored as-is; credential hardening lives outside the
/// engine's scope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub username: Username,
    pub secret: String,
}

impl Account {
    pub fn new(username: Username, secret: impl Into<String>) -> Self {
        Self {
            username,
            secret: secret.into(),
        }
    }
}

/// The persisted directory of known accounts, in registration order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountDirectory {
    accounts: Vec<Account>,
}

impl AccountDirectory {
    /// An empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a directory from a persisted snapshot.
    pub fn from_accounts(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    /// All accounts, in registration order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Look up an account by username.
    pub fn find(&self, username: &Username) -> Option<&Account> {
        self.accounts.iter().find(|a| &a.username == username)
    }

    /// Add a new account. Usernames are unique.
    pub fn register(&mut self, username: Username, secret: impl Into<String>) -> SessionResult<()> {
        if self.find(&username).is_some() {
            return Err(SessionError::UsernameTaken(username));
        }
        self.accounts.push(Account::new(username, secret));
        Ok(())
    }

    /// Verify a login attempt against the directory.
    pub fn verify(&self, username: &Username, secret: &str) -> SessionResult<()> {
        let account = self
            .find(username)
            .ok_or_else(|| SessionError::UnknownUser(username.clone()))?;
        if account.secret != secret {
            return Err(SessionError::BadCredentials);
        }
        Ok(())
    }
}
