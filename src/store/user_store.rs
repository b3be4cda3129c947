// JSON-file-backed credential store

use crate::core::errors::ServiceError;
use crate::core::models::UserAccount;
use crate::store::UserStore;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{info, warn};

/// Credential store backed by a flat JSON file
///
/// The in-memory vector mirrors the file. Every insert rewrites the whole
/// file; the mutex is held across the flush so inserts are serialized and
/// lookups always reflect the last durable state.
pub struct JsonUserStore {
    path: PathBuf,
    accounts: Mutex<Vec<UserAccount>>,
}

impl JsonUserStore {
    /// Load the store from `path`
    ///
    /// A missing or unparseable file initializes the store empty rather than
    /// failing startup; the condition is logged.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();

        let accounts = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<Vec<UserAccount>>(&raw) {
                Ok(accounts) => {
                    info!(path = ?path, count = accounts.len(), "User store loaded");
                    accounts
                }
                Err(e) => {
                    warn!(path = ?path, error = %e, "Users file unparseable, starting with empty list");
                    Vec::new()
                }
            },
            Err(e) => {
                warn!(path = ?path, error = %e, "Users file missing, starting with empty list");
                Vec::new()
            }
        };

        Self {
            path,
            accounts: Mutex::new(accounts),
        }
    }

    /// Rewrite the whole file from the given account set
    fn flush(&self, accounts: &[UserAccount]) -> Result<(), ServiceError> {
        let json = serde_json::to_string_pretty(accounts)
            .map_err(|e| ServiceError::Storage(format!("failed to serialize accounts: {}", e)))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    ServiceError::Storage(format!("failed to create {:?}: {}", parent, e))
                })?;
            }
        }

        fs::write(&self.path, json)
            .map_err(|e| ServiceError::Storage(format!("failed to write {:?}: {}", self.path, e)))
    }
}

#[async_trait::async_trait]
impl UserStore for JsonUserStore {
    async fn find_by_username(&self, username: &str) -> Option<UserAccount> {
        self.accounts
            .lock()
            .expect("user store mutex poisoned")
            .iter()
            .find(|a| a.username == username)
            .cloned()
    }

    async fn find_by_email(&self, email: &str) -> Option<UserAccount> {
        self.accounts
            .lock()
            .expect("user store mutex poisoned")
            .iter()
            .find(|a| a.email == email)
            .cloned()
    }

    async fn insert(&self, account: UserAccount) -> Result<(), ServiceError> {
        let mut accounts = self.accounts.lock().expect("user store mutex poisoned");

        // Re-check uniqueness under the lock: the service-level checks race
        // between concurrent registrations, this one cannot.
        if accounts.iter().any(|a| a.username == account.username) {
            return Err(ServiceError::username_taken());
        }
        if accounts.iter().any(|a| a.email == account.email) {
            return Err(ServiceError::email_taken());
        }

        accounts.push(account);
        if let Err(e) = self.flush(&accounts) {
            // Not durable, so not committed: roll back the in-memory insert.
            accounts.pop();
            return Err(e);
        }
        Ok(())
    }

    async fn count(&self) -> usize {
        self.accounts
            .lock()
            .expect("user store mutex poisoned")
            .len()
    }
}
