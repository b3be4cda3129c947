// Registration and login against the credential store

use crate::core::errors::ServiceError;
use crate::core::models::{AuthenticatedUser, UserAccount};
use crate::core::secret::Password;
use crate::store::UserStore;
use std::sync::Arc;
use tracing::info;

/// Stateless auth operations over an injected credential store
pub struct AuthService {
    users: Arc<dyn UserStore>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Register a new account
    ///
    /// Email is normalized to lowercase+trimmed, username to trimmed with
    /// case preserved. Username and email must both be unused. The account
    /// exists only once the store has flushed it.
    pub async fn register(
        &self,
        email: &str,
        username: &str,
        password: &Password,
    ) -> Result<AuthenticatedUser, ServiceError> {
        let email = email.trim().to_lowercase();
        let username = username.trim().to_string();

        if email.is_empty() || username.is_empty() || password.is_blank() {
            return Err(ServiceError::Validation(
                "Please fill email, username and password.".to_string(),
            ));
        }

        if self.users.find_by_username(&username).await.is_some() {
            return Err(ServiceError::username_taken());
        }
        if self.users.find_by_email(&email).await.is_some() {
            return Err(ServiceError::email_taken());
        }

        let account = UserAccount {
            email: email.clone(),
            username: username.clone(),
            password_hash: password.digest(),
        };
        self.users.insert(account).await?;

        info!(username = %username, "Account registered");
        Ok(AuthenticatedUser { username, email })
    }

    /// Verify a username/password pair
    ///
    /// Unknown username and wrong password fail identically; nothing about
    /// account existence leaks through this path.
    pub async fn login(
        &self,
        username: &str,
        password: &Password,
    ) -> Result<AuthenticatedUser, ServiceError> {
        let username = username.trim();

        if username.is_empty() || password.is_blank() {
            return Err(ServiceError::Validation(
                "Please enter username and password.".to_string(),
            ));
        }

        let account = self
            .users
            .find_by_username(username)
            .await
            .ok_or(ServiceError::Auth)?;

        if account.password_hash != password.digest() {
            return Err(ServiceError::Auth);
        }

        info!(username = %account.username, "Login succeeded");
        Ok(AuthenticatedUser {
            username: account.username,
            email: account.email,
        })
    }
}
