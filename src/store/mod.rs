// Data stores - the corpus (read-only) and the credential file mirror

use crate::core::errors::ServiceError;
use crate::core::models::UserAccount;

pub mod corpus;
pub mod user_store;

pub use corpus::CorpusStore;
pub use user_store::JsonUserStore;

/// Trait for credential store operations
///
/// The authoritative set of user accounts. Implementations must serialize
/// `insert` so two concurrent registrations for the same username or email
/// cannot both succeed.
#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    /// Exact match on the stored (trimmed) username, case-sensitive
    async fn find_by_username(&self, username: &str) -> Option<UserAccount>;

    /// Match on the stored (lowercased, trimmed) email
    async fn find_by_email(&self, email: &str) -> Option<UserAccount>;

    /// Append an account and make it durable
    ///
    /// The insert is committed only once the flush succeeds; a flush failure
    /// surfaces as `ServiceError::Storage` and leaves the store unchanged.
    async fn insert(&self, account: UserAccount) -> Result<(), ServiceError>;

    /// Number of registered accounts
    async fn count(&self) -> usize;
}
