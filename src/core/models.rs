// Domain models - pure data structures, no I/O

use crate::core::secret::SecretDigest;
use serde::{Deserialize, Serialize};

/// One registered account, as persisted in the users file
///
/// `email` is stored lowercased and trimmed; `username` is stored trimmed
/// with its case preserved. Both are unique across the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserAccount {
    pub email: String,
    pub username: String,
    pub password_hash: SecretDigest,
}

/// The identity returned to callers after a successful login or signup
///
/// This is the only account shape that ever leaves the core; it carries no
/// digest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthenticatedUser {
    pub username: String,
    pub email: String,
}

/// One condition entry in the corpus
///
/// Field names follow the corpus file. Keyword comparisons are
/// case-insensitive; a record with no keywords can never match and is
/// dropped at load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConditionRecord {
    pub name: String,
    pub description: String,
    pub medication: String,
    pub care: String,
    pub keywords: Vec<String>,
}
