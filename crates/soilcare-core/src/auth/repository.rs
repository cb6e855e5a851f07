//! UserRepository trait definition.

use soilcare_types::error::RepositoryError;
use soilcare_types::user::User;

/// Repository trait for user identity persistence.
///
/// Implementations live in soilcare-infra (e.g., `SqliteUserRepository`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait UserRepository: Send + Sync {
    /// Persist a new user.
    ///
    /// Fails with [`RepositoryError::Conflict`] if the email is already
    /// registered; the unique constraint guarantees no second row is
    /// written.
    fn create(
        &self,
        user: &User,
    ) -> impl std::future::Future<Output = Result<User, RepositoryError>> + Send;

    /// Look up a user by email.
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl std::future::Future<Output = Result<Option<User>, RepositoryError>> + Send;
}
