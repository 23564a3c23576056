//! Registration, login, and account listing.

use std::sync::Arc;

use taskdeck_core::error::CoreError;
use taskdeck_core::types::DbId;
use taskdeck_core::validation::normalize_email;
use taskdeck_db::models::user::{CreateUser, User};
use taskdeck_db::store::CredentialStore;

use crate::auth::jwt::{generate_access_token, JwtConfig};
use crate::auth::password::{hash_password, verify_password};

/// Returned for both unknown e-mails and wrong passwords.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// A successful login: the bearer token and the account it belongs to.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub user: User,
}

pub struct AuthService {
    credentials: Arc<dyn CredentialStore>,
    jwt: JwtConfig,
}

impl AuthService {
    pub fn new(credentials: Arc<dyn CredentialStore>, jwt: JwtConfig) -> Self {
        Self { credentials, jwt }
    }

    /// Create an account with its default statuses and priorities.
    ///
    /// All three inputs are trimmed and the e-mail is lower-cased before any
    /// check runs. The store writes the account and its vocabulary as one
    /// unit, so a failed registration can simply be retried.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, CoreError> {
        let name = name.trim();
        let email = normalize_email(email);
        let password = password.trim();

        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(CoreError::Validation(
                "name, email, and password cannot be empty".into(),
            ));
        }

        if self.credentials.find_user_by_email(&email).await?.is_some() {
            return Err(CoreError::Conflict("user already exists".into()));
        }

        let password_hash = hash_password(password)
            .map_err(|e| CoreError::Internal(format!("Password hashing error: {e}")))?;

        let input = CreateUser {
            name: name.to_string(),
            email,
            password_hash,
        };
        // A concurrent registration can win between the lookup and the insert.
        let user = match self.credentials.create_user(&input).await {
            Ok(user) => user,
            Err(e) if e.is_unique_violation() => {
                return Err(CoreError::Conflict("user already exists".into()));
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Check credentials and issue a bearer token.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, CoreError> {
        let email = normalize_email(email);
        let password = password.trim();

        if email.is_empty() || password.is_empty() {
            return Err(CoreError::Validation(
                "email and password cannot be empty".into(),
            ));
        }

        let Some(user) = self.credentials.find_user_by_email(&email).await? else {
            return Err(CoreError::Unauthorized(INVALID_CREDENTIALS.into()));
        };

        let password_valid = verify_password(password, &user.password_hash)
            .map_err(|e| CoreError::Internal(format!("Password verification error: {e}")))?;
        if !password_valid {
            tracing::debug!(user_id = %user.id, "Rejected login with wrong password");
            return Err(CoreError::Unauthorized(INVALID_CREDENTIALS.into()));
        }

        let token = generate_access_token(user.id, &self.jwt)
            .map_err(|e| CoreError::Internal(format!("Token generation error: {e}")))?;

        tracing::info!(user_id = %user.id, "User logged in");
        Ok(AuthSession {
            token,
            expires_in: self.jwt.expires_in_secs(),
            user,
        })
    }

    /// The account behind an authenticated request.
    pub async fn current_user(&self, user_id: DbId) -> Result<User, CoreError> {
        self.credentials
            .find_user_by_id(user_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "User",
                id: user_id,
            })
    }

    /// Every account, newest first.
    pub async fn list_users(&self) -> Result<Vec<User>, CoreError> {
        Ok(self.credentials.list_users().await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use taskdeck_db::error::{StoreError, StoreResult};
    use taskdeck_db::store::{MemoryStore, OwnershipStore};

    use super::*;
    use crate::auth::jwt::validate_token;

    fn service() -> (AuthService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let auth = AuthService::new(store.clone(), JwtConfig::new("unit-test-secret"));
        (auth, store)
    }

    #[tokio::test]
    async fn register_normalizes_and_hashes() {
        let (auth, store) = service();

        let user = auth.register("Alice", " alice@X.com ", "secret").await.unwrap();

        assert_eq!(user.name, "Alice");
        assert_eq!(user.email, "alice@x.com");
        let stored = store.find_user_by_email("alice@x.com").await.unwrap().unwrap();
        assert!(verify_password("secret", &stored.password_hash).unwrap());
        assert!(!verify_password("Secret", &stored.password_hash).unwrap());
    }

    #[tokio::test]
    async fn register_rejects_blank_fields() {
        let (auth, _) = service();
        for (name, email, password) in [
            ("  ", "a@x.com", "pw"),
            ("Alice", " \t", "pw"),
            ("Alice", "a@x.com", "   "),
        ] {
            assert_matches!(
                auth.register(name, email, password).await,
                Err(CoreError::Validation(_))
            );
        }
    }

    #[tokio::test]
    async fn second_registration_with_same_normalized_email_conflicts() {
        let (auth, _) = service();
        auth.register("Alice", "alice@x.com", "secret").await.unwrap();

        assert_matches!(
            auth.register("Other", "  ALICE@x.com", "different").await,
            Err(CoreError::Conflict(_))
        );
    }

    #[tokio::test]
    async fn register_seeds_default_vocabulary() {
        let (auth, store) = service();
        let user = auth.register("Alice", "alice@x.com", "secret").await.unwrap();

        assert_eq!(store.list_statuses(user.id).await.unwrap().len(), 3);
        assert_eq!(store.list_priorities(user.id).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn login_issues_token_for_user() {
        let (auth, _) = service();
        let user = auth.register("Alice", "alice@x.com", "secret").await.unwrap();

        let session = auth.login(" Alice@X.com", " secret ").await.unwrap();

        assert_eq!(session.user.id, user.id);
        assert_eq!(session.expires_in, 24 * 3600);
        let claims = validate_token(&session.token, &JwtConfig::new("unit-test-secret")).unwrap();
        assert_eq!(claims.sub, user.id);
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_are_indistinguishable() {
        let (auth, _) = service();
        auth.register("Alice", "alice@x.com", "secret").await.unwrap();

        let wrong_password = auth.login("alice@x.com", "Secret").await.unwrap_err();
        let unknown_email = auth.login("nobody@x.com", "secret").await.unwrap_err();

        assert_matches!(&wrong_password, CoreError::Unauthorized(_));
        assert_matches!(&unknown_email, CoreError::Unauthorized(_));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[tokio::test]
    async fn login_rejects_blank_fields() {
        let (auth, _) = service();
        assert_matches!(auth.login("", "pw").await, Err(CoreError::Validation(_)));
        assert_matches!(auth.login("a@x.com", "  ").await, Err(CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn current_user_of_unknown_id_is_not_found() {
        let (auth, _) = service();
        assert_matches!(
            auth.current_user(DbId::new_v4()).await,
            Err(CoreError::NotFound { entity: "User", .. })
        );
    }

    #[tokio::test]
    async fn list_users_returns_everyone() {
        let (auth, _) = service();
        auth.register("Alice", "alice@x.com", "secret").await.unwrap();
        auth.register("Bob", "bob@x.com", "secret").await.unwrap();

        assert_eq!(auth.list_users().await.unwrap().len(), 2);
    }

    // -----------------------------------------------------------------------
    // Failed account writes
    // -----------------------------------------------------------------------

    /// Wraps a [`MemoryStore`] and fails the first account write the way a
    /// rolled-back transaction does: with an error and no rows left behind.
    struct FlakyAccounts {
        inner: MemoryStore,
        fail_next_create: AtomicBool,
    }

    #[async_trait]
    impl CredentialStore for FlakyAccounts {
        async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
            self.inner.find_user_by_email(email).await
        }

        async fn find_user_by_id(&self, id: DbId) -> StoreResult<Option<User>> {
            self.inner.find_user_by_id(id).await
        }

        async fn create_user(&self, input: &CreateUser) -> StoreResult<User> {
            if self.fail_next_create.swap(false, Ordering::SeqCst) {
                return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
            }
            self.inner.create_user(input).await
        }

        async fn list_users(&self) -> StoreResult<Vec<User>> {
            self.inner.list_users().await
        }

        async fn ping(&self) -> StoreResult<()> {
            self.inner.ping().await
        }
    }

    #[tokio::test]
    async fn failed_registration_can_be_retried() {
        let store = Arc::new(FlakyAccounts {
            inner: MemoryStore::new(),
            fail_next_create: AtomicBool::new(true),
        });
        let auth = AuthService::new(store.clone(), JwtConfig::new("unit-test-secret"));

        assert_matches!(
            auth.register("Alice", "alice@x.com", "secret").await,
            Err(CoreError::Internal(_))
        );
        assert!(store.find_user_by_email("alice@x.com").await.unwrap().is_none());

        let user = auth.register("Alice", "alice@x.com", "secret").await.unwrap();
        assert_eq!(store.inner.list_statuses(user.id).await.unwrap().len(), 3);
        assert_eq!(store.inner.list_priorities(user.id).await.unwrap().len(), 3);
    }
}
