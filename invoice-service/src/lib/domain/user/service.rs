use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::Session;
use crate::domain::user::models::SignUpCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Sign-up, login and refresh orchestration over the credential store.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn sign_up(&self, command: SignUpCommand) -> Result<User, UserError> {
        // The store's unique constraint is what actually closes the race
        if self.repository.find_by_email(&command.email).await?.is_some() {
            return Err(UserError::EmailAlreadyExists(command.email.to_string()));
        }

        let password_hash = self
            .authenticator
            .hash_password(command.password.expose())
            .map_err(|e| UserError::Credential(e.to_string()))?;

        let user = User {
            id: UserId::new(),
            name: command.name,
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(created_user)
    }

    async fn login(&self, command: LoginCommand) -> Result<Session, UserError> {
        let Some(user) = self.repository.find_by_email(&command.email).await? else {
            tracing::debug!("Login rejected: unknown email");
            let rejection = self.authenticator.reject_unknown(command.password.expose());
            return Err(UserError::from(rejection));
        };

        let tokens = self
            .authenticator
            .authenticate(
                command.password.expose(),
                &user.password_hash,
                &user.id.to_string(),
            )
            .map_err(|e| {
                tracing::debug!(user_id = %user.id, error = %e, "Login rejected");
                UserError::from(e)
            })?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(Session {
            user,
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        })
    }

    async fn refresh_token(&self, refresh_token: &str) -> Result<(String, String), UserError> {
        let tokens = self.authenticator.refresh(refresh_token)?;
        Ok((tokens.access_token, tokens.refresh_token))
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn get_user_by_email(&self, email: &EmailAddress) -> Result<User, UserError> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or(UserError::NotFound(email.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use auth::TokenLifetimes;
    use mockall::mock;

    use super::*;
    use crate::domain::user::models::Password;
    use crate::domain::user::models::UserName;

    const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;
        }
    }

    fn authenticator() -> Arc<Authenticator> {
        Arc::new(Authenticator::new(SECRET, TokenLifetimes::default()))
    }

    fn email(s: &str) -> EmailAddress {
        EmailAddress::new(s.to_string()).unwrap()
    }

    fn password(s: &str) -> Password {
        Password::new(s.to_string()).unwrap()
    }

    fn stored_user(authenticator: &Authenticator, address: &str, plain: &str) -> User {
        User {
            id: UserId::new(),
            name: UserName::new("Alice".to_string()).unwrap(),
            email: email(address),
            password_hash: authenticator.hash_password(plain).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_sign_up_success() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_create()
            .withf(|user| {
                user.email.as_str() == "a@x.com"
                    && user.name.as_str() == "Alice"
                    && user.password_hash.starts_with("$argon2id$")
            })
            .times(1)
            .returning(Ok);

        let service = UserService::new(Arc::new(repository), authenticator());
        let command = SignUpCommand::new(
            UserName::new("Alice".to_string()).unwrap(),
            email("a@x.com"),
            password("pass_word!"),
        );

        let user = service.sign_up(command).await.unwrap();
        assert_eq!(user.email.as_str(), "a@x.com");
        assert_ne!(user.password_hash, "pass_word!");
    }

    #[tokio::test]
    async fn test_sign_up_duplicate_email_creates_nothing() {
        let authenticator = authenticator();
        let existing = stored_user(&authenticator, "a@x.com", "pass_word!");
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repository.expect_create().never();

        let service = UserService::new(Arc::new(repository), authenticator);
        let command = SignUpCommand::new(
            UserName::new("Bob".to_string()).unwrap(),
            email("a@x.com"),
            password("other"),
        );

        let result = service.sign_up(command).await;
        assert!(matches!(result, Err(UserError::EmailAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_sign_up_surfaces_store_uniqueness_violation() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_create()
            .times(1)
            .returning(|user| Err(UserError::EmailAlreadyExists(user.email.to_string())));

        let service = UserService::new(Arc::new(repository), authenticator());
        let command = SignUpCommand::new(
            UserName::new("Alice".to_string()).unwrap(),
            email("a@x.com"),
            password("pass_word!"),
        );

        let result = service.sign_up(command).await;
        assert!(matches!(result, Err(UserError::EmailAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_login_success_token_subject_is_user_id() {
        let authenticator = authenticator();
        let existing = stored_user(&authenticator, "a@x.com", "pass_word!");
        let user_id = existing.id;
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));

        let service = UserService::new(Arc::new(repository), Arc::clone(&authenticator));
        let session = service
            .login(LoginCommand {
                email: email("a@x.com"),
                password: password("pass_word!"),
            })
            .await
            .unwrap();

        assert_eq!(session.user.id, user_id);
        let claims = authenticator
            .validate_access_token(&session.access_token)
            .unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert!(authenticator.refresh(&session.refresh_token).is_ok());
    }

    #[tokio::test]
    async fn test_login_wrong_password_three_times() {
        let authenticator = authenticator();
        let existing = stored_user(&authenticator, "a@x.com", "pass_word!");
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .times(3)
            .returning(move |_| Ok(Some(existing.clone())));
        repository.expect_create().never();

        let service = UserService::new(Arc::new(repository), authenticator);

        for _ in 0..3 {
            let result = service
                .login(LoginCommand {
                    email: email("a@x.com"),
                    password: password("wrong"),
                })
                .await;
            assert!(matches!(result, Err(UserError::InvalidCredentials)));
        }
    }

    #[tokio::test]
    async fn test_login_unknown_email_looks_like_bad_password() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository), authenticator());
        let result = service
            .login(LoginCommand {
                email: email("nobody@x.com"),
                password: password("pass_word!"),
            })
            .await;

        assert!(matches!(result, Err(UserError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_email_costs_a_password_verification() {
        let authenticator = authenticator();
        let existing = stored_user(&authenticator, "a@x.com", "pass_word!");
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .times(6)
            .returning(move |email| {
                Ok((email.as_str() == "a@x.com").then(|| existing.clone()))
            });

        let service = UserService::new(Arc::new(repository), authenticator);
        let attempt = |address: &'static str| {
            let service = &service;
            async move {
                let started = std::time::Instant::now();
                for _ in 0..3 {
                    let result = service
                        .login(LoginCommand {
                            email: email(address),
                            password: password("wrong"),
                        })
                        .await;
                    assert!(matches!(result, Err(UserError::InvalidCredentials)));
                }
                started.elapsed()
            }
        };

        let known = attempt("a@x.com").await;
        let unknown = attempt("nobody@x.com").await;

        // Both paths run Argon2; a skipped verification is orders of magnitude faster.
        assert!(
            unknown * 4 > known,
            "unknown email took {:?}, wrong password took {:?}",
            unknown,
            known
        );
    }

    #[tokio::test]
    async fn test_refresh_token_returns_input_unchanged() {
        let authenticator = authenticator();
        let refresh_token = authenticator
            .token_service()
            .issue_refresh_token("user-1")
            .unwrap();

        let service = UserService::new(
            Arc::new(MockTestUserRepository::new()),
            Arc::clone(&authenticator),
        );

        let (access_token, returned) = service.refresh_token(&refresh_token).await.unwrap();
        assert_eq!(returned, refresh_token);
        assert_eq!(
            authenticator.validate_access_token(&access_token).unwrap().sub,
            "user-1"
        );
    }

    #[tokio::test]
    async fn test_refresh_token_with_foreign_secret() {
        let foreign = Authenticator::new(
            b"some-other-secret-key-that-is-32-bytes!!",
            TokenLifetimes::default(),
        );
        let refresh_token = foreign.token_service().issue_refresh_token("user-1").unwrap();

        let service = UserService::new(Arc::new(MockTestUserRepository::new()), authenticator());

        let result = service.refresh_token(&refresh_token).await;
        assert!(matches!(result, Err(UserError::InvalidToken)));
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository), authenticator());
        let result = service.get_user(&UserId::new()).await;

        assert!(matches!(result, Err(UserError::NotFound(_))));
    }
}
