use entity::prelude::User as UserEntity;

use crate::server::{
    credential::{
        password::{hash_password_blocking, verify_dummy_blocking, verify_password_blocking},
        token::TokenSigner,
    },
    data::{query::Filter, store::Store},
    error::{auth::AuthError, data::DataError, AppError},
    model::user::{RegisterUserParams, User},
};

pub struct UserService<'a> {
    store: &'a Store,
    tokens: &'a TokenSigner,
}

impl<'a> UserService<'a> {
    pub fn new(store: &'a Store, tokens: &'a TokenSigner) -> Self {
        Self { store, tokens }
    }

    /// Creates an account, storing only the argon2 hash of the password.
    ///
    /// # Returns
    /// - `Ok(User)` - Created account
    /// - `Err(DataError::Validation)` - Empty username or password
    /// - `Err(DataError::Conflict)` - Username already taken
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        let username = params.username.trim().to_string();
        if username.is_empty() {
            return Err(DataError::Validation("Username is required".to_string()).into());
        }
        if params.password.is_empty() {
            return Err(DataError::Validation("Password is required".to_string()).into());
        }

        let password_hash = hash_password_blocking(params.password).await?;

        let created = self
            .store
            .repository::<UserEntity>()
            .create(entity::user::Model {
                id: 0,
                username,
                password_hash,
                role: params.role,
            })
            .await
            .map_err(|err| match err {
                DataError::Conflict(_) => {
                    DataError::Conflict("Username already exists".to_string())
                }
                err => err,
            })?;

        tracing::info!("Registered user {}", created.username);

        Ok(User::from_entity(created))
    }

    /// Checks credentials and issues a session token.
    ///
    /// Unknown usernames and wrong passwords fail identically, and both run one
    /// argon2 verification.
    pub async fn login(&self, username: &str, password: String) -> Result<String, AppError> {
        let found = self
            .store
            .repository::<UserEntity>()
            .get(Filter::new().eq(entity::user::Column::Username, username))
            .await;

        let user = match found {
            Ok(user) => user,
            Err(DataError::NotFound(_)) => {
                verify_dummy_blocking(password).await;
                tracing::debug!("Login for unknown user {}", username);
                return Err(AuthError::InvalidCredentials.into());
            }
            Err(err) => return Err(err.into()),
        };

        if !verify_password_blocking(password, user.password_hash.clone()).await {
            tracing::debug!("Password mismatch for user {}", username);
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(self.tokens.issue(&user.username)?)
    }

    /// Exchanges a valid token for a fresh one once its refresh point has passed.
    ///
    /// Before that point the presented token is returned unchanged. The subject must
    /// still exist.
    pub async fn refresh(&self, token: &str) -> Result<String, AppError> {
        let claims = self.tokens.validate(token)?;

        let exists = self
            .store
            .repository::<UserEntity>()
            .get(Filter::new().eq(entity::user::Column::Username, claims.sub.as_str()))
            .await;

        match exists {
            Ok(_) => {}
            Err(DataError::NotFound(_)) => {
                return Err(AuthError::TokenInvalid("subject no longer exists".to_string()).into())
            }
            Err(err) => return Err(err.into()),
        }

        if claims.should_refresh_at(chrono::Utc::now()) {
            return Ok(self.tokens.issue(&claims.sub)?);
        }

        Ok(token.to_string())
    }
}
