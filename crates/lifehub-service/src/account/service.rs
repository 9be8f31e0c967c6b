//! Account service: signup with email activation, login, and profile.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use lifehub_auth::activation::ActivationTokens;
use lifehub_auth::password::PasswordHasher;
use lifehub_auth::token::{TokenPair, TokenType, Tokens};
use lifehub_core::config::mail::MailConfig;
use lifehub_core::error::AppError;
use lifehub_core::traits::Mailer;
use lifehub_database::repositories::user::UserRepository;
use lifehub_entity::user::{CreateUser, UpdateProfile, User, UserRole, UserStatus};

use crate::context::RequestContext;

/// Manages the account lifecycle.
#[derive(Clone)]
pub struct AccountService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher and strength checker.
    hasher: Arc<PasswordHasher>,
    /// Access/refresh token service.
    tokens: Arc<Tokens>,
    /// Activation token service.
    activation: Arc<ActivationTokens>,
    /// Outgoing mail seam.
    mailer: Arc<dyn Mailer>,
    /// Mail settings (activation link base).
    mail_config: MailConfig,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        tokens: Arc<Tokens>,
        activation: Arc<ActivationTokens>,
        mailer: Arc<dyn Mailer>,
        mail_config: MailConfig,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            tokens,
            activation,
            mailer,
            mail_config,
        }
    }

    /// Registers a new account and emails an activation link.
    ///
    /// The account starts as `pending_activation` and cannot log in until
    /// the link is followed.
    pub async fn signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AppError> {
        self.hasher.check_strength(password, username, email)?;
        let password_hash = self.hasher.hash_password(password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                username: username.to_string(),
                email: email.to_string(),
                password_hash,
                role: UserRole::Member,
            })
            .await?;

        let token = self.activation.generate(user.id)?;
        let link = format!(
            "{}/activate?token={}",
            self.mail_config.activation_base_url.trim_end_matches('/'),
            token
        );
        self.mailer
            .send(
                &user.email,
                "Activate Your Account",
                &format!(
                    "Hi {},\n\nPlease activate your LifeHub account:\n{}\n",
                    user.username, link
                ),
            )
            .await?;

        info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Activates an account from an emailed token. Idempotent for an
    /// already-active account.
    pub async fn activate(&self, token: &str) -> Result<(), AppError> {
        let user_id = self.activation.verify(token)?;

        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("Activation link is invalid or expired"))?;

        match user.status {
            UserStatus::Active => Ok(()),
            UserStatus::PendingActivation => {
                self.user_repo.set_status(user.id, UserStatus::Active).await?;
                info!(user_id = %user.id, "Account activated");
                Ok(())
            }
            UserStatus::Disabled => {
                Err(AppError::unauthorized("Activation link is invalid or expired"))
            }
        }
    }

    /// Verifies credentials and issues a token pair.
    ///
    /// Unknown usernames and wrong passwords are indistinguishable to the
    /// caller.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(User, TokenPair), AppError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid username or password"))?;

        if !self.hasher.verify_password(password, &user.password_hash)? {
            return Err(AppError::unauthorized("Invalid username or password"));
        }

        if !user.can_login() {
            return Err(match user.status {
                UserStatus::PendingActivation => {
                    AppError::unauthorized("Account is not activated; check your email")
                }
                _ => AppError::unauthorized("Account is disabled"),
            });
        }

        let pair = self
            .tokens
            .generate_token_pair(user.id, user.role, &user.username)?;
        self.user_repo.touch_last_login(user.id).await?;

        info!(user_id = %user.id, "User logged in");
        Ok((user, pair))
    }

    /// Exchanges a refresh token for a fresh pair.
    pub async fn refresh(&self, refresh_token: &str) -> Result<(User, TokenPair), AppError> {
        let claims = self.tokens.decode(refresh_token, TokenType::Refresh)?;

        let user = self
            .user_repo
            .find_by_id(claims.sub)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid token"))?;

        if !user.can_login() {
            return Err(AppError::unauthorized("Account is disabled"));
        }

        let pair = self
            .tokens
            .generate_token_pair(user.id, user.role, &user.username)?;
        Ok((user, pair))
    }

    /// Loads the caller's own account.
    pub async fn me(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.find_user(ctx.user_id).await
    }

    /// Updates the caller's profile fields.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        update: UpdateProfile,
    ) -> Result<User, AppError> {
        self.find_user(ctx.user_id).await?;
        self.user_repo.update_profile(ctx.user_id, &update).await
    }

    async fn find_user(&self, id: Uuid) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
