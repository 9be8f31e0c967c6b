//! Account handlers: signup, activation, login, refresh, profile.

use axum::Json;
use axum::extract::State;

use lifehub_core::error::AppError;
use lifehub_entity::user::UpdateProfile;

use crate::dto::request::{
    ActivateRequest, LoginRequest, RefreshRequest, SignupRequest, UpdateProfileRequest, validate,
};
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse, UserResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    validate(&req)?;
    state
        .account_service
        .signup(&req.username, &req.email, &req.password)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Account created! Please check your email to activate your account.".to_string(),
    })))
}

/// POST /api/auth/activate
pub async fn activate(
    State(state): State<AppState>,
    Json(req): Json<ActivateRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.account_service.activate(&req.token).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Your account is now activated! Please log in.".to_string(),
    })))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, AppError> {
    let (user, pair) = state
        .account_service
        .login(&req.username, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        access_token: pair.access_token,
        refresh_token: pair.refresh_token,
        access_expires_at: pair.access_expires_at,
        refresh_expires_at: pair.refresh_expires_at,
        user: user.into(),
    })))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, AppError> {
    let (user, pair) = state.account_service.refresh(&req.refresh_token).await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        access_token: pair.access_token,
        refresh_token: pair.refresh_token,
        access_expires_at: pair.access_expires_at,
        refresh_expires_at: pair.refresh_expires_at,
        user: user.into(),
    })))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let user = state.account_service.me(&auth).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// PUT /api/users/me
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    validate(&req)?;
    let user = state
        .account_service
        .update_profile(
            &auth,
            UpdateProfile {
                display_name: req.display_name,
                bio: req.bio,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(user.into())))
}
