//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use kernel::id::UserId;
use platform::list_query::{ListQuery, ListQueryParams, Page};
use platform::login_throttle::LoginThrottle;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    ChangePasswordInput, ChangePasswordUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase,
    LoginInput, LoginUseCase, RegisterUserInput, RegisterUserUseCase, UpdateUserInput,
    UpdateUserUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    ChangePasswordRequest, CreateUserRequest, CreateUserResponse, IdResponse, LoginRequest,
    LoginResponse, UpdateUserRequest, UserSummary,
};

/// Shared state for auth and user handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub throttle: Arc<LoginThrottle>,
}

impl<R> AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    /// State with a fresh login throttle built from `config.login_throttle`
    pub fn new(repo: R, config: AuthConfig) -> Self {
        let throttle = LoginThrottle::new(config.login_throttle.clone());
        Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
            throttle: Arc::new(throttle),
        }
    }
}

// ============================================================================
// Authentication
// ============================================================================

/// POST /api/authentication/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.throttle.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(LoginResponse {
        email: output.user.email.to_string(),
        name: output.user.name.to_string(),
        user_id: output.user.user_id.to_string(),
        token: output.token,
    }))
}

// ============================================================================
// Users
// ============================================================================

/// GET /api/users
pub async fn list_users<R>(
    State(state): State<AuthAppState<R>>,
    Query(params): Query<ListQueryParams>,
) -> AuthResult<Json<Page<UserSummary>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let query = ListQuery::from_params(&params, state.config.default_page_size);
    let use_case = ListUsersUseCase::new(state.repo.clone());

    let page = use_case
        .execute(&query, |user| UserSummary::from(user))
        .await?;

    Ok(Json(page))
}

/// GET /api/users/{id}
pub async fn get_user<R>(
    State(state): State<AuthAppState<R>>,
    Path(id): Path<String>,
) -> AuthResult<Json<UserSummary>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let user_id = parse_user_id(&id)?;
    let user = GetUserUseCase::new(state.repo.clone())
        .execute(&user_id)
        .await?;

    Ok(Json(UserSummary::from(&user)))
}

/// POST /api/users
pub async fn create_user<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<CreateUserRequest>,
) -> AuthResult<Json<CreateUserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUserUseCase::new(state.repo.clone(), state.config.clone());

    let user = use_case
        .execute(RegisterUserInput {
            name: req.name,
            email: req.email,
            password: req.password,
            password_confirm: req.password_confirm,
        })
        .await?;

    Ok(Json(CreateUserResponse {
        name: user.name.to_string(),
        email: user.email.to_string(),
    }))
}

/// PUT /api/users/{id}
pub async fn update_user<R>(
    State(state): State<AuthAppState<R>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> AuthResult<Json<IdResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let user_id = parse_user_id(&id)?;
    let use_case = UpdateUserUseCase::new(state.repo.clone());

    use_case
        .execute(
            &user_id,
            UpdateUserInput {
                name: req.name,
                email: req.email,
            },
        )
        .await?;

    Ok(Json(IdResponse {
        id: user_id.to_string(),
    }))
}

/// DELETE /api/users/{id}
pub async fn delete_user<R>(
    State(state): State<AuthAppState<R>>,
    Path(id): Path<String>,
) -> AuthResult<Json<IdResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let user_id = parse_user_id(&id)?;
    DeleteUserUseCase::new(state.repo.clone())
        .execute(&user_id)
        .await?;

    Ok(Json(IdResponse {
        id: user_id.to_string(),
    }))
}

/// PATCH /api/users/{id}/change-password
pub async fn change_password<R>(
    State(state): State<AuthAppState<R>>,
    Path(id): Path<String>,
    Json(req): Json<ChangePasswordRequest>,
) -> AuthResult<Json<IdResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let user_id = parse_user_id(&id)?;
    let use_case = ChangePasswordUseCase::new(state.repo.clone(), state.config.clone());

    use_case
        .execute(
            &user_id,
            ChangePasswordInput {
                password_old: req.password_old,
                password_new: req.password_new,
                password_confirm: req.password_confirm,
            },
        )
        .await?;

    Ok(Json(IdResponse {
        id: user_id.to_string(),
    }))
}

// ============================================================================
// Helper Functions
// ============================================================================

/// A malformed id cannot name an existing user.
fn parse_user_id(raw: &str) -> AuthResult<UserId> {
    raw.parse().map_err(|_| AuthError::UserNotFound)
}
