use axum::Extension;
use bcrypt::{DEFAULT_COST, hash, verify};
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, RuntimeErr, Set};

use crate::db::entities::user;
use crate::db::services::user_service;
use crate::web::error::AppError;
use crate::web::models::{AuthenticatedUser, Claims, LoginRequest, LoginResponse, RegisterRequest, UserResponse};

pub async fn register_user(
    db: &DatabaseConnection,
    req: RegisterRequest,
) -> Result<UserResponse, AppError> {
    if req.username.trim().is_empty() || req.password.len() < 8 {
        return Err(AppError::InvalidInput(
            "Username must not be empty and the password needs at least 8 characters.".to_string(),
        ));
    }

    let existing = user_service::get_user_by_username(db, &req.username)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to check for existing user: {e}")))?;
    if existing.is_some() {
        return Err(AppError::UserAlreadyExists(
            "Username is already taken.".to_string(),
        ));
    }

    let password_hash = hash(&req.password, DEFAULT_COST)
        .map_err(|e| AppError::PasswordHashingError(format!("Password hashing failed: {e}")))?;

    let now = Utc::now();
    let new_user = user::ActiveModel {
        username: Set(req.username),
        password_hash: Set(password_hash),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    match new_user.insert(db).await {
        Ok(user_model) => Ok(UserResponse {
            id: user_model.id,
            username: user_model.username,
        }),
        Err(db_err) => {
            // Two concurrent registrations can race past the existence
            // check; the unique index reports the loser.
            if let DbErr::Query(RuntimeErr::SqlxError(sqlx_err))
            | DbErr::Exec(RuntimeErr::SqlxError(sqlx_err)) = &db_err
            {
                if let sqlx::Error::Database(database_error) = sqlx_err {
                    if database_error.is_unique_violation() {
                        return Err(AppError::UserAlreadyExists(
                            "Username is already taken.".to_string(),
                        ));
                    }
                }
            }
            Err(AppError::DatabaseError(format!("Failed to create user: {db_err}")))
        }
    }
}

pub async fn login_user(
    db: &DatabaseConnection,
    req: LoginRequest,
    jwt_secret: &str,
) -> Result<LoginResponse, AppError> {
    if req.username.is_empty() || req.password.is_empty() {
        return Err(AppError::InvalidInput(
            "Username and password must not be empty.".to_string(),
        ));
    }

    let user = user_service::get_user_by_username(db, &req.username)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to look up user: {e}")))?
        .ok_or(AppError::UserNotFound)?;

    let valid_password = verify(&req.password, &user.password_hash)
        .map_err(|e| AppError::InternalServerError(format!("Password verification failed: {e}")))?;
    if !valid_password {
        return Err(AppError::InvalidCredentials);
    }

    create_jwt_for_user(&user, jwt_secret)
}

pub fn create_jwt_for_user(user: &user::Model, jwt_secret: &str) -> Result<LoginResponse, AppError> {
    let now = Utc::now();
    // Tokens are valid for 24 hours.
    let expiration = (now + Duration::hours(24)).timestamp() as usize;

    let claims = Claims {
        sub: user.username.clone(),
        user_id: user.id,
        exp: expiration,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_ref()),
    )
    .map_err(|e| AppError::TokenCreationError(format!("Failed to create token: {e}")))?;

    Ok(LoginResponse {
        token,
        user_id: user.id,
        username: user.username.clone(),
    })
}

pub async fn me(
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<axum::Json<UserResponse>, AppError> {
    Ok(axum::Json(UserResponse {
        id: user.id,
        username: user.username,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{DecodingKey, Validation, decode};

    fn sample_user() -> user::Model {
        let now = Utc::now();
        user::Model {
            id: 7,
            username: "alice".to_string(),
            password_hash: "irrelevant".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_jwt_round_trip() {
        let secret = "test-secret";
        let login = create_jwt_for_user(&sample_user(), secret).unwrap();
        assert_eq!(login.user_id, 7);
        assert_eq!(login.username, "alice");

        let decoded = decode::<Claims>(
            &login.token,
            &DecodingKey::from_secret(secret.as_ref()),
            &Validation::default(),
        )
        .unwrap();
        assert_eq!(decoded.claims.user_id, 7);
        assert_eq!(decoded.claims.sub, "alice");
    }

    #[test]
    fn test_jwt_rejects_wrong_secret() {
        let login = create_jwt_for_user(&sample_user(), "secret-a").unwrap();
        let result = decode::<Claims>(
            &login.token,
            &DecodingKey::from_secret("secret-b".as_ref()),
            &Validation::default(),
        );
        assert!(result.is_err());
    }
}
