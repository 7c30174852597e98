use chrono::Utc;

use entity::enums::Role;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Identity, Permission},
    service::token::Claims,
};

mod require;

/// Builds the identity a verified token would produce for this user.
fn identity_for(user: &entity::user::Model) -> Identity {
    let now = Utc::now().timestamp();
    Identity {
        claims: Claims {
            sub: user.id,
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
            iat: now,
            exp: now + 3600,
        },
    }
}
