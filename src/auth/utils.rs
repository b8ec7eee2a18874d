use async_graphql::Context;
use secrecy::ExposeSecret;
use sha2::{Digest, Sha256};

use crate::{
    auth::Claims,
    config::Config,
    errors::{AppError, AppResult},
};

pub fn require_admin(claims: &Claims) -> AppResult<()> {
    if !claims.is_admin() {
        return Err(AppError::Forbidden(
            "Only admins can perform this action".to_string(),
        ));
    }
    Ok(())
}

pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

pub fn verify_admin_credentials(config: &Config, username: &str, password: &str) -> bool {
    let hashed = hash_password(password);
    let username_ok = constant_time_eq(username.as_bytes(), config.admin_username.as_bytes());
    let password_ok = constant_time_eq(
        hashed.as_bytes(),
        config.admin_password_hash.expose_secret().as_bytes(),
    );
    username_ok & password_ok
}

/// Claims attached to a GraphQL request, if the caller sent a valid token.
pub fn extract_claims_from_context(ctx: &Context<'_>) -> Option<Claims> {
    ctx.data_opt::<Claims>().cloned()
}
