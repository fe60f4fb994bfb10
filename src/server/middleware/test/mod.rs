use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
    service::token::TokenService,
};
use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::Duration;
use test_utils::{builder::TestBuilder, factory};


fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
