use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::ValidatedToken;
use crate::domain::authentication::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

/// Header carrying the raw token, accepted when no bearer token is sent.
pub const ACCESS_TOKEN_HEADER: &str = "accesstoken";

pub async fn validate_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<ApiSuccess<ValidateTokenResponseData>, ApiError> {
    let token = extract_token(&headers).ok_or_else(|| {
        tracing::warn!("Token rejected: no token in request headers");
        ApiError::from(AuthError::TokenRejected)
    })?;

    let validated = state.auth_service.validate(token).await?;

    Ok(ApiSuccess::new(StatusCode::OK, validated.into()))
}

/// Token from `Authorization: Bearer <token>`, falling back to `accessToken: <token>`.
fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    let token = match bearer {
        Some(token) => token,
        None => headers.get(ACCESS_TOKEN_HEADER)?.to_str().ok()?,
    };

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidateTokenResponseData {
    pub access_token: String,
    pub subject: String,
    pub role: String,
    pub user_id: i64,
}

impl From<ValidatedToken> for ValidateTokenResponseData {
    fn from(validated: ValidatedToken) -> Self {
        Self {
            access_token: validated.access_token,
            subject: validated.claims.sub,
            role: validated.claims.role,
            user_id: validated.claims.user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_extract_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));

        assert_eq!(extract_token(&headers), Some("abc.def"));
    }

    #[test]
    fn test_extract_access_token_header() {
        let mut headers = HeaderMap::new();
        headers.insert(ACCESS_TOKEN_HEADER, HeaderValue::from_static("abc.def"));

        assert_eq!(extract_token(&headers), Some("abc.def"));
    }

    #[test]
    fn test_bearer_takes_precedence() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer first.sig"));
        headers.insert(ACCESS_TOKEN_HEADER, HeaderValue::from_static("second.sig"));

        assert_eq!(extract_token(&headers), Some("first.sig"));
    }

    #[test]
    fn test_missing_or_empty_token() {
        assert_eq!(extract_token(&HeaderMap::new()), None);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer   "));
        assert_eq!(extract_token(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic dXNlcg=="));
        assert_eq!(extract_token(&headers), None);
    }
}
