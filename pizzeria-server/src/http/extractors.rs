//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;

/// Extract a restaurant id from the path.
///
/// Anything that is not a positive integer cannot name a restaurant,
/// so it is reported as a missing restaurant rather than a bad request.
pub struct RestaurantId(pub i64);

impl<S> FromRequestParts<S> for RestaurantId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| restaurant_not_found())?;

        parse_id(&raw).map(Self).ok_or_else(restaurant_not_found)
    }
}

/// Digits only: no sign, no whitespace, and the value must be positive.
fn parse_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    raw.parse::<i64>().ok().filter(|id| *id > 0)
}

fn restaurant_not_found() -> ApiError {
    ApiError::NotFound {
        resource: "restaurant",
    }
}
