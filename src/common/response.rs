use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Response for a keyed lookup
///
/// A present value is sent as `200 OK` with the value serialized as the
/// whole JSON body. An absent value is sent as `404 Not Found` with an
/// empty body.
///
/// # Example
/// ```
/// use categorias_api::common::Lookup;
/// use axum::http::StatusCode;
/// use axum::response::IntoResponse;
///
/// let response = Lookup(None::<String>).into_response();
/// assert_eq!(response.status(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup<T>(pub Option<T>);

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T: Serialize> IntoResponse for Lookup<T> {
    fn into_response(self) -> Response {
        match self.0 {
            Some(value) => (StatusCode::OK, Json(value)).into_response(),
            None => StatusCode::NOT_FOUND.into_response(),
        }
    }
}

/// Map a lookup result onto its HTTP response
pub fn respond<T: Serialize>(result: Option<T>) -> Response {
    Lookup(result).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::CONTENT_TYPE;
    use serde_json::json;

    #[tokio::test]
    async fn test_present_value_is_ok_with_body() {
        let response = respond(Some(json!({ "id": 7 })));
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], br#"{"id":7}"#);
    }

    #[tokio::test]
    async fn test_absent_value_is_not_found_without_body() {
        let response = respond(None::<serde_json::Value>);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.is_empty());
    }
}
