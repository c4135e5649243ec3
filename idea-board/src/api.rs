//! Client for the external ideas API.
//!
//! ```text
//! GET  {base_url}/api/ideas                      -> [Idea]
//! POST {base_url}/api/ideas  {"content": "..."}  -> Idea
//! ```
//!
//! Status and body handling lives in plain functions ([`check_status`],
//! [`decode`]) so every transport treats responses the same way.

use crate::error::ApiError;
use crate::model::Idea;
use serde::de::DeserializeOwned;
use std::future::Future;

/// Path of the idea collection, relative to the API base URL.
pub const IDEAS_PATH: &str = "/api/ideas";

/// The two calls the board makes.
///
/// Futures are not required to be `Send`: in the browser they run on the
/// single event-loop thread.
pub trait IdeaApi {
    /// Fetch every idea in the order the service returns them.
    fn fetch_ideas(&self) -> impl Future<Output = Result<Vec<Idea>, ApiError>>;

    /// Create an idea. `content` is sent as given.
    fn create_idea(&self, content: &str) -> impl Future<Output = Result<Idea, ApiError>>;
}

/// Full URL of the idea collection for a base URL.
pub fn ideas_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), IDEAS_PATH)
}

/// Map a non-2xx status to [`ApiError::ServerError`].
pub fn check_status(status: u16, body: &str) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::ServerError {
            status,
            body: body.to_owned(),
        })
    }
}

/// Decode a JSON response body.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Status check followed by decode, for a complete response.
pub fn read_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    check_status(status, body)?;
    decode(body)
}

// ============================================================================
// Browser transport
// ============================================================================

#[cfg(feature = "web")]
mod web {
    use super::*;
    use crate::config::ClientConfig;
    use crate::model::NewIdea;
    use gloo_net::http::Request;

    /// [`IdeaApi`] over the browser's `fetch`, via gloo-net.
    #[derive(Debug, Clone)]
    pub struct HttpIdeaApi {
        url: String,
    }

    impl HttpIdeaApi {
        pub fn new(config: &ClientConfig) -> Self {
            Self {
                url: ideas_url(&config.api_url),
            }
        }

        pub fn url(&self) -> &str {
            &self.url
        }
    }

    async fn finish<T: DeserializeOwned>(
        response: gloo_net::http::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        read_response(status, &body)
    }

    impl IdeaApi for HttpIdeaApi {
        async fn fetch_ideas(&self) -> Result<Vec<Idea>, ApiError> {
            let response = Request::get(&self.url)
                .header("Accept", "application/json")
                .send()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;
            finish(response).await
        }

        async fn create_idea(&self, content: &str) -> Result<Idea, ApiError> {
            let body = NewIdea {
                content: content.to_owned(),
            };
            let response = Request::post(&self.url)
                .header("Accept", "application/json")
                .json(&body)
                .map_err(|e| ApiError::Serialization(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;
            finish(response).await
        }
    }
}

#[cfg(feature = "web")]
pub use web::HttpIdeaApi;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::IdeaId;

    #[test]
    fn url_joins_base_and_path() {
        assert_eq!(ideas_url("http://localhost:8000"), "http://localhost:8000/api/ideas");
        assert_eq!(ideas_url("http://localhost:8000/"), "http://localhost:8000/api/ideas");
        assert_eq!(
            ideas_url("https://ideas.example.com/v1//"),
            "https://ideas.example.com/v1/api/ideas"
        );
    }

    #[test]
    fn created_status_is_success() {
        assert_eq!(check_status(200, ""), Ok(()));
        assert_eq!(check_status(201, ""), Ok(()));
    }

    #[test]
    fn non_success_status_keeps_body() {
        let err = check_status(400, r#"{"detail":"Content cannot be empty"}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::ServerError {
                status: 400,
                body: r#"{"detail":"Content cannot be empty"}"#.into(),
            }
        );
    }

    #[test]
    fn list_order_is_preserved() {
        let body = r#"[
            {"id":3,"content":"c","created_at":"2024-01-03T00:00:00"},
            {"id":1,"content":"a","created_at":"2024-01-01T00:00:00"},
            {"id":2,"content":"b","created_at":"2024-01-02T00:00:00"}
        ]"#;
        let ideas: Vec<Idea> = read_response(200, body).unwrap();
        let ids: Vec<IdeaId> = ideas.into_iter().map(|i| i.id).collect();

        assert_eq!(
            ids,
            vec![IdeaId::from(3_i64), IdeaId::from(1_i64), IdeaId::from(2_i64)]
        );
    }

    #[test]
    fn malformed_body_is_deserialization_error() {
        let result: Result<Vec<Idea>, _> = read_response(200, "<html>oops</html>");
        assert!(matches!(result, Err(ApiError::Deserialization(_))));
    }

    #[test]
    fn error_status_wins_over_body() {
        let result: Result<Idea, _> = read_response(503, "not json");
        assert!(matches!(result, Err(ApiError::ServerError { status: 503, .. })));
    }
}
