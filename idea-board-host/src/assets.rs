//! Serving the embedded frontend.
//!
//! [`IndexPage`] renders `index.html` with the client configuration
//! injected, so the browser learns the API address the host was started
//! with. [`static_handler`] serves everything else in the bundle.

use axum::{
    body::Body,
    extract::State,
    http::{StatusCode, Uri, header},
    response::{Html, IntoResponse, Response},
};
use idea_board::ClientConfig;
use rust_embed::RustEmbed;
use std::marker::PhantomData;
use std::sync::Arc;

/// Comment in `index.html` replaced by the config script.
pub const CONFIG_PLACEHOLDER: &str = "<!--IDEA_BOARD_CONFIG-->";

/// Element id the frontend reads its config from.
pub const CONFIG_ELEMENT_ID: &str = "idea-board-config";

/// Files a runnable bundle needs. `wasm-bindgen` names the last two after
/// the frontend crate.
pub const BUNDLE_FILES: [&str; 3] = [
    "index.html",
    "idea_board_frontend.js",
    "idea_board_frontend_bg.wasm",
];

/// Entries of [`BUNDLE_FILES`] that `A` does not contain.
pub fn missing_bundle_files<A: RustEmbed>() -> Vec<&'static str> {
    BUNDLE_FILES
        .into_iter()
        .filter(|file| A::get(file).is_none())
        .collect()
}

/// `index.html` with the serialized [`ClientConfig`] injected.
pub struct IndexPage<A: RustEmbed> {
    config: ClientConfig,
    _assets: PhantomData<A>,
}

impl<A: RustEmbed> IndexPage<A> {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            _assets: PhantomData,
        }
    }
}

fn plain(status: StatusCode, body: impl Into<Body>) -> Response {
    (status, body.into()).into_response()
}

impl<A: RustEmbed> IntoResponse for IndexPage<A> {
    fn into_response(self) -> Response {
        let config_json = match serde_json::to_string(&self.config) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to serialize client config: {e}");
                return plain(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to serialize client config: {e}"),
                );
            }
        };

        let Some(content) = A::get("index.html") else {
            return plain(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Frontend assets not found. Did you build the frontend?",
            );
        };

        let html = String::from_utf8_lossy(&content.data);
        let config_script = format!(
            r#"<script id="{CONFIG_ELEMENT_ID}" type="application/json">{}</script>"#,
            config_json.replace("</", "<\\/")
        );
        Html(html.replace(CONFIG_PLACEHOLDER, &config_script)).into_response()
    }
}

/// Serve an embedded asset.
///
/// `index.html` and unknown paths get the page with `client` injected, so
/// deep links load the same configuration as `/`. Without an `index.html`
/// in the bundle, unknown paths are 404.
pub async fn static_handler<A: RustEmbed>(
    State(client): State<Arc<ClientConfig>>,
    uri: Uri,
) -> Response {
    let path = uri.path().trim_start_matches('/');
    let page = || IndexPage::<A>::new(ClientConfig::clone(&client)).into_response();

    if path.is_empty() || path == "index.html" {
        return page();
    }

    match A::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            (
                [(header::CONTENT_TYPE, mime.as_ref().to_owned())],
                content.data.into_owned(),
            )
                .into_response()
        }
        None if A::get("index.html").is_some() => page(),
        None => plain(StatusCode::NOT_FOUND, "404 Not Found"),
    }
}
