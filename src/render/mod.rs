//! Rendering backend seam.
//!
//! # Responsibilities
//! - Define the contract of the external rendering service
//! - Provide the HTTP implementation used in production
//!
//! # Design Decisions
//! - The backend is an opaque collaborator: `POST {path, params, fetch}`,
//!   answer `{html, tree}`; nothing else is assumed about it
//! - The seam returns local boxed futures so single-threaded (`Rc`-based)
//!   views can await it without `Send` bounds
//! - No timeouts or retries here; a stalled request leaves the view pending

use futures_util::future::LocalBoxFuture;
use futures_util::FutureExt;
use serde::Deserialize;
use url::Url;

use crate::error::{Error, Result};
use crate::view::config::ViewConfig;

/// Successful answer from the rendering backend.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderResponse {
    /// Markup replacing the view's current content.
    pub html: String,
    /// Descriptor of the view and its descendants after the render.
    pub tree: ViewConfig,
}

/// External service turning a view configuration into markup plus a
/// descendant tree.
pub trait RenderBackend {
    /// Render `config`. The returned future resolves on the UI thread.
    fn render(&self, config: &ViewConfig) -> LocalBoxFuture<'static, Result<RenderResponse>>;
}

/// Production backend client: JSON POST against a `/view/` style endpoint.
#[derive(Debug, Clone)]
pub struct HttpRenderBackend {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpRenderBackend {
    /// Build a client for the given render endpoint.
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// The endpoint this backend posts to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl RenderBackend for HttpRenderBackend {
    fn render(&self, config: &ViewConfig) -> LocalBoxFuture<'static, Result<RenderResponse>> {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let body = config.clone();
        async move {
            tracing::debug!(endpoint = %endpoint, view = %body.path, "render request");
            let response = client.post(endpoint).json(&body).send().await?;
            let status = response.status();
            if !status.is_success() {
                tracing::warn!(view = %body.path, status = status.as_u16(), "render rejected");
                return Err(Error::RenderStatus(status.as_u16()));
            }
            Ok(response.json::<RenderResponse>().await?)
        }
        .boxed_local()
    }
}
