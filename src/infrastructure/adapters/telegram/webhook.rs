//! Webhook transport (production mode)
//!
//! One endpoint, `POST /{bot_token}`. Every other path or method is a 404.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, Uri},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

use super::{handle_update, Update};
use crate::application::errors::BotError;
use crate::application::messaging::MessageDispatcher;
use crate::domain::traits::Bot;

/// Shared state of the webhook server
#[derive(Clone)]
pub struct WebhookState {
    path: Arc<str>,
    bot: Arc<dyn Bot>,
    // One update at a time, in arrival order
    dispatcher: Arc<Mutex<MessageDispatcher>>,
}

impl WebhookState {
    pub fn new(token: &str, bot: Arc<dyn Bot>, dispatcher: MessageDispatcher) -> Self {
        Self {
            path: webhook_path(token).into(),
            bot,
            dispatcher: Arc::new(Mutex::new(dispatcher)),
        }
    }
}

/// Path Telegram posts updates to
pub fn webhook_path(token: &str) -> String {
    format!("/{}", token)
}

/// Full URL to register with setWebhook
pub fn webhook_url(public_url: &str, token: &str) -> String {
    format!("{}{}", public_url.trim_end_matches('/'), webhook_path(token))
}

/// Build the webhook app. The token path is compared verbatim since tokens contain ':'.
pub fn router(state: WebhookState) -> Router {
    Router::new()
        .fallback(receive_update)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn receive_update(State(state): State<WebhookState>, method: Method, uri: Uri, body: Bytes) -> StatusCode {
    if method != Method::POST || uri.path() != &*state.path {
        return StatusCode::NOT_FOUND;
    }

    let update: Update = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(e) => {
            tracing::warn!("Rejected malformed update: {}", e);
            return StatusCode::BAD_REQUEST;
        }
    };

    let dispatcher = state.dispatcher.lock().await;
    if let Err(e) = handle_update(state.bot.as_ref(), &dispatcher, &update).await {
        tracing::error!("Failed to handle update {}: {}", update.update_id, e);
    }
    // Always acknowledge so Telegram does not redeliver
    StatusCode::OK
}

/// Serve the webhook router until the listener fails
pub async fn serve(listener: TcpListener, router: Router) -> Result<(), BotError> {
    let addr = listener
        .local_addr()
        .map_err(|e| BotError::Network(e.to_string()))?;
    tracing::info!("Webhook server listening on {}", addr);

    axum::serve(listener, router)
        .await
        .map_err(|e| BotError::Network(format!("Webhook server error: {}", e)))
}
