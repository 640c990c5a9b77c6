use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Form, Router,
    extract::{DefaultBodyLimit, Multipart, State},
    http::header,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;

use ggmax_core::settings::DEFAULT_MAX_UPLOAD_BYTES;
use ggmax_core::template::strip_trailing_newline;
use ggmax_core::{
    BatchConverter, ConvertError, FormatRegistry, TemplateResolver, TemplateSource, combine_inputs,
};

use crate::error::WebError;
use crate::pages;

/// Shared, read-only request state.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<FormatRegistry>,
    resolver: Arc<TemplateResolver>,
    upload_limit: usize,
}

impl AppState {
    pub fn new(registry: FormatRegistry, resolver: TemplateResolver) -> Self {
        Self {
            registry: Arc::new(registry),
            resolver: Arc::new(resolver),
            upload_limit: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    /// Cap request bodies at `bytes`.
    pub fn with_upload_limit(mut self, bytes: usize) -> Self {
        self.upload_limit = bytes;
        self
    }
}

pub fn router(state: AppState) -> Router {
    let limit = state.upload_limit;
    Router::new()
        .route("/", get(index))
        .route("/convert", post(convert))
        .route("/download", post(download))
        .layer(DefaultBodyLimit::max(limit))
        .with_state(state)
}

pub async fn run_server(state: AppState, listen_addr: &str) -> Result<(), String> {
    let addr: SocketAddr = listen_addr
        .parse()
        .map_err(|e| format!("Invalid listen_addr {listen_addr:?}: {e}"))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind {addr}: {e}"))?;
    log::info!("Listening on http://{}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| e.to_string())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    log::info!("Shutting down");
}

// ── GET / ────────────────────────────────────────────────────────────────────

async fn index(State(st): State<AppState>) -> Html<String> {
    Html(pages::form_page(st.registry.games(), None, None))
}

// ── POST /convert ────────────────────────────────────────────────────────────

/// Decoded multipart submission.
#[derive(Debug, Default)]
struct ConvertForm {
    game: String,
    template: Option<String>,
    base_text: Option<String>,
    base_file: Option<String>,
}

async fn read_form(mut multipart: Multipart, limit: usize) -> Result<ConvertForm, WebError> {
    let mut form = ConvertForm::default();
    let failed = |e| WebError::multipart(e, limit);

    while let Some(field) = multipart.next_field().await.map_err(failed)? {
        let name = field.name().unwrap_or_default().to_string();
        let data = field.bytes().await.map_err(failed)?;
        let text = || {
            String::from_utf8(data.to_vec()).map_err(|_| WebError::NotUtf8(name.clone()))
        };
        match name.as_str() {
            "game" => form.game = text()?.trim().to_string(),
            "template_file" => form.template = non_empty(text()?),
            "base_text" => form.base_text = non_empty(text()?),
            "base_file" => form.base_file = non_empty(text()?),
            other => log::debug!("Ignoring form field '{}'", other),
        }
    }
    Ok(form)
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() { None } else { Some(text) }
}

async fn convert(State(st): State<AppState>, multipart: Multipart) -> Result<Response, WebError> {
    let form = read_form(multipart, st.upload_limit).await?;

    if st.registry.get(&form.game).is_none() {
        return Err(WebError::UnknownGame(form.game));
    }

    let lines = combine_inputs(form.base_file.as_deref(), form.base_text.as_deref());
    if lines.iter().all(|l| l.trim().is_empty()) {
        let page = pages::form_page(
            st.registry.games(),
            Some(&form.game),
            Some("Nenhuma linha para converter."),
        );
        return Ok(Html(page).into_response());
    }

    // Uploaded templates stay in memory; nothing is written to disk.
    let source = match &form.template {
        Some(text) => TemplateSource::Inline(strip_trailing_newline(text).to_string()),
        None => TemplateSource::Conventional,
    };

    let converter = BatchConverter::new(&st.registry, &st.resolver);
    let result = converter
        .convert(&lines, &form.game, &source)
        .map_err(|e| match e {
            ConvertError::UnknownGame(game) => WebError::UnknownGame(game),
            other => WebError::internal(other.to_string()),
        })?;

    log::info!(
        "Converted {} line(s) for '{}': {} message(s), {} skipped",
        lines.len(),
        form.game,
        result.count(),
        result.skipped().len()
    );

    Ok(Html(pages::result_page(&form.game, &result)).into_response())
}

// ── POST /download ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct DownloadForm {
    content: String,
}

async fn download(Form(form): Form<DownloadForm>) -> impl IntoResponse {
    // Browsers submit form values with CRLF line breaks.
    let content = form.content.replace("\r\n", "\n");
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", pages::DOWNLOAD_FILE_NAME),
            ),
        ],
        content,
    )
}
