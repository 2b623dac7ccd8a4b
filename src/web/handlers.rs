use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use log::{debug, error};

use crate::releases::DisplayRelease;
use crate::site::{Page, PageData};

use super::AppState;

/// Wraps any failure while producing a page.
pub struct AppError(anyhow::Error);

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("Request failed: {:#}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

async fn render_page(state: &AppState, page: Page) -> Result<Html<String>, AppError> {
    let releases = match page {
        Page::Changelog => state.releases().await,
        _ => Vec::new(),
    };
    let latest = match page {
        Page::Home => state.latest_release().await,
        _ => None,
    };

    let data = PageData::new(&releases, latest.as_ref(), state.analytics.as_deref());
    let html = state.renderer.render(page, &data)?;
    Ok(Html(html))
}

pub async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_page(&state, Page::Home).await
}

pub async fn changelog(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_page(&state, Page::Changelog).await
}

pub async fn privacy(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_page(&state, Page::Privacy).await
}

pub async fn terms(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_page(&state, Page::Terms).await
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn api_releases(State(state): State<AppState>) -> Json<Vec<DisplayRelease>> {
    Json(state.releases().await)
}

pub async fn not_found(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<(StatusCode, Html<String>), AppError> {
    debug!("No route for {}", uri);
    let html = render_page(&state, Page::NotFound).await?;
    Ok((StatusCode::NOT_FOUND, html))
}
