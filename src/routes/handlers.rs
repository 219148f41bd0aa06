//! Axum handlers and the HTTP error boundary.

use super::{resolve, root, ServerState};
use crate::app::{Location, ShellState};
use crate::domain::{Result, RolodexError};
use crate::ui;
use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};

/// Theme used for error pages rendered without server state.
const ERROR_THEME: &str = crate::DEFAULT_THEME;

fn location_of(uri: &Uri) -> Location {
    Location::parse(uri.path_and_query().map_or("/", |pq| pq.as_str()))
}

/// `GET` on any shell route: runs the loaders and renders the document.
#[tracing::instrument(skip_all, fields(uri = %uri))]
pub async fn document(State(state): State<ServerState>, uri: Uri) -> Result<Html<String>> {
    let location = location_of(&uri);

    let data = {
        let store = state.lock_store()?;
        resolve(&**store, &location)?
    };

    let shell = ShellState::new(location, data, state.theme.clone());
    Ok(Html(ui::render(&shell)))
}

/// `POST` on any shell route: creates a contact and redirects to its edit view.
#[tracing::instrument(skip_all, fields(path = uri.path()))]
pub async fn create_contact(State(state): State<ServerState>, uri: Uri) -> Result<Response> {
    let target = {
        let mut store = state.lock_store()?;
        root::action(&mut **store)?
    };

    Ok((StatusCode::FOUND, [(header::LOCATION, target.href())]).into_response())
}

/// Fallback for unknown paths.
pub async fn not_found(uri: Uri) -> RolodexError {
    RolodexError::NotFound(format!("no route for {}", uri.path()))
}

impl IntoResponse for RolodexError {
    fn into_response(self) -> Response {
        let status = if self.is_not_found() {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "resource not found");
        }

        let body = ui::render_error_page(ERROR_THEME, status.as_u16(), &self.to_string());
        (status, Html(body)).into_response()
    }
}
