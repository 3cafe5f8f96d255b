use crate::{error::Result, AppState};
use axum::extract::State;
use axum::response::Html;
use log::*;

/// File name of the landing page inside the templates directory.
pub(crate) const INDEX_TEMPLATE: &str = "index.html";

/// GET the landing page that opens an `EventSource` on `/sse`.
///
/// The page is read from disk on every request so it can be edited without a restart.
pub async fn index(State(app_state): State<AppState>) -> Result<Html<String>> {
    let path = app_state.config.templates_dir().join(INDEX_TEMPLATE);
    debug!("Rendering landing page from {}", path.display());

    let page = tokio::fs::read_to_string(&path).await?;
    Ok(Html(page))
}
