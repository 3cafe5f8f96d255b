use async_stream::stream;
use axum::body::Body;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use log::*;
use service::AppState;
use sse::Ticker;
use std::convert::Infallible;

pub(crate) const EVENT_STREAM_CONTENT_TYPE: &str = "text/event-stream";

/// SSE handler that streams one fresh frame sequence per connection.
///
/// Each frame is written as its `Display` form in a single body chunk as soon as the
/// ticker produces it. When the client disconnects, axum drops the body stream, which
/// drops the receiver and stops the ticker. No keep-alive comments are sent, the
/// stream ends on its own.
pub(crate) async fn sse_handler(State(app_state): State<AppState>) -> impl IntoResponse {
    let (mut rx, _handle) = Ticker::spawn(
        app_state.config.frame_interval(),
        app_state.stream_registry.clone(),
    );

    let stream = stream! {
        while let Some(frame) = rx.recv().await {
            yield Ok::<_, Infallible>(frame.to_string());
        }

        debug!("Event stream exhausted, closing response");
    };

    (
        [
            (header::CONTENT_TYPE, EVENT_STREAM_CONTENT_TYPE),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        Body::from_stream(stream),
    )
}
