use std::error::Error as StdError;
use std::io;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::*;

pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised while serving pages. Event streams never produce one: a client going
/// away mid-stream is a normal end of the response.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: WebErrorKind,
}

#[derive(Debug, PartialEq)]
pub enum WebErrorKind {
    /// The page template is missing from the templates directory.
    TemplateNotFound,
    Io,
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> core::result::Result<(), std::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self.error_kind {
            WebErrorKind::TemplateNotFound => {
                warn!("Template not found: {:?}", self.source);
                (StatusCode::NOT_FOUND, "NOT FOUND").into_response()
            }
            WebErrorKind::Io => {
                error!("Failed to read template: {:?}", self.source);
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL SERVER ERROR").into_response()
            }
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        let error_kind = match err.kind() {
            io::ErrorKind::NotFound => WebErrorKind::TemplateNotFound,
            _ => WebErrorKind::Io,
        };
        Error {
            source: Some(Box::new(err)),
            error_kind,
        }
    }
}
