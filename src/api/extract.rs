//! Request extractors whose rejections use the API error body.
//!
//! axum's own `Json` and `Query` reject malformed input with a plain-text
//! response. These wrappers run the same extraction and turn the rejection
//! into an [`AppError`], so clients always get
//! `{"error": {"code", "message", "details"}}`.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query string.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
