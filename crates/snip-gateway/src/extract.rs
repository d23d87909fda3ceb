use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json`, but rejections render as [`AppError`] so every error body
/// has the same `{ "detail": ... }` shape.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
