//! Extractors whose rejections render as [`ApiError`] bodies.

use axum::extract::{FromRequest, FromRequestParts};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::application::dto::catalog::ListFilter;
use crate::presentation::http::error::ApiError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ValidJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ValidPath<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ValidQuery<T>(pub T);

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Case-insensitive substring of the name
    pub q: Option<String>,
    /// Page size, 1..=200 (default 50)
    pub limit: Option<i64>,
    /// Rows to skip
    pub offset: Option<i64>,
}

impl From<ListParams> for ListFilter {
    fn from(p: ListParams) -> Self {
        ListFilter::new(p.q, p.limit, p.offset)
    }
}
