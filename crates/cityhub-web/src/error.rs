use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::pages;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("City not found: {0}")]
    CityNotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::CityNotFound(name) => {
                (StatusCode::NOT_FOUND, Html(pages::city_not_found(&name))).into_response()
            }
        }
    }
}
