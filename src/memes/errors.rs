use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum MemesApiError {
    FailedToFetchMemes,
    FailedToFetchImage,
    FailedToProcessImage,
}

impl MemesApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::FailedToFetchMemes => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to fetch memes".to_string(),
            },
            Self::FailedToFetchImage => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to fetch image".to_string(),
            },
            Self::FailedToProcessImage => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to process image".to_string(),
            },
        }
    }
}
