use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use mime::Mime;

#[derive(Debug)]
pub struct MemeImage {
    pub data: Bytes,
    pub mime_type: Mime,
}

impl IntoResponse for MemeImage {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, self.mime_type.to_string())], self.data).into_response()
    }
}
