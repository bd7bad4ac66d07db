use axum::extract::State;

use crate::{app::models::api_error::ApiError, AppState};

use super::{models::meme_image::MemeImage, service};

pub async fn get_meme(State(state): State<AppState>) -> Result<MemeImage, ApiError> {
    match service::get_random_meme(&state).await {
        Ok(meme) => Ok(meme),
        Err(e) => Err(e),
    }
}
