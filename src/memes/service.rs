use std::io::Cursor;

use bytes::Bytes;
use image::ImageOutputFormat;
use rand::seq::SliceRandom;
use scraper::Html;

use crate::{
    app::{self, env::Envy, models::api_error::ApiError},
    AppState,
};

use super::{errors::MemesApiError, extract, models::meme_image::MemeImage};

const MEMES_SOURCE_URL: &str = "https://www.reddit.com/r/ProgrammerHumor/";
const JPEG_QUALITY: u8 = 70;

pub async fn get_random_meme(state: &AppState) -> Result<MemeImage, ApiError> {
    let memes = get_new_memes(&state.envy).await;

    if memes.is_empty() {
        return Err(MemesApiError::FailedToFetchMemes.value());
    }

    let Some(meme_url) = pick_meme(&memes)
    else {
        return Err(MemesApiError::FailedToFetchMemes.value());
    };

    fetch_meme_image(meme_url).await
}

pub async fn get_new_memes(envy: &Envy) -> Vec<String> {
    let url = envy.meme_source_url.as_deref().unwrap_or(MEMES_SOURCE_URL);

    let response = match reqwest::get(url).await {
        Ok(res) => res,
        Err(e) => {
            tracing::error!("error fetching memes: {}", e);
            return Vec::new();
        }
    };

    let response = match response.error_for_status() {
        Ok(res) => res,
        Err(e) => {
            tracing::error!("error fetching memes: {}", e);
            return Vec::new();
        }
    };

    let html = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("error fetching memes: {}", e);
            return Vec::new();
        }
    };

    let document = Html::parse_document(&html);

    extract::list_candidate_urls(&document)
        .into_iter()
        // "jpeg" is matched anywhere in the url, not just as the extension:
        // preview urls often carry the format marker in a query parameter
        .filter(|url| url.starts_with("https") && url.contains("jpeg"))
        .collect()
}

pub fn pick_meme(memes: &[String]) -> Option<&String> {
    memes.choose(&mut rand::thread_rng())
}

pub async fn fetch_meme_image(url: &str) -> Result<MemeImage, ApiError> {
    let bytes = match app::util::reqwest::get_bytes(url).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("error fetching image: {:?}", e);
            return Err(MemesApiError::FailedToFetchImage.value());
        }
    };

    let img = match image::load_from_memory(&bytes) {
        Ok(img) => img,
        Err(e) => {
            tracing::error!("error processing image: {}", e);
            return Err(MemesApiError::FailedToProcessImage.value());
        }
    };

    let mut buf = Cursor::new(Vec::new());

    if let Err(e) = img.write_to(&mut buf, ImageOutputFormat::Jpeg(JPEG_QUALITY)) {
        tracing::error!("error processing image: {}", e);
        return Err(MemesApiError::FailedToProcessImage.value());
    }

    Ok(MemeImage {
        data: Bytes::from(buf.into_inner()),
        mime_type: mime::IMAGE_JPEG,
    })
}
