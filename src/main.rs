#![allow(dead_code)]

use std::{env, net::SocketAddr, sync::Arc};

#[macro_use]
extern crate lazy_static;

use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::app::env::Envy;

mod app;
mod memes;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt::init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port.to_owned().unwrap_or(3000);

    let state = AppState {
        envy: Arc::new(envy),
    };

    // app
    let app = app_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(memes::controller::get_meme))
        // every response leaves with caching disabled so clients pull a fresh
        // meme on each request
        .layer(
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::overriding(
                    header::CACHE_CONTROL,
                    HeaderValue::from_static("no-cache, no-store, must-revalidate"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::PRAGMA,
                    HeaderValue::from_static("no-cache"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::EXPIRES,
                    HeaderValue::from_static("0"),
                )),
        )
        .with_state(state)
}
