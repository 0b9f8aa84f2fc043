//! Drawing page, embedded at compile time so the binary is self-contained.

use axum::{
    http::header,
    response::{Html, IntoResponse},
};

const HOME_HTML: &str = include_str!("../../static/home.html");
const HOME_JS: &str = include_str!("../../static/home.js");

pub async fn home() -> Html<&'static str> {
    Html(HOME_HTML)
}

pub async fn home_script() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/javascript")], HOME_JS)
}
