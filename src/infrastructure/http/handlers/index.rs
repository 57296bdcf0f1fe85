//! Index Handler

use axum::response::Html;

pub const INDEX_BANNER: &str = "<h1>Code challenge</h1>";

/// 首页静态横幅
pub async fn index() -> Html<&'static str> {
    Html(INDEX_BANNER)
}
