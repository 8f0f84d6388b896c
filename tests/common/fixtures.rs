//! Local HTML site standing in for news pages.

use std::net::SocketAddr;
use std::time::Duration;

use axum::{Router, http::StatusCode, response::Html, routing::get};
use tokio::net::TcpListener;

pub const ARTICLE_HTML: &str = r#"<!doctype html>
<html>
<head>
  <title>Document title</title>
  <meta property="og:title" content="Parliament passes budget &amp; tax plan">
  <meta property="og:description" content="Lawmakers approved the annual budget.">
  <meta property="article:author" content="Political Desk">
  <meta property="article:published_time" content="2024-03-01T09:30:00Z">
</head>
<body><h1>Parliament passes budget</h1></body>
</html>"#;

pub const PREVIEW_HTML: &str = r#"<!doctype html>
<html>
<head>
  <title>  Local Preview Story  </title>
  <meta name="description" content="A story served by the fixture site.">
  <meta name="author" content="Jane Reporter">
  <meta property="og:image" content="/static/cover.png">
</head>
<body></body>
</html>"#;

pub const BARE_HTML: &str = "<html><body><p>No metadata here.</p></body></html>";

pub struct FixtureSite {
    addr: SocketAddr,
}

impl FixtureSite {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// `host:port`, as reported in metadata and previews.
    pub fn host(&self) -> String {
        self.addr.to_string()
    }
}

/// Serves the fixture pages. `/slow` answers after `slow_delay`.
pub async fn spawn_fixture_site(slow_delay: Duration) -> FixtureSite {
    let app = Router::new()
        .route("/article", get(|| async { Html(ARTICLE_HTML) }))
        .route("/preview", get(|| async { Html(PREVIEW_HTML) }))
        .route("/bare", get(|| async { Html(BARE_HTML) }))
        .route(
            "/error",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Html(BARE_HTML)) }),
        )
        .route(
            "/slow",
            get(move || async move {
                tokio::time::sleep(slow_delay).await;
                Html(ARTICLE_HTML)
            }),
        );

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("fixture bind failed");
    let addr = listener.local_addr().expect("fixture addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fixture site failed");
    });

    FixtureSite { addr }
}

/// An address nothing listens on.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind failed");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{}/page", addr)
}
