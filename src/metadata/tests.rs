use super::*;

const ARTICLE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Ignored &amp; unused</title>
  <meta charset="utf-8">
  <meta property="og:title" content="Markets rally after rate decision">
  <meta property='og:description' content='Stocks rose &quot;sharply&quot; on Tuesday.'>
  <meta content="Jane Doe" property="article:author" />
  <meta property="article:published_time" content="2024-05-14T09:30:00Z">
  <meta name="description" content="Plain description">
</head>
<body><h1>Headline</h1></body>
</html>"#;

mod html_tests {
    use super::*;

    #[test]
    fn test_meta_property_any_attribute_order() {
        let doc = HtmlDocument::parse(ARTICLE_PAGE);

        assert_eq!(
            doc.meta_property("og:title").as_deref(),
            Some("Markets rally after rate decision")
        );
        assert_eq!(doc.meta_property("article:author").as_deref(), Some("Jane Doe"));
        assert_eq!(
            doc.meta_property("og:description").as_deref(),
            Some("Stocks rose \"sharply\" on Tuesday.")
        );
        assert_eq!(doc.meta_property("og:image"), None);
    }

    #[test]
    fn test_meta_name_is_distinct_from_property() {
        let doc = HtmlDocument::parse(ARTICLE_PAGE);

        assert_eq!(doc.meta_name("description").as_deref(), Some("Plain description"));
        assert_eq!(doc.meta_property("description"), None);
    }

    #[test]
    fn test_title_and_h1_text() {
        let doc = HtmlDocument::parse(
            "<TITLE>\n  Daily   News </TITLE><h1 class=\"x\"> <span>Big</span> story </h1><h1>Second</h1>",
        );

        assert_eq!(doc.title(), Some("Daily News"));
        assert_eq!(doc.first_h1(), Some("Big story"));
    }

    #[test]
    fn test_empty_content_is_absent() {
        let doc = HtmlDocument::parse(r#"<meta property="og:title" content="  ">"#);

        assert_eq!(doc.meta_property("og:title"), None);
    }

    #[test]
    fn test_garbage_input() {
        let doc = HtmlDocument::parse("<<<>>> not html <meta");

        assert_eq!(doc.title(), None);
        assert_eq!(doc.first_h1(), None);
        assert_eq!(doc.meta_property("og:title"), None);
    }

    #[test]
    fn test_gt_inside_quoted_attribute() {
        let doc = HtmlDocument::parse(
            r#"<meta property="og:description" content="Rates > 5% expected">
               <meta property="og:title" content="Stocks <up> today">"#,
        );

        assert_eq!(
            doc.meta_property("og:description").as_deref(),
            Some("Rates > 5% expected")
        );
        assert_eq!(doc.meta_property("og:title").as_deref(), Some("Stocks <up> today"));
    }

    #[test]
    fn test_named_and_numeric_entities() {
        let doc = HtmlDocument::parse(
            r#"<title>Caf&eacute; &amp; Bistro &ndash; Review</title>
               <meta property="og:title" content="Caf&eacute; owners protest">
               <meta name="author" content="Jos&#233; &#x4E;u&ntilde;ez">
               <h1>Z&uuml;rich &hellip; &bogus; update</h1>"#,
        );

        assert_eq!(
            doc.meta_property("og:title").as_deref(),
            Some("Caf\u{e9} owners protest")
        );
        assert_eq!(doc.meta_name("author").as_deref(), Some("Jos\u{e9} Nu\u{f1}ez"));
        assert_eq!(doc.title(), Some("Caf\u{e9} & Bistro \u{2013} Review"));
        assert_eq!(doc.first_h1(), Some("Z\u{fc}rich \u{2026} &bogus; update"));
    }
}

mod serialization_tests {
    use super::*;

    #[test]
    fn test_empty_serializes_as_empty_object() {
        let json = serde_json::to_value(SourceMetadata::default()).unwrap();

        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_partial_serializes_nulls() {
        let metadata = SourceMetadata {
            domain: Some("example.com".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&metadata).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "title": null,
                "description": null,
                "author": null,
                "date": null,
                "domain": "example.com"
            })
        );
    }

    #[test]
    fn test_deserialize_empty() {
        let metadata: SourceMetadata = serde_json::from_str("{}").unwrap();
        assert!(metadata.is_empty());
    }
}

mod collect_tests {
    use super::*;

    #[tokio::test]
    async fn test_collects_open_graph_fields() {
        let fetcher =
            MockPageFetcher::new().with_page("https://news.example.com/story", ARTICLE_PAGE);

        let metadata = collect_metadata(&fetcher, Some("https://news.example.com/story")).await;

        assert_eq!(
            metadata,
            SourceMetadata {
                title: Some("Markets rally after rate decision".to_string()),
                description: Some("Stocks rose \"sharply\" on Tuesday.".to_string()),
                author: Some("Jane Doe".to_string()),
                date: Some("2024-05-14T09:30:00Z".to_string()),
                domain: Some("news.example.com".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn test_domain_set_even_without_tags() {
        let fetcher = MockPageFetcher::new().with_page("http://localhost:9000/p", "<p>hi</p>");

        let metadata = collect_metadata(&fetcher, Some("http://localhost:9000/p")).await;

        assert_eq!(metadata.domain.as_deref(), Some("localhost:9000"));
        assert_eq!(metadata.title, None);
    }

    #[tokio::test]
    async fn test_error_status_page_still_parsed() {
        let fetcher = MockPageFetcher::new();
        fetcher.insert_page(
            "https://example.com/gone",
            404,
            r#"<meta property="og:title" content="Not Found">"#,
        );

        let metadata = collect_metadata(&fetcher, Some("https://example.com/gone")).await;

        assert_eq!(metadata.title.as_deref(), Some("Not Found"));
    }

    #[tokio::test]
    async fn test_fetch_failure_is_absorbed() {
        let fetcher = MockPageFetcher::new().with_error(
            "https://down.example.com/",
            FetchError::Timeout {
                url: "https://down.example.com/".to_string(),
            },
        );

        let metadata = collect_metadata(&fetcher, Some("https://down.example.com/")).await;

        assert!(metadata.is_empty());
        assert_eq!(fetcher.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_no_url_means_no_fetch() {
        let fetcher = MockPageFetcher::new();

        assert!(collect_metadata(&fetcher, None).await.is_empty());
        assert!(collect_metadata(&fetcher, Some("   ")).await.is_empty());
        assert!(fetcher.requests().is_empty());
    }

    #[tokio::test]
    async fn test_unparseable_url_is_absorbed() {
        let fetcher = MockPageFetcher::new();

        let metadata = collect_metadata(&fetcher, Some("reuters.com/article")).await;

        assert!(metadata.is_empty());
        assert!(fetcher.requests().is_empty());
    }
}

mod error_tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        let url = "https://x.test/".to_string();

        assert_eq!(
            FetchError::Ssl {
                url: url.clone(),
                reason: "bad cert".to_string()
            }
            .user_message(),
            "SSL certificate verification failed"
        );
        assert_eq!(
            FetchError::Connection {
                url: url.clone(),
                reason: "refused".to_string()
            }
            .user_message(),
            "Could not connect to the URL"
        );
        assert_eq!(
            FetchError::Timeout { url: url.clone() }.user_message(),
            "Request timed out"
        );
        assert_eq!(
            FetchError::Request {
                url: url.clone(),
                reason: "404 Not Found".to_string()
            }
            .user_message(),
            "Error fetching URL: 404 Not Found"
        );
        assert_eq!(
            FetchError::InvalidUrl { url }.user_message(),
            "Invalid URL format"
        );
    }

    #[test]
    fn test_categories() {
        let err = FetchError::Timeout {
            url: "https://x.test/".to_string(),
        };
        assert_eq!(err.category(), FetchErrorCategory::Timeout);
        assert_eq!(err.category().as_str(), "timeout");
    }

    #[test]
    fn test_http_fetcher_builds_for_each_profile() {
        assert!(HttpFetcher::new(&FetchConfig::default()).is_ok());
        assert!(HttpFetcher::new(&FetchConfig::browser(std::time::Duration::from_secs(2))).is_ok());
    }
}

mod http_fetcher_tests {
    use super::*;
    use std::net::SocketAddr;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Plain-HTTP listener that answers every connection with a 400, whatever arrives.
    async fn spawn_plain_http_listener() -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                tokio::spawn(async move {
                    let mut buf = [0u8; 1024];
                    let _ = socket.read(&mut buf).await;
                    let _ = socket
                        .write_all(b"HTTP/1.1 400 Bad Request\r\ncontent-length: 0\r\n\r\n")
                        .await;
                    let _ = socket.shutdown().await;
                });
            }
        });
        addr
    }

    /// Accepts connections and never answers.
    async fn spawn_silent_listener() -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                tokio::spawn(async move {
                    let mut buf = [0u8; 1024];
                    let _ = socket.read(&mut buf).await;
                    tokio::time::sleep(Duration::from_secs(30)).await;
                });
            }
        });
        addr
    }

    #[tokio::test]
    async fn test_https_to_plain_http_is_ssl_error() {
        let addr = spawn_plain_http_listener().await;
        let fetcher = HttpFetcher::new(&FetchConfig::default()).unwrap();
        let url = Url::parse(&format!("https://{addr}/")).unwrap();

        let err = fetcher.fetch(&url).await.unwrap_err();

        assert_eq!(err.category(), FetchErrorCategory::Ssl, "{err:?}");
        assert_eq!(err.user_message(), "SSL certificate verification failed");
    }

    #[tokio::test]
    async fn test_silent_server_is_timeout() {
        let addr = spawn_silent_listener().await;
        let fetcher =
            HttpFetcher::new(&FetchConfig::metadata(Duration::from_millis(200), "factlens-test"))
                .unwrap();
        let url = Url::parse(&format!("http://{addr}/slow")).unwrap();

        let err = fetcher.fetch(&url).await.unwrap_err();

        assert_eq!(err.category(), FetchErrorCategory::Timeout, "{err:?}");
        assert_eq!(err.user_message(), "Request timed out");
    }

    #[tokio::test]
    async fn test_closed_port_is_connection_error() {
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap()
        };
        let fetcher = HttpFetcher::new(&FetchConfig::default()).unwrap();
        let url = Url::parse(&format!("http://{addr}/")).unwrap();

        let err = fetcher.fetch(&url).await.unwrap_err();

        assert_eq!(err.category(), FetchErrorCategory::Connection, "{err:?}");
        assert_eq!(err.user_message(), "Could not connect to the URL");
    }
}
