//! Jikan API client.
//!
//! Every call is a single GET: no retry, no backoff, no pagination.

use super::error::FetchError;
use super::types::*;
use crate::query::SearchQuery;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::CatalogRecord;
use tracing::{debug, info, warn};
use url::Url;

/// A remote catalog the fetcher can read from
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch one title with its full details
    async fn anime_by_id(&self, id: &str) -> Result<CatalogRecord, FetchError>;

    /// Titles airing this season
    async fn current_season(&self, limit: u32) -> Result<Vec<CatalogRecord>, FetchError>;

    /// Titles announced for next season
    async fn upcoming_season(&self, limit: u32) -> Result<Vec<CatalogRecord>, FetchError>;

    /// Highest ranked titles
    async fn top_rated(&self, limit: u32) -> Result<Vec<CatalogRecord>, FetchError>;

    /// Titles matching a free-text query
    async fn search(&self, query: &SearchQuery, limit: u32) -> Result<Vec<CatalogRecord>, FetchError>;
}

/// Jikan API v4 client
pub struct JikanClient {
    /// HTTP client
    client: Client,
    /// Base URL for Jikan API
    base_url: Url,
}

impl JikanClient {
    /// Create a new Jikan client
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self, FetchError> {
        let base_url = Url::parse(base_url)?;
        let client = Client::builder().user_agent(user_agent).build()?;

        Ok(Self { client, base_url })
    }

    /// Build an endpoint URL from path segments and query pairs
    fn endpoint(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Make one GET request and parse the JSON body
    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        debug!(url = %url, "Making API request");

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "Request error");
            FetchError::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "Request failed");
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        let data = serde_json::from_str(&body).map_err(|e| {
            warn!(url = %url, error = %e, "Failed to parse response");
            FetchError::Parse(e)
        })?;

        debug!(url = %url, "Request successful");
        Ok(data)
    }

    async fn list(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Vec<CatalogRecord>, FetchError> {
        let url = self.endpoint(segments, query)?;
        let response: ListResponse<AnimeEntry> = self.get(url).await?;
        Ok(response.data.into_iter().map(CatalogRecord::from).collect())
    }
}

#[async_trait]
impl CatalogSource for JikanClient {
    async fn anime_by_id(&self, id: &str) -> Result<CatalogRecord, FetchError> {
        info!(id = id, "Fetching anime details");
        let url = self.endpoint(&["anime", id, "full"], &[])?;
        let response: ItemResponse<AnimeEntry> = self.get(url).await?;
        response
            .data
            .map(CatalogRecord::from)
            .ok_or(FetchError::MissingData)
    }

    async fn current_season(&self, limit: u32) -> Result<Vec<CatalogRecord>, FetchError> {
        info!(limit = limit, "Fetching current season");
        self.list(&["seasons", "now"], &[("limit", limit.to_string())]).await
    }

    async fn upcoming_season(&self, limit: u32) -> Result<Vec<CatalogRecord>, FetchError> {
        info!(limit = limit, "Fetching upcoming season");
        self.list(&["seasons", "upcoming"], &[("limit", limit.to_string())]).await
    }

    async fn top_rated(&self, limit: u32) -> Result<Vec<CatalogRecord>, FetchError> {
        info!(limit = limit, "Fetching top rated anime");
        self.list(&["top", "anime"], &[("limit", limit.to_string())]).await
    }

    async fn search(&self, query: &SearchQuery, limit: u32) -> Result<Vec<CatalogRecord>, FetchError> {
        info!(query = %query, limit = limit, "Searching anime");
        self.list(
            &["anime"],
            &[("q", query.as_str().to_string()), ("limit", limit.to_string())],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Serve one canned HTTP response and report the request line received.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let request = String::from_utf8_lossy(&request);
            let request_line = request.lines().next().unwrap_or_default().to_string();
            let _ = tx.send(request_line);

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        (format!("http://{}/v4", addr), rx)
    }

    fn client(base_url: &str) -> JikanClient {
        JikanClient::new(base_url, "anime-portal-test").unwrap()
    }

    #[tokio::test]
    async fn test_client_creation() {
        assert!(JikanClient::new("https://api.jikan.moe/v4", "anime-portal").is_ok());
        assert!(matches!(
            JikanClient::new("not a url", "anime-portal"),
            Err(FetchError::Url(_))
        ));
    }

    #[tokio::test]
    async fn test_endpoint_urls() {
        let client = client("https://api.jikan.moe/v4");

        let url = client
            .endpoint(&["seasons", "now"], &[("limit", "8".to_string())])
            .unwrap();
        assert_eq!(url.as_str(), "https://api.jikan.moe/v4/seasons/now?limit=8");

        let url = client.endpoint(&["anime", "5114", "full"], &[]).unwrap();
        assert_eq!(url.as_str(), "https://api.jikan.moe/v4/anime/5114/full");

        let url = client
            .endpoint(&["anime"], &[("q", "one piece & co".to_string())])
            .unwrap();
        assert_eq!(url.as_str(), "https://api.jikan.moe/v4/anime?q=one+piece+%26+co");
    }

    #[tokio::test]
    async fn test_top_rated_parses_listing() {
        let (base, request) = serve_once(
            "200 OK",
            r#"{"data": [{"mal_id": 1, "title": "A"}, {"mal_id": 2, "title": "B"}]}"#,
        )
        .await;

        let records = client(&base).top_rated(10).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].title.as_deref(), Some("B"));
        assert_eq!(request.await.unwrap(), "GET /v4/top/anime?limit=10 HTTP/1.1");
    }

    #[tokio::test]
    async fn test_search_encodes_query() {
        let (base, request) = serve_once("200 OK", r#"{"data": []}"#).await;

        let query = SearchQuery::parse("  naruto shippuden ").unwrap();
        let records = client(&base).search(&query, 10).await.unwrap();
        assert!(records.is_empty());
        assert_eq!(
            request.await.unwrap(),
            "GET /v4/anime?q=naruto+shippuden&limit=10 HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn test_anime_by_id_uses_full_endpoint() {
        let (base, request) = serve_once(
            "200 OK",
            r#"{"data": {"mal_id": 5114, "title": "Fullmetal Alchemist: Brotherhood"}}"#,
        )
        .await;

        let record = client(&base).anime_by_id("5114").await.unwrap();
        assert_eq!(record.id, 5114);
        assert_eq!(request.await.unwrap(), "GET /v4/anime/5114/full HTTP/1.1");
    }

    #[tokio::test]
    async fn test_missing_data_is_an_error() {
        let (base, _request) = serve_once("200 OK", r#"{"pagination": {}}"#).await;
        let result = client(&base).anime_by_id("1").await;
        assert!(matches!(result, Err(FetchError::MissingData)));
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let (base, _request) = serve_once("404 Not Found", r#"{"status": 404}"#).await;
        let result = client(&base).anime_by_id("999999").await;
        assert!(matches!(result, Err(FetchError::Status(s)) if s.as_u16() == 404));
    }

    #[tokio::test]
    async fn test_malformed_json_is_an_error() {
        let (base, _request) = serve_once("200 OK", "{not json").await;
        let result = client(&base).current_season(8).await;
        assert!(matches!(result, Err(FetchError::Parse(_))));
    }
}
