//! Photo feed client
//!
//! `PhotoFeed` is the boundary to the remote photo API. `UnsplashClient` is
//! the production implementation; tests substitute their own.

use std::{future::Future, pin::Pin, time::Duration};

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    domain::photo::{PhotoId, PhotoRecord},
    infrastructure::config::Config,
};

pub type FeedFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Vec<PhotoRecord>, FeedError>> + Send + 'a>>;

/// Source of photo listing pages (1-based)
pub trait PhotoFeed: Send + Sync {
    fn fetch_page(&self, page: u32) -> FeedFuture<'_>;
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("request timed out")]
    Timeout,
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FeedError::Timeout
        } else {
            FeedError::Request(err)
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiPhoto {
    id: String,
    urls: ApiUrls,
    user: ApiUser,
    #[serde(default)]
    alt_description: Option<String>,
    #[serde(default)]
    likes: u64,
    #[serde(default)]
    color: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiUrls {
    small: String,
}

#[derive(Debug, Deserialize)]
struct ApiUser {
    name: String,
}

impl From<ApiPhoto> for PhotoRecord {
    fn from(photo: ApiPhoto) -> Self {
        PhotoRecord {
            id: PhotoId::new(photo.id),
            thumbnail_url: photo.urls.small,
            author_name: photo.user.name,
            alt_text: photo.alt_description,
            likes: photo.likes,
            color: photo.color,
        }
    }
}

/// Decode one page of the photo listing
pub fn parse_photos(body: &[u8]) -> Result<Vec<PhotoRecord>, FeedError> {
    let photos: Vec<ApiPhoto> = serde_json::from_slice(body)?;
    Ok(photos.into_iter().map(PhotoRecord::from).collect())
}

pub struct UnsplashClient {
    http: reqwest::Client,
    api_url: String,
    access_key: SecretString,
    per_page: Option<u32>,
}

impl UnsplashClient {
    pub fn new(config: &Config) -> Result<Self, FeedError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
        if config.request_timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.request_timeout_secs));
        }

        Ok(Self {
            http: builder.build()?,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            access_key: config.access_key.clone(),
            per_page: config.per_page,
        })
    }

    pub fn photos_url(&self) -> String {
        format!("{}/photos", self.api_url)
    }

    async fn get_page(&self, page: u32) -> Result<Vec<PhotoRecord>, FeedError> {
        let mut query = vec![
            ("page", page.to_string()),
            ("client_id", self.access_key.expose_secret().to_string()),
        ];
        if let Some(per_page) = self.per_page {
            query.push(("per_page", per_page.to_string()));
        }

        log::debug!("GET {} page={page}", self.photos_url());
        let response = self
            .http
            .get(self.photos_url())
            .header("Accept-Version", "v1")
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        parse_photos(&body)
    }
}

impl PhotoFeed for UnsplashClient {
    fn fetch_page(&self, page: u32) -> FeedFuture<'_> {
        Box::pin(self.get_page(page))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PAGE: &str = r##"[
        {
            "id": "LBI7cgq3pbM",
            "color": "#60544D",
            "likes": 12,
            "alt_description": "a man riding a skateboard",
            "urls": { "raw": "https://images.example/raw", "small": "https://images.example/small" },
            "user": { "id": "u1", "name": "Gilbert Kane" }
        },
        {
            "id": "x2",
            "urls": { "small": "https://images.example/x2" },
            "user": { "name": "Ansel" }
        }
    ]"##;

    #[test]
    fn test_parse_photos() -> color_eyre::Result<()> {
        let photos = parse_photos(PAGE.as_bytes())?;

        assert_eq!(
            photos,
            vec![
                PhotoRecord::new(
                    "LBI7cgq3pbM",
                    "https://images.example/small",
                    "Gilbert Kane"
                )
                .alt_text("a man riding a skateboard")
                .likes(12)
                .color("#60544D"),
                PhotoRecord::new("x2", "https://images.example/x2", "Ansel"),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_parse_null_description() -> color_eyre::Result<()> {
        let photos = parse_photos(
            br#"[{"id":"a","alt_description":null,"urls":{"small":"s"},"user":{"name":"n"}}]"#,
        )?;

        assert_eq!(photos[0].id, PhotoId::new("a"));
        assert_eq!(photos[0].alt_text, None);
        Ok(())
    }

    #[test]
    fn test_parse_empty_page() -> color_eyre::Result<()> {
        assert!(parse_photos(b"[]")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        assert!(matches!(
            parse_photos(b"<html>rate limited</html>"),
            Err(FeedError::Decode(_))
        ));
        assert!(matches!(
            parse_photos(br#"{"errors":["OAuth error"]}"#),
            Err(FeedError::Decode(_))
        ));
        assert!(matches!(
            parse_photos(br#"[{"id":"a"}]"#),
            Err(FeedError::Decode(_))
        ));
    }

    #[test]
    fn test_photos_url_trims_trailing_slash() -> color_eyre::Result<()> {
        let config = Config {
            api_url: "http://127.0.0.1:9999/".to_string(),
            ..Config::default()
        };
        let client = UnsplashClient::new(&config)?;

        assert_eq!(client.photos_url(), "http://127.0.0.1:9999/photos");
        Ok(())
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FeedError::Status(401).to_string(), "unexpected HTTP status 401");
        assert_eq!(FeedError::Timeout.to_string(), "request timed out");
    }
}
