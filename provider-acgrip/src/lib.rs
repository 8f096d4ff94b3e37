use std::sync::Arc;
use tansaku_provider_prelude::{
    BencodeMagnetConverter, MagnetConverter, Provider, ProviderBuilder, ProviderError,
    ProviderErrorReason, ProviderSettings, ProviderType, SearchOptions, SmartSearchOptions,
    TorrentRecord,
};

mod search;
mod torrent;

const BASE_URL: &str = "https://acg.rip";
pub const NAME: &str = "acgrip";

async fn fetch(url: &str) -> Result<reqwest::Response, ProviderError> {
    let res = reqwest::get(url).await.map_err(|err| {
        ProviderError::new(
            NAME,
            ProviderErrorReason::UnableToQuery {
                url: url.to_string(),
                cause: err.to_string(),
            },
        )
    })?;
    if !res.status().is_success() {
        return Err(ProviderError::new(
            NAME,
            ProviderErrorReason::InvalidStatus {
                url: url.to_string(),
                status: res.status().as_u16(),
            },
        ));
    }
    Ok(res)
}

async fn fetch_page(url: &str) -> Result<String, ProviderError> {
    fetch(url).await?.text().await.map_err(|err| {
        ProviderError::new(
            NAME,
            ProviderErrorReason::UnableToRead {
                url: url.to_string(),
                cause: err.to_string(),
            },
        )
    })
}

async fn fetch_file(url: &str) -> Result<Vec<u8>, ProviderError> {
    let body = fetch(url).await?.bytes().await.map_err(|err| {
        ProviderError::new(
            NAME,
            ProviderErrorReason::UnableToRead {
                url: url.to_string(),
                cause: err.to_string(),
            },
        )
    })?;
    Ok(body.to_vec())
}

// same output as a browser's encodeURIComponent
fn encode_component(input: &str) -> String {
    [("%21", "!"), ("%27", "'"), ("%28", "("), ("%29", ")"), ("%2A", "*")]
        .iter()
        .fold(urlencoding::encode(input).into_owned(), |acc, (from, to)| {
            acc.replace(from, to)
        })
}

#[derive(Debug, serde::Deserialize)]
pub struct ProviderAcgRipConfig {
    #[serde(default = "ProviderAcgRipConfig::default_base_url")]
    pub base_url: String,
}

impl Default for ProviderAcgRipConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
        }
    }
}

impl ProviderAcgRipConfig {
    fn default_base_url() -> String {
        BASE_URL.into()
    }
}

impl ProviderBuilder for ProviderAcgRipConfig {
    fn build(self, name: String) -> Box<dyn Provider + Send + Sync + 'static> {
        tracing::info!("building {NAME} provider named {name:?}");
        Box::new(ProviderAcgRip {
            name,
            base_url: self.base_url,
            converter: Arc::new(BencodeMagnetConverter),
        })
    }
}

#[derive(Debug)]
pub struct ProviderAcgRip {
    name: String,
    base_url: String,
    converter: Arc<dyn MagnetConverter>,
}

impl Default for ProviderAcgRip {
    fn default() -> Self {
        Self::new(BASE_URL)
    }
}

impl ProviderAcgRip {
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self {
            name: NAME.into(),
            base_url: base_url.into(),
            converter: Arc::new(BencodeMagnetConverter),
        }
    }

    pub fn with_converter<C: MagnetConverter + 'static>(mut self, converter: C) -> Self {
        self.converter = Arc::new(converter);
        self
    }

    fn search_url(&self, query: &str) -> String {
        format!("{}/?term={}", self.base_url, encode_component(query))
    }
}

#[async_trait::async_trait]
impl Provider for ProviderAcgRip {
    fn settings(&self) -> ProviderSettings {
        ProviderSettings {
            can_smart_search: false,
            smart_search_filters: Vec::new(),
            supports_adult: true,
            kind: ProviderType::Main,
        }
    }

    async fn search(&self, options: &SearchOptions) -> Result<Vec<TorrentRecord>, ProviderError> {
        tracing::debug!("{} searching {:?}", self.name, options.query);
        let html = fetch_page(&self.search_url(&options.query)).await?;
        Ok(search::parse(&self.base_url, html.as_str()))
    }

    async fn latest(&self) -> Vec<TorrentRecord> {
        tracing::debug!("{} fetching latest entries", self.name);
        match fetch_page(&self.base_url).await {
            Ok(html) => search::parse(&self.base_url, html.as_str()),
            Err(error) => {
                tracing::warn!("{} unable to fetch latest entries: {error}", self.name);
                Vec::new()
            }
        }
    }

    async fn smart_search(&self, _options: &SmartSearchOptions) -> Vec<TorrentRecord> {
        Vec::new()
    }

    async fn torrent_magnet_link(&self, torrent: &TorrentRecord) -> String {
        torrent::resolve_magnet(self.converter.as_ref(), &torrent.download_url).await
    }
}
