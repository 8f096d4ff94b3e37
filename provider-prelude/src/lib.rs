pub use async_trait;

mod error;
mod record;
mod settings;

pub use error::{ProviderError, ProviderErrorKind, ProviderErrorReason};
pub use record::TorrentRecord;
pub use settings::{ProviderSettings, ProviderType, SmartSearchFilter};

#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
pub struct SearchOptions {
    pub query: String,
}

impl SearchOptions {
    pub fn new<S: Into<String>>(query: S) -> Self {
        Self {
            query: query.into(),
        }
    }
}

#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SmartSearchOptions {
    pub query: String,
    pub batch: bool,
    pub episode_number: Option<u32>,
    pub resolution: String,
    pub best_releases: bool,
}

pub trait ProviderBuilder: std::fmt::Debug {
    fn build(self, name: String) -> Box<dyn Provider + Send + Sync + 'static>;
}

#[async_trait::async_trait]
pub trait Provider: std::fmt::Debug {
    fn settings(&self) -> ProviderSettings;
    /// Fails when the page could not be fetched.
    async fn search(&self, options: &SearchOptions) -> Result<Vec<TorrentRecord>, ProviderError>;
    /// Empty when the page could not be fetched.
    async fn latest(&self) -> Vec<TorrentRecord>;
    async fn smart_search(&self, options: &SmartSearchOptions) -> Vec<TorrentRecord>;
    /// Empty when no magnet link could be built.
    async fn torrent_magnet_link(&self, torrent: &TorrentRecord) -> String;
}

/// Converts the content of a `.torrent` file into a magnet link.
pub trait MagnetConverter: std::fmt::Debug + Send + Sync {
    fn magnet_link(&self, data: &[u8]) -> Option<String>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BencodeMagnetConverter;

impl MagnetConverter for BencodeMagnetConverter {
    fn magnet_link(&self, data: &[u8]) -> Option<String> {
        tansaku_provider_helper::torrent::magnet_from_torrent(data)
    }
}
