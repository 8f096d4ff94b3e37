/// One torrent listing, shaped the way hosts consume it.
///
/// Sites that do not expose `seeders`, `leechers`, `download_count`,
/// `info_hash`, `is_batch`, `episode_number`, `is_best_release` or `confirmed`
/// leave the default placeholders in place.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TorrentRecord {
    pub name: String,
    /// RFC 3339 instant, empty when unknown.
    pub date: String,
    /// Bytes, `0` when the displayed size could not be understood.
    pub size: u64,
    pub formatted_size: String,
    pub seeders: u32,
    pub leechers: u32,
    pub download_count: u32,
    pub link: String,
    pub download_url: String,
    pub release_group: String,
    pub magnet_link: String,
    pub info_hash: String,
    pub resolution: String,
    pub is_batch: bool,
    pub episode_number: i32,
    pub is_best_release: bool,
    pub confirmed: bool,
}

impl Default for TorrentRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            date: String::new(),
            size: 0,
            formatted_size: String::new(),
            seeders: 0,
            leechers: 0,
            download_count: 0,
            link: String::new(),
            download_url: String::new(),
            release_group: String::new(),
            magnet_link: String::new(),
            info_hash: String::new(),
            resolution: String::new(),
            is_batch: false,
            episode_number: -1,
            is_best_release: false,
            confirmed: false,
        }
    }
}

impl TorrentRecord {
    pub fn with_magnet_link(mut self, magnet_link: String) -> Self {
        self.magnet_link = magnet_link;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::TorrentRecord;

    #[test]
    fn should_default_to_placeholders() {
        let record = TorrentRecord::default();
        assert_eq!(record.episode_number, -1);
        assert_eq!(record.seeders, 0);
        assert!(record.magnet_link.is_empty());
        assert!(!record.is_batch);
    }

    #[test]
    fn should_use_host_keys() {
        let record = TorrentRecord {
            name: "Show - 01".into(),
            size: 1024,
            formatted_size: "1 KB".into(),
            download_url: "https://acg.rip/t/1.torrent".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["formattedSize"], "1 KB");
        assert_eq!(value["downloadUrl"], "https://acg.rip/t/1.torrent");
        assert_eq!(value["episodeNumber"], -1);
        assert_eq!(value["isBestRelease"], false);

        let parsed: TorrentRecord =
            serde_json::from_value(serde_json::json!({ "name": "Show - 01" })).unwrap();
        assert_eq!(parsed.name, "Show - 01");
        assert_eq!(parsed.episode_number, -1);
    }
}
