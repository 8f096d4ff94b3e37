#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    Main,
    Special,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SmartSearchFilter {
    Batch,
    EpisodeNumber,
    Resolution,
    Query,
    BestReleases,
}

/// Static capabilities a provider declares to its host.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSettings {
    pub can_smart_search: bool,
    pub smart_search_filters: Vec<SmartSearchFilter>,
    pub supports_adult: bool,
    #[serde(rename = "type")]
    pub kind: ProviderType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_like_host() {
        let settings = ProviderSettings {
            can_smart_search: false,
            smart_search_filters: Vec::new(),
            supports_adult: true,
            kind: ProviderType::Main,
        };
        assert_eq!(
            serde_json::to_value(&settings).unwrap(),
            serde_json::json!({
                "canSmartSearch": false,
                "smartSearchFilters": [],
                "supportsAdult": true,
                "type": "main",
            })
        );
    }

    #[test]
    fn should_read_host_filters() {
        let settings: ProviderSettings = serde_json::from_value(serde_json::json!({
            "canSmartSearch": true,
            "smartSearchFilters": ["batch", "episodeNumber", "resolution", "query", "bestReleases"],
            "supportsAdult": false,
            "type": "special",
        }))
        .unwrap();
        assert_eq!(settings.kind, ProviderType::Special);
        assert_eq!(
            settings.smart_search_filters,
            vec![
                SmartSearchFilter::Batch,
                SmartSearchFilter::EpisodeNumber,
                SmartSearchFilter::Resolution,
                SmartSearchFilter::Query,
                SmartSearchFilter::BestReleases,
            ]
        );
        assert_eq!(
            serde_json::to_value(&settings).unwrap()["smartSearchFilters"][1],
            "episodeNumber"
        );
    }
}
