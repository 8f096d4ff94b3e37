use crate::handler::SharedProvider;
use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use tansaku_provider_prelude::{ProviderSettings, SearchOptions, SmartSearchOptions, TorrentRecord};

pub async fn settings(State(provider): State<SharedProvider>) -> Json<ProviderSettings> {
    Json(provider.settings())
}

pub async fn search(
    State(provider): State<SharedProvider>,
    Query(options): Query<SearchOptions>,
) -> Result<Json<Vec<TorrentRecord>>, (StatusCode, String)> {
    match provider.search(&options).await {
        Ok(entries) => Ok(Json(entries)),
        Err(error) => {
            tracing::debug!("search {:?} failed: {error}", options.query);
            Err((StatusCode::BAD_GATEWAY, error.to_string()))
        }
    }
}

pub async fn latest(State(provider): State<SharedProvider>) -> Json<Vec<TorrentRecord>> {
    Json(provider.latest().await)
}

pub async fn smart_search(
    State(provider): State<SharedProvider>,
    Json(options): Json<SmartSearchOptions>,
) -> Json<Vec<TorrentRecord>> {
    Json(provider.smart_search(&options).await)
}

pub async fn magnet(
    State(provider): State<SharedProvider>,
    Json(record): Json<TorrentRecord>,
) -> Json<TorrentRecord> {
    let magnet_link = provider.torrent_magnet_link(&record).await;
    Json(record.with_magnet_link(magnet_link))
}

#[cfg(test)]
mod tests {
    use crate::handler::router;
    use axum::http::{Request, StatusCode};
    use hyper::Body;
    use std::sync::Arc;
    use tansaku_provider_prelude::{
        Provider, ProviderError, ProviderErrorReason, ProviderSettings, ProviderType,
        SearchOptions, SmartSearchOptions, TorrentRecord,
    };
    use tower::ServiceExt;

    #[derive(Debug)]
    struct FakeProvider;

    fn entry(name: &str) -> TorrentRecord {
        TorrentRecord {
            name: name.to_string(),
            size: 734003200,
            formatted_size: "700 MB".into(),
            download_url: format!("https://acg.rip/t/{name}.torrent"),
            ..Default::default()
        }
    }

    #[async_trait::async_trait]
    impl Provider for FakeProvider {
        fn settings(&self) -> ProviderSettings {
            ProviderSettings {
                can_smart_search: false,
                smart_search_filters: Vec::new(),
                supports_adult: true,
                kind: ProviderType::Main,
            }
        }

        async fn search(
            &self,
            options: &SearchOptions,
        ) -> Result<Vec<TorrentRecord>, ProviderError> {
            if options.query == "broken" {
                return Err(ProviderError::new(
                    "fake",
                    ProviderErrorReason::InvalidStatus {
                        url: "https://acg.rip/?term=broken".into(),
                        status: 500,
                    },
                ));
            }
            Ok(vec![entry(&options.query)])
        }

        async fn latest(&self) -> Vec<TorrentRecord> {
            vec![entry("first"), entry("second")]
        }

        async fn smart_search(&self, _options: &SmartSearchOptions) -> Vec<TorrentRecord> {
            Vec::new()
        }

        async fn torrent_magnet_link(&self, torrent: &TorrentRecord) -> String {
            format!("magnet:?dn={}", torrent.name)
        }
    }

    async fn call(req: Request<Body>) -> (StatusCode, Vec<u8>) {
        let app = router(Arc::new(FakeProvider));
        let res = app.oneshot(req).await.unwrap();
        let status = res.status();
        let body = hyper::body::to_bytes(res.into_body()).await.unwrap();
        (status, body.to_vec())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn should_expose_settings() {
        let (status, body) = call(get("/api/settings")).await;
        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["canSmartSearch"], false);
        assert_eq!(value["supportsAdult"], true);
        assert_eq!(value["type"], "main");
    }

    #[tokio::test]
    async fn should_search() {
        let (status, body) = call(get("/api/search?query=frieren")).await;
        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value[0]["name"], "frieren");
        assert_eq!(value[0]["size"], 734003200);
        assert_eq!(value[0]["formattedSize"], "700 MB");
    }

    #[tokio::test]
    async fn should_report_search_failure() {
        let (status, body) = call(get("/api/search?query=broken")).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(String::from_utf8_lossy(&body).contains("status: 500"));
    }

    #[tokio::test]
    async fn should_list_latest() {
        let (status, body) = call(get("/api/latest")).await;
        assert_eq!(status, StatusCode::OK);
        let value: Vec<TorrentRecord> = serde_json::from_slice(&body).unwrap();
        assert_eq!(value.len(), 2);
        assert_eq!(value[0].name, "first");
        assert_eq!(value[1].name, "second");
    }

    #[tokio::test]
    async fn should_not_smart_search() {
        let (status, body) = call(post(
            "/api/smart-search",
            serde_json::json!({ "query": "frieren", "batch": true }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        let value: Vec<TorrentRecord> = serde_json::from_slice(&body).unwrap();
        assert!(value.is_empty());
    }

    #[tokio::test]
    async fn should_fill_magnet_link() {
        let (status, body) = call(post(
            "/api/magnet",
            serde_json::json!({ "name": "frieren", "downloadUrl": "https://acg.rip/t/1.torrent" }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        let value: TorrentRecord = serde_json::from_slice(&body).unwrap();
        assert_eq!(value.magnet_link, "magnet:?dn=frieren");
        assert_eq!(value.download_url, "https://acg.rip/t/1.torrent");
    }
}
