use tansaku_provider_prelude::MagnetConverter;

/// Downloads the `.torrent` file behind `url` and converts it.
///
/// Every failure is logged and turned into an empty string.
pub(crate) async fn resolve_magnet(converter: &dyn MagnetConverter, url: &str) -> String {
    let data = match crate::fetch_file(url).await {
        Ok(value) => value,
        Err(error) => {
            tracing::error!("failed to download torrent file: {error}");
            return String::new();
        }
    };
    match converter.magnet_link(&data) {
        Some(magnet) => magnet,
        None => {
            tracing::error!("unable to build magnet link from torrent file {url:?}");
            String::new()
        }
    }
}
