//! Turns the content of a `.torrent` file into a magnet link.

use serde_bencode::value::Value;
use sha1::{Digest, Sha1};

#[derive(Debug, serde::Deserialize)]
struct Metainfo {
    info: Value,
    #[serde(default)]
    announce: Option<Value>,
    #[serde(default, rename = "announce-list")]
    announce_list: Option<Value>,
}

fn as_tracker(value: &Value) -> Option<&str> {
    match value {
        Value::Bytes(bytes) => std::str::from_utf8(bytes).ok(),
        _ => None,
    }
}

fn list_items(value: &Value) -> &[Value] {
    match value {
        Value::List(items) => items.as_slice(),
        _ => &[],
    }
}

impl Metainfo {
    fn name(&self) -> Option<String> {
        match &self.info {
            Value::Dict(entries) => match entries.get(b"name".as_slice()) {
                Some(Value::Bytes(name)) => Some(String::from_utf8_lossy(name).into_owned()),
                _ => None,
            },
            _ => None,
        }
    }

    fn trackers(&self) -> Vec<&str> {
        let mut trackers: Vec<&str> = Vec::new();
        let tiers = self
            .announce_list
            .iter()
            .flat_map(list_items)
            .flat_map(list_items);
        for tracker in self.announce.iter().chain(tiers).filter_map(as_tracker) {
            if !tracker.is_empty() && !trackers.contains(&tracker) {
                trackers.push(tracker);
            }
        }
        trackers
    }

    fn info_hash(&self) -> Result<String, serde_bencode::Error> {
        let info = serde_bencode::to_bytes(&self.info)?;
        let mut hasher = Sha1::new();
        hasher.update(&info);
        Ok(hex::encode(hasher.finalize()))
    }
}

/// Builds a `magnet:?xt=urn:btih:` link out of raw metainfo bytes.
///
/// Returns `None` when the data is not a valid torrent file.
pub fn magnet_from_torrent(data: &[u8]) -> Option<String> {
    let metainfo: Metainfo = match serde_bencode::from_bytes(data) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!("unable to decode torrent metainfo: {err:?}");
            return None;
        }
    };
    if !matches!(metainfo.info, Value::Dict(_)) {
        tracing::debug!("torrent metainfo has no info dictionary");
        return None;
    }
    let info_hash = match metainfo.info_hash() {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!("unable to encode torrent info: {err:?}");
            return None;
        }
    };

    let mut magnet = format!("magnet:?xt=urn:btih:{info_hash}");
    if let Some(name) = metainfo.name() {
        magnet.push_str("&dn=");
        magnet.push_str(&urlencoding::encode(&name));
    }
    for tracker in metainfo.trackers() {
        magnet.push_str("&tr=");
        magnet.push_str(&urlencoding::encode(tracker));
    }
    Some(magnet)
}
