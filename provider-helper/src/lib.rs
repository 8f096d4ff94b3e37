#[cfg(feature = "size")]
pub mod size;
#[cfg(feature = "timestamp")]
pub mod timestamp;
#[cfg(feature = "title")]
pub mod title;
#[cfg(feature = "torrent")]
pub mod torrent;
