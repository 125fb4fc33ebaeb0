mod file;
mod torrent;
mod value;

pub use file::TorrentFile;
pub use torrent::TorrentMetadata;
pub use value::Value;
