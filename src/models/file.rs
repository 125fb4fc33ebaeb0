use serde::Deserialize;
use serde_bytes::ByteBuf;

/// A file described by the torrent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TorrentFile {
    /// Path relative to the torrent root, components joined with `/`
    pub path: String,
    /// File size in bytes
    pub length: u64,
}

impl TorrentFile {
    pub fn new(path: impl Into<String>, length: u64) -> Self {
        Self {
            path: path.into(),
            length,
        }
    }
}

/// File entry in multi-file mode
#[derive(Debug, Deserialize)]
pub(crate) struct FileEntry {
    pub length: u64,
    pub path: Vec<ByteBuf>,
}

impl From<FileEntry> for TorrentFile {
    fn from(entry: FileEntry) -> Self {
        let parts: Vec<String> = entry.path.into_iter().map(lossy_text).collect();
        TorrentFile::new(parts.join("/"), entry.length)
    }
}

/// Decode a bencoded byte string for display, replacing invalid UTF-8
pub(crate) fn lossy_text(buf: ByteBuf) -> String {
    String::from_utf8(buf.into_vec())
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}
