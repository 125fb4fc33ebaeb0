use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_bytes::ByteBuf;
use serde_bencode::value::Value as RawValue;
use sha1::{Digest, Sha1};

use super::file::{FileEntry, TorrentFile, lossy_text};

/// Info dictionary as stored in the metainfo file
#[derive(Debug, Deserialize)]
struct Info {
    name: ByteBuf,

    #[serde(rename = "piece length")]
    piece_length: u64,

    pieces: ByteBuf,

    // Single-file mode
    length: Option<u64>,

    // Multi-file mode
    files: Option<Vec<FileEntry>>,
}

/// Top-level metainfo dictionary
///
/// Text fields stay raw bytes here: legacy torrents often carry names in
/// the codepage named by `encoding` rather than UTF-8.
#[derive(Debug, Deserialize)]
struct MetaInfo {
    announce: Option<ByteBuf>,

    #[serde(rename = "announce-list")]
    announce_list: Option<Vec<Vec<ByteBuf>>>,

    comment: Option<ByteBuf>,

    #[serde(rename = "created by")]
    created_by: Option<ByteBuf>,

    #[serde(rename = "creation date")]
    creation_date: Option<i64>,

    encoding: Option<ByteBuf>,

    info: Info,
}

/// Decoded torrent metadata, flattened for display
///
/// Text that is not valid UTF-8 is kept with replacement characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TorrentMetadata {
    pub name: String,
    pub comment: String,
    pub announce_url: String,
    pub created_by: String,
    pub creation_date: Option<DateTime<Utc>>,
    pub encoding: Option<String>,
    pub files: Vec<TorrentFile>,
    pub piece_length: u64,
    /// Concatenated 20-byte SHA1 piece hashes
    pub pieces: Vec<u8>,
    /// SHA1 of the bencoded info dictionary
    pub info_hash: [u8; 20],
}

impl TorrentMetadata {
    /// Decode a `.torrent` file's contents
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let meta: MetaInfo = serde_bencode::from_bytes(bytes)
            .context("Failed to parse torrent file. Is it a valid bencoded file?")?;
        let info_hash = compute_info_hash(bytes)?;

        let info = meta.info;
        let name = lossy_text(info.name);
        let files = match (info.files, info.length) {
            (Some(entries), _) => entries.into_iter().map(TorrentFile::from).collect(),
            (None, Some(length)) => vec![TorrentFile::new(name.clone(), length)],
            (None, None) => {
                return Err(anyhow!(
                    "Invalid torrent info: missing both 'length' and 'files'"
                ));
            }
        };

        let announce_url = meta
            .announce
            .or_else(|| {
                meta.announce_list
                    .into_iter()
                    .flatten()
                    .find_map(|tier| tier.into_iter().next())
            })
            .map(lossy_text)
            .unwrap_or_default();

        Ok(Self {
            name,
            comment: meta.comment.map(lossy_text).unwrap_or_default(),
            announce_url,
            created_by: meta.created_by.map(lossy_text).unwrap_or_default(),
            creation_date: meta
                .creation_date
                .and_then(|secs| DateTime::from_timestamp(secs, 0)),
            encoding: meta.encoding.filter(|e| !e.is_empty()).map(lossy_text),
            files,
            piece_length: info.piece_length,
            pieces: info.pieces.into_vec(),
            info_hash,
        })
    }

    /// Sum of all file lengths
    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.length).sum()
    }

    pub fn info_hash_hex(&self) -> String {
        hex::encode(self.info_hash)
    }
}

/// Hash the canonical encoding of the `info` dictionary
fn compute_info_hash(bytes: &[u8]) -> Result<[u8; 20]> {
    let root: RawValue =
        serde_bencode::from_bytes(bytes).context("Failed to parse bencoded data")?;
    let info = match &root {
        RawValue::Dict(map) => map.get(b"info".as_slice()),
        _ => None,
    }
    .ok_or_else(|| anyhow!("Torrent file has no 'info' dictionary"))?;

    // The encoder writes dictionary keys in sorted order
    let encoded = serde_bencode::to_bytes(info).context("Failed to encode info dictionary")?;

    let mut hash = [0u8; 20];
    hash.copy_from_slice(&Sha1::digest(&encoded));
    Ok(hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn dict(entries: Vec<(&str, RawValue)>) -> RawValue {
        RawValue::Dict(
            entries
                .into_iter()
                .map(|(k, v)| (k.as_bytes().to_vec(), v))
                .collect::<HashMap<_, _>>(),
        )
    }

    fn text(s: &str) -> RawValue {
        RawValue::Bytes(s.as_bytes().to_vec())
    }

    fn single_file_info() -> RawValue {
        dict(vec![
            ("name", text("movie.mkv")),
            ("piece length", RawValue::Int(16384)),
            ("pieces", RawValue::Bytes(vec![0xab; 40])),
            ("length", RawValue::Int(30000)),
        ])
    }

    #[test]
    fn test_single_file_torrent() {
        let info = single_file_info();
        let info_bytes = serde_bencode::to_bytes(&info).unwrap();
        let root = dict(vec![
            ("announce", text("http://tracker.example/announce")),
            ("comment", text("hello")),
            ("created by", text("torrinfo tests")),
            ("creation date", RawValue::Int(1_500_000_000)),
            ("info", info),
        ]);
        let bytes = serde_bencode::to_bytes(&root).unwrap();

        let meta = TorrentMetadata::from_bytes(&bytes).unwrap();

        assert_eq!(meta.name, "movie.mkv");
        assert_eq!(meta.comment, "hello");
        assert_eq!(meta.announce_url, "http://tracker.example/announce");
        assert_eq!(meta.created_by, "torrinfo tests");
        assert_eq!(
            meta.creation_date.unwrap().to_string(),
            "2017-07-14 02:40:00 UTC"
        );
        assert_eq!(meta.encoding, None);
        assert_eq!(meta.files, vec![TorrentFile::new("movie.mkv", 30000)]);
        assert_eq!(meta.total_size(), 30000);
        assert_eq!(meta.piece_length, 16384);
        assert_eq!(meta.pieces.len(), 40);

        let expected: [u8; 20] = Sha1::digest(&info_bytes).as_slice().try_into().unwrap();
        assert_eq!(meta.info_hash, expected);
        assert_eq!(meta.info_hash_hex(), hex::encode(expected));
        assert_eq!(meta.info_hash_hex().len(), 40);
    }

    #[test]
    fn test_multi_file_torrent() {
        let file = |len: i64, parts: &[&str]| {
            dict(vec![
                ("length", RawValue::Int(len)),
                ("path", RawValue::List(parts.iter().map(|p| text(p)).collect())),
            ])
        };
        let root = dict(vec![
            (
                "announce-list",
                RawValue::List(vec![
                    RawValue::List(vec![]),
                    RawValue::List(vec![text("udp://backup.example:80")]),
                ]),
            ),
            ("encoding", text("UTF-8")),
            (
                "info",
                dict(vec![
                    ("name", text("album")),
                    ("piece length", RawValue::Int(262144)),
                    ("pieces", RawValue::Bytes(vec![0; 20])),
                    (
                        "files",
                        RawValue::List(vec![file(500, &["a.txt"]), file(2048, &["disc 1", "b.bin"])]),
                    ),
                ]),
            ),
        ]);
        let bytes = serde_bencode::to_bytes(&root).unwrap();

        let meta = TorrentMetadata::from_bytes(&bytes).unwrap();

        assert_eq!(meta.announce_url, "udp://backup.example:80");
        assert_eq!(meta.encoding.as_deref(), Some("UTF-8"));
        assert_eq!(meta.comment, "");
        assert_eq!(meta.created_by, "");
        assert!(meta.creation_date.is_none());
        assert_eq!(
            meta.files,
            vec![TorrentFile::new("a.txt", 500), TorrentFile::new("disc 1/b.bin", 2048)]
        );
        assert_eq!(meta.total_size(), 2548);
    }

    #[test]
    fn test_info_hash_covers_unknown_keys() {
        let with_private = dict(vec![
            ("name", text("movie.mkv")),
            ("piece length", RawValue::Int(16384)),
            ("pieces", RawValue::Bytes(vec![0xab; 40])),
            ("length", RawValue::Int(30000)),
            ("private", RawValue::Int(1)),
        ]);
        let info_bytes = serde_bencode::to_bytes(&with_private).unwrap();
        let bytes = serde_bencode::to_bytes(&dict(vec![("info", with_private)])).unwrap();
        let public = serde_bencode::to_bytes(&dict(vec![("info", single_file_info())])).unwrap();

        let private_meta = TorrentMetadata::from_bytes(&bytes).unwrap();
        let public_meta = TorrentMetadata::from_bytes(&public).unwrap();

        let expected: [u8; 20] = Sha1::digest(&info_bytes).as_slice().try_into().unwrap();
        assert_eq!(private_meta.info_hash, expected);
        assert_ne!(private_meta.info_hash, public_meta.info_hash);
    }

    #[test]
    fn test_missing_length_and_files() {
        let root = dict(vec![(
            "info",
            dict(vec![
                ("name", text("broken")),
                ("piece length", RawValue::Int(16384)),
                ("pieces", RawValue::Bytes(vec![])),
            ]),
        )]);
        let bytes = serde_bencode::to_bytes(&root).unwrap();
        assert!(TorrentMetadata::from_bytes(&bytes).is_err());
    }

    #[test]
    fn test_non_utf8_text_is_kept() {
        // GBK-encoded name, as written by older Chinese clients
        let root = dict(vec![
            ("encoding", text("GBK")),
            (
                "info",
                dict(vec![
                    ("name", RawValue::Bytes(vec![0xc4, 0xe3])),
                    ("piece length", RawValue::Int(16384)),
                    ("pieces", RawValue::Bytes(vec![0; 20])),
                    (
                        "files",
                        RawValue::List(vec![dict(vec![
                            ("length", RawValue::Int(10)),
                            (
                                "path",
                                RawValue::List(vec![text("dir"), RawValue::Bytes(vec![0xff, b'a'])]),
                            ),
                        ])]),
                    ),
                ]),
            ),
        ]);
        let bytes = serde_bencode::to_bytes(&root).unwrap();

        let meta = TorrentMetadata::from_bytes(&bytes).unwrap();

        assert_eq!(meta.name, "\u{fffd}\u{fffd}");
        assert_eq!(meta.files, vec![TorrentFile::new("dir/\u{fffd}a", 10)]);
        assert_eq!(meta.encoding.as_deref(), Some("GBK"));
    }

    #[test]
    fn test_empty_encoding_is_dropped() {
        let root = dict(vec![("encoding", text("")), ("info", single_file_info())]);
        let bytes = serde_bencode::to_bytes(&root).unwrap();

        let meta = TorrentMetadata::from_bytes(&bytes).unwrap();

        assert_eq!(meta.encoding, None);
    }

    #[test]
    fn test_not_a_torrent() {
        assert!(TorrentMetadata::from_bytes(b"not bencode").is_err());
        assert!(TorrentMetadata::from_bytes(b"d4:spam4:eggse").is_err());
    }
}
