#![allow(dead_code)]

use serde_bencode::value::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub fn dict(entries: Vec<(&str, Value)>) -> Value {
    Value::Dict(
        entries
            .into_iter()
            .map(|(k, v)| (k.as_bytes().to_vec(), v))
            .collect::<HashMap<_, _>>(),
    )
}

pub fn text(s: &str) -> Value {
    Value::Bytes(s.as_bytes().to_vec())
}

pub fn file_entry(length: i64, path: &[&str]) -> Value {
    dict(vec![
        ("length", Value::Int(length)),
        ("path", Value::List(path.iter().map(|p| text(p)).collect())),
    ])
}

/// Info dictionary with two files, 16 KiB pieces and a 40-byte hash blob
pub fn two_file_info() -> Value {
    dict(vec![
        ("name", text("sample")),
        ("piece length", Value::Int(16384)),
        ("pieces", Value::Bytes(vec![0x5a; 40])),
        (
            "files",
            Value::List(vec![file_entry(500, &["a.txt"]), file_entry(2048, &["b.bin"])]),
        ),
    ])
}

pub fn two_file_torrent() -> Vec<u8> {
    let root = dict(vec![
        ("announce", text("http://tracker.example/announce")),
        ("comment", text("test torrent")),
        ("created by", text("torrinfo tests")),
        ("creation date", Value::Int(1_500_000_000)),
        ("info", two_file_info()),
    ]);
    serde_bencode::to_bytes(&root).unwrap()
}

pub fn write_torrent(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}
