//! # torrinfo
//!
//! A library for inspecting BitTorrent metainfo files.
//!
//! It decodes `.torrent` files and renders either a summary of the metadata
//! (name, tracker, creation info, size, info hash and optional file listing)
//! or a complete dump of the bencoded value tree.
//!
//! ## Example
//!
//! ```no_run
//! use torrinfo::{DisplayMode, Styler, SummaryView, TorrentMetadata};
//!
//! let bytes = std::fs::read("ubuntu.torrent").unwrap();
//! let meta = TorrentMetadata::from_bytes(&bytes).unwrap();
//! let styler = Styler::new(false);
//! for line in SummaryView::new(&styler).render(&meta, DisplayMode::Detailed) {
//!     println!("{}", line);
//! }
//! ```

pub mod cli;
pub mod config;
pub mod format;
pub mod inspect;
pub mod models;
pub mod render;
pub mod style;

// Re-export main types for convenience
pub use config::{Config, DisplayMode};
pub use format::format_bytes;
pub use inspect::{SummaryView, inspect_torrent};
pub use models::{TorrentFile, TorrentMetadata, Value};
pub use render::ValueRenderer;
pub use style::{Styler, Tag};
