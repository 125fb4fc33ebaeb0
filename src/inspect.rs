use anyhow::{Context, Result};
use console::measure_text_width;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::cli::{InspectOptions, View};
use crate::config::{DisplayMode, INDENT_WIDTH, LABEL_COLUMN_WIDTH};
use crate::format::format_bytes;
use crate::models::{TorrentMetadata, Value};
use crate::render::ValueRenderer;
use crate::style::{LABEL, OPAQUE, Styler, Tag};

/// Read, decode and print a torrent file
pub fn inspect_torrent(options: &InspectOptions, styler: &Styler) -> Result<()> {
    let lines = report(options, styler)?;

    let mut out = io::stdout().lock();
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Build the full output for `options` without printing it
pub fn report(options: &InspectOptions, styler: &Styler) -> Result<Vec<String>> {
    let path = &options.torrent;
    let content = fs::read(path)
        .with_context(|| format!("Failed to read torrent file: {}", path.display()))?;
    log::debug!("read {} bytes from {}", content.len(), path.display());

    match options.view {
        View::Everything => {
            let value = Value::from_bytes(&content)?;
            Ok(ValueRenderer::new(styler).render(&value))
        }
        View::Summary(mode) => {
            let meta = TorrentMetadata::from_bytes(&content)?;
            log::debug!(
                "decoded {} file(s), info hash {}, mode {:?}",
                meta.files.len(),
                meta.info_hash_hex(),
                mode
            );

            let mut lines = vec![styler.style(&file_title(path), &[Tag::Bright])];
            lines.extend(SummaryView::new(styler).render(&meta, mode));
            Ok(lines)
        }
    }
}

fn file_title(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Human-readable view of decoded torrent metadata
pub struct SummaryView<'a> {
    styler: &'a Styler,
}

impl<'a> SummaryView<'a> {
    pub fn new(styler: &'a Styler) -> Self {
        Self { styler }
    }

    pub fn render(&self, meta: &TorrentMetadata, mode: DisplayMode) -> Vec<String> {
        let mut lines = Vec::new();
        match mode {
            DisplayMode::Compact => self.push_fields(&mut lines, meta),
            DisplayMode::FilesOnly => self.push_files(&mut lines, meta),
            DisplayMode::Detailed => {
                self.push_files(&mut lines, meta);
                self.push_pieces(&mut lines, meta);
            }
        }
        lines
    }

    fn push_fields(&self, out: &mut Vec<String>, meta: &TorrentMetadata) {
        let created_on = meta
            .creation_date
            .map(|date| self.styler.style(&date.to_string(), &[Tag::Magenta]))
            .unwrap_or_default();

        self.push_field(out, "name", &meta.name);
        self.push_field(out, "comment", &meta.comment);
        self.push_field(out, "announce url", &meta.announce_url);
        self.push_field(out, "created by", &meta.created_by);
        self.push_field(out, "created on", &created_on);
        if let Some(encoding) = &meta.encoding {
            self.push_field(out, "encoding", encoding);
        }
        self.push_field(out, "num files", &meta.files.len().to_string());
        self.push_field(
            out,
            "total size",
            &self.styler.style(&format_bytes(meta.total_size()), &[Tag::Cyan]),
        );
        self.push_field(out, "info hash", &meta.info_hash_hex());
    }

    /// A label padded to the value column, measured without escape codes
    fn push_field(&self, out: &mut Vec<String>, label: &str, value: &str) {
        let label = format!("{}{}", indent(1), self.styler.style(label, LABEL));
        let padding = LABEL_COLUMN_WIDTH.saturating_sub(measure_text_width(&label));
        out.push(format!("{}{}{}", label, " ".repeat(padding), value));
    }

    fn push_files(&self, out: &mut Vec<String>, meta: &TorrentMetadata) {
        self.push_label(out, 1, "files");
        for (i, file) in meta.files.iter().enumerate() {
            self.push_label(out, 2, &i.to_string());
            self.push_label(out, 3, "path");
            out.push(format!("{}{}", indent(4), file.path));
            self.push_label(out, 3, "length");
            out.push(format!(
                "{}{}",
                indent(4),
                self.styler.style(&format_bytes(file.length), &[Tag::Cyan])
            ));
        }
    }

    fn push_pieces(&self, out: &mut Vec<String>, meta: &TorrentMetadata) {
        self.push_label(out, 1, "piece length");
        out.push(format!(
            "{}{}",
            indent(3),
            self.styler.style(&format_bytes(meta.piece_length), &[Tag::Cyan])
        ));

        // Raw byte length of the hash blob, not the number of pieces
        self.push_label(out, 1, "pieces");
        let summary = format!("[{} UTF-8 Bytes]", meta.pieces.len());
        out.push(format!("{}{}", indent(3), self.styler.style(&summary, OPAQUE)));
    }

    fn push_label(&self, out: &mut Vec<String>, depth: usize, label: &str) {
        out.push(format!("{}{}", indent(depth), self.styler.style(label, LABEL)));
    }
}

fn indent(depth: usize) -> String {
    " ".repeat(depth * INDENT_WIDTH)
}
