use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::config::{Config, DisplayMode};

#[derive(Parser, Debug)]
#[command(
    name = "torrinfo",
    version,
    about = "A CLI utility to inspect BitTorrent metainfo files",
    author = "torrinfo contributors",
    disable_version_flag = true,
    arg_required_else_help = true
)]
pub struct Args {
    /// The .torrent file to inspect
    #[arg(value_name = "FILENAME")]
    pub torrent: PathBuf,

    /// Show files within the torrent
    #[arg(short = 'f', long = "files", conflicts_with_all = ["detailed", "everything"])]
    pub files: bool,

    /// Show detailed information about the files
    #[arg(short = 'd', long = "detailed", conflicts_with = "everything")]
    pub detailed: bool,

    /// Print everything about the torrent
    #[arg(short = 'e', long = "everything")]
    pub everything: bool,

    /// No ANSI colour
    #[arg(short = 'n', long = "nocolors")]
    pub nocolors: bool,

    /// Print version and quit
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,
}

/// What to print for the torrent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Summary of the decoded metadata
    Summary(DisplayMode),
    /// Raw dump of every bencoded value
    Everything,
}

/// Resolved settings for one inspection run
#[derive(Debug, Clone)]
pub struct InspectOptions {
    pub torrent: PathBuf,
    pub view: View,
    pub colors: bool,
}

impl Args {
    /// Merge CLI arguments over the loaded configuration
    pub fn into_options(self, config: &Config) -> InspectOptions {
        let view = if self.everything {
            View::Everything
        } else if self.detailed {
            View::Summary(DisplayMode::Detailed)
        } else if self.files {
            View::Summary(DisplayMode::FilesOnly)
        } else {
            View::Summary(config.mode)
        };

        let torrent = PathBuf::from(shellexpand::tilde(&self.torrent.to_string_lossy()).as_ref());

        InspectOptions {
            torrent,
            view,
            colors: config.colors && !self.nocolors,
        }
    }
}
