use anyhow::Result;
use clap::Parser;

use torrinfo::cli::Args;
use torrinfo::{Config, Styler, inspect_torrent};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = Config::load()?;

    let options = args.into_options(&config);
    log::debug!("inspecting {} as {:?}", options.torrent.display(), options.view);

    let styler = Styler::new(options.colors);
    inspect_torrent(&options, &styler)
}
