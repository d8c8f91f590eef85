use clap::builder::ValueParser;
use clap::{value_parser, Arg};
use log::info;
use std::path::PathBuf;
use sudoku_data::config::Config;
use sudoku_data::data::{download_all, SplitDownloader};
use sudoku_data::util::init_logging;

use polars::prelude::IdxSize;

fn main() -> anyhow::Result<()> {
    let multi = init_logging()?;
    let mut config = Config::default();

    let matches = clap::Command::new("download")
        .about("Download the Sudoku dataset splits into local parquet files")
        .bin_name("download")
        .styles(Default::default())
        .arg(
            Arg::new("output")
                .value_name("DIR")
                .help("Directory the split parquet files are written to")
                .short('o')
                .long("output")
                .default_value("data")
                .value_parser(ValueParser::path_buf()),
        )
        .arg(
            Arg::new("rows")
                .value_name("N")
                .help("Number of rows previewed from each written file")
                .short('n')
                .long("rows")
                .default_value("10")
                .value_parser(value_parser!(IdxSize)),
        )
        .get_matches();
    if let Some(output) = matches.get_one::<PathBuf>("output") {
        config.output_dir = output.clone();
    }
    if let Some(rows) = matches.get_one::<IdxSize>("rows") {
        config.preview_rows = *rows;
    }

    info!("Writing splits to {}", config.output_dir.display());
    let downloader = SplitDownloader::from_config(&config).with_progress(multi);
    download_all(&config, &downloader)?;

    Ok(())
}
