use std::path::{Path, PathBuf};

use anyhow::{bail, ensure};
use indicatif::MultiProgress;
use log::info;
use polars::prelude::*;

use crate::config::{self, Config};
use crate::source::Source;
use crate::util::spinner;

/// Streams the parquet files behind a split's source path into one local file.
pub struct SplitDownloader {
    pub output_dir: PathBuf,
    pub preview_rows: IdxSize,
    progress: Option<MultiProgress>,
}

impl SplitDownloader {
    pub fn new(output_dir: &Path, preview_rows: IdxSize) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            preview_rows,
            progress: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.output_dir, config.preview_rows)
    }

    pub fn with_progress(mut self, multi: MultiProgress) -> Self {
        self.progress = Some(multi);
        self
    }

    /// Copy every file matching `path` into `<output_dir>/<key>.parquet`, then print and return
    /// the first rows of the written file.
    ///
    /// The copy never holds the whole split in memory: the scan is lazy and the streaming
    /// engine writes batches as they are read. An existing output file is replaced.
    pub fn download_split(&self, path: &str, key: &str) -> anyhow::Result<DataFrame> {
        ensure!(!key.is_empty(), "split key must not be empty");
        info!("Downloading {key} split from {path}...");

        let source = Source::parse(path)?;
        let matched = source.resolve()?;
        if matched.is_empty() {
            bail!("no files match {}", source.display_name());
        }
        info!("{} file(s) match {}", matched.len(), source.display_name());

        std::fs::create_dir_all(&self.output_dir)?;
        let output_path = config::output_path(&self.output_dir, key);

        let bar = spinner(
            self.progress.as_ref(),
            key,
            format!("writing {}", output_path.display()),
        )?;
        let sunk = LazyFrame::scan_parquet(path, ScanArgsParquet::default()).and_then(|lf| {
            lf.sink_parquet(&output_path, ParquetWriteOptions::default())
        });
        bar.finish_and_clear();
        if let Some(multi) = &self.progress {
            multi.remove(&bar);
        }
        sunk?;
        info!("Downloaded {key}");

        let preview = self.preview(&output_path)?;
        println!("{preview}");
        Ok(preview)
    }

    /// First `preview_rows` rows of a parquet file, read back from disk.
    pub fn preview(&self, path: &Path) -> PolarsResult<DataFrame> {
        LazyFrame::scan_parquet(path, ScanArgsParquet::default())?
            .limit(self.preview_rows)
            .collect()
    }
}

/// Download every configured split in declaration order, stopping at the first failure.
///
/// Returns the written files in the order they were produced.
pub fn download_all(
    config: &Config,
    downloader: &SplitDownloader,
) -> anyhow::Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(config.splits.len());
    for split in &config.splits {
        info!("Loading {}...", split.name);
        let path = split.remote_path(&config.base_url);
        info!("Path: {path}");
        downloader.download_split(&path, &split.name)?;
        written.push(split.output_path(&downloader.output_dir));
        info!("Downloaded {}.", split.name);
    }

    info!("All datasets loaded and saved successfully.");
    Ok(written)
}
