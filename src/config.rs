use std::path::{Path, PathBuf};

use polars::prelude::IdxSize;

/// One named partition of the dataset and the glob selecting its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub name: String,
    pub pattern: String,
}

impl Split {
    pub fn new(name: &str, pattern: &str) -> Self {
        Self {
            name: String::from(name),
            pattern: String::from(pattern),
        }
    }

    /// Full source path: base location followed by the split's glob.
    pub fn remote_path(&self, base_url: &str) -> String {
        format!("{base_url}{}", self.pattern)
    }

    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        output_path(output_dir, &self.name)
    }
}

pub fn output_path(output_dir: &Path, key: &str) -> PathBuf {
    output_dir.join(format!("{key}.parquet"))
}

pub struct Config {
    pub base_url: String,
    pub splits: Vec<Split>,
    pub output_dir: PathBuf,
    pub preview_rows: IdxSize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: String::from("hf://datasets/Ritvik19/Sudoku-Dataset/"),
            // order matters, validation is fetched first
            splits: vec![
                Split::new("validation", "**/valid_*.parquet"),
                Split::new("train", "**/train_*.parquet"),
            ],
            output_dir: PathBuf::from("data"),
            preview_rows: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_split_order() {
        let config = Config::default();
        let names: Vec<&str> = config.splits.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["validation", "train"]);
        assert_eq!(config.preview_rows, 10);
    }

    #[test]
    fn test_remote_path_concatenates_base_and_pattern() {
        let config = Config::default();
        assert_eq!(
            config.splits[0].remote_path(&config.base_url),
            "hf://datasets/Ritvik19/Sudoku-Dataset/**/valid_*.parquet"
        );
        assert_eq!(
            config.splits[1].remote_path(&config.base_url),
            "hf://datasets/Ritvik19/Sudoku-Dataset/**/train_*.parquet"
        );
    }

    #[test]
    fn test_output_path_is_deterministic() {
        let split = Split::new("train", "**/train_*.parquet");
        let dir = Path::new("data");
        assert_eq!(split.output_path(dir), PathBuf::from("data/train.parquet"));
        assert_eq!(split.output_path(dir), split.output_path(dir));
        assert_eq!(output_path(dir, "train"), split.output_path(dir));
    }
}
