//! Resolution of a split's source path into the concrete files it matches.

use anyhow::{bail, Context, Result};
use candle_hf_hub::api::sync::Api;
use candle_hf_hub::{Repo, RepoType};
use glob::{MatchOptions, Pattern};
use log::debug;

const HF_DATASETS_PREFIX: &str = "hf://datasets/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Files of a Hugging Face dataset repository, `hf://datasets/<owner>/<name>[@rev]/<glob>`.
    HuggingFace {
        repo: String,
        revision: Option<String>,
        pattern: String,
    },
    /// Local file or glob.
    Local(String),
}

impl Source {
    pub fn parse(path: &str) -> Result<Self> {
        let Some(rest) = path.strip_prefix(HF_DATASETS_PREFIX) else {
            if let Some((scheme, _)) = path.split_once("://") {
                bail!("unsupported source scheme '{scheme}://' in '{path}', expected '{HF_DATASETS_PREFIX}' or a local path");
            }
            return Ok(Source::Local(String::from(path)));
        };

        let parts: Vec<&str> = rest.splitn(3, '/').collect();
        if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
            bail!("Hugging Face path must look like 'hf://datasets/<owner>/<name>/<pattern>', got '{path}'");
        }
        let (owner, name, pattern) = (parts[0], parts[1], parts[2]);
        let (name, revision) = match name.split_once('@') {
            Some((name, rev)) => (name, Some(String::from(rev))),
            None => (name, None),
        };

        Ok(Source::HuggingFace {
            repo: format!("{owner}/{name}"),
            revision,
            pattern: String::from(pattern),
        })
    }

    /// List the files this source matches. An empty list is not an error here.
    pub fn resolve(&self) -> Result<Vec<String>> {
        let files = match self {
            Source::HuggingFace {
                repo,
                revision,
                pattern,
            } => {
                let api = Api::new()?;
                let repo_ref = match revision {
                    Some(rev) => Repo::with_revision(repo.clone(), RepoType::Dataset, rev.clone()),
                    None => Repo::new(repo.clone(), RepoType::Dataset),
                };
                let info = api
                    .repo(repo_ref)
                    .info()
                    .with_context(|| format!("Failed to list files of dataset {repo}"))?;
                let filenames: Vec<String> =
                    info.siblings.into_iter().map(|s| s.rfilename).collect();
                filter_matching(pattern, filenames)?
            }
            Source::Local(pattern) => glob::glob(pattern)?
                .map(|entry| entry.map(|path| path.display().to_string()))
                .collect::<std::result::Result<Vec<_>, _>>()?,
        };

        for file in &files {
            debug!("{} matched {file}", self.display_name());
        }
        Ok(files)
    }

    pub fn display_name(&self) -> String {
        match self {
            Source::HuggingFace {
                repo,
                revision: Some(rev),
                pattern,
            } => format!("{HF_DATASETS_PREFIX}{repo}@{rev}/{pattern}"),
            Source::HuggingFace { repo, pattern, .. } => {
                format!("{HF_DATASETS_PREFIX}{repo}/{pattern}")
            }
            Source::Local(pattern) => pattern.clone(),
        }
    }
}

/// Keep the repository-relative filenames matching `pattern`.
///
/// `*` stays within one path component, `**/` spans any number of them.
pub fn filter_matching(pattern: &str, filenames: Vec<String>) -> Result<Vec<String>> {
    let pattern = Pattern::new(pattern)?;
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };
    Ok(filenames
        .into_iter()
        .filter(|name| pattern.matches_with(name, options))
        .collect())
}
