use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::declarations::index_file;
use crate::domain::index::ProjectIndex;
use crate::error::{ParseError, WalkError};
use crate::infrastructure::SourceWalker;
use crate::ports::{OutputExporter, SourceParser};

pub struct AnalyzeUsecase<'a> {
    pub parser: &'a dyn SourceParser,
    pub exporter: &'a dyn OutputExporter,
}

impl<'a> AnalyzeUsecase<'a> {
    /// Index `root`, then export. Nothing is written if the walk fails.
    pub fn run(&self, root: &Path, out: &mut dyn Write) -> Result<ProjectIndex> {
        let index = self.index(root)?;
        self.exporter
            .export(&index, out)
            .context("Failed to write index records")?;
        Ok(index)
    }

    /// Walk `root` one file at a time and build the run's index.
    ///
    /// Files that fail to read or parse are logged and skipped.
    pub fn index(&self, root: &Path) -> Result<ProjectIndex, WalkError> {
        let mut index = ProjectIndex::new();

        for path in SourceWalker::new(root, self.parser.extension()) {
            let path = path?;
            match self.index_path(&path) {
                Ok(shard) => {
                    index.merge(shard);
                    index.stats.files_parsed += 1;
                }
                Err(err) => {
                    tracing::warn!("{}", err);
                    index.stats.files_failed += 1;
                }
            }
        }

        tracing::info!(
            "Indexed {}: {} files parsed, {} failed, {} declarations, {} call edges",
            root.display(),
            index.stats.files_parsed,
            index.stats.files_failed,
            index.symbols.total_len(),
            index.calls.len()
        );

        Ok(index)
    }

    fn index_path(&self, path: &Path) -> Result<ProjectIndex, ParseError> {
        let source = fs::read_to_string(path).map_err(|source| ParseError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed = self.parser.parse(path, &source)?;
        Ok(index_file(&parsed))
    }
}
