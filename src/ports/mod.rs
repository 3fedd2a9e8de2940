use std::io::Write;
use std::path::Path;

use crate::domain::index::ProjectIndex;
use crate::domain::source::ParsedFile;
use crate::error::ParseError;

pub mod text_exporter;

pub trait SourceParser {
    /// File extension (without the dot) of the sources this parser accepts.
    fn extension(&self) -> &str;

    fn parse(&self, path: &Path, source: &str) -> Result<ParsedFile, ParseError>;
}

pub trait OutputExporter {
    fn export(&self, index: &ProjectIndex, out: &mut dyn Write) -> std::io::Result<()>;
}
