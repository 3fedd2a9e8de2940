// Infrastructure implementations for callscan.

use std::path::Path;

use crate::domain::source::ParsedFile;
use crate::error::ParseError;
use crate::ports::SourceParser;

pub mod logging;
pub mod source_walker;

pub use source_walker::SourceWalker;

/// Parses Rust sources with `syn`.
pub struct SynAstParser;

impl SourceParser for SynAstParser {
    fn extension(&self) -> &str {
        "rs"
    }

    fn parse(&self, path: &Path, source: &str) -> Result<ParsedFile, ParseError> {
        match syn::parse_file(source) {
            Ok(ast) => Ok(ParsedFile::new(path, ast)),
            Err(err) => {
                let start = err.span().start();
                Err(ParseError::Syntax {
                    path: path.to_path_buf(),
                    line: start.line,
                    column: start.column,
                    message: err.to_string(),
                    more: err.into_iter().count().saturating_sub(1),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_source() {
        let parsed = SynAstParser
            .parse(Path::new("ok.rs"), "fn main() {}\n")
            .unwrap();
        assert_eq!(parsed.path(), Path::new("ok.rs"));
        assert_eq!(parsed.ast().items.len(), 1);
    }

    #[test]
    fn test_parse_error_names_file_and_line() {
        let err = SynAstParser
            .parse(Path::new("bad.rs"), "fn ok() {}\nstruct 42;\n")
            .err()
            .unwrap();
        match &err {
            ParseError::Syntax { path, line, .. } => {
                assert_eq!(path, Path::new("bad.rs"));
                assert_eq!(*line, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().starts_with("Error parsing bad.rs:2:"));
    }

    #[test]
    fn test_extension_is_rs() {
        assert_eq!(SynAstParser.extension(), "rs");
    }
}
