use std::path::{Path, PathBuf};

use proc_macro2::Span;
use syn::spanned::Spanned;

use crate::domain::index::Location;

/// A successfully parsed source file.
///
/// Owns the syntax tree and resolves any node of it back to `file:line`.
/// Line numbers come from `proc-macro2` span locations, which are relative to
/// the start of this file.
pub struct ParsedFile {
    path: PathBuf,
    ast: syn::File,
}

impl ParsedFile {
    pub fn new(path: impl Into<PathBuf>, ast: syn::File) -> Self {
        Self {
            path: path.into(),
            ast,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn ast(&self) -> &syn::File {
        &self.ast
    }

    /// Location of the first token of `node`.
    pub fn locate<T: Spanned + ?Sized>(&self, node: &T) -> Location {
        self.location_at(node.span())
    }

    pub fn location_at(&self, span: Span) -> Location {
        Location::new(self.path.clone(), span.start().line)
    }
}
