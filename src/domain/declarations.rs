//! Declaration indexing for a single parsed file.
//!
//! Walks the whole tree, files every declaration into its namespace and
//! hands each function body to the [`CallGraphBuilder`].

use crate::domain::ast::{self, AstNode, Mutability};
use crate::domain::callgraph::CallGraphBuilder;
use crate::domain::index::{Namespace, ProjectIndex};
use crate::domain::source::ParsedFile;

/// Index one file into a fresh shard.
///
/// Declarations at any depth are recorded (modules, impl and trait blocks,
/// items and `let` bindings inside function bodies). A name seen twice in the same namespace
/// keeps the location visited last.
pub fn index_file(file: &ParsedFile) -> ProjectIndex {
    let mut index = ProjectIndex::new();

    ast::inspect(file.ast(), |node| match node {
        AstNode::Function(func) => {
            let name = func.ident.to_string();
            index
                .symbols
                .insert(Namespace::Function, name.clone(), file.locate(func.ident));
            if let Some(body) = func.body {
                CallGraphBuilder::new(file, &name, &mut index.calls).collect(body);
            }
        }
        AstNode::Value(value) => {
            for binding in value.bindings {
                let ns = match binding.mutability {
                    Mutability::Mutable => Namespace::Variable,
                    Mutability::Immutable => Namespace::Constant,
                };
                index
                    .symbols
                    .insert(ns, binding.ident.to_string(), file.locate(binding.ident));
            }
        }
        AstNode::Type(ty) => {
            index
                .symbols
                .insert(Namespace::Type, ty.ident.to_string(), file.locate(ty.ident));
        }
        // Calls are collected per function body, where the caller is known.
        AstNode::Call(_) | AstNode::Other => {}
    });

    tracing::debug!(
        "Indexed {}: {} declarations, {} call edges",
        file.path().display(),
        index.symbols.total_len(),
        index.calls.len()
    );

    index
}
