//! Plain-text record exporter
//!
//! Writes one line per declaration (`name file:line`), grouped by namespace
//! in the order function, variable, constant, type, then one line per call
//! edge (`caller.callee file:line`). No header, no sorting.

use std::io::{Result, Write};

use crate::domain::index::{Namespace, ProjectIndex};
use crate::ports::OutputExporter;

pub struct TextExporter;

impl TextExporter {
    pub fn write_records<W: Write + ?Sized>(index: &ProjectIndex, out: &mut W) -> Result<()> {
        for ns in Namespace::ALL {
            for decl in index.symbols.declarations(ns) {
                writeln!(out, "{} {}", decl.name, decl.location)?;
            }
        }

        for edge in index.calls.edges() {
            writeln!(out, "{}.{} {}", edge.caller, edge.callee, edge.location)?;
        }

        Ok(())
    }
}

impl OutputExporter for TextExporter {
    fn export(&self, index: &ProjectIndex, out: &mut dyn Write) -> Result<()> {
        Self::write_records(index, out)?;
        out.flush()
    }
}
