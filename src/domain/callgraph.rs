// Call graph for callscan.
// Edges are syntactic observations: one per call expression, keyed by callee.

use std::collections::HashMap;

use syn::visit::{self, Visit};
use syn::punctuated::Punctuated;
use syn::{Block, Expr, Item, Macro, Token};

use crate::domain::ast::{AstNode, CallExpr};
use crate::domain::index::Location;
use crate::domain::source::ParsedFile;

/// One observed call site.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallEdge {
    pub caller: String,
    pub callee: String,
    pub location: Location,
}

impl CallEdge {
    pub fn new(caller: impl Into<String>, callee: impl Into<String>, location: Location) -> Self {
        Self {
            caller: caller.into(),
            callee: callee.into(),
            location,
        }
    }
}

/// Callee name -> every edge observed for that callee, in visit order.
///
/// Not deduplicated: the same caller/callee pair is kept once per call site.
#[derive(Debug, Clone, Default)]
pub struct CallGraph {
    by_callee: HashMap<String, Vec<CallEdge>>,
}

impl CallGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_edge(&mut self, edge: CallEdge) {
        self.by_callee
            .entry(edge.callee.clone())
            .or_default()
            .push(edge);
    }

    /// Edges whose callee is `callee`.
    pub fn edges_to(&self, callee: &str) -> &[CallEdge] {
        self.by_callee
            .get(callee)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every edge, unordered across callees.
    pub fn edges(&self) -> impl Iterator<Item = &CallEdge> {
        self.by_callee.values().flatten()
    }

    /// Total number of edges.
    pub fn len(&self) -> usize {
        self.by_callee.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_callee.is_empty()
    }

    /// Append `later`'s edges after ours.
    pub fn merge(&mut self, later: CallGraph) {
        for (callee, edges) in later.by_callee {
            self.by_callee.entry(callee).or_default().extend(edges);
        }
    }
}

/// Collects the call edges of one function body.
pub struct CallGraphBuilder<'a> {
    file: &'a ParsedFile,
    caller: &'a str,
    graph: &'a mut CallGraph,
}

impl<'a> CallGraphBuilder<'a> {
    pub fn new(file: &'a ParsedFile, caller: &'a str, graph: &'a mut CallGraph) -> Self {
        Self {
            file,
            caller,
            graph,
        }
    }

    /// Walk `body` and append one edge per nameable call expression.
    ///
    /// Closures, async blocks, macro arguments and the initializers of local
    /// `const`/`static` items belong to `caller`. Nested functions, impls,
    /// traits and modules are skipped: their bodies have callers of their own.
    pub fn collect(mut self, body: &Block) {
        self.visit_block(body);
    }

    fn record(&mut self, call: &CallExpr<'_>) {
        let Some(callee) = call.callee_name() else {
            return;
        };
        let location = self.file.location_at(call.span());
        self.graph
            .add_edge(CallEdge::new(self.caller, callee.to_string(), location));
    }
}

impl<'ast> Visit<'ast> for CallGraphBuilder<'_> {
    fn visit_expr(&mut self, expr: &'ast Expr) {
        match AstNode::from_expr(expr) {
            AstNode::Call(call) => self.record(&call),
            AstNode::Function(_) | AstNode::Value(_) | AstNode::Type(_) | AstNode::Other => {}
        }
        visit::visit_expr(self, expr);
    }

    fn visit_item(&mut self, item: &'ast Item) {
        match item {
            Item::Fn(_) | Item::Impl(_) | Item::Trait(_) | Item::Mod(_) => {}
            _ => visit::visit_item(self, item),
        }
    }

    fn visit_macro(&mut self, mac: &'ast Macro) {
        // Token bodies only become expressions if they look like an argument list.
        if let Ok(args) = mac.parse_body_with(Punctuated::<Expr, Token![,]>::parse_terminated) {
            for arg in &args {
                Visit::visit_expr(self, arg);
            }
        }
    }
}
