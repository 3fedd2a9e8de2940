// Recognized syntax shapes for callscan.
// Every syn node the indexer looks at is first classified into an `AstNode`.

use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::visit::{self, Visit};
use syn::{
    Block, Expr, ExprCall, ExprMethodCall, File, ForeignItem, Ident, ImplItem, Item, Local,
    PatIdent, StaticMutability, TraitItem,
};

/// The closed set of node kinds the indexer acts on.
pub enum AstNode<'ast> {
    Function(FunctionDecl<'ast>),
    Value(ValueDecl<'ast>),
    Type(TypeDecl<'ast>),
    Call(CallExpr<'ast>),
    Other,
}

/// A function or method. `body` is `None` for bodiless declarations
/// (trait methods without a default, `extern` functions).
pub struct FunctionDecl<'ast> {
    pub ident: &'ast Ident,
    pub body: Option<&'ast Block>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutability {
    Mutable,
    Immutable,
}

/// A value declaration: a `static` or `const` item, or a `let` statement.
///
/// Items bind exactly one name. A `let` binds one name per identifier in its
/// pattern, each with its own mutability: `let (mut a, b) = ..` yields a
/// mutable `a` and an immutable `b`.
pub struct ValueDecl<'ast> {
    pub bindings: Vec<Binding<'ast>>,
}

pub struct Binding<'ast> {
    pub ident: &'ast Ident,
    pub mutability: Mutability,
}

pub struct TypeDecl<'ast> {
    pub ident: &'ast Ident,
}

/// A call expression: `f(..)`, `path::f(..)` or `recv.m(..)`.
pub enum CallExpr<'ast> {
    Call(&'ast ExprCall),
    Method(&'ast ExprMethodCall),
}

impl<'ast> CallExpr<'ast> {
    /// The name a call resolves to, if the callee has one.
    ///
    /// Paths resolve to their last segment and method calls to the method, so
    /// `a::b::f()` and `x.f()` both name `f`. Anything else (a parenthesized
    /// expression, the result of another call, a closure) has no name.
    pub fn callee_name(&self) -> Option<&'ast Ident> {
        match *self {
            CallExpr::Call(call) => match call.func.as_ref() {
                Expr::Path(path) => path.path.segments.last().map(|seg| &seg.ident),
                _ => None,
            },
            CallExpr::Method(call) => Some(&call.method),
        }
    }

    pub fn span(&self) -> Span {
        match *self {
            CallExpr::Call(call) => call.span(),
            CallExpr::Method(call) => call.span(),
        }
    }
}

fn static_mutability(mutability: &StaticMutability) -> Mutability {
    match mutability {
        StaticMutability::Mut(_) => Mutability::Mutable,
        _ => Mutability::Immutable,
    }
}

impl<'ast> AstNode<'ast> {
    fn function(ident: &'ast Ident, body: Option<&'ast Block>) -> Self {
        AstNode::Function(FunctionDecl { ident, body })
    }

    fn value(ident: &'ast Ident, mutability: Mutability) -> Self {
        AstNode::Value(ValueDecl {
            bindings: vec![Binding { ident, mutability }],
        })
    }

    fn ty(ident: &'ast Ident) -> Self {
        AstNode::Type(TypeDecl { ident })
    }

    pub fn from_item(item: &'ast Item) -> Self {
        match item {
            Item::Fn(func) => Self::function(&func.sig.ident, Some(&func.block)),
            Item::Const(c) => Self::value(&c.ident, Mutability::Immutable),
            Item::Static(s) => Self::value(&s.ident, static_mutability(&s.mutability)),
            Item::Struct(s) => Self::ty(&s.ident),
            Item::Enum(e) => Self::ty(&e.ident),
            Item::Union(u) => Self::ty(&u.ident),
            Item::Type(t) => Self::ty(&t.ident),
            Item::Trait(t) => Self::ty(&t.ident),
            Item::TraitAlias(t) => Self::ty(&t.ident),
            _ => AstNode::Other,
        }
    }

    pub fn from_impl_item(item: &'ast ImplItem) -> Self {
        match item {
            ImplItem::Fn(method) => Self::function(&method.sig.ident, Some(&method.block)),
            ImplItem::Const(c) => Self::value(&c.ident, Mutability::Immutable),
            ImplItem::Type(t) => Self::ty(&t.ident),
            _ => AstNode::Other,
        }
    }

    pub fn from_trait_item(item: &'ast TraitItem) -> Self {
        match item {
            TraitItem::Fn(method) => Self::function(&method.sig.ident, method.default.as_ref()),
            TraitItem::Const(c) => Self::value(&c.ident, Mutability::Immutable),
            TraitItem::Type(t) => Self::ty(&t.ident),
            _ => AstNode::Other,
        }
    }

    pub fn from_foreign_item(item: &'ast ForeignItem) -> Self {
        match item {
            ForeignItem::Fn(func) => Self::function(&func.sig.ident, None),
            ForeignItem::Static(s) => Self::value(&s.ident, static_mutability(&s.mutability)),
            ForeignItem::Type(t) => Self::ty(&t.ident),
            _ => AstNode::Other,
        }
    }

    /// A `let` statement. Patterns without identifiers (`let _ = ..`,
    /// `let () = ..`) bind nothing and classify as `Other`.
    pub fn from_local(local: &'ast Local) -> Self {
        let mut collector = BindingCollector {
            bindings: Vec::new(),
        };
        collector.visit_pat(&local.pat);
        if collector.bindings.is_empty() {
            AstNode::Other
        } else {
            AstNode::Value(ValueDecl {
                bindings: collector.bindings,
            })
        }
    }

    pub fn from_expr(expr: &'ast Expr) -> Self {
        match expr {
            Expr::Call(call) => AstNode::Call(CallExpr::Call(call)),
            Expr::MethodCall(call) => AstNode::Call(CallExpr::Method(call)),
            _ => AstNode::Other,
        }
    }
}

/// Gathers the identifiers a pattern binds.
struct BindingCollector<'ast> {
    bindings: Vec<Binding<'ast>>,
}

impl<'ast> Visit<'ast> for BindingCollector<'ast> {
    fn visit_pat_ident(&mut self, pat: &'ast PatIdent) {
        let mutability = if pat.mutability.is_some() {
            Mutability::Mutable
        } else {
            Mutability::Immutable
        };
        self.bindings.push(Binding {
            ident: &pat.ident,
            mutability,
        });
        // `name @ subpattern`
        visit::visit_pat_ident(self, pat);
    }

    // Literal and range patterns hold expressions, which bind nothing.
    fn visit_expr(&mut self, _expr: &'ast Expr) {}
}

/// Calls `f` for every recognized node in `file`, parents before children.
///
/// Nodes classified as [`AstNode::Other`] are not reported, but their
/// children are still visited.
pub fn inspect<'ast, F>(file: &'ast File, f: F)
where
    F: FnMut(AstNode<'ast>),
{
    let mut inspector = Inspector { f };
    inspector.visit_file(file);
}

struct Inspector<F> {
    f: F,
}

impl<F> Inspector<F> {
    fn report<'ast>(&mut self, node: AstNode<'ast>)
    where
        F: FnMut(AstNode<'ast>),
    {
        if !matches!(node, AstNode::Other) {
            (self.f)(node);
        }
    }
}

impl<'ast, F> Visit<'ast> for Inspector<F>
where
    F: FnMut(AstNode<'ast>),
{
    fn visit_item(&mut self, item: &'ast Item) {
        self.report(AstNode::from_item(item));
        visit::visit_item(self, item);
    }

    fn visit_impl_item(&mut self, item: &'ast ImplItem) {
        self.report(AstNode::from_impl_item(item));
        visit::visit_impl_item(self, item);
    }

    fn visit_trait_item(&mut self, item: &'ast TraitItem) {
        self.report(AstNode::from_trait_item(item));
        visit::visit_trait_item(self, item);
    }

    fn visit_foreign_item(&mut self, item: &'ast ForeignItem) {
        self.report(AstNode::from_foreign_item(item));
        visit::visit_foreign_item(self, item);
    }

    fn visit_local(&mut self, local: &'ast Local) {
        self.report(AstNode::from_local(local));
        visit::visit_local(self, local);
    }

    fn visit_expr(&mut self, expr: &'ast Expr) {
        self.report(AstNode::from_expr(expr));
        visit::visit_expr(self, expr);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<String> {
        let file = syn::parse_file(src).unwrap();
        let mut out = Vec::new();
        inspect(&file, |node| {
            let label = match node {
                AstNode::Function(f) => format!("fn {} body={}", f.ident, f.body.is_some()),
                AstNode::Value(v) => {
                    let names: Vec<String> = v
                        .bindings
                        .iter()
                        .map(|b| format!("{} {:?}", b.ident, b.mutability))
                        .collect();
                    format!("value {}", names.join(", "))
                }
                AstNode::Type(t) => format!("type {}", t.ident),
                AstNode::Call(c) => format!(
                    "call {}",
                    c.callee_name().map(|i| i.to_string()).unwrap_or_else(|| "?".to_string())
                ),
                AstNode::Other => "other".to_string(),
            };
            out.push(label);
        });
        out
    }

    #[test]
    fn test_classifies_items() {
        let found = kinds(
            r#"
            fn free() {}
            const LIMIT: u32 = 3;
            static NAME: &str = "x";
            static mut COUNTER: u32 = 0;
            struct Point;
            enum Color { Red }
            type Alias = u8;
            trait Shape { fn area(&self) -> f64; fn sides(&self) -> u32 { 0 } }
            "#,
        );
        assert_eq!(
            found,
            vec![
                "fn free body=true",
                "value LIMIT Immutable",
                "value NAME Immutable",
                "value COUNTER Mutable",
                "type Point",
                "type Color",
                "type Alias",
                "type Shape",
                "fn area body=false",
                "fn sides body=true",
            ]
        );
    }

    #[test]
    fn test_classifies_impl_and_extern_items() {
        let found = kinds(
            r#"
            impl Point { const ORIGIN: u8 = 0; type Unit = f64; fn norm(&self) {} }
            extern "C" { fn abs(x: i32) -> i32; static mut errno: i32; }
            "#,
        );
        assert_eq!(
            found,
            vec![
                "value ORIGIN Immutable",
                "type Unit",
                "fn norm body=true",
                "fn abs body=false",
                "value errno Mutable",
            ]
        );
    }

    #[test]
    fn test_callee_names() {
        let found = kinds(
            r#"
            fn main() {
                plain();
                std::mem::take(&mut x);
                Vec::<u8>::new();
                list.push(1);
                (handler)();
                make()();
            }
            "#,
        );
        assert_eq!(
            found,
            vec![
                "fn main body=true",
                "call plain",
                "call take",
                "call new",
                "call push",
                "call ?",
                "call ?",
                "call make",
            ]
        );
    }

    #[test]
    fn test_reaches_nested_items() {
        let found = kinds(
            r#"
            mod outer {
                pub fn visible() {
                    const LOCAL: i32 = 1;
                    struct Helper;
                }
            }
            "#,
        );
        assert_eq!(
            found,
            vec!["fn visible body=true", "value LOCAL Immutable", "type Helper"]
        );
    }

    #[test]
    fn test_let_statements_bind_every_pattern_identifier() {
        let found = kinds(
            r#"
            fn setup() {
                let mut counter = 0;
                let (mut a, b) = (1, 2);
                let Point { x, y: ref mut py } = origin;
                let _ = ignored;
            }
            "#,
        );
        assert_eq!(
            found,
            vec![
                "fn setup body=true",
                "value counter Mutable",
                "value a Mutable, b Immutable",
                "value x Immutable, py Mutable",
            ]
        );
    }
}
