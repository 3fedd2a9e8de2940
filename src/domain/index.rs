use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use crate::domain::callgraph::CallGraph;

/// A source position: file plus 1-based line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub file: PathBuf,
    pub line: usize,
}

impl Location {
    pub fn new(file: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file.display(), self.line)
    }
}

/// The four disjoint declaration namespaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Function,
    Variable,
    Constant,
    Type,
}

impl Namespace {
    /// All namespaces, in emission order.
    pub const ALL: [Namespace; 4] = [
        Namespace::Function,
        Namespace::Variable,
        Namespace::Constant,
        Namespace::Type,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Namespace::Function => "function",
            Namespace::Variable => "variable",
            Namespace::Constant => "constant",
            Namespace::Type => "type",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A declared name and where it was (last) declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration<'a> {
    pub name: &'a str,
    pub location: &'a Location,
}

/// Name -> location, one map per namespace.
///
/// Inserting a name that is already present replaces its location
/// (last-visited-wins). Redeclaration is not an error. Iteration order is
/// whatever the underlying map yields.
#[derive(Debug, Clone, Default)]
pub struct SymbolIndex {
    functions: HashMap<String, Location>,
    variables: HashMap<String, Location>,
    constants: HashMap<String, Location>,
    types: HashMap<String, Location>,
}

impl SymbolIndex {
    pub fn new() -> Self {
        Self::default()
    }

    fn namespace(&self, ns: Namespace) -> &HashMap<String, Location> {
        match ns {
            Namespace::Function => &self.functions,
            Namespace::Variable => &self.variables,
            Namespace::Constant => &self.constants,
            Namespace::Type => &self.types,
        }
    }

    fn namespace_mut(&mut self, ns: Namespace) -> &mut HashMap<String, Location> {
        match ns {
            Namespace::Function => &mut self.functions,
            Namespace::Variable => &mut self.variables,
            Namespace::Constant => &mut self.constants,
            Namespace::Type => &mut self.types,
        }
    }

    /// Record a declaration, returning the location it replaced, if any.
    pub fn insert(
        &mut self,
        ns: Namespace,
        name: impl Into<String>,
        location: Location,
    ) -> Option<Location> {
        self.namespace_mut(ns).insert(name.into(), location)
    }

    pub fn get(&self, ns: Namespace, name: &str) -> Option<&Location> {
        self.namespace(ns).get(name)
    }

    pub fn contains(&self, ns: Namespace, name: &str) -> bool {
        self.namespace(ns).contains_key(name)
    }

    /// Declarations of one namespace, unordered.
    pub fn declarations(&self, ns: Namespace) -> impl Iterator<Item = Declaration<'_>> {
        self.namespace(ns).iter().map(|(name, location)| Declaration {
            name: name.as_str(),
            location,
        })
    }

    pub fn len(&self, ns: Namespace) -> usize {
        self.namespace(ns).len()
    }

    pub fn total_len(&self) -> usize {
        Namespace::ALL.iter().map(|ns| self.len(*ns)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_len() == 0
    }

    /// Fold `later` into `self`. Names present in both take `later`'s location.
    pub fn merge(&mut self, later: SymbolIndex) {
        let SymbolIndex {
            functions,
            variables,
            constants,
            types,
        } = later;
        self.functions.extend(functions);
        self.variables.extend(variables);
        self.constants.extend(constants);
        self.types.extend(types);
    }
}

/// Per-run bookkeeping, reported at the end of a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    pub files_parsed: usize,
    pub files_failed: usize,
}

/// Everything a run accumulates: the declaration namespaces, the call graph
/// and file counters.
///
/// A single file is indexed into its own `ProjectIndex`, and shards are merged
/// into the run's index in walk order.
#[derive(Debug, Clone, Default)]
pub struct ProjectIndex {
    pub symbols: SymbolIndex,
    pub calls: CallGraph,
    pub stats: IndexStats,
}

impl ProjectIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a shard visited after everything already in `self`.
    ///
    /// Declarations follow last-visited-wins; call edges are appended.
    pub fn merge(&mut self, later: ProjectIndex) {
        self.symbols.merge(later.symbols);
        self.calls.merge(later.calls);
        self.stats.files_parsed += later.stats.files_parsed;
        self.stats.files_failed += later.stats.files_failed;
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty() && self.calls.is_empty()
    }
}
