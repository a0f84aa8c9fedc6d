// Syntax types produced by the C/C++ front end
//
// These are the tree shapes the scoring engine consumes. Statement nodes are
// a closed set of tagged variants so the decision-contributing set can be
// matched exhaustively in one place.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where a declaration lives in the source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceLocation {
    /// File the declaration was parsed from
    pub path: PathBuf,
    /// Byte offset of the declaration within the file
    pub offset: usize,
    /// 1-based line number
    pub line: usize,
    /// Marked true for declarations from system locations
    pub is_system: bool,
}

impl SourceLocation {
    pub fn new(path: impl Into<PathBuf>, offset: usize, line: usize) -> Self {
        Self {
            path: path.into(),
            offset,
            line,
            is_system: false,
        }
    }

    pub fn system(path: impl Into<PathBuf>, offset: usize, line: usize) -> Self {
        Self {
            path: path.into(),
            offset,
            line,
            is_system: true,
        }
    }

    /// File name component, if any
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }
}

/// Statement kind discriminator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StmtKind {
    If,
    Switch,
    For,
    While,
    DoWhile,
    Ternary,
    Block,
    Other,
}

impl StmtKind {
    /// Whether this kind introduces a decision point
    pub fn is_decision(&self) -> bool {
        matches!(
            self,
            StmtKind::If
                | StmtKind::Switch
                | StmtKind::For
                | StmtKind::While
                | StmtKind::DoWhile
                | StmtKind::Ternary
        )
    }
}

/// A statement subtree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stmt {
    pub kind: StmtKind,
    /// Ordered child subtrees, conditions and bodies included
    pub children: Vec<Stmt>,
}

impl Stmt {
    pub fn new(kind: StmtKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    pub fn with_children(kind: StmtKind, children: Vec<Stmt>) -> Self {
        Self { kind, children }
    }

    /// An empty block, e.g. a function body of `{}`
    pub fn empty_block() -> Self {
        Self::new(StmtKind::Block)
    }

    /// Total node count in this subtree, self included
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Stmt::node_count).sum::<usize>()
    }
}

/// A function declaration as seen by the scoring pass
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FunctionDecl {
    /// Function name as written
    pub name: String,
    /// Declaration location
    pub location: SourceLocation,
    /// Body statements; None for a declaration-only signature
    pub body: Option<Stmt>,
}

impl FunctionDecl {
    pub fn new(name: &str, location: SourceLocation) -> Self {
        Self {
            name: name.to_string(),
            location,
            body: None,
        }
    }

    pub fn with_body(name: &str, location: SourceLocation, body: Stmt) -> Self {
        Self {
            name: name.to_string(),
            location,
            body: Some(body),
        }
    }

    /// Whether this declaration carries a definition
    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }
}

/// One parsed translation unit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedUnit {
    /// Unit file path
    pub path: PathBuf,
    /// Function declarations in visitation order
    pub functions: Vec<FunctionDecl>,
}

impl ParsedUnit {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            functions: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
