// C/C++ front end using tree-sitter
//
// Lowers tree-sitter parse trees into the closed Stmt/FunctionDecl shapes the
// scoring engine consumes. Constructs the engine does not care about become
// StmtKind::Other with their children preserved, so nested decisions are
// never hidden.

use crate::error::{Error, Result};
use crate::parser::ast::*;
use std::path::Path;
use tree_sitter::{Node, Parser};

/// Supported source dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    C,
    Cpp,
}

impl Dialect {
    /// Detect dialect from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "c" | "h" => Some(Self::C),
            "cc" | "cpp" | "cxx" | "c++" => Some(Self::Cpp),
            "hh" | "hpp" | "hxx" => Some(Self::Cpp),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// Parser for C and C++ translation units
pub struct ClikeParser {
    c_parser: Parser,
    cpp_parser: Parser,
}

impl ClikeParser {
    /// Create a new C/C++ parser
    pub fn new() -> Result<Self> {
        let mut c_parser = Parser::new();
        let c_language = tree_sitter_c::language();
        c_parser
            .set_language(&c_language)
            .map_err(|e| Error::Parser(format!("Failed to set C language: {}", e)))?;

        let mut cpp_parser = Parser::new();
        let cpp_language = tree_sitter_cpp::language();
        cpp_parser
            .set_language(&cpp_language)
            .map_err(|e| Error::Parser(format!("Failed to set C++ language: {}", e)))?;

        Ok(Self {
            c_parser,
            cpp_parser,
        })
    }

    /// Parse a translation unit from a file
    pub fn parse_file(&mut self, path: &Path) -> Result<ParsedUnit> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("{}: {}", path.display(), e),
            ))
        })?;

        let dialect = Dialect::from_path(path)
            .ok_or_else(|| Error::parse(path, "unrecognized source extension"))?;

        self.parse_source(&source, path.to_path_buf(), dialect)
    }

    /// Parse a translation unit from source text
    pub fn parse_source(
        &mut self,
        source: &str,
        path: std::path::PathBuf,
        dialect: Dialect,
    ) -> Result<ParsedUnit> {
        let parser = match dialect {
            Dialect::C => &mut self.c_parser,
            Dialect::Cpp => &mut self.cpp_parser,
        };

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| Error::parser("Failed to parse source"))?;

        let mut unit = ParsedUnit::new(path);
        collect_functions(&tree.root_node(), source.as_bytes(), &mut unit);
        Ok(unit)
    }
}

/// Walk the tree in depth-first order collecting function declarations
fn collect_functions(node: &Node, source: &[u8], unit: &mut ParsedUnit) {
    match node.kind() {
        "function_definition" => {
            if let Some(decl) = parse_definition(node, source, unit) {
                unit.functions.push(decl);
            }
            return;
        }
        "declaration" => {
            // A declaration carrying a function declarator but no body
            // is a prototype; record it without a body.
            if let Some(decl) = parse_prototype(node, source, unit) {
                unit.functions.push(decl);
            }
            return;
        }
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        collect_functions(&child, source, unit);
    }
}

/// Parse a function definition node
fn parse_definition(node: &Node, source: &[u8], unit: &ParsedUnit) -> Option<FunctionDecl> {
    let declarator = node.child_by_field_name("declarator")?;
    let name = declarator_name(&declarator, source)?;
    let location = node_location(node, unit);

    let body = node.child_by_field_name("body").map(|b| lower_stmt(&b));

    Some(FunctionDecl {
        name,
        location,
        body,
    })
}

/// Parse a prototype declaration, if the node declares a function
fn parse_prototype(node: &Node, source: &[u8], unit: &ParsedUnit) -> Option<FunctionDecl> {
    let declarator = node.child_by_field_name("declarator")?;
    let func_declarator = find_function_declarator(&declarator)?;
    let name = declarator_name(&func_declarator, source)?;
    let location = node_location(node, unit);

    Some(FunctionDecl::new(&name, location))
}

/// Descend wrapping declarators looking for a function declarator
fn find_function_declarator<'a>(node: &Node<'a>) -> Option<Node<'a>> {
    match node.kind() {
        "function_declarator" => Some(*node),
        "pointer_declarator" | "parenthesized_declarator" | "reference_declarator" => {
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                if let Some(found) = find_function_declarator(&child) {
                    return Some(found);
                }
            }
            None
        }
        _ => None,
    }
}

/// Extract the declared name from a declarator subtree
fn declarator_name(node: &Node, source: &[u8]) -> Option<String> {
    match node.kind() {
        "identifier" | "field_identifier" | "qualified_identifier" | "destructor_name"
        | "operator_name" => node.utf8_text(source).ok().map(|s| s.to_string()),
        _ => {
            if let Some(inner) = node.child_by_field_name("declarator") {
                return declarator_name(&inner, source);
            }
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                if let Some(name) = declarator_name(&child, source) {
                    return Some(name);
                }
            }
            None
        }
    }
}

fn node_location(node: &Node, unit: &ParsedUnit) -> SourceLocation {
    SourceLocation::new(
        unit.path.clone(),
        node.start_byte(),
        node.start_position().row + 1,
    )
}

/// Lower a tree-sitter node into the statement model
fn lower_stmt(node: &Node) -> Stmt {
    let kind = map_kind(node.kind());

    let mut children = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() == "comment" {
            continue;
        }
        children.push(lower_stmt(&child));
    }

    Stmt::with_children(kind, children)
}

/// Map a tree-sitter node kind onto the statement discriminator
fn map_kind(kind: &str) -> StmtKind {
    match kind {
        "if_statement" => StmtKind::If,
        "switch_statement" => StmtKind::Switch,
        "for_statement" | "for_range_loop" => StmtKind::For,
        "while_statement" => StmtKind::While,
        "do_statement" => StmtKind::DoWhile,
        "conditional_expression" => StmtKind::Ternary,
        "compound_statement" => StmtKind::Block,
        _ => StmtKind::Other,
    }
}
