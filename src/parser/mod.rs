// Front end for lowering source files into scoreable syntax trees

pub mod ast;
mod clike;

pub use ast::*;
pub use clike::{ClikeParser, Dialect};
