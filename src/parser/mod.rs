//! Parser module for the silo command language

pub mod ast;
pub mod grammar;

pub use ast::*;
pub use grammar::{parse_line, parse_script};
