//! # GraphQL Query Language AST
//!
//! The `graphql_validator::ast` module contains the GraphQL query language AST and traits to parse
//! it. The AST implemented in this crate is specialized to only implement the client-side GraphQL
//! query language that clients use to make requests to a GraphQL service, which is what the
//! validator checks.
//! [Reference](https://spec.graphql.org/October2021/#sec-Language)
//!
//! Its main parts are:
//! - [`ASTContext`], a context containing an arena that defines the lifetime for an AST
//! - [`ParseNode`], a trait using which AST Nodes are parsed from source text
//! - [`PrintNode`], a trait using which values and type references are printed into source text
//!
//! Most AST Nodes carry an optional [`Location`](crate::error::Location), which is recorded unless
//! parsing is done with [`ParseOptions::no_location`] set.
//!
//! ```
//! use graphql_validator::ast::*;
//!
//! // Create an AST Context for a document
//! let ctx = ASTContext::new();
//!
//! // Parse a source text into a Document AST root node
//! let ast = Document::parse(&ctx, "{ field }").unwrap();
//!
//! let field = ast.operations().next().unwrap().selection_set.selections[0].field().unwrap();
//! assert_eq!(field.loc.unwrap().column, 3);
//! ```

#[allow(clippy::module_inception)]
mod ast;

mod ast_conversion;
mod ast_kind;
pub(crate) mod lexer;
pub(crate) mod parser;
mod printer;

pub use ast::*;
pub use ast_kind::ASTKind;
pub use parser::{ParseNode, ParseOptions};
pub use printer::PrintNode;
