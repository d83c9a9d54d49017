//! `graphql_validator`
//! =========
//!
//! _Single-pass, rule-driven validation of GraphQL query documents._
//!
//! The **`graphql_validator`** library checks client-side GraphQL documents against a schema
//! and reports every problem as an error with a message and source locations, the same way
//! that the reference GraphQL.js implementation does.
//!
//! All rules run during one depth-first traversal of a document. While traversing, the
//! validator keeps track of the schema types that apply to each node, so that rules only have
//! to look at the node they're interested in. Rules are plain structs implementing the
//! [`ValidationRule`](validate::ValidationRule) trait and can be freely combined with custom
//! ones.
//!
//! Documents and schemas are allocated on an arena, which is owned by an
//! [`ASTContext`](ast::ASTContext) and outlives every node and error that's produced.
//!
//! ```
//! use graphql_validator::{ast::*, schema::*, validate::*};
//!
//! let ctx = ASTContext::new();
//! let schema = Schema::parse(&ctx, "type Query { hello(name: String): String }").unwrap();
//! let document = Document::parse(&ctx, "{ hello(name: 1) }").unwrap();
//!
//! let errors = validate_document(&ctx, schema, document).unwrap();
//! assert_eq!(errors[0].to_string(), "String cannot represent a non string value: 1 (1:15)");
//! ```
//!
//! [A good place to start learning more about this crate is the `validate` module...](validate)

pub mod ast;
pub mod error;
pub mod schema;
pub mod validate;
pub mod visit;

pub use bumpalo;

