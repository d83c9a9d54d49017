//! # Using Schema Definitions
//!
//! The `graphql_validator::schema` module contains the read-only type registry that documents are
//! validated against. A [Schema] is usually loaded from the GraphQL schema definition language
//! using the [ParseSdl] trait, but may also be assembled by hand.
//!
//! ```
//! use graphql_validator::{ast::ASTContext, schema::*};
//!
//! let ctx = ASTContext::new();
//! let schema = Schema::parse(&ctx, "
//!     type Query { dog: Dog }
//!     type Dog { name(surname: Boolean): String! }
//! ").unwrap();
//!
//! let dog = schema.query_type().unwrap().get_field("dog").unwrap();
//! let dog_type = dog.output_type.of_type(&schema).unwrap();
//! assert!(dog_type.is_composite());
//! ```
//!
//! [More information on the Schema struct.](Schema)

mod builtins;
#[allow(clippy::module_inception)]
pub mod schema;
pub mod sdl;

pub use builtins::BUILTIN_SCALARS;
pub use schema::*;
pub use sdl::ParseSdl;
