//! # Validating GraphQL Documents
//!
//! This module checks GraphQL query documents against a [Schema](crate::schema::Schema) and
//! reports every problem it finds as a [`GraphQLError`]. Validation is driven by a list of
//! [`ValidationRule`]s, which all observe a single depth-first traversal of the document.
//!
//! For every node that's visited, the [`TypeInfo`] of the [`ValidationContext`] is updated first,
//! so that rules can look up the schema types and definitions that apply to the node, e.g. the
//! parent type of a field or the expected type of an argument's value. Definitions are resolved
//! by a [`TypeInfoProvider`], which defaults to [`SchemaTypeInfo`] and may be replaced to change
//! how fields, types, and arguments resolve.
//!
//! The rules that are run by default are returned by [`specified_rules`](rules::specified_rules),
//! while [`DefaultRules`](rules::DefaultRules) lists those rules that don't depend on any schema
//! types. Custom rules implement the [`ValidationRule`] trait and are passed to
//! [`ValidationOptions::with_rules`] as [`RuleConstructor`]s.
//!
//! ```
//! use graphql_validator::{ast::*, schema::*, validate::*};
//!
//! let ctx = ASTContext::new();
//! let schema = Schema::parse(&ctx, "type Query { dog(name: String!): String }").unwrap();
//! let document = Document::parse(&ctx, "query Dog { dog } query Dog { cat }").unwrap();
//!
//! let errors = validate_document(&ctx, schema, document).unwrap();
//! let messages: Vec<&str> = errors.iter().map(|error| error.message.as_str()).collect();
//! assert_eq!(messages, vec![
//!     "Field 'dog' argument 'name' of type 'String!' is required, but it was not provided.",
//!     "There can be only one operation named 'Dog'.",
//!     "Cannot query field 'cat' on type 'Query'.",
//! ]);
//! ```
//!
//! When a maximum number of errors is set with [`ValidationOptions::with_max_errors`], validation
//! stops as soon as one more error is reported, and a final error noting that validation was
//! aborted is appended.

mod context;
mod dispatcher;
mod error;
mod rule;
pub(crate) mod suggestions;
mod type_info;
#[allow(clippy::module_inception)]
mod validate;

#[cfg(test)]
pub(crate) mod harness;

pub mod rules;

pub use context::ValidationContext;
pub use error::{FormattedError, GraphQLError};
pub use rule::{RuleConstructor, RuleHandlers, ValidationRule};
pub use rules::{specified_rules, DefaultRules};
pub use type_info::{ArgumentOwner, SchemaTypeInfo, TypeInfo, TypeInfoProvider};
pub use validate::*;
