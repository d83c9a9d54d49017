//! # Visiting GraphQL ASTs
//!
//! The `graphql_validator::visit` module contains the depth-first traversal that validation is
//! built on. The [Visitor] trait can be used to implement a visitor, which is then run using the
//! [`VisitNode`] trait that most AST nodes implement and where visiting can start.
//!
//! Visitors receive an `enter_` callback before a node's children are visited and a `leave_`
//! callback afterwards. Each callback returns a [`VisitFlow`] signal that either continues the
//! traversal, skips over the children of a node, or aborts the traversal entirely.
//!
//! In this example we'll define a visitor that counts all operations in a document:
//!
//! ```
//! use graphql_validator::{ast::*, visit::*};
//!
//! #[derive(Default)]
//! struct CountOperations {
//!    operations: usize,
//! }
//!
//! impl<'a> Visitor<'a> for CountOperations {
//!     fn enter_fragment(
//!         &mut self,
//!         _ctx: &mut (),
//!         _fragment: &'a FragmentDefinition<'a>,
//!         _info: &VisitInfo
//!     ) -> VisitFlow {
//!         // We can skip over fragment nodes and never traverse its children,
//!         // since we're only interested in counting operations
//!         VisitFlow::Skip
//!     }
//!
//!     fn enter_operation(
//!         &mut self,
//!         _ctx: &mut (),
//!         operation: &'a OperationDefinition<'a>,
//!         _info: &VisitInfo
//!     ) -> VisitFlow {
//!         self.operations += 1;
//!         VisitFlow::Next
//!     }
//! }
//!
//! let ctx = ASTContext::new();
//! let document = Document::parse(&ctx, "query A { a } query B { b } fragment F on T { c }").unwrap();
//! let mut visitor = CountOperations::default();
//! document.visit(&mut (), &mut visitor);
//! assert_eq!(visitor.operations, 2);
//! ```
//!
//! The validation dispatcher in [`crate::validate`] is itself a visitor whose context is the
//! [`ValidationContext`](crate::validate::ValidationContext).
//!
//! [More information on the Visitor trait](Visitor)

mod path;
mod visitor;

pub use path::*;
pub use visitor::*;
