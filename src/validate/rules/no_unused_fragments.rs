use bumpalo::{collections::Vec, Bump};
use hashbrown::{hash_map::DefaultHashBuilder, HashSet};

use super::super::{GraphQLError, RuleHandlers, ValidationContext, ValidationRule};
use crate::{ast::*, visit::*};

/// Validates that every fragment the document defines is spread by at least one operation,
/// directly or through other fragments.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Fragments-Must-Be-Used)
pub struct NoUnusedFragments<'a> {
    operations: Vec<'a, &'a OperationDefinition<'a>>,
    fragments: Vec<'a, &'a FragmentDefinition<'a>>,
}

impl<'a> DefaultIn<'a> for NoUnusedFragments<'a> {
    fn default_in(arena: &'a Bump) -> Self {
        Self {
            operations: Vec::new_in(arena),
            fragments: Vec::new_in(arena),
        }
    }
}

impl<'a> ValidationRule<'a> for NoUnusedFragments<'a> {
    fn handlers(&self) -> RuleHandlers {
        RuleHandlers::ENTER_OPERATION | RuleHandlers::ENTER_FRAGMENT | RuleHandlers::LEAVE_DOCUMENT
    }
}

impl<'a> Visitor<'a, ValidationContext<'a>> for NoUnusedFragments<'a> {
    fn enter_operation(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        operation: &'a OperationDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        self.operations.push(operation);
        VisitFlow::Next
    }

    fn enter_fragment(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        fragment: &'a FragmentDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        self.fragments.push(fragment);
        VisitFlow::Next
    }

    fn leave_document(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        _document: &'a Document<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        let mut used: HashSet<&'a str, DefaultHashBuilder, &'a Bump> = HashSet::new_in(ctx.arena);
        for operation in self.operations.iter() {
            for fragment in ctx.recursively_referenced_fragments(operation) {
                used.insert(fragment.name.name);
            }
        }
        for fragment in self.fragments.iter() {
            if !used.contains(fragment.name.name) {
                ctx.report_error(GraphQLError::new(
                    format!("Fragment '{}' is never used.", fragment.name.name),
                    [fragment.loc],
                ));
            }
        }
        VisitFlow::Next
    }
}
