use bumpalo::Bump;
use hashbrown::{hash_map::DefaultHashBuilder, HashMap};

use super::super::{GraphQLError, RuleHandlers, ValidationContext, ValidationRule};
use crate::{ast::*, error::Location, visit::*};

/// Validates that no operation the document defines have duplicate names.
/// Note: Operations and Fragments are allowed to share names.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Operation-Name-Uniqueness)
pub struct UniqueOperationNames<'a> {
    known_operation_names: HashMap<&'a str, Option<Location>, DefaultHashBuilder, &'a Bump>,
}

impl<'a> DefaultIn<'a> for UniqueOperationNames<'a> {
    fn default_in(arena: &'a Bump) -> Self {
        Self {
            known_operation_names: HashMap::new_in(arena),
        }
    }
}

impl<'a> ValidationRule<'a> for UniqueOperationNames<'a> {
    fn handlers(&self) -> RuleHandlers {
        RuleHandlers::ENTER_OPERATION
    }
}

impl<'a> Visitor<'a, ValidationContext<'a>> for UniqueOperationNames<'a> {
    fn enter_operation(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        operation: &'a OperationDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        if let Some(ref name) = operation.name {
            match self.known_operation_names.get(name.name) {
                Some(first) => ctx.report_error(GraphQLError::new(
                    format!("There can be only one operation named '{}'.", name.name),
                    [*first, name.loc],
                )),
                None => {
                    self.known_operation_names.insert(name.name, name.loc);
                }
            }
        }
        VisitFlow::Next
    }
}
