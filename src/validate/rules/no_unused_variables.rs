use bumpalo::Bump;
use hashbrown::{hash_map::DefaultHashBuilder, HashSet};

use super::super::{GraphQLError, RuleHandlers, ValidationContext, ValidationRule};
use crate::{ast::*, visit::*};

/// Validate that a document uses all the variables it defines at least once, either in the
/// operation itself or in a fragment that the operation spreads.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-All-Variables-Used)
#[derive(Default)]
pub struct NoUnusedVariables;

impl<'a> ValidationRule<'a> for NoUnusedVariables {
    fn handlers(&self) -> RuleHandlers {
        RuleHandlers::LEAVE_OPERATION
    }
}

impl<'a> Visitor<'a, ValidationContext<'a>> for NoUnusedVariables {
    fn leave_operation(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        operation: &'a OperationDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        let mut used_vars: HashSet<&'a str, DefaultHashBuilder, &'a Bump> =
            HashSet::new_in(ctx.arena);
        for usage in ctx.recursive_variable_usages(operation) {
            used_vars.insert(usage.name);
        }
        for var_def in operation.variable_definitions.children.iter() {
            let name = var_def.variable.name;
            if used_vars.contains(name) {
                continue;
            }
            let message = match operation.name {
                Some(ref operation_name) => format!(
                    "Variable '${}' is never used in operation '{}'.",
                    name, operation_name.name
                ),
                None => format!("Variable '${}' is never used.", name),
            };
            ctx.report_error(GraphQLError::new(message, [var_def.loc]));
        }
        VisitFlow::Next
    }
}
