use bumpalo::{collections::Vec, Bump};

use super::super::{GraphQLError, RuleHandlers, ValidationContext, ValidationRule};
use crate::{ast::*, visit::*};

/// Validates that no field or directive is passed the same argument more than once.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Argument-Uniqueness)
pub struct UniqueArgumentNames<'a> {
    used_argument_names: Vec<'a, &'a str>,
}

impl<'a> DefaultIn<'a> for UniqueArgumentNames<'a> {
    fn default_in(arena: &'a Bump) -> Self {
        Self {
            used_argument_names: Vec::new_in(arena),
        }
    }
}

impl<'a> UniqueArgumentNames<'a> {
    fn check_arguments(&mut self, ctx: &mut ValidationContext<'a>, arguments: &'a Arguments<'a>) {
        self.used_argument_names.clear();
        for argument in arguments.children.iter() {
            if self.used_argument_names.contains(&argument.name) {
                continue;
            }
            self.used_argument_names.push(argument.name);
            let locations = arguments
                .children
                .iter()
                .filter(|other| other.name == argument.name)
                .map(|other| other.loc)
                .collect::<std::vec::Vec<_>>();
            if locations.len() > 1 {
                ctx.report_error(GraphQLError::new(
                    format!("There can be only one argument named '{}'.", argument.name),
                    locations,
                ));
            }
        }
    }
}

impl<'a> ValidationRule<'a> for UniqueArgumentNames<'a> {
    fn handlers(&self) -> RuleHandlers {
        RuleHandlers::ENTER_FIELD | RuleHandlers::ENTER_DIRECTIVE
    }
}

impl<'a> Visitor<'a, ValidationContext<'a>> for UniqueArgumentNames<'a> {
    fn enter_field(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        field: &'a Field<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        self.check_arguments(ctx, &field.arguments);
        VisitFlow::Next
    }

    fn enter_directive(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        directive: &'a Directive<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        self.check_arguments(ctx, &directive.arguments);
        VisitFlow::Next
    }
}
