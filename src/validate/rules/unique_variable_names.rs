use bumpalo::{collections::Vec, Bump};

use super::super::{GraphQLError, RuleHandlers, ValidationContext, ValidationRule};
use crate::{ast::*, visit::*};

/// Validates that no operation the document defines has duplicate variable names in its variable
/// definitions.
///
/// A name that's defined more than once is reported once, at all of its definitions.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Variable-Uniqueness)
pub struct UniqueVariableNames<'a> {
    used_variable_names: Vec<'a, &'a str>,
}

impl<'a> DefaultIn<'a> for UniqueVariableNames<'a> {
    fn default_in(arena: &'a Bump) -> Self {
        Self {
            used_variable_names: Vec::new_in(arena),
        }
    }
}

impl<'a> ValidationRule<'a> for UniqueVariableNames<'a> {
    fn handlers(&self) -> RuleHandlers {
        RuleHandlers::ENTER_OPERATION
    }
}

impl<'a> Visitor<'a, ValidationContext<'a>> for UniqueVariableNames<'a> {
    fn enter_operation(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        operation: &'a OperationDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        self.used_variable_names.clear();
        let var_defs = &operation.variable_definitions.children;
        for var_def in var_defs.iter() {
            let name = var_def.variable.name;
            if self.used_variable_names.contains(&name) {
                continue;
            }
            self.used_variable_names.push(name);
            let locations = var_defs
                .iter()
                .filter(|other| other.variable.name == name)
                .map(|other| other.variable.loc)
                .collect::<std::vec::Vec<_>>();
            if locations.len() > 1 {
                ctx.report_error(GraphQLError::new(
                    format!("There can be only one variable named '${}'.", name),
                    locations,
                ));
            }
        }
        VisitFlow::Next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::harness::*;

    #[test]
    fn unique_variable_names() {
        expect_valid(
            constructor!(UniqueVariableNames),
            "query A($x: Int, $y: String) { __typename } query B($x: String, $y: Int) { __typename }",
        );
    }

    #[test]
    fn duplicate_variable_names() {
        assert_eq!(
            expect_errors(
                constructor!(UniqueVariableNames),
                "query A($x: Int, $x: Int, $x: String) { __typename } query B($y: String, $y: Int) { __typename }",
            ),
            vec![
                error(
                    "There can be only one variable named '$x'.",
                    &[(1, 9), (1, 18), (1, 27)]
                ),
                error(
                    "There can be only one variable named '$y'.",
                    &[(1, 62), (1, 74)]
                ),
            ]
        );
    }
}
