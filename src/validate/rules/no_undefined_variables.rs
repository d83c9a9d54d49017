use super::super::{GraphQLError, RuleHandlers, ValidationContext, ValidationRule};
use crate::{ast::*, visit::*};

/// Validate that a document defines all the variables it uses per operation
///
/// Variables that are used in fragments are checked against every operation that spreads them.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-All-Variable-Uses-Defined)
#[derive(Default)]
pub struct NoUndefinedVariables;

impl<'a> ValidationRule<'a> for NoUndefinedVariables {
    fn handlers(&self) -> RuleHandlers {
        RuleHandlers::LEAVE_OPERATION
    }
}

impl<'a> Visitor<'a, ValidationContext<'a>> for NoUndefinedVariables {
    fn leave_operation(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        operation: &'a OperationDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        let var_defs = &operation.variable_definitions.children;
        for usage in ctx.recursive_variable_usages(operation) {
            let is_defined = var_defs
                .iter()
                .any(|var_def| var_def.variable.name == usage.name);
            if is_defined {
                continue;
            }
            let message = match operation.name {
                Some(ref name) => format!(
                    "Variable '${}' is not defined by operation '{}'.",
                    usage.name, name.name
                ),
                None => format!("Variable '${}' is not defined.", usage.name),
            };
            ctx.report_error(GraphQLError::new(message, [usage.loc, operation.loc]));
        }
        VisitFlow::Next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::harness::*;
    use indoc::indoc;

    #[test]
    fn all_variables_defined() {
        expect_valid(
            constructor!(NoUndefinedVariables),
            indoc! {"
                query Foo($a: String, $b: String, $c: String) {
                  field(a: $a) { field(b: [$b, { c: $c }]) @tag(name: $a) }
                  ...FragA
                }
                fragment FragA on Type { field(a: $a) { ...FragB } }
                fragment FragB on Type { field(c: $c) }
            "},
        );
    }

    #[test]
    fn undefined_variables() {
        assert_eq!(
            expect_errors(
                constructor!(NoUndefinedVariables),
                "query Foo($a: String) { field(a: $a, b: $b) { field(c: $c, d: $b) } }",
            ),
            vec![
                error(
                    "Variable '$b' is not defined by operation 'Foo'.",
                    &[(1, 41), (1, 1)]
                ),
                error(
                    "Variable '$c' is not defined by operation 'Foo'.",
                    &[(1, 56), (1, 1)]
                ),
                error(
                    "Variable '$b' is not defined by operation 'Foo'.",
                    &[(1, 63), (1, 1)]
                ),
            ]
        );
        assert_eq!(
            expect_errors(constructor!(NoUndefinedVariables), "{ field(a: $a) }"),
            vec![error("Variable '$a' is not defined.", &[(1, 12), (1, 1)])]
        );
    }

    #[test]
    fn undefined_variables_in_fragments() {
        assert_eq!(
            expect_errors(
                constructor!(NoUndefinedVariables),
                indoc! {"
                    query Foo($a: String) { ...FragA }
                    query Bar($b: String) { ...FragA }
                    fragment FragA on Type { field(a: $a, b: $b) }
                "}
            ),
            vec![
                error(
                    "Variable '$b' is not defined by operation 'Foo'.",
                    &[(3, 42), (1, 1)]
                ),
                error(
                    "Variable '$a' is not defined by operation 'Bar'.",
                    &[(3, 35), (2, 1)]
                ),
            ]
        );
    }
}
