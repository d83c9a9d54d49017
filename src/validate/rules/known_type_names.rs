use super::super::suggestions::{did_you_mean, suggestion_list};
use super::super::{GraphQLError, RuleHandlers, ValidationContext, ValidationRule};
use crate::{ast::*, visit::*};

/// Validates that all types referenced by variable definitions and type conditions are defined
/// by the schema.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Fragment-Spread-Type-Existence)
#[derive(Default)]
pub struct KnownTypeNames;

impl KnownTypeNames {
    fn check_type<'a>(&self, ctx: &mut ValidationContext<'a>, named_type: &'a NamedType<'a>) {
        let schema = ctx.schema();
        if schema.get_type(named_type.name).is_none() {
            let type_names = schema.type_names();
            let suggestions = suggestion_list(named_type.name, type_names);
            ctx.report_error(GraphQLError::new(
                format!(
                    "Unknown type '{}'.{}",
                    named_type.name,
                    did_you_mean(None, &suggestions)
                ),
                [named_type.loc],
            ));
        }
    }
}

impl<'a> ValidationRule<'a> for KnownTypeNames {
    fn handlers(&self) -> RuleHandlers {
        RuleHandlers::ENTER_VARIABLE_DEFINITION
            | RuleHandlers::ENTER_FRAGMENT
            | RuleHandlers::ENTER_INLINE_FRAGMENT
    }
}

impl<'a> Visitor<'a, ValidationContext<'a>> for KnownTypeNames {
    fn enter_variable_definition(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        var_def: &'a VariableDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        self.check_type(ctx, var_def.of_type.of_type());
        VisitFlow::Next
    }

    fn enter_fragment(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        fragment: &'a FragmentDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        self.check_type(ctx, &fragment.type_condition);
        VisitFlow::Next
    }

    fn enter_inline_fragment(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        fragment: &'a InlineFragment<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        if let Some(ref type_condition) = fragment.type_condition {
            self.check_type(ctx, type_condition);
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
    fn known_type_names() {
        expect_valid(
            constructor!(KnownTypeNames),
            indoc! {"
                query Foo($var: String, $required: [Int!]!, $complex: ComplexInput) {
                  pet { ... on Dog { name } ...PetFields ... { name } }
                }
                fragment PetFields on Pet { name }
            "},
        );
    }

    #[test]
    fn unknown_type_names() {
        assert_eq!(
            expect_errors(
                constructor!(KnownTypeNames),
                indoc! {"
                    query Foo($var: [JumbledUpLetters!]!) {
                      pet { ... on Badger { name } ...PetFields }
                    }
                    fragment PetFields on Peat { name }
                "}
            ),
            vec![
                error("Unknown type 'JumbledUpLetters'.", &[(1, 18)]),
                error("Unknown type 'Badger'.", &[(2, 16)]),
                error("Unknown type 'Peat'. Did you mean 'Pet' or 'Cat'?", &[(4, 23)]),
            ]
        );
    }
}
