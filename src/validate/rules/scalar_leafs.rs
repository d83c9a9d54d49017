use super::super::{GraphQLError, RuleHandlers, ValidationContext, ValidationRule};
use crate::{ast::*, visit::*};

/// Validates that fields of scalar or enum types don't have selections, while fields of all other
/// types do.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Leaf-Field-Selections)
#[derive(Default)]
pub struct ScalarLeafs;

impl<'a> ValidationRule<'a> for ScalarLeafs {
    fn handlers(&self) -> RuleHandlers {
        RuleHandlers::ENTER_FIELD
    }
}

impl<'a> Visitor<'a, ValidationContext<'a>> for ScalarLeafs {
    fn enter_field(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        field: &'a Field<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        let output_type = match ctx.type_info().output_type() {
            Some(output_type) => output_type,
            None => return VisitFlow::Next,
        };
        let named_type = match output_type.of_type(ctx.schema()) {
            Some(named_type) => named_type,
            None => return VisitFlow::Next,
        };
        if named_type.is_leaf() {
            if !field.selection_set.is_empty() {
                ctx.report_error(GraphQLError::new(
                    format!(
                        "Field '{}' must not have a selection since type '{}' has no subfields.",
                        field.name, output_type
                    ),
                    [field.loc],
                ));
            }
        } else if field.selection_set.is_empty() {
            ctx.report_error(GraphQLError::new(
                format!(
                    "Field '{}' of type '{}' must have a selection of subfields. Did you mean '{} {{ ... }}'?",
                    field.name, output_type, field.name
                ),
                [field.loc],
            ));
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
    fn valid_selections() {
        expect_valid(
            constructor!(ScalarLeafs),
            indoc! {"
                {
                  dog { barks isHouseTrained(atOtherHomes: true) }
                  human { pets { name } relatives { name } }
                  catOrDog { __typename }
                }
            "},
        );
    }

    #[test]
    fn missing_selections() {
        assert_eq!(
            expect_errors(constructor!(ScalarLeafs), "{ dog human(id: 1) { relatives } }"),
            vec![
                error(
                    "Field 'dog' of type 'Dog' must have a selection of subfields. Did you mean 'dog { ... }'?",
                    &[(1, 3)]
                ),
                error(
                    "Field 'relatives' of type '[Human]!' must have a selection of subfields. Did you mean 'relatives { ... }'?",
                    &[(1, 22)]
                ),
            ]
        );
    }

    #[test]
    fn selections_on_leafs() {
        assert_eq!(
            expect_errors(
                constructor!(ScalarLeafs),
                "{ dog { barks { sinceWhen } } cat { furColor { inHexDec } } }",
            ),
            vec![
                error(
                    "Field 'barks' must not have a selection since type 'Boolean' has no subfields.",
                    &[(1, 9)]
                ),
                error(
                    "Field 'furColor' must not have a selection since type 'FurColor' has no subfields.",
                    &[(1, 37)]
                ),
            ]
        );
    }
}
