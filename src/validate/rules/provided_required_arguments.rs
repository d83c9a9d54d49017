use hashbrown::{hash_map::DefaultHashBuilder, HashMap};

use super::super::{GraphQLError, RuleHandlers, ValidationContext, ValidationRule};
use crate::schema::SchemaInputField;
use crate::{ast::*, error::Location, visit::*};

/// Validates that all arguments of non-null types without default values are passed to fields
/// and directives.
///
/// Missing arguments are reported in alphabetical order. An explicit `null` counts as passed and
/// is left to [`ValuesOfCorrectType`](super::ValuesOfCorrectType).
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Required-Arguments)
#[derive(Default)]
pub struct ProvidedRequiredArguments;

/// Returns the required argument definitions that are missing from `arguments`, by name.
fn missing_arguments<'a, 'b>(
    definitions: &'b HashMap<&'a str, SchemaInputField<'a>, DefaultHashBuilder, &'a bumpalo::Bump>,
    arguments: &Arguments<'a>,
) -> Vec<&'b SchemaInputField<'a>> {
    let mut missing: Vec<&'b SchemaInputField<'a>> = definitions
        .values()
        .filter(|definition| definition.is_required())
        .filter(|definition| {
            !arguments
                .children
                .iter()
                .any(|argument| argument.name == definition.name)
        })
        .collect();
    missing.sort_by_key(|definition| definition.name);
    missing
}

fn report_missing<'a>(
    ctx: &mut ValidationContext<'a>,
    owner: &str,
    missing: Vec<&SchemaInputField<'a>>,
    loc: Option<Location>,
) {
    for definition in missing {
        ctx.report_error(GraphQLError::new(
            format!(
                "{} argument '{}' of type '{}' is required, but it was not provided.",
                owner, definition.name, definition.input_type
            ),
            [loc],
        ));
    }
}

impl<'a> ValidationRule<'a> for ProvidedRequiredArguments {
    fn handlers(&self) -> RuleHandlers {
        RuleHandlers::ENTER_FIELD | RuleHandlers::ENTER_DIRECTIVE
    }
}

impl<'a> Visitor<'a, ValidationContext<'a>> for ProvidedRequiredArguments {
    fn enter_field(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        field: &'a Field<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        if let Some(field_def) = ctx.type_info().field_def() {
            let missing = missing_arguments(&field_def.arguments, &field.arguments);
            let owner = format!("Field '{}'", field_def.name);
            report_missing(ctx, &owner, missing, field.loc);
        }
        VisitFlow::Next
    }

    fn enter_directive(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        directive: &'a Directive<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        if let Some(definition) = ctx.type_info().directive() {
            let missing = missing_arguments(&definition.arguments, &directive.arguments);
            let owner = format!("Directive '@{}'", definition.name);
            report_missing(ctx, &owner, missing, directive.loc);
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
    fn provided_arguments() {
        expect_valid(
            constructor!(ProvidedRequiredArguments),
            indoc! {"
                {
                  complicatedArgs {
                    multipleReqs(req1: 1, req2: 2)
                    nonNullFieldWithDefault
                    multipleOpts
                    multipleOptAndReq(req2: 1, req1: 2)
                    nonNullIntArgField(nonNullIntArg: null)
                  }
                  dog @include(if: true) { isHouseTrained unknown(arg: 1) }
                }
            "},
        );
    }

    #[test]
    fn missing_field_arguments() {
        assert_eq!(
            expect_errors(
                constructor!(ProvidedRequiredArguments),
                "{ complicatedArgs { multipleReqs(req2: 2) multipleOptAndReq } }",
            ),
            vec![
                error(
                    "Field 'multipleReqs' argument 'req1' of type 'Int!' is required, but it was not provided.",
                    &[(1, 21)]
                ),
                error(
                    "Field 'multipleOptAndReq' argument 'req1' of type 'Int!' is required, but it was not provided.",
                    &[(1, 43)]
                ),
                error(
                    "Field 'multipleOptAndReq' argument 'req2' of type 'Int!' is required, but it was not provided.",
                    &[(1, 43)]
                ),
            ]
        );
    }

    #[test]
    fn missing_directive_arguments() {
        assert_eq!(
            expect_errors(
                constructor!(ProvidedRequiredArguments),
                "{ dog @include { name @skip } }",
            ),
            vec![
                error(
                    "Directive '@include' argument 'if' of type 'Boolean!' is required, but it was not provided.",
                    &[(1, 7)]
                ),
                error(
                    "Directive '@skip' argument 'if' of type 'Boolean!' is required, but it was not provided.",
                    &[(1, 23)]
                ),
            ]
        );
    }
}
