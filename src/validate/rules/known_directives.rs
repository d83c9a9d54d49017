use super::super::{GraphQLError, RuleHandlers, ValidationContext, ValidationRule};
use crate::schema::DirectiveLocation;
use crate::{ast::*, visit::*};

/// Validates that all directives are defined by the schema and are applied at locations that
/// their definitions allow.
///
/// Directives are checked when the node they're applied to is entered.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Directives-Are-Defined)
#[derive(Default)]
pub struct KnownDirectives;

fn check_directives<'a>(
    ctx: &mut ValidationContext<'a>,
    directives: &'a Directives<'a>,
    location: DirectiveLocation,
) {
    for directive in directives.children.iter() {
        match ctx.schema().get_directive(directive.name) {
            None => ctx.report_error(GraphQLError::new(
                format!("Unknown directive '@{}'.", directive.name),
                [directive.loc],
            )),
            Some(definition) if !definition.is_allowed_at(location) => {
                ctx.report_error(GraphQLError::new(
                    format!(
                        "Directive '@{}' may not be used on {}.",
                        directive.name, location
                    ),
                    [directive.loc],
                ))
            }
            Some(_) => {}
        }
    }
}

fn operation_location(operation: OperationKind) -> DirectiveLocation {
    match operation {
        OperationKind::Query => DirectiveLocation::Query,
        OperationKind::Mutation => DirectiveLocation::Mutation,
        OperationKind::Subscription => DirectiveLocation::Subscription,
    }
}

impl<'a> ValidationRule<'a> for KnownDirectives {
    fn handlers(&self) -> RuleHandlers {
        RuleHandlers::ENTER_OPERATION
            | RuleHandlers::ENTER_VARIABLE_DEFINITION
            | RuleHandlers::ENTER_FIELD
            | RuleHandlers::ENTER_FRAGMENT_SPREAD
            | RuleHandlers::ENTER_INLINE_FRAGMENT
            | RuleHandlers::ENTER_FRAGMENT
    }
}

impl<'a> Visitor<'a, ValidationContext<'a>> for KnownDirectives {
    fn enter_operation(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        operation: &'a OperationDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        let location = operation_location(operation.operation);
        check_directives(ctx, &operation.directives, location);
        VisitFlow::Next
    }

    fn enter_variable_definition(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        var_def: &'a VariableDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        check_directives(ctx, &var_def.directives, DirectiveLocation::VariableDefinition);
        VisitFlow::Next
    }

    fn enter_field(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        field: &'a Field<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        check_directives(ctx, &field.directives, DirectiveLocation::Field);
        VisitFlow::Next
    }

    fn enter_fragment_spread(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        spread: &'a FragmentSpread<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        check_directives(ctx, &spread.directives, DirectiveLocation::FragmentSpread);
        VisitFlow::Next
    }

    fn enter_inline_fragment(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        fragment: &'a InlineFragment<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        check_directives(ctx, &fragment.directives, DirectiveLocation::InlineFragment);
        VisitFlow::Next
    }

    fn enter_fragment(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        fragment: &'a FragmentDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        check_directives(ctx, &fragment.directives, DirectiveLocation::FragmentDefinition);
        VisitFlow::Next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::harness::*;
    use indoc::indoc;

    #[test]
    fn known_directives() {
        expect_valid(
            constructor!(KnownDirectives),
            "{ dog @include(if: true) { name } human @skip(if: false) { name } }",
        );
        expect_valid(
            constructor!(KnownDirectives),
            indoc! {"
                query Foo($var: Boolean @onVariableDefinition) @onQuery {
                  dog @onField {
                    ...Frag @onFragmentSpread
                    ... @onInlineFragment { name }
                  }
                }
                mutation Bar @onMutation { setName(name: \"x\") { name } }
                fragment Frag on Dog @onFragmentDefinition { name }
            "},
        );
    }

    #[test]
    fn unknown_directives() {
        assert_eq!(
            expect_errors(
                constructor!(KnownDirectives),
                "{ dog @unknown(directive: \"value\") { name } human @skip(if: true) @ski { name } }",
            ),
            vec![
                error("Unknown directive '@unknown'.", &[(1, 7)]),
                error("Unknown directive '@ski'.", &[(1, 67)]),
            ]
        );
    }

    #[test]
    fn misplaced_directives() {
        assert_eq!(
            expect_errors(
                constructor!(KnownDirectives),
                indoc! {"
                    query Foo($var: Boolean @onQuery) @onField {
                      name @onQuery
                      ...Frag @onField
                    }
                    fragment Frag on Dog @onQuery { name }
                "}
            ),
            vec![
                error("Directive '@onField' may not be used on QUERY.", &[(1, 35)]),
                error(
                    "Directive '@onQuery' may not be used on VARIABLE_DEFINITION.",
                    &[(1, 25)]
                ),
                error("Directive '@onQuery' may not be used on FIELD.", &[(2, 8)]),
                error(
                    "Directive '@onField' may not be used on FRAGMENT_SPREAD.",
                    &[(3, 11)]
                ),
                error(
                    "Directive '@onQuery' may not be used on FRAGMENT_DEFINITION.",
                    &[(5, 22)]
                ),
            ]
        );
    }
}
