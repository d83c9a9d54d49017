use super::super::suggestions::{did_you_mean, suggestion_list};
use super::super::{ArgumentOwner, GraphQLError, RuleHandlers, ValidationContext, ValidationRule};
use crate::{ast::*, visit::*};

/// Validates that every argument passed to a field or directive is defined by it.
///
/// Arguments of unknown fields and directives are ignored.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Argument-Names)
#[derive(Default)]
pub struct KnownArgumentNames;

impl<'a> ValidationRule<'a> for KnownArgumentNames {
    fn handlers(&self) -> RuleHandlers {
        RuleHandlers::ENTER_ARGUMENT
    }
}

impl<'a> Visitor<'a, ValidationContext<'a>> for KnownArgumentNames {
    fn enter_argument(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        argument: &'a Argument<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        let type_info = ctx.type_info();
        if type_info.argument().is_some() {
            return VisitFlow::Next;
        }
        let message = match type_info.argument_owner() {
            Some(ArgumentOwner::Field(field_def)) => {
                let parent_type = match type_info.parent_type() {
                    Some(parent_type) => parent_type,
                    None => return VisitFlow::Next,
                };
                let suggestions =
                    suggestion_list(argument.name, field_def.arguments.keys().copied());
                format!(
                    "Unknown argument '{}' on field '{}.{}'.{}",
                    argument.name,
                    parent_type.name(),
                    field_def.name,
                    did_you_mean(None, &suggestions)
                )
            }
            Some(ArgumentOwner::Directive(directive)) => {
                let suggestions =
                    suggestion_list(argument.name, directive.arguments.keys().copied());
                format!(
                    "Unknown argument '{}' on directive '@{}'.{}",
                    argument.name,
                    directive.name,
                    did_you_mean(None, &suggestions)
                )
            }
            None => return VisitFlow::Next,
        };
        ctx.report_error(GraphQLError::new(message, [argument.loc]));
        VisitFlow::Next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::harness::*;

    #[test]
    fn known_arguments() {
        expect_valid(
            constructor!(KnownArgumentNames),
            "{ dog { doesKnowCommand(dogCommand: SIT) isHouseTrained(atOtherHomes: true) name @skip(if: true) } }",
        );
        expect_valid(
            constructor!(KnownArgumentNames),
            "{ __type(name: \"Dog\") { name } dog { ... on Dog { name(surname: true) } } }",
        );
    }

    #[test]
    fn ignores_unknown_owners() {
        expect_valid(
            constructor!(KnownArgumentNames),
            "{ dog { unknownField(unknownArg: 1) } cat @unknown(arg: 1) { name(surname: true) } }",
        );
        expect_valid(
            constructor!(KnownArgumentNames),
            "{ dog { name(surname: true) @unknown(surname: false) } }",
        );
    }

    #[test]
    fn unknown_field_arguments() {
        assert_eq!(
            expect_errors(
                constructor!(KnownArgumentNames),
                "{ dog { doesKnowCommand(dogcommand: SIT) isHouseTrained(unknown: true) } }",
            ),
            vec![
                error(
                    "Unknown argument 'dogcommand' on field 'Dog.doesKnowCommand'. Did you mean 'dogCommand'?",
                    &[(1, 25)]
                ),
                error(
                    "Unknown argument 'unknown' on field 'Dog.isHouseTrained'.",
                    &[(1, 57)]
                ),
            ]
        );
    }

    #[test]
    fn unknown_directive_arguments() {
        assert_eq!(
            expect_errors(
                constructor!(KnownArgumentNames),
                "{ dog @skip(iff: true) { name } __type(name: \"Dog\", other: 1) { name } }",
            ),
            vec![
                error(
                    "Unknown argument 'iff' on directive '@skip'. Did you mean 'if'?",
                    &[(1, 13)]
                ),
                error(
                    "Unknown argument 'other' on field 'QueryRoot.__type'.",
                    &[(1, 53)]
                ),
            ]
        );
    }
}
