use super::super::{GraphQLError, RuleHandlers, ValidationContext, ValidationRule};
use crate::{ast::*, visit::*};

/// Validates that variables are only defined with scalar, enum, or input object types.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Variables-Are-Input-Types)
#[derive(Default)]
pub struct VariablesAreInputTypes;

impl<'a> ValidationRule<'a> for VariablesAreInputTypes {
    fn handlers(&self) -> RuleHandlers {
        RuleHandlers::ENTER_VARIABLE_DEFINITION
    }
}

impl<'a> Visitor<'a, ValidationContext<'a>> for VariablesAreInputTypes {
    fn enter_variable_definition(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        var_def: &'a VariableDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        let named_type = var_def.of_type.of_type();
        let is_output_only = ctx
            .schema()
            .get_type(named_type.name)
            .map_or(false, |schema_type| schema_type.input_type().is_none());
        if is_output_only {
            ctx.report_error(GraphQLError::new(
                format!(
                    "Variable '${}' cannot be non-input type '{}'.",
                    var_def.variable.name,
                    var_def.of_type.print()
                ),
                [named_type.loc],
            ));
        }
        VisitFlow::Next
    }
}
