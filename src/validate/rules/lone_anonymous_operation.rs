use super::super::{GraphQLError, RuleHandlers, ValidationContext, ValidationRule};
use crate::{ast::*, visit::*};

/// Validate a document to only contain one anonymous operation or multiple named operations.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Lone-Anonymous-Operation)
#[derive(Default)]
pub struct LoneAnonymousOperation {
    operations: usize,
}

impl<'a> ValidationRule<'a> for LoneAnonymousOperation {
    fn handlers(&self) -> RuleHandlers {
        RuleHandlers::ENTER_DOCUMENT | RuleHandlers::ENTER_OPERATION
    }
}

impl<'a> Visitor<'a, ValidationContext<'a>> for LoneAnonymousOperation {
    fn enter_document(
        &mut self,
        _ctx: &mut ValidationContext<'a>,
        document: &'a Document<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        self.operations = document.operations().count();
        VisitFlow::Next
    }

    fn enter_operation(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        operation: &'a OperationDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        if operation.name.is_none() && self.operations > 1 {
            ctx.report_error(GraphQLError::new(
                "This anonymous operation must be the only defined operation.",
                [operation.loc],
            ));
        }
        VisitFlow::Next
    }
}
