use super::super::{GraphQLError, RuleHandlers, ValidationContext, ValidationRule};
use crate::{ast::*, visit::*};

/// Validates that every fragment spread refers to a fragment the document defines.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Fragment-spread-target-defined)
#[derive(Default)]
pub struct KnownFragmentNames;

impl<'a> ValidationRule<'a> for KnownFragmentNames {
    fn handlers(&self) -> RuleHandlers {
        RuleHandlers::ENTER_FRAGMENT_SPREAD
    }
}

impl<'a> Visitor<'a, ValidationContext<'a>> for KnownFragmentNames {
    fn enter_fragment_spread(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        spread: &'a FragmentSpread<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        if ctx.fragment(spread.name.name).is_none() {
            ctx.report_error(GraphQLError::new(
                format!("Unknown fragment '{}'.", spread.name.name),
                [spread.name.loc],
            ));
        }
        VisitFlow::Next
    }
}
