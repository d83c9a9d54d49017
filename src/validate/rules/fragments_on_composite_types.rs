use super::super::{GraphQLError, RuleHandlers, ValidationContext, ValidationRule};
use crate::{ast::*, visit::*};

/// Validates that fragments only condition on union, interface, or object types.
///
/// Unknown types are left to [`KnownTypeNames`](super::KnownTypeNames).
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Fragments-On-Composite-Types)
#[derive(Default)]
pub struct FragmentsOnCompositeTypes;

fn is_non_composite(ctx: &ValidationContext, type_condition: &NamedType) -> bool {
    ctx.schema()
        .get_type(type_condition.name)
        .map_or(false, |schema_type| !schema_type.is_composite())
}

impl<'a> ValidationRule<'a> for FragmentsOnCompositeTypes {
    fn handlers(&self) -> RuleHandlers {
        RuleHandlers::ENTER_FRAGMENT | RuleHandlers::ENTER_INLINE_FRAGMENT
    }
}

impl<'a> Visitor<'a, ValidationContext<'a>> for FragmentsOnCompositeTypes {
    fn enter_fragment(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        fragment: &'a FragmentDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        let type_condition = &fragment.type_condition;
        if is_non_composite(ctx, type_condition) {
            ctx.report_error(GraphQLError::new(
                format!(
                    "Fragment '{}' cannot condition on non composite type '{}'.",
                    fragment.name.name, type_condition.name
                ),
                [type_condition.loc],
            ));
        }
        VisitFlow::Next
    }

    fn enter_inline_fragment(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        fragment: &'a InlineFragment<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        if let Some(ref type_condition) = fragment.type_condition {
            if is_non_composite(ctx, type_condition) {
                ctx.report_error(GraphQLError::new(
                    format!(
                        "Fragment cannot condition on non composite type '{}'.",
                        type_condition.name
                    ),
                    [type_condition.loc],
                ));
            }
        }
        VisitFlow::Next
    }
}
