use bumpalo::{collections::Vec, Bump};

use super::super::{GraphQLError, RuleHandlers, ValidationContext, ValidationRule};
use crate::{ast::*, visit::*};

/// Validates that directives which aren't repeatable are applied at most once to every node.
///
/// Unknown directives are left to [`KnownDirectives`](super::KnownDirectives).
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Directives-Are-Unique-Per-Location)
pub struct UniqueDirectivesPerLocation<'a> {
    seen_directives: Vec<'a, &'a Directive<'a>>,
}

impl<'a> DefaultIn<'a> for UniqueDirectivesPerLocation<'a> {
    fn default_in(arena: &'a Bump) -> Self {
        Self {
            seen_directives: Vec::new_in(arena),
        }
    }
}

impl<'a> UniqueDirectivesPerLocation<'a> {
    fn check_directives(&mut self, ctx: &mut ValidationContext<'a>, directives: &'a Directives<'a>) {
        self.seen_directives.clear();
        for directive in directives.children.iter() {
            let is_unique = ctx
                .schema()
                .get_directive(directive.name)
                .map_or(false, |definition| !definition.is_repeatable);
            if !is_unique {
                continue;
            }
            match self
                .seen_directives
                .iter()
                .find(|seen| seen.name == directive.name)
            {
                Some(seen) => ctx.report_error(GraphQLError::new(
                    format!(
                        "The directive '@{}' can only be used once at this location.",
                        directive.name
                    ),
                    [seen.loc, directive.loc],
                )),
                None => self.seen_directives.push(directive),
            }
        }
    }
}

impl<'a> ValidationRule<'a> for UniqueDirectivesPerLocation<'a> {
    fn handlers(&self) -> RuleHandlers {
        RuleHandlers::ENTER_OPERATION
            | RuleHandlers::ENTER_VARIABLE_DEFINITION
            | RuleHandlers::ENTER_FIELD
            | RuleHandlers::ENTER_FRAGMENT_SPREAD
            | RuleHandlers::ENTER_INLINE_FRAGMENT
            | RuleHandlers::ENTER_FRAGMENT
    }
}

impl<'a> Visitor<'a, ValidationContext<'a>> for UniqueDirectivesPerLocation<'a> {
    fn enter_operation(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        operation: &'a OperationDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        self.check_directives(ctx, &operation.directives);
        VisitFlow::Next
    }

    fn enter_variable_definition(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        var_def: &'a VariableDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        self.check_directives(ctx, &var_def.directives);
        VisitFlow::Next
    }

    fn enter_field(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        field: &'a Field<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        self.check_directives(ctx, &field.directives);
        VisitFlow::Next
    }

    fn enter_fragment_spread(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        spread: &'a FragmentSpread<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        self.check_directives(ctx, &spread.directives);
        VisitFlow::Next
    }

    fn enter_inline_fragment(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        fragment: &'a InlineFragment<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        self.check_directives(ctx, &fragment.directives);
        VisitFlow::Next
    }

    fn enter_fragment(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        fragment: &'a FragmentDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        self.check_directives(ctx, &fragment.directives);
        VisitFlow::Next
    }
}
