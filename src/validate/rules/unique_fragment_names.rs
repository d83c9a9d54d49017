use bumpalo::Bump;
use hashbrown::{hash_map::DefaultHashBuilder, HashMap};

use super::super::{GraphQLError, RuleHandlers, ValidationContext, ValidationRule};
use crate::{ast::*, error::Location, visit::*};

/// Validates that no fragments the document defines have duplicate names.
/// Note: Operations and Fragments are allowed to share names.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Fragment-Name-Uniqueness)
pub struct UniqueFragmentNames<'a> {
    known_fragment_names: HashMap<&'a str, Option<Location>, DefaultHashBuilder, &'a Bump>,
}

impl<'a> DefaultIn<'a> for UniqueFragmentNames<'a> {
    fn default_in(arena: &'a Bump) -> Self {
        Self {
            known_fragment_names: HashMap::new_in(arena),
        }
    }
}

impl<'a> ValidationRule<'a> for UniqueFragmentNames<'a> {
    fn handlers(&self) -> RuleHandlers {
        RuleHandlers::ENTER_FRAGMENT
    }
}

impl<'a> Visitor<'a, ValidationContext<'a>> for UniqueFragmentNames<'a> {
    fn enter_fragment(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        fragment: &'a FragmentDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        let name = &fragment.name;
        match self.known_fragment_names.get(name.name) {
            Some(first) => ctx.report_error(GraphQLError::new(
                format!("There can be only one fragment named '{}'.", name.name),
                [*first, name.loc],
            )),
            None => {
                self.known_fragment_names.insert(name.name, name.loc);
            }
        }
        VisitFlow::Next
    }
}
