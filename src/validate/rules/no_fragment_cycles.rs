use bumpalo::{collections::Vec, Bump};
use hashbrown::{hash_map::DefaultHashBuilder, HashMap, HashSet};

use super::super::{GraphQLError, RuleHandlers, ValidationContext, ValidationRule};
use crate::{ast::*, visit::*};

/// Validate that a document does not contain fragments that are spread within themselves, creating a loop.
///
/// Each cycle is reported once, at the spreads that form it, starting from the fragment that's
/// defined first.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Fragment-spreads-must-not-form-cycles)
pub struct NoFragmentCycles<'a> {
    visited_fragments: HashSet<&'a str, DefaultHashBuilder, &'a Bump>,
    spread_path: Vec<'a, &'a FragmentSpread<'a>>,
    spread_path_index: HashMap<&'a str, usize, DefaultHashBuilder, &'a Bump>,
}

impl<'a> DefaultIn<'a> for NoFragmentCycles<'a> {
    fn default_in(arena: &'a Bump) -> Self {
        Self {
            visited_fragments: HashSet::new_in(arena),
            spread_path: Vec::new_in(arena),
            spread_path_index: HashMap::new_in(arena),
        }
    }
}

impl<'a> NoFragmentCycles<'a> {
    fn detect_cycles(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        fragment: &'a FragmentDefinition<'a>,
    ) {
        let name = fragment.name.name;
        if !self.visited_fragments.insert(name) {
            return;
        }
        let spreads = ctx.fragment_spreads(&fragment.selection_set);
        if spreads.is_empty() {
            return;
        }

        self.spread_path_index.insert(name, self.spread_path.len());
        for spread in spreads {
            let spread_name = spread.name.name;
            let cycle_index = self.spread_path_index.get(spread_name).copied();
            self.spread_path.push(spread);
            match cycle_index {
                None => {
                    if let Some(spread_fragment) = ctx.fragment(spread_name) {
                        self.detect_cycles(ctx, spread_fragment);
                    }
                }
                Some(cycle_index) => {
                    let cycle_path = &self.spread_path[cycle_index..];
                    let via_path = cycle_path[..cycle_path.len() - 1]
                        .iter()
                        .map(|spread| format!("'{}'", spread.name.name))
                        .collect::<std::vec::Vec<_>>();
                    let message = if via_path.is_empty() {
                        format!("Cannot spread fragment '{}' within itself.", spread_name)
                    } else {
                        format!(
                            "Cannot spread fragment '{}' within itself via {}.",
                            spread_name,
                            via_path.join(", ")
                        )
                    };
                    ctx.report_error(GraphQLError::new(
                        message,
                        cycle_path.iter().map(|spread| spread.loc),
                    ));
                }
            }
            self.spread_path.pop();
        }
        self.spread_path_index.remove(name);
    }
}

impl<'a> ValidationRule<'a> for NoFragmentCycles<'a> {
    fn handlers(&self) -> RuleHandlers {
        RuleHandlers::ENTER_FRAGMENT
    }
}

impl<'a> Visitor<'a, ValidationContext<'a>> for NoFragmentCycles<'a> {
    fn enter_fragment(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        fragment: &'a FragmentDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        self.detect_cycles(ctx, fragment);
        VisitFlow::Next
    }
}
