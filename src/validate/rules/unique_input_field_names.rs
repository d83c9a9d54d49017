use bumpalo::{collections::Vec, Bump};

use super::super::{GraphQLError, RuleHandlers, ValidationContext, ValidationRule};
use crate::{ast::*, visit::*};

/// Validates that no input object value contains the same field more than once.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Object-Field-Uniqueness)
pub struct UniqueInputFieldNames<'a> {
    known_fields: Vec<'a, &'a ObjectField<'a>>,
}

impl<'a> DefaultIn<'a> for UniqueInputFieldNames<'a> {
    fn default_in(arena: &'a Bump) -> Self {
        Self {
            known_fields: Vec::new_in(arena),
        }
    }
}

impl<'a> ValidationRule<'a> for UniqueInputFieldNames<'a> {
    fn handlers(&self) -> RuleHandlers {
        RuleHandlers::ENTER_VALUE
    }
}

impl<'a> Visitor<'a, ValidationContext<'a>> for UniqueInputFieldNames<'a> {
    fn enter_value(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        value: &'a Value<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        let object = match value {
            Value::Object(object) => object,
            _ => return VisitFlow::Next,
        };
        self.known_fields.clear();
        for field in object.children.iter() {
            match self.known_fields.iter().find(|known| known.name == field.name) {
                Some(known) => ctx.report_error(GraphQLError::new(
                    format!("There can be only one input field named '{}'.", field.name),
                    [known.loc, field.loc],
                )),
                None => self.known_fields.push(field),
            }
        }
        VisitFlow::Next
    }
}
