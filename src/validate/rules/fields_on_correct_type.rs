use std::cmp::Ordering;

use super::super::suggestions::{did_you_mean, suggestion_list};
use super::super::{GraphQLError, RuleHandlers, ValidationContext, ValidationRule};
use crate::schema::{Schema, SchemaFields, SchemaInterfaces, SchemaType};
use crate::{ast::*, visit::*};

/// Validates that all selected fields are defined on the type they're selected on.
///
/// Fields of abstract types that only some of the possible types define are suggested as inline
/// fragments, and otherwise fields with similar names are suggested.
///
/// See [`ValidationRule`]
/// [Reference](https://spec.graphql.org/October2021/#sec-Field-Selections)
#[derive(Default)]
pub struct FieldsOnCorrectType;

/// Returns the types that define `field_name` and that may be returned in place of an abstract
/// `parent_type`, with the types that cover most possible types first.
fn suggested_type_names<'a>(
    schema: &Schema<'a>,
    parent_type: SchemaType<'a>,
    field_name: &str,
) -> Vec<&'a str> {
    if !parent_type.is_abstract() {
        return Vec::new();
    }

    let mut suggested_types: Vec<(SchemaType<'a>, usize)> = Vec::new();
    for possible_type in schema.possible_types(parent_type) {
        if possible_type.get_field(field_name).is_none() {
            continue;
        }
        suggested_types.push((SchemaType::Object(possible_type), 1));
        for interface_name in possible_type.get_interfaces() {
            let interface = match schema.get_type(interface_name) {
                Some(&SchemaType::Interface(interface)) => interface,
                _ => continue,
            };
            if interface.get_field(field_name).is_none() {
                continue;
            }
            match suggested_types
                .iter_mut()
                .find(|(suggested, _)| suggested.name() == interface.name)
            {
                Some((_, usage_count)) => *usage_count += 1,
                None => suggested_types.push((SchemaType::Interface(interface), 1)),
            }
        }
    }

    suggested_types.sort_by(|(type_a, count_a), (type_b, count_b)| {
        count_b.cmp(count_a).then_with(|| {
            if type_a.interface().is_some() && schema.is_sub_type(*type_a, *type_b) {
                Ordering::Less
            } else if type_b.interface().is_some() && schema.is_sub_type(*type_b, *type_a) {
                Ordering::Greater
            } else {
                type_a.name().cmp(type_b.name())
            }
        })
    });
    suggested_types
        .into_iter()
        .map(|(suggested, _)| suggested.name())
        .collect()
}

fn suggested_field_names<'a>(parent_type: SchemaType<'a>, field_name: &str) -> Vec<&'a str> {
    match parent_type.fields() {
        Some(fields) => suggestion_list(field_name, fields.keys().copied()),
        None => Vec::new(),
    }
}

impl<'a> ValidationRule<'a> for FieldsOnCorrectType {
    fn handlers(&self) -> RuleHandlers {
        RuleHandlers::ENTER_FIELD
    }
}

impl<'a> Visitor<'a, ValidationContext<'a>> for FieldsOnCorrectType {
    fn enter_field(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        field: &'a Field<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        let type_info = ctx.type_info();
        let parent_type = match (type_info.parent_type(), type_info.field_def()) {
            (Some(parent_type), None) => parent_type,
            _ => return VisitFlow::Next,
        };

        let type_names = suggested_type_names(ctx.schema(), parent_type, field.name);
        let mut suggestion = did_you_mean(Some("to use an inline fragment on"), &type_names);
        if suggestion.is_empty() {
            let field_names = suggested_field_names(parent_type, field.name);
            suggestion = did_you_mean(None, &field_names);
        }

        ctx.report_error(GraphQLError::new(
            format!(
                "Cannot query field '{}' on type '{}'.{}",
                field.name,
                parent_type.name(),
                suggestion
            ),
            [field.loc],
        ));
        VisitFlow::Next
    }
}
