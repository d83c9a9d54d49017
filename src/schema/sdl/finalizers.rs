use super::error::{validation, SchemaError};
use super::parse_ast::*;
use super::parser::ParseResult;
use crate::ast::{ASTContext, DefaultIn, OperationKind};
use crate::schema::builtins::{builtin_scalar_parser, BUILTIN_SCALARS};
use crate::schema::{
    Schema, SchemaDirective, SchemaField, SchemaInputField, SchemaInterfaces, SchemaPossibleTypes,
    SchemaScalar, SchemaType,
};

/// Turns the definitions of a schema source text into a [Schema].
///
/// Types may reference each other in any order, since [TypeRef](crate::schema::TypeRef)s are only
/// resolved by name. Hence all types are added first and references are checked afterwards.
pub(super) fn build_schema<'a>(
    ctx: &'a ASTContext,
    document: SchemaDocument<'a>,
    builtin_directives: std::vec::Vec<SchemaDirective<'a>>,
) -> ParseResult<Schema<'a>> {
    let SchemaDocument {
        schema_definition,
        mut types,
        directives,
    } = document;

    link_interfaces(ctx, &mut types);

    let mut schema = Schema::default_in(&ctx.arena);
    for type_def in types.into_iter() {
        schema.add_type(ctx, allocate_type(ctx, type_def));
    }
    for name in BUILTIN_SCALARS {
        if schema.get_type(name).is_none() {
            let scalar = SchemaScalar {
                name,
                parse_literal: builtin_scalar_parser(name),
            };
            schema.add_type(ctx, SchemaType::Scalar(ctx.alloc(scalar)));
        }
    }

    for directive in directives.into_iter() {
        schema.add_directive(ctx, directive);
    }
    for directive in builtin_directives.into_iter() {
        if schema.get_directive(directive.name).is_none() {
            schema.add_directive(ctx, directive);
        }
    }

    check_references(&schema)?;
    set_root_types(&mut schema, schema_definition)?;

    tracing::debug!(
        types = schema.types.len(),
        directives = schema.directives.len(),
        "loaded schema from SDL"
    );
    Ok(schema)
}

/// Records on every interface which objects and interfaces implement it, in definition order.
fn link_interfaces<'a>(ctx: &'a ASTContext, types: &mut [TypeDefinition<'a>]) {
    let mut links = std::vec::Vec::new();
    for type_def in types.iter() {
        match type_def {
            TypeDefinition::Object(object) => links.extend(
                object
                    .get_interfaces()
                    .iter()
                    .map(|interface| (*interface, object.name, true)),
            ),
            TypeDefinition::Interface(implementor) => links.extend(
                implementor
                    .get_interfaces()
                    .iter()
                    .map(|interface| (*interface, implementor.name, false)),
            ),
            _ => (),
        }
    }

    for (interface_name, implementor, is_object) in links {
        for type_def in types.iter_mut() {
            if let TypeDefinition::Interface(interface) = type_def {
                if interface.name == interface_name {
                    if is_object {
                        interface.add_possible_type(ctx, implementor);
                    } else {
                        interface.add_possible_interface(ctx, implementor);
                    }
                }
            }
        }
    }
}

fn allocate_type<'a>(ctx: &'a ASTContext, type_def: TypeDefinition<'a>) -> SchemaType<'a> {
    match type_def {
        TypeDefinition::Object(x) => SchemaType::Object(ctx.alloc(x)),
        TypeDefinition::Interface(x) => SchemaType::Interface(ctx.alloc(x)),
        TypeDefinition::Union(x) => SchemaType::Union(ctx.alloc(x)),
        TypeDefinition::Enum(x) => SchemaType::Enum(ctx.alloc(x)),
        TypeDefinition::InputObject(x) => SchemaType::InputObject(ctx.alloc(x)),
        TypeDefinition::Scalar(mut x) => {
            if x.parse_literal.is_none() {
                x.parse_literal = builtin_scalar_parser(x.name);
            }
            SchemaType::Scalar(ctx.alloc(x))
        }
    }
}

fn sorted_fields<'a, 'b>(
    fields: impl Iterator<Item = (&'b &'a str, &'b &'a SchemaField<'a>)>,
) -> std::vec::Vec<&'a SchemaField<'a>>
where
    'a: 'b,
{
    let mut fields: std::vec::Vec<_> = fields.map(|(_, field)| *field).collect();
    fields.sort_unstable_by_key(|field| field.name);
    fields
}

fn sorted_inputs<'a, 'b>(
    inputs: impl Iterator<Item = &'b SchemaInputField<'a>>,
) -> std::vec::Vec<&'b SchemaInputField<'a>> {
    let mut inputs: std::vec::Vec<_> = inputs.collect();
    inputs.sort_unstable_by_key(|input| input.name);
    inputs
}

fn check_field<'a>(schema: &Schema<'a>, parent: &str, field: &SchemaField<'a>) -> ParseResult<()> {
    if field
        .output_type
        .of_type(schema)
        .and_then(|x| x.output_type())
        .is_none()
    {
        return Err(validation!(
            "Field `{}` of type `{}` has an invalid type.",
            field.name,
            parent
        ));
    }
    for argument in sorted_inputs(field.arguments.values()) {
        if !has_input_type(schema, argument) {
            return Err(validation!(
                "Argument `{}` of field `{}.{}` has an invalid type.",
                argument.name,
                parent,
                field.name
            ));
        }
    }
    Ok(())
}

fn has_input_type<'a>(schema: &Schema<'a>, input: &SchemaInputField<'a>) -> bool {
    input
        .input_type
        .of_type(schema)
        .and_then(|x| x.input_type())
        .is_some()
}

fn check_interfaces<'a>(schema: &Schema<'a>, parent: &str, interfaces: &[&'a str]) -> ParseResult<()> {
    for name in interfaces.iter() {
        if schema.get_type(name).and_then(|x| x.interface()).is_none() {
            return Err(validation!(
                "Interface `{}` on type `{}` does not exist.",
                name,
                parent
            ));
        }
    }
    Ok(())
}

/// Checks that every type referenced by a definition exists and is of a valid kind.
fn check_references(schema: &Schema<'_>) -> ParseResult<()> {
    for name in schema.type_names() {
        match schema.get_type(name) {
            Some(SchemaType::Object(object)) => {
                check_interfaces(schema, name, object.get_interfaces())?;
                for field in sorted_fields(object.fields.iter()) {
                    check_field(schema, name, field)?;
                }
            }
            Some(SchemaType::Interface(interface)) => {
                check_interfaces(schema, name, interface.get_interfaces())?;
                for field in sorted_fields(interface.fields.iter()) {
                    check_field(schema, name, field)?;
                }
            }
            Some(SchemaType::Union(union_type)) => {
                for member in union_type.get_possible_types().iter() {
                    if schema.get_type(member).and_then(|x| x.object()).is_none() {
                        return Err(validation!(
                            "Type `{}` on union `{}` is not an object type.",
                            member,
                            name
                        ));
                    }
                }
            }
            Some(SchemaType::InputObject(input_object)) => {
                for field in sorted_inputs(input_object.fields.values()) {
                    if !has_input_type(schema, field) {
                        return Err(validation!(
                            "Field `{}` of type `{}` has an invalid type.",
                            field.name,
                            name
                        ));
                    }
                }
            }
            _ => (),
        }
    }

    for name in schema.directive_names() {
        if let Some(directive) = schema.get_directive(name) {
            for argument in sorted_inputs(directive.arguments.values()) {
                if !has_input_type(schema, argument) {
                    return Err(validation!(
                        "Argument `{}` of directive `@{}` has an invalid type.",
                        argument.name,
                        name
                    ));
                }
            }
        }
    }
    Ok(())
}

/// Sets the root operation types, either from the `schema` definition or by the default names
/// `Query`, `Mutation`, and `Subscription`.
fn set_root_types<'a>(
    schema: &mut Schema<'a>,
    definition: Option<SchemaDefinition<'a>>,
) -> ParseResult<()> {
    let roots = [
        (OperationKind::Query, "Query"),
        (OperationKind::Mutation, "Mutation"),
        (OperationKind::Subscription, "Subscription"),
    ];
    for (kind, default_name) in roots {
        let name = match definition {
            Some(definition) => match kind {
                OperationKind::Query => definition.query_root_type_name,
                OperationKind::Mutation => definition.mutation_root_type_name,
                OperationKind::Subscription => definition.subscription_root_type_name,
            },
            None => Some(default_name),
        };
        let Some(name) = name else { continue };
        match schema.get_type(name) {
            Some(root_type) => match root_type.object() {
                Some(object) => schema.set_root_type(kind, object),
                None => {
                    return Err(validation!(
                        "{} root type `{}` must be an object type.",
                        default_name,
                        name
                    ))
                }
            },
            None if definition.is_some() => {
                return Err(validation!(
                    "{} root type `{}` does not exist.",
                    default_name,
                    name
                ))
            }
            None => (),
        }
    }
    Ok(())
}
