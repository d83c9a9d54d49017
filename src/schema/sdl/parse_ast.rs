use crate::schema::{
    SchemaDirective, SchemaEnum, SchemaInputObject, SchemaInterface, SchemaObject, SchemaScalar,
    SchemaUnion,
};

/// The root operation types named by a `schema { ... }` definition.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct SchemaDefinition<'a> {
    pub(super) query_root_type_name: Option<&'a str>,
    pub(super) mutation_root_type_name: Option<&'a str>,
    pub(super) subscription_root_type_name: Option<&'a str>,
}

/// A named type definition as it's been read from the source text, before it's been added to
/// the schema.
/// [Reference](https://spec.graphql.org/October2021/#sec-Types)
#[derive(Debug, Clone)]
pub(super) enum TypeDefinition<'a> {
    Object(SchemaObject<'a>),
    Interface(SchemaInterface<'a>),
    Union(SchemaUnion<'a>),
    Enum(SchemaEnum<'a>),
    Scalar(SchemaScalar<'a>),
    InputObject(SchemaInputObject<'a>),
}

impl<'a> TypeDefinition<'a> {
    pub(super) fn name(&self) -> &'a str {
        match self {
            TypeDefinition::Object(x) => x.name,
            TypeDefinition::Interface(x) => x.name,
            TypeDefinition::Union(x) => x.name,
            TypeDefinition::Enum(x) => x.name,
            TypeDefinition::Scalar(x) => x.name,
            TypeDefinition::InputObject(x) => x.name,
        }
    }
}

/// All definitions of a schema source text, in the order in which they appeared.
pub(super) struct SchemaDocument<'a> {
    pub(super) schema_definition: Option<SchemaDefinition<'a>>,
    pub(super) types: std::vec::Vec<TypeDefinition<'a>>,
    pub(super) directives: std::vec::Vec<SchemaDirective<'a>>,
}
