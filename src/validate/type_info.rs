use crate::ast::*;
use crate::schema::*;
use bumpalo::collections::Vec;

/// The definition that an [Argument] is passed to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArgumentOwner<'a> {
    Field(&'a SchemaField<'a>),
    Directive(&'a SchemaDirective<'a>),
}

impl<'a> ArgumentOwner<'a> {
    /// Looks up an argument definition by name.
    #[inline]
    pub fn get_argument(&self, name: &str) -> Option<&'a SchemaInputField<'a>> {
        match *self {
            ArgumentOwner::Field(field) => field.get_argument(name),
            ArgumentOwner::Directive(directive) => directive.get_argument(name),
        }
    }
}

/// Resolves the schema definitions that AST nodes refer to while [TypeInfo] tracks a traversal.
///
/// Every method defaults to resolving nothing, so an implementor only resolves what it overrides.
/// The [`SchemaTypeInfo`] provider resolves each step against the schema and is used by default.
///
/// ```
/// use graphql_validator::{ast::*, schema::*, validate::*};
///
/// /// Resolves type conditions, but never any fields.
/// struct NoFields;
///
/// impl<'a> TypeInfoProvider<'a> for NoFields {
///     fn type_condition(
///         &self,
///         schema: &Schema<'a>,
///         type_condition: &'a NamedType<'a>,
///     ) -> Option<&'a SchemaType<'a>> {
///         schema.get_type(type_condition.name)
///     }
/// }
///
/// let ctx = ASTContext::new();
/// let schema = Schema::parse(&ctx, "type Query { dog: String }").unwrap();
/// let document = Document::parse(&ctx, "{ dog }").unwrap();
///
/// let options = ValidationOptions::default().with_type_info(&NoFields);
/// let errors = validate(&ctx, schema, Some(document), options).unwrap();
/// assert_eq!(
///     errors[0].message,
///     "Cannot query field 'dog' on type 'Query'. Did you mean 'dog'?"
/// );
/// ```
pub trait TypeInfoProvider<'a> {
    /// Resolves the definition of a field selected on a composite parent type.
    fn field_def(
        &self,
        _schema: &Schema<'a>,
        _parent_type: SchemaType<'a>,
        _field: &'a Field<'a>,
    ) -> Option<&'a SchemaField<'a>> {
        None
    }

    /// Resolves the type condition of a fragment definition or inline fragment.
    fn type_condition(
        &self,
        _schema: &Schema<'a>,
        _type_condition: &'a NamedType<'a>,
    ) -> Option<&'a SchemaType<'a>> {
        None
    }

    /// Resolves the definition of a directive.
    fn directive(
        &self,
        _schema: &Schema<'a>,
        _directive: &'a Directive<'a>,
    ) -> Option<&'a SchemaDirective<'a>> {
        None
    }

    /// Resolves the definition of an argument passed to a field or directive.
    fn argument(
        &self,
        _schema: &Schema<'a>,
        _owner: ArgumentOwner<'a>,
        _argument: &'a Argument<'a>,
    ) -> Option<&'a SchemaInputField<'a>> {
        None
    }

    /// Resolves the definition of a field of an input object value.
    fn input_field(
        &self,
        _schema: &Schema<'a>,
        _input_object: &'a SchemaInputObject<'a>,
        _object_field: &'a ObjectField<'a>,
    ) -> Option<&'a SchemaInputField<'a>> {
        None
    }
}

/// The default [`TypeInfoProvider`], which looks every definition up in the schema by name.
///
/// The introspection meta fields `__typename`, `__schema`, and `__type` are resolved as well,
/// the former on any composite type and the latter two on the query root type only.
#[derive(Debug, Clone, Copy)]
pub struct SchemaTypeInfo<'a> {
    typename_field: &'a SchemaField<'a>,
    schema_field: &'a SchemaField<'a>,
    type_field: &'a SchemaField<'a>,
}

impl<'a> SchemaTypeInfo<'a> {
    pub fn new(ctx: &'a ASTContext) -> Self {
        let string = ctx.alloc(TypeRef::Type("String"));
        let non_null_string = ctx.alloc(TypeRef::NonNullType(string));

        let typename_field = SchemaField::new(ctx, "__typename", non_null_string);

        let schema_type = ctx.alloc(TypeRef::Type("__Schema"));
        let schema_field =
            SchemaField::new(ctx, "__schema", ctx.alloc(TypeRef::NonNullType(schema_type)));

        let mut type_field = SchemaField::new(ctx, "__type", ctx.alloc(TypeRef::Type("__Type")));
        type_field.add_argument(ctx, SchemaInputField::new("name", non_null_string));

        SchemaTypeInfo {
            typename_field: ctx.alloc(typename_field),
            schema_field: ctx.alloc(schema_field),
            type_field: ctx.alloc(type_field),
        }
    }
}

impl<'a> TypeInfoProvider<'a> for SchemaTypeInfo<'a> {
    fn field_def(
        &self,
        schema: &Schema<'a>,
        parent_type: SchemaType<'a>,
        field: &'a Field<'a>,
    ) -> Option<&'a SchemaField<'a>> {
        let is_query_root = || match (schema.query_type(), parent_type) {
            (Some(query), SchemaType::Object(object)) => query.name == object.name,
            _ => false,
        };
        match field.name {
            "__typename" if parent_type.is_composite() => Some(self.typename_field),
            "__schema" if is_query_root() => Some(self.schema_field),
            "__type" if is_query_root() => Some(self.type_field),
            name => parent_type.fields().and_then(|fields| fields.get(name).copied()),
        }
    }

    fn type_condition(
        &self,
        schema: &Schema<'a>,
        type_condition: &'a NamedType<'a>,
    ) -> Option<&'a SchemaType<'a>> {
        schema.get_type(type_condition.name)
    }

    fn directive(
        &self,
        schema: &Schema<'a>,
        directive: &'a Directive<'a>,
    ) -> Option<&'a SchemaDirective<'a>> {
        schema.get_directive(directive.name)
    }

    fn argument(
        &self,
        _schema: &Schema<'a>,
        owner: ArgumentOwner<'a>,
        argument: &'a Argument<'a>,
    ) -> Option<&'a SchemaInputField<'a>> {
        owner.get_argument(argument.name)
    }

    fn input_field(
        &self,
        _schema: &Schema<'a>,
        input_object: &'a SchemaInputObject<'a>,
        object_field: &'a ObjectField<'a>,
    ) -> Option<&'a SchemaInputField<'a>> {
        input_object.get_field(object_field.name)
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct TypeFrame<'a> {
    output_type: Option<TypeRef<'a>>,
    parent_type: Option<SchemaType<'a>>,
    field_def: Option<&'a SchemaField<'a>>,
    directive: Option<&'a SchemaDirective<'a>>,
    argument_owner: Option<ArgumentOwner<'a>>,
    argument: Option<&'a SchemaInputField<'a>>,
    input_type: Option<TypeRef<'a>>,
    parent_input_type: Option<TypeRef<'a>>,
    default_value: Option<&'a Value<'a>>,
    enum_value: Option<&'a str>,
}

/// Tracks which schema types and definitions apply at the current position of a traversal.
///
/// The validation dispatcher calls an `enter_` method for every node before any rule sees it and
/// calls [`TypeInfo::leave`] after all rules have left it. Each `enter_` pushes one frame onto a
/// stack and `leave` pops it again, so the context of a parent node is restored exactly once its
/// children were visited.
///
/// Nothing that fails to resolve is an error here. Missing definitions are tracked as `None` and
/// it's up to the rules to report them.
pub struct TypeInfo<'a> {
    ctx: &'a ASTContext,
    schema: &'a Schema<'a>,
    provider: &'a dyn TypeInfoProvider<'a>,
    frames: Vec<'a, TypeFrame<'a>>,
}

impl<'a> TypeInfo<'a> {
    pub fn new(
        ctx: &'a ASTContext,
        schema: &'a Schema<'a>,
        provider: &'a dyn TypeInfoProvider<'a>,
    ) -> Self {
        TypeInfo {
            ctx,
            schema,
            provider,
            frames: Vec::new_in(&ctx.arena),
        }
    }

    #[inline]
    fn top(&self) -> TypeFrame<'a> {
        self.frames.last().copied().unwrap_or_default()
    }

    #[inline]
    fn push(&mut self, frame: TypeFrame<'a>) {
        self.frames.push(frame);
    }

    /// Pushes an unchanged copy of the current frame.
    #[inline]
    fn push_copy(&mut self) {
        self.push(self.top());
    }

    fn named_output_type(&self, schema_type: Option<&'a SchemaType<'a>>) -> Option<TypeRef<'a>> {
        schema_type
            .filter(|schema_type| schema_type.output_type().is_some())
            .map(|schema_type| TypeRef::Type(schema_type.name()))
    }

    pub fn enter_document(&mut self, _document: &'a Document<'a>) {
        self.push(TypeFrame::default());
    }

    pub fn enter_operation(&mut self, operation: &'a OperationDefinition<'a>) {
        let output_type = self
            .schema
            .get_root_type(operation.operation)
            .map(|object| TypeRef::Type(object.name));
        self.push(TypeFrame {
            output_type,
            ..TypeFrame::default()
        });
    }

    pub fn enter_fragment(&mut self, fragment: &'a FragmentDefinition<'a>) {
        let condition = self
            .provider
            .type_condition(self.schema, &fragment.type_condition);
        self.push(TypeFrame {
            output_type: self.named_output_type(condition),
            ..TypeFrame::default()
        });
    }

    pub fn enter_variable_definition(&mut self, var_def: &'a VariableDefinition<'a>) {
        let named_type = var_def.of_type.of_type().name;
        let input_type = match self.schema.get_type(named_type) {
            Some(schema_type) if schema_type.input_type().is_some() => {
                Some(*TypeRef::from_ast(self.ctx, &var_def.of_type))
            }
            _ => None,
        };
        self.push(TypeFrame {
            input_type,
            ..self.top()
        });
    }

    pub fn enter_selection_set(&mut self, _selection_set: &'a SelectionSet<'a>) {
        let top = self.top();
        let parent_type = top
            .output_type
            .and_then(|output_type| output_type.of_type(self.schema))
            .filter(|schema_type| schema_type.is_composite())
            .copied();
        self.push(TypeFrame { parent_type, ..top });
    }

    pub fn enter_fragment_spread(&mut self, _spread: &'a FragmentSpread<'a>) {
        self.push_copy();
    }

    pub fn enter_inline_fragment(&mut self, fragment: &'a InlineFragment<'a>) {
        let top = self.top();
        let output_type = match fragment.type_condition {
            Some(ref type_condition) => {
                let condition = self.provider.type_condition(self.schema, type_condition);
                self.named_output_type(condition)
            }
            None => top
                .output_type
                .map(|output_type| TypeRef::Type(output_type.named_type())),
        };
        self.push(TypeFrame { output_type, ..top });
    }

    pub fn enter_field(&mut self, field: &'a Field<'a>) {
        let parent_type = self.top().parent_type;
        let field_def = parent_type
            .and_then(|parent_type| self.provider.field_def(self.schema, parent_type, field));
        self.push(TypeFrame {
            parent_type,
            field_def,
            argument_owner: field_def.map(ArgumentOwner::Field),
            output_type: field_def.map(|field_def| *field_def.output_type),
            ..TypeFrame::default()
        });
    }

    pub fn enter_directive(&mut self, directive: &'a Directive<'a>) {
        let directive = self.provider.directive(self.schema, directive);
        // Arguments of unknown directives have no owner, even when applied to a known field
        self.push(TypeFrame {
            directive,
            argument_owner: directive.map(ArgumentOwner::Directive),
            ..self.top()
        });
    }

    pub fn enter_argument(&mut self, argument: &'a Argument<'a>) {
        let top = self.top();
        let argument = top
            .argument_owner
            .and_then(|owner| self.provider.argument(self.schema, owner, argument));
        self.push(TypeFrame {
            argument,
            input_type: argument.map(|argument| *argument.input_type),
            parent_input_type: None,
            default_value: argument.and_then(|argument| argument.default_value),
            enum_value: None,
            ..top
        });
    }

    pub fn enter_value(&mut self, value: &'a Value<'a>) {
        let top = self.top();
        match value {
            Value::List(_) => {
                // A single value may be passed where a list is expected
                let item_type = top.input_type.map(|input_type| match *input_type.nullable() {
                    TypeRef::ListType(item_type) => *item_type,
                    nullable => nullable,
                });
                self.push(TypeFrame {
                    input_type: item_type,
                    parent_input_type: top.input_type,
                    default_value: None,
                    ..top
                });
            }
            Value::Enum(enum_value) => {
                let enum_value = top
                    .input_type
                    .and_then(|input_type| input_type.of_type(self.schema))
                    .and_then(|schema_type| schema_type.enum_type())
                    .and_then(|enum_type| enum_type.values.get(enum_value.value).copied());
                self.push(TypeFrame { enum_value, ..top });
            }
            _ => self.push(top),
        }
    }

    pub fn enter_object_field(&mut self, object_field: &'a ObjectField<'a>) {
        let top = self.top();
        let field = top
            .input_type
            .and_then(|input_type| input_type.of_type(self.schema))
            .and_then(|schema_type| schema_type.input_object())
            .and_then(|input_object| {
                self.provider
                    .input_field(self.schema, input_object, object_field)
            });
        self.push(TypeFrame {
            input_type: field.map(|field| *field.input_type),
            parent_input_type: top.input_type,
            default_value: field.and_then(|field| field.default_value),
            enum_value: None,
            ..top
        });
    }

    /// Restores the context from before the last `enter_` call.
    #[inline]
    pub fn leave(&mut self) {
        self.frames.pop();
    }

    /// Returns the schema the tracked types are looked up in.
    #[inline]
    pub fn schema(&self) -> &'a Schema<'a> {
        self.schema
    }

    /// The type of the current field, operation root, or fragment.
    #[inline]
    pub fn output_type(&self) -> Option<TypeRef<'a>> {
        self.top().output_type
    }

    /// The composite type whose selection set is currently being visited.
    #[inline]
    pub fn parent_type(&self) -> Option<SchemaType<'a>> {
        self.top().parent_type
    }

    #[inline]
    pub fn field_def(&self) -> Option<&'a SchemaField<'a>> {
        self.top().field_def
    }

    #[inline]
    pub fn directive(&self) -> Option<&'a SchemaDirective<'a>> {
        self.top().directive
    }

    /// The field or directive definition whose arguments are currently being visited.
    #[inline]
    pub fn argument_owner(&self) -> Option<ArgumentOwner<'a>> {
        self.top().argument_owner
    }

    #[inline]
    pub fn argument(&self) -> Option<&'a SchemaInputField<'a>> {
        self.top().argument
    }

    /// The type expected of the current input value.
    #[inline]
    pub fn input_type(&self) -> Option<TypeRef<'a>> {
        self.top().input_type
    }

    /// The type expected of the list or object value enclosing the current input value.
    #[inline]
    pub fn parent_input_type(&self) -> Option<TypeRef<'a>> {
        self.top().parent_input_type
    }

    #[inline]
    pub fn default_value(&self) -> Option<&'a Value<'a>> {
        self.top().default_value
    }

    #[inline]
    pub fn enum_value(&self) -> Option<&'a str> {
        self.top().enum_value
    }

    /// Returns the number of frames on the stack, which matches the depth of the current node.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}
