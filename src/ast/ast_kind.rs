use std::fmt;

/// Identifies the AST node that the parser was reading when it encountered unexpected input.
///
/// Syntax errors of documents and of schema definitions are reported as `Invalid {kind}`,
/// using the [`fmt::Display`] output of this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ASTKind {
    Document,
    OperationDefinition,
    OperationKind,
    FragmentDefinition,
    VariableDefinition,
    Type,
    /// A named type reference, e.g. a type condition or a variable's type.
    NamedType,
    ListType,
    SelectionSet,
    Selection,
    Field,
    FragmentSpread,
    InlineFragment,
    Directive,
    Argument,
    Value,
    Variable,
    String,
    Float,
    Int,
    Boolean,
    Enum,
    List,
    Object,
    ObjectField,
}

impl ASTKind {
    /// Returns the human readable name of the node kind.
    pub const fn name(self) -> &'static str {
        match self {
            ASTKind::Document => "Document",
            ASTKind::OperationDefinition => "Operation Definition",
            ASTKind::OperationKind => "Operation Kind",
            ASTKind::FragmentDefinition => "Fragment Definition",
            ASTKind::VariableDefinition => "Variable Definition",
            ASTKind::Type => "Type",
            ASTKind::NamedType => "Type Name",
            ASTKind::ListType => "List Type",
            ASTKind::SelectionSet => "Selection Set",
            ASTKind::Selection => "Selection",
            ASTKind::Field => "Field",
            ASTKind::FragmentSpread => "Fragment Spread",
            ASTKind::InlineFragment => "Inline Fragment",
            ASTKind::Directive => "Directive",
            ASTKind::Argument => "Argument",
            ASTKind::Value => "Value",
            ASTKind::Variable => "Variable",
            ASTKind::String => "String",
            ASTKind::Float => "Float",
            ASTKind::Int => "Integer",
            ASTKind::Boolean => "Boolean",
            ASTKind::Enum => "Enum",
            ASTKind::List => "List",
            ASTKind::Object => "Object",
            ASTKind::ObjectField => "Object Field",
        }
    }

    /// Whether the kind is one of the literal values that a [`crate::ast::Value`] may hold.
    pub const fn is_value(self) -> bool {
        matches!(
            self,
            ASTKind::Value
                | ASTKind::Variable
                | ASTKind::String
                | ASTKind::Float
                | ASTKind::Int
                | ASTKind::Boolean
                | ASTKind::Enum
                | ASTKind::List
                | ASTKind::Object
                | ASTKind::ObjectField
        )
    }
}

impl fmt::Display for ASTKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::ASTKind;
    use crate::ast::*;

    #[test]
    fn syntax_error_messages() {
        let ctx = ASTContext::new();
        let error = Document::parse(&ctx, "{ field(arg: ) }").unwrap_err();
        assert_eq!(error.message(), "Invalid Value");
        let error = Document::parse(&ctx, "query Q($a: [Int) { a }").unwrap_err();
        assert_eq!(error.message(), "Invalid List Type");
        assert_eq!(ASTKind::Int.to_string(), "Integer");
        assert!(ASTKind::ObjectField.is_value());
        assert!(!ASTKind::Field.is_value());
    }
}
