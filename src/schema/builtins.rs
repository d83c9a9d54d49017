use super::ParseLiteralFn;
use crate::ast::{PrintNode, Value};

/// The names of the scalars that every schema contains, whether or not they're defined.
pub const BUILTIN_SCALARS: [&str; 5] = ["String", "Int", "Float", "Boolean", "ID"];

/// The directives that every schema contains unless it redefines them.
pub(crate) const BUILTIN_DIRECTIVES: &str = r#"
directive @skip(if: Boolean!) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT
directive @include(if: Boolean!) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT
directive @deprecated(
  reason: String = "No longer supported"
) on FIELD_DEFINITION | ARGUMENT_DEFINITION | INPUT_FIELD_DEFINITION | ENUM_VALUE
directive @specifiedBy(url: String!) on SCALAR
"#;

/// Returns the literal coercion of a built-in scalar by name.
pub(crate) fn builtin_scalar_parser(name: &str) -> Option<ParseLiteralFn> {
    match name {
        "String" => Some(parse_string),
        "Int" => Some(parse_int),
        "Float" => Some(parse_float),
        "Boolean" => Some(parse_boolean),
        "ID" => Some(parse_id),
        _ => None,
    }
}

fn parse_int(value: &Value) -> Result<(), String> {
    match value {
        Value::Int(int) => match lexical_core::parse::<i32>(int.value.as_bytes()) {
            Ok(_) => Ok(()),
            Err(_) => Err(format!(
                "Int cannot represent non 32-bit signed integer value: {}",
                int.value
            )),
        },
        _ => Err(format!(
            "Int cannot represent non-integer value: {}",
            value.print()
        )),
    }
}

fn parse_float(value: &Value) -> Result<(), String> {
    match value {
        Value::Int(_) | Value::Float(_) => Ok(()),
        _ => Err(format!(
            "Float cannot represent non numeric value: {}",
            value.print()
        )),
    }
}

fn parse_string(value: &Value) -> Result<(), String> {
    match value {
        Value::String(_) => Ok(()),
        _ => Err(format!(
            "String cannot represent a non string value: {}",
            value.print()
        )),
    }
}

fn parse_boolean(value: &Value) -> Result<(), String> {
    match value {
        Value::Boolean(_) => Ok(()),
        _ => Err(format!(
            "Boolean cannot represent a non boolean value: {}",
            value.print()
        )),
    }
}

fn parse_id(value: &Value) -> Result<(), String> {
    match value {
        Value::String(_) | Value::Int(_) => Ok(()),
        _ => Err(format!(
            "ID cannot represent a non-string and non-integer value: {}",
            value.print()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ASTContext, ParseNode};

    fn check<'a>(ctx: &'a ASTContext, name: &str, source: &str) -> Result<(), String> {
        let parse_literal = builtin_scalar_parser(name).unwrap();
        parse_literal(Value::parse(ctx, source).unwrap())
    }

    #[test]
    fn ints() {
        let ctx = ASTContext::new();
        assert_eq!(check(&ctx, "Int", "2147483647"), Ok(()));
        assert_eq!(
            check(&ctx, "Int", "2147483648"),
            Err("Int cannot represent non 32-bit signed integer value: 2147483648".to_string())
        );
        assert_eq!(
            check(&ctx, "Int", "1.5"),
            Err("Int cannot represent non-integer value: 1.5".to_string())
        );
    }

    #[test]
    fn other_scalars() {
        let ctx = ASTContext::new();
        assert_eq!(check(&ctx, "Float", "1"), Ok(()));
        assert_eq!(check(&ctx, "ID", "1"), Ok(()));
        assert_eq!(check(&ctx, "ID", "\"1\""), Ok(()));
        assert_eq!(check(&ctx, "Boolean", "false"), Ok(()));
        assert_eq!(
            check(&ctx, "String", "[\"a\"]"),
            Err("String cannot represent a non string value: [\"a\"]".to_string())
        );
        assert_eq!(
            check(&ctx, "Boolean", "TRUE"),
            Err("Boolean cannot represent a non boolean value: TRUE".to_string())
        );
        assert!(builtin_scalar_parser("Custom").is_none());
    }
}
