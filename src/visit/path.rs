use crate::error::{Error, ErrorType};
use std::fmt;

/// The location of an AST node relative to the node that a traversal started at, as a list of
/// keys and indices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub segments: Vec<PathSegment>,
}

impl Path {
    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment)
    }

    pub fn pop(&mut self) -> Option<PathSegment> {
        self.segments.pop()
    }
}

impl TryFrom<&str> for Path {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let segments = value
            .split('.')
            .map(PathSegment::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { segments })
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.segments
                .iter()
                .map(|segment| segment.to_string())
                .collect::<Vec<_>>()
                .join(".")
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PathSegment {
    Index(usize),

    Arguments,
    DefaultValue,
    Directives,
    Fields,
    Name,
    SelectionSet,
    Type,
    Value,
    Values,
    Variable,
    VariableDefinitions,
}

impl TryFrom<&str> for PathSegment {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<usize>() {
            Ok(index) => Ok(Self::Index(index)),
            Err(_) => match value {
                "arguments" => Ok(PathSegment::Arguments),
                "defaultValue" => Ok(PathSegment::DefaultValue),
                "directives" => Ok(PathSegment::Directives),
                "fields" => Ok(PathSegment::Fields),
                "name" => Ok(PathSegment::Name),
                "selectionSet" => Ok(PathSegment::SelectionSet),
                "type" => Ok(PathSegment::Type),
                "value" => Ok(PathSegment::Value),
                "values" => Ok(PathSegment::Values),
                "variable" => Ok(PathSegment::Variable),
                "variableDefinitions" => Ok(PathSegment::VariableDefinitions),
                _ => Err(Error::new(
                    format!("Invalid path segment {value}"),
                    Some(ErrorType::Usage),
                )),
            },
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                PathSegment::Index(index) => index.to_string(),
                PathSegment::Arguments => String::from("arguments"),
                PathSegment::DefaultValue => String::from("defaultValue"),
                PathSegment::Directives => String::from("directives"),
                PathSegment::Fields => String::from("fields"),
                PathSegment::Name => String::from("name"),
                PathSegment::SelectionSet => String::from("selectionSet"),
                PathSegment::Type => String::from("type"),
                PathSegment::Value => String::from("value"),
                PathSegment::Values => String::from("values"),
                PathSegment::Variable => String::from("variable"),
                PathSegment::VariableDefinitions => String::from("variableDefinitions"),
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse() {
        let path = Path::try_from("0.arguments.1.value.fields.0.value.values.2").unwrap();
        assert_eq!(path.segments.len(), 9);
        assert_eq!(path.segments[4], PathSegment::Fields);
        assert_eq!(path.to_string(), "0.arguments.1.value.fields.0.value.values.2");
        assert!(Path::try_from("0.unknown").is_err());
    }
}
