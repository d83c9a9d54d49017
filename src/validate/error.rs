use crate::error::Location;
use crate::visit::Path;
use std::fmt;

pub(crate) const ERROR_LIMIT_MESSAGE: &str =
    "Too many validation errors, error limit reached. Validation aborted.";

/// A validation diagnostic that a rule reported for a document.
///
/// Diagnostics are values rather than errors: a document that fails validation results in an
/// `Ok` list of diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphQLError {
    pub message: String,
    /// The locations of the AST nodes the diagnostic refers to. These are empty for documents
    /// parsed without locations, and `None` for the diagnostic that reports the error limit.
    pub locations: Option<Vec<Location>>,
    pub path: Option<Path>,
}

impl GraphQLError {
    /// Creates a diagnostic for the nodes at the given locations.
    ///
    /// Nodes don't carry a location when a document was parsed without them, in which case
    /// those locations are left out.
    pub fn new<S, L>(message: S, locations: L) -> Self
    where
        S: Into<String>,
        L: IntoIterator<Item = Option<Location>>,
    {
        GraphQLError {
            message: message.into(),
            locations: Some(locations.into_iter().flatten().collect()),
            path: None,
        }
    }

    /// Attaches the path of the node the diagnostic refers to.
    pub fn with_path(self, path: Path) -> Self {
        GraphQLError {
            path: Some(path),
            ..self
        }
    }

    pub(crate) fn error_limit() -> Self {
        GraphQLError {
            message: ERROR_LIMIT_MESSAGE.to_string(),
            locations: None,
            path: None,
        }
    }

    /// Converts the diagnostic into the shape that's returned to clients.
    pub fn formatted(&self) -> FormattedError {
        FormattedError {
            message: self.message.clone(),
            locations: self.locations.clone(),
            path: self.path.as_ref().map(|path| {
                path.segments
                    .iter()
                    .map(|segment| segment.to_string())
                    .collect()
            }),
        }
    }

    /// Serializes the formatted diagnostic to a JSON string.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.formatted())
    }
}

impl fmt::Display for GraphQLError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if let Some(ref locations) = self.locations {
            for location in locations.iter() {
                write!(f, " ({})", location)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for GraphQLError {}

/// The external shape of a [`GraphQLError`], made up of a message and the locations it refers to.
///
/// With the `json` feature enabled this serializes to the standard GraphQL error format, e.g.
/// `{"message":"...","locations":[{"line":1,"column":3}]}`. Absent `locations` and `path` keys
/// are omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct FormattedError {
    pub message: String,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub locations: Option<Vec<Location>>,
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub path: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visit::PathSegment;

    #[test]
    fn drops_missing_locations() {
        let error = GraphQLError::new(
            "Unknown fragment 'A'.",
            [Some(Location { line: 1, column: 5 }), None],
        );
        assert_eq!(error.locations, Some(vec![Location { line: 1, column: 5 }]));
        assert_eq!(error.to_string(), "Unknown fragment 'A'. (1:5)");

        let error = GraphQLError::new("Unknown fragment 'A'.", [None]);
        assert_eq!(error.formatted().locations, Some(vec![]));
    }

    #[test]
    fn formats_paths() {
        let mut path = Path::default();
        path.push(PathSegment::Index(0));
        path.push(PathSegment::SelectionSet);
        let error = GraphQLError::new("message", [None]).with_path(path);
        assert_eq!(
            error.formatted().path,
            Some(vec!["0".to_string(), "selectionSet".to_string()])
        );
    }

    #[cfg(feature = "json")]
    #[test]
    fn serializes_to_json() {
        let error = GraphQLError::new(
            "Cannot query field 'x' on type 'T'.",
            [Some(Location { line: 2, column: 3 })],
        );
        assert_eq!(
            error.to_json().unwrap(),
            r#"{"message":"Cannot query field 'x' on type 'T'.","locations":[{"line":2,"column":3}]}"#
        );

        let error = GraphQLError::error_limit();
        assert_eq!(
            error.to_json().unwrap(),
            r#"{"message":"Too many validation errors, error limit reached. Validation aborted."}"#
        );
    }
}
