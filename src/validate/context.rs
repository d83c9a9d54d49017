use bumpalo::Bump;
use hashbrown::{hash_map::DefaultHashBuilder, HashMap, HashSet};

use super::{GraphQLError, TypeInfo, TypeInfoProvider};
use crate::ast::*;
use crate::schema::Schema;
use crate::visit::{Path, VisitFlow, VisitInfo, VisitNode, Visitor};

/// The `ValidationContext` that's passed to every callback of a [`ValidationRule`](super::ValidationRule).
///
/// It gives rules access to the schema, the document, and the type information of the node that's
/// currently being visited, and collects the diagnostics that rules report in the order that
/// they were reported.
///
/// When a maximum number of errors is configured and a rule reports another diagnostic once the
/// maximum has been reached, a final diagnostic noting that validation was aborted is added
/// instead and the context is marked as aborted, after which no more rule callbacks are run.
pub struct ValidationContext<'a> {
    pub arena: &'a Bump,
    schema: &'a Schema<'a>,
    document: &'a Document<'a>,
    fragments: HashMap<&'a str, &'a FragmentDefinition<'a>, DefaultHashBuilder, &'a Bump>,
    pub(crate) type_info: TypeInfo<'a>,
    errors: Vec<GraphQLError>,
    max_errors: Option<usize>,
    aborted: bool,
    paths: bool,
}

impl<'a> ValidationContext<'a> {
    /// Create a new `ValidationContext` for a document and schema.
    ///
    /// A `max_errors` limit of zero is treated as no limit at all.
    pub fn new(
        ctx: &'a ASTContext,
        schema: &'a Schema<'a>,
        document: &'a Document<'a>,
        provider: &'a dyn TypeInfoProvider<'a>,
        max_errors: Option<usize>,
    ) -> Self {
        ValidationContext {
            arena: &ctx.arena,
            schema,
            document,
            fragments: document.fragments(ctx),
            type_info: TypeInfo::new(ctx, schema, provider),
            errors: Vec::new(),
            max_errors: max_errors.filter(|max_errors| *max_errors > 0),
            aborted: false,
            paths: false,
        }
    }

    #[inline]
    pub(crate) fn with_paths(self, paths: bool) -> Self {
        ValidationContext { paths, ..self }
    }

    /// Add a diagnostic to the list of errors.
    ///
    /// This is called inside of validation rules to report that the document is invalid. Once the
    /// error limit is exceeded the diagnostic is replaced by one reporting the limit, and any
    /// further diagnostics are discarded.
    pub fn report_error(&mut self, error: GraphQLError) {
        if self.aborted {
            return;
        }
        match self.max_errors {
            Some(max_errors) if self.errors.len() >= max_errors => {
                tracing::debug!(max_errors, "validation error limit reached");
                self.errors.push(GraphQLError::error_limit());
                self.aborted = true;
            }
            _ => self.errors.push(error),
        }
    }

    /// Attaches `path` to the diagnostics reported since there were `reported` of them. The
    /// diagnostic reporting the error limit never receives a path.
    pub(crate) fn attach_path(&mut self, reported: usize, path: &Path) {
        if !self.paths {
            return;
        }
        for error in self.errors[reported..].iter_mut() {
            if error.path.is_none() && error.locations.is_some() {
                error.path = Some(path.clone());
            }
        }
    }

    /// Checks whether the error limit was exceeded and validation has been aborted.
    #[inline]
    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    /// Returns the diagnostics that have been reported so far.
    #[inline]
    pub fn errors(&self) -> &[GraphQLError] {
        &self.errors
    }

    #[inline]
    pub(crate) fn into_errors(self) -> Vec<GraphQLError> {
        self.errors
    }

    #[inline]
    pub fn schema(&self) -> &'a Schema<'a> {
        self.schema
    }

    #[inline]
    pub fn document(&self) -> &'a Document<'a> {
        self.document
    }

    /// Returns the type information for the node that's currently being visited.
    #[inline]
    pub fn type_info(&self) -> &TypeInfo<'a> {
        &self.type_info
    }

    /// Looks up a fragment definition by name. When a name is defined more than once, the first
    /// definition is returned.
    #[inline]
    pub fn fragment(&self, name: &str) -> Option<&'a FragmentDefinition<'a>> {
        self.fragments.get(name).copied()
    }

    /// Returns all fragment spreads in a selection set, including those nested in fields and
    /// inline fragments, without following spreads into their fragments.
    pub fn fragment_spreads(
        &self,
        selection_set: &'a SelectionSet<'a>,
    ) -> Vec<&'a FragmentSpread<'a>> {
        let mut spreads = Vec::new();
        let mut sets_to_visit = vec![selection_set];
        while let Some(selection_set) = sets_to_visit.pop() {
            for selection in selection_set.selections.iter() {
                match selection {
                    Selection::FragmentSpread(spread) => spreads.push(spread),
                    Selection::Field(field) => sets_to_visit.push(&field.selection_set),
                    Selection::InlineFragment(fragment) => {
                        sets_to_visit.push(&fragment.selection_set)
                    }
                }
            }
        }
        spreads
    }

    /// Returns all fragment definitions that an operation spreads, directly or through other
    /// fragments. Each fragment is returned once and unknown fragments are ignored.
    pub fn recursively_referenced_fragments(
        &self,
        operation: &'a OperationDefinition<'a>,
    ) -> Vec<&'a FragmentDefinition<'a>> {
        let mut fragments = Vec::new();
        let mut collected: HashSet<&'a str, DefaultHashBuilder, &'a Bump> =
            HashSet::new_in(self.arena);
        let mut sets_to_visit = vec![&operation.selection_set];
        while let Some(selection_set) = sets_to_visit.pop() {
            for spread in self.fragment_spreads(selection_set) {
                let name = spread.name.name;
                if collected.insert(name) {
                    if let Some(fragment) = self.fragment(name) {
                        fragments.push(fragment);
                        sets_to_visit.push(&fragment.selection_set);
                    }
                }
            }
        }
        fragments
    }

    /// Returns all variables that are used in an operation and in the fragments it references,
    /// in the order in which they are used.
    pub fn recursive_variable_usages(
        &self,
        operation: &'a OperationDefinition<'a>,
    ) -> Vec<&'a Variable<'a>> {
        let mut collector = CollectVariables::default();
        operation.visit(&mut (), &mut collector);
        for fragment in self.recursively_referenced_fragments(operation) {
            fragment.visit(&mut (), &mut collector);
        }
        collector.usages
    }
}

#[derive(Default)]
struct CollectVariables<'a> {
    usages: Vec<&'a Variable<'a>>,
}

impl<'a> Visitor<'a> for CollectVariables<'a> {
    fn enter_variable_definition(
        &mut self,
        _ctx: &mut (),
        _var_def: &'a VariableDefinition<'a>,
        _info: &VisitInfo,
    ) -> VisitFlow {
        VisitFlow::Skip
    }

    fn enter_value(&mut self, _ctx: &mut (), value: &'a Value<'a>, _info: &VisitInfo) -> VisitFlow {
        if let Value::Variable(variable) = value {
            self.usages.push(variable);
        }
        VisitFlow::Next
    }
}
