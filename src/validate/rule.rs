use super::ValidationContext;
use crate::visit::Visitor;
use std::ops::{BitOr, BitOrAssign};

/// A set of the [Visitor] callbacks that a [`ValidationRule`] implements.
///
/// The dispatcher only invokes the callbacks of a rule that are contained in its set, which saves
/// the dynamic calls to the default no-op callbacks of rules that only care about a few kinds of
/// nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RuleHandlers(u32);

impl RuleHandlers {
    pub const NONE: RuleHandlers = RuleHandlers(0);
    pub const ENTER_DOCUMENT: RuleHandlers = RuleHandlers(1 << 0);
    pub const LEAVE_DOCUMENT: RuleHandlers = RuleHandlers(1 << 1);
    pub const ENTER_OPERATION: RuleHandlers = RuleHandlers(1 << 2);
    pub const LEAVE_OPERATION: RuleHandlers = RuleHandlers(1 << 3);
    pub const ENTER_FRAGMENT: RuleHandlers = RuleHandlers(1 << 4);
    pub const LEAVE_FRAGMENT: RuleHandlers = RuleHandlers(1 << 5);
    pub const ENTER_VARIABLE_DEFINITION: RuleHandlers = RuleHandlers(1 << 6);
    pub const LEAVE_VARIABLE_DEFINITION: RuleHandlers = RuleHandlers(1 << 7);
    pub const ENTER_SELECTION_SET: RuleHandlers = RuleHandlers(1 << 8);
    pub const LEAVE_SELECTION_SET: RuleHandlers = RuleHandlers(1 << 9);
    pub const ENTER_FRAGMENT_SPREAD: RuleHandlers = RuleHandlers(1 << 10);
    pub const LEAVE_FRAGMENT_SPREAD: RuleHandlers = RuleHandlers(1 << 11);
    pub const ENTER_INLINE_FRAGMENT: RuleHandlers = RuleHandlers(1 << 12);
    pub const LEAVE_INLINE_FRAGMENT: RuleHandlers = RuleHandlers(1 << 13);
    pub const ENTER_FIELD: RuleHandlers = RuleHandlers(1 << 14);
    pub const LEAVE_FIELD: RuleHandlers = RuleHandlers(1 << 15);
    pub const ENTER_DIRECTIVE: RuleHandlers = RuleHandlers(1 << 16);
    pub const LEAVE_DIRECTIVE: RuleHandlers = RuleHandlers(1 << 17);
    pub const ENTER_ARGUMENT: RuleHandlers = RuleHandlers(1 << 18);
    pub const LEAVE_ARGUMENT: RuleHandlers = RuleHandlers(1 << 19);
    pub const ENTER_VALUE: RuleHandlers = RuleHandlers(1 << 20);
    pub const LEAVE_VALUE: RuleHandlers = RuleHandlers(1 << 21);
    pub const ENTER_OBJECT_FIELD: RuleHandlers = RuleHandlers(1 << 22);
    pub const LEAVE_OBJECT_FIELD: RuleHandlers = RuleHandlers(1 << 23);
    pub const ALL: RuleHandlers = RuleHandlers((1 << 24) - 1);

    /// Checks whether all handlers of `other` are also in this set.
    #[inline]
    pub const fn contains(self, other: RuleHandlers) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn union(self, other: RuleHandlers) -> RuleHandlers {
        RuleHandlers(self.0 | other.0)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for RuleHandlers {
    type Output = RuleHandlers;

    #[inline]
    fn bitor(self, rhs: RuleHandlers) -> RuleHandlers {
        self.union(rhs)
    }
}

impl BitOrAssign for RuleHandlers {
    #[inline]
    fn bitor_assign(&mut self, rhs: RuleHandlers) {
        *self = self.union(rhs);
    }
}

/// Trait for a validation rule, which is a [Visitor] over the [`ValidationContext`].
///
/// A rule is instantiated once per validation run by a [`RuleConstructor`] and may keep state
/// for the duration of the run. Its callbacks are invoked by the validation dispatcher while the
/// document is traversed once for all rules, and report problems with
/// [`ValidationContext::report_error`]. A rule doesn't need to stop after reporting a problem, and
/// a single callback may report several.
///
/// Returning `VisitFlow::Skip` from an `enter_` callback skips the children of a node for all
/// rules, and their `leave_` callbacks for that node. `VisitFlow::Break` is treated the same way,
/// since only the error limit may abort a validation run.
///
/// ```
/// use graphql_validator::{ast::*, schema::*, validate::*, visit::*};
///
/// #[derive(Default)]
/// struct NoAliases;
///
/// impl<'a> ValidationRule<'a> for NoAliases {
///     fn handlers(&self) -> RuleHandlers {
///         RuleHandlers::ENTER_FIELD
///     }
/// }
///
/// impl<'a> Visitor<'a, ValidationContext<'a>> for NoAliases {
///     fn enter_field(
///         &mut self,
///         ctx: &mut ValidationContext<'a>,
///         field: &'a Field<'a>,
///         _info: &VisitInfo,
///     ) -> VisitFlow {
///         if let Some(alias) = field.alias {
///             ctx.report_error(GraphQLError::new(
///                 format!("Alias '{}' is not allowed.", alias),
///                 [field.loc],
///             ));
///         }
///         VisitFlow::Next
///     }
/// }
///
/// fn no_aliases<'a>(_ctx: &ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a> {
///     Box::new(NoAliases)
/// }
///
/// let ctx = ASTContext::new();
/// let schema = Schema::parse(&ctx, "type Query { dog: String }").unwrap();
/// let document = Document::parse(&ctx, "{ pet: dog }").unwrap();
///
/// let options = ValidationOptions::default().with_rules(vec![no_aliases as RuleConstructor]);
/// let errors = validate(&ctx, schema, Some(document), options).unwrap();
/// assert_eq!(errors[0].message, "Alias 'pet' is not allowed.");
/// ```
pub trait ValidationRule<'a>: Visitor<'a, ValidationContext<'a>> {
    /// Returns the callbacks that this rule implements. All of them by default.
    fn handlers(&self) -> RuleHandlers {
        RuleHandlers::ALL
    }
}

/// A function creating a new instance of a [`ValidationRule`] at the start of a validation run.
///
/// Rules are passed to [`ValidationOptions`](super::ValidationOptions) as constructors, since
/// every run needs its own instances.
pub type RuleConstructor =
    for<'a> fn(&ValidationContext<'a>) -> Box<dyn ValidationRule<'a> + 'a>;
