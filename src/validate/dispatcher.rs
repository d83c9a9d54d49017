use super::{RuleHandlers, ValidationContext, ValidationRule};
use crate::ast::*;
use crate::visit::{VisitFlow, VisitInfo, Visitor};

/// A visitor that runs a list of validation rules in a single traversal of a document.
///
/// For every node the type information is updated first and then each rule's `enter_` callback is
/// invoked in the order the rules were registered. After the node's children have been visited
/// the `leave_` callbacks run in reverse order, before the type information is restored.
///
/// Only callbacks that are contained in a rule's [`RuleHandlers`] set are invoked. Once the
/// context is aborted by the error limit, the traversal is stopped immediately.
pub(crate) struct RuleDispatcher<'a> {
    rules: Vec<(Box<dyn ValidationRule<'a> + 'a>, RuleHandlers)>,
}

impl<'a> RuleDispatcher<'a> {
    pub(crate) fn new(rules: Vec<Box<dyn ValidationRule<'a> + 'a>>) -> Self {
        RuleDispatcher {
            rules: rules
                .into_iter()
                .map(|rule| {
                    let handlers = rule.handlers();
                    (rule, handlers)
                })
                .collect(),
        }
    }

    fn enter<F>(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        handler: RuleHandlers,
        mut callback: F,
    ) -> VisitFlow
    where
        F: FnMut(&mut (dyn ValidationRule<'a> + 'a), &mut ValidationContext<'a>) -> VisitFlow,
    {
        let mut flow = VisitFlow::Next;
        for (rule, handlers) in self.rules.iter_mut() {
            if !handlers.contains(handler) {
                continue;
            }
            if callback(rule.as_mut(), ctx) != VisitFlow::Next {
                flow = VisitFlow::Skip;
            }
            if ctx.is_aborted() {
                return VisitFlow::Break;
            }
        }
        if flow == VisitFlow::Skip {
            tracing::trace!(handler = ?handler, "rule skipped subtree");
            ctx.type_info.leave();
        }
        flow
    }

    fn leave<F>(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        handler: RuleHandlers,
        mut callback: F,
    ) -> VisitFlow
    where
        F: FnMut(&mut (dyn ValidationRule<'a> + 'a), &mut ValidationContext<'a>) -> VisitFlow,
    {
        for (rule, handlers) in self.rules.iter_mut().rev() {
            if !handlers.contains(handler) {
                continue;
            }
            callback(rule.as_mut(), ctx);
            if ctx.is_aborted() {
                return VisitFlow::Break;
            }
        }
        ctx.type_info.leave();
        VisitFlow::Next
    }
}

macro_rules! dispatch {
    ($node:ident, $enter:ident, $leave:ident, $enter_handler:ident, $leave_handler:ident) => {
        fn $enter(
            &mut self,
            ctx: &mut ValidationContext<'a>,
            node: &'a $node<'a>,
            info: &VisitInfo,
        ) -> VisitFlow {
            if ctx.is_aborted() {
                return VisitFlow::Break;
            }
            ctx.type_info.$enter(node);
            let reported = ctx.errors().len();
            let flow = self.enter(ctx, RuleHandlers::$enter_handler, |rule, ctx| {
                rule.$enter(ctx, node, info)
            });
            ctx.attach_path(reported, &info.path);
            flow
        }

        fn $leave(
            &mut self,
            ctx: &mut ValidationContext<'a>,
            node: &'a $node<'a>,
            info: &VisitInfo,
        ) -> VisitFlow {
            if ctx.is_aborted() {
                return VisitFlow::Break;
            }
            let reported = ctx.errors().len();
            let flow = self.leave(ctx, RuleHandlers::$leave_handler, |rule, ctx| {
                rule.$leave(ctx, node, info)
            });
            ctx.attach_path(reported, &info.path);
            flow
        }
    };
}

impl<'a> Visitor<'a, ValidationContext<'a>> for RuleDispatcher<'a> {
    dispatch!(
        Document,
        enter_document,
        leave_document,
        ENTER_DOCUMENT,
        LEAVE_DOCUMENT
    );
    dispatch!(
        OperationDefinition,
        enter_operation,
        leave_operation,
        ENTER_OPERATION,
        LEAVE_OPERATION
    );
    dispatch!(
        FragmentDefinition,
        enter_fragment,
        leave_fragment,
        ENTER_FRAGMENT,
        LEAVE_FRAGMENT
    );
    dispatch!(
        VariableDefinition,
        enter_variable_definition,
        leave_variable_definition,
        ENTER_VARIABLE_DEFINITION,
        LEAVE_VARIABLE_DEFINITION
    );
    dispatch!(
        SelectionSet,
        enter_selection_set,
        leave_selection_set,
        ENTER_SELECTION_SET,
        LEAVE_SELECTION_SET
    );
    dispatch!(
        FragmentSpread,
        enter_fragment_spread,
        leave_fragment_spread,
        ENTER_FRAGMENT_SPREAD,
        LEAVE_FRAGMENT_SPREAD
    );
    dispatch!(
        InlineFragment,
        enter_inline_fragment,
        leave_inline_fragment,
        ENTER_INLINE_FRAGMENT,
        LEAVE_INLINE_FRAGMENT
    );
    dispatch!(Field, enter_field, leave_field, ENTER_FIELD, LEAVE_FIELD);
    dispatch!(
        Directive,
        enter_directive,
        leave_directive,
        ENTER_DIRECTIVE,
        LEAVE_DIRECTIVE
    );
    dispatch!(
        Argument,
        enter_argument,
        leave_argument,
        ENTER_ARGUMENT,
        LEAVE_ARGUMENT
    );
    dispatch!(Value, enter_value, leave_value, ENTER_VALUE, LEAVE_VALUE);
    dispatch!(
        ObjectField,
        enter_object_field,
        leave_object_field,
        ENTER_OBJECT_FIELD,
        LEAVE_OBJECT_FIELD
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{harness::test_schema, GraphQLError, SchemaTypeInfo};
    use crate::visit::VisitNode;
    use std::{cell::RefCell, rc::Rc};

    type Log = Rc<RefCell<Vec<String>>>;

    struct Recorder {
        name: &'static str,
        skip_field: Option<&'static str>,
        report: bool,
        log: Log,
    }

    impl<'a> ValidationRule<'a> for Recorder {
        fn handlers(&self) -> RuleHandlers {
            RuleHandlers::ENTER_FIELD | RuleHandlers::LEAVE_FIELD | RuleHandlers::ENTER_ARGUMENT
        }
    }

    impl<'a> Visitor<'a, ValidationContext<'a>> for Recorder {
        fn enter_field(
            &mut self,
            ctx: &mut ValidationContext<'a>,
            field: &'a Field<'a>,
            _info: &VisitInfo,
        ) -> VisitFlow {
            let parent = ctx
                .type_info()
                .parent_type()
                .map(|parent| parent.name())
                .unwrap_or("?");
            self.log
                .borrow_mut()
                .push(format!("{} enter {}.{}", self.name, parent, field.name));
            if self.report {
                ctx.report_error(GraphQLError::new(field.name, [field.loc]));
            }
            if self.skip_field == Some(field.name) {
                VisitFlow::Skip
            } else {
                VisitFlow::Next
            }
        }

        fn leave_field(
            &mut self,
            _ctx: &mut ValidationContext<'a>,
            field: &'a Field<'a>,
            _info: &VisitInfo,
        ) -> VisitFlow {
            self.log
                .borrow_mut()
                .push(format!("{} leave {}", self.name, field.name));
            VisitFlow::Next
        }

        fn enter_argument(
            &mut self,
            _ctx: &mut ValidationContext<'a>,
            argument: &'a Argument<'a>,
            _info: &VisitInfo,
        ) -> VisitFlow {
            self.log
                .borrow_mut()
                .push(format!("{} argument {}", self.name, argument.name));
            VisitFlow::Next
        }

        // Not part of the handler set, so never called.
        fn enter_document(
            &mut self,
            _ctx: &mut ValidationContext<'a>,
            _document: &'a Document<'a>,
            _info: &VisitInfo,
        ) -> VisitFlow {
            self.log.borrow_mut().push("document".to_string());
            VisitFlow::Next
        }
    }

    fn run(
        source: &str,
        skip_field: Option<&'static str>,
        max_errors: Option<usize>,
    ) -> (Vec<String>, usize, usize) {
        let ctx = ASTContext::new();
        let schema = test_schema(&ctx);
        let document = Document::parse(&ctx, source).unwrap();
        let provider = ctx.alloc(SchemaTypeInfo::new(&ctx));
        let mut context = ValidationContext::new(&ctx, schema, document, provider, max_errors);
        let log = Log::default();
        let mut dispatcher = RuleDispatcher::new(vec![
            Box::new(Recorder {
                name: "a",
                skip_field,
                report: max_errors.is_some(),
                log: log.clone(),
            }),
            Box::new(Recorder {
                name: "b",
                skip_field: None,
                report: false,
                log: log.clone(),
            }),
        ]);
        document.visit(&mut context, &mut dispatcher);
        let depth = context.type_info().depth();
        let errors = context.errors().len();
        let log = log.borrow().clone();
        (log, depth, errors)
    }

    #[test]
    fn calls_rules_in_order() {
        let (log, depth, _) = run("{ dog { name(surname: true) } }", None, None);
        assert_eq!(
            log,
            vec![
                "a enter QueryRoot.dog",
                "b enter QueryRoot.dog",
                "a enter Dog.name",
                "b enter Dog.name",
                "a argument surname",
                "b argument surname",
                "b leave name",
                "a leave name",
                "b leave dog",
                "a leave dog",
            ]
        );
        assert_eq!(depth, 0);
    }

    #[test]
    fn skips_subtree_for_all_rules() {
        let (log, depth, _) = run("{ dog { name } human { name } }", Some("dog"), None);
        assert_eq!(
            log,
            vec![
                "a enter QueryRoot.dog",
                "b enter QueryRoot.dog",
                "a enter QueryRoot.human",
                "b enter QueryRoot.human",
                "a enter Human.name",
                "b enter Human.name",
                "b leave name",
                "a leave name",
                "b leave human",
                "a leave human",
            ]
        );
        assert_eq!(depth, 0);
    }

    #[test]
    fn stops_at_error_limit() {
        let (log, _, errors) = run("{ dog { name } human { name } }", None, Some(1));
        assert_eq!(log, vec!["a enter QueryRoot.dog", "b enter QueryRoot.dog", "a enter Dog.name"]);
        assert_eq!(errors, 2);
    }
}
