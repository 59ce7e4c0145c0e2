//! Single-pass outline collection over a [`ParseNode`] tree.

use tracing::trace;

use crate::infer::infer_type;
use crate::lang_def::{NodeKind, ParseNode};
use crate::position::PositionResolver;
use crate::scope::ScopeStack;
use crate::symbol::{SymKind, Symbol};

/// Placeholder name for declarations whose name is missing from the tree.
pub const UNKNOWN_NAME: &str = "(unknown)";

/// Traversal policy and enrichment switches for a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutlineOption {
    /// Treat functions, initializers and deinitializers as containers and
    /// collect declarations nested in their bodies. Variables local to those
    /// bodies are never collected.
    pub deep_scan: bool,
    /// Attach inferred type labels to variables.
    pub show_type: bool,
}

impl OutlineOption {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deep_scan(mut self, deep_scan: bool) -> Self {
        self.deep_scan = deep_scan;
        self
    }

    pub fn with_show_type(mut self, show_type: bool) -> Self {
        self.show_type = show_type;
        self
    }
}

/// Pending work of the traversal.
enum Step<N> {
    Visit(N),
    /// Close the container opened for a node; `body` marks an executable body.
    Leave { body: bool },
}

/// Walks one tree and builds its outline.
///
/// Each collector owns its scope stack, so independent trees can be walked
/// on different threads with separate collectors.
pub struct OutlineCollector<'r, R: ?Sized> {
    resolver: &'r R,
    option: OutlineOption,
    scopes: ScopeStack,
    /// Number of function-like bodies currently open; independent of the
    /// scope stack depth.
    body_depth: usize,
}

impl<'r, R> OutlineCollector<'r, R>
where
    R: PositionResolver + ?Sized,
{
    pub fn new(resolver: &'r R, option: OutlineOption) -> Self {
        Self {
            resolver,
            option,
            scopes: ScopeStack::new(),
            body_depth: 0,
        }
    }

    /// Walk `root` in document order and return the root-level symbols.
    #[tracing::instrument(skip_all)]
    pub fn collect<N: ParseNode>(mut self, root: N) -> Vec<Symbol> {
        let mut work = vec![Step::Visit(root)];

        while let Some(step) = work.pop() {
            match step {
                Step::Visit(node) => self.visit_node(node, &mut work),
                Step::Leave { body } => {
                    if body {
                        self.body_depth -= 1;
                    }
                    self.scopes.exit();
                }
            }
        }

        debug_assert_eq!(self.body_depth, 0);
        let roots = self.scopes.finish();
        tracing::debug!(roots = roots.len(), "outline collected");
        roots
    }

    fn visit_node<N: ParseNode>(&mut self, node: N, work: &mut Vec<Step<N>>) {
        let Some(kind) = node.kind().sym_kind() else {
            return Self::visit_children(node, work);
        };
        if kind.is_type_like() {
            self.visit_type_decl(node, kind, work);
        } else if kind.is_callable() {
            self.visit_callable(node, kind, work);
        } else {
            debug_assert_eq!(kind, SymKind::Var);
            self.visit_variable(&node);
        }
    }

    fn visit_children<N: ParseNode>(node: N, work: &mut Vec<Step<N>>) {
        work.extend(node.children().into_iter().rev().map(Step::Visit));
    }

    fn visit_type_decl<N: ParseNode>(&mut self, node: N, kind: SymKind, work: &mut Vec<Step<N>>) {
        let symbol = self.build_symbol(&node, kind);
        trace!(kind = %symbol.kind, name = %symbol.name, "enter container");
        self.scopes.enter(symbol);
        work.push(Step::Leave { body: false });
        Self::visit_children(node, work);
    }

    fn visit_callable<N: ParseNode>(&mut self, node: N, kind: SymKind, work: &mut Vec<Step<N>>) {
        let symbol = self.build_symbol(&node, kind);
        if !self.option.deep_scan {
            trace!(kind = %symbol.kind, name = %symbol.name, "leaf");
            self.scopes.attach(symbol);
            return;
        }

        trace!(kind = %symbol.kind, name = %symbol.name, "enter body");
        self.body_depth += 1;
        self.scopes.enter(symbol);
        work.push(Step::Leave { body: true });
        Self::visit_children(node, work);
    }

    fn visit_variable<N: ParseNode>(&mut self, node: &N) {
        if self.option.deep_scan && self.body_depth > 0 {
            return;
        }

        let binding = node.first_binding();
        let name = binding
            .as_ref()
            .map(|b| b.pattern.trim())
            .filter(|pattern| !pattern.is_empty())
            .unwrap_or(UNKNOWN_NAME);
        let ty = if self.option.show_type {
            binding.as_ref().and_then(infer_type)
        } else {
            None
        };

        let (start, end) = self.span(node);
        let symbol = Symbol::new(SymKind::Var, name, start, end).with_type(ty);
        trace!(name = %symbol.name, ty = ?symbol.ty, "variable");
        self.scopes.attach(symbol);
    }

    /// Build the record for a container or callable node.
    fn build_symbol<N: ParseNode>(&self, node: &N, kind: SymKind) -> Symbol {
        let name = match kind {
            SymKind::Extension => trimmed_or_unknown(node.extended_type()),
            SymKind::Init => {
                let params = node.parameter_clause().unwrap_or_default();
                format!("init{}", params.trim())
            }
            SymKind::Deinit => "deinit".to_string(),
            _ => trimmed_or_unknown(node.name()),
        };
        let (start, end) = self.span(node);
        Symbol::new(kind, name, start, end)
    }

    /// Inclusive line span of a node, trivia excluded.
    fn span<N: ParseNode>(&self, node: &N) -> (usize, usize) {
        let start_byte = node.start_byte();
        let last_byte = node.end_byte().saturating_sub(1).max(start_byte);
        let start = self.resolver.line_of(start_byte);
        let end = self.resolver.line_of(last_byte).max(start);
        (start, end)
    }
}

fn trimmed_or_unknown(text: Option<String>) -> String {
    text.as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or(UNKNOWN_NAME)
        .to_string()
}

/// Collect the outline of the tree rooted at `root`.
pub fn collect_outline<N, R>(root: N, resolver: &R, option: OutlineOption) -> Vec<Symbol>
where
    N: ParseNode,
    R: PositionResolver + ?Sized,
{
    OutlineCollector::new(resolver, option).collect(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang_def::Binding;
    use crate::testing::{LineNumbers, SimpleNode};

    fn outline(root: &SimpleNode, option: OutlineOption) -> Vec<Symbol> {
        collect_outline(root, &LineNumbers, option)
    }

    #[test]
    fn test_option_builders() {
        let option = OutlineOption::new().with_deep_scan(true).with_show_type(true);
        assert!(option.deep_scan);
        assert!(option.show_type);
        assert_eq!(OutlineOption::default(), OutlineOption::new());
    }

    #[test]
    fn test_transparent_nodes_are_descended() {
        let root = SimpleNode::root(vec![SimpleNode::other(1, 5).with_children(vec![
            SimpleNode::other(2, 4)
                .with_children(vec![SimpleNode::decl(NodeKind::Struct, "Deep", 3, 3)]),
        ])]);
        let symbols = outline(&root, OutlineOption::default());
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].name, "Deep");
        assert_eq!(symbols[0].kind, SymKind::Struct);
    }

    #[test]
    fn test_missing_parts_use_placeholders() {
        let root = SimpleNode::root(vec![
            SimpleNode::new(NodeKind::Class, 1, 2),
            SimpleNode::new(NodeKind::Variable, 3, 3),
            SimpleNode::new(NodeKind::Initializer, 4, 5),
            SimpleNode::new(NodeKind::Extension, 6, 7),
            SimpleNode::variable(Binding::new("  "), 8, 8),
        ]);
        let symbols = outline(&root, OutlineOption::new().with_show_type(true));
        let names: Vec<_> = symbols.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![UNKNOWN_NAME, UNKNOWN_NAME, "init", UNKNOWN_NAME, UNKNOWN_NAME]
        );
        assert!(symbols.iter().all(|s| s.ty.is_none()));
    }

    #[test]
    fn test_type_only_with_show_type() {
        let root = SimpleNode::root(vec![SimpleNode::variable(
            Binding::new("count").with_initializer("0"),
            1,
            1,
        )]);
        let plain = outline(&root, OutlineOption::default());
        assert_eq!(plain[0].ty, None);

        let typed = outline(&root, OutlineOption::new().with_show_type(true));
        assert_eq!(typed[0].ty.as_deref(), Some("Int"));
    }

    #[test]
    fn test_dispatch_by_kind_class() {
        let kinds = [
            (NodeKind::Class, SymKind::Class),
            (NodeKind::Struct, SymKind::Struct),
            (NodeKind::Actor, SymKind::Actor),
            (NodeKind::Enum, SymKind::Enum),
            (NodeKind::Protocol, SymKind::Protocol),
            (NodeKind::Extension, SymKind::Extension),
            (NodeKind::Function, SymKind::Func),
            (NodeKind::Initializer, SymKind::Init),
            (NodeKind::Deinitializer, SymKind::Deinit),
        ];
        for (node_kind, sym_kind) in kinds {
            let root = SimpleNode::root(vec![
                SimpleNode::new(node_kind, 1, 3)
                    .with_children(vec![SimpleNode::decl(NodeKind::Struct, "Nested", 2, 2)]),
            ]);

            let shallow = outline(&root, OutlineOption::default());
            assert_eq!(shallow[0].kind, sym_kind);
            // Type-like kinds always nest; callables only in deep scans.
            assert_eq!(shallow[0].members.len(), usize::from(sym_kind.is_type_like()));

            let deep = outline(&root, OutlineOption::new().with_deep_scan(true));
            assert_eq!(deep[0].member_names(), vec!["Nested"]);
        }
    }

    #[test]
    fn test_variable_children_never_visited() {
        let root = SimpleNode::root(vec![
            SimpleNode::variable(Binding::new("handler"), 1, 4)
                .with_children(vec![SimpleNode::decl(NodeKind::Function, "inner", 2, 3)]),
        ]);
        for deep in [false, true] {
            let symbols = outline(&root, OutlineOption::new().with_deep_scan(deep));
            assert_eq!(symbols.len(), 1);
            assert!(symbols[0].members.is_empty());
        }
    }
}
