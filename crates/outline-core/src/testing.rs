//! In-memory parse tree for exercising the walker without a real parser.
//!
//! [`SimpleNode`] spans are given directly in line numbers; pair it with the
//! [`LineNumbers`] resolver, which maps an offset to the line of the same
//! number.

use crate::lang_def::{Binding, NodeKind, ParseNode};
use crate::position::PositionResolver;

/// Resolver for [`SimpleNode`] trees: offsets are already line numbers.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineNumbers;

impl PositionResolver for LineNumbers {
    fn line_of(&self, offset: usize) -> usize {
        offset
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleNode {
    pub kind: NodeKind,
    pub start_line: usize,
    pub end_line: usize,
    pub name: Option<String>,
    pub extended_type: Option<String>,
    pub parameter_clause: Option<String>,
    pub binding: Option<Binding>,
    pub children: Vec<SimpleNode>,
}

impl SimpleNode {
    pub fn new(kind: NodeKind, start_line: usize, end_line: usize) -> Self {
        Self {
            kind,
            start_line,
            end_line,
            ..Self::default()
        }
    }

    /// A transparent node spanning lines `1..=u32::MAX`.
    pub fn root(children: Vec<SimpleNode>) -> Self {
        Self::new(NodeKind::Other, 1, u32::MAX as usize).with_children(children)
    }

    pub fn other(start_line: usize, end_line: usize) -> Self {
        Self::new(NodeKind::Other, start_line, end_line)
    }

    /// A named type, protocol or function declaration.
    pub fn decl(kind: NodeKind, name: &str, start_line: usize, end_line: usize) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::new(kind, start_line, end_line)
        }
    }

    pub fn extension(extended_type: &str, start_line: usize, end_line: usize) -> Self {
        Self {
            extended_type: Some(extended_type.to_string()),
            ..Self::new(NodeKind::Extension, start_line, end_line)
        }
    }

    pub fn initializer(parameter_clause: &str, start_line: usize, end_line: usize) -> Self {
        Self {
            parameter_clause: Some(parameter_clause.to_string()),
            ..Self::new(NodeKind::Initializer, start_line, end_line)
        }
    }

    pub fn deinitializer(start_line: usize, end_line: usize) -> Self {
        Self::new(NodeKind::Deinitializer, start_line, end_line)
    }

    pub fn variable(binding: Binding, start_line: usize, end_line: usize) -> Self {
        Self {
            binding: Some(binding),
            ..Self::new(NodeKind::Variable, start_line, end_line)
        }
    }

    pub fn with_children(mut self, children: Vec<SimpleNode>) -> Self {
        self.children = children;
        self
    }
}

impl<'a> ParseNode for &'a SimpleNode {
    fn kind(&self) -> NodeKind {
        self.kind
    }

    fn start_byte(&self) -> usize {
        self.start_line
    }

    fn end_byte(&self) -> usize {
        self.end_line + 1
    }

    fn children(&self) -> Vec<Self> {
        let node: &'a SimpleNode = *self;
        node.children.iter().collect()
    }

    fn name(&self) -> Option<String> {
        self.name.clone()
    }

    fn extended_type(&self) -> Option<String> {
        self.extended_type.clone()
    }

    fn parameter_clause(&self) -> Option<String> {
        self.parameter_clause.clone()
    }

    fn first_binding(&self) -> Option<Binding> {
        self.binding.clone()
    }
}
