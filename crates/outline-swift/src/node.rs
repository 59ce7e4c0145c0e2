//! [`ParseNode`] adapter over tree-sitter Swift nodes.

use outline_core::{Binding, LanguageTrait, NodeKind, ParseNode};
use tree_sitter::Node;

use crate::token::LangSwift;

/// A tree-sitter node paired with the source it was parsed from.
#[derive(Debug, Clone, Copy)]
pub struct SwiftNode<'a> {
    node: Node<'a>,
    source: &'a [u8],
}

impl<'a> SwiftNode<'a> {
    pub fn new(node: Node<'a>, source: &'a [u8]) -> Self {
        Self { node, source }
    }

    fn text_of(&self, node: Node<'a>) -> String {
        String::from_utf8_lossy(&self.source[node.byte_range()]).into_owned()
    }

    fn field_text(&self, field: &str) -> Option<String> {
        self.node
            .child_by_field_name(field)
            .map(|child| self.text_of(child))
    }

    /// Keyword that introduces a `class_declaration`.
    fn declaration_keyword(&self) -> Option<NodeKind> {
        if let Some(keyword) = self.node.child_by_field_name(LangSwift::field_declaration_kind) {
            if let Some(kind) = LangSwift::declaration_kind(keyword.kind()) {
                return Some(kind);
            }
        }
        let mut cursor = self.node.walk();
        let keyword = self
            .node
            .children(&mut cursor)
            .filter(|child| !child.is_named())
            .find_map(|child| LangSwift::declaration_kind(child.kind()));
        keyword
    }
}

impl<'a> ParseNode for SwiftNode<'a> {
    fn kind(&self) -> NodeKind {
        match LangSwift::node_kind(self.node.kind()) {
            NodeKind::Class => self.declaration_keyword().unwrap_or(NodeKind::Class),
            kind => kind,
        }
    }

    fn start_byte(&self) -> usize {
        self.node.start_byte()
    }

    fn end_byte(&self) -> usize {
        self.node.end_byte()
    }

    fn children(&self) -> Vec<Self> {
        let mut cursor = self.node.walk();
        let children = self
            .node
            .named_children(&mut cursor)
            .map(|child| SwiftNode::new(child, self.source))
            .collect();
        children
    }

    fn name(&self) -> Option<String> {
        self.field_text(LangSwift::field_name)
    }

    fn extended_type(&self) -> Option<String> {
        if let Some(name) = self.field_text(LangSwift::field_name) {
            return Some(name);
        }
        let mut cursor = self.node.walk();
        let found = self.node.named_children(&mut cursor).find(|child| {
            child.kind() == LangSwift::user_type || child.kind() == LangSwift::type_identifier
        });
        found.map(|child| self.text_of(child))
    }

    /// Text from the first `(` up to the matching `)` at this node's level;
    /// parentheses inside default values belong to nested nodes.
    fn parameter_clause(&self) -> Option<String> {
        let mut cursor = self.node.walk();
        let mut open = None;
        for child in self.node.children(&mut cursor) {
            match (child.kind(), open) {
                ("(", None) => open = Some(child.start_byte()),
                (")", Some(start)) => {
                    let text = &self.source[start..child.end_byte()];
                    return Some(String::from_utf8_lossy(text).into_owned());
                }
                _ => {}
            }
        }
        None
    }

    fn first_binding(&self) -> Option<Binding> {
        let mut cursor = self.node.walk();
        if !cursor.goto_first_child() {
            return None;
        }

        let mut binding: Option<Binding> = None;
        loop {
            let child = cursor.node();
            let field = cursor.field_name();
            let is_pattern =
                field == Some(LangSwift::field_name) || child.kind() == LangSwift::pattern;

            match binding.as_mut() {
                None => {
                    if is_pattern {
                        let pattern = self.text_of(child);
                        binding = Some(Binding::new(strip_binding_keyword(&pattern)));
                    }
                }
                // The next binding in `let a = 1, b = 2` starts here.
                Some(_) if is_pattern => break,
                Some(current) => {
                    if child.kind() == LangSwift::type_annotation {
                        let text = self.text_of(child);
                        let annotation = text.trim().trim_start_matches(':').trim();
                        current.annotation = Some(annotation.to_string());
                    } else if field == Some(LangSwift::field_value) {
                        current.initializer = Some(self.text_of(child).trim().to_string());
                    }
                }
            }

            if !cursor.goto_next_sibling() {
                break;
            }
        }
        binding
    }
}

/// Protocol property requirements fold the `var`/`let` keyword into the
/// pattern node.
fn strip_binding_keyword(pattern: &str) -> &str {
    let mut rest = pattern.trim();
    loop {
        let next = ["async", "let", "var"].into_iter().find_map(|keyword| {
            rest.strip_prefix(keyword)
                .filter(|tail| tail.starts_with(char::is_whitespace))
        });
        match next {
            Some(tail) => rest = tail.trim_start(),
            None => return rest,
        }
    }
}
