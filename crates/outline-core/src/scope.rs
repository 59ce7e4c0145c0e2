//! Stack of open container symbols.

use crate::symbol::Symbol;

/// Containers currently being built, innermost on top, plus the finished
/// root-level symbols.
///
/// Only the top of the stack is ever mutated. A popped container is attached
/// to the new top, or to the root list once the stack is empty.
#[derive(Debug, Default)]
pub struct ScopeStack {
    stack: Vec<Symbol>,
    roots: Vec<Symbol>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of open containers.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The innermost open container.
    #[inline]
    pub fn top(&self) -> Option<&Symbol> {
        self.stack.last()
    }

    /// Root-level symbols finished so far.
    pub fn roots(&self) -> &[Symbol] {
        &self.roots
    }

    /// Opens a container.
    pub fn enter(&mut self, symbol: Symbol) {
        debug_assert!(symbol.members.is_empty(), "container entered with members");
        self.stack.push(symbol);
    }

    /// Closes the innermost container and attaches it to its parent.
    ///
    /// Returns `false` if no container was open.
    pub fn exit(&mut self) -> bool {
        let Some(finished) = self.stack.pop() else {
            return false;
        };
        self.attach(finished);
        true
    }

    /// Appends a symbol to the innermost open container, or to the roots.
    pub fn attach(&mut self, symbol: Symbol) {
        match self.stack.last_mut() {
            Some(parent) => parent.members.push(symbol),
            None => self.roots.push(symbol),
        }
    }

    /// Closes every container still open and returns the root list.
    pub fn finish(mut self) -> Vec<Symbol> {
        if !self.stack.is_empty() {
            tracing::debug!(open = self.stack.len(), "closing unbalanced scopes");
        }
        while self.exit() {}
        self.roots
    }
}
