use strum_macros::{Display, EnumString, IntoStaticStr};

/// Kind tag of an outline symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum SymKind {
    Class,
    Struct,
    Actor,
    Enum,
    Protocol,
    Extension,
    Func,
    Init,
    Deinit,
    Var,
}

impl SymKind {
    /// Kinds that always open a container.
    pub fn is_type_like(self) -> bool {
        matches!(
            self,
            SymKind::Class
                | SymKind::Struct
                | SymKind::Actor
                | SymKind::Enum
                | SymKind::Protocol
                | SymKind::Extension
        )
    }

    /// Kinds with an executable body; containers only in deep scans.
    pub fn is_callable(self) -> bool {
        matches!(self, SymKind::Func | SymKind::Init | SymKind::Deinit)
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// A named declaration with its line span and nested members.
///
/// Fields are declared in the order their serialized keys sort, so JSON
/// output has stable, sorted keys.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Symbol {
    pub end_line: usize,
    pub kind: SymKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub members: Vec<Symbol>,
    pub name: String,
    pub start_line: usize,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "type", default, skip_serializing_if = "Option::is_none")
    )]
    pub ty: Option<String>,
}

impl Symbol {
    pub fn new(kind: SymKind, name: impl Into<String>, start_line: usize, end_line: usize) -> Self {
        Self {
            end_line,
            kind,
            members: Vec::new(),
            name: name.into(),
            start_line,
            ty: None,
        }
    }

    pub fn with_type(mut self, ty: Option<String>) -> Self {
        self.ty = ty;
        self
    }

    pub fn with_members(mut self, members: Vec<Symbol>) -> Self {
        self.members = members;
        self
    }

    /// First direct member with the given name.
    pub fn member(&self, name: &str) -> Option<&Symbol> {
        self.members.iter().find(|m| m.name == name)
    }

    /// Names of the direct members, in order.
    pub fn member_names(&self) -> Vec<&str> {
        self.members.iter().map(|m| m.name.as_str()).collect()
    }

    /// Whether `other`'s line span lies within this symbol's span.
    pub fn encloses(&self, other: &Symbol) -> bool {
        self.start_line <= other.start_line && other.end_line <= self.end_line
    }

    /// Depth-first, pre-order iteration over this symbol and all descendants.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Iterator returned by [`Symbol::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a Symbol>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Symbol;

    fn next(&mut self) -> Option<Self::Item> {
        let symbol = self.stack.pop()?;
        self.stack.extend(symbol.members.iter().rev());
        Some(symbol)
    }
}
