//! Parser-facing contract of the outline walker.
//!
//! A language binding exposes its syntax tree through [`ParseNode`] and
//! classifies grammar node names with a [`LanguageTrait`] generated by
//! [`define_lang!`].

use strum_macros::{Display, IntoStaticStr};

use crate::collect::OutlineOption;
use crate::symbol::{SymKind, Symbol};
use outline_error::Result;

/// Role a parse node plays for the outline walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, IntoStaticStr)]
pub enum NodeKind {
    Class,
    Struct,
    Actor,
    Enum,
    Protocol,
    Extension,
    Function,
    Initializer,
    Deinitializer,
    Variable,
    /// Anything else; traversed transparently.
    #[default]
    Other,
}

impl NodeKind {
    /// The symbol kind emitted for this node, `None` for transparent nodes.
    pub fn sym_kind(self) -> Option<SymKind> {
        match self {
            NodeKind::Class => Some(SymKind::Class),
            NodeKind::Struct => Some(SymKind::Struct),
            NodeKind::Actor => Some(SymKind::Actor),
            NodeKind::Enum => Some(SymKind::Enum),
            NodeKind::Protocol => Some(SymKind::Protocol),
            NodeKind::Extension => Some(SymKind::Extension),
            NodeKind::Function => Some(SymKind::Func),
            NodeKind::Initializer => Some(SymKind::Init),
            NodeKind::Deinitializer => Some(SymKind::Deinit),
            NodeKind::Variable => Some(SymKind::Var),
            NodeKind::Other => None,
        }
    }
}

/// The first binding of a variable declaration group.
///
/// All text is the trimmed source rendering of the corresponding syntax.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Binding {
    pub pattern: String,
    pub annotation: Option<String>,
    pub initializer: Option<String>,
}

impl Binding {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            annotation: None,
            initializer: None,
        }
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    pub fn with_initializer(mut self, initializer: impl Into<String>) -> Self {
        self.initializer = Some(initializer.into());
        self
    }
}

/// A node of an already-parsed syntax tree.
///
/// Byte offsets exclude leading and trailing trivia. Accessors for optional
/// sub-parts return `None` when the node lacks them, which is always valid
/// input for the walker.
pub trait ParseNode: Sized {
    fn kind(&self) -> NodeKind;

    /// Offset of the first token after leading trivia.
    fn start_byte(&self) -> usize;

    /// Offset one past the last token before trailing trivia.
    fn end_byte(&self) -> usize;

    /// Children in document order.
    fn children(&self) -> Vec<Self>;

    /// Declared identifier of a type, protocol or function.
    fn name(&self) -> Option<String>;

    /// Extended-type expression of an extension.
    fn extended_type(&self) -> Option<String> {
        None
    }

    /// Parameter clause of an initializer, parentheses included.
    fn parameter_clause(&self) -> Option<String> {
        None
    }

    /// First binding of a variable declaration.
    fn first_binding(&self) -> Option<Binding> {
        None
    }
}

/// Grammar-level classification, usually generated by [`define_lang!`].
pub trait LanguageTrait {
    /// Classify a grammar node name.
    fn node_kind(kind: &str) -> NodeKind;

    /// The canonical token string for a grammar node name, if declared.
    fn token_str(kind: &str) -> Option<&'static str>;

    fn is_valid_token(kind: &str) -> bool;
}

/// A language that can parse its own sources and produce outlines.
pub trait LanguageParser: LanguageTrait {
    /// Display name, e.g. `"swift"`.
    fn name() -> &'static str;

    fn supported_extensions() -> &'static [&'static str];

    /// Parse `source` and return its root-level symbols.
    fn outline(source: &[u8], option: &OutlineOption) -> Result<Vec<Symbol>>;

    fn supports_extension(ext: &str) -> bool {
        Self::supported_extensions().contains(&ext)
    }
}

/// Declare a language's outline-relevant grammar nodes.
///
/// ```ignore
/// define_lang! {
///     Swift,
///     (class_declaration, "class_declaration", NodeKind::Class),
///     (function_declaration, "function_declaration", NodeKind::Function),
/// }
/// ```
///
/// expands to a unit struct `LangSwift` with one `&'static str` constant per
/// entry and a [`LanguageTrait`] implementation mapping unlisted names to
/// [`NodeKind::Other`].
#[macro_export]
macro_rules! define_lang {
    (
        $suffix:ident,
        $( ($const:ident, $str:literal, $kind:expr) ),* $(,)?
    ) => {
        $crate::paste::paste! {
            /// Language marker for outline extraction
            #[derive(Debug, Default, Clone, Copy)]
            pub struct [<Lang $suffix>];

            #[allow(non_upper_case_globals)]
            impl [<Lang $suffix>] {
                $(
                    pub const $const: &'static str = $str;
                )*
            }

            impl $crate::lang_def::LanguageTrait for [<Lang $suffix>] {
                fn node_kind(kind: &str) -> $crate::lang_def::NodeKind {
                    match kind {
                        $(
                            $str => $kind,
                        )*
                        _ => $crate::lang_def::NodeKind::Other,
                    }
                }

                fn token_str(kind: &str) -> Option<&'static str> {
                    match kind {
                        $(
                            $str => Some(Self::$const),
                        )*
                        _ => None,
                    }
                }

                fn is_valid_token(kind: &str) -> bool {
                    matches!(kind, $($str)|*)
                }
            }
        }
    };
}
