//! Lexical type labels for variable bindings.
//!
//! Purely textual: an expression is classified by its shape, never by
//! resolving names. A call to an ordinary function looks exactly like a
//! constructor call and is labeled with the function's name.

use crate::lang_def::Binding;

pub const STRING_TYPE: &str = "String";
pub const BOOL_TYPE: &str = "Bool";
pub const INT_TYPE: &str = "Int";
pub const DOUBLE_TYPE: &str = "Double";
pub const ARRAY_TYPE: &str = "Array";
pub const DICTIONARY_TYPE: &str = "Dictionary";

/// Infer a type label for a binding; `None` when no rule applies.
///
/// An explicit annotation always wins. Otherwise the initializer is tried as
/// a call (`Foo(...)` gives `Foo`), then as a literal, then as qualified
/// access (`Color.red` gives `Color`). Literals are checked before qualified
/// access so that `1.5` is a `Double`, not a member of `1`.
pub fn infer_type(binding: &Binding) -> Option<String> {
    if let Some(annotation) = binding.annotation.as_deref() {
        let annotation = annotation.trim();
        if !annotation.is_empty() {
            return Some(annotation.to_string());
        }
    }
    infer_from_initializer(binding.initializer.as_deref()?)
}

/// Type label of an initializer expression.
pub fn infer_from_initializer(expr: &str) -> Option<String> {
    let expr = expr.trim();
    if expr.is_empty() {
        return None;
    }

    if let Some(callee) = prefix_before(expr, '(') {
        return Some(callee);
    }
    if let Some(tag) = literal_type(expr) {
        return Some(tag.to_string());
    }
    prefix_before(expr, '.')
}

/// Type tag of a literal expression.
pub fn literal_type(expr: &str) -> Option<&'static str> {
    if is_string_literal(expr) {
        return Some(STRING_TYPE);
    }
    if expr == "true" || expr == "false" {
        return Some(BOOL_TYPE);
    }
    if !expr.contains('.') {
        if is_integer_literal(expr) {
            return Some(INT_TYPE);
        }
    } else if expr.parse::<f64>().is_ok() {
        return Some(DOUBLE_TYPE);
    }

    let inner = expr.strip_prefix('[')?.strip_suffix(']')?;
    if has_top_level_colon(inner) {
        Some(DICTIONARY_TYPE)
    } else {
        Some(ARRAY_TYPE)
    }
}

fn prefix_before(expr: &str, delimiter: char) -> Option<String> {
    let (head, _) = expr.split_once(delimiter)?;
    let head = head.trim();
    (!head.is_empty()).then(|| head.to_string())
}

/// A single string literal: `"…"` or multi-line `"""…"""`.
///
/// Expressions that merely start and end with quotes, such as `"a" + "b"`,
/// are rejected.
fn is_string_literal(expr: &str) -> bool {
    const TRIPLE: &str = "\"\"\"";
    if expr.len() >= 2 * TRIPLE.len() && expr.starts_with(TRIPLE) && expr.ends_with(TRIPLE) {
        let inner = &expr[TRIPLE.len()..expr.len() - TRIPLE.len()];
        return !inner.contains(TRIPLE);
    }

    let Some(inner) = expr
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    else {
        return false;
    };
    closes_at_end(inner)
}

/// Whether a string body contains no unescaped `"`, so the final quote is the
/// one that closes the literal. Quotes inside `\( … )` interpolations belong
/// to nested expressions.
fn closes_at_end(inner: &str) -> bool {
    let mut escaped = false;
    let mut interpolation = 0usize;
    let mut nested_string = false;

    for c in inner.chars() {
        if escaped {
            escaped = false;
            if c == '(' && !nested_string {
                interpolation += 1;
            }
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' if interpolation > 0 => nested_string = !nested_string,
            '"' => return false,
            '(' if interpolation > 0 && !nested_string => interpolation += 1,
            ')' if interpolation > 0 && !nested_string => interpolation -= 1,
            _ => {}
        }
    }
    // A trailing backslash escapes the closing quote.
    !escaped && interpolation == 0
}

/// Decimal integer, optionally signed, with `_` digit separators.
fn is_integer_literal(expr: &str) -> bool {
    let digits = expr
        .strip_prefix('-')
        .or_else(|| expr.strip_prefix('+'))
        .unwrap_or(expr);
    digits.starts_with(|c: char| c.is_ascii_digit())
        && digits.chars().all(|c| c.is_ascii_digit() || c == '_')
}

/// Whether a `:` appears outside nested brackets and string literals.
fn has_top_level_colon(inner: &str) -> bool {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for c in inner.chars() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '[' | '(' | '{' => depth += 1,
            ']' | ')' | '}' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => return true,
            _ => {}
        }
    }
    false
}
