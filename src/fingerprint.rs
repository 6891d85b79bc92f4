use core::fmt::{Display, Write};

use sha2::{Digest, Sha256};

use crate::alloc::{String, ToString, Vec};
use crate::describe::{Describe, Field, Shape};

const VALUE_TYPE_SEPARATOR: char = '*';
const ARGUMENT_TERMINATOR: char = '#';
const ESCAPE: char = '\\';
const NIL: &str = "nil";

/// A stable key identifying one call: a function signature together with its arguments.
///
/// Two calls have the same fingerprint exactly when their signatures are identical and
/// every pair of arguments describes itself identically.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// The hexadecimal digest.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Fingerprint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Turns signatures and argument lists into [Fingerprint]s.
///
/// Each argument contributes `value*type#` to the call description, where `value` is the
/// rendering of the argument's [Shape]. An absent value contributes `nil#`. The
/// complete description is compacted into a SHA-256 digest.
#[derive(Clone, Copy, Debug, Default)]
pub struct FingerprintEngine;

impl FingerprintEngine {
    /// Create a new engine.
    pub fn new() -> Self {
        Self
    }

    /// The fingerprint of a call.
    pub fn fingerprint(&self, signature: &str, args: &[&dyn Describe]) -> Fingerprint {
        let description = self.describe_call(signature, args);

        let mut hasher = Sha256::new();
        hasher.update(description.as_bytes());
        Fingerprint(hex::encode(hasher.finalize()))
    }

    /// The canonical, unhashed description of a call.
    ///
    /// Separator characters inside the signature are escaped with `\`, so the
    /// signature always ends at the first unescaped `#`.
    pub fn describe_call(&self, signature: &str, args: &[&dyn Describe]) -> String {
        let mut description = String::with_capacity(signature.len() + 1);
        for c in signature.chars() {
            if matches!(c, ESCAPE | VALUE_TYPE_SEPARATOR | ARGUMENT_TERMINATOR) {
                description.push(ESCAPE);
            }
            description.push(c);
        }
        description.push(ARGUMENT_TERMINATOR);

        for arg in args {
            description.push_str(&self.describe_value(*arg));
        }

        description
    }

    /// The description of a single argument.
    pub fn describe_value(&self, value: &dyn Describe) -> String {
        let shape = value.shape();
        let mut description = String::new();

        if shape == Shape::Nil {
            description.push_str(NIL);
        } else {
            render(&shape, &mut description);
            description.push(VALUE_TYPE_SEPARATOR);
            description.push_str(value.type_name());
        }

        description.push(ARGUMENT_TERMINATOR);
        description
    }
}

fn render(shape: &Shape, out: &mut String) {
    match shape {
        Shape::Nil => out.push_str(NIL),
        Shape::Scalar(text) => out.push_str(text),
        Shape::Identity(address) => {
            let _ = write!(out, "{address}");
        }
        Shape::Record { name, fields } => render_record(name, fields, out),
        Shape::Ordered(elements) => {
            out.push('[');
            render_list(elements.iter().map(rendered), out);
            out.push(']');
        }
        Shape::Tuple(elements) => {
            out.push('(');
            render_list(elements.iter().map(rendered), out);
            if elements.len() == 1 {
                out.push(',');
            }
            out.push(')');
        }
        Shape::Unordered(elements) => {
            let mut elements: Vec<String> = elements.iter().map(rendered).collect();
            elements.sort_unstable();

            out.push('{');
            render_list(elements.into_iter(), out);
            out.push('}');
        }
        Shape::Map(entries) => {
            let mut entries: Vec<(String, String)> = entries
                .iter()
                .map(|(key, value)| (rendered(key), rendered(value)))
                .collect();
            entries.sort_unstable();

            out.push('{');
            render_list(
                entries
                    .into_iter()
                    .map(|(key, value)| crate::alloc::format!("{key}: {value}")),
                out,
            );
            out.push('}');
        }
    }
}

fn render_record(name: &str, fields: &[Field], out: &mut String) {
    out.push_str(name);
    if fields.is_empty() {
        return;
    }

    out.push('(');
    render_list(
        fields.iter().map(|field| match field.name {
            Some(name) => {
                let mut text = name.to_string();
                text.push_str(": ");
                render(&field.shape, &mut text);
                text
            }
            None => rendered(&field.shape),
        }),
        out,
    );
    out.push(')');
}

fn rendered(shape: &Shape) -> String {
    let mut text = String::new();
    render(shape, &mut text);
    text
}

fn render_list(items: impl Iterator<Item = String>, out: &mut String) {
    for (index, item) in items.enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        out.push_str(&item);
    }
}
