// Copyright 2026 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering of structured records as Rust literal text.
//!
//! Generated modules are loaded as source, not parsed as data, so the reshaped
//! locale record is emitted as one nested `Text::Map` literal. [`Doc`] is the
//! generator-side staging tree: entries keep insertion order, and rendering
//! indents four spaces per nesting depth.

/// A value to be emitted as a `Text` literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Doc {
    /// Renders as `Text::Str("...")`.
    Str(String),
    /// Renders as `Text::Int(...)`.
    Int(i64),
    /// Renders as `Text::Map(&[...])`, entries in insertion order.
    Map(Vec<(String, Doc)>),
}

impl Doc {
    /// An empty map.
    pub fn map() -> Self {
        Self::Map(Vec::new())
    }

    /// A string leaf.
    pub fn str(s: impl Into<String>) -> Self {
        Self::Str(s.into())
    }

    /// Appends an entry to a `Map` doc.
    ///
    /// Panics on non-map docs; the generator only ever pushes into maps it
    /// just created.
    pub fn push(&mut self, key: impl Into<String>, value: Doc) {
        match self {
            Self::Map(entries) => entries.push((key.into(), value)),
            _ => panic!("pushed into a non-map doc"),
        }
    }

    /// Renders the literal. `indent` is the nesting depth of the line the
    /// literal starts on; the closing bracket of a multi-line map is indented
    /// to that depth.
    pub fn render(&self, indent: usize) -> String {
        match self {
            Self::Str(s) => format!("Text::Str({s:?})"),
            Self::Int(i) => format!("Text::Int({i})"),
            Self::Map(entries) if entries.is_empty() => "Text::Map(&[])".to_owned(),
            Self::Map(entries) => {
                let mut out = String::from("Text::Map(&[\n");
                let pad = "    ".repeat(indent + 1);
                for (key, value) in entries {
                    out.push_str(&pad);
                    out.push_str(&format!("({key:?}, {}),\n", value.render(indent + 1)));
                }
                out.push_str(&"    ".repeat(indent));
                out.push_str("])");
                out
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Doc;

    #[test]
    fn leaves_render_inline() {
        assert_eq!(Doc::str("May").render(0), "Text::Str(\"May\")");
        assert_eq!(Doc::Int(4).render(3), "Text::Int(4)");
        assert_eq!(Doc::map().render(2), "Text::Map(&[])");
    }

    #[test]
    fn strings_are_escaped_and_unicode_kept() {
        assert_eq!(Doc::str("ao\u{fb}t").render(0), "Text::Str(\"août\")");
        assert_eq!(
            Doc::str("a \"quoted\" \\ thing").render(0),
            "Text::Str(\"a \\\"quoted\\\" \\\\ thing\")"
        );
    }

    #[test]
    fn nested_maps_indent_per_depth() {
        let mut days = Doc::map();
        let mut wide = Doc::map();
        wide.push("0", Doc::str("Monday"));
        wide.push("1", Doc::str("Tuesday"));
        days.push("wide", wide);
        let mut root = Doc::map();
        root.push("days", days);
        root.push("first_day", Doc::Int(0));

        let expected = "\
Text::Map(&[
    (\"days\", Text::Map(&[
        (\"wide\", Text::Map(&[
            (\"0\", Text::Str(\"Monday\")),
            (\"1\", Text::Str(\"Tuesday\")),
        ])),
    ])),
    (\"first_day\", Text::Int(0)),
])";
        assert_eq!(root.render(0), expected);
    }
}
