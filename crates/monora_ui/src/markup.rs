//! HTML string rendering primitive.

use std::fmt::Write as _;

use crate::shell::{ElementSpec, RenderPrimitive};

const VOID_ELEMENTS: &[&str] = &["area", "br", "col", "hr", "img", "input", "meta", "source"];

/// Renders shells to escaped HTML strings.
///
/// Attribute order is `class`, managed attributes, then pass-through attributes. An empty class
/// is omitted, and boolean attributes (empty value) are written bare.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupPrimitive;

impl RenderPrimitive for MarkupPrimitive {
    type Node = String;

    fn element(&self, spec: ElementSpec, children: Vec<String>) -> String {
        let mut out = String::new();
        out.push('<');
        out.push_str(spec.tag);
        if !spec.class.is_empty() {
            write_attr(&mut out, "class", &spec.class);
        }
        for (name, value) in &spec.managed {
            write_attr(&mut out, name, value);
        }
        for (name, value) in spec.pass_through.iter() {
            write_attr(&mut out, name, value);
        }
        out.push('>');
        if VOID_ELEMENTS.contains(&spec.tag) {
            return out;
        }
        for child in children {
            out.push_str(&child);
        }
        let _ = write!(out, "</{}>", spec.tag);
        out
    }

    fn text(&self, text: &str) -> String {
        escape(text, false)
    }
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    if !value.is_empty() {
        let _ = write!(out, "=\"{}\"", escape(value, true));
    }
}

fn escape(raw: &str, attribute: bool) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
