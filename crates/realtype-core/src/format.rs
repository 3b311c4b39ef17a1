//! Inspection rendering for values.
//!
//! Color scheme:
//! - Strings: Green
//! - Object keys: Blue
//! - `null`, `undefined`, opaque markers: Dim
//! - Numbers, booleans, structure: Normal

use std::fmt;

use chrono::SecondsFormat;

use crate::colors::Colors;
use crate::value::{PromiseState, Value};

impl Value {
    /// Render the value for display, optionally colored.
    pub fn format(&self, colors: Colors) -> String {
        let mut out = String::new();
        format_value(&mut out, self, &colors);
        out
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(Colors::OFF))
    }
}

fn format_value(out: &mut String, value: &Value, c: &Colors) {
    match value {
        Value::Undefined => push_colored(out, c.dim, "undefined", c),
        Value::Null => push_colored(out, c.dim, "null", c),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&format_number(*n)),
        Value::BigInt(n) => {
            out.push_str(&n.to_string());
            out.push('n');
        }
        Value::String(s) => {
            out.push_str(c.green);
            out.push('"');
            out.push_str(&escape_string(s));
            out.push('"');
            out.push_str(c.reset);
        }
        Value::Symbol(sym) => {
            out.push_str("Symbol(");
            if let Some(desc) = sym.description() {
                out.push_str(&escape_string(desc));
            }
            out.push(')');
        }
        Value::Array(items) => {
            out.push('[');
            format_list(out, items.iter(), c);
            out.push(']');
        }
        Value::Object(obj) => {
            if obj.is_empty() {
                out.push_str("{}");
                return;
            }
            out.push_str("{ ");
            for (i, (key, value)) in obj.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(c.blue);
                if is_identifier(key) {
                    out.push_str(key);
                } else {
                    out.push('"');
                    out.push_str(&escape_string(key));
                    out.push('"');
                }
                out.push_str(c.reset);
                out.push_str(": ");
                format_value(out, value, c);
            }
            out.push_str(" }");
        }
        Value::Function(func) => match func.name() {
            Some(name) if !name.is_empty() => {
                out.push_str("[Function: ");
                out.push_str(name);
                out.push(']');
            }
            _ => out.push_str("[Function (anonymous)]"),
        },
        Value::Date(date) => {
            out.push_str(&date.instant().to_rfc3339_opts(SecondsFormat::Millis, true));
        }
        Value::RegExp(re) => {
            out.push('/');
            out.push_str(re.source());
            out.push('/');
            out.push_str(re.flags());
        }
        Value::Set(set) => {
            out.push_str(&format!("Set({})", set.len()));
            format_braced(out, set.is_empty(), |out| format_list(out, set.iter(), c));
        }
        Value::Map(map) => {
            out.push_str(&format!("Map({})", map.len()));
            format_braced(out, map.is_empty(), |out| {
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    format_value(out, key, c);
                    out.push_str(" => ");
                    format_value(out, value, c);
                }
            });
        }
        Value::WeakSet(_) => {
            out.push_str("WeakSet { ");
            push_colored(out, c.dim, "<items unknown>", c);
            out.push_str(" }");
        }
        Value::WeakMap(_) => {
            out.push_str("WeakMap { ");
            push_colored(out, c.dim, "<items unknown>", c);
            out.push_str(" }");
        }
        Value::Promise(promise) => {
            out.push_str("Promise { ");
            match promise.state() {
                PromiseState::Pending => push_colored(out, c.dim, "<pending>", c),
                PromiseState::Fulfilled(v) => format_value(out, v, c),
                PromiseState::Rejected(v) => {
                    push_colored(out, c.dim, "<rejected>", c);
                    out.push(' ');
                    format_value(out, v, c);
                }
            }
            out.push_str(" }");
        }
    }
}

fn format_list<'a>(out: &mut String, items: impl Iterator<Item = &'a Value>, c: &Colors) {
    for (i, item) in items.enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        format_value(out, item, c);
    }
}

fn format_braced(out: &mut String, empty: bool, body: impl FnOnce(&mut String)) {
    if empty {
        out.push_str(" {}");
        return;
    }
    out.push_str(" { ");
    body(out);
    out.push_str(" }");
}

fn push_colored(out: &mut String, color: &str, text: &str, c: &Colors) {
    out.push_str(color);
    out.push_str(text);
    out.push_str(c.reset);
}

/// Render a number the way the runtime prints it.
///
/// Integers print without a fraction, negative zero keeps its sign, and
/// magnitudes outside `[1e-6, 1e21)` switch to exponent notation.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_owned();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if n == 0.0 {
        return if n.is_sign_negative() { "-0" } else { "0" }.to_owned();
    }

    let magnitude = n.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let rendered = format!("{n:e}");
        return match rendered.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => rendered,
        };
    }
    format!("{n}")
}

fn escape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => {
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
