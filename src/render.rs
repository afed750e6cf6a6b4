//! Purpose: Turn a decoded expression value into the text printed on stdout.
//! Exports: `OutputFormat`, `render`.
//! Role: Small, pure formatter used by the CLI emission path.
//! Invariants: `Display` prints top-level strings bare; everything else as compact JSON.
//! Invariants: Numbers print with the digits they were written with.
//! Invariants: ANSI escapes appear only in `Pretty` output and only when enabled.
use serde_json::{Map, Value};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OutputFormat {
    /// Plain value: bare strings, numbers as written, compact containers.
    Display,
    /// Compact JSON, strings quoted.
    Json,
    /// Indented JSON, optionally colored.
    Pretty,
}

pub fn render(value: &Value, format: OutputFormat, use_color: bool) -> String {
    match format {
        OutputFormat::Display => match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        },
        OutputFormat::Json => value.to_string(),
        OutputFormat::Pretty => {
            let mut painter = Painter {
                use_color,
                out: String::new(),
            };
            painter.value(value, 0);
            painter.out
        }
    }
}

const INDENT: &str = "  ";

// Basic 8-color palette; bright variants lose contrast on some themes.
const COLOR_KEY: &str = "36";
const COLOR_STRING: &str = "32";
const COLOR_NUMBER: &str = "33";
const COLOR_LITERAL: &str = "35";

struct Painter {
    use_color: bool,
    out: String,
}

impl Painter {
    fn value(&mut self, value: &Value, depth: usize) {
        match value {
            Value::Null => self.colored("null", COLOR_LITERAL),
            Value::Bool(flag) => self.colored(if *flag { "true" } else { "false" }, COLOR_LITERAL),
            Value::Number(num) => self.colored(&num.to_string(), COLOR_NUMBER),
            Value::String(text) => self.colored(&quoted(text), COLOR_STRING),
            Value::Array(items) => self.array(items, depth),
            Value::Object(map) => self.object(map, depth),
        }
    }

    fn array(&mut self, items: &[Value], depth: usize) {
        if items.is_empty() {
            self.out.push_str("[]");
            return;
        }
        self.out.push_str("[\n");
        for (idx, item) in items.iter().enumerate() {
            self.indent(depth + 1);
            self.value(item, depth + 1);
            self.separator(idx + 1 < items.len());
        }
        self.indent(depth);
        self.out.push(']');
    }

    fn object(&mut self, map: &Map<String, Value>, depth: usize) {
        if map.is_empty() {
            self.out.push_str("{}");
            return;
        }
        self.out.push_str("{\n");
        let len = map.len();
        for (idx, (key, item)) in map.iter().enumerate() {
            self.indent(depth + 1);
            self.colored(&quoted(key), COLOR_KEY);
            self.out.push_str(": ");
            self.value(item, depth + 1);
            self.separator(idx + 1 < len);
        }
        self.indent(depth);
        self.out.push('}');
    }

    fn separator(&mut self, more: bool) {
        if more {
            self.out.push(',');
        }
        self.out.push('\n');
    }

    fn indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.out.push_str(INDENT);
        }
    }

    fn colored(&mut self, text: &str, color: &str) {
        if self.use_color {
            self.out.push_str("\x1b[");
            self.out.push_str(color);
            self.out.push('m');
            self.out.push_str(text);
            self.out.push_str("\x1b[0m");
        } else {
            self.out.push_str(text);
        }
    }
}

fn quoted(text: &str) -> String {
    Value::from(text).to_string()
}
