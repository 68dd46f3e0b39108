use crate::ast::{Map, Value};

/// Renders a value tree as an indented outline of kinds and scalar contents.
/// This is a reading aid, not JSON.
pub struct Outline {
    depth: usize,
}

impl Default for Outline {
    fn default() -> Self {
        Self::new()
    }
}

impl Outline {
    pub fn new() -> Self {
        Self { depth: 0 }
    }
    fn indent(&self) -> String {
        " ".repeat(4).repeat(self.depth)
    }
    fn render_string(&self, s: &str) -> String {
        format!("{:?}", s)
    }
    fn render_object(&mut self, map: &Map) -> String {
        let header = format!("object ({})", map.len());
        if map.is_empty() {
            return header;
        }
        self.depth += 1;
        let inner = map
            .iter()
            .map(|(key, value)| format!("{}{}: {}", self.indent(), key, self.render(value)))
            .collect::<Vec<String>>()
            .join("\n");
        self.depth -= 1;
        format!("{}\n{}", header, inner)
    }
    fn render_array(&mut self, values: &[Value]) -> String {
        let header = format!("array ({})", values.len());
        if values.is_empty() {
            return header;
        }
        self.depth += 1;
        let inner = values
            .iter()
            .enumerate()
            .map(|(i, v)| format!("{}[{}]: {}", self.indent(), i, self.render(v)))
            .collect::<Vec<String>>()
            .join("\n");
        self.depth -= 1;
        format!("{}\n{}", header, inner)
    }
    pub fn render(&mut self, v: &Value) -> String {
        match v {
            Value::Null => String::from("null"),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::String(s) => self.render_string(s),
            Value::Object(map) => self.render_object(map),
            Value::Array(values) => self.render_array(values),
        }
    }
}
