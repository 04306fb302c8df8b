//! Structured output formats.
//!
//! [`write_formatted`] renders any [`Serialize`] value in one of the
//! [`OutputFormat`]s. The payload always sits under an `output` key (JSON,
//! YAML), an `<output>` root element (XML) or an `output` column (CSV), so a
//! plain string comes out as:
//!
//! | Format     | Result                                        |
//! |------------|-----------------------------------------------|
//! | Plain Text | `hello`                                       |
//! | JSON       | `{ "output": "hello" }`                       |
//! | XML        | `<output>hello</output>`                      |
//! | YAML       | `output: hello`                               |
//! | HTML       | `<html><body><p>hello</p></body></html>`      |
//! | CSV        | `output,hello`                                |
//!
//! [`FormatSelector`] holds a current format shared between threads.
//!
//! ```rust
//! use termtint::{write_formatted, OutputFormat};
//!
//! let mut out = Vec::new();
//! write_formatted(&mut out, &"hello", OutputFormat::Html).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "<html><body><p>hello</p></body></html>\n");
//! ```

use std::fmt;
use std::io::Write;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard};

use serde::Serialize;
use serde_json::Value;

use crate::error::FormatError;

/// Key, root element or column name wrapping every payload.
const ROOT: &str = "output";

/// A structured output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    #[default]
    PlainText,
    Json,
    Xml,
    Yaml,
    Html,
    Csv,
}

impl OutputFormat {
    /// Every format, in display order.
    pub fn all() -> [OutputFormat; 6] {
        [
            OutputFormat::PlainText,
            OutputFormat::Json,
            OutputFormat::Xml,
            OutputFormat::Yaml,
            OutputFormat::Html,
            OutputFormat::Csv,
        ]
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::PlainText => "Plain Text",
            OutputFormat::Json => "JSON",
            OutputFormat::Xml => "XML",
            OutputFormat::Yaml => "YAML",
            OutputFormat::Html => "HTML",
            OutputFormat::Csv => "CSV",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "plaintext" | "plain" | "text" => Ok(OutputFormat::PlainText),
            "json" => Ok(OutputFormat::Json),
            "xml" => Ok(OutputFormat::Xml),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "html" => Ok(OutputFormat::Html),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Renders `data` in `format` and writes it, newline-terminated, to `out`.
pub fn write_formatted<W, T>(out: &mut W, data: &T, format: OutputFormat) -> Result<(), FormatError>
where
    W: Write + ?Sized,
    T: Serialize + ?Sized,
{
    let rendered = format_to_string(data, format)?;
    out.write_all(rendered.as_bytes())?;
    Ok(())
}

/// Renders `data` in `format`, newline-terminated.
pub fn format_to_string<T: Serialize + ?Sized>(
    data: &T,
    format: OutputFormat,
) -> Result<String, FormatError> {
    let value = serde_json::to_value(data)?;
    let mut rendered = match format {
        OutputFormat::PlainText => plain_text(&value),
        OutputFormat::Json => serde_json::to_string_pretty(&wrap(value))?,
        OutputFormat::Yaml => serde_yaml::to_string(&wrap(value))?,
        OutputFormat::Xml => to_xml(value)?,
        OutputFormat::Html => format!(
            "<html><body><p>{}</p></body></html>",
            quick_xml::escape::escape(plain_text(&value).as_str())
        ),
        OutputFormat::Csv => to_csv(&value)?,
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}

fn wrap(value: Value) -> Value {
    let mut map = serde_json::Map::new();
    map.insert(ROOT.to_string(), value);
    Value::Object(map)
}

fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn to_xml(value: Value) -> Result<String, FormatError> {
    let xml = match value {
        Value::Object(map) => {
            let sanitized: serde_json::Map<String, Value> = map
                .into_iter()
                .map(|(k, v)| (sanitize_xml_name(&k), v))
                .collect();
            quick_xml::se::to_string_with_root(ROOT, &sanitized)?
        }
        Value::Null => quick_xml::se::to_string_with_root(ROOT, &serde_json::Map::new())?,
        Value::Array(items) => {
            let mut map = serde_json::Map::new();
            map.insert("item".to_string(), Value::Array(items));
            quick_xml::se::to_string_with_root(ROOT, &map)?
        }
        scalar => quick_xml::se::to_string_with_root(ROOT, &plain_text(&scalar))?,
    };
    Ok(xml)
}

/// Replaces characters that cannot appear in an XML element name.
fn sanitize_xml_name(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 1);
    for (i, c) in name.chars().enumerate() {
        let valid = if i == 0 {
            c.is_ascii_alphabetic() || c == '_'
        } else {
            c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')
        };
        result.push(if valid { c } else { '_' });
    }
    if result.is_empty() {
        result.push('_');
    }
    result
}

fn to_csv(value: &Value) -> Result<String, FormatError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    match value {
        Value::Object(obj) => {
            wtr.write_record(["key", "value"])?;
            for (k, v) in obj {
                wtr.write_record([k.as_str(), plain_text(v).as_str()])?;
            }
        }
        Value::Array(items) => {
            wtr.write_record([ROOT])?;
            for item in items {
                wtr.write_record([plain_text(item)])?;
            }
        }
        scalar => {
            wtr.write_record([ROOT, plain_text(scalar).as_str()])?;
        }
    }
    let bytes = wtr.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}

/// The current output format, shared between threads.
#[derive(Debug, Default)]
pub struct FormatSelector {
    current: Mutex<OutputFormat>,
}

impl FormatSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, format: OutputFormat) {
        *self.lock() = format;
    }

    pub fn get(&self) -> OutputFormat {
        *self.lock()
    }

    /// Returns to plain text.
    pub fn reset(&self) {
        self.set(OutputFormat::default());
    }

    /// Renders `data` in the current format.
    pub fn write<W, T>(&self, out: &mut W, data: &T) -> Result<(), FormatError>
    where
        W: Write + ?Sized,
        T: Serialize + ?Sized,
    {
        let format = self.get();
        write_formatted(out, data, format)
    }

    fn lock(&self) -> MutexGuard<'_, OutputFormat> {
        self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Build {
        target: String,
        passed: u32,
    }

    fn render(data: &impl Serialize, format: OutputFormat) -> String {
        format_to_string(data, format).unwrap()
    }

    #[test]
    fn test_parse_format_names() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("Plain Text".parse::<OutputFormat>().unwrap(), OutputFormat::PlainText);
        assert_eq!("plain-text".parse::<OutputFormat>().unwrap(), OutputFormat::PlainText);
        assert_eq!("yml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert!(matches!(
            "toml".parse::<OutputFormat>(),
            Err(FormatError::UnknownFormat(name)) if name == "toml"
        ));
    }

    #[test]
    fn test_display_names_parse_back() {
        for format in OutputFormat::all() {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(render(&"hello", OutputFormat::PlainText), "hello\n");
        assert_eq!(render(&42, OutputFormat::PlainText), "42\n");
    }

    #[test]
    fn test_json_wraps_under_output() {
        let result = render(&"hello", OutputFormat::Json);
        let parsed: Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["output"], "hello");
    }

    #[test]
    fn test_yaml_wraps_under_output() {
        let data = Build {
            target: "x86_64".into(),
            passed: 12,
        };
        let result = render(&data, OutputFormat::Yaml);
        assert!(result.starts_with("output:"));
        assert!(result.contains("target: x86_64"));
        assert!(result.contains("passed: 12"));
    }

    #[test]
    fn test_xml_string() {
        assert_eq!(render(&"hello", OutputFormat::Xml), "<output>hello</output>\n");
    }

    #[test]
    fn test_xml_struct() {
        let data = Build {
            target: "arm".into(),
            passed: 3,
        };
        let result = render(&data, OutputFormat::Xml);
        assert!(result.starts_with("<output>"));
        assert!(result.contains("<target>arm</target>"));
        assert!(result.contains("<passed>3</passed>"));
    }

    #[test]
    fn test_html_escapes_markup() {
        assert_eq!(
            render(&"a < b", OutputFormat::Html),
            "<html><body><p>a &lt; b</p></body></html>\n"
        );
    }

    #[test]
    fn test_csv_scalar() {
        assert_eq!(render(&"hello", OutputFormat::Csv), "output,hello\n");
    }

    #[test]
    fn test_csv_object() {
        let data = Build {
            target: "arm".into(),
            passed: 3,
        };
        let result = render(&data, OutputFormat::Csv);
        assert!(result.starts_with("key,value\n"));
        assert!(result.contains("target,arm\n"));
        assert!(result.contains("passed,3\n"));
    }

    #[test]
    fn test_sanitize_xml_name() {
        assert_eq!(sanitize_xml_name("name"), "name");
        assert_eq!(sanitize_xml_name("1abc"), "_abc");
        assert_eq!(sanitize_xml_name("a b"), "a_b");
        assert_eq!(sanitize_xml_name(""), "_");
    }

    #[test]
    fn test_selector() {
        let selector = FormatSelector::new();
        assert_eq!(selector.get(), OutputFormat::PlainText);

        selector.set(OutputFormat::Csv);
        let mut out = Vec::new();
        selector.write(&mut out, &"x").unwrap();
        assert_eq!(out, b"output,x\n");

        selector.reset();
        assert_eq!(selector.get(), OutputFormat::PlainText);
    }
}
