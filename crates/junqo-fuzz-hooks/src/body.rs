// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Typed GraphQL request bodies
//!
//! A [`Document`] is the tree the generation engine hands to the hooks: a list
//! of operations, each with a selection set whose fields carry arguments.
//! Only the parts the hooks inspect are modelled; fragments and directives are
//! not. Documents travel as JSON (serde) and render back to GraphQL source
//! through [`std::fmt::Display`].
//!
//! # Example
//!
//! ```
//! use junqo_fuzz_hooks::body::{Document, Selection, Value};
//!
//! let body = Document::mutation(
//!     Selection::new("deleteUser")
//!         .with_argument("id", Value::string("x"))
//!         .with_field("id"),
//! );
//! assert_eq!(body.root_field().unwrap().name, "deleteUser");
//! assert_eq!(
//!     body.to_string(),
//!     "mutation {\n  deleteUser(id: \"x\") {\n    id\n  }\n}\n"
//! );
//! ```

use std::fmt::{self, Write as _};

use serde::{Deserialize, Serialize};

// ============================================================================
// Tree types
// ============================================================================

/// An executable GraphQL document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Operations in source order
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

/// The kind of a GraphQL operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    /// Read-only operation
    Query,
    /// State-changing operation
    Mutation,
    /// Streaming operation
    Subscription,
}

/// One operation definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    /// Operation kind
    pub operation: OperationType,
    /// Optional operation name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Top-level fields
    #[serde(default)]
    pub selections: Vec<Selection>,
}

/// A field selection, possibly with arguments and a nested selection set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Field name; for a top-level field this is the operation name the hooks
    /// dispatch on (`createUser`, `deleteUser`, ...)
    pub name: String,
    /// Response alias
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Arguments in source order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<Argument>,
    /// Sub-selections
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selections: Vec<Selection>,
}

/// A named argument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    /// Argument name
    pub name: String,
    /// Argument value
    pub value: Value,
}

/// A field of an input object literal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectField {
    /// Field name
    pub name: String,
    /// Field value
    pub value: Value,
}

/// A GraphQL input value literal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Value {
    /// `null`
    Null,
    /// Integer literal
    Int(i64),
    /// Float literal
    Float(f64),
    /// String literal
    String(String),
    /// `true` / `false`
    Boolean(bool),
    /// Enum literal
    Enum(String),
    /// `$name` variable reference
    Variable(String),
    /// List literal
    List(Vec<Value>),
    /// Input object literal
    Object(Vec<ObjectField>),
}

// ============================================================================
// Construction and lookup
// ============================================================================

impl Document {
    /// A document holding one anonymous mutation with a single root field
    #[must_use]
    pub fn mutation(root: Selection) -> Self {
        Self::single(OperationType::Mutation, root)
    }

    /// A document holding one anonymous query with a single root field
    #[must_use]
    pub fn query(root: Selection) -> Self {
        Self::single(OperationType::Query, root)
    }

    fn single(operation: OperationType, root: Selection) -> Self {
        Self {
            definitions: vec![Definition {
                operation,
                name: None,
                selections: vec![root],
            }],
        }
    }

    /// The first top-level field of the first operation
    ///
    /// This is the field the hooks dispatch on. `None` for an empty document
    /// or an operation without selections.
    #[must_use]
    pub fn root_field(&self) -> Option<&Selection> {
        self.definitions.first()?.selections.first()
    }

    /// Mutable access to [`Document::root_field`]
    pub fn root_field_mut(&mut self) -> Option<&mut Selection> {
        self.definitions.first_mut()?.selections.first_mut()
    }

    /// Parse a document from its JSON form
    ///
    /// # Errors
    ///
    /// Returns the serde error if `json` is not a valid document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to a single line of JSON
    ///
    /// # Errors
    ///
    /// Returns the serde error if a float value is not finite.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Selection {
    /// A bare field
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            arguments: Vec::new(),
            selections: Vec::new(),
        }
    }

    /// Append an argument
    #[must_use]
    pub fn with_argument(mut self, name: impl Into<String>, value: Value) -> Self {
        self.arguments.push(Argument {
            name: name.into(),
            value,
        });
        self
    }

    /// Append a scalar sub-field
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>) -> Self {
        self.selections.push(Selection::new(name));
        self
    }

    /// The first argument called `name`
    #[must_use]
    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name == name)
    }
}

impl Value {
    /// A string literal
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Value::String(value.into())
    }

    /// An input object literal from `(name, value)` pairs
    #[must_use]
    pub fn object<N: Into<String>>(fields: impl IntoIterator<Item = (N, Value)>) -> Self {
        Value::Object(
            fields
                .into_iter()
                .map(|(name, value)| ObjectField {
                    name: name.into(),
                    value,
                })
                .collect(),
        )
    }

    /// The contents of a string literal
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Short name of the literal kind, for diagnostics
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Boolean(_) => "boolean",
            Value::Enum(_) => "enum",
            Value::Variable(_) => "variable",
            Value::List(_) => "list",
            Value::Object(_) => "object",
        }
    }
}

// ============================================================================
// GraphQL rendering
// ============================================================================

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, definition) in self.definitions.iter().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            write!(f, "{definition}")?;
        }
        Ok(())
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OperationType::Query => "query",
            OperationType::Mutation => "mutation",
            OperationType::Subscription => "subscription",
        })
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.operation)?;
        if let Some(name) = &self.name {
            write!(f, " {name}")?;
        }
        f.write_str(" {\n")?;
        for selection in &self.selections {
            write_selection(f, selection, 1)?;
        }
        f.write_str("}\n")
    }
}

fn write_selection(f: &mut fmt::Formatter<'_>, selection: &Selection, depth: usize) -> fmt::Result {
    let indent = "  ".repeat(depth);
    f.write_str(&indent)?;
    if let Some(alias) = &selection.alias {
        write!(f, "{alias}: ")?;
    }
    f.write_str(&selection.name)?;
    if !selection.arguments.is_empty() {
        f.write_char('(')?;
        for (i, arg) in selection.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", arg.name, arg.value)?;
        }
        f.write_char(')')?;
    }
    if selection.selections.is_empty() {
        return f.write_char('\n');
    }
    f.write_str(" {\n")?;
    for child in &selection.selections {
        write_selection(f, child, depth + 1)?;
    }
    writeln!(f, "{indent}}}")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => {
                let text = x.to_string();
                if x.is_finite() && !text.contains(['.', 'e', 'E']) {
                    write!(f, "{text}.0")
                } else {
                    f.write_str(&text)
                }
            }
            Value::String(s) => write_string_literal(f, s),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Enum(e) => f.write_str(e),
            Value::Variable(v) => write!(f, "${v}"),
            Value::List(items) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_char(']')
            }
            Value::Object(fields) => {
                f.write_char('{')?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", field.name, field.value)?;
                }
                f.write_char('}')
            }
        }
    }
}

fn write_string_literal(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_control() => write!(f, "\\u{:04x}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}
