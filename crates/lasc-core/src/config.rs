//! Deployment descriptor generation.
//!
//! Builds the `config.cue` document from an explicit field schema rather than
//! runtime type introspection: the schema is an ordered list of named, typed
//! fields (with nested sub-schemas), and the encoder maps it directly to a
//! document value. Operator-chosen defaults are then filled in by field path,
//! so the emitted document stays valid even if the field set or ordering of
//! the schema changes.
//!
//! Fields with no default (`FunctionName`, `Role`, `Code.ImageUri`) are left
//! as CUE type placeholders on purpose; the operator must fill them in by
//! hand before deploying.

use std::fmt::Write as _;

use crate::error::{LascError, Result};

/// A named, typed field of the deployment descriptor schema.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub ty: FieldType,
}

/// The type of a schema field, including nested sub-schemas.
#[derive(Debug, Clone, Copy)]
pub enum FieldType {
    String,
    Int,
    Bool,
    Struct(&'static [Field]),
}

/// Schema of the function deployment descriptor, in declared order.
///
/// Field names are emitted as document keys exactly as declared here; they
/// match the Lambda `CreateFunction` API parameters.
pub const CREATE_FUNCTION_INPUT: &[Field] = &[
    Field { name: "FunctionName", ty: FieldType::String },
    Field { name: "PackageType", ty: FieldType::String },
    Field { name: "Role", ty: FieldType::String },
    Field { name: "MemorySize", ty: FieldType::Int },
    Field { name: "Publish", ty: FieldType::Bool },
    Field { name: "Timeout", ty: FieldType::Int },
    Field {
        name: "Code",
        ty: FieldType::Struct(&[Field { name: "ImageUri", ty: FieldType::String }]),
    },
];

/// A CUE document value.
///
/// `Unset` carries the CUE type keyword that is emitted as a placeholder for
/// fields the operator must supply.
#[derive(Debug, Clone, PartialEq)]
pub enum CueValue {
    Unset(&'static str),
    String(String),
    Int(i64),
    Bool(bool),
    Struct(Vec<(&'static str, CueValue)>),
}

impl From<&str> for CueValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<i64> for CueValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for CueValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

/// Encode a schema into a document value with every field left unset.
pub fn encode(schema: &'static [Field]) -> CueValue {
    CueValue::Struct(
        schema
            .iter()
            .map(|field| {
                let value = match field.ty {
                    FieldType::String => CueValue::Unset("string"),
                    FieldType::Int => CueValue::Unset("int"),
                    FieldType::Bool => CueValue::Unset("bool"),
                    FieldType::Struct(inner) => encode(inner),
                };
                (field.name, value)
            })
            .collect(),
    )
}

impl CueValue {
    /// Fill a dot-separated field path with a concrete value.
    ///
    /// The path must name a field declared in the schema; anything else is a
    /// programmer error surfaced as [`LascError::ConfigEncode`].
    pub fn fill(mut self, path: &str, value: impl Into<CueValue>) -> Result<Self> {
        self.fill_at(path, value.into())?;
        Ok(self)
    }

    fn fill_at(&mut self, path: &str, value: CueValue) -> Result<()> {
        let CueValue::Struct(fields) = self else {
            return Err(LascError::ConfigEncode(format!(
                "path {path:?} does not address a struct"
            )));
        };

        let (head, rest) = match path.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };

        let slot = fields
            .iter_mut()
            .find(|(name, _)| *name == head)
            .ok_or_else(|| LascError::ConfigEncode(format!("no field {head:?} in schema")))?;

        match rest {
            Some(rest) => slot.1.fill_at(rest, value),
            None => {
                slot.1 = value;
                Ok(())
            }
        }
    }

    /// Render the document as CUE source text.
    ///
    /// Fields are emitted in declared order with two-space indentation. Nested
    /// single-field structs collapse to one line (`Code: ImageUri: string`),
    /// matching CUE's simplified formatting. Output ends with one newline.
    pub fn render(&self) -> Result<String> {
        let CueValue::Struct(fields) = self else {
            return Err(LascError::ConfigEncode(
                "top-level value must be a struct".into(),
            ));
        };

        let mut out = String::new();
        write_fields(&mut out, fields, 0)
            .map_err(|e| LascError::ConfigEncode(e.to_string()))?;
        Ok(out)
    }
}

fn write_fields(
    out: &mut String,
    fields: &[(&'static str, CueValue)],
    indent: usize,
) -> std::fmt::Result {
    for (name, value) in fields {
        for _ in 0..indent {
            out.push_str("  ");
        }
        write!(out, "{name}: ")?;
        write_value(out, value, indent)?;
        out.push('\n');
    }
    Ok(())
}

fn write_value(out: &mut String, value: &CueValue, indent: usize) -> std::fmt::Result {
    match value {
        CueValue::Unset(ty) => write!(out, "{ty}"),
        CueValue::String(s) => write!(out, "{s:?}"),
        CueValue::Int(i) => write!(out, "{i}"),
        CueValue::Bool(b) => write!(out, "{b}"),
        // Single-field structs collapse to `Outer: Inner: value`.
        CueValue::Struct(fields) if fields.len() == 1 => {
            let (name, value) = &fields[0];
            write!(out, "{name}: ")?;
            write_value(out, value, indent)
        }
        CueValue::Struct(fields) => {
            out.push_str("{\n");
            write_fields(out, fields, indent + 1)?;
            for _ in 0..indent {
                out.push_str("  ");
            }
            out.push('}');
            Ok(())
        }
    }
}

/// Materialize the deployment descriptor with documented defaults pre-filled.
///
/// `PackageType`, `MemorySize`, `Timeout`, and `Publish` get fixed defaults
/// for an image-based deployment. `FunctionName`, `Role`, and `Code.ImageUri`
/// have no sensible default and stay unset.
pub fn function_config() -> Result<String> {
    encode(CREATE_FUNCTION_INPUT)
        .fill("PackageType", "Image")?
        .fill("MemorySize", 128)?
        .fill("Timeout", 10)?
        .fill("Publish", true)?
        .render()
}
