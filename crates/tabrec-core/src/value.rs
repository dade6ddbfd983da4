//! Tagged scalar values
//!
//! Generated accessor code usually resolves target types at compile time via
//! [`FromCell`](crate::FromCell). Callers that carry textual type tags from a
//! schema (e.g. a generator driving templates) instead dispatch over
//! [`ScalarKind`], a closed enumeration of the supported scalar types, and
//! receive a [`ScalarValue`]. There is no open-ended runtime reflection.

use std::fmt;

use crate::convert::parse_scalar;
use crate::error::ConvResult;

/// The closed set of scalar types supported by the conversion grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScalarKind {
    /// Boolean (`0`/`1`/`true`/`false`)
    Bool,
    /// Signed 8-bit integer
    Int8,
    /// Signed 16-bit integer
    Int16,
    /// Signed 32-bit integer
    Int32,
    /// Signed 64-bit integer
    Int64,
    /// Unsigned 8-bit integer
    Uint8,
    /// Unsigned 16-bit integer
    Uint16,
    /// Unsigned 32-bit integer
    Uint32,
    /// Unsigned 64-bit integer
    Uint64,
    /// 32-bit floating point
    Float32,
    /// 64-bit floating point
    Float64,
    /// UTF-8 string
    String,
}

impl ScalarKind {
    /// Get the schema name for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::Int8 => "int8",
            ScalarKind::Int16 => "int16",
            ScalarKind::Int32 => "int32",
            ScalarKind::Int64 => "int64",
            ScalarKind::Uint8 => "uint8",
            ScalarKind::Uint16 => "uint16",
            ScalarKind::Uint32 => "uint32",
            ScalarKind::Uint64 => "uint64",
            ScalarKind::Float32 => "float32",
            ScalarKind::Float64 => "float64",
            ScalarKind::String => "string",
        }
    }

    /// Look up a kind by its schema name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bool" => Some(ScalarKind::Bool),
            "int8" => Some(ScalarKind::Int8),
            "int16" => Some(ScalarKind::Int16),
            "int32" => Some(ScalarKind::Int32),
            "int64" => Some(ScalarKind::Int64),
            "uint8" => Some(ScalarKind::Uint8),
            "uint16" => Some(ScalarKind::Uint16),
            "uint32" => Some(ScalarKind::Uint32),
            "uint64" => Some(ScalarKind::Uint64),
            "float32" => Some(ScalarKind::Float32),
            "float64" => Some(ScalarKind::Float64),
            "string" => Some(ScalarKind::String),
            _ => None,
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A decoded scalar value tagged with its kind
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScalarValue {
    /// Boolean value
    Bool(bool),
    /// Signed 8-bit integer
    Int8(i8),
    /// Signed 16-bit integer
    Int16(i16),
    /// Signed 32-bit integer
    Int32(i32),
    /// Signed 64-bit integer
    Int64(i64),
    /// Unsigned 8-bit integer
    Uint8(u8),
    /// Unsigned 16-bit integer
    Uint16(u16),
    /// Unsigned 32-bit integer
    Uint32(u32),
    /// Unsigned 64-bit integer
    Uint64(u64),
    /// 32-bit floating point
    Float32(f32),
    /// 64-bit floating point
    Float64(f64),
    /// UTF-8 string
    String(String),
}

impl ScalarValue {
    /// Decode cell text as the given kind.
    ///
    /// Same semantics as the typed path: empty text yields the kind's zero
    /// value, malformed non-empty text fails with `FormatError`.
    pub fn parse(kind: ScalarKind, text: &str) -> ConvResult<ScalarValue> {
        Ok(match kind {
            ScalarKind::Bool => ScalarValue::Bool(parse_scalar(text)?),
            ScalarKind::Int8 => ScalarValue::Int8(parse_scalar(text)?),
            ScalarKind::Int16 => ScalarValue::Int16(parse_scalar(text)?),
            ScalarKind::Int32 => ScalarValue::Int32(parse_scalar(text)?),
            ScalarKind::Int64 => ScalarValue::Int64(parse_scalar(text)?),
            ScalarKind::Uint8 => ScalarValue::Uint8(parse_scalar(text)?),
            ScalarKind::Uint16 => ScalarValue::Uint16(parse_scalar(text)?),
            ScalarKind::Uint32 => ScalarValue::Uint32(parse_scalar(text)?),
            ScalarKind::Uint64 => ScalarValue::Uint64(parse_scalar(text)?),
            ScalarKind::Float32 => ScalarValue::Float32(parse_scalar(text)?),
            ScalarKind::Float64 => ScalarValue::Float64(parse_scalar(text)?),
            ScalarKind::String => ScalarValue::String(parse_scalar(text)?),
        })
    }

    /// The zero value for the given kind
    pub fn zero(kind: ScalarKind) -> ScalarValue {
        match kind {
            ScalarKind::Bool => ScalarValue::Bool(false),
            ScalarKind::Int8 => ScalarValue::Int8(0),
            ScalarKind::Int16 => ScalarValue::Int16(0),
            ScalarKind::Int32 => ScalarValue::Int32(0),
            ScalarKind::Int64 => ScalarValue::Int64(0),
            ScalarKind::Uint8 => ScalarValue::Uint8(0),
            ScalarKind::Uint16 => ScalarValue::Uint16(0),
            ScalarKind::Uint32 => ScalarValue::Uint32(0),
            ScalarKind::Uint64 => ScalarValue::Uint64(0),
            ScalarKind::Float32 => ScalarValue::Float32(0.0),
            ScalarKind::Float64 => ScalarValue::Float64(0.0),
            ScalarKind::String => ScalarValue::String(String::new()),
        }
    }

    /// Get the kind tag of this value
    pub fn kind(&self) -> ScalarKind {
        match self {
            ScalarValue::Bool(_) => ScalarKind::Bool,
            ScalarValue::Int8(_) => ScalarKind::Int8,
            ScalarValue::Int16(_) => ScalarKind::Int16,
            ScalarValue::Int32(_) => ScalarKind::Int32,
            ScalarValue::Int64(_) => ScalarKind::Int64,
            ScalarValue::Uint8(_) => ScalarKind::Uint8,
            ScalarValue::Uint16(_) => ScalarKind::Uint16,
            ScalarValue::Uint32(_) => ScalarKind::Uint32,
            ScalarValue::Uint64(_) => ScalarKind::Uint64,
            ScalarValue::Float32(_) => ScalarKind::Float32,
            ScalarValue::Float64(_) => ScalarKind::Float64,
            ScalarValue::String(_) => ScalarKind::String,
        }
    }

    /// Try to get the value as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ScalarValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the value as a signed 64-bit integer (widening signed ints)
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ScalarValue::Int8(n) => Some(*n as i64),
            ScalarValue::Int16(n) => Some(*n as i64),
            ScalarValue::Int32(n) => Some(*n as i64),
            ScalarValue::Int64(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as an unsigned 64-bit integer (widening unsigned ints)
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            ScalarValue::Uint8(n) => Some(*n as u64),
            ScalarValue::Uint16(n) => Some(*n as u64),
            ScalarValue::Uint32(n) => Some(*n as u64),
            ScalarValue::Uint64(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a 64-bit float (widening floats)
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ScalarValue::Float32(n) => Some(*n as f64),
            ScalarValue::Float64(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScalarValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ScalarValue {
    /// Renders the encoded text form (no escaping, see the grammar)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Bool(b) => write!(f, "{}", b),
            ScalarValue::Int8(n) => write!(f, "{}", n),
            ScalarValue::Int16(n) => write!(f, "{}", n),
            ScalarValue::Int32(n) => write!(f, "{}", n),
            ScalarValue::Int64(n) => write!(f, "{}", n),
            ScalarValue::Uint8(n) => write!(f, "{}", n),
            ScalarValue::Uint16(n) => write!(f, "{}", n),
            ScalarValue::Uint32(n) => write!(f, "{}", n),
            ScalarValue::Uint64(n) => write!(f, "{}", n),
            ScalarValue::Float32(n) => write!(f, "{}", n),
            ScalarValue::Float64(n) => write!(f, "{}", n),
            ScalarValue::String(s) => write!(f, "{}", s),
        }
    }
}
