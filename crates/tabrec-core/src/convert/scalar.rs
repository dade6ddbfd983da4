//! Scalar conversion
//!
//! Decodes a single cell's text into a native scalar value. The closed set
//! of supported types is expressed through the [`FromCell`] trait; generated
//! accessor code picks the target type at the call site, so there is no
//! runtime reflection anywhere in the decode path.

use crate::error::{ConvResult, FormatError};

/// A scalar type that can be decoded from cell text.
///
/// Implemented for `bool`, the fixed-width integers, `f32`/`f64`, and
/// `String` (strings appear as map keys and values). The trait is sealed in
/// spirit: the conversion grammar only defines these types, and generated
/// code never needs others.
pub trait FromCell: Sized {
    /// Schema name of this type, used in error messages
    const TYPE_NAME: &'static str;

    /// The zero value returned for empty or absent cells
    fn zero() -> Self;

    /// Parse a non-empty literal.
    ///
    /// Callers guarantee `text` is non-empty; the empty-input defaulting
    /// rule is applied by [`parse_scalar`] before this is reached.
    fn from_literal(text: &str) -> ConvResult<Self>;
}

/// Decode cell text into a scalar value.
///
/// Empty text returns the type's zero value without error; absent cells are
/// represented by their callers as empty text, so the same rule covers both.
/// Non-empty text that is not a valid literal for the target type fails with
/// [`FormatError`].
///
/// # Example
///
/// ```rust
/// use tabrec_core::parse_scalar;
///
/// assert_eq!(parse_scalar::<i32>("42").unwrap(), 42);
/// assert_eq!(parse_scalar::<i32>("").unwrap(), 0);
/// assert!(parse_scalar::<i32>("forty-two").is_err());
/// ```
pub fn parse_scalar<T: FromCell>(text: &str) -> ConvResult<T> {
    if text.is_empty() {
        Ok(T::zero())
    } else {
        T::from_literal(text)
    }
}

impl FromCell for bool {
    const TYPE_NAME: &'static str = "bool";

    fn zero() -> Self {
        false
    }

    fn from_literal(text: &str) -> ConvResult<Self> {
        // Tables commonly encode booleans as the digits 0/1; check those
        // before the word literals.
        match text {
            "0" => Ok(false),
            "1" => Ok(true),
            _ => text
                .parse::<bool>()
                .map_err(|_| FormatError::new(Self::TYPE_NAME, text)),
        }
    }
}

macro_rules! numeric_from_cell {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl FromCell for $ty {
                const TYPE_NAME: &'static str = $name;

                fn zero() -> Self {
                    0 as $ty
                }

                fn from_literal(text: &str) -> ConvResult<Self> {
                    text.parse::<$ty>()
                        .map_err(|_| FormatError::new(Self::TYPE_NAME, text))
                }
            }
        )*
    };
}

numeric_from_cell! {
    i8 => "int8",
    i16 => "int16",
    i32 => "int32",
    i64 => "int64",
    u8 => "uint8",
    u16 => "uint16",
    u32 => "uint32",
    u64 => "uint64",
    f32 => "float32",
    f64 => "float64",
}

impl FromCell for String {
    const TYPE_NAME: &'static str = "string";

    fn zero() -> Self {
        String::new()
    }

    fn from_literal(text: &str) -> ConvResult<Self> {
        Ok(text.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(parse_scalar::<bool>("").unwrap(), false);
        assert_eq!(parse_scalar::<i8>("").unwrap(), 0);
        assert_eq!(parse_scalar::<i16>("").unwrap(), 0);
        assert_eq!(parse_scalar::<i32>("").unwrap(), 0);
        assert_eq!(parse_scalar::<i64>("").unwrap(), 0);
        assert_eq!(parse_scalar::<u8>("").unwrap(), 0);
        assert_eq!(parse_scalar::<u16>("").unwrap(), 0);
        assert_eq!(parse_scalar::<u32>("").unwrap(), 0);
        assert_eq!(parse_scalar::<u64>("").unwrap(), 0);
        assert_eq!(parse_scalar::<f32>("").unwrap(), 0.0);
        assert_eq!(parse_scalar::<f64>("").unwrap(), 0.0);
        assert_eq!(parse_scalar::<String>("").unwrap(), "");
    }

    #[test]
    fn test_bool_digit_tier() {
        assert_eq!(parse_scalar::<bool>("0").unwrap(), false);
        assert_eq!(parse_scalar::<bool>("1").unwrap(), true);
    }

    #[test]
    fn test_bool_word_tier() {
        assert_eq!(parse_scalar::<bool>("true").unwrap(), true);
        assert_eq!(parse_scalar::<bool>("false").unwrap(), false);
        assert!(parse_scalar::<bool>("yes").is_err());
        assert!(parse_scalar::<bool>("2").is_err());
    }

    #[test]
    fn test_integer_literals() {
        assert_eq!(parse_scalar::<i32>("42").unwrap(), 42);
        assert_eq!(parse_scalar::<i32>("-42").unwrap(), -42);
        assert_eq!(parse_scalar::<u64>("18446744073709551615").unwrap(), u64::MAX);
        assert_eq!(parse_scalar::<i8>("-128").unwrap(), i8::MIN);
    }

    #[test]
    fn test_float_literals() {
        assert_eq!(parse_scalar::<f64>("3.5").unwrap(), 3.5);
        assert_eq!(parse_scalar::<f32>("-0.25").unwrap(), -0.25);
        assert_eq!(parse_scalar::<f64>("1e6").unwrap(), 1_000_000.0);
    }

    #[test]
    fn test_out_of_range_is_format_error() {
        // Width matters: the same literal is valid for a wider type.
        assert!(parse_scalar::<i8>("128").is_err());
        assert_eq!(parse_scalar::<i16>("128").unwrap(), 128);
        assert!(parse_scalar::<u32>("-1").is_err());
    }

    #[test]
    fn test_format_error_carries_input() {
        let err = parse_scalar::<i32>("x").unwrap_err();
        assert_eq!(err.target, "int32");
        assert_eq!(err.text, "x");
    }

    #[test]
    fn test_no_trimming() {
        // Whitespace is not part of the grammar; padded literals fail.
        assert!(parse_scalar::<i32>(" 1").is_err());
        assert!(parse_scalar::<bool>("true ").is_err());
    }
}
