//! Host binding layer describing the shape of a value at validation time.
//!
//! Rust has no runtime reflection, so a record hands the validator an explicit
//! list of [`FieldDescriptor`]s instead: for every field its name, its rule
//! annotation, whether it is public, and a typed view of its value. Records
//! normally get this through the [`record!`](crate::record) macro; anything
//! else implementing [`Inspect`] reports itself as a plain value and is
//! rejected by the validator.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// The runtime kind of a field or top-level value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Text values
    String,
    /// Integer values of any width up to 64 bits
    Int,
    /// Integers that do not widen losslessly into `i64` on every target
    WideInt,
    /// Single characters
    Char,
    /// Floating point values
    Float,
    /// Boolean values
    Bool,
    /// Sequences (vectors, slices, arrays)
    Slice,
    /// Key-value mappings
    Map,
    /// Nested records
    Struct,
    /// Optional values
    Option,
    /// Values the binding layer does not look into
    Opaque,
}

impl ValueKind {
    /// Returns the string representation of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Int => "int",
            ValueKind::WideInt => "wide int",
            ValueKind::Char => "char",
            ValueKind::Float => "float",
            ValueKind::Bool => "bool",
            ValueKind::Slice => "slice",
            ValueKind::Map => "map",
            ValueKind::Struct => "struct",
            ValueKind::Option => "option",
            ValueKind::Opaque => "opaque",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A borrowed, typed view of one field value.
///
/// Only text and integers carry their payload; every other kind exists so
/// that constraints can report it as unsupported. [`FieldValue::Opaque`] is
/// what the [`record!`](crate::record) macro binds for fields without a rule,
/// which are never evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Str(&'a str),
    Int(i64),
    WideInt,
    Char(char),
    Float(f64),
    Bool(bool),
    Slice,
    Map,
    Struct,
    Option,
    Opaque,
}

impl FieldValue<'_> {
    /// Returns the runtime kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            FieldValue::Str(_) => ValueKind::String,
            FieldValue::Int(_) => ValueKind::Int,
            FieldValue::WideInt => ValueKind::WideInt,
            FieldValue::Char(_) => ValueKind::Char,
            FieldValue::Float(_) => ValueKind::Float,
            FieldValue::Bool(_) => ValueKind::Bool,
            FieldValue::Slice => ValueKind::Slice,
            FieldValue::Map => ValueKind::Map,
            FieldValue::Struct => ValueKind::Struct,
            FieldValue::Option => ValueKind::Option,
            FieldValue::Opaque => ValueKind::Opaque,
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Str(s) => write!(f, "{s:?}"),
            FieldValue::Int(i) => write!(f, "{i}"),
            FieldValue::Char(c) => write!(f, "{c:?}"),
            FieldValue::Float(x) => write!(f, "{x}"),
            FieldValue::Bool(b) => write!(f, "{b}"),
            other => write!(f, "<{}>", other.kind()),
        }
    }
}

/// Types that can be viewed as a [`FieldValue`].
pub trait AsFieldValue {
    fn field_value(&self) -> FieldValue<'_>;
}

impl AsFieldValue for str {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self)
    }
}

impl AsFieldValue for String {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self.as_str())
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for &T {
    fn field_value(&self) -> FieldValue<'_> {
        (**self).field_value()
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for Box<T> {
    fn field_value(&self) -> FieldValue<'_> {
        (**self).field_value()
    }
}

macro_rules! impl_int_field_value {
    ($($t:ty),*) => {
        $(
            impl AsFieldValue for $t {
                fn field_value(&self) -> FieldValue<'_> {
                    FieldValue::Int(i64::from(*self))
                }
            }
        )*
    };
}

impl_int_field_value!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_wide_int_field_value {
    ($($t:ty),*) => {
        $(
            impl AsFieldValue for $t {
                fn field_value(&self) -> FieldValue<'_> {
                    FieldValue::WideInt
                }
            }
        )*
    };
}

impl_wide_int_field_value!(u64, u128, usize, i128, isize);

impl AsFieldValue for char {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Char(*self)
    }
}

impl<T> AsFieldValue for Option<T> {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Option
    }
}

impl AsFieldValue for f32 {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Float(f64::from(*self))
    }
}

impl AsFieldValue for f64 {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Float(*self)
    }
}

impl AsFieldValue for bool {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Bool(*self)
    }
}

impl<T> AsFieldValue for Vec<T> {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Slice
    }
}

impl<T> AsFieldValue for [T] {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Slice
    }
}

impl<T, const N: usize> AsFieldValue for [T; N] {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Slice
    }
}

impl<K, V, S> AsFieldValue for HashMap<K, V, S> {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Map
    }
}

impl<K, V> AsFieldValue for BTreeMap<K, V> {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Map
    }
}

/// Everything the validator needs to know about one field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDescriptor<'a> {
    /// Field name as declared
    pub name: &'a str,
    /// Rule annotation, empty when the field has none
    pub rule: &'a str,
    /// Whether the field is visible to code outside its module
    pub accessible: bool,
    /// Typed view of the current value
    pub value: FieldValue<'a>,
}

impl<'a> FieldDescriptor<'a> {
    pub fn new(name: &'a str, rule: &'a str, accessible: bool, value: FieldValue<'a>) -> Self {
        Self {
            name,
            rule,
            accessible,
            value,
        }
    }

    /// Describes a public field.
    pub fn public(name: &'a str, rule: &'a str, value: FieldValue<'a>) -> Self {
        Self::new(name, rule, true, value)
    }

    /// Describes a private field.
    pub fn private(name: &'a str, rule: &'a str, value: FieldValue<'a>) -> Self {
        Self::new(name, rule, false, value)
    }

    /// Returns true if the field carries a non-empty rule annotation.
    pub fn has_rule(&self) -> bool {
        !self.rule.is_empty()
    }
}

/// The top-level shape of a value handed to the validator.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape<'a> {
    /// A record with its fields in declaration order
    Struct(Vec<FieldDescriptor<'a>>),
    /// Anything that is not a record
    Value(ValueKind),
}

impl Shape<'_> {
    /// Returns the kind of the inspected value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Shape::Struct(_) => ValueKind::Struct,
            Shape::Value(kind) => *kind,
        }
    }
}

/// Types whose shape can be inspected by the validator.
///
/// Records implement this through [`record!`](crate::record); scalars and
/// collections implement it as [`Shape::Value`] so that passing them to the
/// validator fails with a structural error instead of failing to compile.
pub trait Inspect {
    fn inspect(&self) -> Shape<'_>;
}

impl<T: Inspect + ?Sized> Inspect for &T {
    fn inspect(&self) -> Shape<'_> {
        (**self).inspect()
    }
}

impl<T: Inspect + ?Sized> Inspect for Box<T> {
    fn inspect(&self) -> Shape<'_> {
        (**self).inspect()
    }
}

macro_rules! impl_value_inspect {
    ($($t:ty),*) => {
        $(
            impl Inspect for $t {
                fn inspect(&self) -> Shape<'_> {
                    Shape::Value(self.field_value().kind())
                }
            }
        )*
    };
}

impl_value_inspect!(
    str, String, i8, i16, i32, i64, u8, u16, u32, u64, u128, usize, i128, isize, char, f32, f64,
    bool
);

impl<T> Inspect for Option<T> {
    fn inspect(&self) -> Shape<'_> {
        Shape::Value(ValueKind::Option)
    }
}

impl<T> Inspect for Vec<T> {
    fn inspect(&self) -> Shape<'_> {
        Shape::Value(ValueKind::Slice)
    }
}

impl<T> Inspect for [T] {
    fn inspect(&self) -> Shape<'_> {
        Shape::Value(ValueKind::Slice)
    }
}

impl<T, const N: usize> Inspect for [T; N] {
    fn inspect(&self) -> Shape<'_> {
        Shape::Value(ValueKind::Slice)
    }
}

impl<K, V, S> Inspect for HashMap<K, V, S> {
    fn inspect(&self) -> Shape<'_> {
        Shape::Value(ValueKind::Map)
    }
}

impl<K, V> Inspect for BTreeMap<K, V> {
    fn inspect(&self) -> Shape<'_> {
        Shape::Value(ValueKind::Map)
    }
}

/// Declares a record together with its [`Inspect`] binding.
///
/// Each field may carry a rule annotation after `=>`. Only annotated fields
/// need an [`AsFieldValue`] impl; fields without a rule may have any type and
/// are bound as [`FieldValue::Opaque`]. A field counts as accessible only
/// when declared exactly `pub`; private fields and restricted visibilities
/// such as `pub(crate)` are not. Generic records are not supported.
///
/// # Examples
///
/// ```rust
/// use field_guard::record;
/// use field_guard::core::{Inspect, Shape};
///
/// record! {
///     #[derive(Debug, Clone)]
///     pub struct Account {
///         pub code: String => "len:5",
///         pub age: i64 => "min:18",
///         pub nickname: String,
///     }
/// }
///
/// let account = Account { code: "AB123".into(), age: 30, nickname: String::new() };
/// match account.inspect() {
///     Shape::Struct(fields) => {
///         assert_eq!(fields.len(), 3);
///         assert_eq!(fields[0].rule, "len:5");
///         assert_eq!(fields[2].rule, "");
///     }
///     Shape::Value(_) => unreachable!(),
/// }
/// ```
#[macro_export]
macro_rules! record {
    (@value $value:expr, $rule:literal) => {
        $crate::core::AsFieldValue::field_value($value)
    };
    (@value $value:expr) => {{
        let _ = $value;
        $crate::core::FieldValue::Opaque
    }};
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty $(=> $rule:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $ty,
            )*
        }

        impl $crate::core::Inspect for $name {
            fn inspect(&self) -> $crate::core::Shape<'_> {
                $crate::core::Shape::Struct(vec![
                    $(
                        $crate::core::FieldDescriptor::new(
                            stringify!($field),
                            {
                                #[allow(unused_variables)]
                                let rule: &'static str = "";
                                $( let rule: &'static str = $rule; )?
                                rule
                            },
                            stringify!($fvis) == "pub",
                            $crate::record!(@value &self.$field $(, $rule)?),
                        ),
                    )*
                ])
            }
        }

        impl $crate::core::AsFieldValue for $name {
            fn field_value(&self) -> $crate::core::FieldValue<'_> {
                $crate::core::FieldValue::Struct
            }
        }
    };
}
