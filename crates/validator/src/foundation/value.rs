//! Dynamic values handed to validators.
//!
//! Validators in this crate judge loosely-typed input: a CLI argument that
//! may or may not be an integer, a path that may or may not exist, a role
//! list read from a manifest. [`Value`] is the closed set of shapes such input
//! can take, and [`Value::render`] is the single place that turns any of them
//! into the text that ends up in an error message.
//!
//! # Examples
//!
//! ```
//! use tally_validator::foundation::Value;
//!
//! assert_eq!(Value::from(true).render(), "TRUE");
//! assert_eq!(Value::Null.render(), "NULL");
//! assert_eq!(Value::from(2.75).render(), "2.75");
//! assert_eq!(Value::from("fred").type_name(), "string");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::foundation::Validator;

// ============================================================================
// OBJECT CAPABILITY
// ============================================================================

/// An opaque object carried inside a [`Value`].
///
/// Objects are identified by a class name. They may expose a string form,
/// which is then used when the object is rendered into a message, and they
/// may turn out to be validators themselves, which is how
/// [`ValidationList::set`](crate::ValidationList::set) accepts dynamically
/// supplied validators.
pub trait Object: fmt::Debug + Send + Sync {
    /// Name used when the object has no string form.
    fn class_name(&self) -> Cow<'_, str>;

    /// String form of the object, if it has one.
    fn string_form(&self) -> Option<String> {
        None
    }

    /// Returns the object as a validator, if it is one.
    fn into_validator(self: Arc<Self>) -> Option<Arc<dyn Validator>> {
        None
    }
}

/// Object wrapper that lets a validator travel as a [`Value`].
#[derive(Debug)]
struct ValidatorObject {
    class: &'static str,
    inner: Arc<dyn Validator>,
}

impl Object for ValidatorObject {
    fn class_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.class)
    }

    fn into_validator(self: Arc<Self>) -> Option<Arc<dyn Validator>> {
        Some(Arc::clone(&self.inner))
    }
}

// ============================================================================
// VALUE
// ============================================================================

/// A value under validation.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absence of a value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    String(String),
    /// A filesystem path that is not valid UTF-8.
    ///
    /// Reported and matched as a string, but kept byte-exact so the path
    /// that gets checked is the one the caller supplied.
    Path(PathBuf),
    /// An ordered list of values.
    Sequence(Vec<Value>),
    /// An opaque object.
    Object(Arc<dyn Object>),
    /// Something callable (a closure, a function reference).
    Callable,
    /// A value that cannot be rendered, such as an open file handle.
    Unsupported {
        /// Label reported as the value's type.
        type_name: Cow<'static, str>,
    },
}

impl Value {
    /// Wraps an object.
    pub fn object<O: Object + 'static>(object: O) -> Self {
        Self::Object(Arc::new(object))
    }

    /// Wraps a validator so it can be passed around as a value.
    ///
    /// The wrapped object reports the validator's type name as its class.
    pub fn validator<V: Validator + 'static>(validator: V) -> Self {
        Self::Object(Arc::new(ValidatorObject {
            class: std::any::type_name::<V>(),
            inner: Arc::new(validator),
        }))
    }

    /// An unsupported value (for example an open handle) with its type label.
    pub fn unsupported(type_name: impl Into<Cow<'static, str>>) -> Self {
        Self::Unsupported {
            type_name: type_name.into(),
        }
    }

    /// Type label used for `%type%` in message templates.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Null => "NULL",
            Self::Bool(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "double",
            Self::String(_) | Self::Path(_) => "string",
            Self::Sequence(_) => "array",
            Self::Object(_) | Self::Callable => "object",
            Self::Unsupported { type_name } => type_name.as_ref(),
        }
    }

    /// Renders the value for use as `%value%` in message templates.
    ///
    /// Total over every variant; never fails.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Null => "NULL".to_owned(),
            Self::Bool(true) => "TRUE".to_owned(),
            Self::Bool(false) => "FALSE".to_owned(),
            Self::Integer(i) => i.to_string(),
            Self::Float(f) => render_float(*f),
            Self::String(s) => s.clone(),
            Self::Path(p) => p.to_string_lossy().into_owned(),
            Self::Sequence(_) => "(array)".to_owned(),
            Self::Object(object) => object
                .string_form()
                .unwrap_or_else(|| format!("(object) {}", object.class_name())),
            Self::Callable => "(callable)".to_owned(),
            Self::Unsupported { .. } => "[unsupported]".to_owned(),
        }
    }

    /// Returns the string slice if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the path if this is a string or a path.
    #[must_use]
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Self::String(s) => Some(Path::new(s)),
            Self::Path(p) => Some(p),
            _ => None,
        }
    }

    /// Returns the integer if this is an integer.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns true for [`Value::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) | (Self::Callable, Self::Callable) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Path(a), Self::Path(b)) => a == b,
            (Self::Sequence(a), Self::Sequence(b)) => a == b,
            // objects have identity, not structure
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            (Self::Unsupported { type_name: a }, Self::Unsupported { type_name: b }) => a == b,
            _ => false,
        }
    }
}

/// Renders a float the way scripting runtimes print them: `NAN`, `INF`,
/// and exponent form (`1.0E+21`) outside `1e-4..1e15`.
fn render_float(f: f64) -> String {
    if f.is_nan() {
        return "NAN".to_owned();
    }
    if f.is_infinite() {
        return if f > 0.0 { "INF" } else { "-INF" }.to_owned();
    }

    let magnitude = f.abs();
    if magnitude != 0.0 && !(1e-4..1e15).contains(&magnitude) {
        let formatted = format!("{f:e}");
        if let Some((mantissa, exponent)) = formatted.split_once('e') {
            let point = if mantissa.contains('.') { "" } else { ".0" };
            let sign = if exponent.starts_with('-') { '-' } else { '+' };
            let digits = exponent.trim_start_matches('-');
            return format!("{mantissa}{point}E{sign}{digits}");
        }
    }

    f.to_string()
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::Float(value as f64), Self::Integer)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        i64::try_from(value).map_or(Self::Float(value as f64), Self::Integer)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<&Path> for Value {
    fn from(value: &Path) -> Self {
        match value.to_str() {
            Some(s) => Self::String(s.to_owned()),
            None => Self::Path(value.to_path_buf()),
        }
    }
}

impl From<PathBuf> for Value {
    fn from(value: PathBuf) -> Self {
        match value.into_os_string().into_string() {
            Ok(s) => Self::String(s),
            Err(raw) => Self::Path(PathBuf::from(raw)),
        }
    }
}

impl From<&PathBuf> for Value {
    fn from(value: &PathBuf) -> Self {
        Self::from(value.as_path())
    }
}

impl From<std::fs::File> for Value {
    /// Open handles cannot be rendered; the handle is closed on conversion.
    fn from(_: std::fs::File) -> Self {
        Self::unsupported("resource")
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::Sequence(value.into_iter().map(Into::into).collect())
    }
}

// ============================================================================
// TESTS
// ============================================================================
