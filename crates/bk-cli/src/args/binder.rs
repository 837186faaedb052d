//! Binding raw flags to a command's declared arguments

use super::parser::{RawArgs, RawValue};
use crate::error::{CliError, Result};
use std::collections::BTreeMap;
use std::fmt;

/// Declared type of an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    Int,
    Float,
    Bool,
    Str,
    /// Comma separated, at least two items
    List,
}

impl fmt::Display for ArgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ArgType::Int => "int",
            ArgType::Float => "float",
            ArgType::Bool => "bool",
            ArgType::Str => "str",
            ArgType::List => "list",
        })
    }
}

/// A bound, typed argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    /// An optional argument that was not given
    Null,
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    List(Vec<String>),
}

impl From<&str> for ArgValue {
    fn from(s: &str) -> Self {
        ArgValue::Str(s.to_string())
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Null => f.write_str("none"),
            ArgValue::Int(i) => write!(f, "{i}"),
            ArgValue::Float(x) => write!(f, "{x}"),
            ArgValue::Bool(b) => write!(f, "{b}"),
            ArgValue::Str(s) => f.write_str(s),
            ArgValue::List(items) => f.write_str(&items.join(",")),
        }
    }
}

/// Declaration of one command argument.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgSpec {
    pub name: String,
    pub short_name: Option<String>,
    pub description: String,
    pub ty: ArgType,
    pub default: Option<ArgValue>,
    pub optional: bool,
    /// Required, but an omission is reported by the handler rather than
    /// the binder
    pub checked_by_handler: bool,
}

impl ArgSpec {
    /// A required argument with no short name and no default.
    pub fn new(name: impl Into<String>, ty: ArgType, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short_name: None,
            description: description.into(),
            ty,
            default: None,
            optional: false,
            checked_by_handler: false,
        }
    }

    pub fn short(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = Some(short_name.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<ArgValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Bind an omitted argument to null but keep showing it as required.
    pub fn checked_by_handler(mut self) -> Self {
        self.checked_by_handler = true;
        self
    }

    /// Must the user supply this argument?
    pub fn is_required(&self) -> bool {
        !self.optional && self.default.is_none()
    }

    fn matches(&self, key: &str) -> bool {
        self.name == key || self.short_name.as_deref() == Some(key)
    }

    fn coerce(&self, raw: RawValue) -> Result<ArgValue> {
        let invalid = |raw: &RawValue| CliError::InvalidArgumentValue {
            name: self.name.clone(),
            expected: self.ty,
            value: raw.as_text(),
        };

        match (self.ty, &raw) {
            (ArgType::Bool, RawValue::Flag(b)) => Ok(ArgValue::Bool(*b)),
            (ArgType::Bool, RawValue::Str(s)) => {
                s.parse().map(ArgValue::Bool).map_err(|_| invalid(&raw))
            }
            (ArgType::Int, RawValue::Str(s)) => {
                s.parse().map(ArgValue::Int).map_err(|_| invalid(&raw))
            }
            (ArgType::Float, RawValue::Str(s)) => {
                s.parse().map(ArgValue::Float).map_err(|_| invalid(&raw))
            }
            (ArgType::Str, RawValue::Str(s)) => Ok(ArgValue::Str(s.clone())),
            (ArgType::List, RawValue::Str(s)) if s.contains(',') => Ok(ArgValue::List(
                s.split(',').map(str::to_string).collect(),
            )),
            (ArgType::List, _) => Err(CliError::InvalidListFormat {
                name: self.name.clone(),
                value: raw.as_text(),
            }),
            // a bare flag converts its boolean
            (ArgType::Int, RawValue::Flag(b)) => Ok(ArgValue::Int(i64::from(*b))),
            (ArgType::Float, RawValue::Flag(b)) => Ok(ArgValue::Float(f64::from(*b))),
            (ArgType::Str, RawValue::Flag(b)) => Ok(ArgValue::Str(b.to_string())),
        }
    }
}

/// Validated, defaulted and typed arguments of one command invocation.
///
/// Every declared argument is present: given, defaulted, or [`ArgValue::Null`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundArgs {
    values: BTreeMap<String, ArgValue>,
}

impl BoundArgs {
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values.get(name)
    }

    pub fn str(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(ArgValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    pub fn int(&self, name: &str) -> Option<i64> {
        match self.values.get(name) {
            Some(ArgValue::Int(i)) => Some(*i),
            _ => None,
        }
    }

    pub fn float(&self, name: &str) -> Option<f64> {
        match self.values.get(name) {
            Some(ArgValue::Float(x)) => Some(*x),
            _ => None,
        }
    }

    /// A boolean argument; absent or null reads as `false`.
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(ArgValue::Bool(true)))
    }

    pub fn list(&self, name: &str) -> Option<&[String]> {
        match self.values.get(name) {
            Some(ArgValue::List(items)) => Some(items),
            _ => None,
        }
    }

    pub fn is_null(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(ArgValue::Null))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Check a raw bag against `specs`.
///
/// Entries no spec declares are dropped, short names are re-keyed to long
/// names, missing arguments get their default (or null when optional), and
/// raw values are converted to the declared type.
pub fn bind(mut raw: RawArgs, specs: &[ArgSpec]) -> Result<BoundArgs> {
    raw.retain(|key| specs.iter().any(|spec| spec.matches(key)));

    let mut values = BTreeMap::new();
    for spec in specs {
        let given = spec
            .short_name
            .as_deref()
            .and_then(|short| raw.remove(short))
            .or_else(|| raw.remove(&spec.name));

        let value = match (given, &spec.default) {
            (Some(raw_value), _) => spec.coerce(raw_value)?,
            (None, Some(default)) => default.clone(),
            (None, None) if spec.optional || spec.checked_by_handler => ArgValue::Null,
            (None, None) => {
                return Err(CliError::MissingRequiredArgument {
                    name: spec.name.clone(),
                });
            }
        };
        values.insert(spec.name.clone(), value);
    }

    Ok(BoundArgs { values })
}
