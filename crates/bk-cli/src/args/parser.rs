//! Flag tokenizer
//!
//! Grammar:
//!
//! - `--name` and `-n` start a flag; the next non-flag token is its value,
//!   otherwise the flag is `true`
//! - `-abc` sets `a`, `b` and `c` to `true`; bundles never take a value
//! - a non-flag token with no flag waiting for it is an error
//! - a lone `-` or `--` is an ordinary token, usable as a value
//!
//! After parsing, a `v` entry is renamed to `verbose`.

use crate::error::{CliError, Result};
use std::collections::BTreeMap;

/// Value of a raw flag: either the token that followed it, or a bare flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    Str(String),
    Flag(bool),
}

impl RawValue {
    /// The text as written on the command line.
    pub fn as_text(&self) -> String {
        match self {
            RawValue::Str(s) => s.clone(),
            RawValue::Flag(b) => b.to_string(),
        }
    }
}

/// Flat name to value bag, unaware of any command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawArgs {
    values: BTreeMap<String, RawValue>,
}

impl RawArgs {
    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn insert(&mut self, name: impl Into<String>, value: RawValue) {
        self.values.insert(name.into(), value);
    }

    pub(crate) fn remove(&mut self, name: &str) -> Option<RawValue> {
        self.values.remove(name)
    }

    pub(crate) fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.values.retain(|k, _| keep(k));
    }
}

enum Token<'a> {
    Flag(&'a str),
    Bundle(&'a str),
    Value(&'a str),
}

fn classify(token: &str) -> Token<'_> {
    if let Some(name) = token.strip_prefix("--") {
        if name.is_empty() {
            Token::Value(token)
        } else {
            Token::Flag(name)
        }
    } else if let Some(name) = token.strip_prefix('-') {
        match name.chars().count() {
            0 => Token::Value(token),
            1 => Token::Flag(name),
            _ => Token::Bundle(name),
        }
    } else {
        Token::Value(token)
    }
}

/// Tokenize command-line arguments into a [`RawArgs`] bag.
pub fn parse<I, S>(tokens: I) -> Result<RawArgs>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut args = RawArgs::default();
    let mut pending: Option<String> = None;

    for token in tokens {
        match classify(token.as_ref()) {
            Token::Flag(name) => {
                if let Some(flag) = pending.replace(name.to_string()) {
                    args.insert(flag, RawValue::Flag(true));
                }
            }
            Token::Bundle(names) => {
                if let Some(flag) = pending.take() {
                    args.insert(flag, RawValue::Flag(true));
                }
                for c in names.chars() {
                    args.insert(c.to_string(), RawValue::Flag(true));
                }
            }
            Token::Value(value) => match pending.take() {
                Some(flag) => args.insert(flag, RawValue::Str(value.to_string())),
                None => {
                    return Err(CliError::UnexpectedPositional {
                        token: value.to_string(),
                    });
                }
            },
        }
    }

    if let Some(flag) = pending {
        args.insert(flag, RawValue::Flag(true));
    }

    if let Some(verbose) = args.remove("v") {
        args.insert("verbose", verbose);
    }

    Ok(args)
}
