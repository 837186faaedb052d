//! Command-line arguments
//!
//! Arguments go through two stages. [`parse`] turns the raw tokens into a
//! command-agnostic [`RawArgs`] bag; [`bind`] then checks that bag against a
//! command's [`ArgSpec`] list and produces typed [`BoundArgs`].

mod binder;
mod parser;

pub use binder::{ArgSpec, ArgType, ArgValue, BoundArgs, bind};
pub use parser::{RawArgs, RawValue, parse};
