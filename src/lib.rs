//! A small recursive-descent JSON parser producing a dynamically typed [`Value`] tree.
//!
//! ```
//! use jsonprobe::{parse, Number, Value};
//!
//! let v = parse(r#"{"a": [1, 2.0], "b": null}"#).unwrap();
//! assert_eq!(v.select("a/0").unwrap(), &Value::Number(Number::Int(1)));
//! assert_eq!(v.select("a/1").unwrap().as_f64(), Some(2.0));
//! assert!(v.field("b").is_none());
//! ```
mod ast;
mod cursor;
mod error;
mod options;
mod outline;
mod parser;

pub use ast::{Map, Number, Value};
pub use error::{ErrorKind, ParseError, PathError};
pub use options::{ParserOptions, DEFAULT_MAX_DEPTH};
pub use outline::Outline;
pub use parser::{parse, parse_with, Parser};
