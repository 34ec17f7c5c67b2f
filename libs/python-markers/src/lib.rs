//! Environment markers for Python requirements
//!
//! Parses and evaluates the marker subset used to gate requirements on the
//! running interpreter and platform, e.g.
//! `enum34==1.1.6; python_version < "3.4"`, and filters requirements files
//! down to the lines that apply.
//!
//! # Examples
//!
//! ```rust
//! use pyreq_markers::{filter_requirements, Marker, MarkerEnvironment};
//! use pyreq_version::RuntimeVersion;
//!
//! let env = MarkerEnvironment::for_host(RuntimeVersion::from((3, 11, 4)));
//!
//! let marker: Marker = "python_version >= '3.8' and python_version < '4'".parse().unwrap();
//! assert!(marker.evaluate(&env).unwrap());
//!
//! let kept = filter_requirements("six\nenum34; python_version < '3.4'\n", &env).unwrap();
//! assert_eq!(kept, vec!["six".to_string()]);
//! ```
#![forbid(unsafe_code)]

pub mod ast;
mod environment;
mod error;
mod lexer;
mod marker;
mod parser;
mod requirements;

pub use ast::{MarkerExpr, MarkerOp, MarkerVariable, Operand};
pub use environment::MarkerEnvironment;
pub use error::{Error, Result};
pub use marker::Marker;
pub use requirements::{filter_requirements, RequirementLine};
