//! Primitive types for logic schemas.
//!
//! - [`ConstType`]: constants appearing as terms (integers, quoted text)
//!
//! # Example
//! ```rust
//! use parser::primitive::ConstType;
//!
//! assert_eq!(ConstType::Integer(42).to_string(), "42");
//! assert_eq!(ConstType::Text("a".into()).to_string(), "'a'");
//! ```

pub mod const_type;

pub use const_type::ConstType;
