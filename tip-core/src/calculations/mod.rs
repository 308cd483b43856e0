//! Tip calculation primitives.
//!
//! Everything here is a pure function of its arguments. The form model in
//! [`crate::models`] composes these on every read rather than caching results.

pub mod common;

pub use common::{
    ParseAmountError, compute_per_person, compute_tip, compute_total, format_currency,
    parse_amount, try_parse_amount, validate,
};
