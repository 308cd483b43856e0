pub mod calculations;
pub mod models;

pub use calculations::{
    ParseAmountError, compute_per_person, compute_tip, compute_total, format_currency,
    parse_amount, try_parse_amount, validate,
};
pub use models::*;
