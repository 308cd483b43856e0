mod tip_form;
mod tip_percentage;
mod tip_summary;

pub use tip_form::TipForm;
pub use tip_percentage::{InvalidTipPercentage, TipPercentage};
pub use tip_summary::TipSummary;
