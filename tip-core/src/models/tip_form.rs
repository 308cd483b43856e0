//! In-memory state of the tip calculator form.
//!
//! Holds the four user inputs and the two validity flags. The tip, total and
//! per-person values are derived from the inputs on every read and cannot be
//! set directly.

use std::fmt;

use tracing::debug;

use crate::{
    calculations::{compute_per_person, compute_tip, compute_total, parse_amount, validate},
    models::{TipPercentage, TipSummary},
};

/// Form state for the tip calculator screen.
///
/// Defaults to an empty bill, "No Tip", an empty custom tip and one person,
/// with no warnings raised.
#[derive(Debug, Clone, PartialEq)]
pub struct TipForm {
    bill_amount: String,
    tip_percentage: TipPercentage,
    custom_tip_amount: String,
    number_of_people: u32,

    invalid_bill_amount: bool,
    invalid_custom_tip_amount: bool,
}

impl Default for TipForm {
    fn default() -> Self {
        Self {
            bill_amount: String::new(),
            tip_percentage: TipPercentage::NoTip,
            custom_tip_amount: String::new(),
            number_of_people: 1,
            invalid_bill_amount: false,
            invalid_custom_tip_amount: false,
        }
    }
}

impl TipForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a form with pre-filled inputs.
    ///
    /// Seeded text that is non-empty and does not parse raises its flag. An
    /// empty seed stays unflagged, as on a freshly opened form.
    /// `number_of_people` is clamped to at least 1.
    pub fn with_inputs(
        bill_amount: impl Into<String>,
        tip_percentage: TipPercentage,
        custom_tip_amount: impl Into<String>,
        number_of_people: u32,
    ) -> Self {
        let bill_amount = bill_amount.into();
        let custom_tip_amount = custom_tip_amount.into();

        Self {
            invalid_bill_amount: is_invalid_seed(&bill_amount),
            invalid_custom_tip_amount: is_invalid_seed(&custom_tip_amount),
            bill_amount,
            tip_percentage,
            custom_tip_amount,
            number_of_people: number_of_people.max(1),
        }
    }

    // ─── inputs ──────────────────────────────────────────────────────────────

    pub fn bill_amount(&self) -> &str {
        &self.bill_amount
    }

    pub fn tip_percentage(&self) -> TipPercentage {
        self.tip_percentage
    }

    pub fn custom_tip_amount(&self) -> &str {
        &self.custom_tip_amount
    }

    pub fn number_of_people(&self) -> u32 {
        self.number_of_people
    }

    /// Replaces the bill text and revalidates it.
    ///
    /// Returns `true` if the text changed. Setting identical text leaves the
    /// validity flag untouched.
    pub fn set_bill_amount(
        &mut self,
        text: impl Into<String>,
    ) -> bool {
        let text = text.into();
        if text == self.bill_amount {
            return false;
        }

        debug!(bill_amount = %text, "bill amount changed");
        let invalid = !validate(&text);
        if invalid != self.invalid_bill_amount {
            debug!(invalid, "bill amount validity changed");
        }
        self.bill_amount = text;
        self.invalid_bill_amount = invalid;
        true
    }

    /// Replaces the custom tip text and revalidates it.
    ///
    /// Returns `true` if the text changed.
    pub fn set_custom_tip_amount(
        &mut self,
        text: impl Into<String>,
    ) -> bool {
        let text = text.into();
        if text == self.custom_tip_amount {
            return false;
        }

        debug!(custom_tip_amount = %text, "custom tip amount changed");
        let invalid = !validate(&text);
        if invalid != self.invalid_custom_tip_amount {
            debug!(invalid, "custom tip amount validity changed");
        }
        self.custom_tip_amount = text;
        self.invalid_custom_tip_amount = invalid;
        true
    }

    pub fn set_tip_percentage(
        &mut self,
        tip_percentage: TipPercentage,
    ) {
        if tip_percentage != self.tip_percentage {
            debug!(%tip_percentage, "tip percentage changed");
            self.tip_percentage = tip_percentage;
        }
    }

    /// Sets the party size, clamped to at least 1.
    pub fn set_number_of_people(
        &mut self,
        people: u32,
    ) {
        let people = people.max(1);
        if people != self.number_of_people {
            debug!(people, "number of people changed");
            self.number_of_people = people;
        }
    }

    pub fn increment_people(&mut self) {
        self.set_number_of_people(self.number_of_people.saturating_add(1));
    }

    /// Decrements the party size; stays at 1 once reached.
    pub fn decrement_people(&mut self) {
        self.set_number_of_people(self.number_of_people.saturating_sub(1));
    }

    // ─── validity flags ──────────────────────────────────────────────────────

    pub fn is_invalid_bill_amount(&self) -> bool {
        self.invalid_bill_amount
    }

    pub fn is_invalid_custom_tip_amount(&self) -> bool {
        self.invalid_custom_tip_amount
    }

    // ─── derived values ──────────────────────────────────────────────────────

    pub fn tip_amount(&self) -> f64 {
        compute_tip(
            parse_amount(&self.bill_amount),
            &self.custom_tip_amount,
            self.tip_percentage.percent(),
        )
    }

    pub fn total_amount(&self) -> f64 {
        compute_total(parse_amount(&self.bill_amount), self.tip_amount())
    }

    pub fn total_per_person(&self) -> f64 {
        compute_per_person(self.total_amount(), self.number_of_people)
    }

    /// Whether the tip amount line is displayed.
    ///
    /// Hidden at "No Tip", even when a custom tip is entered.
    pub fn shows_tip_amount(&self) -> bool {
        !self.tip_percentage.is_no_tip()
    }

    /// "Split Between N People".
    pub fn people_label(&self) -> String {
        format!("Split Between {} People", self.number_of_people)
    }

    pub fn summary(&self) -> TipSummary {
        TipSummary {
            tip_amount: self.tip_amount(),
            total_amount: self.total_amount(),
            total_per_person: self.total_per_person(),
            show_tip_amount: self.shows_tip_amount(),
        }
    }
}

fn is_invalid_seed(text: &str) -> bool {
    !text.is_empty() && !validate(text)
}

impl fmt::Display for TipForm {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Bill amount:      {:?}", self.bill_amount)?;
        writeln!(f, "Tip percentage:   {}", self.tip_percentage)?;
        writeln!(f, "Custom tip:       {:?}", self.custom_tip_amount)?;
        write!(f, "People:           {}", self.number_of_people)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn form(
        bill: &str,
        percentage: TipPercentage,
        custom_tip: &str,
        people: u32,
    ) -> TipForm {
        let mut form = TipForm::new();
        form.set_bill_amount(bill);
        form.set_tip_percentage(percentage);
        form.set_custom_tip_amount(custom_tip);
        form.set_number_of_people(people);
        form
    }

    #[test]
    fn new_form_has_initial_defaults() {
        let form = TipForm::new();

        assert_eq!(form.bill_amount(), "");
        assert_eq!(form.tip_percentage(), TipPercentage::NoTip);
        assert_eq!(form.custom_tip_amount(), "");
        assert_eq!(form.number_of_people(), 1);
        assert!(!form.is_invalid_bill_amount());
        assert!(!form.is_invalid_custom_tip_amount());
        assert_eq!(form.tip_amount(), 0.0);
        assert_eq!(form.total_amount(), 0.0);
        assert_eq!(form.total_per_person(), 0.0);
    }

    #[test]
    fn percentage_tip_split_four_ways() {
        let form = form("100", TipPercentage::Twenty, "", 4);

        assert_eq!(form.tip_amount(), 20.0);
        assert_eq!(form.total_amount(), 120.0);
        assert_eq!(form.total_per_person(), 30.0);
    }

    #[test]
    fn custom_tip_ignores_percentage() {
        let form = form("50", TipPercentage::TwentyFive, "12.5", 1);

        assert_eq!(form.tip_amount(), 12.5);
        assert_eq!(form.total_amount(), 62.5);
    }

    #[test]
    fn invalid_bill_computes_as_zero_and_raises_flag() {
        let form = form("abc", TipPercentage::Ten, "", 1);

        assert!(form.is_invalid_bill_amount());
        assert_eq!(form.tip_amount(), 0.0);
        assert_eq!(form.total_amount(), 0.0);
    }

    #[test]
    fn invalid_custom_tip_raises_its_own_flag() {
        let form = form("40", TipPercentage::Ten, "lots", 1);

        assert!(!form.is_invalid_bill_amount());
        assert!(form.is_invalid_custom_tip_amount());
        assert_eq!(form.tip_amount(), 0.0);
        assert_eq!(form.total_amount(), 40.0);
    }

    #[test]
    fn clearing_a_field_flags_it_but_computes_zero() {
        let mut form = form("25", TipPercentage::Twenty, "", 1);
        assert!(!form.is_invalid_bill_amount());

        form.set_bill_amount("");

        assert!(form.is_invalid_bill_amount());
        assert_eq!(form.total_amount(), 0.0);
    }

    #[test]
    fn correcting_a_field_clears_its_flag() {
        let mut form = form("x", TipPercentage::NoTip, "", 1);
        assert!(form.is_invalid_bill_amount());

        form.set_bill_amount("10");

        assert!(!form.is_invalid_bill_amount());
        assert_eq!(form.total_amount(), 10.0);
    }

    #[test]
    fn setting_identical_text_is_a_no_op() {
        let mut form = TipForm::new();

        assert!(!form.set_bill_amount(""));
        assert!(!form.is_invalid_bill_amount());
        assert!(form.set_bill_amount("5"));
        assert!(!form.set_bill_amount("5"));
    }

    #[test]
    fn people_never_drops_below_one() {
        let mut form = TipForm::new();

        form.decrement_people();
        assert_eq!(form.number_of_people(), 1);

        form.set_number_of_people(0);
        assert_eq!(form.number_of_people(), 1);

        form.increment_people();
        form.increment_people();
        assert_eq!(form.number_of_people(), 3);

        form.decrement_people();
        assert_eq!(form.number_of_people(), 2);
    }

    #[test]
    fn increment_saturates_at_max() {
        let mut form = TipForm::new();
        form.set_number_of_people(u32::MAX);

        form.increment_people();

        assert_eq!(form.number_of_people(), u32::MAX);
    }

    #[test]
    fn with_inputs_flags_invalid_seeds() {
        let form = TipForm::with_inputs("abc", TipPercentage::Ten, "xyz", 0);

        assert!(form.is_invalid_bill_amount());
        assert!(form.is_invalid_custom_tip_amount());
        assert_eq!(form.number_of_people(), 1);
        assert_eq!(form.tip_amount(), 0.0);
    }

    #[test]
    fn with_inputs_leaves_valid_and_empty_seeds_unflagged() {
        let form = TipForm::with_inputs("", TipPercentage::Ten, "", 1);
        assert!(!form.is_invalid_bill_amount());
        assert!(!form.is_invalid_custom_tip_amount());

        let form = TipForm::with_inputs("42", TipPercentage::Ten, "3.5", 1);
        assert!(!form.is_invalid_bill_amount());
        assert!(!form.is_invalid_custom_tip_amount());
    }

    #[test]
    fn seeded_flags_survive_resetting_identical_text() {
        let mut form = TipForm::with_inputs("abc", TipPercentage::Ten, "xyz", 2);

        form.set_bill_amount("abc");
        form.set_custom_tip_amount("xyz");

        assert_eq!(form.is_invalid_bill_amount(), !validate(form.bill_amount()));
        assert_eq!(
            form.is_invalid_custom_tip_amount(),
            !validate(form.custom_tip_amount())
        );
        assert!(form.is_invalid_bill_amount());
    }

    #[test]
    fn tip_line_hidden_at_no_tip() {
        let mut form = form("100", TipPercentage::NoTip, "5", 1);
        assert!(!form.shows_tip_amount());
        assert_eq!(form.tip_amount(), 5.0);

        form.set_tip_percentage(TipPercentage::Five);
        assert!(form.shows_tip_amount());
    }

    #[test]
    fn nan_bill_yields_zero_per_person() {
        let form = form("nan", TipPercentage::Ten, "", 2);

        assert!(!form.is_invalid_bill_amount());
        assert!(form.total_amount().is_nan());
        assert_eq!(form.total_per_person(), 0.0);
    }

    #[test]
    fn people_label_reads_naturally() {
        let form = form("", TipPercentage::NoTip, "", 3);

        assert_eq!(form.people_label(), "Split Between 3 People");
    }

    #[test]
    fn summary_snapshots_derived_values() {
        let summary = form("100", TipPercentage::Fifteen, "", 2).summary();

        assert_eq!(
            summary,
            TipSummary {
                tip_amount: 15.0,
                total_amount: 115.0,
                total_per_person: 57.5,
                show_tip_amount: true,
            }
        );
    }
}
