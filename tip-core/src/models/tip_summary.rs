use std::fmt;

use crate::calculations::format_currency;

/// A snapshot of the derived values, ready for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TipSummary {
    pub tip_amount: f64,
    pub total_amount: f64,
    pub total_per_person: f64,
    /// The tip line is hidden when "No Tip" is selected.
    pub show_tip_amount: bool,
}

impl TipSummary {
    pub fn tip_amount_label(&self) -> String {
        format!("Tip Amount: {}", format_currency(self.tip_amount))
    }

    pub fn total_amount_label(&self) -> String {
        format!("Total Amount: {}", format_currency(self.total_amount))
    }

    pub fn total_per_person_label(&self) -> String {
        format!("Total Per Person: {}", format_currency(self.total_per_person))
    }
}

impl fmt::Display for TipSummary {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        if self.show_tip_amount {
            writeln!(f, "{}", self.tip_amount_label())?;
        }
        writeln!(f, "{}", self.total_amount_label())?;
        write!(f, "{}", self.total_per_person_label())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_includes_tip_line_when_shown() {
        let summary = TipSummary {
            tip_amount: 20.0,
            total_amount: 120.0,
            total_per_person: 30.0,
            show_tip_amount: true,
        };

        assert_eq!(
            summary.to_string(),
            "Tip Amount: $20.00\nTotal Amount: $120.00\nTotal Per Person: $30.00"
        );
    }

    #[test]
    fn display_omits_tip_line_when_hidden() {
        let summary = TipSummary {
            tip_amount: 12.5,
            total_amount: 62.5,
            total_per_person: 62.5,
            show_tip_amount: false,
        };

        assert_eq!(
            summary.to_string(),
            "Total Amount: $62.50\nTotal Per Person: $62.50"
        );
    }
}
