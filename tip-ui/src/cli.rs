use std::path::PathBuf;

use clap::Parser;
use tip_core::{TipForm, TipPercentage, validate};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Tip calculator with an even split across the party.
///
/// Opens the calculator window, optionally pre-filled from the arguments
/// below. With `--print` the summary is logged instead and no window opens.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Cli {
    /// Initial bill amount, exactly as it would be typed.
    #[arg(long)]
    pub bill: Option<String>,

    /// Tip percentage: 0, 5, 10, 15, 20 or 25 (a trailing `%` or `no-tip` is accepted).
    #[arg(long, default_value = "0")]
    pub tip: TipPercentage,

    /// Custom tip amount; overrides the percentage when non-empty.
    #[arg(long)]
    pub custom_tip: Option<String>,

    /// Number of people splitting the bill.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub people: u32,

    /// Path to a TOML configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log the computed amounts and exit without opening a window.
    #[arg(long)]
    pub print: bool,
}

impl Cli {
    /// Builds the form the window (or `--print`) starts from.
    pub fn initial_form(&self) -> TipForm {
        TipForm::with_inputs(
            self.bill.clone().unwrap_or_default(),
            self.tip,
            self.custom_tip.clone().unwrap_or_default(),
            self.people,
        )
    }

    /// Warnings for supplied amounts that are not valid numbers.
    ///
    /// Omitted arguments are not reported.
    pub fn input_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if let Some(bill) = self.bill.as_deref().filter(|b| !validate(b)) {
            warnings.push(format!("bill amount '{bill}': Please enter a valid number"));
        }
        if let Some(tip) = self.custom_tip.as_deref().filter(|t| !validate(t)) {
            warnings.push(format!("custom tip amount '{tip}': Please enter a valid number"));
        }

        warnings
    }
}
