// UI layer: the interactive form built with `dialoguer`, plus a spinner
// shown while rates are being fetched.

use crate::api::{RateSource, RateTable};
use crate::convert::{parse_amount, validate_amount, ConversionRequest};
use crate::currency::Currency;
use crate::error::FetchError;
use dialoguer::{Confirm, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::time::Duration;

/// The two forms the session shows on every iteration. An `Err` means the
/// prompt mechanism itself failed (closed stdin, interrupted terminal);
/// invalid amounts are handled inside `collect_request`.
pub trait Prompter {
    fn collect_request(&mut self) -> io::Result<ConversionRequest>;
    fn confirm_another(&mut self) -> io::Result<bool>;
}

/// Terminal prompts. `Select::interact()` is keyboard-driven: arrow keys
/// and Enter pick an option.
#[derive(Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        DialoguerPrompter
    }

    fn select_currency(&self, prompt: &str) -> io::Result<Currency> {
        let labels: Vec<String> = Currency::ALL.iter().map(|c| c.label()).collect();
        let idx = Select::new()
            .with_prompt(prompt)
            .items(&labels)
            .default(0)
            .interact()?;
        Ok(Currency::ALL[idx])
    }
}

impl Prompter for DialoguerPrompter {
    fn collect_request(&mut self) -> io::Result<ConversionRequest> {
        let from = self.select_currency("Convert from (select the currency you want to convert from)")?;
        let to = self.select_currency("Convert to (select the currency you want to convert to)")?;
        let input: String = Input::new()
            .with_prompt("Amount (e.g., 100.50)")
            .validate_with(|input: &String| -> Result<(), String> {
                validate_amount(input).map_err(|e| e.to_string())
            })
            .interact_text()?;
        // The validator above already accepted this string.
        let amount = parse_amount(&input)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(ConversionRequest { from, to, amount })
    }

    fn confirm_another(&mut self) -> io::Result<bool> {
        Confirm::new()
            .with_prompt("Do you want to perform another conversion?")
            .default(true)
            .interact()
    }
}

/// Wraps a `RateSource` and shows a spinner on stderr while it runs.
pub struct WithSpinner<S> {
    inner: S,
}

impl<S> WithSpinner<S> {
    pub fn new(inner: S) -> Self {
        WithSpinner { inner }
    }
}

impl<S: RateSource> RateSource for WithSpinner<S> {
    fn latest(&self) -> Result<RateTable, FetchError> {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("Fetching exchange rates...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        let result = self.inner.latest();
        spinner.finish_and_clear();
        result
    }
}
