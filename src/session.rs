// The converter session: collect a request, resolve it, print the result
// and ask whether to go again.

use crate::api::RateSource;
use crate::convert::{convert, Conversion, ConversionRequest};
use crate::error::SessionError;
use crate::ui::Prompter;
use log::{debug, warn};
use std::io::Write;

/// States of the session loop. `Terminated` is reached on a "no" at the
/// confirmation; fatal errors leave `run` directly.
#[derive(Debug, Clone, PartialEq)]
pub enum State {
    CollectingInput,
    Resolving(ConversionRequest),
    Presenting(Conversion),
    AskingContinue,
    Terminated,
}

pub struct Session<S, P, W> {
    rates: S,
    prompter: P,
    out: W,
    conversions: usize,
}

impl<S, P, W> Session<S, P, W>
where
    S: RateSource,
    P: Prompter,
    W: Write,
{
    pub fn new(rates: S, prompter: P, out: W) -> Self {
        Session {
            rates,
            prompter,
            out,
            conversions: 0,
        }
    }

    /// Number of results presented so far.
    pub fn conversions(&self) -> usize {
        self.conversions
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Run until the user declines to continue. Fatal errors are printed
    /// to the output before being returned.
    pub fn run(&mut self) -> Result<(), SessionError> {
        let mut state = State::CollectingInput;
        loop {
            state = match self.step(state) {
                Ok(State::Terminated) => break,
                Ok(next) => next,
                Err(err) => {
                    debug!("session ended: {:?}", err);
                    // Best effort: the output itself may be what failed.
                    let _ = writeln!(self.out, "{}", err);
                    return Err(err);
                }
            };
        }
        writeln!(self.out, "Thank you for using the currency converter!")
            .map_err(SessionError::Output)?;
        Ok(())
    }

    /// Advance the state machine by one transition.
    pub fn step(&mut self, state: State) -> Result<State, SessionError> {
        debug!("session state: {:?}", state);
        match state {
            State::CollectingInput => {
                let request = self.prompter.collect_request().map_err(SessionError::Form)?;
                Ok(State::Resolving(request))
            }
            State::Resolving(request) => {
                if request.is_same_currency() {
                    return Ok(State::Presenting(Conversion::same_currency(&request)));
                }
                let table = self.rates.latest()?;
                match convert(&table, &request) {
                    Ok(conversion) => Ok(State::Presenting(conversion)),
                    Err(err) => {
                        warn!("{}", err);
                        writeln!(self.out, "Error: {}", err).map_err(SessionError::Output)?;
                        Ok(State::CollectingInput)
                    }
                }
            }
            State::Presenting(conversion) => {
                writeln!(self.out).map_err(SessionError::Output)?;
                for line in conversion.lines() {
                    writeln!(self.out, "{}", line).map_err(SessionError::Output)?;
                }
                self.conversions += 1;
                Ok(State::AskingContinue)
            }
            State::AskingContinue => {
                let again = self.prompter.confirm_another().map_err(SessionError::Confirm)?;
                writeln!(self.out).map_err(SessionError::Output)?;
                if again {
                    Ok(State::CollectingInput)
                } else {
                    Ok(State::Terminated)
                }
            }
            State::Terminated => Ok(State::Terminated),
        }
    }
}
