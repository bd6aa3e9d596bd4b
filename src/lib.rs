// Library root
// -----------
// This crate exposes a small library surface for the currency converter
// CLI. The binary (`main.rs`) wires these modules together.
//
// Module responsibilities:
// - `currency`: the fixed list of currencies offered by the form.
// - `convert`: amount validation and the cross-rate computation.
// - `api`: fetching the latest rate table over HTTP.
// - `config`: env file + `KEY` loading and the request URL.
// - `ui`: dialoguer prompts and the fetch spinner.
// - `session`: the collect / resolve / present / continue loop.
//
// The session only talks to `RateSource` and `Prompter`, so the whole
// loop can be driven from tests without a terminal or the network.
pub mod api;
pub mod config;
pub mod convert;
pub mod currency;
pub mod error;
pub mod logging;
pub mod session;
pub mod ui;
