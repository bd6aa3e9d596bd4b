// Entrypoint for the currency converter.
// - Parses flags, loads the key, then hands a rate client and the terminal
//   prompts to the session loop.
// - Each fatal error kind leaves with its own exit code.

use clap::Parser;
use fxconv_cli::api::RateClient;
use fxconv_cli::config::{Config, DEFAULT_API_URL};
use fxconv_cli::error::{exit_code, ConfigError, SessionError};
use fxconv_cli::logging::init_logging;
use fxconv_cli::session::Session;
use fxconv_cli::ui::{DialoguerPrompter, WithSpinner};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[clap(name = "fxconv", version, about = "Interactive currency converter")]
struct Cli {
    #[clap(long, help = "Env file to read KEY from (default: nearest .env)")]
    env_file: Option<PathBuf>,

    #[clap(long, env = "FXCONV_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    #[clap(long, short, default_value = "warn")]
    log_level: String,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.env_file.as_deref(), &cli.api_url)?;
    let client = RateClient::new(config.rates_url())?;

    let mut session = Session::new(
        WithSpinner::new(client),
        DialoguerPrompter::new(),
        std::io::stdout(),
    );
    session.run()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Session errors were already printed by the session itself.
            if let Some(session_err) = err.downcast_ref::<SessionError>() {
                return ExitCode::from(session_err.exit_code());
            }
            println!("{:#}", err);
            match err.downcast_ref::<ConfigError>() {
                Some(config_err) => ExitCode::from(config_err.exit_code()),
                None => ExitCode::from(exit_code::INTERNAL),
            }
        }
    }
}
