use color_eyre::Result;

use tutor::cli::{parse_args, run_cli_command, CliCommand};
use tutor::error::ResultExt;
use tutor::startup::{build_state, init_tracing, load_dotenv, TutorConfig};
use tutor::web::serve;

fn main() -> Result<()> {
    let command = parse_args(std::env::args());
    if let Some(code) = run_cli_command(&command) {
        std::process::exit(code);
    }

    color_eyre::install()?;

    // .env must be loaded before the subscriber so RUST_LOG from it applies
    let dotenv_path = load_dotenv();
    init_tracing();
    if let Some(path) = dotenv_path {
        tracing::info!("Loaded environment from {}", path.display());
    }

    let mut config = TutorConfig::from_env().log_err("load configuration")?;
    if let CliCommand::Serve { bind: Some(addr) } = command {
        config = config.with_bind_addr(addr);
    }
    tracing::debug!(?config, "Starting tutor {}", tutor::cli::VERSION);

    let state = build_state(&config);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime
        .block_on(serve(config.bind_addr, state))
        .log_err("serve")?;

    Ok(())
}
