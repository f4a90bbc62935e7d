//! Binary entry point: read the command line, set up logging on stderr, and
//! run one interactive session on stdin/stdout.
use clap::Parser;
use student_manager::{run_session, Cli, TerminalConsole};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.session_config();
    let mut console = TerminalConsole::new(config.color);
    run_session(&mut console, &config)
}

/// `RUST_LOG` wins when set; otherwise only warnings, or debug output with
/// `--verbose`. Logs go to stderr so they never mix with the console screens.
fn init_tracing(verbose: bool) {
    let default = if verbose { "student_manager=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
