//! Video production tracker CLI.

use std::io::{self, IsTerminal, Write};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use vpt_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use vpt_cli::commands::{run_athletes, run_bins, run_export, run_list, run_stats};
use vpt_cli::config::{Workspace, session_gate};
use vpt_cli::logging::{LogConfig, LogFormat, init_logging};
use vpt_cli::session::Session;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let workspace = Workspace::load(&cli.data)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Command::List(args) => run_list(&workspace, args, &mut out)?,
        Command::Bins(args) => run_bins(&workspace, args, &mut out)?,
        Command::Athletes(args) => run_athletes(&workspace, args, &mut out)?,
        Command::Stats => run_stats(&workspace, &mut out)?,
        Command::Export(args) => run_export(&workspace, args, &mut out)?,
        Command::Session => {
            let mut session = Session::new(workspace, session_gate(), out);
            session.run(io::stdin().lock())?;
            session.into_output().flush()?;
            return Ok(());
        }
    }
    out.flush()?;
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
