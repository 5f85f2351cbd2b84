use anyhow::Context;
use clap::Parser;
use pricing_calc::app::cli;
use pricing_calc::config::LogFormat;
use pricing_calc::utils::logger;
use pricing_calc::CliConfig;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose),
        LogFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::info!("Starting pricing-calc");
    tracing::debug!("CLI config: {:?}", config);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = cli::run(&config, stdin.lock(), &mut out) {
        tracing::error!("❌ {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    out.flush().context("failed to flush stdout")?;
    Ok(())
}
