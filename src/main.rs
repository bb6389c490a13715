use clap::Parser;
use gcd_calc::utils::{logger, validation::Validate};
use gcd_calc::{CliConfig, ConsolePrinter, ConsoleReader, GcdEngine, PresetSource};
use std::io::{self, Write};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose, config.log_format);

    tracing::info!("Starting gcd-calc");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let prompt_output: Box<dyn Write> = if config.format.prompts_on_stderr() {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    let console = ConsoleReader::new(io::stdin().lock(), prompt_output);
    let source = PresetSource::new(config.first, config.second, console);
    let printer = ConsolePrinter::new(io::stdout(), config.format, config.trace);

    let mut engine = GcdEngine::with_policy(source, printer, config.zero_policy);

    match engine.run() {
        Ok(outcome) => {
            tracing::info!(
                "gcd of {} and {} is {}",
                outcome.operands.first,
                outcome.operands.second,
                outcome.result
            );
        }
        Err(e) => {
            tracing::error!("gcd-calc failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
