use anyhow::Context;
use clap::Parser;
use page_scaffold::config::Command;
use page_scaffold::utils::logger;
use page_scaffold::{capitalize, format_date, parse_date, CliConfig, Rendered, Result};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();
    logger::init_logger(config.verbose, config.log_format);

    tracing::debug!("CLI config: {:?}", config);

    let result = match config.command.render_job() {
        Some(job) => job.run().map(|rendered| {
            if let Rendered::Inline(html) = rendered {
                println!("{}", html);
            }
        }),
        None => run_text_command(&config.command),
    };

    if let Err(e) = &result {
        tracing::error!("❌ {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    }

    result.context("page-scaffold failed")
}

fn run_text_command(command: &Command) -> Result<()> {
    match command {
        Command::FormatDate { date } => {
            println!("{}", format_date(&parse_date(date)?));
        }
        Command::Capitalize { text } => println!("{}", capitalize(text)),
        Command::Render { .. } => {}
    }
    Ok(())
}
