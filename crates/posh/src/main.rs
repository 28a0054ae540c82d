use std::io::{self, Write};

use clap::CommandFactory;
use clap::Parser;
use clap_complete::generate;

use posh::commands::Cli;
use posh::commands::Commands;
use posh::commands::oxford_comma_override;
use posh::error::CliError;
use posh::handlers;
use posh::handlers::HandlerContext;
use posh::presenter::create_presenter;
use posh_common::PoshConfig;
use posh_common::color_init;
use posh_common::init_tracing;

fn main() {
    let cli = Cli::parse();
    color_init(cli.no_color);

    let config = PoshConfig::from_env();
    let level = if cli.verbose {
        "debug".to_string()
    } else {
        config.log_level.clone()
    };
    let telemetry = init_tracing(&level);
    let format = cli.effective_format();

    if let Err(e) = run(cli, config) {
        tracing::debug!(category = %e.category(), "command failed");
        let presenter = create_presenter(&format);
        let _ = presenter.present_error(&mut io::stderr(), &e);
        let code = e.exit_code();
        drop(telemetry);
        std::process::exit(code);
    }
}

fn run(cli: Cli, config: PoshConfig) -> Result<(), CliError> {
    let format = cli.effective_format();

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "posh", &mut io::stdout());
        return Ok(());
    }

    let mut ctx = HandlerContext::new(config, format, io::stdout().lock());

    match cli.command {
        Commands::Join {
            fragments,
            conjunction,
            oxford_comma,
            no_oxford_comma,
        } => handlers::handle_join(
            &mut ctx,
            fragments,
            conjunction,
            oxford_comma_override(oxford_comma, no_oxford_comma),
        )?,
        Commands::Ordinal { numbers } => handlers::handle_ordinal(&mut ctx, numbers)?,
        Commands::Extract { pattern, text } => handlers::handle_extract(&mut ctx, pattern, text)?,
        Commands::Queue { capacity, elements } => {
            handlers::handle_queue(&mut ctx, capacity, elements)?
        }
        Commands::Darken {
            color,
            amount,
            alpha,
        } => handlers::handle_darken(&mut ctx, color, amount, alpha)?,
        Commands::Timestamp { at, round } => handlers::handle_timestamp(&mut ctx, at, round)?,
        Commands::Trim { text } => handlers::handle_trim(&mut ctx, text)?,
        Commands::Completions { .. } => {}
    }

    ctx.into_output().flush()?;
    Ok(())
}
