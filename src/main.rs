use anyhow::{bail, Context, Result};
use std::io::{self, BufRead};
use uwp_decoder::{
    cli::{Cli, Commands},
    parser::{parse, validate},
    reference::{resolve_reference, ReferenceData},
    report::{render_categories, render_json, render_reference_table, render_table},
    ui::UiApp,
};

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // The interactive form owns the terminal, so it runs without log output
    if !matches!(cli.command, Commands::Interactive) {
        setup_logging(&cli);
    }

    let reference = resolve_reference(cli.reference.as_deref())?;
    tracing::debug!("Reference data: {}", reference.source());

    match cli.command {
        Commands::Parse { uwp, json } => {
            let inputs = inputs_or_stdin(uwp)?;
            parse_all(&inputs, reference.data(), json)?;
        }

        Commands::Validate { uwp } => {
            let inputs = inputs_or_stdin(uwp)?;
            let mut failed = 0;
            for input in &inputs {
                match validate(input) {
                    Ok(()) => println!("{}: ok", input),
                    Err(err) => {
                        println!("{}: {}", input, err);
                        failed += 1;
                    }
                }
            }
            if failed > 0 {
                bail!("{} of {} UWP strings are invalid", failed, inputs.len());
            }
        }

        Commands::Tables { category } => match category {
            Some(category) => {
                println!("{}:\n", category);
                print!("{}", render_reference_table(reference.data().table(category)));
            }
            None => {
                println!("Reference categories ({}):\n", reference.source());
                print!("{}", render_categories(reference.data()));
            }
        },

        Commands::Interactive => {
            let app = UiApp::new()?;
            app.run(reference.data())?;
        }
    }

    Ok(())
}

fn parse_all(inputs: &[String], reference: &ReferenceData, json: bool) -> Result<()> {
    let mut failed = 0;

    for (i, input) in inputs.iter().enumerate() {
        let record = match parse(input, reference) {
            Ok(record) => record,
            Err(err) => {
                eprintln!("{}: {}", input, err);
                failed += 1;
                continue;
            }
        };

        if json {
            println!("{}", render_json(&record)?);
        } else {
            if i > 0 {
                println!();
            }
            println!("UWP: {}\n", input.trim());
            print!("{}", render_table(&record));
        }
    }

    if failed > 0 {
        bail!("{} of {} UWP strings could not be parsed", failed, inputs.len());
    }
    Ok(())
}

/// Command-line inputs, or every non-blank stdin line when there are none
fn inputs_or_stdin(inputs: Vec<String>) -> Result<Vec<String>> {
    if !inputs.is_empty() {
        return Ok(inputs);
    }

    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

fn setup_logging(cli: &Cli) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("uwp_decoder={}", cli.log_level())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(io::stderr)
                .compact(),
        )
        .init();
}
