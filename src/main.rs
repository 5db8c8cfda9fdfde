use clap::Parser;
use wear_logger::app::{Command, Outcome};
use wear_logger::config::{CliConfig, LogFormat};
use wear_logger::core::ConfigProvider;
use wear_logger::utils::{logger, validation::Validate};
use wear_logger::{LocalStorage, PartCatalog, Session, Shell, WearError};

fn main() {
    let config = CliConfig::parse();

    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose),
        LogFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ wear-logger failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = e.exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(cli: &CliConfig) -> Result<(), WearError> {
    cli.validate()?;
    let config = cli.resolve()?;

    let catalog = PartCatalog::from_config(&config)?;
    tracing::info!("Loaded {} parts", catalog.len());

    let session = Session::new(catalog);
    tracing::debug!("Started {}", session.id());

    let storage = LocalStorage::new(config.output_path());
    let mut shell = Shell::new(
        session,
        storage,
        config.max_distance(),
        config.chart_width(),
    )
    .with_report_format(config.report_format().map(String::from));

    let mut interactive = true;
    for (requested, command) in [
        (cli.list_parts, Command::Parts),
        (cli.show_logic, Command::Logic),
    ] {
        if requested {
            interactive = false;
            if let Outcome::Continue(text) = shell.execute(command)? {
                print!("{}", text);
            }
        }
    }

    if cli.is_one_shot() {
        // Empty form fields read as zero
        let part = cli.part.as_deref().unwrap_or_default();
        let last = cli.last.as_deref().unwrap_or("0");
        let current = cli.current.as_deref().unwrap_or("0");
        print!("{}", shell.calculate(part, last, current)?);
        print!("{}", shell.table());
    } else if interactive {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        shell.run(stdin.lock(), stdout.lock())?;
    }

    if let Some(path) = &cli.export {
        print!("{}", shell.export(path)?);
    }

    Ok(())
}
