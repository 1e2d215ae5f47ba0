use anyhow::Context;
use clap::Parser;
use json_hierarchy::core::sample::sample_person;
use json_hierarchy::utils::{logger, validation::Validate};
use json_hierarchy::{
    decode_person, CliConfig, Encoder, HierarchyPrinter, OutputSettings, TomlConfig,
};
use std::io::Write;

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli) {
        tracing::error!("json-hierarchy failed: {:#}", e);
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &CliConfig) -> anyhow::Result<()> {
    let file_config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let config = TomlConfig::from_file(path)
                .with_context(|| format!("failed to load config file `{}`", path.display()))?;
            config.validate()?;
            Some(config)
        }
        None => None,
    };

    let settings = OutputSettings::from_cli(cli, file_config.as_ref());
    settings.validate()?;

    // 產生或讀取 JSON
    let json = match &cli.input {
        Some(path) => {
            tracing::info!("Reading document from: {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read file `{}`", path.display()))?
        }
        None => Encoder::from_config(&settings).encode(&sample_person())?,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "JSON")?;
    writeln!(out, "----")?;
    writeln!(out)?;
    writeln!(out, "{}", json.trim_end())?;
    writeln!(out)?;

    let person = decode_person(&json).context("failed to decode person document")?;
    tracing::info!(
        "Decoded {} with {} mode(s) of transportation",
        person.name,
        person.transport_modes.len()
    );

    writeln!(out, "Object")?;
    writeln!(out, "------")?;
    writeln!(out)?;

    let mut printer = HierarchyPrinter::from_config(&mut out, &settings);
    printer.write_person(&person)?;

    Ok(())
}
