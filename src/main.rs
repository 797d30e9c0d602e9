use anyhow::Context;
use clap::Parser;
use std::io::Write;
use uni_registry::core::export;
use uni_registry::utils::{logger, validation::Validate};
use uni_registry::{run_scenario, CliConfig, OutputFormat, RegistryError, Scenario, SeedConfig};

fn load_scenario(config: &CliConfig) -> anyhow::Result<Scenario> {
    let scenario = match &config.seed {
        Some(path) => {
            tracing::info!("Loading seed file {}", path);
            let seed = SeedConfig::from_file(path)
                .with_context(|| format!("failed to load seed file {}", path))?;
            seed.validate()
                .with_context(|| format!("invalid seed file {}", path))?;
            seed.into_scenario()
        }
        None => Scenario::demo(),
    };

    // 命令列參數優先於種子檔設定
    Ok(match config.faculties_in {
        Some(field) => scenario.with_field_filter(Some(field)),
        None => scenario,
    })
}

fn run(config: &CliConfig) -> anyhow::Result<()> {
    config.validate()?;
    let scenario = load_scenario(config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let university = run_scenario(&scenario, &mut out)?;

    if config.format == OutputFormat::Json {
        writeln!(out)?;
        writeln!(out, "{}", export::snapshot_json(&university)?)?;
    }

    if let Some(path) = &config.export_csv {
        export::export_roster_csv(&university, path)
            .with_context(|| format!("failed to export roster to {}", path))?;
        tracing::info!("📁 Roster saved to: {}", path);
    }

    Ok(())
}

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    match config.format {
        OutputFormat::Json => logger::init_json_logger(),
        OutputFormat::Text => logger::init_cli_logger(config.verbose),
    }

    tracing::info!("Starting uni-registry");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!("❌ Run failed: {:#}", e);
        eprintln!("❌ {:#}", e);

        let exit_code = e
            .downcast_ref::<RegistryError>()
            .map(RegistryError::exit_code)
            .unwrap_or(1);
        std::process::exit(exit_code);
    }
}
