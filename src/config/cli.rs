use crate::domain::FieldOfStudy;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "uni-registry")]
#[command(about = "A tiny in-memory university registry")]
pub struct CliConfig {
    #[arg(long, help = "TOML seed file; the built-in demo runs when omitted")]
    pub seed: Option<String>,

    #[arg(long, value_enum, help = "Also list the faculties of this field")]
    pub faculties_in: Option<FieldOfStudy>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long, help = "Write every roster entry to this CSV file")]
    pub export_csv: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(seed) = &self.seed {
            validate_path("seed", seed)?;
        }
        if let Some(export) = &self.export_csv {
            validate_path("export_csv", export)?;
        }
        Ok(())
    }
}
