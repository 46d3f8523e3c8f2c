use clap::Parser;

use crate::config::JoinConfig;
use crate::error::ConfigError;

#[derive(Parser, Debug)]
#[command(
    name = "geotext_join",
    version,
    about = "Spatio-textual similarity join over two point datasets",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Dataset A path (env: GTJ_INPUT_A)
    #[arg(value_name = "INPUT_A", env = "GTJ_INPUT_A")]
    pub input_a: String,
    /// Dataset B path (env: GTJ_INPUT_B)
    #[arg(value_name = "INPUT_B", env = "GTJ_INPUT_B")]
    pub input_b: String,
    /// Output path (env: GTJ_OUTPUT)
    #[arg(value_name = "OUTPUT", env = "GTJ_OUTPUT")]
    pub output: String,
    /// Spatial distance threshold d, must be positive (env: GTJ_DISTANCE)
    #[arg(value_name = "D", env = "GTJ_DISTANCE")]
    pub distance: f64,
    /// Jaccard similarity threshold s in (0, 1] (env: GTJ_SIMILARITY)
    #[arg(value_name = "S", env = "GTJ_SIMILARITY")]
    pub similarity: f64,
}

impl Cli {
    pub fn to_join_config(&self) -> Result<JoinConfig, ConfigError> {
        let cfg = JoinConfig {
            distance: self.distance,
            similarity: self.similarity,
        };
        cfg.validate()?;
        Ok(cfg)
    }
}
