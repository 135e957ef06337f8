use std::path::PathBuf;

use serde::Deserialize;

fn default_api_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_keygen_command() -> String {
    "mxpy".to_string()
}

fn default_keygen_args() -> Vec<String> {
    vec![
        "wallet".to_string(),
        "new".to_string(),
        "--format".to_string(),
        "pem".to_string(),
        "--outfile".to_string(),
    ]
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Environment-driven configuration for the generator binary.
///
/// Every field has a default, so an empty environment yields a working
/// config pointed at a local shard-lookup proxy.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WalletGeneratorConfig {
    /// Base URL of the shard-lookup service.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// External key-generator program.
    #[serde(default = "default_keygen_command")]
    pub keygen_command: String,
    /// Arguments passed to the key generator before the candidate path.
    #[serde(default = "default_keygen_args")]
    pub keygen_args: Vec<String>,
    /// Directory accepted wallets are persisted into.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl WalletGeneratorConfig {
    pub fn from_env() -> Self {
        envy::prefixed("WALLET_GENERATOR_")
            .from_env()
            .unwrap_or_else(|err| panic!("Cannot load wallet generator config: {}", err))
    }
}
