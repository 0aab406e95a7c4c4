use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "job-autofill",
    version,
    about = "Profile-driven autofill for Australian job application forms"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// AI completion endpoint
    #[arg(long, global = true)]
    pub ai_endpoint: Option<String>,

    /// AI model identifier
    #[arg(long, global = true)]
    pub ai_model: Option<String>,

    /// API key for the AI service
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Path to config file (default: job-autofill.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fill a page snapshot from a stored profile
    Fill {
        /// Path to the page snapshot JSON (a list of form controls)
        #[arg(long)]
        page: String,

        /// Name of the stored profile to fill from
        #[arg(long)]
        profile: String,

        /// Use the AI matcher instead of keyword rules
        #[arg(long)]
        ai: bool,

        /// Write the filled snapshot back out to this path
        #[arg(short, long)]
        out: Option<String>,
    },

    /// Show candidate controls, hints and keyword matches without filling
    Inspect {
        /// Path to the page snapshot JSON
        #[arg(long)]
        page: String,
    },

    /// Answer the presence probe (prints {"alive":true})
    Probe,

    /// Manage stored profiles
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// List stored profile names
    List,

    /// Print a stored profile's JSON document
    Show {
        #[arg(long)]
        name: String,
    },

    /// Import a JSON document as a named profile
    Import {
        #[arg(long)]
        name: String,

        /// Path to the JSON document
        #[arg(long)]
        file: String,
    },

    /// Export a stored profile as a JSON document
    Export {
        #[arg(long)]
        name: String,

        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `job-autofill.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub profiles: ProfilesConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AiConfig {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilesConfig {
    #[serde(default = "default_profiles_dir")]
    pub dir: String,
}

impl Default for ProfilesConfig {
    fn default() -> Self {
        Self { dir: default_profiles_dir() }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraceConfig {
    pub path: Option<String>,
}

// Serde default helpers
fn default_profiles_dir() -> String {
    "profiles".to_string()
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("job-autofill.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}
