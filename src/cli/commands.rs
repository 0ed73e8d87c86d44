// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate {
        /// Password length (clamped to the configured maximum)
        #[arg(long, short)]
        length: Option<usize>,

        /// Include uppercase letters
        #[arg(long)]
        uppercase: bool,

        /// Include lowercase letters
        #[arg(long)]
        lowercase: bool,

        /// Include numbers
        #[arg(long)]
        numbers: bool,

        /// Include special characters
        #[arg(long)]
        special: bool,

        /// How many passwords to generate
        #[arg(long, short, default_value_t = 1)]
        count: usize,

        /// Print passwords in clear instead of masked
        #[arg(long)]
        show: bool,
    },

    /// Classify the strength of a password
    Check {
        /// Password to check
        #[arg(required = true)]
        password: String,
    },

    /// Open the interactive generator
    Interactive,

    /// Run the HTTP API
    Serve {
        /// API server port
        #[arg(long, env = "WEB_PORT")]
        port: Option<u16>,
    },
}
