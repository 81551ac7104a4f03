use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "relief-ops")]
#[command(about = "Volunteer registration and deployment for relief operations")]
pub struct CliArgs {
    /// Directory holding the volunteer, ledger and site files
    #[arg(long, default_value = "data")]
    pub data_dir: String,

    /// Optional TOML file overriding the store layout
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
