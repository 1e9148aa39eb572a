//! Command-line interface

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "glucoscreen-server")]
#[command(about = "GlucoScreen diabetes risk prediction server", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    pub config: String,

    /// Classifier weights path (overrides the config file)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Fitted scaler path (overrides the config file)
    #[arg(short, long)]
    pub scaler: Option<String>,

    /// Listen address
    #[arg(short = 'l', long, default_value = "0.0.0.0")]
    pub listen: String,

    /// Listen port
    #[arg(short = 'P', long, default_value = "8080")]
    pub port: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
