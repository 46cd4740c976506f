use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SkinTUI - a skincare routine builder with an AI product advisor
#[derive(Parser)]
#[command(name = "skintui")]
#[command(about = "A terminal skincare routine builder with an AI product advisor")]
#[command(version)]
pub struct Cli {
    /// Path to a configuration file (defaults are used when omitted)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a routine without the TUI and print it
    Routine {
        /// Skin type (oily, dry, combination, normal, sensitive)
        #[arg(short, long)]
        skin_type: String,

        /// Age range (13-19, 20-29, 30-39, 40-49, 50+)
        #[arg(short, long)]
        age: String,

        /// Free-text description of your skin concerns
        #[arg(short, long)]
        concerns: String,

        /// Path to the product catalog (overrides configuration)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Send one message to the product advisor and print the reply
    Ask {
        /// The message to send
        message: String,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
