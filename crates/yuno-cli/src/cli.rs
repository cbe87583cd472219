//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use yuno_types::{FleetFilter, OutputFormat};

#[derive(Parser)]
#[command(name = "yuno-ride")]
#[command(version)]
#[command(about = "Bike and scooty rental fleet browser and booking helper")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Fleet catalog file (toml, json, csv). Uses config value if not specified.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the fleet carousel
    Fleet {
        /// Vehicle type filter (all, bike, scooty)
        #[arg(long, default_value = "all")]
        filter: FleetFilter,

        /// Center the carousel on this vehicle id ("book this")
        #[arg(long)]
        select: Option<String>,

        /// Jump to a visible position (dot click)
        #[arg(long)]
        jump: Option<usize>,

        /// Key presses to replay, comma separated (ArrowRight, ArrowLeft)
        #[arg(long, value_delimiter = ',')]
        keys: Vec<String>,
    },

    /// List vehicles available for booking
    Vehicles,

    /// Quote a rental. Without a return date, return is pickup + 24 hours.
    Quote {
        /// Vehicle id
        #[arg(long)]
        vehicle: String,

        /// Pickup date (YYYY-MM-DD)
        #[arg(long)]
        pickup_date: String,

        /// Pickup time (HH:MM)
        #[arg(long, default_value = "")]
        pickup_time: String,

        /// Return date (YYYY-MM-DD)
        #[arg(long)]
        return_date: Option<String>,

        /// Return time (HH:MM)
        #[arg(long, default_value = "")]
        return_time: String,
    },

    /// Validate a booking and print the WhatsApp request link
    Book {
        /// Customer full name
        #[arg(long)]
        name: String,

        /// Customer phone number
        #[arg(long)]
        phone: String,

        /// Vehicle id
        #[arg(long)]
        vehicle: String,

        /// Pickup date (YYYY-MM-DD)
        #[arg(long)]
        pickup_date: String,

        /// Pickup time (HH:MM)
        #[arg(long, default_value = "")]
        pickup_time: String,

        /// Return date (YYYY-MM-DD). Defaults to pickup + 24 hours.
        #[arg(long)]
        return_date: Option<String>,

        /// Return time (HH:MM)
        #[arg(long, default_value = "")]
        return_time: String,

        /// Free-text notes for the rental desk
        #[arg(long, short = 'n', default_value = "")]
        notes: String,
    },

    /// Interactive carousel: next, prev, filter <f>, select <id>, jump <n>, quit
    Browse,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set WhatsApp recipient number
        #[arg(long)]
        set_number: Option<String>,

        /// Set fleet catalog file
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// Set default pickup time (HH:MM)
        #[arg(long)]
        set_pickup_time: Option<String>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
