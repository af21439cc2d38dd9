//! core command line arguments
use clap::Parser;

/// cmd line args
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Bind address
    #[arg(
        short,
        long,
        help = "Set app bind address",
        default_value = crate::DEFAULT_APP_ADDRESS
    )]
    pub address: String,
    /// Application port
    #[arg(short, long, help = "Set app port", default_value_t = crate::DEFAULT_APP_PORT)]
    pub port: u16,
}
