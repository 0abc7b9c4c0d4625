use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "handsign-server")]
#[command(about = "Handsign gesture inference server", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "handsign.yaml")]
    pub config: String,

    /// Model artifact path
    #[arg(short, long)]
    pub model: Option<String>,

    /// Remote URL to fetch the model artifact from when absent
    #[arg(long)]
    pub model_url: Option<String>,

    /// Listen address
    #[arg(short = 'l', long)]
    pub listen: Option<String>,

    /// Listen port
    #[arg(short = 'P', long)]
    pub port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
