use clap::Parser;

/// Boxes: a ring of shaded boxes with live reflections.
#[derive(Parser, Debug)]
#[command(name = "boxes", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Asset directory override.
    #[arg(long)]
    pub assets: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
