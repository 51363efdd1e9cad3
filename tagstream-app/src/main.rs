use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tagstream_common::observability::{init_logging, LogConfig};
use tagstream_common::APP_NAME;

mod collect;
mod dispatch;
mod play;

/// Stream posts, rank their hashtags, and play a popularity guessing game.
#[derive(Debug, Parser)]
#[command(name = APP_NAME)]
pub struct Cli {
    /// Credentials file with a [twitter] section.
    #[arg(long, default_value = "config.ini")]
    pub config: PathBuf,

    /// Where collected posts are written and read.
    #[arg(long, default_value = "tweets.csv")]
    pub raw: PathBuf,

    /// Where the ranked hashtag table is written and read.
    #[arg(long, default_value = "top_1000_hashtags.csv")]
    pub ranked: PathBuf,

    /// Log directory override (otherwise TAGSTREAM_LOG_DIR or the data dir).
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Mirror log output to stderr.
    #[arg(long, short)]
    pub verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LogConfig {
        app_name: APP_NAME,
        log_dir: cli.log_dir.clone(),
        emit_stderr: cli.verbose,
        ..LogConfig::default()
    })?;

    dispatch::run(&cli).await
}
