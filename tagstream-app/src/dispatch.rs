//! Top-level interactive prompt.
//!
//! One action per run: the prompt loops only while the input is invalid
//! (an explicit loop, so adversarial input cannot grow the stack), runs the
//! chosen action once, and exits.

use crate::{collect, play, Cli};
use anyhow::{Context, Result};
use tagstream_config::CredentialsLoader;
use tagstream_core::{analyze, table};
use tagstream_social::SampleStream;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Stream,
    Analyze,
    View,
    Game,
}

/// Map one line of console input to an action, case-insensitively.
pub fn parse_action(input: &str) -> Option<Action> {
    let token = input.trim();
    if token.len() != 1 {
        return None;
    }
    match token.chars().next()?.to_ascii_lowercase() {
        's' => Some(Action::Stream),
        'a' => Some(Action::Analyze),
        'v' => Some(Action::View),
        'g' => Some(Action::Game),
        _ => None,
    }
}

pub async fn run(cli: &Cli) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let action = loop {
        println!(
            "Enter 'G' to play the game, 'S' to stream posts, 'A' to analyze posts, or 'V' to view the top hashtags:"
        );
        match lines.next_line().await? {
            None => {
                println!("Input closed; nothing to do.");
                return Ok(());
            }
            Some(line) => match parse_action(&line) {
                Some(action) => break action,
                None => println!("Invalid option. Try again."),
            },
        }
    };
    tracing::info!(?action, "dispatching");

    match action {
        Action::Stream => stream_posts(cli).await,
        Action::Analyze => analyze_posts(cli),
        Action::View => view_ranked(cli),
        Action::Game => {
            let ranked = table::load_ranked(&cli.ranked)
                .context("load ranked table (run 'A' first)")?;
            play::run_game(&mut lines, ranked).await
        }
    }
}

async fn stream_posts(cli: &Cli) -> Result<()> {
    let creds = CredentialsLoader::new()
        .with_file(&cli.config)
        .load()
        .with_context(|| format!("load credentials from {}", cli.config.display()))?;

    let mut source = SampleStream::new(&creds.bearer_token)?;
    println!("Streaming sampled posts; press ctrl-c to stop and save.");

    let cancel = collect::ctrl_c_token();
    let rows = collect::collect_matching(&mut source, cancel).await;

    table::save_raw(&cli.raw, &rows)?;
    println!(
        "Saved {} matching posts to {}.",
        rows.len(),
        cli.raw.display()
    );
    Ok(())
}

fn analyze_posts(cli: &Cli) -> Result<()> {
    let rows = table::load_raw(&cli.raw).context("load raw table (run 'S' first)")?;
    let ranked = analyze::rank_hashtags(rows.iter().map(|r| r.text.as_str()));
    table::save_ranked(&cli.ranked, &ranked)?;
    println!(
        "Ranked {} hashtags from {} posts into {}.",
        ranked.len(),
        rows.len(),
        cli.ranked.display()
    );
    Ok(())
}

fn view_ranked(cli: &Cli) -> Result<()> {
    let ranked =
        table::load_ranked(&cli.ranked).context("load ranked table (run 'A' first)")?;
    println!("{:>5}  {:<40} {:>8}", "Rank", "Hashtag", "Count");
    for (i, entry) in ranked.iter().enumerate() {
        println!("{:>5}  {:<40} {:>8}", i + 1, entry.tag, entry.count);
    }
    println!("{} hashtags.", ranked.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_are_case_insensitive() {
        assert_eq!(parse_action("s"), Some(Action::Stream));
        assert_eq!(parse_action("S"), Some(Action::Stream));
        assert_eq!(parse_action(" a "), Some(Action::Analyze));
        assert_eq!(parse_action("V"), Some(Action::View));
        assert_eq!(parse_action("g"), Some(Action::Game));
    }

    #[test]
    fn anything_else_is_rejected() {
        assert_eq!(parse_action(""), None);
        assert_eq!(parse_action("x"), None);
        assert_eq!(parse_action("sa"), None);
        assert_eq!(parse_action("stream"), None);
    }
}
