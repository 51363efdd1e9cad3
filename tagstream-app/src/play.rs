//! Console loop for the guessing game.
//!
//! Round drawing and judging live in `tagstream-core`; this module only
//! prompts, parses, and prints. Invalid input re-prompts the same round in
//! an explicit loop, and EOF ends the game gracefully.

use anyhow::Result;
use tagstream_core::{parse_choice, Choice, Game, HashtagCount, Round, Verdict};
use tokio::io::{AsyncBufRead, Lines};

pub async fn run_game<R>(lines: &mut Lines<R>, ranked: Vec<HashtagCount>) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut game = Game::new(ranked);
    let mut rng = rand::thread_rng();

    loop {
        let Some(round) = game.next_round(&mut rng) else {
            println!("You have used all the hashtags.");
            break;
        };

        let Some(choice) = prompt_choice(lines, &round).await? else {
            println!("Input closed.");
            break;
        };

        match round.judge(choice) {
            Verdict::Correct => {
                println!("Correct!");
                game.record_correct();
            }
            Verdict::Incorrect { chosen, other } => {
                println!(
                    "Incorrect. {} was posted more ({} vs {}).",
                    other.tag, other.count, chosen.count
                );
                break;
            }
        }
    }

    println!("Thanks for playing! Your final score is {}.", game.score());
    Ok(())
}

/// Ask until the player enters `1` or `2`; `None` means the input ended.
async fn prompt_choice<R>(lines: &mut Lines<R>, round: &Round) -> Result<Option<Choice>>
where
    R: AsyncBufRead + Unpin,
{
    println!(
        "Which hashtag was posted more: (1) {} or (2) {}? Enter 1 or 2:",
        round.first.tag, round.second.tag
    );
    loop {
        match lines.next_line().await? {
            None => return Ok(None),
            Some(line) => match parse_choice(&line) {
                Some(choice) => return Ok(Some(choice)),
                None => println!("Invalid option. Enter 1 or 2:"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncBufReadExt, BufReader};

    fn reader(input: &'static str) -> Lines<BufReader<&'static [u8]>> {
        BufReader::new(input.as_bytes()).lines()
    }

    fn round() -> Round {
        Round {
            first: HashtagCount { tag: "#a".into(), count: 2 },
            second: HashtagCount { tag: "#b".into(), count: 1 },
        }
    }

    #[tokio::test]
    async fn junk_input_retries_until_valid() {
        let mut lines = reader("maybe\n7\n2\n");
        let choice = prompt_choice(&mut lines, &round()).await.unwrap();
        assert_eq!(choice, Some(Choice::Second));
    }

    #[tokio::test]
    async fn eof_yields_none() {
        let mut lines = reader("nonsense\n");
        let choice = prompt_choice(&mut lines, &round()).await.unwrap();
        assert_eq!(choice, None);
    }

    #[tokio::test]
    async fn game_over_on_first_wrong_guess() {
        let ranked = vec![
            HashtagCount { tag: "#x".into(), count: 9 },
            HashtagCount { tag: "#y".into(), count: 1 },
        ];
        // Whichever order the round presents, one of these answers is wrong;
        // either way the game must terminate without more input.
        let mut lines = reader("1\n1\n");
        run_game(&mut lines, ranked).await.unwrap();
    }
}
