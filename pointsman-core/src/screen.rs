//! Display command batches for each game screen
//!
//! The remote display retains whatever was last written, so a screen is
//! just the short burst of commands that changes it. Batch contents
//! (texts, colors, command order) match what the cabinet's display
//! firmware expects; color values are indexes into its palette.

use heapless::Vec;
use pointsman_protocol::{DisplayCommand, Row};

/// Upper bound on commands per batch
pub const MAX_BATCH_COMMANDS: usize = 4;

/// One screen's worth of display commands, transmitted in order
pub type CommandBatch = Vec<DisplayCommand<'static>, MAX_BATCH_COMMANDS>;

fn batch(commands: &[DisplayCommand<'static>]) -> CommandBatch {
    let mut out = Vec::new();
    // Cannot overflow: every builder stays within MAX_BATCH_COMMANDS
    let _ = out.extend_from_slice(commands);
    out
}

/// Attract screen shown while waiting for a game to start
pub fn new_game_prompt() -> CommandBatch {
    batch(&[
        DisplayCommand::Clear,
        DisplayCommand::Text {
            row: Row::Top,
            color: 1,
            text: "NEW",
        },
        DisplayCommand::Text {
            row: Row::Bottom,
            color: 2,
            text: "___GAME?",
        },
    ])
}

/// Blank slate before play starts
pub fn wiped() -> CommandBatch {
    batch(&[DisplayCommand::Clear])
}

/// Live score and ball count during play
///
/// The "SCORE" caption color distinguishes normal play from undo mode.
pub fn play_status(score: i16, balls: u8, caption_color: u8) -> CommandBatch {
    batch(&[
        DisplayCommand::Text {
            row: Row::Top,
            color: caption_color,
            text: "SCORE",
        },
        DisplayCommand::Score(score),
        DisplayCommand::BallCount(balls),
    ])
}

/// Final score, first half of the game-over alternation
pub fn score_banner(score: i16) -> CommandBatch {
    batch(&[
        DisplayCommand::Clear,
        DisplayCommand::Text {
            row: Row::Top,
            color: 1,
            text: "SCORE",
        },
        DisplayCommand::Score(score),
    ])
}

/// Second half of the game-over alternation
pub fn game_over_banner() -> CommandBatch {
    batch(&[
        DisplayCommand::Clear,
        DisplayCommand::Text {
            row: Row::Top,
            color: 3,
            text: "GAME",
        },
        DisplayCommand::Text {
            row: Row::Bottom,
            color: 6,
            text: "____OVER",
        },
    ])
}

/// Winning score, first half of the win alternation
pub fn max_score_banner(score: i16) -> CommandBatch {
    batch(&[
        DisplayCommand::Clear,
        DisplayCommand::Text {
            row: Row::Top,
            color: 2,
            text: "MAX",
        },
        DisplayCommand::Score(score),
    ])
}

/// Second half of the win alternation
pub fn great_job_banner() -> CommandBatch {
    batch(&[
        DisplayCommand::Clear,
        DisplayCommand::Text {
            row: Row::Top,
            color: 2,
            text: "GREAT",
        },
        DisplayCommand::Text {
            row: Row::Bottom,
            color: 4,
            text: "_____JOB",
        },
    ])
}

/// Undo mode wound the score all the way back to zero
pub fn undo_success(score: i16, balls: u8) -> CommandBatch {
    batch(&[
        DisplayCommand::Score(score),
        DisplayCommand::Text {
            row: Row::Top,
            color: 1,
            text: "SUCCESS",
        },
        DisplayCommand::BallCount(balls),
    ])
}

/// Undo mode refilled the rack with score still on the board
pub fn undo_fail(score: i16, balls: u8) -> CommandBatch {
    batch(&[
        DisplayCommand::Text {
            row: Row::Top,
            color: 3,
            text: "FAIL ",
        },
        DisplayCommand::Score(score),
        DisplayCommand::BallCount(balls),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pointsman_protocol::CMD_CLEAR;

    #[test]
    fn test_prompt_clears_then_writes_both_rows() {
        let prompt = new_game_prompt();
        assert_eq!(prompt.len(), 3);
        assert_eq!(prompt[0], DisplayCommand::Clear);
        assert!(matches!(
            prompt[1],
            DisplayCommand::Text { row: Row::Top, .. }
        ));
        assert!(matches!(
            prompt[2],
            DisplayCommand::Text {
                row: Row::Bottom,
                ..
            }
        ));
    }

    #[test]
    fn test_play_status_carries_score_and_balls() {
        let status = play_status(250, 7, 1);
        assert!(status.contains(&DisplayCommand::Score(250)));
        assert!(status.contains(&DisplayCommand::BallCount(7)));
        // A status refresh repaints in place; it must not clear.
        assert!(!status.contains(&DisplayCommand::Clear));
    }

    #[test]
    fn test_banner_batches_start_with_clear() {
        for banner in [
            score_banner(420),
            game_over_banner(),
            max_score_banner(1200),
            great_job_banner(),
        ] {
            assert_eq!(banner[0], DisplayCommand::Clear);
        }
    }

    #[test]
    fn test_wiped_is_a_bare_clear() {
        let b = wiped();
        assert_eq!(b.len(), 1);
        assert_eq!(&b[0].encode().unwrap()[..], &[CMD_CLEAR]);
    }

    #[test]
    fn test_every_batch_fits_and_encodes() {
        for b in [
            new_game_prompt(),
            wiped(),
            play_status(0, 10, 1),
            score_banner(0),
            game_over_banner(),
            max_score_banner(1000),
            great_job_banner(),
            undo_success(0, 10),
            undo_fail(35, 10),
        ] {
            assert!(b.len() <= MAX_BATCH_COMMANDS);
            for cmd in &b {
                assert!(!cmd.encode().unwrap().is_empty());
            }
        }
    }
}
