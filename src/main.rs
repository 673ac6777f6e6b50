//! Demo binary: runs a full game against the seeded mock decision source
//! and prints each turn's board, action and score to stdout.

use anyhow::Result;

use prompt_tetris::{GameConfig, GameEngine, MockSource, TurnError};

const MAX_TURNS: usize = 1000;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    println!(
        "[Main] starting {}x{} game, seed {}",
        config.width, config.height, config.seed
    );

    let mut engine = GameEngine::new(config.clone());
    let mut source = MockSource::new(config.seed);
    engine.start();

    for turn in 1..=MAX_TURNS {
        let outcome = match engine.execute_turn(&mut source) {
            Ok(outcome) => outcome,
            Err(TurnError::PlacementFailed) => {
                eprintln!("[Main] turn {} could not place the piece, stopping", turn);
                break;
            }
            Err(err) => return Err(err.into()),
        };

        println!("--- turn {} ---", turn);
        println!("{}", engine.board().serialize(engine.active().as_ref()));
        println!("[Turn] {}", outcome.action);
        if let Some(clear) = &outcome.clear {
            println!(
                "[Turn] cleared {} line(s) for {} points",
                clear.lines_cleared, clear.points
            );
        }
        println!(
            "[Turn] score {} | lines {} | level {}",
            outcome.score, outcome.lines, outcome.level
        );

        if outcome.game_over {
            println!("[Main] game over after {} turns", turn);
            break;
        }
    }

    println!(
        "[Main] final score {} | lines {} | level {}",
        engine.score(),
        engine.lines(),
        engine.level()
    );
    Ok(())
}
