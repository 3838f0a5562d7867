use broadside::{pick_target, GameEngine, Mode, BOARD_SIZE};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Plays one full match where the human side also fires at random, then
/// prints a JSON summary with the final read-out.
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut engine = GameEngine::new(seed);
    let mut shooter = SmallRng::seed_from_u64(seed.wrapping_add(1));
    engine.start()?;
    let delay = engine.config().response_delay_ms;

    let mut volleys = 0;
    while engine.mode() == Mode::Play && volleys < BOARD_SIZE * BOARD_SIZE {
        let target = engine
            .session()
            .and_then(|s| pick_target(s.enemy_board(), &mut shooter))
            .ok_or_else(|| anyhow::anyhow!("no open cell left on the enemy board"))?;
        engine.fire(target.x, target.y)?;
        engine.advance_time(delay);
        volleys += 1;
    }

    let snapshot = engine.snapshot();
    let result = json!({
        "seed": seed,
        "winner": snapshot.winner,
        "playerShots": snapshot.history.player.len(),
        "enemyShots": snapshot.history.enemy.len(),
        "snapshot": snapshot,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
