use grid_battle::{AiPlayer, Match, MatchConfig, DEFAULT_BOARD_SIZE};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    grid_battle::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [size]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let size: usize = match args.get(2) {
        Some(s) => s.parse()?,
        None => DEFAULT_BOARD_SIZE,
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let config = MatchConfig::with_size(size);
    let mut game = Match::setup(&config, AiPlayer::new(), AiPlayer::new(), &mut rng)?;
    let winner = game.run(&mut rng, &mut ())?;

    let result = json!({
        "winner": winner,
        "stats": game.stats(),
        "human_sunk": game.human_board().sunk_count(),
        "automated_sunk": game.automated_board().sunk_count(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
