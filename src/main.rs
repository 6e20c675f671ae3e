use clap::Parser;
use grid_battle::{
    greeting, init_logging, AiPlayer, CliPlayer, ConsoleObserver, Match, MatchConfig, Pacing,
    DEFAULT_BOARD_SIZE, DEFAULT_FLEET, PLACEMENT_ATTEMPT_BUDGET,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Sea battle against the computer.", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE, help = "Side length of each board")]
    size: usize,
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = DEFAULT_FLEET,
        help = "Ship lengths placed on each board (e.g., --fleet 3,2,2,1)"
    )]
    fleet: Vec<usize>,
    #[arg(long, help = "Skip the pauses between moves")]
    no_delay: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = MatchConfig {
        size: cli.size,
        fleet: cli.fleet,
        placement_budget: PLACEMENT_ATTEMPT_BUDGET,
    };
    let pacing = if cli.no_delay {
        Pacing::none()
    } else {
        Pacing::default()
    };

    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (boards will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut game = Match::setup(&config, CliPlayer::stdio(), AiPlayer::new(), &mut rng)?;
    let mut observer = ConsoleObserver::stdout(pacing);

    println!("{}", greeting());
    if !cli.no_delay {
        std::thread::sleep(std::time::Duration::from_secs(2));
    }

    game.run(&mut rng, &mut observer)?;
    Ok(())
}
