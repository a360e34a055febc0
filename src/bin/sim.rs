use battleship_core::{
    init_logging, Combatant, CombatantKind, Game, GameError, Phase, Seat,
};
use clap::Parser;
use rand::{rngs::SmallRng, RngCore, SeedableRng};
use serde_json::json;

/// Play one computer-vs-computer game and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value = "Computer One")]
    first: String,
    #[arg(long, default_value = "Computer Two")]
    second: String,
    #[arg(long, default_value_t = 200, help = "Give up after this many turn attempts")]
    max_turns: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let base = match cli.seed {
        Some(s) => s,
        None => rand::rng().next_u64(),
    };
    log::info!("using seed {}", base);

    let first = Combatant::with_seed(cli.first, CombatantKind::Autonomous, base)
        .map_err(|e| anyhow::anyhow!(e))?;
    let second = Combatant::with_seed(cli.second, CombatantKind::Autonomous, base.wrapping_add(1))
        .map_err(|e| anyhow::anyhow!(e))?;
    let mut game = Game::new(first, second);

    let mut placement_rng = SmallRng::seed_from_u64(base.wrapping_add(2));
    for seat in [Seat::First, Seat::Second] {
        game.place_fleet_randomly(seat, &mut placement_rng)
            .map_err(|e| anyhow::anyhow!(e))?;
    }
    game.start().map_err(|e| anyhow::anyhow!(e))?;

    let mut attempts = 0;
    while game.phase() == Phase::Playing {
        if attempts >= cli.max_turns {
            anyhow::bail!("no winner after {} turn attempts", attempts);
        }
        attempts += 1;
        match game.play_turn(None) {
            Ok(report) => log::info!(
                "{:?} fires at {}: {}{}",
                report.attacker,
                report.target,
                report.outcome,
                report
                    .sunk
                    .as_deref()
                    .map(|name| format!(" (sank {})", name))
                    .unwrap_or_default()
            ),
            Err(e @ GameError::NoTargetsLeft) => return Err(anyhow::anyhow!(e)),
            Err(e) => log::warn!("{:?} turn rejected: {}", game.current(), e),
        }
    }

    let winner = game.winner().map(|seat| game.combatant(seat).name().to_string());
    let seat_summary = |seat: Seat| {
        let snapshot = game.combatant(seat.other()).board().snapshot();
        json!({
            "name": game.combatant(seat).name(),
            "hits": snapshot.hits(),
            "misses": snapshot.misses(),
        })
    };
    let result = json!({
        "seed": base,
        "turns": game.turns(),
        "winner": winner,
        "winner_seat": game.winner(),
        "first": seat_summary(Seat::First),
        "second": seat_summary(Seat::Second),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
