//! End-to-end random-policy rollout example.
//!
//! Demonstrates: build config → GridEngine → reset → sample actions →
//! step until the step limit → read metrics → repeat.
//!
//! Set `RUST_LOG=debug` to see resets and consumptions, `trace` for
//! every step.

use gridworld_bench::{demo_profile, partial_profile};
use gridworld_engine::GridEngine;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

const EPISODES: u64 = 20;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    println!("=== Gridworld Random Rollout ===\n");

    for (label, config) in [("full", demo_profile(42)), ("partial", partial_profile(42))] {
        let mut engine = GridEngine::new(config).unwrap();
        let mut policy = ChaCha8Rng::seed_from_u64(7);
        let actions = engine.action_space();

        println!("View: {label} ({} actions)", engine.actions());
        let mut returns = Vec::with_capacity(EPISODES as usize);

        for episode in 0..EPISODES {
            engine.reset_with_seed(1000 + episode).unwrap();
            loop {
                let direction = actions[policy.random_range(0..actions.len())];
                let outcome = engine.step(direction).unwrap();
                if outcome.terminal {
                    break;
                }
            }

            let m = engine.metrics();
            println!(
                "  episode {:>2}: return={:>5.1}, rewards={:>2}, hazards={:>2}, blocked={:>2}, steps={}",
                episode + 1,
                m.episode_return,
                m.rewards_collected,
                m.hazards_hit,
                m.blocked_moves,
                m.steps,
            );
            returns.push(m.episode_return);
        }

        let mean = returns.iter().sum::<f64>() / returns.len() as f64;
        info!(view = label, mean_return = mean, "rollout finished");
        println!("  mean return: {mean:.3}\n");
    }

    println!("Done.");
}
