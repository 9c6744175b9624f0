//! Deals a few bridge hands and prints them with their point counts.

use bridge_analyzer::Game;
use tracing::{Level, info};

/// Extra deals after the initial one.
const REDEALS: usize = 3;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    info!("starting session");

    let mut game = Game::from_entropy();
    println!("Welcome to Bridge Analyzer!");
    print!("{game}");

    for _ in 0..REDEALS {
        game.deal();
        info!(dealer = %game.dealer(), deal = game.deal_count(), "redealt");
        print!("{game}");
    }
}
