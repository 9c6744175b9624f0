use alloc::string::String;

use rand::RngCore;
use rand_chacha::ChaCha8Rng;

use crate::seat::Seat;
use crate::sync::Mutex;

use super::Game;

/// A [`Game`] that can be dealt and read from several threads.
///
/// All access goes through one mutex per table, so a deal or reset is never
/// observed half finished.
pub struct SharedGame<R = ChaCha8Rng> {
    game: Mutex<Game<R>>,
}

impl SharedGame {
    /// Creates a shared game with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_game(Game::new(seed))
    }
}

impl<R> SharedGame<R> {
    /// Wraps an existing game.
    #[must_use]
    pub const fn from_game(game: Game<R>) -> Self {
        Self {
            game: Mutex::new(game),
        }
    }

    /// Clears every hand and the trick counters.
    pub fn reset(&self) {
        self.game.lock().reset();
    }

    /// Returns the current dealer.
    pub fn dealer(&self) -> Seat {
        self.game.lock().dealer()
    }

    /// Renders the table.
    pub fn render(&self) -> String {
        self.game.lock().render()
    }

    /// Runs `f` with the game locked.
    pub fn with<T>(&self, f: impl FnOnce(&Game<R>) -> T) -> T {
        f(&self.game.lock())
    }

    /// Unwraps the inner game.
    pub fn into_inner(self) -> Game<R> {
        self.game.into_inner()
    }
}

impl<R: RngCore> SharedGame<R> {
    /// Deals a fresh set of hands.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Game::deal`].
    pub fn deal(&self) {
        self.game.lock().deal();
    }
}
