//! Frame driver: one simulation step, then one render, per host frame

use std::cell::RefCell;
use std::rc::Rc;

use crate::renderer::draw_frame;
use crate::surface::DrawSurface;
use game_core::{CoinFlip, Game, GameRng};

/// Game handle shared between the frame loop and input callbacks
pub type SharedGame<R = GameRng> = Rc<RefCell<Game<R>>>;

pub struct FrameDriver<S, R: CoinFlip = GameRng> {
    game: SharedGame<R>,
    surface: S,
}

impl<S: DrawSurface, R: CoinFlip> FrameDriver<S, R> {
    pub fn new(game: SharedGame<R>, surface: S) -> Self {
        Self { game, surface }
    }

    /// Handle for input callbacks
    pub fn game(&self) -> SharedGame<R> {
        Rc::clone(&self.game)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Advance the game one frame, then draw the result.
    ///
    /// The game stays borrowed for the whole tick, so an input write can
    /// never land between the step and the draw.
    pub fn tick(&mut self) -> Result<(), S::Error> {
        let mut game = self.game.borrow_mut();
        game.advance();

        match game.snapshot() {
            Some(snapshot) => draw_frame(&mut self.surface, &snapshot, game.config()),
            None => {
                log::warn!("frame {}: nothing to draw", game.frame());
                Ok(())
            }
        }
    }
}
