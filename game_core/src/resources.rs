use std::collections::VecDeque;

use crate::components::Side;

/// Source of the fair coin flips used when re-serving the ball
pub trait CoinFlip {
    fn flip(&mut self) -> bool;
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl CoinFlip for GameRng {
    fn flip(&mut self) -> bool {
        use rand::Rng;
        self.0.gen_bool(0.5)
    }
}

/// Replays a fixed sequence of flips, then keeps returning `true`
#[derive(Debug, Clone, Default)]
pub struct ScriptedCoin {
    flips: VecDeque<bool>,
}

impl ScriptedCoin {
    pub fn new(flips: impl IntoIterator<Item = bool>) -> Self {
        Self {
            flips: flips.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.flips.len()
    }
}

impl CoinFlip for ScriptedCoin {
    fn flip(&mut self) -> bool {
        self.flips.pop_front().unwrap_or(true)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub paddle_hit: Option<Side>, // last paddle struck this frame
    pub ball_reset: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.paddle_hit = None;
        self.ball_reset = false;
    }
}
