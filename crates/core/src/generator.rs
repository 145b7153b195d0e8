//! Tile generators
//!
//! The board asks a [`TileGenerator`] for a fresh tile whenever it fills a cell,
//! at construction and on every refill. It never inspects how values are made.
//!
//! Provided implementations:
//! - any `FnMut() -> T` closure
//! - [`RandomTiles`]: uniform draws from a palette, seeded and deterministic
//! - [`ScriptedTiles`]: cycles a fixed list, for tests and replays

use crate::BoardError;

/// Produces one new tile per call.
pub trait TileGenerator<T> {
    fn next_tile(&mut self) -> T;
}

impl<T, F> TileGenerator<T> for F
where
    F: FnMut() -> T,
{
    fn next_tile(&mut self) -> T {
        self()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Seeds 0 and 1 share a sequence.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Uniform random tiles drawn from a palette.
#[derive(Debug, Clone)]
pub struct RandomTiles<T> {
    palette: Vec<T>,
    rng: SimpleRng,
}

impl<T: Clone> RandomTiles<T> {
    pub fn new(palette: Vec<T>, seed: u32) -> Result<Self, BoardError> {
        if palette.is_empty() {
            return Err(BoardError::EmptyPalette);
        }
        Ok(Self {
            palette,
            rng: SimpleRng::new(seed),
        })
    }
}

impl<T: Clone> TileGenerator<T> for RandomTiles<T> {
    fn next_tile(&mut self) -> T {
        let idx = self.rng.next_range(self.palette.len() as u32) as usize;
        self.palette[idx].clone()
    }
}

/// Cycles through a fixed list of tiles forever.
#[derive(Debug, Clone)]
pub struct ScriptedTiles<T> {
    script: Vec<T>,
    cursor: usize,
}

impl<T: Clone> ScriptedTiles<T> {
    pub fn cycle(script: Vec<T>) -> Result<Self, BoardError> {
        if script.is_empty() {
            return Err(BoardError::EmptyPalette);
        }
        Ok(Self { script, cursor: 0 })
    }

    /// Number of tiles handed out so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl<T: Clone> TileGenerator<T> for ScriptedTiles<T> {
    fn next_tile(&mut self) -> T {
        let tile = self.script[self.cursor % self.script.len()].clone();
        self.cursor += 1;
        tile
    }
}
