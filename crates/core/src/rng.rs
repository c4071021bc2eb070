//! RNG module - seeded piece generation
//!
//! Two policies are available:
//! - **Uniform**: every draw picks one of the 7 kinds independently.
//! - **7-bag**: each bag holds one of every kind, shuffled, drawn until empty.
//!
//! Both run on a simple LCG so a seed fully determines the piece sequence.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (((self.next_u32() >> 16) as u64 * max as u64) >> 16) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Piece selection policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Randomizer {
    /// Independent uniform draws
    #[default]
    Uniform,
    /// Shuffled bags of all seven kinds
    SevenBag,
}

impl Randomizer {
    /// Parse from a config string (`uniform`, `bag` / `7bag` / `sevenbag`)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "uniform" | "random" => Some(Randomizer::Uniform),
            "bag" | "7bag" | "7-bag" | "sevenbag" => Some(Randomizer::SevenBag),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Randomizer::Uniform => "uniform",
            Randomizer::SevenBag => "bag",
        }
    }
}

/// Seeded source of upcoming piece kinds
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    randomizer: Randomizer,
    /// Current bag of pieces (7-bag only)
    bag: [PieceKind; 7],
    /// Index into current bag
    bag_index: usize,
    rng: SimpleRng,
}

impl PieceGenerator {
    /// Create a new generator with the given seed
    pub fn new(seed: u32, randomizer: Randomizer) -> Self {
        Self {
            randomizer,
            bag: PieceKind::ALL,
            // Empty bag: the first 7-bag draw shuffles a fresh one.
            bag_index: PieceKind::ALL.len(),
            rng: SimpleRng::new(seed),
        }
    }

    pub fn randomizer(&self) -> Randomizer {
        self.randomizer
    }

    /// Draw the next piece
    pub fn draw(&mut self) -> PieceKind {
        match self.randomizer {
            Randomizer::Uniform => {
                let i = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
                PieceKind::ALL[i]
            }
            Randomizer::SevenBag => {
                if self.bag_index >= self.bag.len() {
                    self.refill_bag();
                }
                let piece = self.bag[self.bag_index];
                self.bag_index += 1;
                piece
            }
        }
    }

    /// Generate a new shuffled bag
    fn refill_bag(&mut self) {
        self.bag = PieceKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new(1, Randomizer::default())
    }
}
