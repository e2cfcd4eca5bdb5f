//! Question pairing engine.
//!
//! Given an ordered pool of [`Question`]s, the engine produces two
//! index-aligned groups: group A is the pool as given, group B is a shuffled
//! copy in which no position repeats group A's question text. Randomness comes
//! from an explicit [`RandomSource`], so a seeded source always reproduces the
//! same deck.
//!
//! # Example
//!
//! ```
//! use quizpair::pairing::{Question, SeededRandom, pair};
//!
//! let pool = vec![
//!     Question::new("Q1", "A1"),
//!     Question::new("Q2", "A2"),
//!     Question::new("Q3", "A3"),
//!     Question::new("Q4", "A4"),
//! ];
//! let pairing = pair(&pool, &mut SeededRandom::new(42))?;
//! for (a, b) in pairing.pairs() {
//!     assert_ne!(a.question(), b.question());
//! }
//! # Ok::<(), quizpair::pairing::PairingError>(())
//! ```

pub mod engine;
pub mod error;
pub mod question;
pub mod random;

pub use engine::{DEFAULT_MAX_ATTEMPTS, Pairing, PairingConfig, PairingEngine, pair};
pub use error::{PairingError, Result};
pub use question::Question;
pub use random::{DEFAULT_SEED, RandomSource, SeededRandom};
