//! Parallel Sieve of Eratosthenes engine.
//!
//! Enumerates all primes up to a bound with a choice of execution strategy:
//! a sequential baseline, or a two-phase fork-join engine that seeds the
//! primes up to sqrt(n) sequentially and then marks the high range with one
//! concurrent task per seed prime. Every strategy returns the identical
//! ascending sequence for the same bound.
//!
//! ```
//! use erato::{primes_up_to, Strategy};
//!
//! let primes = primes_up_to(30, Strategy::ByRange).unwrap();
//! assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
//! ```

mod error;
mod flags;
pub mod parallel;
pub mod sequential;
mod strategy;

pub use error::SieveError;
pub use flags::FlagArray;
pub use strategy::{Strategy, primes_up_to};
