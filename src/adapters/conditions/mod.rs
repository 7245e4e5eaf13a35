//! Weather, safety and accessibility adapters.

mod random;

pub use random::RandomConditionsProvider;
