//! Data layer: synthetic record generation and mutation.

mod generator;
mod mutation;
mod random;

#[allow(unused_imports)]
pub use self::{
    generator::generate,
    mutation::{mutate, MutationOutcome},
    random::{source_from_seed, RandomSource, RngSource},
};

#[cfg(test)]
pub use random::ScriptedSource;
