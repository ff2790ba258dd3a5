//! Factorials, permutations and combinations that stay exact for as long as the answer fits in
//! 128 bits, then degrade gracefully to double precision. Also hosts the input-parsing calculator
//! and a catalogue of worked counting problems built on top of the engine.

pub mod calculator;
pub mod comb;
pub mod count;
pub mod domain;
pub mod factorial;
pub mod print;
pub mod problems;

#[doc = include_str!("../../README.md")]
#[cfg(doc)]
fn readme() {}
