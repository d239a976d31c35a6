//! Demonstration registry and sequential runner.
//!
//! Demonstrations are independent: each one builds its callable values from
//! fixed inputs, emits its result lines into a [`transcript::Transcript`],
//! and shares no state with any other demonstration.

pub mod demo;
pub mod demos;
pub mod registry;
pub mod runner;
pub mod transcript;
