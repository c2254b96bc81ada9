//! Integration tests for the seity-core public API.
//!
//! Every test drives the engine through its public surface with seeded
//! randomness:
//! - Full simulations from canonical seeding to birth
//! - Generation events and pattern properties
//! - Configuration files feeding engine construction

mod helpers;
mod config_tests;
mod genesis_tests;
mod simulation_tests;
