// Traits module
//
// The two seams of the crate: how structured samples coerce to a scalar, and
// how a host type exposes recorder behaviour.

pub mod coerce;
pub mod recorder;

pub use coerce::{Fields, ValueOf};
#[cfg(test)]
pub use coerce::MockValueOf;
pub use recorder::Recorder;
