//! Shared primitive types used across the entire simulation.

/// Real (wall-clock) time in milliseconds since the host opened the session.
/// The core never reads a platform clock; hosts pass this in.
pub type RealMillis = u64;

/// A span of simulated time, in game minutes. Fractional at non-integer speeds.
pub type GameMinutes = f64;

/// Inclusive bounds every stat lives within.
pub const STAT_MIN: f64 = 0.0;
pub const STAT_MAX: f64 = 100.0;
