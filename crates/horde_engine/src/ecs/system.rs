//! System trait

use super::World;

/// A unit of per-tick simulation logic.
///
/// Systems run to completion in ascending `priority` order; a system never
/// yields part way through its update.
pub trait System {
    /// Human-readable name, used in logs
    fn name(&self) -> &'static str;

    /// Execution priority; lower runs first
    fn priority(&self) -> i32;

    /// Advance the system by `dt` seconds
    fn update(&mut self, world: &mut World, dt: f32);

    /// Disabled systems are skipped by the scheduler
    fn enabled(&self) -> bool {
        true
    }
}
