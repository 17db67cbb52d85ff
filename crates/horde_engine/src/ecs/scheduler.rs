//! Fixed-priority system scheduling
//!
//! Single-threaded and deterministic: each frame runs every enabled system
//! once in priority order (ties keep insertion order), then sweeps the
//! entities that were marked for removal during the frame.

use super::{System, World};
use crate::foundation::time::SimClock;

/// Ordered collection of systems executed once per tick
#[derive(Default)]
pub struct SystemScheduler {
    systems: Vec<Box<dyn System>>,
}

impl SystemScheduler {
    /// Create an empty scheduler
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a system, keeping the list sorted by priority
    pub fn add_system<S: System + 'static>(&mut self, system: S) {
        self.add_boxed(Box::new(system));
    }

    /// Register an already boxed system
    pub fn add_boxed(&mut self, system: Box<dyn System>) {
        let priority = system.priority();
        let index = self
            .systems
            .iter()
            .position(|s| s.priority() > priority)
            .unwrap_or(self.systems.len());
        log::debug!("Registered system '{}' (priority {})", system.name(), priority);
        self.systems.insert(index, system);
    }

    /// Names of the registered systems in execution order
    pub fn system_names(&self) -> Vec<&'static str> {
        self.systems.iter().map(|s| s.name()).collect()
    }

    /// Number of registered systems
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// Whether no systems are registered
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// Run one tick: advance the clock, run every system, sweep removals.
    ///
    /// Returns the number of entities swept at the end of the tick.
    pub fn execute_frame(&mut self, world: &mut World, dt: f32) -> usize {
        world.resource_or_default::<SimClock>().advance(dt);
        for system in &mut self.systems {
            if system.enabled() {
                system.update(world, dt);
            }
        }
        let removed = world.flush_removals();
        if removed > 0 {
            log::trace!("Swept {} entities", removed);
        }
        removed
    }
}
