//! Enemy wave scheduling
//!
//! `WaveScheduler` is pure timing state: it decides which waves fire on a
//! given tick. `EnemySpawnSystem` turns fired waves into enemies around the
//! player, respecting the live enemy cap.

use super::{emit, player_position, priority};
use crate::config::{CapPolicy, SpawnConfig};
use crate::data::WaveDefinition;
use crate::events::SimEvent;
use crate::spawn::spawn_enemy;
use crate::tags;
use horde_engine::ecs::{System, World};
use horde_engine::foundation::math::{from_angle, Vec2};
use horde_engine::foundation::time::SimClock;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

#[derive(Debug, Clone)]
struct WaveState {
    definition: WaveDefinition,
    timer: f32,
}

/// Interval timers for a catalog of concurrently running waves
#[derive(Debug, Clone, Default)]
pub struct WaveScheduler {
    waves: Vec<WaveState>,
}

impl WaveScheduler {
    pub fn new(waves: Vec<WaveDefinition>) -> Self {
        Self {
            waves: waves
                .into_iter()
                .map(|definition| WaveState { definition, timer: 0.0 })
                .collect(),
        }
    }

    /// Advance the timers of waves active at run time `elapsed`.
    ///
    /// Returns the indices of waves whose interval has elapsed. Timers are
    /// not reset here; call [`WaveScheduler::reset`] for waves that fire.
    pub fn due(&mut self, elapsed: f32, dt: f32) -> Vec<usize> {
        let mut due = Vec::new();
        for (index, wave) in self.waves.iter_mut().enumerate() {
            if !wave.definition.is_active(elapsed) {
                continue;
            }
            wave.timer += dt;
            if wave.timer >= wave.definition.interval {
                due.push(index);
            }
        }
        due
    }

    /// Restart a wave's interval timer
    pub fn reset(&mut self, index: usize) {
        if let Some(wave) = self.waves.get_mut(index) {
            wave.timer = 0.0;
        }
    }

    pub fn wave(&self, index: usize) -> Option<&WaveDefinition> {
        self.waves.get(index).map(|w| &w.definition)
    }

    pub fn len(&self) -> usize {
        self.waves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }
}

/// Spawns enemy batches for due waves
pub struct EnemySpawnSystem {
    scheduler: WaveScheduler,
    max_enemies: usize,
    min_distance: f32,
    max_distance: f32,
    cap_policy: CapPolicy,
    rng: StdRng,
}

impl EnemySpawnSystem {
    pub fn new(config: &SpawnConfig, seed: u64) -> Self {
        Self {
            scheduler: WaveScheduler::new(config.waves.clone()),
            max_enemies: config.max_enemies,
            min_distance: config.min_distance,
            max_distance: config.max_distance.max(config.min_distance),
            cap_policy: config.cap_policy,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn spawn_point(&mut self, around: Vec2) -> Vec2 {
        let angle = self.rng.gen_range(0.0..TAU);
        let distance = self.min_distance + self.rng.gen::<f32>() * (self.max_distance - self.min_distance);
        around + from_angle(angle) * distance
    }

    /// Spawn up to `wave.count` enemies; returns how many were created
    fn spawn_batch(&mut self, world: &mut World, wave: &WaveDefinition, around: Vec2) -> u32 {
        let mut spawned = 0;
        for _ in 0..wave.count {
            if world.count_with_tag(tags::ENEMY) >= self.max_enemies {
                break;
            }
            let position = self.spawn_point(around);
            spawn_enemy(world, wave.enemy_type, position, wave.health_multiplier, wave.damage_multiplier);
            spawned += 1;
        }
        spawned
    }
}

impl System for EnemySpawnSystem {
    fn name(&self) -> &'static str {
        "enemy_spawn"
    }

    fn priority(&self) -> i32 {
        priority::ENEMY_SPAWN
    }

    fn update(&mut self, world: &mut World, dt: f32) {
        let elapsed = world.resource::<SimClock>().map_or(0.0, SimClock::elapsed);
        let around = player_position(world).map_or_else(Vec2::zeros, |(_, p)| p);

        for index in self.scheduler.due(elapsed, dt) {
            let Some(wave) = self.scheduler.wave(index).cloned() else {
                continue;
            };
            let at_cap = world.count_with_tag(tags::ENEMY) >= self.max_enemies;
            if at_cap && self.cap_policy == CapPolicy::Retry {
                continue;
            }
            self.scheduler.reset(index);
            let spawned = self.spawn_batch(world, &wave, around);
            if spawned < wave.count {
                log::debug!(
                    "Enemy cap {} reached, dropped {} {:?}",
                    self.max_enemies,
                    wave.count - spawned,
                    wave.enemy_type
                );
            }
            if spawned > 0 {
                log::debug!("Spawned {} {:?} at t={:.1}", spawned, wave.enemy_type, elapsed);
                emit(world, SimEvent::WaveSpawned { enemy_type: wave.enemy_type, count: spawned });
            }
        }
    }
}
