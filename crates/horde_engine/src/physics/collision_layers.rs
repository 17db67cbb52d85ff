//! Collision layer system for filtering collision detection
//!
//! Every collider sits on one or more layers and carries a mask of the
//! layers it wants to touch. A pair is tested when either side's mask
//! includes the other side's layer.

use bitflags::bitflags;

bitflags! {
    /// Collision layer bitmask
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CollisionLayers: u32 {
        /// Player character layer
        const PLAYER = 1 << 0;
        /// Enemy character layer
        const ENEMY = 1 << 1;
        /// Attacks owned by the player
        const PLAYER_PROJECTILE = 1 << 2;
        /// Attacks owned by enemies
        const ENEMY_PROJECTILE = 1 << 3;
        /// Pickups and collectibles
        const PICKUP = 1 << 4;
    }
}

impl CollisionLayers {
    /// Check if two colliders should be tested against each other.
    ///
    /// Interest from one side is enough: `mask_a & layer_b` or
    /// `mask_b & layer_a` must be non-empty.
    ///
    /// # Example
    /// ```
    /// use horde_engine::physics::CollisionLayers;
    ///
    /// // Pickups only listen for the player; the player listens for enemies.
    /// assert!(CollisionLayers::should_collide(
    ///     CollisionLayers::PLAYER, CollisionLayers::ENEMY,
    ///     CollisionLayers::PICKUP, CollisionLayers::PLAYER,
    /// ));
    /// ```
    pub fn should_collide(
        layer_a: Self,
        mask_a: Self,
        layer_b: Self,
        mask_b: Self,
    ) -> bool {
        mask_a.intersects(layer_b) || mask_b.intersects(layer_a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_collide_mutual() {
        assert!(CollisionLayers::should_collide(
            CollisionLayers::PLAYER,
            CollisionLayers::ENEMY,
            CollisionLayers::ENEMY,
            CollisionLayers::PLAYER,
        ));
    }

    #[test]
    fn test_one_sided_interest_is_enough() {
        // The player does not list pickups, but pickups list the player.
        assert!(CollisionLayers::should_collide(
            CollisionLayers::PLAYER,
            CollisionLayers::ENEMY,
            CollisionLayers::PICKUP,
            CollisionLayers::PLAYER,
        ));
    }

    #[test]
    fn test_disjoint_layers_do_not_collide() {
        // Two player projectiles never interact.
        let layer = CollisionLayers::PLAYER_PROJECTILE;
        let mask = CollisionLayers::ENEMY;
        assert!(!CollisionLayers::should_collide(layer, mask, layer, mask));
        // Enemies overlap each other freely.
        let enemy_mask = CollisionLayers::PLAYER | CollisionLayers::PLAYER_PROJECTILE;
        assert!(!CollisionLayers::should_collide(
            CollisionLayers::ENEMY,
            enemy_mask,
            CollisionLayers::ENEMY,
            enemy_mask,
        ));
    }

    #[test]
    fn test_layer_bits() {
        assert_eq!(CollisionLayers::PLAYER.bits(), 1);
        assert_eq!(CollisionLayers::ENEMY.bits(), 2);
        assert_eq!(CollisionLayers::PLAYER_PROJECTILE.bits(), 4);
        assert_eq!(CollisionLayers::ENEMY_PROJECTILE.bits(), 8);
        assert_eq!(CollisionLayers::PICKUP.bits(), 16);
    }
}
