//! Component-set queries
//!
//! A query is a tuple of component types; an entity matches when it owns
//! every one of them.

use super::{Component, Entity, World};

/// A set of component types an entity must carry
pub trait ComponentQuery {
    /// Whether `entity` has every component in the set
    fn matches(world: &World, entity: Entity) -> bool;
}

macro_rules! impl_component_query {
    ($($t:ident),+) => {
        impl<$($t: Component),+> ComponentQuery for ($($t,)+) {
            fn matches(world: &World, entity: Entity) -> bool {
                $(world.has_component::<$t>(entity))&&+
            }
        }
    };
}

impl_component_query!(A);
impl_component_query!(A, B);
impl_component_query!(A, B, C);
impl_component_query!(A, B, C, D);
impl_component_query!(A, B, C, D, E);
