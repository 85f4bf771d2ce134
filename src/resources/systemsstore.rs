//! Registry of state hook systems.
//!
//! Enter/exit hooks are registered once in `main` under string keys and run
//! by the game-state observer via their [`SystemId`].

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemId;
use rustc_hash::FxHashMap;

#[derive(Resource, Default)]
pub struct SystemsStore {
    pub map: FxHashMap<String, SystemId>,
}

impl SystemsStore {
    pub fn new() -> Self {
        SystemsStore {
            map: FxHashMap::default(),
        }
    }

    /// Register `system` in `world` and store its id under `name`.
    pub fn register<M>(
        &mut self,
        world: &mut World,
        name: impl Into<String>,
        system: impl IntoSystem<(), (), M> + 'static,
    ) {
        let id = world.register_system(system);
        self.map.insert(name.into(), id);
    }

    pub fn get(&self, name: impl AsRef<str>) -> Option<&SystemId> {
        self.map.get(name.as_ref())
    }
}
