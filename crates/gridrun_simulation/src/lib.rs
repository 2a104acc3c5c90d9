//! GRIDRUN Simulation Core
//!
//! Navigation-ядро 2D action-игры на Bevy ECS: стриминг мира chunks 8×8,
//! AABB-коллизии с tile grid, navigation-граф с query-зависимыми весами и
//! Dijkstra от преследователей к игроку.
//!
//! Архитектура:
//! - ECS = navigation/simulation layer (grid, collision, path, combat state)
//! - Рендер и ввод — внешний слой: читает компоненты, пишет MoveIntent
//! - Один simulation tick = один прогон FixedUpdate (60Hz), все системы
//!   строго последовательны — внутри tick ничего не блокируется и не
//!   отменяется

use bevy::prelude::*;

// Публичные модули
pub mod ai;
pub mod combat;
pub mod components;
pub mod constants;
pub mod grid;
pub mod logger;
pub mod movement;
pub mod nav;
pub mod sprite;
pub mod world;

// Re-export базовых типов для удобства
pub use combat::{DamageDealt, EntityDied, GameOver};
pub use components::*;
pub use grid::{ChunkGrid, TileKind, TilePos};
pub use nav::{compute_path, PathQuery};
pub use sprite::SpriteState;
pub use world::{setup_world, ActiveChunk, ChunkEntered, ChunkLoader, TileImageCache};

/// Порядок систем внутри одного tick
///
/// Гарантия порядка: игрок первым, потом враги в порядке spawn, затем бой
/// и bookkeeping. Системы фаз выполняются строго последовательно.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSet {
    PlayerMovement,
    ChunkTransition,
    Pursuit,
    Combat,
    Sprites,
    Bookkeeping,
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(constants::TICK_RATE_HZ))
            .configure_sets(
                FixedUpdate,
                (
                    TickSet::PlayerMovement,
                    TickSet::ChunkTransition,
                    TickSet::Pursuit,
                    TickSet::Combat,
                    TickSet::Sprites,
                    TickSet::Bookkeeping,
                )
                    .chain(),
            )
            // Подсистемы navigation core
            .add_plugins((
                movement::MovementPlugin,
                world::WorldPlugin,
                ai::AIPlugin,
                combat::CombatPlugin,
                sprite::SpritePlugin,
            ));
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Хост довершает инициализацию вызовом [`world::setup_world`] и spawn
/// игрока через [`components::player_bundle`].
pub fn create_headless_app() -> App {
    let mut app = App::new();
    logger::init();
    app.add_plugins(MinimalPlugins).add_plugins(SimulationPlugin);

    app
}

/// Прогоняет ровно один simulation tick
///
/// Headless-прогоны и тесты тикают schedule напрямую — без зависимости от
/// реального времени, накопленного Time<Fixed>.
pub fn run_tick(app: &mut App) {
    app.world_mut().run_schedule(FixedUpdate);
}

/// Snapshot позиций и здоровья всех entity для сравнения детерминизма
///
/// Entity отсортированы по индексу — формат стабилен между прогонами.
pub fn world_snapshot(world: &mut World) -> Vec<u8> {
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &PixelPosition, Option<&Health>)>();
    let mut entities: Vec<_> = query.iter(world).collect();
    entities.sort_by_key(|(entity, _, _)| entity.index());

    for (entity, position, health) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(&position.x.to_le_bytes());
        snapshot.extend_from_slice(&position.y.to_le_bytes());
        if let Some(health) = health {
            snapshot.extend_from_slice(&health.current.to_le_bytes());
        }
    }

    snapshot
}
