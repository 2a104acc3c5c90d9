//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - actor: общее для игрока и врагов (Health, Combatant, SpriteSize)
//! - movement: позиция, скорость, intent от слоя ввода
//! - player: player control marker и spawn bundle
//! - enemy: преследователи, их реестр типов и path к цели

pub mod actor;
pub mod enemy;
pub mod movement;
pub mod player;

// Re-exports для удобного импорта
pub use actor::*;
pub use enemy::*;
pub use movement::*;
pub use player::*;
