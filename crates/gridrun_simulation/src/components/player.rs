//! Player marker и spawn bundle

use bevy::prelude::*;

use crate::sprite::SpriteState;

use super::{Combatant, Health, MoveIntent, PixelPosition, SpriteSize, Velocity};

/// Стартовые характеристики игрока
pub const PLAYER_HP: u32 = 10;
pub const PLAYER_DAMAGE: u32 = 5;
pub const PLAYER_ATTACK_RANGE: i32 = 50;
pub const PLAYER_WIDTH: i32 = 32;
pub const PLAYER_HEIGHT: i32 = 32;

/// Маркер игрока (keyboard-driven entity)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(MoveIntent, Velocity)]
pub struct Player;

/// Полный набор компонентов игрока для spawn в (x, y)
pub fn player_bundle(x: i32, y: i32) -> impl Bundle {
    (
        Player,
        PixelPosition::new(x, y),
        Velocity::ZERO,
        MoveIntent::default(),
        SpriteSize {
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
        },
        Health::new(PLAYER_HP),
        Combatant::new(PLAYER_DAMAGE, PLAYER_ATTACK_RANGE),
        SpriteState::default(),
    )
}
