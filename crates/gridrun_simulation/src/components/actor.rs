//! Общие компоненты живых entity: Health, Combatant, SpriteSize

use bevy::prelude::*;

use crate::constants::ATTACK_COOLDOWN;

/// Здоровье entity
///
/// Инвариант: 0 ≤ current ≤ max
#[derive(Component, Debug, Clone, Copy, Reflect)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    /// Наносит урон; true если удар оказался смертельным
    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.current = self.current.saturating_sub(amount);
        self.current == 0
    }
}

/// Боевые характеристики entity
///
/// `attack_range` — максимальная дистанция между центрами (пиксели),
/// на которой атака достаёт цель. Cooldown считается в ticks.
#[derive(Component, Debug, Clone, Copy, Reflect)]
pub struct Combatant {
    pub damage: u32,
    pub attack_range: i32,
    pub cooldown_ticks: u32,
}

impl Combatant {
    pub fn new(damage: u32, attack_range: i32) -> Self {
        Self {
            damage,
            attack_range,
            cooldown_ticks: 0,
        }
    }

    pub fn can_attack(&self) -> bool {
        self.cooldown_ticks == 0
    }

    /// Начать атаку (взвести cooldown)
    pub fn start_attack(&mut self) {
        self.cooldown_ticks = ATTACK_COOLDOWN;
    }

    pub fn tick_cooldown(&mut self) {
        self.cooldown_ticks = self.cooldown_ticks.saturating_sub(1);
    }
}

/// Размер sprite entity в пикселях — геометрия для collision box
///
/// Фиксирован на spawn (идёт от idle-sprite entity); декодированием
/// изображений ядро не занимается.
#[derive(Component, Debug, Clone, Copy, Reflect)]
pub struct SpriteSize {
    pub width: i32,
    pub height: i32,
}
