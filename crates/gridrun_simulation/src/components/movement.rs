//! Movement компоненты: позиция, скорость, intent слоя ввода

use bevy::prelude::*;

use crate::grid::TilePos;

use super::SpriteSize;

/// Позиция entity в пиксельном пространстве экрана (левый верхний угол sprite)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct PixelPosition {
    pub x: i32,
    pub y: i32,
}

impl PixelPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Пиксельный центр sprite
    pub fn centre(&self, size: SpriteSize) -> (i32, i32) {
        (self.x + size.width / 2, self.y + size.height / 2)
    }

    /// Tile по левому верхнему углу sprite
    pub fn tile(&self) -> TilePos {
        TilePos::of_pixel(self.x, self.y)
    }

    /// Tile по центру sprite (атаки и path-запросы считаются от центра)
    pub fn centre_tile(&self, size: SpriteSize) -> TilePos {
        let (cx, cy) = self.centre(size);
        TilePos::of_pixel(cx, cy)
    }
}

/// Скорость entity в пикселях за tick
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Velocity {
    pub x: i32,
    pub y: i32,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { x: 0, y: 0 };
}

/// Intent от слоя ввода (внешний collaborator)
///
/// Симуляция его только читает; для headless прогонов и тестов intent
/// выставляется прямо в компонент.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct MoveIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub attack: bool,
}
