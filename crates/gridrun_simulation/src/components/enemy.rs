//! Враги-преследователи и реестр их типов
//!
//! Реестр — статическая таблица вместо динамического lookup класса по имени:
//! неизвестное имя в spawn-данных — обычный промах поиска, record
//! пропускается, загрузка chunk продолжается.

use std::collections::VecDeque;

use bevy::prelude::*;

use crate::grid::TilePos;
use crate::sprite::SpriteState;

use super::{Combatant, Health, PixelPosition, SpriteSize, Velocity};

/// Описание типа врага: характеристики, с которыми он спавнится
#[derive(Debug, Clone, Copy)]
pub struct EnemyKind {
    pub name: &'static str,
    pub hp: u32,
    pub damage: u32,
    pub attack_range: i32,
    pub max_speed: i32,
    pub width: i32,
    pub height: i32,
    /// Каталог sprites для рендер-слоя
    pub sprite_dir: &'static str,
}

/// Все известные типы врагов — фиксируется на этапе компиляции
pub static ENEMY_KINDS: &[EnemyKind] = &[
    EnemyKind {
        name: "Zombie",
        hp: 10,
        damage: 2,
        attack_range: 40,
        max_speed: 3,
        width: 32,
        height: 32,
        sprite_dir: "assets/sprites/Zombie",
    },
    EnemyKind {
        name: "Skeleton",
        hp: 6,
        damage: 3,
        attack_range: 45,
        max_speed: 4,
        width: 32,
        height: 32,
        sprite_dir: "assets/sprites/Skeleton",
    },
];

/// Lookup типа по имени из spawn-данных
pub fn enemy_kind_by_name(name: &str) -> Option<&'static EnemyKind> {
    ENEMY_KINDS.iter().find(|kind| kind.name == name)
}

/// Враг-преследователь
///
/// `distance_to_player` обновляется каждый tick (от центра до центра);
/// до первого обновления — MAX, чтобы атаки не проходили по
/// неинициализированной дистанции.
#[derive(Component, Debug, Clone)]
pub struct Enemy {
    pub kind: &'static str,
    pub max_speed: i32,
    pub distance_to_player: f32,
}

/// Текущий path преследования: tile-позиции до цели, потребляются спереди
#[derive(Component, Debug, Clone, Default)]
pub struct PursuitPath(pub VecDeque<TilePos>);

/// Полный набор компонентов врага типа `kind` для spawn в (x, y)
pub fn enemy_bundle(kind: &'static EnemyKind, x: i32, y: i32) -> impl Bundle {
    (
        Enemy {
            kind: kind.name,
            max_speed: kind.max_speed,
            distance_to_player: f32::MAX,
        },
        PixelPosition::new(x, y),
        Velocity::ZERO,
        SpriteSize {
            width: kind.width,
            height: kind.height,
        },
        Health::new(kind.hp),
        Combatant::new(kind.damage, kind.attack_range),
        PursuitPath::default(),
        SpriteState::default(),
    )
}
