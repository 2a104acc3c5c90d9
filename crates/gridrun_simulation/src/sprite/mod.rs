//! Sprite override service
//!
//! Временная подмена sprite ("attacking", "damaged") — tick-driven таймер
//! вместо потока на каждую подмену. Сервис трогает только display-состояние
//! своего entity; позиция, grid и path ему недоступны.

use bevy::prelude::*;

/// Display-состояние entity: текущий sprite и активная подмена
///
/// Пока подмена активна, новые запросы игнорируются (один override за раз).
#[derive(Component, Debug, Clone)]
pub struct SpriteState {
    /// Имя sprite, который рендер-слой должен показывать сейчас
    pub current: &'static str,
    /// (sprite для возврата, оставшиеся ticks) активной подмены
    override_timer: Option<(&'static str, u32)>,
}

impl Default for SpriteState {
    fn default() -> Self {
        Self {
            current: "idle",
            override_timer: None,
        }
    }
}

impl SpriteState {
    /// Запросить подмену sprite на `duration` ticks; игнорируется, если
    /// другая подмена ещё активна
    pub fn request_override(&mut self, sprite: &'static str, duration: u32) {
        if self.override_timer.is_some() {
            return;
        }

        let revert_to = self.current;
        self.current = sprite;
        self.override_timer = Some((revert_to, duration));
    }

    pub fn override_active(&self) -> bool {
        self.override_timer.is_some()
    }

    /// Один tick таймера; по истечении возвращает прежний sprite
    pub fn tick(&mut self) {
        if let Some((revert_to, remaining)) = self.override_timer {
            if remaining <= 1 {
                self.current = revert_to;
                self.override_timer = None;
            } else {
                self.override_timer = Some((revert_to, remaining - 1));
            }
        }
    }
}

/// Система: тикает таймеры подмен всех entity
pub fn tick_sprite_overrides(mut query: Query<&mut SpriteState>) {
    for mut state in query.iter_mut() {
        state.tick();
    }
}

/// Plugin сервиса подмен sprite
pub struct SpritePlugin;

impl Plugin for SpritePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            tick_sprite_overrides.in_set(crate::TickSet::Sprites),
        );
    }
}
