//! Доменные константы навигационного ядра
//!
//! Все формулы коллизий и построения графа параметричны на этих константах —
//! никаких продублированных литералов в системах.

/// Размер tile в пикселях
pub const TILE_SIZE: i32 = 50;

/// Ширина chunk в tiles
pub const CHUNK_WIDTH: usize = 8;

/// Высота chunk в tiles
pub const CHUNK_HEIGHT: usize = 8;

/// Ширина chunk в пикселях
pub const CHUNK_PIXEL_WIDTH: i32 = CHUNK_WIDTH as i32 * TILE_SIZE;

/// Высота chunk в пикселях
pub const CHUNK_PIXEL_HEIGHT: i32 = CHUNK_HEIGHT as i32 * TILE_SIZE;

/// Границы экрана (entity не выходит за них независимо от grid)
pub const SCREEN_WIDTH: i32 = 400;
pub const SCREEN_HEIGHT: i32 = 400;

/// Горизонтальный/вертикальный inset collision box относительно sprite
/// (collision ощущается по центру sprite, а не по его полному footprint)
pub const COLLISION_INSET_X: i32 = 12;
pub const COLLISION_INSET_Y: i32 = 10;

/// Дистанция до края chunk (пиксели), при которой срабатывает переход
pub const CHUNK_EDGE_MARGIN: i32 = 5;

/// Отступ от противоположного края при входе в новый chunk (пиксели)
pub const CHUNK_ENTER_OFFSET: i32 = 10;

/// Cooldown перехода между chunks (ticks) — защита от осцилляции на границе
pub const CHUNK_SWITCH_COOLDOWN: u32 = 30;

/// Интервал пересчёта путей преследования (ticks)
pub const PATH_RECOMPUTE_INTERVAL: u32 = 30;

/// Cooldown атаки (ticks) — одинаков для игрока и врагов
pub const ATTACK_COOLDOWN: u32 = 60;

/// Шаг и граница поиска свободной точки после входа в chunk (пиксели)
pub const REENTRY_NUDGE_STEP: i32 = 4;
pub const REENTRY_NUDGE_MAX: i32 = 30;

/// Прирост скорости игрока за tick и её предел (пиксели/tick)
pub const PLAYER_ACCEL: i32 = 2;
pub const PLAYER_MAX_SPEED: i32 = 10;

/// Частота simulation tick
pub const TICK_RATE_HZ: f64 = 60.0;
