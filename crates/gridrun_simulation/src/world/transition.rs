//! Chunk transition manager
//!
//! Состояния перехода: Resident → (игрок у края) → Loading → Resident в новом
//! chunk, либо Resident в старом при любом сбое (rollback). Commit нового
//! состояния происходит только после того, как найдена безопасная точка
//! входа — до этого ни grid, ни враги, ни позиция игрока не меняются,
//! поэтому rollback тривиален.

use bevy::prelude::*;

use crate::ai::PathTimer;
use crate::combat::GameOver;
use crate::components::{enemy_bundle, Enemy, PixelPosition, Player, SpriteSize, Velocity};
use crate::constants::{
    CHUNK_EDGE_MARGIN, CHUNK_ENTER_OFFSET, CHUNK_PIXEL_HEIGHT, CHUNK_PIXEL_WIDTH,
    CHUNK_SWITCH_COOLDOWN, REENTRY_NUDGE_MAX, REENTRY_NUDGE_STEP,
};
use crate::grid::collision::can_move;
use crate::grid::ChunkGrid;
use crate::logger;

use super::{cache_tile_images, ActiveChunk, ChunkEntered, ChunkLoader, TileImageCache};

/// Состояние transition manager
///
/// `cooldown` подавляет повторные проверки края после любой попытки
/// перехода (успешной или нет) — иначе игрок осциллирует на границе.
/// `just_switched` — tick-scoped флаг: остаток tick после попытки перехода
/// враги и бой пропускают.
#[derive(Resource, Debug, Default)]
pub struct TransitionState {
    pub cooldown: u32,
    pub just_switched: bool,
}

/// Куда ведёт близость игрока к краю chunk
///
/// Возвращает смещение chunk-координат и позицию входа у противоположного
/// края. Вертикаль ориентирована как в мире, а не на экране: движение вверх
/// по экрану ведёт в chunk y+1 со входом снизу.
pub fn edge_crossing(pos: PixelPosition, size: SpriteSize) -> Option<(IVec2, (i32, i32))> {
    if pos.x < CHUNK_EDGE_MARGIN {
        // Левый край — входим справа
        Some((
            IVec2::new(-1, 0),
            (CHUNK_PIXEL_WIDTH - size.width - CHUNK_ENTER_OFFSET, pos.y),
        ))
    } else if pos.x > CHUNK_PIXEL_WIDTH - size.width - CHUNK_EDGE_MARGIN {
        // Правый край — входим слева
        Some((IVec2::new(1, 0), (CHUNK_ENTER_OFFSET, pos.y)))
    } else if pos.y < CHUNK_EDGE_MARGIN {
        // Верхний край — входим снизу
        Some((
            IVec2::new(0, 1),
            (pos.x, CHUNK_PIXEL_HEIGHT - size.height - CHUNK_ENTER_OFFSET),
        ))
    } else if pos.y > CHUNK_PIXEL_HEIGHT - size.height - CHUNK_EDGE_MARGIN {
        // Нижний край — входим сверху
        Some((IVec2::new(0, -1), (pos.x, CHUNK_ENTER_OFFSET)))
    } else {
        None
    }
}

/// Ищет первую свободную точку расширяющимся квадратом вокруг (x, y)
///
/// Шаг REENTRY_NUDGE_STEP, радиус до REENTRY_NUDGE_MAX; отрицательные
/// координаты пропускаются. None — в пределах границы свободного места нет.
pub fn find_free_spot(x: i32, y: i32, size: SpriteSize, grid: &ChunkGrid) -> Option<(i32, i32)> {
    let step = REENTRY_NUDGE_STEP;

    let mut radius = step;
    while radius <= REENTRY_NUDGE_MAX {
        let mut dx = -radius;
        while dx <= radius {
            let mut dy = -radius;
            while dy <= radius {
                let (try_x, try_y) = (x + dx, y + dy);
                if try_x >= 0
                    && try_y >= 0
                    && can_move(try_x, try_y, size.width, size.height, Some(grid))
                {
                    return Some((try_x, try_y));
                }
                dy += step;
            }
            dx += step;
        }
        radius += step;
    }

    None
}

/// Система: проверка края chunk и переход с fail-safe rollback
///
/// Любая попытка перехода (даже неудачная) взводит cooldown, сбрасывает
/// path timer в 0 (пути пересчитаются на следующий tick по новому grid)
/// и помечает остаток tick флагом just_switched.
#[allow(clippy::too_many_arguments)]
pub fn chunk_transition(
    mut state: ResMut<TransitionState>,
    mut active: ResMut<ActiveChunk>,
    chunk_loader: Option<Res<ChunkLoader>>,
    mut cache: ResMut<TileImageCache>,
    mut path_timer: ResMut<PathTimer>,
    game_over: Res<GameOver>,
    mut entered: EventWriter<ChunkEntered>,
    mut player_query: Query<(&mut PixelPosition, &mut Velocity, &SpriteSize), With<Player>>,
    enemies: Query<Entity, With<Enemy>>,
    mut commands: Commands,
) {
    // Флаг живёт один tick — с прошлого tick он уже не нужен
    state.just_switched = false;

    if game_over.0 {
        return;
    }

    // Мир ещё не инициализирован хостом
    let Some(chunk_loader) = chunk_loader else {
        return;
    };

    if state.cooldown > 0 {
        state.cooldown -= 1;
        return;
    }

    let Ok((mut position, mut velocity, size)) = player_query.single_mut() else {
        return;
    };

    let Some((delta, (entry_x, entry_y))) = edge_crossing(*position, *size) else {
        return;
    };

    state.cooldown = CHUNK_SWITCH_COOLDOWN;
    state.just_switched = true;
    path_timer.ticks = 0;

    let new_coords = active.coords + delta;
    let chunk_name = ChunkLoader::chunk_name(&active.world, new_coords);

    let new_grid = match chunk_loader.load_chunk(&active.world, new_coords) {
        Ok(grid) => grid,
        Err(err) => {
            // Chunk не существует: координаты не меняем, игрок на месте
            logger::log_warning(&format!("Chunk transition rolled back: {}", err));
            return;
        }
    };

    // Post-load guard: точка входа может попасть в стену нового chunk
    let landing = if can_move(entry_x, entry_y, size.width, size.height, Some(&new_grid)) {
        (entry_x, entry_y)
    } else {
        match find_free_spot(entry_x, entry_y, *size, &new_grid) {
            Some(spot) => spot,
            None => {
                // Свободного места нет — полный rollback (мы ещё ничего не меняли)
                logger::log_warning(&format!(
                    "No free entry point in {}, transition rolled back",
                    chunk_name
                ));
                return;
            }
        }
    };

    // Точка входа найдена — commit нового chunk
    let spawns = chunk_loader.load_enemies(&active.world, new_coords);
    cache_tile_images(&mut cache, &new_grid);

    active.coords = new_coords;
    active.grid = Some(new_grid);

    // Список врагов заменяется целиком вместе с chunk
    for enemy in enemies.iter() {
        commands.entity(enemy).despawn();
    }
    for spawn in &spawns {
        commands.spawn(enemy_bundle(spawn.kind, spawn.x, spawn.y));
    }

    position.x = landing.0;
    position.y = landing.1;
    *velocity = Velocity::ZERO;

    logger::log_info(&format!(
        "Entered chunk {} ({} enemies)",
        chunk_name,
        spawns.len()
    ));
    entered.write(ChunkEntered {
        world: active.world.clone(),
        coords: new_coords,
    });
}
