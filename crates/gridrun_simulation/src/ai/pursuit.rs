//! Движение врагов по вычисленному пути
//!
//! На tick пересчёта враг стоит (путь строится по живым позициям); на
//! остальных ticks идёт к голове пути. Скорость по оси — знаковый минимум
//! из оставшейся дистанции и max_speed: враг никогда не перелетает цель и
//! неявно тормозит у неё. Движение врага стеной не проверяется: путь по
//! построению проходит только по проходимым tiles — и применяется
//! безусловно.

use bevy::prelude::*;

use crate::combat::GameOver;
use crate::components::{Enemy, PixelPosition, Player, PursuitPath, SpriteSize, Velocity};
use crate::grid::TilePos;
use crate::nav::{compute_path, PathQuery};
use crate::world::{ActiveChunk, TransitionState};

use super::PathTimer;

/// Система: преследование игрока всеми врагами
pub fn pursue_player(
    active: Res<ActiveChunk>,
    timer: Res<PathTimer>,
    transition: Res<TransitionState>,
    game_over: Res<GameOver>,
    player_query: Query<(&PixelPosition, &SpriteSize), With<Player>>,
    mut enemies: Query<
        (
            &Enemy,
            &mut PixelPosition,
            &mut Velocity,
            &mut PursuitPath,
            &SpriteSize,
        ),
        Without<Player>,
    >,
) {
    if game_over.0 || transition.just_switched {
        return;
    }

    let Ok((player_pos, player_size)) = player_query.single() else {
        return;
    };
    let player_tile = player_pos.centre_tile(*player_size);

    for (enemy, mut position, mut velocity, mut path, size) in enemies.iter_mut() {
        if timer.ticks == 0 {
            // Tick пересчёта: обновляем путь, не двигаемся
            path.0 = match active.grid.as_ref() {
                Some(grid) => {
                    let query = PathQuery {
                        source_tile: position.centre_tile(*size),
                        source_centre: position.centre(*size),
                        target_tile: player_tile,
                        target_pixel: (player_pos.x, player_pos.y),
                    };
                    compute_path(grid, &query)
                }
                None => Default::default(),
            };
            continue;
        }

        let target = movement_target(&position, player_pos, player_tile, &mut path);

        // Знаковый минимум: не дальше цели, не быстрее max_speed
        velocity.x = if position.x < target.0 {
            (target.0 - position.x).min(enemy.max_speed)
        } else {
            (target.0 - position.x).max(-enemy.max_speed)
        };
        velocity.y = if position.y < target.1 {
            (target.1 - position.y).min(enemy.max_speed)
        } else {
            (target.1 - position.y).max(-enemy.max_speed)
        };

        position.x += velocity.x;
        position.y += velocity.y;
    }
}

/// Пиксельная точка, к которой враг идёт на этом tick
///
/// Дошедшие головы пути снимаются; исчерпанный путь деградирует в позицию
/// игрока, а пустой путь при несовпадающих tiles — в удержание позиции
/// (fail-safe: пути уже нельзя доверять до пересчёта).
fn movement_target(
    position: &PixelPosition,
    player_pos: &PixelPosition,
    player_tile: TilePos,
    path: &mut PursuitPath,
) -> (i32, i32) {
    // Враг уже в tile игрока — идём на его точную позицию
    if position.tile() == player_tile {
        return (player_pos.x, player_pos.y);
    }

    let Some(head) = path.0.front() else {
        return (position.x, position.y);
    };

    let mut target = head.pixel_anchor();

    // Голова достигнута на прошлом шаге — снимаем и берём следующую
    if target == (position.x, position.y) {
        path.0.pop_front();

        target = match path.0.front() {
            Some(next) => next.pixel_anchor(),
            // Tile игрока достигнут — цель теперь сам игрок
            None => (player_pos.x, player_pos.y),
        };
    }

    target
}
