//! Movement controller игрока
//!
//! Скорость по каждой оси шагает к intent (или к нулю без intent), затем
//! предлагаемая позиция проверяется collision detector. Отказ — скорость
//! обнуляется по обеим осям, позиция не меняется: частичного скольжения
//! вдоль стены нет.

use bevy::prelude::*;

use crate::combat::GameOver;
use crate::components::{MoveIntent, PixelPosition, Player, SpriteSize, Velocity};
use crate::constants::{PLAYER_ACCEL, PLAYER_MAX_SPEED};
use crate::grid::collision::can_move;
use crate::world::ActiveChunk;

/// Один шаг скорости по оси к направлению intent
///
/// `dir`: -1 / 0 / +1. С intent — прирост PLAYER_ACCEL с clamp на
/// ±PLAYER_MAX_SPEED; без intent — затухание тем же шагом к нулю,
/// без перелёта через ноль.
pub fn step_velocity(velocity: i32, dir: i32) -> i32 {
    if dir > 0 {
        (velocity + PLAYER_ACCEL).min(PLAYER_MAX_SPEED)
    } else if dir < 0 {
        (velocity - PLAYER_ACCEL).max(-PLAYER_MAX_SPEED)
    } else if velocity > 0 {
        (velocity - PLAYER_ACCEL).max(0)
    } else {
        (velocity + PLAYER_ACCEL).min(0)
    }
}

/// Система: движение игрока от intent слоя ввода
pub fn player_movement(
    active: Res<ActiveChunk>,
    game_over: Res<GameOver>,
    mut query: Query<(&MoveIntent, &mut Velocity, &mut PixelPosition, &SpriteSize), With<Player>>,
) {
    if game_over.0 {
        return;
    }

    let Ok((intent, mut velocity, mut position, size)) = query.single_mut() else {
        return;
    };

    // Противоположные intent не складываются: up важнее down, left важнее right
    let dir_x = if intent.left {
        -1
    } else if intent.right {
        1
    } else {
        0
    };
    let dir_y = if intent.up {
        -1
    } else if intent.down {
        1
    } else {
        0
    };

    velocity.x = step_velocity(velocity.x, dir_x);
    velocity.y = step_velocity(velocity.y, dir_y);

    let new_x = position.x + velocity.x;
    let new_y = position.y + velocity.y;

    if can_move(new_x, new_y, size.width, size.height, active.grid.as_ref()) {
        position.x = new_x;
        position.y = new_y;
    } else {
        // Недопустимое движение — стоп по обеим осям
        *velocity = Velocity::ZERO;
    }
}

/// Movement plugin
pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            player_movement.in_set(crate::TickSet::PlayerMovement),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_velocity_steps_toward_intent() {
        assert_eq!(step_velocity(0, 1), PLAYER_ACCEL);
        assert_eq!(step_velocity(PLAYER_ACCEL, 1), PLAYER_ACCEL * 2);
        assert_eq!(step_velocity(0, -1), -PLAYER_ACCEL);
    }

    #[test]
    fn test_velocity_clamped_at_max() {
        assert_eq!(step_velocity(PLAYER_MAX_SPEED, 1), PLAYER_MAX_SPEED);
        assert_eq!(step_velocity(PLAYER_MAX_SPEED - 1, 1), PLAYER_MAX_SPEED);
        assert_eq!(step_velocity(-PLAYER_MAX_SPEED, -1), -PLAYER_MAX_SPEED);
    }

    #[test]
    fn test_velocity_decays_to_zero_without_overshoot() {
        // Затухание не перелетает через ноль
        let mut v = 5;
        let mut iterations = 0;
        while v != 0 {
            let next = step_velocity(v, 0);
            assert!(next.abs() < v.abs());
            v = next;
            iterations += 1;
            assert!(iterations < 10);
        }

        assert_eq!(step_velocity(1, 0), 0);
        assert_eq!(step_velocity(-1, 0), 0);
        assert_eq!(step_velocity(0, 0), 0);
    }
}
