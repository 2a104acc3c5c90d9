//! AI преследования: пересчёт путей и движение врагов
//!
//! Порядок на tick:
//! 1. pursue_player — либо пересчёт пути (по cadence), либо шаг к его голове
//! 2. tick_path_timer — cadence-таймер (после боевых систем, см. lib.rs)

use bevy::prelude::*;

use crate::constants::PATH_RECOMPUTE_INTERVAL;

pub mod pursuit;

pub use pursuit::pursue_player;

/// Cadence пересчёта путей: 0 — пересчитать на этом tick
///
/// Стартует с 0 (первый tick всегда считает пути) и сбрасывается в 0 при
/// смене chunk, чтобы пути не указывали в старый grid.
#[derive(Resource, Debug, Default)]
pub struct PathTimer {
    pub ticks: u32,
}

/// Система: обновление cadence-таймера
///
/// На tick пересчёта таймер взводится на полный интервал; на tick попытки
/// перехода между chunks не меняется (его уже сбросила система перехода).
pub fn tick_path_timer(
    mut timer: ResMut<PathTimer>,
    transition: Res<crate::world::TransitionState>,
) {
    if transition.just_switched {
        return;
    }

    if timer.ticks == 0 {
        timer.ticks = PATH_RECOMPUTE_INTERVAL;
    } else {
        timer.ticks -= 1;
    }
}

/// AI plugin
pub struct AIPlugin;

impl Plugin for AIPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PathTimer>().add_systems(
            FixedUpdate,
            (
                pursue_player.in_set(crate::TickSet::Pursuit),
                tick_path_timer.in_set(crate::TickSet::Bookkeeping),
            ),
        );
    }
}
