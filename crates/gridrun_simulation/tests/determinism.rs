//! Тесты детерминизма симуляции
//!
//! Один и тот же сценарий (включая chunk-переходы и преследование) обязан
//! давать идентичные результаты от прогона к прогону: внутри tick нет ни
//! случайности, ни зависимости от реального времени.

use std::path::{Path, PathBuf};

use bevy::prelude::*;
use gridrun_simulation::*;

const TICK_COUNT: usize = 300;

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Прогоняет сценарий и возвращает snapshot мира
///
/// Сценарий: игрок бежит направо (пересекает границу в TW_1_0), затем вниз;
/// враги преследуют.
fn run_scenario(ticks: usize) -> Vec<u8> {
    let mut app = create_headless_app();
    setup_world(app.world_mut(), fixtures_root(), "TW", IVec2::ZERO);

    let player = app.world_mut().spawn(player_bundle(188, 188)).id();

    let zombie = enemy_kind_by_name("Zombie").unwrap();
    let skeleton = enemy_kind_by_name("Skeleton").unwrap();
    app.world_mut().spawn(enemy_bundle(zombie, 0, 0));
    app.world_mut().spawn(enemy_bundle(skeleton, 250, 10));

    for tick in 0..ticks {
        let intent = if tick < 150 {
            MoveIntent {
                right: true,
                ..Default::default()
            }
        } else {
            MoveIntent {
                down: true,
                ..Default::default()
            }
        };
        if let Some(mut move_intent) = app.world_mut().get_mut::<MoveIntent>(player) {
            *move_intent = intent;
        }

        run_tick(&mut app);
    }

    world_snapshot(app.world_mut())
}

#[test]
fn test_determinism_two_runs() {
    let first = run_scenario(TICK_COUNT);
    let second = run_scenario(TICK_COUNT);

    assert_eq!(
        first, second,
        "Одинаковый сценарий дал разные результаты симуляции"
    );
}

#[test]
fn test_determinism_multiple_runs() {
    // Пять прогонов — все должны совпасть с первым
    let snapshots: Vec<_> = (0..5).map(|_| run_scenario(100)).collect();

    for (i, snapshot) in snapshots.iter().enumerate().skip(1) {
        assert_eq!(
            snapshots[0], *snapshot,
            "Прогон {} дал результат отличный от прогона 0",
            i
        );
    }
}
