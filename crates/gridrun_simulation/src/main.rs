//! Headless прогон GRIDRUN
//!
//! Запускает симуляцию без рендера: игрок бежит вправо под скриптованным
//! intent, враги преследуют. Для проверки chunk-переходов и pathfinding
//! без игрового клиента.

use std::path::Path;

use bevy::prelude::*;
use gridrun_simulation::{
    create_headless_app, player_bundle, run_tick, setup_world, ActiveChunk, Enemy, GameOver,
    Health, MoveIntent, PixelPosition, Player,
};

fn main() {
    println!("Starting GRIDRUN headless simulation");

    let mut app = create_headless_app();
    setup_world(
        app.world_mut(),
        Path::new(env!("CARGO_MANIFEST_DIR")).join("assets"),
        "OW",
        IVec2::ZERO,
    );

    let player = app.world_mut().spawn(player_bundle(188, 188)).id();

    for tick in 0..1000 {
        // Скриптованный intent: полсекунды вправо, потом вниз, потом стоим
        let intent = match tick {
            0..=239 => MoveIntent {
                right: true,
                ..default()
            },
            240..=359 => MoveIntent {
                down: true,
                ..default()
            },
            _ => MoveIntent::default(),
        };
        if let Some(mut move_intent) = app.world_mut().get_mut::<MoveIntent>(player) {
            *move_intent = intent;
        }

        run_tick(&mut app);

        if tick % 100 == 0 {
            report(app.world_mut(), tick);
        }

        if app.world().resource::<GameOver>().0 {
            println!("Game over on tick {}", tick);
            break;
        }
    }

    println!("Simulation complete!");
}

/// Сводка состояния мира на tick
fn report(world: &mut World, tick: usize) {
    let chunk = world.resource::<ActiveChunk>();
    let (chunk_coords, world_name) = (chunk.coords, chunk.world.clone());

    let mut player_query = world.query_filtered::<(&PixelPosition, &Health), With<Player>>();
    let player_line = player_query
        .iter(world)
        .next()
        .map(|(pos, health)| format!("player at ({}, {}), {} hp", pos.x, pos.y, health.current))
        .unwrap_or_else(|| "no player".to_string());

    let mut enemy_query = world.query::<&Enemy>();
    let enemy_count = enemy_query.iter(world).count();

    println!(
        "Tick {}: chunk {}_{}_{}, {}, {} enemies",
        tick, world_name, chunk_coords.x, chunk_coords.y, player_line, enemy_count
    );
}
