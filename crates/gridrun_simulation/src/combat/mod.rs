//! Combat: контактные атаки игрока и врагов
//!
//! Атака проходит, когда дистанция между центрами не больше attack range
//! атакующего и его cooldown истёк. ECS хранит game state (HP, урон,
//! cooldown); анимацию удара показывает sprite override service.

use bevy::prelude::*;

use crate::components::{Combatant, Enemy, Health, MoveIntent, PixelPosition, Player, SpriteSize};
use crate::logger;
use crate::sprite::SpriteState;
use crate::world::TransitionState;

/// Длительность sprite-подмены "damaged" (ticks)
const DAMAGED_SPRITE_TICKS: u32 = 30;

/// Игрок повержен — simulation-системы останавливаются
#[derive(Resource, Debug, Default)]
pub struct GameOver(pub bool);

/// Событие: урон нанесён
///
/// Для UI, звуков, эффектов — ядро на него не подписано.
#[derive(Event, Debug, Clone)]
pub struct DamageDealt {
    pub attacker: Entity,
    pub target: Entity,
    pub damage: u32,
    pub target_died: bool,
}

/// Событие: entity погиб (health == 0)
#[derive(Event, Debug, Clone)]
pub struct EntityDied {
    pub entity: Entity,
    pub killer: Option<Entity>,
}

/// Система: атаки врагов по игроку
///
/// Попутно обновляет дистанцию врага до игрока — она нужна и здесь, и
/// в проверке досягаемости атаки игрока на этом же tick.
pub fn enemy_attacks(
    transition: Res<TransitionState>,
    mut game_over: ResMut<GameOver>,
    mut damage_events: EventWriter<DamageDealt>,
    mut died_events: EventWriter<EntityDied>,
    mut player_query: Query<
        (Entity, &PixelPosition, &SpriteSize, &mut Health, &mut SpriteState),
        With<Player>,
    >,
    mut enemies: Query<
        (Entity, &mut Enemy, &PixelPosition, &SpriteSize, &mut Combatant, &mut SpriteState),
        Without<Player>,
    >,
) {
    if game_over.0 || transition.just_switched {
        return;
    }

    let Ok((player_entity, player_pos, player_size, mut player_health, mut player_sprite)) =
        player_query.single_mut()
    else {
        return;
    };
    let (player_cx, player_cy) = player_pos.centre(*player_size);

    for (enemy_entity, mut enemy, position, size, mut combatant, mut sprite) in enemies.iter_mut() {
        let (cx, cy) = position.centre(*size);
        let (dx, dy) = ((player_cx - cx) as f32, (player_cy - cy) as f32);
        enemy.distance_to_player = (dx * dx + dy * dy).sqrt();

        if !combatant.can_attack() {
            combatant.tick_cooldown();
            continue;
        }

        if enemy.distance_to_player > combatant.attack_range as f32 {
            continue;
        }

        combatant.start_attack();
        sprite.request_override("attacking", combatant.cooldown_ticks);

        let died = player_health.take_damage(combatant.damage);
        player_sprite.request_override("damaged", DAMAGED_SPRITE_TICKS);
        damage_events.write(DamageDealt {
            attacker: enemy_entity,
            target: player_entity,
            damage: combatant.damage,
            target_died: died,
        });

        if died {
            game_over.0 = true;
            died_events.write(EntityDied {
                entity: player_entity,
                killer: Some(enemy_entity),
            });
            logger::log_info("Player defeated, game over");
        }
    }
}

/// Система: атака игрока по врагам в радиусе
pub fn player_attacks(
    transition: Res<TransitionState>,
    game_over: Res<GameOver>,
    mut commands: Commands,
    mut damage_events: EventWriter<DamageDealt>,
    mut died_events: EventWriter<EntityDied>,
    mut player_query: Query<(Entity, &MoveIntent, &mut Combatant, &mut SpriteState), With<Player>>,
    mut enemies: Query<(Entity, &Enemy, &mut Health, &mut SpriteState), Without<Player>>,
) {
    if game_over.0 || transition.just_switched {
        return;
    }

    let Ok((player_entity, intent, mut combatant, mut player_sprite)) = player_query.single_mut()
    else {
        return;
    };

    if !combatant.can_attack() {
        combatant.tick_cooldown();
        return;
    }

    if !intent.attack {
        return;
    }

    combatant.start_attack();
    player_sprite.request_override("attacking", combatant.cooldown_ticks);

    for (enemy_entity, enemy, mut health, mut sprite) in enemies.iter_mut() {
        // Досягаемость — по дистанции центров, обновлённой на этом tick
        if enemy.distance_to_player > combatant.attack_range as f32 {
            continue;
        }

        let died = health.take_damage(combatant.damage);
        sprite.request_override("damaged", DAMAGED_SPRITE_TICKS);
        damage_events.write(DamageDealt {
            attacker: player_entity,
            target: enemy_entity,
            damage: combatant.damage,
            target_died: died,
        });

        if died {
            died_events.write(EntityDied {
                entity: enemy_entity,
                killer: Some(player_entity),
            });
            commands.entity(enemy_entity).despawn();
            logger::log(&format!("Enemy {} defeated", enemy.kind));
        }
    }
}

/// Combat plugin
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameOver>()
            .add_event::<DamageDealt>()
            .add_event::<EntityDied>()
            .add_systems(
                FixedUpdate,
                (enemy_attacks, player_attacks)
                    .chain()
                    .in_set(crate::TickSet::Combat),
            );
    }
}
