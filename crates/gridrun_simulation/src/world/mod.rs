//! World-состояние: активный chunk, image cache, инициализация мира
//!
//! Grid и связанный с ним navigation-граф живут от загрузки chunk до
//! следующей загрузки — заменяются целиком, без инкрементальных патчей.
//! Image cache — единственный ресурс, переживающий переходы.

use bevy::prelude::*;

use crate::components::enemy_bundle;
use crate::grid::{ChunkGrid, TileKind};
use crate::logger;

pub mod loader;
pub mod transition;

pub use loader::{ChunkLoadError, ChunkLoader, EnemySpawn};
pub use transition::{chunk_transition, TransitionState};

use std::collections::HashMap;
use std::path::PathBuf;

/// Активный chunk: идентичность + grid
///
/// `grid == None` до первой успешной загрузки; collision в этом состоянии
/// считает всё заблокированным.
#[derive(Resource, Debug, Clone)]
pub struct ActiveChunk {
    pub world: String,
    pub coords: IVec2,
    pub grid: Option<ChunkGrid>,
}

impl Default for ActiveChunk {
    fn default() -> Self {
        Self {
            world: "OW".to_string(),
            coords: IVec2::ZERO,
            grid: None,
        }
    }
}

/// Непрозрачная ссылка на текстуру tile для рендер-слоя
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileImage {
    pub path: &'static str,
}

/// Process-scoped cache текстур tiles: load-once по типу tile
///
/// Append-only и не очищается между chunks — повторяющиеся типы
/// переиспользуют записи. Ядро от содержимого cache не зависит,
/// это ускорение для рендер-слоя.
#[derive(Resource, Debug, Default)]
pub struct TileImageCache {
    images: HashMap<TileKind, TileImage>,
}

impl TileImageCache {
    /// Гарантирует наличие записи для типа tile
    pub fn ensure_cached(&mut self, kind: TileKind) {
        self.images.entry(kind).or_insert_with(|| TileImage {
            path: kind.image_path(),
        });
    }

    pub fn get(&self, kind: TileKind) -> Option<&TileImage> {
        self.images.get(&kind)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Пополняет image cache типами из grid
pub fn cache_tile_images(cache: &mut TileImageCache, grid: &ChunkGrid) {
    for (_, kind) in grid.iter_tiles() {
        cache.ensure_cached(kind);
    }
}

/// Инициализация мира: источник chunk-данных + стартовый chunk
///
/// Вызывается хостом (headless bin, тесты, рендер-слой) после создания App.
/// Если стартовый chunk не загрузился, мир остаётся без grid — collision
/// блокирует всё движение, но симуляция не падает.
pub fn setup_world(world: &mut World, assets_root: impl Into<PathBuf>, world_name: &str, coords: IVec2) {
    let chunk_loader = ChunkLoader::new(assets_root);

    let mut active = ActiveChunk {
        world: world_name.to_string(),
        coords,
        grid: None,
    };

    match chunk_loader.load_chunk(world_name, coords) {
        Ok(grid) => {
            let mut cache = world.resource_mut::<TileImageCache>();
            cache_tile_images(&mut cache, &grid);

            for spawn in chunk_loader.load_enemies(world_name, coords) {
                world.spawn(enemy_bundle(spawn.kind, spawn.x, spawn.y));
            }

            logger::log_info(&format!(
                "Entered starting chunk {}",
                ChunkLoader::chunk_name(world_name, coords)
            ));
            active.grid = Some(grid);
        }
        Err(err) => {
            logger::log_error(&format!("Unable to load starting chunk: {}", err));
        }
    }

    world.insert_resource(active);
    world.insert_resource(chunk_loader);
}

/// Событие: игрок вошёл в новый chunk
#[derive(Event, Debug, Clone)]
pub struct ChunkEntered {
    pub world: String,
    pub coords: IVec2,
}

/// World plugin: ресурсы chunk-состояния и система переходов
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveChunk>()
            .init_resource::<TileImageCache>()
            .init_resource::<TransitionState>()
            .add_event::<ChunkEntered>()
            .add_systems(
                FixedUpdate,
                chunk_transition.in_set(crate::TickSet::ChunkTransition),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_cache_append_only() {
        let mut cache = TileImageCache::default();
        let grid = ChunkGrid::filled(TileKind::Grass);
        cache_tile_images(&mut cache, &grid);
        assert_eq!(cache.len(), 1);

        // Повторное кэширование того же типа не добавляет записей
        cache_tile_images(&mut cache, &grid);
        assert_eq!(cache.len(), 1);

        let wall_grid = ChunkGrid::filled(TileKind::Wall);
        cache_tile_images(&mut cache, &wall_grid);
        assert_eq!(cache.len(), 2);

        // Прежняя запись не тронута
        assert_eq!(
            cache.get(TileKind::Grass).unwrap().path,
            TileKind::Grass.image_path()
        );
    }
}
