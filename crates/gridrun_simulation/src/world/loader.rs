//! Загрузка chunk-данных с диска
//!
//! Формат chunk: каталог `<root>/chunks/<world>_<x>_<y>/` с файлами
//! `tiles.txt` (8×8 однобуквенных кодов через пробелы/переводы строк) и
//! `enemies.txt` (строки `<TypeName> <x> <y>`). Отсутствие tiles.txt —
//! recoverable сигнал (chunk не существует); отсутствие enemies.txt —
//! просто chunk без врагов.

use std::io;
use std::path::PathBuf;

use bevy::prelude::*;
use thiserror::Error;

use crate::components::{enemy_kind_by_name, EnemyKind};
use crate::constants::{CHUNK_HEIGHT, CHUNK_WIDTH};
use crate::grid::{ChunkGrid, TileKind};
use crate::logger;

/// Ошибки загрузки chunk — все recoverable на стороне transition manager
#[derive(Debug, Error)]
pub enum ChunkLoadError {
    #[error("chunk {0} not found")]
    NotFound(String),
    #[error("chunk {0} is malformed: {1}")]
    Malformed(String, String),
    #[error("chunk io error: {0}")]
    Io(#[from] io::Error),
}

/// Запись spawn-данных врага, готовая к инстанцированию
#[derive(Debug, Clone, Copy)]
pub struct EnemySpawn {
    pub kind: &'static EnemyKind,
    pub x: i32,
    pub y: i32,
}

/// Источник chunk-данных: читает tiles и spawn-записи из каталога `root`
#[derive(Resource, Debug, Clone)]
pub struct ChunkLoader {
    root: PathBuf,
}

impl ChunkLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Имя каталога chunk: `<world>_<x>_<y>`
    pub fn chunk_name(world: &str, coords: IVec2) -> String {
        format!("{}_{}_{}", world, coords.x, coords.y)
    }

    fn chunk_dir(&self, world: &str, coords: IVec2) -> PathBuf {
        self.root.join("chunks").join(Self::chunk_name(world, coords))
    }

    /// Загружает grid chunk; NotFound/Malformed — recoverable сигналы
    pub fn load_chunk(&self, world: &str, coords: IVec2) -> Result<ChunkGrid, ChunkLoadError> {
        let name = Self::chunk_name(world, coords);
        let path = self.chunk_dir(world, coords).join("tiles.txt");

        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(ChunkLoadError::NotFound(name));
            }
            Err(err) => return Err(err.into()),
        };

        let mut letters = text.split_whitespace();
        let mut tiles = [[TileKind::Grass; CHUNK_WIDTH]; CHUNK_HEIGHT];

        for row in 0..CHUNK_HEIGHT {
            for col in 0..CHUNK_WIDTH {
                let letter = letters.next().ok_or_else(|| {
                    ChunkLoadError::Malformed(name.clone(), "too few tiles".into())
                })?;

                tiles[row][col] = TileKind::from_letter(letter).ok_or_else(|| {
                    ChunkLoadError::Malformed(name.clone(), format!("unknown tile '{}'", letter))
                })?;
            }
        }

        Ok(ChunkGrid::new(tiles))
    }

    /// Загружает spawn-записи врагов chunk
    ///
    /// Отсутствие файла — chunk без врагов. Битые записи (неизвестный тип,
    /// нечисловые координаты) пропускаются с warning, загрузка продолжается.
    pub fn load_enemies(&self, world: &str, coords: IVec2) -> Vec<EnemySpawn> {
        let path = self.chunk_dir(world, coords).join("enemies.txt");

        let Ok(text) = std::fs::read_to_string(&path) else {
            return Vec::new();
        };

        let mut spawns = Vec::new();

        for line in text.lines() {
            let mut fields = line.split_whitespace();
            let Some(type_name) = fields.next() else {
                continue; // пустая строка
            };

            let Some(kind) = enemy_kind_by_name(type_name) else {
                logger::log_warning(&format!(
                    "Enemy type \"{}\" does not exist, skipping record",
                    type_name
                ));
                continue;
            };

            let coords_pair = (
                fields.next().and_then(|f| f.parse::<i32>().ok()),
                fields.next().and_then(|f| f.parse::<i32>().ok()),
            );
            let (Some(x), Some(y)) = coords_pair else {
                logger::log_warning(&format!(
                    "Unable to load enemy \"{}\": bad coordinates in \"{}\"",
                    type_name, line
                ));
                continue;
            };

            spawns.push(EnemySpawn { kind, x, y });
        }

        spawns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn fixtures_loader() -> ChunkLoader {
        ChunkLoader::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
    }

    #[test]
    fn test_load_chunk_parses_tiles() {
        let loader = fixtures_loader();
        let grid = loader.load_chunk("TW", IVec2::new(1, 0)).unwrap();

        // TW_1_0: стена в (0, 4), остальное открыто
        assert!(grid.is_wall(0, 4));
        assert!(!grid.is_wall(3, 0));
    }

    #[test]
    fn test_missing_chunk_is_not_found() {
        let loader = fixtures_loader();
        let err = loader.load_chunk("TW", IVec2::new(99, 99)).unwrap_err();
        assert!(matches!(err, ChunkLoadError::NotFound(_)));
    }

    #[test]
    fn test_malformed_chunk_is_recoverable_error() {
        let loader = fixtures_loader();
        let err = loader.load_chunk("TW", IVec2::new(5, 5)).unwrap_err();
        assert!(matches!(err, ChunkLoadError::Malformed(..)));
    }

    #[test]
    fn test_reload_is_idempotent() {
        let loader = fixtures_loader();
        let first = loader.load_chunk("TW", IVec2::ZERO).unwrap();
        let second = loader.load_chunk("TW", IVec2::ZERO).unwrap();
        assert_eq!(first, second);

        // Свежепостроенная adjacency по обоим grids тоже идентична
        let query = crate::nav::PathQuery {
            source_tile: crate::grid::TilePos::new(0, 0),
            source_centre: crate::grid::TilePos::new(0, 0).pixel_centre(),
            target_tile: crate::grid::TilePos::new(7, 7),
            target_pixel: crate::grid::TilePos::new(7, 7).pixel_anchor(),
        };
        assert_eq!(
            crate::nav::build_graph(&first, &query),
            crate::nav::build_graph(&second, &query)
        );
    }

    #[test]
    fn test_unknown_enemy_type_skipped() {
        let loader = fixtures_loader();
        let spawns = loader.load_enemies("TW", IVec2::new(1, 0));

        // TW_1_0: Zombie + неизвестный Ghost → один spawn
        assert_eq!(spawns.len(), 1);
        assert_eq!(spawns[0].kind.name, "Zombie");
        assert_eq!((spawns[0].x, spawns[0].y), (150, 150));
    }

    #[test]
    fn test_missing_enemies_file_means_no_enemies() {
        let loader = fixtures_loader();
        assert!(loader.load_enemies("TW", IVec2::ZERO).is_empty());
    }
}
