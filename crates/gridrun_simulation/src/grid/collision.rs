//! AABB-vs-grid collision detector
//!
//! Проверка предлагаемой позиции entity против границ экрана и wall tiles.
//! Inset box: геометрический box сжимается на фиксированные отступы с каждой
//! стороны, чтобы collision ощущался по центру sprite, а не по его полному
//! (визуально дополненному) footprint. Точная полигональная проверка не
//! нужна: entity малы относительно grid, и clamp-ованный скан покрывает
//! максимум несколько tiles.

use super::ChunkGrid;
use crate::constants::{
    CHUNK_HEIGHT, CHUNK_WIDTH, COLLISION_INSET_X, COLLISION_INSET_Y, SCREEN_HEIGHT, SCREEN_WIDTH,
    TILE_SIZE,
};

/// Может ли entity размером width×height переместиться в (new_x, new_y)
///
/// Порядок проверок:
/// 1. Выход полного bounding box за экран — отказ (дёшево, без grid).
/// 2. Grid ещё не загружен — отказ (всё считается заблокированным).
/// 3. Пересечение inset box с wall tile — отказ.
pub fn can_move(new_x: i32, new_y: i32, width: i32, height: i32, grid: Option<&ChunkGrid>) -> bool {
    if out_of_screen(new_x, new_y, width, height) {
        return false;
    }

    let Some(grid) = grid else {
        return false;
    };

    !overlaps_wall(new_x, new_y, width, height, grid)
}

/// Выходит ли полный bounding box за пределы экрана
fn out_of_screen(x: i32, y: i32, width: i32, height: i32) -> bool {
    x < 0 || x + width > SCREEN_WIDTH || y < 0 || y + height > SCREEN_HEIGHT
}

/// Пересекает ли inset bounding box хотя бы один wall tile
fn overlaps_wall(x: i32, y: i32, width: i32, height: i32, grid: &ChunkGrid) -> bool {
    let mut left = x + COLLISION_INSET_X;
    let mut right = x + width - 1 - COLLISION_INSET_X;
    let mut top = y + COLLISION_INSET_Y;
    let mut bottom = y + height - 1 - COLLISION_INSET_Y;

    // Inset схлопнул box по оси — откатываемся на полный box по этой оси
    if right < left {
        left = x;
        right = x + width - 1;
    }
    if bottom < top {
        top = y;
        bottom = y + height - 1;
    }

    // Пиксельные границы → tile-индексы, clamp к chunk (доступ всегда валиден)
    let tile_left = (left / TILE_SIZE).max(0);
    let tile_top = (top / TILE_SIZE).max(0);
    let tile_right = (right / TILE_SIZE).min(CHUNK_WIDTH as i32 - 1);
    let tile_bottom = (bottom / TILE_SIZE).min(CHUNK_HEIGHT as i32 - 1);

    for row in tile_top..=tile_bottom {
        for col in tile_left..=tile_right {
            if grid.is_wall(row as usize, col as usize) {
                return true;
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::TileKind;

    fn grid_with_wall(row: usize, col: usize) -> ChunkGrid {
        let mut tiles = [[TileKind::Grass; CHUNK_WIDTH]; CHUNK_HEIGHT];
        tiles[row][col] = TileKind::Wall;
        ChunkGrid::new(tiles)
    }

    #[test]
    fn test_box_inside_open_tile_moves() {
        let grid = ChunkGrid::filled(TileKind::Grass);
        // Box целиком внутри tile (1,1): пиксели 50..100
        assert!(can_move(60, 60, 30, 30, Some(&grid)));
    }

    #[test]
    fn test_box_inside_wall_tile_blocked() {
        let grid = grid_with_wall(1, 1);
        assert!(!can_move(60, 60, 30, 30, Some(&grid)));
    }

    #[test]
    fn test_box_straddling_wall_blocked() {
        // Wall в (1, 2): пиксели x=100..150. Box пересекает границу (1,1)/(1,2)
        let grid = grid_with_wall(1, 2);
        assert!(!can_move(85, 60, 40, 30, Some(&grid)));
    }

    #[test]
    fn test_missing_grid_blocks() {
        assert!(can_move(60, 60, 30, 30, Some(&ChunkGrid::filled(TileKind::Grass))));
        assert!(!can_move(60, 60, 30, 30, None));
    }

    #[test]
    fn test_screen_bounds_independent_of_grid() {
        let grid = ChunkGrid::filled(TileKind::Grass);

        // Левый край: x < 0 — отказ при любом содержимом grid
        assert!(!can_move(-1, 100, 32, 32, Some(&grid)));
        assert!(!can_move(-1, 100, 32, 32, None));

        // Остальные края
        assert!(!can_move(SCREEN_WIDTH - 31, 100, 32, 32, Some(&grid)));
        assert!(!can_move(100, -1, 32, 32, Some(&grid)));
        assert!(!can_move(100, SCREEN_HEIGHT - 31, 32, 32, Some(&grid)));

        // На самом краю, но внутри — разрешено
        assert!(can_move(0, 0, 32, 32, Some(&grid)));
        assert!(can_move(SCREEN_WIDTH - 32, SCREEN_HEIGHT - 32, 32, 32, Some(&grid)));
    }

    #[test]
    fn test_inset_allows_slight_overlap() {
        // Wall в (1, 2): x=100..150. Полный box задевает wall на 10px,
        // но inset (12px) вытаскивает его из wall tile
        let grid = grid_with_wall(1, 2);
        assert!(can_move(70, 60, 40, 30, Some(&grid)));
    }

    #[test]
    fn test_collapsed_inset_falls_back_to_full_box() {
        // Box уже, чем 2×inset: по X используется полный box
        let grid = grid_with_wall(1, 2);
        // Box 20px шириной прямо на wall tile
        assert!(!can_move(110, 60, 20, 30, Some(&grid)));
        // И тот же box на открытом tile
        assert!(can_move(60, 60, 20, 30, Some(&grid)));
    }
}
