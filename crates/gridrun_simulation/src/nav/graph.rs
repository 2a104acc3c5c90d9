//! Построение navigation-графа над chunk grid
//!
//! Вершина — каждый проходимый tile текущего chunk; рёбра — к 4-связным
//! проходимым соседям (диагоналей нет). Wall tiles в графе отсутствуют.

use crate::constants::{CHUNK_HEIGHT, CHUNK_WIDTH, TILE_SIZE};
use crate::grid::{ChunkGrid, TilePos};

/// Параметры одного запроса пути: живые позиции преследователя и цели
///
/// `source_centre` — точный пиксельный центр преследователя,
/// `target_pixel` — точная пиксельная позиция цели (левый верхний угол).
#[derive(Debug, Clone, Copy)]
pub struct PathQuery {
    pub source_tile: TilePos,
    pub source_centre: (i32, i32),
    pub target_tile: TilePos,
    pub target_pixel: (i32, i32),
}

/// Navigation-граф: списки смежности, индексированные [row][col]
///
/// У wall tiles списки пусты — они не участвуют ни как вершины, ни как соседи.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavGraph {
    edges: [[Vec<(TilePos, u32)>; CHUNK_WIDTH]; CHUNK_HEIGHT],
}

impl NavGraph {
    /// Рёбра вершины (row, col); позиция обязана лежать внутри chunk
    pub fn edges(&self, pos: TilePos) -> &[(TilePos, u32)] {
        &self.edges[pos.row as usize][pos.col as usize]
    }
}

/// Строит граф для одного запроса пути
pub fn build_graph(grid: &ChunkGrid, query: &PathQuery) -> NavGraph {
    let mut edges: [[Vec<(TilePos, u32)>; CHUNK_WIDTH]; CHUNK_HEIGHT] =
        std::array::from_fn(|_| std::array::from_fn(|_| Vec::new()));

    for row in 0..CHUNK_HEIGHT as i32 {
        for col in 0..CHUNK_WIDTH as i32 {
            // Wall — не вершина
            if grid.is_wall(row as usize, col as usize) {
                continue;
            }

            let from = TilePos::new(row, col);
            let neighbours = [
                TilePos::new(row - 1, col),
                TilePos::new(row + 1, col),
                TilePos::new(row, col - 1),
                TilePos::new(row, col + 1),
            ];

            for to in neighbours {
                if to.in_chunk() && !grid.is_wall(to.row as usize, to.col as usize) {
                    edges[row as usize][col as usize].push((to, edge_weight(from, to, query)));
                }
            }
        }
    }

    NavGraph { edges }
}

/// Вес ребра from → to
///
/// По умолчанию — TILE_SIZE (переход центр-в-центр). Два исключения, ради
/// которых граф и пересобирается на каждый запрос:
/// - из tile преследователя: дистанция от его точного пиксельного центра
///   до центра соседнего tile (первый шаг отражает дробную позицию);
/// - в tile цели: дистанция от центра текущего tile до точной пиксельной
///   позиции цели (последний шаг ведёт к реальному положению, не к центру).
fn edge_weight(from: TilePos, to: TilePos, query: &PathQuery) -> u32 {
    if from == query.source_tile {
        let (cx, cy) = query.source_centre;
        let (tx, ty) = to.pixel_centre();
        euclidean(cx - tx, cy - ty)
    } else if to == query.target_tile {
        let (cx, cy) = from.pixel_centre();
        let (tx, ty) = query.target_pixel;
        euclidean(cx - tx, cy - ty)
    } else {
        TILE_SIZE as u32
    }
}

fn euclidean(dx: i32, dy: i32) -> u32 {
    let (dx, dy) = (dx as f64, dy as f64);
    (dx * dx + dy * dy).sqrt().round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::TileKind;

    fn open_query() -> PathQuery {
        PathQuery {
            source_tile: TilePos::new(0, 0),
            source_centre: TilePos::new(0, 0).pixel_centre(),
            target_tile: TilePos::new(7, 7),
            target_pixel: TilePos::new(7, 7).pixel_anchor(),
        }
    }

    #[test]
    fn test_corner_and_inner_degrees() {
        let grid = ChunkGrid::filled(TileKind::Grass);
        let graph = build_graph(&grid, &open_query());

        // Угол — 2 соседа, ребро — 3, внутренний tile — 4
        assert_eq!(graph.edges(TilePos::new(0, 0)).len(), 2);
        assert_eq!(graph.edges(TilePos::new(0, 3)).len(), 3);
        assert_eq!(graph.edges(TilePos::new(4, 4)).len(), 4);
    }

    #[test]
    fn test_wall_excluded_from_graph() {
        let mut tiles = [[TileKind::Grass; CHUNK_WIDTH]; CHUNK_HEIGHT];
        tiles[4][4] = TileKind::Wall;
        let grid = ChunkGrid::new(tiles);
        let graph = build_graph(&grid, &open_query());

        // Wall не вершина и не сосед
        assert!(graph.edges(TilePos::new(4, 4)).is_empty());
        for (to, _) in graph.edges(TilePos::new(4, 3)) {
            assert_ne!(*to, TilePos::new(4, 4));
        }
        assert_eq!(graph.edges(TilePos::new(4, 3)).len(), 3);
    }

    #[test]
    fn test_default_weight_is_tile_size() {
        let grid = ChunkGrid::filled(TileKind::Grass);
        let graph = build_graph(&grid, &open_query());

        // Ребро вдали от source и target tiles
        let (_, weight) = graph
            .edges(TilePos::new(3, 3))
            .iter()
            .find(|(to, _)| *to == TilePos::new(3, 4))
            .copied()
            .unwrap();
        assert_eq!(weight, TILE_SIZE as u32);
    }

    #[test]
    fn test_source_edge_uses_pursuer_centre() {
        let grid = ChunkGrid::filled(TileKind::Grass);
        // Преследователь смещён внутри tile (0,0): центр в (40, 25)
        let query = PathQuery {
            source_tile: TilePos::new(0, 0),
            source_centre: (40, 25),
            target_tile: TilePos::new(7, 7),
            target_pixel: TilePos::new(7, 7).pixel_anchor(),
        };
        let graph = build_graph(&grid, &query);

        // Ребро (0,0) → (0,1): центр соседа (75, 25), дистанция 35
        let (_, weight) = graph
            .edges(TilePos::new(0, 0))
            .iter()
            .find(|(to, _)| *to == TilePos::new(0, 1))
            .copied()
            .unwrap();
        assert_eq!(weight, 35);
    }

    #[test]
    fn test_target_edge_uses_exact_target_pixel() {
        let grid = ChunkGrid::filled(TileKind::Grass);
        // Цель в tile (0,2), её пиксельная позиция (105, 0)
        let query = PathQuery {
            source_tile: TilePos::new(7, 7),
            source_centre: TilePos::new(7, 7).pixel_centre(),
            target_tile: TilePos::new(0, 2),
            target_pixel: (105, 0),
        };
        let graph = build_graph(&grid, &query);

        // Ребро (0,1) → (0,2): от центра (75, 25) до (105, 0): sqrt(900+625) ≈ 39
        let (_, weight) = graph
            .edges(TilePos::new(0, 1))
            .iter()
            .find(|(to, _)| *to == TilePos::new(0, 2))
            .copied()
            .unwrap();
        assert_eq!(weight, 39);
    }
}
