//! Grid model: типы tiles и контейнер chunk
//!
//! Chunk — неизменяемая матрица 8×8 tiles, заменяемая целиком при переходе.
//! Индексация `[row][col]`: row = Y, col = X (в tile-единицах).

use crate::constants::{CHUNK_HEIGHT, CHUNK_WIDTH, TILE_SIZE};

pub mod collision;

/// Тип tile — конечный набор, фиксирован на этапе компиляции
///
/// `letter` — однобуквенный код в файлах chunks, `image_path` — ссылка
/// на текстуру для рендер-слоя (ядро её не декодирует).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Grass,
    Cobblestone,
    Wall,
}

impl TileKind {
    pub const ALL: [TileKind; 3] = [TileKind::Grass, TileKind::Cobblestone, TileKind::Wall];

    /// Блокирует ли tile движение
    pub fn is_wall(&self) -> bool {
        matches!(self, TileKind::Wall)
    }

    /// Однобуквенный код в формате tiles.txt
    pub fn letter(&self) -> &'static str {
        match self {
            TileKind::Grass => "G",
            TileKind::Cobblestone => "C",
            TileKind::Wall => "W",
        }
    }

    /// Путь к текстуре (для image cache рендер-слоя)
    pub fn image_path(&self) -> &'static str {
        match self {
            TileKind::Grass => "assets/img/grass.png",
            TileKind::Cobblestone => "assets/img/cobblestone.jpg",
            TileKind::Wall => "assets/img/wall.jpg",
        }
    }

    /// Обратный lookup по коду; None для неизвестной буквы
    pub fn from_letter(letter: &str) -> Option<TileKind> {
        TileKind::ALL.iter().copied().find(|kind| kind.letter() == letter)
    }
}

/// Позиция tile внутри chunk: (row, col) в tile-единицах
///
/// i32, а не usize: промежуточные вычисления (соседи, деление пиксельных
/// координат) могут дать значения вне chunk; валидность проверяется
/// через `in_chunk` до обращения к grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TilePos {
    pub row: i32,
    pub col: i32,
}

impl TilePos {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Tile, содержащий пиксель (x, y)
    pub fn of_pixel(x: i32, y: i32) -> Self {
        Self {
            row: y / TILE_SIZE,
            col: x / TILE_SIZE,
        }
    }

    /// Лежит ли позиция внутри chunk
    pub fn in_chunk(&self) -> bool {
        self.row >= 0
            && self.row < CHUNK_HEIGHT as i32
            && self.col >= 0
            && self.col < CHUNK_WIDTH as i32
    }

    /// Пиксельный якорь tile — его левый верхний угол
    pub fn pixel_anchor(&self) -> (i32, i32) {
        (self.col * TILE_SIZE, self.row * TILE_SIZE)
    }

    /// Пиксельный центр tile
    pub fn pixel_centre(&self) -> (i32, i32) {
        (
            self.col * TILE_SIZE + TILE_SIZE / 2,
            self.row * TILE_SIZE + TILE_SIZE / 2,
        )
    }
}

/// Chunk grid — 8×8 матрица tiles, неизменяемая после загрузки
///
/// Контракт доступа: выход за границы — programming error (panic), не
/// recoverable ситуация. Все вызывающие обязаны clamp-ить индексы заранее.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkGrid {
    tiles: [[TileKind; CHUNK_WIDTH]; CHUNK_HEIGHT],
}

impl ChunkGrid {
    pub fn new(tiles: [[TileKind; CHUNK_WIDTH]; CHUNK_HEIGHT]) -> Self {
        Self { tiles }
    }

    /// Chunk, целиком состоящий из одного типа tile (для тестов и fallback-сценариев)
    pub fn filled(kind: TileKind) -> Self {
        Self {
            tiles: [[kind; CHUNK_WIDTH]; CHUNK_HEIGHT],
        }
    }

    /// Tile по координатам; panic при выходе за границы (вызывающие clamp-ят заранее)
    pub fn tile_at(&self, row: usize, col: usize) -> TileKind {
        self.tiles[row][col]
    }

    /// Является ли tile стеной — чистая функция от `tile_at`
    pub fn is_wall(&self, row: usize, col: usize) -> bool {
        self.tile_at(row, col).is_wall()
    }

    /// Итерация по всем tiles (для image cache и рендера)
    pub fn iter_tiles(&self) -> impl Iterator<Item = (TilePos, TileKind)> + '_ {
        self.tiles.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(col, kind)| (TilePos::new(row as i32, col as i32), *kind))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_roundtrip() {
        for kind in TileKind::ALL {
            assert_eq!(TileKind::from_letter(kind.letter()), Some(kind));
        }
        assert_eq!(TileKind::from_letter("X"), None);
    }

    #[test]
    fn test_only_wall_blocks() {
        assert!(TileKind::Wall.is_wall());
        assert!(!TileKind::Grass.is_wall());
        assert!(!TileKind::Cobblestone.is_wall());
    }

    #[test]
    fn test_tile_of_pixel() {
        assert_eq!(TilePos::of_pixel(0, 0), TilePos::new(0, 0));
        assert_eq!(TilePos::of_pixel(49, 49), TilePos::new(0, 0));
        assert_eq!(TilePos::of_pixel(50, 0), TilePos::new(0, 1));
        assert_eq!(TilePos::of_pixel(375, 375), TilePos::new(7, 7));
    }

    #[test]
    fn test_tile_anchors() {
        let pos = TilePos::new(2, 3);
        assert_eq!(pos.pixel_anchor(), (150, 100));
        assert_eq!(pos.pixel_centre(), (175, 125));
    }

    #[test]
    fn test_in_chunk_bounds() {
        assert!(TilePos::new(0, 0).in_chunk());
        assert!(TilePos::new(7, 7).in_chunk());
        assert!(!TilePos::new(-1, 0).in_chunk());
        assert!(!TilePos::new(0, 8).in_chunk());
    }

    #[test]
    fn test_tile_at_stable() {
        let mut tiles = [[TileKind::Grass; CHUNK_WIDTH]; CHUNK_HEIGHT];
        tiles[3][5] = TileKind::Wall;
        let grid = ChunkGrid::new(tiles);

        // Любые координаты внутри chunk определены и стабильны
        for row in 0..CHUNK_HEIGHT {
            for col in 0..CHUNK_WIDTH {
                let first = grid.tile_at(row, col);
                assert_eq!(grid.tile_at(row, col), first);
            }
        }
        assert!(grid.is_wall(3, 5));
        assert!(!grid.is_wall(0, 0));
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_tile_at_out_of_bounds_panics() {
        let grid = ChunkGrid::filled(TileKind::Grass);
        let _ = grid.tile_at(CHUNK_HEIGHT, 0);
    }
}
