//! Shortest-path engine: Dijkstra от преследователя к цели
//!
//! Всё состояние запроса (дистанции, предшественники, visited, очередь)
//! локально для вызова — между запросами и между entity ничего не
//! переиспользуется. Граф 8×8 минус стены, поэтому полный прогон Dijkstra
//! дёшев; ранний выход по достижении цели не делается — результат обязан
//! совпадать с полным прогоном.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::constants::{CHUNK_HEIGHT, CHUNK_WIDTH};
use crate::grid::{ChunkGrid, TilePos};

use super::graph::{build_graph, PathQuery};

/// Запись в очереди с минимальной дистанцией наверху
///
/// Равные дистанции упорядочены по порядку вставки (seq) — результат
/// детерминирован при одинаковых входах.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapEntry {
    distance: u32,
    seq: u32,
    pos: TilePos,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Инверсия для min-heap поведения BinaryHeap
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Кратчайший путь от преследователя к цели
///
/// Результат — tile-позиции от tile преследователя (исключительно) до tile
/// цели (включительно). Пустой путь в двух случаях: преследователь уже в
/// tile цели, либо цель недостижима (полностью замурована) — оба
/// recoverable, движение деградирует на стороне вызывающего.
pub fn compute_path(grid: &ChunkGrid, query: &PathQuery) -> VecDeque<TilePos> {
    if query.source_tile == query.target_tile {
        return VecDeque::new();
    }

    let graph = build_graph(grid, query);

    // Состояние запроса — целиком на стеке вызова
    let mut distance = [[u32::MAX; CHUNK_WIDTH]; CHUNK_HEIGHT];
    let mut previous: [[Option<TilePos>; CHUNK_WIDTH]; CHUNK_HEIGHT] =
        [[None; CHUNK_WIDTH]; CHUNK_HEIGHT];
    let mut visited = [[false; CHUNK_WIDTH]; CHUNK_HEIGHT];

    let mut queue = BinaryHeap::new();
    let mut seq = 0u32;

    let source = query.source_tile;
    distance[source.row as usize][source.col as usize] = 0;
    queue.push(HeapEntry {
        distance: 0,
        seq,
        pos: source,
    });

    while let Some(entry) = queue.pop() {
        let (row, col) = (entry.pos.row as usize, entry.pos.col as usize);

        // Дистанции этой вершины уже зафиксированы — дубликат в очереди
        if visited[row][col] {
            continue;
        }
        visited[row][col] = true;

        for (neighbour, weight) in graph.edges(entry.pos) {
            let (n_row, n_col) = (neighbour.row as usize, neighbour.col as usize);
            let new_distance = distance[row][col].saturating_add(*weight);

            if new_distance < distance[n_row][n_col] {
                distance[n_row][n_col] = new_distance;
                previous[n_row][n_col] = Some(entry.pos);

                seq += 1;
                queue.push(HeapEntry {
                    distance: new_distance,
                    seq,
                    pos: *neighbour,
                });
            }
        }
    }

    reconstruct(&previous, source, query.target_tile)
}

/// Разворачивает цепочку предшественников в путь source (искл.) → target (вкл.)
fn reconstruct(
    previous: &[[Option<TilePos>; CHUNK_WIDTH]; CHUNK_HEIGHT],
    source: TilePos,
    target: TilePos,
) -> VecDeque<TilePos> {
    // Цель недостижима — путь не записан
    if previous[target.row as usize][target.col as usize].is_none() {
        return VecDeque::new();
    }

    let mut path = VecDeque::new();
    let mut current = target;

    while current != source {
        path.push_front(current);
        match previous[current.row as usize][current.col as usize] {
            Some(prev) => current = prev,
            // Оборванная цепочка возможна только при нарушении инварианта графа
            None => return VecDeque::new(),
        }
    }

    path
}
