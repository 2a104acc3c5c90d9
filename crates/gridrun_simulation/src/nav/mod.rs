//! Navigation: граф проходимых tiles и shortest-path engine
//!
//! Граф query-специфичен: веса первых/последних рёбер зависят от точных
//! пиксельных позиций преследователя и цели, поэтому граф строится заново
//! на каждый запрос пути, а не кэшируется между запросами или entity.

pub mod graph;
pub mod path;

pub use graph::{build_graph, NavGraph, PathQuery};
pub use path::compute_path;
