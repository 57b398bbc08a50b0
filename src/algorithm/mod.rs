//! 图算法模块
//!
//! 包含无权路径搜索（BFS/DFS）和带权最短路径（Dijkstra）

mod path;
mod shortest_path;
mod traversal;

pub use path::PathResult;
pub use shortest_path::{
    dijkstra, AllPairsShortestPaths, ShortestPathEngine, ShortestPaths, VertexState,
};
pub use traversal::{PathFinder, TraversalStrategy};
