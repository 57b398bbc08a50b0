//! RoadGraph - 城市路网图
//!
//! 以无向带权图建模道路网络，支持：
//! - 结构查询（顶点数、边数、度数、邻居）
//! - 无权路径发现（BFS 最少跳数、DFS 任意路径）
//! - 基于 Dijkstra 的全源最短路径与路径重构
//! - 从 CSV / JSON 导入路网，导出纯数据报告

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod import;
pub mod report;
pub mod sample;
pub mod types;

// 重导出常用类型
pub use algorithm::{
    AllPairsShortestPaths, PathFinder, PathResult, ShortestPathEngine, ShortestPaths,
    TraversalStrategy, VertexState,
};
pub use error::{Error, Result};
pub use graph::{Edge, EdgeId, Graph, Vertex, VertexId};
pub use import::{load_network, ImportStats, NetworkFormat, NetworkImporter};
pub use report::{DegreeTable, DistanceTable, NetworkReport, NetworkSnapshot, PathReport};
pub use types::{Weight, UNREACHABLE};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
