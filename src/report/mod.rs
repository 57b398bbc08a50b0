//! 报告接口
//!
//! 把图结构与查询结果转换为纯数据（名称而非句柄），供外部展示层使用。
//! 报告中不含任何对图的引用，展示层无法借此修改图。

use crate::algorithm::{
    AllPairsShortestPaths, PathFinder, PathResult, ShortestPathEngine, TraversalStrategy,
};
use crate::error::Result;
use crate::graph::Graph;
use crate::types::Weight;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 边记录（绘图用：两个端点和权重）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

/// 图结构快照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub vertices: Vec<String>,
    pub edges: Vec<EdgeRecord>,
}

impl NetworkSnapshot {
    pub fn from_graph(graph: &Graph) -> Self {
        let vertices = graph.vertices().map(|v| v.name().to_string()).collect();
        let edges = graph
            .edges()
            .filter_map(|edge| {
                let (a, b) = edge.endpoints();
                Some(EdgeRecord {
                    from: graph.vertex_name(a)?.to_string(),
                    to: graph.vertex_name(b)?.to_string(),
                    weight: edge.weight(),
                })
            })
            .collect();

        Self {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            vertices,
            edges,
        }
    }
}

/// 度数表，按顶点插入顺序
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DegreeTable {
    pub degrees: IndexMap<String, usize>,
}

impl DegreeTable {
    pub fn from_graph(graph: &Graph) -> Self {
        let degrees = graph
            .degrees()
            .into_iter()
            .map(|(name, degree)| (name.to_string(), degree))
            .collect();
        Self { degrees }
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.degrees.get(name).copied()
    }
}

/// 单条路径报告
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathReport {
    pub start: String,
    pub goal: String,
    /// 产生该路径的算法（"BFS"、"DFS" 或 "Dijkstra"）
    pub algorithm: String,
    /// 顶点名称序列，未找到路径时为 `None`
    pub path: Option<Vec<String>>,
    pub hops: Option<usize>,
    pub total_weight: Option<Weight>,
}

impl PathReport {
    pub fn new(
        graph: &Graph,
        algorithm: impl Into<String>,
        start: &str,
        goal: &str,
        result: Option<&PathResult>,
    ) -> Self {
        Self {
            start: start.to_string(),
            goal: goal.to_string(),
            algorithm: algorithm.into(),
            path: result.map(|p| p.names(graph)),
            hops: result.map(|p| p.length),
            total_weight: result.map(|p| p.total_weight),
        }
    }

    /// 用遍历策略查找并生成报告
    pub fn traverse(
        graph: &Graph,
        strategy: TraversalStrategy,
        start: &str,
        goal: &str,
    ) -> Result<Self> {
        let result = PathFinder::new(graph).find_path(strategy, start, goal)?;
        Ok(Self::new(graph, strategy.to_string(), start, goal, result.as_ref()))
    }

    /// 用 Dijkstra 查找并生成报告
    pub fn shortest(graph: &Graph, start: &str, goal: &str) -> Result<Self> {
        let (_, result) = ShortestPathEngine::new(graph).shortest_path(start, goal)?;
        Ok(Self::new(graph, "Dijkstra", start, goal, result.as_ref()))
    }

    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }
}

/// 全源最短路径表中的一项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceEntry {
    pub source: String,
    pub target: String,
    /// 不可达时为 `None`
    pub distance: Option<Weight>,
    pub path: Option<Vec<String>>,
}

/// 全源最短路径表，按 (源点, 目标) 的插入顺序排列
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DistanceTable {
    pub entries: Vec<DistanceEntry>,
}

impl DistanceTable {
    pub fn from_all_pairs(graph: &Graph, all_pairs: &AllPairsShortestPaths) -> Self {
        let mut entries = Vec::with_capacity(all_pairs.len() * all_pairs.len());

        for run in all_pairs.iter() {
            let Some(source) = graph.vertex_name(run.source()) else {
                continue;
            };
            for (target, distance, path) in run.entries() {
                let Some(target) = graph.vertex_name(target) else {
                    continue;
                };
                entries.push(DistanceEntry {
                    source: source.to_string(),
                    target: target.to_string(),
                    distance: distance.is_finite().then_some(distance),
                    path: path.map(|p| p.names(graph)),
                });
            }
        }

        Self { entries }
    }

    /// 查找两点之间的条目
    pub fn get(&self, source: &str, target: &str) -> Option<&DistanceEntry> {
        self.entries
            .iter()
            .find(|e| e.source == source && e.target == target)
    }

    /// 某个源点的所有条目
    pub fn from_source<'a>(&'a self, source: &'a str) -> impl Iterator<Item = &'a DistanceEntry> {
        self.entries.iter().filter(move |e| e.source == source)
    }
}

/// 完整的路网报告：规模、度数、两种遍历路径和全源最短路径表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkReport {
    pub network: NetworkSnapshot,
    pub degrees: DegreeTable,
    pub bfs: PathReport,
    pub dfs: PathReport,
    pub shortest_paths: DistanceTable,
}

impl NetworkReport {
    /// 生成报告；`parallel` 为真时使用并行的全源最短路径
    #[tracing::instrument(skip(graph))]
    pub fn build(graph: &Graph, start: &str, goal: &str, parallel: bool) -> Result<Self> {
        let engine = ShortestPathEngine::new(graph);
        let all_pairs = if parallel {
            engine.all_pairs_parallel()
        } else {
            engine.all_pairs()
        };

        Ok(Self {
            network: NetworkSnapshot::from_graph(graph),
            degrees: DegreeTable::from_graph(graph),
            bfs: PathReport::traverse(graph, TraversalStrategy::Bfs, start, goal)?,
            dfs: PathReport::traverse(graph, TraversalStrategy::Dfs, start, goal)?,
            shortest_paths: DistanceTable::from_all_pairs(graph, &all_pairs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::sample::city_network;

    #[test]
    fn test_snapshot() {
        let graph = city_network().unwrap();
        let snapshot = NetworkSnapshot::from_graph(&graph);

        assert_eq!(snapshot.vertex_count, 8);
        assert_eq!(snapshot.edge_count, 12);
        assert_eq!(snapshot.vertices[0], "Center");
        assert_eq!(
            snapshot.edges[11],
            EdgeRecord {
                from: "RiverPort".to_string(),
                to: "Park".to_string(),
                weight: 5.0,
            }
        );
    }

    #[test]
    fn test_degree_table() {
        let graph = city_network().unwrap();
        let table = DegreeTable::from_graph(&graph);

        assert_eq!(table.get("Center"), Some(5));
        assert_eq!(table.get("RiverPort"), Some(2));
        assert_eq!(table.get("Airport"), None);
        assert_eq!(table.degrees.keys().next().map(String::as_str), Some("Center"));
    }

    #[test]
    fn test_full_report() {
        let graph = city_network().unwrap();
        let report = NetworkReport::build(&graph, "Home", "RiverPort", false).unwrap();

        assert_eq!(report.bfs.algorithm, "BFS");
        assert_eq!(report.bfs.hops, Some(3));
        assert_eq!(
            report.dfs.path.as_deref(),
            Some(&["Home", "Market", "Park", "RiverPort"].map(String::from)[..])
        );
        assert_eq!(report.shortest_paths.entries.len(), 64);

        let entry = report.shortest_paths.get("Home", "RiverPort").unwrap();
        assert_eq!(entry.distance, Some(14.0));
        assert_eq!(report.shortest_paths.from_source("Park").count(), 8);
    }

    #[test]
    fn test_parallel_report_is_identical() {
        let graph = city_network().unwrap();

        let sequential = NetworkReport::build(&graph, "Home", "RiverPort", false).unwrap();
        let parallel = NetworkReport::build(&graph, "Home", "RiverPort", true).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_unreachable_entries() {
        let mut graph = city_network().unwrap();
        graph.add_vertex("Island").unwrap();
        let all_pairs = ShortestPathEngine::new(&graph).all_pairs();
        let table = DistanceTable::from_all_pairs(&graph, &all_pairs);

        let entry = table.get("Home", "Island").unwrap();
        assert_eq!(entry.distance, None);
        assert_eq!(entry.path, None);

        let report = PathReport::shortest(&graph, "Island", "Home").unwrap();
        assert!(!report.is_found());
    }

    #[test]
    fn test_report_unknown_vertex() {
        let graph = city_network().unwrap();

        assert!(matches!(
            NetworkReport::build(&graph, "Home", "Airport", false),
            Err(Error::UnknownVertex(_))
        ));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let graph = city_network().unwrap();
        let report = PathReport::shortest(&graph, "Home", "RiverPort").unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["algorithm"], "Dijkstra");
        assert_eq!(json["total_weight"], 14.0);
        assert_eq!(json["path"][1], "Market");
    }
}
