//! 路径结果

use crate::graph::{EdgeId, Graph, VertexId};
use crate::types::Weight;
use serde::{Deserialize, Serialize};

/// 路径结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    /// 路径上的顶点序列
    pub vertices: Vec<VertexId>,
    /// 路径上的边序列
    pub edges: Vec<EdgeId>,
    /// 路径长度（边数）
    pub length: usize,
    /// 路径总权重
    pub total_weight: Weight,
}

impl PathResult {
    /// 只含起点的平凡路径
    pub(crate) fn with_start(start: VertexId) -> Self {
        Self {
            vertices: vec![start],
            edges: Vec::new(),
            length: 0,
            total_weight: 0.0,
        }
    }

    /// 由顶点序列补全边序列与总权重
    ///
    /// 调用方保证相邻顶点之间都有边；缺失的边会被跳过。
    pub(crate) fn from_vertices(graph: &Graph, vertices: Vec<VertexId>) -> Self {
        let mut edges = Vec::with_capacity(vertices.len().saturating_sub(1));
        let mut total_weight = 0.0;

        for pair in vertices.windows(2) {
            if let Some(edge) = graph.edge_between_ids(pair[0], pair[1]) {
                edges.push(edge.id());
                total_weight += edge.weight();
            }
        }

        Self {
            length: edges.len(),
            vertices,
            edges,
            total_weight,
        }
    }

    /// 起点
    pub fn start(&self) -> Option<VertexId> {
        self.vertices.first().copied()
    }

    /// 终点
    pub fn end(&self) -> Option<VertexId> {
        self.vertices.last().copied()
    }

    /// 是否是单顶点路径
    pub fn is_trivial(&self) -> bool {
        self.length == 0
    }

    /// 检查路径是否合法：每对相邻顶点之间都存在边，且边序列一致
    pub fn is_valid(&self, graph: &Graph) -> bool {
        if self.vertices.is_empty() || self.edges.len() + 1 != self.vertices.len() {
            return false;
        }
        self.vertices
            .windows(2)
            .zip(&self.edges)
            .all(|(pair, &edge_id)| {
                graph
                    .get_edge(edge_id)
                    .is_some_and(|edge| edge.connects(pair[0], pair[1]))
            })
    }

    /// 转换为顶点名称序列
    pub fn names(&self, graph: &Graph) -> Vec<String> {
        graph.names_of(&self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> Graph {
        Graph::from_network(
            &["A", "B", "C", "D"],
            &[("A", "B", 1.5), ("B", "C", 2.0), ("C", "D", 0.5)],
        )
        .unwrap()
    }

    #[test]
    fn test_from_vertices() {
        let graph = line();
        let ids: Vec<_> = ["A", "B", "C"]
            .iter()
            .map(|n| graph.vertex_id(n).unwrap())
            .collect();

        let path = PathResult::from_vertices(&graph, ids);
        assert_eq!(path.length, 2);
        assert_eq!(path.total_weight, 3.5);
        assert!(path.is_valid(&graph));
        assert_eq!(path.names(&graph), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_invalid_path_detected() {
        let graph = line();
        let a = graph.vertex_id("A").unwrap();
        let c = graph.vertex_id("C").unwrap();

        // A 与 C 之间没有直接的边
        let path = PathResult::from_vertices(&graph, vec![a, c]);
        assert!(!path.is_valid(&graph));
    }

    #[test]
    fn test_trivial_path() {
        let graph = line();
        let a = graph.vertex_id("A").unwrap();

        let path = PathResult::with_start(a);
        assert!(path.is_trivial());
        assert!(path.is_valid(&graph));
        assert_eq!(path.start(), path.end());
    }
}
