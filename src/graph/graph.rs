//! 图数据结构
//!
//! 基于邻接表的无向带权路网图

use super::edge::{Edge, EdgeId};
use super::index::{Adjacent, AdjacencyIndex, VertexIndex};
use super::vertex::{Vertex, VertexId};
use crate::error::{Error, Result};
use crate::types::{is_valid_weight, Weight};
use tracing::{debug, trace};

/// 路网图
///
/// 构造完成后只读：所有查询算法都借用 `&Graph`，不会修改图状态。
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// 顶点表（下标即顶点 ID）
    vertices: Vec<Vertex>,
    /// 边表（下标即边 ID）
    edges: Vec<Edge>,
    /// 名称索引
    vertex_index: VertexIndex,
    /// 邻接索引
    adjacency: AdjacencyIndex,
}

impl Graph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    /// 从有序的顶点列表和边三元组构建图
    ///
    /// 任何一条完整性错误都会立即返回，不会得到部分构建的图。
    pub fn from_network<V, E>(vertices: &[V], edges: &[(E, E, Weight)]) -> Result<Self>
    where
        V: AsRef<str>,
        E: AsRef<str>,
    {
        let mut graph = Self::new();
        for name in vertices {
            graph.add_vertex(name.as_ref())?;
        }
        for (a, b, weight) in edges {
            graph.add_edge(a.as_ref(), b.as_ref(), *weight)?;
        }
        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "路网图构建完成"
        );
        Ok(graph)
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点，名称重复时拒绝
    pub fn add_vertex(&mut self, name: impl Into<String>) -> Result<VertexId> {
        let name = name.into();
        let id = VertexId::new(self.vertices.len());

        if !self.vertex_index.insert(name.clone(), id) {
            return Err(Error::DuplicateVertex(name));
        }
        self.adjacency.add_vertex(id);
        trace!(vertex = %name, id = id.index(), "添加顶点");
        self.vertices.push(Vertex::new(id, name));

        Ok(id)
    }

    /// 通过名称查找顶点 ID
    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.vertex_index.get(name)
    }

    /// 通过名称查找顶点 ID，不存在时返回 `UnknownVertex`
    pub fn resolve(&self, name: &str) -> Result<VertexId> {
        self.vertex_id(name)
            .ok_or_else(|| Error::UnknownVertex(name.to_string()))
    }

    /// 判断顶点是否存在
    pub fn contains_vertex(&self, name: &str) -> bool {
        self.vertex_index.contains(name)
    }

    /// 获取顶点
    pub fn get_vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())
    }

    /// 获取顶点名称
    pub fn vertex_name(&self, id: VertexId) -> Option<&str> {
        self.get_vertex(id).map(Vertex::name)
    }

    /// 把顶点 ID 序列转换为名称序列
    pub fn names_of(&self, ids: &[VertexId]) -> Vec<String> {
        ids.iter()
            .filter_map(|&id| self.vertex_name(id))
            .map(str::to_string)
            .collect()
    }

    /// 按插入顺序遍历所有顶点
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    /// 按插入顺序遍历所有顶点 ID
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().map(Vertex::id)
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // ==================== 边操作 ====================

    /// 添加无向边
    pub fn add_edge(&mut self, a: &str, b: &str, weight: Weight) -> Result<EdgeId> {
        let a_id = self.resolve(a)?;
        let b_id = self.resolve(b)?;

        if a_id == b_id {
            return Err(Error::SelfLoop(a.to_string()));
        }
        if !is_valid_weight(weight) {
            return Err(Error::InvalidWeight {
                from: a.to_string(),
                to: b.to_string(),
                weight,
            });
        }
        if self.adjacency.edge_between(a_id, b_id).is_some() {
            return Err(Error::DuplicateEdge(a.to_string(), b.to_string()));
        }

        let id = EdgeId::new(self.edges.len());
        self.adjacency.add_edge(id, a_id, b_id);
        self.edges.push(Edge::new(id, a_id, b_id, weight));
        trace!(from = a, to = b, weight, "添加边");

        Ok(id)
    }

    /// 获取边
    pub fn get_edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    /// 按插入顺序遍历所有边
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// 获取两点之间的边
    pub fn edge_between(&self, a: &str, b: &str) -> Result<Option<&Edge>> {
        let a_id = self.resolve(a)?;
        let b_id = self.resolve(b)?;
        Ok(self.edge_between_ids(a_id, b_id))
    }

    pub fn edge_between_ids(&self, a: VertexId, b: VertexId) -> Option<&Edge> {
        self.adjacency
            .edge_between(a, b)
            .and_then(|id| self.get_edge(id))
    }

    /// 获取两点之间边的权重，没有边时返回 `None`
    pub fn weight(&self, a: &str, b: &str) -> Result<Option<Weight>> {
        Ok(self.edge_between(a, b)?.map(Edge::weight))
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // ==================== 邻居查询 ====================

    /// 获取顶点的邻接表（按加边顺序）
    pub fn adjacent(&self, vertex_id: VertexId) -> &[Adjacent] {
        self.adjacency.adjacent(vertex_id)
    }

    /// 获取顶点的邻居 ID（按加边顺序）
    pub fn neighbor_ids(&self, vertex_id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacent(vertex_id).iter().map(|adj| adj.neighbor)
    }

    /// 获取顶点的邻居名称（按加边顺序）
    pub fn neighbors(&self, name: &str) -> Result<Vec<&str>> {
        let id = self.resolve(name)?;
        Ok(self
            .neighbor_ids(id)
            .filter_map(|n| self.vertex_name(n))
            .collect())
    }

    /// 获取顶点的邻居名称及对应边权重
    pub fn weighted_neighbors(&self, name: &str) -> Result<Vec<(&str, Weight)>> {
        let id = self.resolve(name)?;
        Ok(self
            .adjacent(id)
            .iter()
            .filter_map(|adj| {
                let neighbor = self.vertex_name(adj.neighbor)?;
                let edge = self.get_edge(adj.edge)?;
                Some((neighbor, edge.weight()))
            })
            .collect())
    }

    /// 获取顶点的度数
    pub fn degree(&self, name: &str) -> Result<usize> {
        let id = self.resolve(name)?;
        Ok(self.adjacency.degree(id))
    }

    /// 按顶点 ID 获取度数
    pub fn degree_of(&self, vertex_id: VertexId) -> usize {
        self.adjacency.degree(vertex_id)
    }

    /// 所有顶点的度数（按顶点插入顺序）
    pub fn degrees(&self) -> Vec<(&str, usize)> {
        self.vertices
            .iter()
            .map(|v| (v.name(), self.degree_of(v.id())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::from_network(
            &["A", "B", "C"],
            &[("A", "B", 1.0), ("B", "C", 2.0), ("C", "A", 4.0)],
        )
        .unwrap()
    }

    #[test]
    fn test_graph_basic() {
        let graph = triangle();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.degree("A").unwrap(), 2);
        assert_eq!(graph.weight("A", "C").unwrap(), Some(4.0));
        assert_eq!(graph.weight("C", "A").unwrap(), Some(4.0));
    }

    #[test]
    fn test_neighbors_follow_edge_insertion_order() {
        let graph = triangle();

        assert_eq!(graph.neighbors("A").unwrap(), vec!["B", "C"]);
        assert_eq!(graph.neighbors("C").unwrap(), vec!["B", "A"]);
        assert_eq!(
            graph.weighted_neighbors("B").unwrap(),
            vec![("A", 1.0), ("C", 2.0)]
        );
    }

    #[test]
    fn test_degree_matches_neighbor_count() {
        let graph = triangle();

        for (name, degree) in graph.degrees() {
            assert_eq!(degree, graph.neighbors(name).unwrap().len());
        }
    }

    #[test]
    fn test_duplicate_vertex_rejected() {
        let mut graph = Graph::new();
        graph.add_vertex("Home").unwrap();

        let err = graph.add_vertex("Home").unwrap_err();
        assert!(matches!(err, Error::DuplicateVertex(name) if name == "Home"));
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn test_unknown_vertex_rejected() {
        let mut graph = Graph::new();
        graph.add_vertex("Home").unwrap();

        let err = graph.add_edge("Home", "Nowhere", 1.0).unwrap_err();
        assert!(matches!(err, Error::UnknownVertex(name) if name == "Nowhere"));
        assert!(matches!(graph.degree("Nowhere"), Err(Error::UnknownVertex(_))));
        assert!(matches!(graph.neighbors("Nowhere"), Err(Error::UnknownVertex(_))));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_invalid_weight_rejected() {
        let mut graph = Graph::from_network(&["A", "B"], &[] as &[(&str, &str, f64)]).unwrap();

        assert!(matches!(
            graph.add_edge("A", "B", -1.0),
            Err(Error::InvalidWeight { .. })
        ));
        assert!(matches!(
            graph.add_edge("A", "B", f64::NAN),
            Err(Error::InvalidWeight { .. })
        ));
        assert!(graph.add_edge("A", "B", 0.0).is_ok());
    }

    #[test]
    fn test_duplicate_edge_rejected_in_either_direction() {
        let mut graph = triangle();

        assert!(matches!(
            graph.add_edge("B", "A", 7.0),
            Err(Error::DuplicateEdge(_, _))
        ));
        // 原权重保持不变
        assert_eq!(graph.weight("A", "B").unwrap(), Some(1.0));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_self_loop_rejected() {
        let mut graph = triangle();

        assert!(matches!(graph.add_edge("A", "A", 1.0), Err(Error::SelfLoop(_))));
        assert_eq!(graph.degree("A").unwrap(), 2);
    }

    #[test]
    fn test_from_network_stops_on_first_error() {
        let result = Graph::from_network(&["A", "B"], &[("A", "B", 1.0), ("A", "X", 1.0)]);

        assert!(matches!(result, Err(Error::UnknownVertex(name)) if name == "X"));
    }

    #[test]
    fn test_isolated_vertex() {
        let mut graph = triangle();
        graph.add_vertex("D").unwrap();

        assert_eq!(graph.degree("D").unwrap(), 0);
        assert!(graph.neighbors("D").unwrap().is_empty());
    }
}
