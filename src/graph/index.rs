//! 图索引
//!
//! 顶点名称索引与邻接表索引，支持快速查找

use crate::graph::edge::{pair_key, EdgeId};
use crate::graph::vertex::VertexId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashMap;

/// 顶点索引：名称到顶点 ID 的映射，保持插入顺序
#[derive(Debug, Clone, Default)]
pub struct VertexIndex {
    name_to_id: IndexMap<String, VertexId>,
}

impl VertexIndex {
    /// 创建新索引
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加名称索引，名称已存在时返回 false
    pub fn insert(&mut self, name: String, vertex_id: VertexId) -> bool {
        if self.name_to_id.contains_key(&name) {
            return false;
        }
        self.name_to_id.insert(name, vertex_id);
        true
    }

    /// 通过名称查找顶点
    pub fn get(&self, name: &str) -> Option<VertexId> {
        self.name_to_id.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.name_to_id.contains_key(name)
    }

    /// 按插入顺序遍历名称
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.name_to_id.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.name_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_to_id.is_empty()
    }
}

/// 邻接项：邻居顶点及连接它的边
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjacent {
    pub neighbor: VertexId,
    pub edge: EdgeId,
}

/// 单个顶点的邻接表，路网中度数通常很小
pub type AdjacencyList = SmallVec<[Adjacent; 4]>;

/// 邻接索引
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    /// 顶点 ID 到邻接表的映射（下标即顶点 ID），按加边顺序排列
    adjacency: Vec<AdjacencyList>,
    /// 无序点对到边 ID 的映射（不允许多重边）
    pair_to_edge: HashMap<(VertexId, VertexId), EdgeId>,
}

impl AdjacencyIndex {
    /// 创建新索引
    pub fn new() -> Self {
        Self::default()
    }

    /// 为新顶点分配空邻接表
    pub fn add_vertex(&mut self, vertex_id: VertexId) {
        debug_assert_eq!(vertex_id.index(), self.adjacency.len());
        self.adjacency.push(AdjacencyList::new());
    }

    /// 添加无向边，两端各登记一次
    pub fn add_edge(&mut self, edge_id: EdgeId, a: VertexId, b: VertexId) {
        self.adjacency[a.index()].push(Adjacent {
            neighbor: b,
            edge: edge_id,
        });
        self.adjacency[b.index()].push(Adjacent {
            neighbor: a,
            edge: edge_id,
        });
        self.pair_to_edge.insert(pair_key(a, b), edge_id);
    }

    /// 获取顶点的邻接表
    pub fn adjacent(&self, vertex_id: VertexId) -> &[Adjacent] {
        self.adjacency
            .get(vertex_id.index())
            .map(|list| list.as_slice())
            .unwrap_or(&[])
    }

    /// 获取两点之间的边
    pub fn edge_between(&self, x: VertexId, y: VertexId) -> Option<EdgeId> {
        self.pair_to_edge.get(&pair_key(x, y)).copied()
    }

    /// 获取顶点的度数
    pub fn degree(&self, vertex_id: VertexId) -> usize {
        self.adjacent(vertex_id).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_index_rejects_duplicates() {
        let mut index = VertexIndex::new();

        assert!(index.insert("Home".to_string(), VertexId::new(0)));
        assert!(index.insert("Work".to_string(), VertexId::new(1)));
        assert!(!index.insert("Home".to_string(), VertexId::new(2)));

        assert_eq!(index.get("Home"), Some(VertexId::new(0)));
        assert_eq!(index.names().collect::<Vec<_>>(), vec!["Home", "Work"]);
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let mut index = AdjacencyIndex::new();
        for i in 0..3 {
            index.add_vertex(VertexId::new(i));
        }
        index.add_edge(EdgeId::new(0), VertexId::new(0), VertexId::new(1));
        index.add_edge(EdgeId::new(1), VertexId::new(2), VertexId::new(0));

        let neighbors: Vec<_> = index
            .adjacent(VertexId::new(0))
            .iter()
            .map(|a| a.neighbor)
            .collect();
        assert_eq!(neighbors, vec![VertexId::new(1), VertexId::new(2)]);
        assert_eq!(index.degree(VertexId::new(1)), 1);
        assert_eq!(
            index.edge_between(VertexId::new(0), VertexId::new(2)),
            Some(EdgeId::new(1))
        );
        assert_eq!(index.edge_between(VertexId::new(1), VertexId::new(2)), None);
    }
}
