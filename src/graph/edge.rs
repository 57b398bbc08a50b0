//! 边定义
//!
//! 无向带权边：道路路段及其长度

use crate::graph::vertex::VertexId;
use crate::types::Weight;
use serde::{Deserialize, Serialize};

/// 边 ID（按插入顺序分配）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub usize);

impl EdgeId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for EdgeId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

/// 无向边
///
/// 端点按插入时的顺序保存，但边本身没有方向：`{a, b}` 与 `{b, a}` 是同一条边。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// 边 ID
    id: EdgeId,
    /// 第一个端点
    a: VertexId,
    /// 第二个端点
    b: VertexId,
    /// 权重
    weight: Weight,
}

impl Edge {
    /// 创建新边
    pub fn new(id: EdgeId, a: VertexId, b: VertexId, weight: Weight) -> Self {
        Self { id, a, b, weight }
    }

    /// 获取边 ID
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// 获取两个端点
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.a, self.b)
    }

    /// 获取边的权重
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// 给定一个端点，返回另一个端点
    pub fn other(&self, vertex: VertexId) -> Option<VertexId> {
        if vertex == self.a {
            Some(self.b)
        } else if vertex == self.b {
            Some(self.a)
        } else {
            None
        }
    }

    /// 判断该边是否连接 `x` 与 `y`（不分顺序）
    pub fn connects(&self, x: VertexId, y: VertexId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }

    /// 无序点对键，较小的 ID 在前
    pub fn pair_key(&self) -> (VertexId, VertexId) {
        pair_key(self.a, self.b)
    }
}

/// 规范化无序点对
pub(crate) fn pair_key(x: VertexId, y: VertexId) -> (VertexId, VertexId) {
    if x <= y {
        (x, y)
    } else {
        (y, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_is_undirected() {
        let e = Edge::new(EdgeId::new(0), VertexId::new(2), VertexId::new(5), 4.0);

        assert!(e.connects(VertexId::new(2), VertexId::new(5)));
        assert!(e.connects(VertexId::new(5), VertexId::new(2)));
        assert!(!e.connects(VertexId::new(2), VertexId::new(3)));
        assert_eq!(e.pair_key(), (VertexId::new(2), VertexId::new(5)));
        assert_eq!(e.weight(), 4.0);
    }

    #[test]
    fn test_edge_other_endpoint() {
        let e = Edge::new(EdgeId::new(1), VertexId::new(7), VertexId::new(1), 2.5);

        assert_eq!(e.other(VertexId::new(7)), Some(VertexId::new(1)));
        assert_eq!(e.other(VertexId::new(1)), Some(VertexId::new(7)));
        assert_eq!(e.other(VertexId::new(4)), None);
    }
}
