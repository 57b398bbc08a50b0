//! 带权最短路径
//!
//! 单源 Dijkstra（二叉堆 + 惰性删除），逐个源点组合为全源最短路径

use super::path::PathResult;
use crate::error::Result;
use crate::graph::{EdgeId, Graph, VertexId};
use crate::types::{is_reachable_distance, Weight, UNREACHABLE};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use tracing::debug;

/// Dijkstra 运行中顶点的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VertexState {
    /// 尚未被任何边松弛，距离为无穷
    Unvisited,
    /// 已有有限的暂定距离，尚未出堆
    Tentative,
    /// 已作为最小值出堆，距离确定
    Settled,
}

/// 堆条目，按暂定距离排序，距离相同时按顶点 ID 排序
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    distance: Weight,
    vertex: VertexId,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// 单源最短路径结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPaths {
    source: VertexId,
    /// 下标为顶点 ID
    distances: Vec<Weight>,
    /// 前驱顶点及连接它的边
    predecessors: Vec<Option<(VertexId, EdgeId)>>,
    states: Vec<VertexState>,
}

impl ShortestPaths {
    /// 源点
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// 到目标的最短距离，不可达时为无穷
    pub fn distance(&self, target: VertexId) -> Weight {
        self.distances
            .get(target.index())
            .copied()
            .unwrap_or(UNREACHABLE)
    }

    /// 目标是否可达
    pub fn is_reachable(&self, target: VertexId) -> bool {
        is_reachable_distance(self.distance(target))
    }

    /// 运行结束后顶点的状态
    pub fn state(&self, vertex: VertexId) -> VertexState {
        self.states
            .get(vertex.index())
            .copied()
            .unwrap_or(VertexState::Unvisited)
    }

    /// 目标在最短路径树中的前驱
    pub fn predecessor(&self, target: VertexId) -> Option<VertexId> {
        self.predecessors
            .get(target.index())
            .copied()
            .flatten()
            .map(|(prev, _)| prev)
    }

    /// 沿前驱回溯重构路径，不可达时返回 `None`
    ///
    /// 回溯步数不超过顶点数，前驱链成环时同样返回 `None`。
    pub fn path_to(&self, target: VertexId) -> Option<PathResult> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut vertices = vec![target];
        let mut edges = Vec::new();
        let mut current = target;

        while current != self.source {
            if edges.len() >= self.distances.len() {
                return None;
            }
            let (prev, edge) = self.predecessors.get(current.index()).copied().flatten()?;
            vertices.push(prev);
            edges.push(edge);
            current = prev;
        }

        vertices.reverse();
        edges.reverse();

        Some(PathResult {
            length: edges.len(),
            vertices,
            edges,
            total_weight: self.distance(target),
        })
    }

    /// 所有顶点的 (目标, 距离, 路径)，按顶点 ID 顺序
    pub fn entries(&self) -> impl Iterator<Item = (VertexId, Weight, Option<PathResult>)> + '_ {
        (0..self.distances.len()).map(move |i| {
            let target = VertexId::new(i);
            (target, self.distance(target), self.path_to(target))
        })
    }

    /// 可达顶点数量（含源点）
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }
}

/// 全源最短路径结果，按源点 ID 索引
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllPairsShortestPaths {
    runs: Vec<ShortestPaths>,
}

impl AllPairsShortestPaths {
    /// 某个源点的单源结果
    pub fn from_source(&self, source: VertexId) -> Option<&ShortestPaths> {
        self.runs.get(source.index())
    }

    /// 两点间最短距离，不可达时为无穷
    pub fn distance(&self, source: VertexId, target: VertexId) -> Weight {
        self.from_source(source)
            .map(|run| run.distance(target))
            .unwrap_or(UNREACHABLE)
    }

    /// 两点间最短路径
    pub fn path(&self, source: VertexId, target: VertexId) -> Option<PathResult> {
        self.from_source(source)?.path_to(target)
    }

    /// 按源点顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = &ShortestPaths> {
        self.runs.iter()
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

/// 最短路径引擎
pub struct ShortestPathEngine<'g> {
    graph: &'g Graph,
}

impl<'g> ShortestPathEngine<'g> {
    /// 创建引擎
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// 以名称指定源点的单源最短路径
    #[tracing::instrument(skip(self))]
    pub fn single_source(&self, source: &str) -> Result<ShortestPaths> {
        let source = self.graph.resolve(source)?;
        Ok(dijkstra(self.graph, source))
    }

    /// 两点间最短路径及距离；不可达时距离为无穷、路径为 `None`
    pub fn shortest_path(
        &self,
        source: &str,
        target: &str,
    ) -> Result<(Weight, Option<PathResult>)> {
        let run = self.single_source(source)?;
        let target = self.graph.resolve(target)?;
        Ok((run.distance(target), run.path_to(target)))
    }

    /// 两点间最短距离
    pub fn distance(&self, source: &str, target: &str) -> Result<Weight> {
        Ok(self.shortest_path(source, target)?.0)
    }

    /// 全源最短路径：每个顶点作为源点运行一次 Dijkstra
    #[tracing::instrument(skip(self), fields(vertices = self.graph.vertex_count()))]
    pub fn all_pairs(&self) -> AllPairsShortestPaths {
        let runs = self
            .graph
            .vertex_ids()
            .map(|source| dijkstra(self.graph, source))
            .collect();
        AllPairsShortestPaths { runs }
    }

    /// 并行的全源最短路径，结果与 [`all_pairs`](Self::all_pairs) 一致
    #[tracing::instrument(skip(self), fields(vertices = self.graph.vertex_count()))]
    pub fn all_pairs_parallel(&self) -> AllPairsShortestPaths {
        let sources: Vec<VertexId> = self.graph.vertex_ids().collect();
        let runs = sources
            .into_par_iter()
            .map(|source| dijkstra(self.graph, source))
            .collect();
        AllPairsShortestPaths { runs }
    }
}

/// 单源 Dijkstra
///
/// 要求所有边权非负，这一点由加边时的校验保证。
pub fn dijkstra(graph: &Graph, source: VertexId) -> ShortestPaths {
    let n = graph.vertex_count();
    let mut distances = vec![UNREACHABLE; n];
    let mut predecessors: Vec<Option<(VertexId, EdgeId)>> = vec![None; n];
    let mut states = vec![VertexState::Unvisited; n];
    let mut heap = BinaryHeap::new();

    if source.index() < n {
        distances[source.index()] = 0.0;
        states[source.index()] = VertexState::Tentative;
        heap.push(Reverse(HeapEntry {
            distance: 0.0,
            vertex: source,
        }));
    }

    let mut settled = 0usize;
    while let Some(Reverse(HeapEntry { distance, vertex })) = heap.pop() {
        let current = vertex.index();
        // 惰性删除：跳过过期条目
        if states[current] == VertexState::Settled || distance > distances[current] {
            continue;
        }
        states[current] = VertexState::Settled;
        settled += 1;

        for adj in graph.adjacent(vertex) {
            let next = adj.neighbor.index();
            if states[next] == VertexState::Settled {
                continue;
            }
            let Some(edge) = graph.get_edge(adj.edge) else {
                continue;
            };

            let candidate = distance + edge.weight();
            if candidate < distances[next] {
                distances[next] = candidate;
                predecessors[next] = Some((vertex, adj.edge));
                states[next] = VertexState::Tentative;
                heap.push(Reverse(HeapEntry {
                    distance: candidate,
                    vertex: adj.neighbor,
                }));
            }
        }
    }

    debug!(source = source.index(), settled, "Dijkstra 完成");

    ShortestPaths {
        source,
        distances,
        predecessors,
        states,
    }
}
