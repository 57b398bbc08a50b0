//! 无权路径搜索
//!
//! 基于 BFS/DFS 的起点到终点路径发现，以及连通性查询

use super::path::PathResult;
use crate::error::Result;
use crate::graph::{Graph, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use std::fmt;
use tracing::debug;

/// 遍历策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraversalStrategy {
    /// 广度优先：结果路径的边数最少
    Bfs,
    /// 深度优先：结果是一条合法路径，但不保证最短
    Dfs,
}

impl fmt::Display for TraversalStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalStrategy::Bfs => f.write_str("BFS"),
            TraversalStrategy::Dfs => f.write_str("DFS"),
        }
    }
}

/// 路径查找器
///
/// 只读借用路网图；未知顶点名称是唯一的错误，找不到路径返回 `Ok(None)`。
pub struct PathFinder<'g> {
    graph: &'g Graph,
}

impl<'g> PathFinder<'g> {
    /// 创建路径查找器
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// 按策略查找路径
    pub fn find_path(
        &self,
        strategy: TraversalStrategy,
        start: &str,
        goal: &str,
    ) -> Result<Option<PathResult>> {
        match strategy {
            TraversalStrategy::Bfs => self.bfs_path(start, goal),
            TraversalStrategy::Dfs => self.dfs_path(start, goal),
        }
    }

    /// BFS 路径查找（最少跳数）
    #[tracing::instrument(skip(self))]
    pub fn bfs_path(&self, start: &str, goal: &str) -> Result<Option<PathResult>> {
        let start = self.graph.resolve(start)?;
        let goal = self.graph.resolve(goal)?;
        Ok(self.bfs(start, goal))
    }

    /// DFS 路径查找（不保证最短）
    #[tracing::instrument(skip(self))]
    pub fn dfs_path(&self, start: &str, goal: &str) -> Result<Option<PathResult>> {
        let start = self.graph.resolve(start)?;
        let goal = self.graph.resolve(goal)?;
        Ok(self.dfs(start, goal))
    }

    /// BFS：队列中保存部分路径，入队时标记已访问
    pub fn bfs(&self, start: VertexId, goal: VertexId) -> Option<PathResult> {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();

        visited.insert(start);
        queue.push_back(vec![start]);

        while let Some(path) = queue.pop_front() {
            let current = *path.last()?;
            if current == goal {
                debug!(hops = path.len() - 1, "BFS 找到路径");
                return Some(PathResult::from_vertices(self.graph, path));
            }

            for neighbor in self.graph.neighbor_ids(current) {
                if visited.insert(neighbor) {
                    let mut extended = path.clone();
                    extended.push(neighbor);
                    queue.push_back(extended);
                }
            }
        }

        None
    }

    /// DFS：栈中保存部分路径，入栈时标记已访问
    pub fn dfs(&self, start: VertexId, goal: VertexId) -> Option<PathResult> {
        let mut visited = HashSet::new();
        let mut stack = Vec::new();

        visited.insert(start);
        stack.push(vec![start]);

        while let Some(path) = stack.pop() {
            let current = *path.last()?;
            if current == goal {
                debug!(hops = path.len() - 1, "DFS 找到路径");
                return Some(PathResult::from_vertices(self.graph, path));
            }

            for neighbor in self.graph.neighbor_ids(current) {
                if visited.insert(neighbor) {
                    let mut extended = path.clone();
                    extended.push(neighbor);
                    stack.push(extended);
                }
            }
        }

        None
    }

    /// 判断两点是否连通
    pub fn is_reachable(&self, start: &str, goal: &str) -> Result<bool> {
        Ok(self.bfs_path(start, goal)?.is_some())
    }

    /// 连通分量，每个分量内按发现顺序排列，分量按首个顶点的插入顺序排列
    pub fn connected_components(&self) -> Vec<Vec<VertexId>> {
        let mut visited = HashSet::new();
        let mut components = Vec::new();

        for root in self.graph.vertex_ids() {
            if !visited.insert(root) {
                continue;
            }

            let mut component = vec![root];
            let mut queue = VecDeque::from([root]);
            while let Some(current) = queue.pop_front() {
                for neighbor in self.graph.neighbor_ids(current) {
                    if visited.insert(neighbor) {
                        component.push(neighbor);
                        queue.push_back(neighbor);
                    }
                }
            }
            components.push(component);
        }

        components
    }

    /// 查找所有简单路径（限制深度）
    pub fn all_simple_paths(
        &self,
        start: &str,
        goal: &str,
        max_depth: usize,
    ) -> Result<Vec<PathResult>> {
        let start = self.graph.resolve(start)?;
        let goal = self.graph.resolve(goal)?;

        let mut results = Vec::new();
        let mut path = vec![start];
        let mut visited = HashSet::new();
        visited.insert(start);

        self.dfs_all_paths(start, goal, max_depth, &mut visited, &mut path, &mut results);

        Ok(results)
    }

    fn dfs_all_paths(
        &self,
        current: VertexId,
        goal: VertexId,
        remaining_depth: usize,
        visited: &mut HashSet<VertexId>,
        path: &mut Vec<VertexId>,
        results: &mut Vec<PathResult>,
    ) {
        if current == goal {
            results.push(PathResult::from_vertices(self.graph, path.clone()));
            return;
        }

        if remaining_depth == 0 {
            return;
        }

        for neighbor in self.graph.neighbor_ids(current) {
            if visited.insert(neighbor) {
                path.push(neighbor);

                self.dfs_all_paths(neighbor, goal, remaining_depth - 1, visited, path, results);

                path.pop();
                visited.remove(&neighbor);
            }
        }
    }
}
