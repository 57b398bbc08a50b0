//! 图核心模块
//!
//! 定义顶点、边和路网图的核心数据结构

mod edge;
mod graph;
mod index;
mod vertex;

pub use edge::{Edge, EdgeId};
pub use graph::Graph;
pub use index::{Adjacent, AdjacencyIndex, AdjacencyList, VertexIndex};
pub use vertex::{Vertex, VertexId};
