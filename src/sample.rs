//! 内置样例路网
//!
//! 一座小城市的八个路口及其之间的道路（单位：公里）

use crate::error::Result;
use crate::graph::Graph;
use crate::types::Weight;

/// 样例路网的路口
pub const CITY_VERTICES: &[&str] = &[
    "Center", "Station", "Home", "Work", "Market", "Mall", "Park", "RiverPort",
];

/// 样例路网的道路
pub const CITY_EDGES: &[(&str, &str, Weight)] = &[
    ("Center", "Station", 3.0),
    ("Center", "Home", 4.0),
    ("Center", "Work", 5.0),
    ("Center", "Market", 2.0),
    ("Center", "Mall", 3.0),
    ("Station", "Home", 2.0),
    ("Home", "Market", 3.0),
    ("Work", "Mall", 4.0),
    ("Work", "RiverPort", 6.0),
    ("Market", "Park", 6.0),
    ("Mall", "Park", 8.0),
    ("RiverPort", "Park", 5.0),
];

/// 默认查询的起点
pub const DEFAULT_START: &str = "Home";

/// 默认查询的终点
pub const DEFAULT_GOAL: &str = "RiverPort";

/// 构建样例路网
pub fn city_network() -> Result<Graph> {
    Graph::from_network(CITY_VERTICES, CITY_EDGES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_network_shape() {
        let graph = city_network().unwrap();

        assert_eq!(graph.vertex_count(), 8);
        assert_eq!(graph.edge_count(), 12);
        assert_eq!(graph.degree("Center").unwrap(), 5);
    }

    #[test]
    fn test_city_degrees() {
        let graph = city_network().unwrap();

        assert_eq!(
            graph.degrees(),
            vec![
                ("Center", 5),
                ("Station", 2),
                ("Home", 3),
                ("Work", 3),
                ("Market", 3),
                ("Mall", 3),
                ("Park", 3),
                ("RiverPort", 2),
            ]
        );
        let total: usize = graph.degrees().iter().map(|(_, d)| d).sum();
        assert_eq!(total, 2 * graph.edge_count());
    }

    #[test]
    fn test_home_neighbor_order() {
        let graph = city_network().unwrap();

        assert_eq!(
            graph.neighbors("Home").unwrap(),
            vec!["Center", "Station", "Market"]
        );
    }
}
