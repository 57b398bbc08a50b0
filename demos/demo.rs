//! RoadGraph 演示脚本
//!
//! 构建样例路网，打印度数、BFS/DFS 路径和全源最短路径

use roadgraph::algorithm::{PathFinder, ShortestPathEngine};
use roadgraph::cli::format_weight;
use roadgraph::sample::{city_network, DEFAULT_GOAL, DEFAULT_START};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("RoadGraph 演示");
    println!("================\n");

    let graph = city_network()?;

    println!("1. 路网规模");
    println!("   顶点数: {}", graph.vertex_count());
    println!("   边数: {}\n", graph.edge_count());

    println!("2. 顶点度数");
    for (name, degree) in graph.degrees() {
        println!("   {}: {}", name, degree);
    }
    println!();

    println!("3. 无权路径 {} -> {}", DEFAULT_START, DEFAULT_GOAL);
    let finder = PathFinder::new(&graph);
    if let Some(path) = finder.bfs_path(DEFAULT_START, DEFAULT_GOAL)? {
        println!("   BFS: {:?}", path.names(&graph));
    }
    if let Some(path) = finder.dfs_path(DEFAULT_START, DEFAULT_GOAL)? {
        println!("   DFS: {:?}", path.names(&graph));
    }
    println!();

    println!("4. 全源最短路径");
    let all_pairs = ShortestPathEngine::new(&graph).all_pairs();
    for run in all_pairs.iter() {
        let source = graph.vertex_name(run.source()).unwrap_or("?");
        println!("\n   从 '{}' 出发:", source);
        for (target, distance, path) in run.entries() {
            let target = graph.vertex_name(target).unwrap_or("?");
            let path = path.map(|p| p.names(&graph)).unwrap_or_default();
            println!(
                "     到 '{}': 路径 = {:?}, 长度 = {}",
                target,
                path,
                format_weight(distance)
            );
        }
    }

    Ok(())
}
