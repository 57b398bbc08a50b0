//! 路网导入模块
//!
//! 支持从 CSV 边表（可选顶点表）或 JSON 文档构建路网图

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::report::EdgeRecord;
use crate::types::Weight;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// 导入统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportStats {
    pub vertices_imported: usize,
    pub edges_imported: usize,
    pub duration_ms: u64,
}

/// 输入格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkFormat {
    Csv,
    Json,
}

impl NetworkFormat {
    /// 根据文件扩展名推断格式
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(NetworkFormat::Csv),
            "json" => Some(NetworkFormat::Json),
            _ => None,
        }
    }
}

impl std::str::FromStr for NetworkFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(NetworkFormat::Csv),
            "json" => Ok(NetworkFormat::Json),
            other => Err(Error::Import(format!("不支持的格式: {}", other))),
        }
    }
}

/// CSV 边表中的一行：`from,to,weight`
#[derive(Debug, Deserialize)]
struct EdgeRow {
    from: String,
    to: String,
    weight: Weight,
}

/// CSV 顶点表中的一行：`name`
#[derive(Debug, Deserialize)]
struct VertexRow {
    name: String,
}

/// JSON 路网文档
///
/// 字段与 [`NetworkSnapshot`](crate::report::NetworkSnapshot) 一致，导出的快照可以直接再导入。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkDocument {
    pub vertices: Vec<String>,
    pub edges: Vec<EdgeRecord>,
}

/// 路网导入器
///
/// 逐步向同一张图导入顶点和边，任何错误都会中止导入。
#[derive(Debug, Default)]
pub struct NetworkImporter {
    graph: Graph,
    stats: ImportStats,
}

impl NetworkImporter {
    /// 创建导入器
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 CSV 顶点表导入（表头 `name`），顶点按行顺序插入
    pub fn import_vertices_csv<R: Read>(&mut self, reader: R) -> Result<usize> {
        let mut csv_reader = csv_reader(reader);
        require_columns(&mut csv_reader, &["name"])?;
        let mut count = 0;

        for (row, record) in csv_reader.deserialize::<VertexRow>().enumerate() {
            let record = record.map_err(|e| row_error(row, e))?;
            self.graph.add_vertex(record.name)?;
            count += 1;
        }

        self.stats.vertices_imported += count;
        debug!(count, "导入顶点表");
        Ok(count)
    }

    /// 从 CSV 边表导入（表头 `from,to,weight`）
    ///
    /// 未出现过的顶点按首次出现的顺序自动创建。
    pub fn import_edges_csv<R: Read>(&mut self, reader: R) -> Result<usize> {
        let mut csv_reader = csv_reader(reader);
        require_columns(&mut csv_reader, &["from", "to", "weight"])?;
        let mut count = 0;

        for (row, record) in csv_reader.deserialize::<EdgeRow>().enumerate() {
            let record = record.map_err(|e| row_error(row, e))?;
            self.ensure_vertex(&record.from)?;
            self.ensure_vertex(&record.to)?;
            self.graph.add_edge(&record.from, &record.to, record.weight)?;
            count += 1;
        }

        self.stats.edges_imported += count;
        debug!(count, "导入边表");
        Ok(count)
    }

    /// 从 JSON 文档导入，顶点必须显式列出
    pub fn import_json<R: Read>(&mut self, reader: R) -> Result<()> {
        let document: NetworkDocument = serde_json::from_reader(reader)?;

        for name in document.vertices {
            self.graph.add_vertex(name)?;
            self.stats.vertices_imported += 1;
        }
        for edge in document.edges {
            self.graph.add_edge(&edge.from, &edge.to, edge.weight)?;
            self.stats.edges_imported += 1;
        }

        Ok(())
    }

    /// 完成导入，返回图和统计
    pub fn finish(self) -> (Graph, ImportStats) {
        (self.graph, self.stats)
    }

    fn ensure_vertex(&mut self, name: &str) -> Result<()> {
        if !self.graph.contains_vertex(name) {
            self.graph.add_vertex(name)?;
            self.stats.vertices_imported += 1;
        }
        Ok(())
    }
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}

/// 表头无法读取时返回 `Error::Csv`，缺列时返回 `Error::Import`
fn require_columns<R: Read>(reader: &mut csv::Reader<R>, columns: &[&str]) -> Result<()> {
    let headers = reader.headers()?;
    for column in columns {
        if !headers.iter().any(|h| h == *column) {
            return Err(Error::Import(format!("缺少列: {}", column)));
        }
    }
    Ok(())
}

/// 数据行号从 2 开始（第 1 行是表头）
fn row_error(row: usize, err: csv::Error) -> Error {
    Error::Import(format!("第 {} 行: {}", row + 2, err))
}

/// 从文件导入路网
///
/// `format` 为空时按扩展名推断；`vertices` 为可选的 CSV 顶点表，仅用于 CSV 边表。
pub fn load_network(
    path: &Path,
    vertices: Option<&Path>,
    format: Option<NetworkFormat>,
) -> Result<(Graph, ImportStats)> {
    let start = Instant::now();
    let format = match format.or_else(|| NetworkFormat::from_path(path)) {
        Some(format) => format,
        None => {
            return Err(Error::Import(format!(
                "无法从扩展名推断格式: {}",
                path.display()
            )))
        }
    };

    let mut importer = NetworkImporter::new();
    match format {
        NetworkFormat::Csv => {
            if let Some(vertices) = vertices {
                importer.import_vertices_csv(BufReader::new(File::open(vertices)?))?;
            }
            importer.import_edges_csv(BufReader::new(File::open(path)?))?;
        }
        NetworkFormat::Json => {
            if vertices.is_some() {
                return Err(Error::Import("JSON 文档不接受单独的顶点表".to_string()));
            }
            importer.import_json(BufReader::new(File::open(path)?))?;
        }
    }

    let (graph, mut stats) = importer.finish();
    stats.duration_ms = start.elapsed().as_millis() as u64;
    info!(
        path = %path.display(),
        vertices = stats.vertices_imported,
        edges = stats.edges_imported,
        duration_ms = stats.duration_ms,
        "路网导入完成"
    );

    Ok((graph, stats))
}
