//! 结果打印器
//!
//! 把报告数据渲染为表格或 JSON

use crate::error::Result;
use crate::report::{DegreeTable, DistanceTable, NetworkReport, NetworkSnapshot, PathReport};
use crate::types::Weight;
use prettytable::{format, row, Cell, Row, Table};
use serde::Serialize;

/// 输出模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// 表格模式
    #[default]
    Table,
    /// JSON 模式（供外部展示层消费）
    Json,
}

/// 结果打印器
#[derive(Debug, Clone, Copy, Default)]
pub struct Printer {
    mode: OutputMode,
}

impl Printer {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// 设置输出模式
    pub fn set_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// 打印规模统计
    pub fn print_stats(&self, snapshot: &NetworkSnapshot) -> Result<String> {
        self.render(snapshot, || {
            let mut table = new_table();
            table.set_titles(row!["Property", "Value"]);
            table.add_row(row!["Vertex Count", snapshot.vertex_count]);
            table.add_row(row!["Edge Count", snapshot.edge_count]);
            table.to_string()
        })
    }

    /// 打印边列表
    pub fn print_edges(&self, snapshot: &NetworkSnapshot) -> Result<String> {
        self.render(snapshot, || {
            let mut table = new_table();
            table.set_titles(row!["From", "To", "Weight"]);
            for edge in &snapshot.edges {
                table.add_row(row![edge.from, edge.to, format_weight(edge.weight)]);
            }
            table.to_string()
        })
    }

    /// 打印度数表
    pub fn print_degrees(&self, degrees: &DegreeTable) -> Result<String> {
        self.render(degrees, || {
            let mut table = new_table();
            table.set_titles(row!["Vertex", "Degree"]);
            for (name, degree) in &degrees.degrees {
                table.add_row(row![name, degree]);
            }
            table.to_string()
        })
    }

    /// 打印单条路径
    pub fn print_path(&self, report: &PathReport) -> Result<String> {
        self.render(report, || match &report.path {
            Some(path) => format!(
                "{} 路径 {} -> {}: {}\n  跳数: {}, 总权重: {}\n",
                report.algorithm,
                report.start,
                report.goal,
                format_path(path),
                report.hops.unwrap_or(0),
                format_weight(report.total_weight.unwrap_or(0.0)),
            ),
            None => format!(
                "{} 路径 {} -> {}: 未找到路径\n",
                report.algorithm, report.start, report.goal
            ),
        })
    }

    /// 打印全源最短路径表
    pub fn print_distance_table(&self, table: &DistanceTable) -> Result<String> {
        self.render(table, || {
            let mut out = new_table();
            out.set_titles(row!["Source", "Target", "Distance", "Path"]);
            for entry in &table.entries {
                let distance = entry
                    .distance
                    .map(format_weight)
                    .unwrap_or_else(|| "∞".to_string());
                let path = entry
                    .path
                    .as_deref()
                    .map(format_path)
                    .unwrap_or_else(|| "-".to_string());
                out.add_row(Row::new(vec![
                    Cell::new(&entry.source),
                    Cell::new(&entry.target),
                    Cell::new(&distance),
                    Cell::new(&path),
                ]));
            }
            out.to_string()
        })
    }

    /// 打印完整报告
    pub fn print_report(&self, report: &NetworkReport) -> Result<String> {
        if self.mode == OutputMode::Json {
            return Ok(serde_json::to_string_pretty(report)?);
        }

        let mut output = String::new();
        output.push_str(&self.print_stats(&report.network)?);
        output.push('\n');
        output.push_str(&self.print_degrees(&report.degrees)?);
        output.push('\n');
        output.push_str(&self.print_path(&report.bfs)?);
        output.push_str(&self.print_path(&report.dfs)?);
        output.push('\n');
        output.push_str(&self.print_distance_table(&report.shortest_paths)?);
        Ok(output)
    }

    fn render<T, F>(&self, value: &T, table: F) -> Result<String>
    where
        T: Serialize,
        F: FnOnce() -> String,
    {
        match self.mode {
            OutputMode::Table => Ok(table()),
            OutputMode::Json => Ok(serde_json::to_string_pretty(value)?),
        }
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table
}

/// 顶点序列显示为 `A -> B -> C`
pub fn format_path(path: &[String]) -> String {
    path.join(" -> ")
}

/// 整数权重不带小数点
pub fn format_weight(weight: Weight) -> String {
    if !weight.is_finite() {
        "∞".to_string()
    } else if weight.fract() == 0.0 {
        format!("{:.0}", weight)
    } else {
        format!("{:.2}", weight)
    }
}
