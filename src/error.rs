//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    UnknownVertex(String),

    #[error("顶点已存在: {0}")]
    DuplicateVertex(String),

    #[error("边已存在: {0} - {1}")]
    DuplicateEdge(String, String),

    #[error("无效的边权重 {from} - {to}: {weight}")]
    InvalidWeight { from: String, to: String, weight: f64 },

    #[error("不允许自环: {0}")]
    SelfLoop(String),

    #[error("导入错误: {0}")]
    Import(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV 错误: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON 错误: {0}")]
    Json(#[from] serde_json::Error),
}
