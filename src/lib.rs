//! DWGraph - 有向带权图容器
//!
//! 通用的内存图数据结构，支持：
//! - 顶点和边的增删（创建边时自动创建端点，删除顶点时级联删除入边）
//! - 后继、前驱、边权重查询
//! - 按顶点子集划分出新图
//! - 通过单一读写锁共享给多个线程

pub mod config;
pub mod error;
pub mod graph;

// 重导出常用类型
pub use config::GraphConfig;
pub use error::{Error, Result};
pub use graph::{Edge, Graph, SharedGraph, VertexKey, Weight};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
