//! 图核心模块
//!
//! 定义顶点、边和图的核心数据结构

mod edge;
mod graph;
mod shared;
mod vertex;

pub use edge::{Edge, Weight};
pub use graph::Graph;
pub use shared::SharedGraph;
pub use vertex::VertexKey;
