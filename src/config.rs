//! 图配置

/// 默认预分配顶点数
pub const DEFAULT_VERTEX_CAPACITY: usize = 16;

/// 构造图时使用的配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// 邻接表预分配的顶点数
    pub vertex_capacity: usize,
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置预分配顶点数
    pub fn with_vertex_capacity(mut self, capacity: usize) -> Self {
        self.vertex_capacity = capacity;
        self
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            vertex_capacity: DEFAULT_VERTEX_CAPACITY,
        }
    }
}
