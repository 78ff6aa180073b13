//! 边定义
//!
//! 边只存在于源顶点的出边列表中，不能独立寻址

use crate::graph::vertex::VertexKey;

/// 边权重（非负）
pub type Weight = u64;

/// 出边：权重 + 目标顶点
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<V> {
    /// 权重
    weight: Weight,
    /// 目标顶点
    target: V,
}

impl<V: VertexKey> Edge<V> {
    /// 创建新边
    pub fn new(weight: Weight, target: V) -> Self {
        Self { weight, target }
    }

    /// 获取权重
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// 获取目标顶点
    pub fn target(&self) -> &V {
        &self.target
    }

    /// 是否指向给定顶点
    pub fn points_to(&self, vertex: &V) -> bool {
        self.target == *vertex
    }

    /// 覆盖权重
    pub(crate) fn set_weight(&mut self, weight: Weight) {
        self.weight = weight;
    }
}
