//! 图数据结构
//!
//! 邻接表实现的有向带权图：顶点映射到其有序出边列表

use super::edge::{Edge, Weight};
use super::vertex::VertexKey;
use crate::config::GraphConfig;
use crate::error::{Error, Result};
use indexmap::{IndexMap, IndexSet};
use smallvec::SmallVec;
use std::fmt;
use tracing::{debug, info, warn};

/// 单个顶点的出边列表
type EdgeList<V> = SmallVec<[Edge<V>; 4]>;

/// 有向带权图
///
/// 保证以下不变量：
/// - 每条边的目标顶点都存在于图中（创建边时自动创建端点，删除顶点时级联删除入边）
/// - 边权重非负
/// - 同一有序顶点对之间至多一条边
///
/// 顶点和出边都保持插入顺序，`Display` 输出因此是确定的。
/// 本结构不做任何同步，并发访问请使用 [`SharedGraph`](super::SharedGraph)。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<V: VertexKey> {
    /// 邻接表
    adjacency: IndexMap<V, EdgeList<V>>,
}

impl<V: VertexKey> Graph<V> {
    /// 创建空图
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// 按配置创建空图
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            adjacency: IndexMap::with_capacity(config.vertex_capacity),
        }
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    ///
    /// 顶点已存在时返回 `false` 且不做任何修改。
    pub fn create_vertex(&mut self, vertex: V) -> Result<bool> {
        check_present(&vertex, "vertex")?;

        if self.adjacency.contains_key(&vertex) {
            return Ok(false);
        }
        self.insert_vertex(vertex);
        Ok(true)
    }

    /// 顶点是否存在
    pub fn is_vertex(&self, vertex: &V) -> Result<bool> {
        check_present(vertex, "vertex")?;
        Ok(self.adjacency.contains_key(vertex))
    }

    /// 获取所有顶点（快照，按插入顺序）
    pub fn vertices(&self) -> Vec<V> {
        self.adjacency.keys().cloned().collect()
    }

    /// 删除顶点，并删除所有指向它的边
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<bool> {
        check_present(vertex, "vertex")?;

        if self.adjacency.shift_remove(vertex).is_none() {
            return Ok(false);
        }

        let mut cascaded = 0;
        for edges in self.adjacency.values_mut() {
            let before = edges.len();
            edges.retain(|e| !e.points_to(vertex));
            cascaded += before - edges.len();
        }

        debug!(vertex = ?vertex, cascaded, "删除顶点");
        Ok(true)
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    // ==================== 边操作 ====================

    /// 添加边
    ///
    /// 权重为负时返回 `false`，不创建任何顶点或边。否则缺失的端点会被自动创建，
    /// 已存在的 `source -> target` 边只覆盖权重。
    pub fn create_edge(&mut self, source: V, target: V, weight: i64) -> Result<bool> {
        check_present(&source, "source")?;
        check_present(&target, "target")?;

        let Ok(weight) = Weight::try_from(weight) else {
            debug!(source = ?source, target = ?target, weight, "拒绝负权重");
            return Ok(false);
        };

        self.insert_edge(source, target, weight);
        Ok(true)
    }

    /// 获取边的权重，边不存在时返回 `None`
    pub fn edge_cost(&self, source: &V, target: &V) -> Result<Option<Weight>> {
        check_present(source, "source")?;
        check_present(target, "target")?;

        Ok(self
            .adjacency
            .get(source)
            .and_then(|edges| edges.iter().find(|e| e.points_to(target)))
            .map(Edge::weight))
    }

    /// 删除边
    pub fn remove_edge(&mut self, source: &V, target: &V) -> Result<bool> {
        check_present(source, "source")?;
        check_present(target, "target")?;

        if !self.is_edge(source, target) {
            return Ok(false);
        }
        if let Some(edges) = self.adjacency.get_mut(source) {
            edges.retain(|e| !e.points_to(target));
        }

        debug!(source = ?source, target = ?target, "删除边");
        Ok(true)
    }

    /// 获取顶点的出边
    pub fn outgoing_edges(&self, vertex: &V) -> Result<Option<&[Edge<V>]>> {
        check_present(vertex, "vertex")?;
        Ok(self.adjacency.get(vertex).map(|edges| edges.as_slice()))
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }

    // ==================== 邻居查询 ====================

    /// 获取顶点的后继（出边指向的顶点），顶点不存在时返回 `None`
    pub fn adjacent_vertices(&self, vertex: &V) -> Result<Option<Vec<V>>> {
        check_present(vertex, "vertex")?;

        Ok(self
            .adjacency
            .get(vertex)
            .map(|edges| edges.iter().map(|e| e.target().clone()).collect()))
    }

    /// 获取顶点的前驱（有边指向它的顶点），没有前驱时返回 `None`
    pub fn predecessors_of_vertex(&self, vertex: &V) -> Result<Option<Vec<V>>> {
        check_present(vertex, "vertex")?;

        let predecessors: Vec<V> = self
            .adjacency
            .iter()
            .filter(|(_, edges)| edges.iter().any(|e| e.points_to(vertex)))
            .map(|(source, _)| source.clone())
            .collect();

        if predecessors.is_empty() {
            Ok(None)
        } else {
            Ok(Some(predecessors))
        }
    }

    /// 获取顶点的出度
    pub fn out_degree(&self, vertex: &V) -> Result<Option<usize>> {
        check_present(vertex, "vertex")?;
        Ok(self.adjacency.get(vertex).map(|edges| edges.len()))
    }

    /// 获取顶点的入度
    pub fn in_degree(&self, vertex: &V) -> Result<usize> {
        check_present(vertex, "vertex")?;
        Ok(self
            .adjacency
            .values()
            .filter(|edges| edges.iter().any(|e| e.points_to(vertex)))
            .count())
    }

    /// 按插入顺序遍历顶点及其出边
    pub fn iter(&self) -> impl Iterator<Item = (&V, &[Edge<V>])> {
        self.adjacency
            .iter()
            .map(|(vertex, edges)| (vertex, edges.as_slice()))
    }

    /// 清空图
    pub fn clear(&mut self) {
        self.adjacency.clear();
    }

    // ==================== 图划分 ====================

    /// 将子集划分到新图
    ///
    /// 子集中的顶点只有在至少有一条边指向子集内另一个顶点时才会被移动：
    /// 这些内部边被复制到新图，该顶点随后从当前图删除，它的其他出边（指向子集外）
    /// 在两张图中都不保留。没有内部边的子集顶点留在当前图中不变。
    /// 被内部边指向的顶点会在新图中出现，但只有它自身有内部边时才会离开当前图。
    ///
    /// 子集中任何一个空标记都会导致 `InvalidArgument`，此时两张图都不会被修改。
    pub fn divide_graph<I>(&mut self, subset: I) -> Result<Graph<V>>
    where
        I: IntoIterator<Item = V>,
    {
        let members: IndexSet<V> = subset.into_iter().collect();
        if members.iter().any(|v| v.is_absent()) {
            warn!("划分子集中包含空参数");
            return Err(Error::absent("subset"));
        }

        let mut divided =
            Graph::with_config(GraphConfig::default().with_vertex_capacity(members.len()));
        let mut moved = Vec::new();

        for vertex in &members {
            let Some(edges) = self.adjacency.get(vertex) else {
                continue;
            };

            let inserted = divided.create_vertex(vertex.clone())?;
            let mut copied = 0usize;
            for edge in edges.iter().filter(|e| members.contains(e.target())) {
                divided.insert_edge(vertex.clone(), edge.target().clone(), edge.weight());
                copied += 1;
            }

            if copied > 0 {
                moved.push(vertex.clone());
            } else if inserted {
                divided.remove_vertex(vertex)?;
            }
        }

        for vertex in &moved {
            self.remove_vertex(vertex)?;
        }

        info!(
            requested = members.len(),
            moved = moved.len(),
            divided_vertices = divided.vertex_count(),
            "图划分完成"
        );
        Ok(divided)
    }

    // ==================== 内部辅助 ====================

    fn insert_vertex(&mut self, vertex: V) {
        debug!(vertex = ?vertex, "创建顶点");
        self.adjacency.insert(vertex, EdgeList::new());
    }

    /// 确保两个端点都存在后插入或覆盖边
    fn insert_edge(&mut self, source: V, target: V, weight: Weight) {
        if !self.adjacency.contains_key(&source) {
            self.insert_vertex(source.clone());
        }
        if !self.adjacency.contains_key(&target) {
            self.insert_vertex(target.clone());
        }

        debug!(source = ?source, target = ?target, weight, "创建边");
        let edges = self.adjacency.entry(source).or_default();
        match edges.iter_mut().find(|e| e.points_to(&target)) {
            Some(edge) => edge.set_weight(weight),
            None => edges.push(Edge::new(weight, target)),
        }
    }

    fn is_edge(&self, source: &V, target: &V) -> bool {
        self.adjacency
            .get(source)
            .is_some_and(|edges| edges.iter().any(|e| e.points_to(target)))
    }
}

impl<V: VertexKey> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// 调试输出：`a: a -(1)-> b,a -(2)-> c,| b: | c: | `
impl<V: VertexKey + fmt::Display> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, edges) in &self.adjacency {
            write!(f, "{}: ", vertex)?;
            for edge in edges {
                write!(f, "{} -({})-> {},", vertex, edge.weight(), edge.target())?;
            }
            f.write_str("| ")?;
        }
        Ok(())
    }
}

fn check_present<V: VertexKey>(vertex: &V, arg: &str) -> Result<()> {
    if vertex.is_absent() {
        warn!(argument = arg, "拒绝空参数");
        return Err(Error::absent(arg));
    }
    Ok(())
}
