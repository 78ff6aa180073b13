//! 顶点定义
//!
//! 顶点是用户提供的可比较、可哈希的值，按相等性区分身份

use std::fmt::Debug;
use std::hash::Hash;
use std::rc::Rc;
use std::sync::Arc;

/// 可作为顶点的类型
///
/// `is_absent` 表示"空"参数：带有空标记的值（如 `Option::None`）传入任何
/// 图操作都会得到 [`Error::InvalidArgument`](crate::Error::InvalidArgument)。
/// 自定义类型只需一个空 impl 即可作为顶点。
///
/// ```
/// use dwgraph::{Graph, VertexKey};
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct City(&'static str);
///
/// impl VertexKey for City {}
///
/// let mut graph = Graph::new();
/// assert!(graph.create_edge(City("Oslo"), City("Bergen"), 463).unwrap());
/// ```
pub trait VertexKey: Eq + Hash + Clone + Debug {
    /// 是否为空标记
    fn is_absent(&self) -> bool {
        false
    }
}

macro_rules! impl_vertex_key {
    ($($t:ty),* $(,)?) => {
        $(impl VertexKey for $t {})*
    };
}

impl_vertex_key!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char, bool, String,
    &'static str, Box<str>, Arc<str>, Rc<str>,
);

impl<T: VertexKey> VertexKey for Option<T> {
    fn is_absent(&self) -> bool {
        match self {
            Some(inner) => inner.is_absent(),
            None => true,
        }
    }
}

impl<A: VertexKey, B: VertexKey> VertexKey for (A, B) {
    fn is_absent(&self) -> bool {
        self.0.is_absent() || self.1.is_absent()
    }
}
