//! Shared graph handle for multi-threaded callers.
//!
//! The whole graph sits behind one read-write lock. Cascading operations such as
//! `remove_vertex` and `divide_graph` touch many vertices, so they run under a
//! single write guard instead of per-vertex locks.

use super::graph::Graph;
use super::vertex::VertexKey;
use crate::error::Result;
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable handle to a graph guarded by a read-write lock.
#[derive(Debug)]
pub struct SharedGraph<V: VertexKey> {
    inner: Arc<RwLock<Graph<V>>>,
}

impl<V: VertexKey> SharedGraph<V> {
    pub fn new() -> Self {
        Self::from_graph(Graph::new())
    }

    /// Wrap an existing graph.
    pub fn from_graph(graph: Graph<V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    /// Run `f` with shared access. Readers may overlap each other but never a writer.
    pub fn read<R>(&self, f: impl FnOnce(&Graph<V>) -> R) -> R {
        let guard = self.inner.read();
        f(&*guard)
    }

    /// Run `f` with exclusive access.
    pub fn write<R>(&self, f: impl FnOnce(&mut Graph<V>) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut *guard)
    }

    /// Split `subset` off into a new shared graph under one write guard.
    pub fn divide_graph<I>(&self, subset: I) -> Result<SharedGraph<V>>
    where
        I: IntoIterator<Item = V>,
    {
        let divided = self.inner.write().divide_graph(subset)?;
        Ok(Self::from_graph(divided))
    }

    /// Number of live handles to this graph.
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Take the graph back out if this is the last handle.
    pub fn into_inner(self) -> std::result::Result<Graph<V>, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(lock) => Ok(lock.into_inner()),
            Err(inner) => Err(Self { inner }),
        }
    }
}

impl<V: VertexKey> Clone for SharedGraph<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V: VertexKey> Default for SharedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}
