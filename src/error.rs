//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// 图操作的硬错误
///
/// 顶点不存在、边不存在、负权重都不是错误，通过 `bool` / `Option` 返回值表达。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("无效参数: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// 参数为空标记时的错误
    pub(crate) fn absent(arg: &str) -> Self {
        Error::InvalidArgument(format!("参数 `{}` 为空", arg))
    }
}
