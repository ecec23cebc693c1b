use thiserror::Error;

/// 剧本处理错误
///
/// 解析本身是全函数，对任意文本都返回结果；会失败的只有写出。
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),
}

pub type ScriptResult<T> = Result<T, ScriptError>;
