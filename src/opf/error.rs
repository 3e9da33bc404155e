use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, OpfError>;

/// OPF相关的错误类型
#[derive(Error, Debug)]
pub enum OpfError {
    #[error("IO错误: {0}")]
    Io(#[from] io::Error),

    #[error("XML解析错误: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("文件不是有效的OPF包文档: {0}")]
    InvalidPackage(String),

    #[error("序列化错误: {0}")]
    SerializeError(String),
}
