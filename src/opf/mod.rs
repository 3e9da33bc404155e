//! OPF（Open Packaging Format）元数据解析模块
//!
//! 此模块提供OPF包文档中metadata元素的解析功能，包括渲染属性、
//! 主标题、唯一标识符和贡献者信息的提取与分类。

mod element;
mod error;
mod metadata;
mod package;
mod parser;
mod rendition;

// 重新导出公共类型以保持API兼容性
pub use element::Element;
pub use error::{OpfError, Result};
pub use metadata::{Contributor, Metadata, RoleBucket};
pub use package::Package;
pub use parser::MetadataParser;
pub use rendition::{
    Rendition, RenditionFlow, RenditionLayout, RenditionOrientation, RenditionSpread,
};
