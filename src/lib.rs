pub mod opf;

// === 核心API重新导出 ===

/// OPF包文档（主要接口）
pub use opf::Package;

/// 元数据解析器
pub use opf::MetadataParser;

/// 错误处理
pub use opf::{OpfError, Result};

// === 数据结构 ===

/// 元数据和贡献者信息
pub use opf::{Contributor, Metadata, RoleBucket};

/// 渲染属性
pub use opf::{
    Rendition,
    RenditionFlow,
    RenditionLayout,
    RenditionOrientation,
    RenditionSpread,
};

// === 底层组件（高级用法） ===

/// XML元素树
pub use opf::Element;

// === 库信息 ===

/// OpfMeta库的版本信息
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// OpfMeta库的描述
pub const DESCRIPTION: &str = "一个轻量、宽容的OPF元数据解析库";

/// 库的主页
pub const HOMEPAGE: &str = "https://github.com/FWW321/opfmeta";

// === 便捷函数 ===

/// 快速解析OPF包文档并提取元数据
///
/// 这是 `Package::parse_xml` 加 `parse_metadata` 的便捷包装函数。
///
/// # 参数
/// * `xml_content` - OPF文件的XML内容
///
/// # 返回值
/// * `Result<Metadata>` - 提取出的元数据
///
/// # 示例
///
/// ```rust
/// let opf = r#"<package version="3.0">
///     <metadata>
///         <dc:title>示例书籍</dc:title>
///     </metadata>
/// </package>"#;
///
/// let metadata = opfmeta::parse(opf)?;
/// assert_eq!(metadata.title, Some("示例书籍".to_string()));
/// # Ok::<(), opfmeta::OpfError>(())
/// ```
pub fn parse(xml_content: &str) -> Result<Metadata> {
    Ok(Package::parse_xml(xml_content)?.parse_metadata())
}

/// 快速打开OPF文件并提取元数据
///
/// 这是 `Package::from_path` 加 `parse_metadata` 的便捷包装函数。
///
/// # 参数
/// * `path` - OPF文件路径
///
/// # 返回值
/// * `Result<Metadata>` - 提取出的元数据
pub fn open<P: AsRef<std::path::Path>>(path: P) -> Result<Metadata> {
    Ok(Package::from_path(path)?.parse_metadata())
}
