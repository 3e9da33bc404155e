//! OPF包模块
//!
//! 提供package元素的轻量包装，向元数据解析器提供其契约所需的
//! 输入：metadata元素、package自身的属性映射以及声明的EPUB版本。
//! 清单(manifest)、脊柱(spine)等其他部分不在处理范围内。

use crate::opf::element::Element;
use crate::opf::error::{OpfError, Result};
use crate::opf::metadata::Metadata;
use crate::opf::parser::{MetadataParser, TAG_CONTRIBUTOR, TAG_CREATOR};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// OPF包文档
#[derive(Debug, Clone)]
pub struct Package {
    /// 解析后的package根元素
    root: Element,
}

impl Package {
    /// 解析OPF包文档的XML内容
    ///
    /// # 参数
    /// * `xml_content` - OPF文件的XML内容
    ///
    /// # 返回值
    /// * `Result<Package>` - 成功返回Package实例，根元素不是package时返回错误
    pub fn parse_xml(xml_content: &str) -> Result<Package> {
        let root = Element::from_xml(xml_content)?;
        if root.name() != "package" {
            return Err(OpfError::InvalidPackage(format!(
                "根元素不是package: {}",
                root.name()
            )));
        }
        Ok(Package { root })
    }

    /// 从文件路径读取并解析OPF包文档
    ///
    /// # 参数
    /// * `path` - OPF文件路径
    ///
    /// # 返回值
    /// * `Result<Package>` - 成功返回Package实例，失败返回错误
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Package> {
        let content = fs::read_to_string(path)?;
        Self::parse_xml(&content)
    }

    /// 获取package元素自身的属性映射
    pub fn attributes(&self) -> &HashMap<String, String> {
        self.root.attributes()
    }

    /// 获取version属性的原始值
    pub fn version(&self) -> Option<&str> {
        self.root.attribute("version")
    }

    /// 获取声明的EPUB主版本号
    ///
    /// 从version属性解析主版本(如"3.0"解析为3)，
    /// 属性缺失或无法解析时返回None。
    pub fn epub_version(&self) -> Option<u32> {
        self.version()?
            .split('.')
            .next()
            .and_then(|major| major.trim().parse::<u32>().ok())
    }

    /// 获取metadata子元素
    pub fn metadata_element(&self) -> Option<&Element> {
        self.root.first_child_by_tag("metadata")
    }

    /// 提取包中的全部元数据
    ///
    /// 依次运行四个提取过程：渲染属性、主标题、唯一标识符，
    /// 以及对每个dc:creator/dc:contributor子元素的贡献者分类。
    /// 没有metadata元素时返回空的元数据实例。
    ///
    /// # 返回值
    /// * `Metadata` - 填充完成的元数据
    pub fn parse_metadata(&self) -> Metadata {
        let mut metadata = Metadata::new();
        let Some(metadata_element) = self.metadata_element() else {
            return metadata;
        };
        let epub_version = self.epub_version();

        MetadataParser::set_rendition_properties(metadata_element, &mut metadata);
        metadata.title = MetadataParser::parse_main_title(metadata_element, epub_version);
        metadata.identifier =
            MetadataParser::parse_unique_identifier(metadata_element, self.attributes());

        for child in metadata_element.children() {
            if child.name() == TAG_CREATOR || child.name() == TAG_CONTRIBUTOR {
                MetadataParser::parse_contributor(
                    child,
                    metadata_element,
                    &mut metadata,
                    epub_version,
                );
            }
        }

        metadata
    }
}
