//! 元数据解析器模块
//!
//! 提供OPF包`<metadata>`元素的四个独立提取过程：
//! 渲染属性提取、主标题解析、唯一标识符解析、贡献者构建与分类。
//! 所有过程都是无状态的纯转换，对缺失或无法识别的数据宽容处理，
//! 不会产生致命错误。

use crate::opf::element::Element;
use crate::opf::metadata::{Contributor, Metadata, RoleBucket};
use crate::opf::rendition::{
    RenditionFlow, RenditionLayout, RenditionOrientation, RenditionSpread,
};
use std::collections::HashMap;

// 规范中定义的固定词汇表
const TAG_TITLE: &str = "dc:title";
const TAG_IDENTIFIER: &str = "dc:identifier";
pub(crate) const TAG_CREATOR: &str = "dc:creator";
pub(crate) const TAG_CONTRIBUTOR: &str = "dc:contributor";

const ATTR_ID: &str = "id";
const ATTR_REFINES: &str = "refines";
const ATTR_PROPERTY: &str = "property";
const ATTR_ROLE: &str = "opf:role";
const ATTR_FILE_AS: &str = "opf:file-as";
const ATTR_UNIQUE_IDENTIFIER: &str = "unique-identifier";

const PROPERTY_TITLE_TYPE: &str = "title-type";
const PROPERTY_ROLE: &str = "role";
const TITLE_TYPE_MAIN: &str = "main";

const PROPERTY_RENDITION_LAYOUT: &str = "rendition:layout";
const PROPERTY_RENDITION_FLOW: &str = "rendition:flow";
const PROPERTY_RENDITION_ORIENTATION: &str = "rendition:orientation";
const PROPERTY_RENDITION_SPREAD: &str = "rendition:spread";
const PROPERTY_RENDITION_VIEWPORT: &str = "rendition:viewport";

/// 元数据解析器
///
/// 四个提取过程互相独立，除贡献者构建需要对每个creator/contributor
/// 元素各调用一次外，调用顺序不影响结果。
pub struct MetadataParser;

impl MetadataParser {
    /// 提取渲染属性并写入元数据
    ///
    /// 对五个已知的rendition:*属性名，分别查找property属性匹配的
    /// 第一个后代元素并取其文本。viewport原样保存；其余四个属性
    /// 按精确字符串匹配映射到对应枚举，无法识别的值保持字段未设置。
    ///
    /// # 参数
    /// * `metadata_element` - OPF包的metadata元素
    /// * `metadata` - 待填充的元数据实例
    pub fn set_rendition_properties(metadata_element: &Element, metadata: &mut Metadata) {
        if let Some(raw) = Self::first_property_text(metadata_element, PROPERTY_RENDITION_LAYOUT) {
            metadata.rendition.layout = RenditionLayout::from_raw(raw);
        }
        if let Some(raw) = Self::first_property_text(metadata_element, PROPERTY_RENDITION_FLOW) {
            metadata.rendition.flow = RenditionFlow::from_raw(raw);
        }
        if let Some(raw) =
            Self::first_property_text(metadata_element, PROPERTY_RENDITION_ORIENTATION)
        {
            metadata.rendition.orientation = RenditionOrientation::from_raw(raw);
        }
        if let Some(raw) = Self::first_property_text(metadata_element, PROPERTY_RENDITION_SPREAD) {
            metadata.rendition.spread = RenditionSpread::from_raw(raw);
        }
        if let Some(raw) = Self::first_property_text(metadata_element, PROPERTY_RENDITION_VIEWPORT)
        {
            metadata.rendition.viewport = Some(raw.to_string());
        }
    }

    /// 查找property属性等于指定值的第一个后代元素的文本
    fn first_property_text<'a>(metadata_element: &'a Element, property: &str) -> Option<&'a str> {
        metadata_element
            .descendants_with_attributes(&[(ATTR_PROPERTY, property)])
            .first()
            .map(|element| element.text())
    }

    /// 解析主标题
    ///
    /// 只有一个dc:title、或者EPUB版本不是3时，直接返回第一个标题。
    /// EPUB3且存在多个标题时，按文档顺序查找第一个被
    /// `<meta property="title-type" refines="#id">main</meta>`
    /// 标注为主标题的dc:title；没有任何标题通过该检查时返回None，
    /// 此分支不回退到第一个标题。
    ///
    /// # 参数
    /// * `metadata_element` - OPF包的metadata元素
    /// * `epub_version` - 声明的EPUB主版本号，缺失时为None
    ///
    /// # 返回值
    /// * `Option<String>` - 主标题文本，没有标题时返回None
    pub fn parse_main_title(
        metadata_element: &Element,
        epub_version: Option<u32>,
    ) -> Option<String> {
        let titles = metadata_element.children_by_tag(TAG_TITLE);
        let first = titles.first()?;

        if titles.len() == 1 || epub_version != Some(3) {
            return Some(first.text().to_string());
        }

        titles
            .iter()
            .find(|title| Self::is_main_title(metadata_element, title))
            .map(|title| title.text().to_string())
    }

    /// 检查标题元素是否被refines元数据标注为主标题
    fn is_main_title(metadata_element: &Element, title: &Element) -> bool {
        let Some(id) = title.attribute(ATTR_ID) else {
            return false;
        };
        let refines = format!("#{}", id);

        metadata_element
            .descendants_with_attributes(&[
                (ATTR_PROPERTY, PROPERTY_TITLE_TYPE),
                (ATTR_REFINES, refines.as_str()),
            ])
            .first()
            .is_some_and(|meta| meta.text() == TITLE_TYPE_MAIN)
    }

    /// 解析唯一标识符
    ///
    /// 存在多个dc:identifier且package元素声明了unique-identifier属性时，
    /// 返回id属性与之匹配的第一个标识符；否则回退到第一个标识符。
    ///
    /// # 参数
    /// * `metadata_element` - OPF包的metadata元素
    /// * `package_attributes` - package元素自身的属性映射
    ///
    /// # 返回值
    /// * `Option<String>` - 标识符文本，没有标识符时返回None
    pub fn parse_unique_identifier(
        metadata_element: &Element,
        package_attributes: &HashMap<String, String>,
    ) -> Option<String> {
        let identifiers = metadata_element.children_by_tag(TAG_IDENTIFIER);
        let first = identifiers.first()?;

        if identifiers.len() > 1 {
            if let Some(unique_id) = package_attributes.get(ATTR_UNIQUE_IDENTIFIER) {
                if let Some(matching) = identifiers
                    .iter()
                    .find(|identifier| identifier.attribute(ATTR_ID) == Some(unique_id.as_str()))
                {
                    return Some(matching.text().to_string());
                }
            }
        }

        Some(first.text().to_string())
    }

    /// 构建贡献者记录
    ///
    /// 姓名取自元素文本，角色取自opf:role属性，排序名取自opf:file-as属性。
    /// EPUB3下若元素带有id且存在`<meta property="role" refines="#id">`，
    /// 该meta的文本会覆盖属性中的角色（refines元数据优先）。
    ///
    /// # 参数
    /// * `element` - dc:creator或dc:contributor元素
    /// * `metadata_element` - OPF包的metadata元素(用于refines查找)
    /// * `epub_version` - 声明的EPUB主版本号
    ///
    /// # 返回值
    /// * `Contributor` - 构建完成的贡献者记录
    pub fn create_contributor(
        element: &Element,
        metadata_element: &Element,
        epub_version: Option<u32>,
    ) -> Contributor {
        let mut contributor = Contributor::new(element.text().to_string());
        contributor.role = element.attribute(ATTR_ROLE).map(str::to_string);
        contributor.sort_as = element.attribute(ATTR_FILE_AS).map(str::to_string);

        if epub_version == Some(3) {
            if let Some(id) = element.attribute(ATTR_ID) {
                let refines = format!("#{}", id);
                if let Some(meta) = metadata_element
                    .descendants_with_attributes(&[
                        (ATTR_PROPERTY, PROPERTY_ROLE),
                        (ATTR_REFINES, refines.as_str()),
                    ])
                    .first()
                {
                    contributor.role = Some(meta.text().to_string());
                }
            }
        }

        contributor
    }

    /// 构建贡献者并归入对应的分类桶
    ///
    /// 有角色时通过角色代码表决定分类桶，表中没有的角色归入
    /// 通用贡献者桶；完全没有角色时按元素标签回退：dc:creator
    /// 归入作者，dc:contributor归入通用贡献者。每个元素恰好
    /// 产生一个贡献者并恰好进入一个桶。
    ///
    /// # 参数
    /// * `element` - dc:creator或dc:contributor元素
    /// * `metadata_element` - OPF包的metadata元素
    /// * `metadata` - 待填充的元数据实例
    /// * `epub_version` - 声明的EPUB主版本号
    pub fn parse_contributor(
        element: &Element,
        metadata_element: &Element,
        metadata: &mut Metadata,
        epub_version: Option<u32>,
    ) {
        let contributor = Self::create_contributor(element, metadata_element, epub_version);

        let bucket = match &contributor.role {
            Some(role) => RoleBucket::from_role_code(role),
            None if element.name() == TAG_CREATOR => RoleBucket::Authors,
            None => RoleBucket::Contributors,
        };

        metadata.push_contributor(bucket, contributor);
    }
}
