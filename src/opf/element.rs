//! XML元素树模块
//!
//! 提供一个只读的XML元素树结构，支持按标签名查找子元素、
//! 按属性集合查找后代元素等查询操作。所有元数据提取过程都
//! 基于此查询接口工作。

use crate::opf::error::{OpfError, Result};
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use std::collections::HashMap;

/// XML元素节点
///
/// 元素名和属性名均保留文档中书写的带前缀形式（如`dc:title`、`opf:role`），
/// 子元素保持文档顺序。
#[derive(Debug, Clone)]
pub struct Element {
    /// 元素名(带命名空间前缀)
    name: String,
    /// 元素自身的属性映射
    attributes: HashMap<String, String>,
    /// 子元素列表(文档顺序)
    children: Vec<Element>,
    /// 元素的直接文本内容(已去除首尾空白)
    text: String,
}

impl Element {
    /// 创建新的空元素
    pub fn new(name: String) -> Self {
        Self {
            name,
            attributes: HashMap::new(),
            children: Vec::new(),
            text: String::new(),
        }
    }

    /// 从XML字符串构建元素树
    ///
    /// # 参数
    /// * `xml_content` - XML文本内容
    ///
    /// # 返回值
    /// * `Result<Element>` - 根元素，XML中没有任何元素时返回错误
    pub fn from_xml(xml_content: &str) -> Result<Element> {
        let mut reader = Reader::from_str(xml_content);
        reader.config_mut().trim_text(true);
        reader.config_mut().expand_empty_elements = true;

        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event()? {
                Event::Start(ref e) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                    let mut element = Element::new(name);

                    for attr_result in e.attributes() {
                        let attr = attr_result
                            .map_err(|err| OpfError::XmlError(quick_xml::Error::InvalidAttr(err)))?;
                        let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
                        let value = String::from_utf8_lossy(&attr.value).to_string();
                        element.attributes.insert(key, value);
                    }

                    stack.push(element);
                }
                Event::Text(e) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&e.unescape()?);
                    }
                }
                Event::End(_) => {
                    if let Some(mut finished) = stack.pop() {
                        finished.text = finished.text.trim().to_string();
                        match stack.last_mut() {
                            Some(parent) => parent.children.push(finished),
                            // 只保留第一个顶层元素作为根
                            None if root.is_none() => root = Some(finished),
                            None => {}
                        }
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        root.ok_or_else(|| OpfError::InvalidPackage("XML中没有找到任何元素".to_string()))
    }

    /// 获取元素名
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 获取元素的直接文本内容
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 获取元素自身的属性映射
    pub fn attributes(&self) -> &HashMap<String, String> {
        &self.attributes
    }

    /// 获取指定名称的属性值
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|v| v.as_str())
    }

    /// 获取所有子元素(文档顺序)
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// 获取指定标签名的所有直接子元素(文档顺序)
    pub fn children_by_tag(&self, tag: &str) -> Vec<&Element> {
        self.children.iter().filter(|c| c.name == tag).collect()
    }

    /// 获取指定标签名的第一个直接子元素
    pub fn first_child_by_tag(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == tag)
    }

    /// 查找属性集合完全匹配的所有后代元素
    ///
    /// 返回所有满足条件的后代元素(深度优先，文档顺序)：
    /// 元素的属性映射中包含`pairs`里的每一对属性名→属性值。
    ///
    /// # 参数
    /// * `pairs` - 属性名和属性值的配对列表
    ///
    /// # 返回值
    /// * `Vec<&Element>` - 匹配的后代元素，没有匹配时为空列表
    pub fn descendants_with_attributes(&self, pairs: &[(&str, &str)]) -> Vec<&Element> {
        let mut result = Vec::new();
        for child in &self.children {
            child.collect_matching(pairs, &mut result);
        }
        result
    }

    /// 递归收集属性匹配的元素(包括自身)
    fn collect_matching<'a>(&'a self, pairs: &[(&str, &str)], result: &mut Vec<&'a Element>) {
        let matches = pairs
            .iter()
            .all(|(key, value)| self.attributes.get(*key).map(|v| v.as_str()) == Some(*value));
        if matches {
            result.push(self);
        }
        for child in &self.children {
            child.collect_matching(pairs, result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_XML: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<metadata xmlns:dc="http://purl.org/dc/elements/1.1/">
    <dc:title id="t1">第一个标题</dc:title>
    <dc:title id="t2">第二个标题</dc:title>
    <dc:creator opf:role="aut">作者 &amp; 朋友</dc:creator>
    <meta refines="#t2" property="title-type">main</meta>
    <meta property="rendition:layout">reflowable</meta>
</metadata>"##;

    #[test]
    fn test_from_xml_builds_tree() {
        let root = Element::from_xml(SAMPLE_XML).expect("构建元素树失败");

        assert_eq!(root.name(), "metadata");
        assert_eq!(root.children().len(), 5);
    }

    #[test]
    fn test_children_by_tag_preserves_order() {
        let root = Element::from_xml(SAMPLE_XML).unwrap();

        let titles = root.children_by_tag("dc:title");
        assert_eq!(titles.len(), 2);
        assert_eq!(titles[0].text(), "第一个标题");
        assert_eq!(titles[1].text(), "第二个标题");

        let first = root.first_child_by_tag("dc:title").unwrap();
        assert_eq!(first.attribute("id"), Some("t1"));
    }

    #[test]
    fn test_text_unescapes_entities() {
        let root = Element::from_xml(SAMPLE_XML).unwrap();

        let creator = root.first_child_by_tag("dc:creator").unwrap();
        assert_eq!(creator.text(), "作者 & 朋友");
        assert_eq!(creator.attribute("opf:role"), Some("aut"));
    }

    #[test]
    fn test_descendants_with_attributes() {
        let root = Element::from_xml(SAMPLE_XML).unwrap();

        let matches = root
            .descendants_with_attributes(&[("property", "title-type"), ("refines", "#t2")]);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name(), "meta");
        assert_eq!(matches[0].text(), "main");

        // 所有属性对都必须匹配
        let none = root
            .descendants_with_attributes(&[("property", "title-type"), ("refines", "#t1")]);
        assert!(none.is_empty());
    }

    #[test]
    fn test_descendants_searches_nested_levels() {
        let xml = r#"<root>
            <level1>
                <level2 property="rendition:spread">both</level2>
            </level1>
        </root>"#;
        let root = Element::from_xml(xml).unwrap();

        let matches = root.descendants_with_attributes(&[("property", "rendition:spread")]);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text(), "both");
    }

    #[test]
    fn test_empty_element_form() {
        // 自闭合标签也应正常进入元素树
        let xml = r#"<metadata><meta name="cover" content="cover.jpg"/></metadata>"#;
        let root = Element::from_xml(xml).unwrap();

        let meta = root.first_child_by_tag("meta").unwrap();
        assert_eq!(meta.attribute("content"), Some("cover.jpg"));
        assert_eq!(meta.text(), "");
    }

    #[test]
    fn test_from_xml_without_elements() {
        let result = Element::from_xml("   ");
        assert!(result.is_err());
    }
}
