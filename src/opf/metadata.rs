//! 元数据模块
//!
//! 提供OPF元数据的输出结构定义：标题、唯一标识符、渲染属性，
//! 以及按角色分类的贡献者列表。

use crate::opf::rendition::Rendition;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// 贡献者信息(作者、译者、编辑等)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contributor {
    /// 贡献者姓名
    pub name: String,
    /// 角色代码(如aut、trl、edt等)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// 排序用名称(来自opf:file-as属性)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_as: Option<String>,
}

impl Contributor {
    /// 创建新的贡献者
    pub fn new(name: String) -> Self {
        Self {
            name,
            role: None,
            sort_as: None,
        }
    }
}

/// 贡献者的目标分类桶
///
/// 每个贡献者最终恰好进入`Metadata`中的一个列表，
/// 进入哪个列表由此枚举决定。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleBucket {
    Authors,
    Translators,
    Artists,
    Editors,
    Illustrators,
    Colorists,
    Narrators,
    Publishers,
    Contributors,
}

/// 角色代码到分类桶的映射表(MARC relator代码的已知子集)
static ROLE_BUCKETS: Lazy<HashMap<&'static str, RoleBucket>> = Lazy::new(|| {
    HashMap::from([
        ("aut", RoleBucket::Authors),
        ("trl", RoleBucket::Translators),
        ("art", RoleBucket::Artists),
        ("edt", RoleBucket::Editors),
        ("ill", RoleBucket::Illustrators),
        ("clr", RoleBucket::Colorists),
        ("nrt", RoleBucket::Narrators),
        ("pbl", RoleBucket::Publishers),
    ])
});

impl RoleBucket {
    /// 根据角色代码查找目标分类桶
    ///
    /// 表中没有的角色代码一律归入通用贡献者桶。
    pub fn from_role_code(code: &str) -> Self {
        ROLE_BUCKETS
            .get(code)
            .copied()
            .unwrap_or(RoleBucket::Contributors)
    }
}

/// OPF包中的元数据信息
///
/// 各字段由元数据解析器的四个提取过程分别填充，
/// 贡献者列表保持文档顺序。
#[derive(Debug, Clone, Default, Serialize)]
pub struct Metadata {
    /// 主标题
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// 唯一标识符
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// 渲染属性
    pub rendition: Rendition,
    /// 作者列表
    pub authors: Vec<Contributor>,
    /// 译者列表
    pub translators: Vec<Contributor>,
    /// 美术列表
    pub artists: Vec<Contributor>,
    /// 编辑列表
    pub editors: Vec<Contributor>,
    /// 插画师列表
    pub illustrators: Vec<Contributor>,
    /// 上色师列表
    pub colorists: Vec<Contributor>,
    /// 朗读者列表
    pub narrators: Vec<Contributor>,
    /// 出版者列表
    pub publishers: Vec<Contributor>,
    /// 其他贡献者列表
    pub contributors: Vec<Contributor>,
}

impl Metadata {
    /// 创建新的空元数据实例
    pub fn new() -> Self {
        Self::default()
    }

    /// 将贡献者追加到指定分类桶的末尾
    ///
    /// 贡献者的所有权完全转移到对应列表中。
    pub fn push_contributor(&mut self, bucket: RoleBucket, contributor: Contributor) {
        let list = match bucket {
            RoleBucket::Authors => &mut self.authors,
            RoleBucket::Translators => &mut self.translators,
            RoleBucket::Artists => &mut self.artists,
            RoleBucket::Editors => &mut self.editors,
            RoleBucket::Illustrators => &mut self.illustrators,
            RoleBucket::Colorists => &mut self.colorists,
            RoleBucket::Narrators => &mut self.narrators,
            RoleBucket::Publishers => &mut self.publishers,
            RoleBucket::Contributors => &mut self.contributors,
        };
        list.push(contributor);
    }

    /// 统计所有分类桶中的贡献者总数
    pub fn contributor_count(&self) -> usize {
        self.authors.len()
            + self.translators.len()
            + self.artists.len()
            + self.editors.len()
            + self.illustrators.len()
            + self.colorists.len()
            + self.narrators.len()
            + self.publishers.len()
            + self.contributors.len()
    }
}
