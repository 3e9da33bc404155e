//! 渲染属性模块
//!
//! 提供EPUB3渲染提示（rendition:*属性）的结构定义，
//! 包括布局、翻页方式、屏幕方向、跨页显示和视口等信息。

use serde::Serialize;

/// 布局方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenditionLayout {
    /// 可重排布局
    Reflowable,
    /// 固定布局
    PrePaginated,
}

impl RenditionLayout {
    /// 从原始字符串解析布局方式，无法识别时返回None
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "reflowable" => Some(Self::Reflowable),
            "pre-paginated" => Some(Self::PrePaginated),
            _ => None,
        }
    }

    /// 获取规范中定义的字符串值
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reflowable => "reflowable",
            Self::PrePaginated => "pre-paginated",
        }
    }
}

/// 翻页方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenditionFlow {
    /// 分页显示
    Paginated,
    /// 连续滚动
    ScrolledContinuous,
    /// 按文档滚动
    ScrolledDoc,
    /// 由阅读系统决定
    Auto,
}

impl RenditionFlow {
    /// 从原始字符串解析翻页方式，无法识别时返回None
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "paginated" => Some(Self::Paginated),
            "scrolled-continuous" => Some(Self::ScrolledContinuous),
            "scrolled-doc" => Some(Self::ScrolledDoc),
            "auto" => Some(Self::Auto),
            _ => None,
        }
    }

    /// 获取规范中定义的字符串值
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paginated => "paginated",
            Self::ScrolledContinuous => "scrolled-continuous",
            Self::ScrolledDoc => "scrolled-doc",
            Self::Auto => "auto",
        }
    }
}

/// 屏幕方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenditionOrientation {
    /// 横屏
    Landscape,
    /// 竖屏
    Portrait,
    /// 由阅读系统决定
    Auto,
}

impl RenditionOrientation {
    /// 从原始字符串解析屏幕方向，无法识别时返回None
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "landscape" => Some(Self::Landscape),
            "portrait" => Some(Self::Portrait),
            "auto" => Some(Self::Auto),
            _ => None,
        }
    }

    /// 获取规范中定义的字符串值
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
            Self::Auto => "auto",
        }
    }
}

/// 跨页显示方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenditionSpread {
    /// 不使用跨页
    None,
    /// 仅横屏时跨页
    Landscape,
    /// 仅竖屏时跨页
    Portrait,
    /// 横竖屏均跨页
    Both,
    /// 由阅读系统决定
    Auto,
}

impl RenditionSpread {
    /// 从原始字符串解析跨页方式，无法识别时返回None
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "none" => Some(Self::None),
            "landscape" => Some(Self::Landscape),
            "portrait" => Some(Self::Portrait),
            "both" => Some(Self::Both),
            "auto" => Some(Self::Auto),
            _ => None,
        }
    }

    /// 获取规范中定义的字符串值
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
            Self::Both => "both",
            Self::Auto => "auto",
        }
    }
}

/// 渲染属性集合，每个字段互相独立且均为可选
#[derive(Debug, Clone, Default, Serialize)]
pub struct Rendition {
    /// 布局方式
    pub layout: Option<RenditionLayout>,
    /// 翻页方式
    pub flow: Option<RenditionFlow>,
    /// 屏幕方向
    pub orientation: Option<RenditionOrientation>,
    /// 跨页显示方式
    pub spread: Option<RenditionSpread>,
    /// 视口(自由格式字符串，原样保存)
    pub viewport: Option<String>,
}
