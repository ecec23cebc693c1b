use serde::{Deserialize, Serialize};

/// 剧本元素类型
///
/// 除了固定的结构类型之外，标题页字段使用 `HeaderField`，
/// 其参数是规范化后的字段名（Title/Credit/Author 或自定义键名原文）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    SceneHeading,
    Action,
    Speaker,
    Dialogue,
    Parenthetical,
    Transition,
    Centered,
    Lyrics,
    Section,
    Synopsis,
    Empty,
    PageBreak,
    /// 标题页开始标记
    HeaderBlockStart,
    /// 标题页里 Title/Credit/Author 之外字段的分段标记
    HeaderMetaBreak,
    DualOpen,
    DualNext,
    DualClose,
    /// 标题页字段（字段名作为参数）
    HeaderField(String),
}

impl ElementKind {
    /// lex 格式里对应的标签名
    pub fn lex_tag(&self) -> &str {
        match self {
            ElementKind::SceneHeading => "scene",
            ElementKind::Action => "action",
            ElementKind::Speaker => "speaker",
            ElementKind::Dialogue => "dialog",
            ElementKind::Parenthetical => "paren",
            ElementKind::Transition => "trans",
            ElementKind::Centered => "center",
            ElementKind::Lyrics => "lyrics",
            ElementKind::Section => "section",
            ElementKind::Synopsis => "synopse",
            ElementKind::Empty => "empty",
            ElementKind::PageBreak => "newpage",
            ElementKind::HeaderBlockStart => "titlepage",
            ElementKind::HeaderMetaBreak => "metasection",
            ElementKind::DualOpen => "dualspeaker_open",
            ElementKind::DualNext => "dualspeaker_next",
            ElementKind::DualClose => "dualspeaker_close",
            ElementKind::HeaderField(name) => name,
        }
    }

    /// 从 lex 标签还原类型。未知标签一律当作标题页字段透传。
    pub fn from_lex_tag(tag: &str) -> ElementKind {
        match tag {
            "scene" => ElementKind::SceneHeading,
            "action" => ElementKind::Action,
            "speaker" => ElementKind::Speaker,
            "dialog" => ElementKind::Dialogue,
            "paren" => ElementKind::Parenthetical,
            "trans" => ElementKind::Transition,
            "center" => ElementKind::Centered,
            "lyrics" => ElementKind::Lyrics,
            "section" => ElementKind::Section,
            "synopse" => ElementKind::Synopsis,
            "empty" => ElementKind::Empty,
            "newpage" => ElementKind::PageBreak,
            "titlepage" => ElementKind::HeaderBlockStart,
            "metasection" => ElementKind::HeaderMetaBreak,
            "dualspeaker_open" => ElementKind::DualOpen,
            "dualspeaker_next" => ElementKind::DualNext,
            "dualspeaker_close" => ElementKind::DualClose,
            _ => ElementKind::HeaderField(tag.to_string()),
        }
    }

    /// 是否属于对话（人物名、台词、台词括注）
    pub fn is_dialogue_element(&self) -> bool {
        matches!(
            self,
            ElementKind::Speaker | ElementKind::Dialogue | ElementKind::Parenthetical
        )
    }

    /// 出现在双对话块内时会迫使块关闭的类型
    pub fn closes_dual_block(&self) -> bool {
        matches!(
            self,
            ElementKind::SceneHeading
                | ElementKind::Action
                | ElementKind::Transition
                | ElementKind::Centered
                | ElementKind::Section
                | ElementKind::Synopsis
                | ElementKind::PageBreak
                | ElementKind::HeaderBlockStart
                | ElementKind::HeaderMetaBreak
        )
    }
}

/// 剧本元素：类型加上清理后的文本内容
///
/// 内容里不保留识别类型用的标记符号（"@"、"!"、"~"、"."、">"、"<"、
/// "="、行尾 "^"）。章节是例外："#" 串保留在内容里，调用方数 "#" 取层级。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub kind: ElementKind,
    pub contents: String,
}

impl Element {
    pub fn new(kind: ElementKind, contents: impl Into<String>) -> Self {
        Element {
            kind,
            contents: contents.into(),
        }
    }

    /// 创建纯结构标记（内容为空）
    pub fn marker(kind: ElementKind) -> Self {
        Element {
            kind,
            contents: String::new(),
        }
    }
}
