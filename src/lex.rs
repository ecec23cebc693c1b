//! lex 格式：剧本的逐行解析树表示，方便调试，也是各渲染后端之间的
//! 交换格式。每行一个元素，形如 `标签: 内容`。

use std::io::Write;

use crate::models::{Element, ElementKind, Screenplay, ScriptResult};

/// 把剧本序列化成 lex 文本
pub fn write_string(screenplay: &Screenplay) -> String {
    let mut out = String::new();
    for element in screenplay {
        out.push_str(element.kind.lex_tag());
        out.push_str(": ");
        out.push_str(&element.contents);
        out.push('\n');
    }
    out
}

/// LexWriter 把剧本写到任意输出流
pub struct LexWriter;

impl LexWriter {
    pub fn write<W: Write>(&self, w: &mut W, screenplay: &Screenplay) -> ScriptResult<()> {
        for element in screenplay {
            writeln!(w, "{}: {}", element.kind.lex_tag(), element.contents)?;
        }
        Ok(())
    }
}

/// 解析 lex 文本
///
/// 每行在第一个冒号处切开，标签为空白的行跳过，认不出的标签当作
/// 标题页字段原样透传。
pub fn parse(text: &str) -> Screenplay {
    let mut out = Screenplay::new();
    for line in text.lines() {
        let (tag, contents) = match line.split_once(':') {
            Some((tag, contents)) => (tag.trim(), contents.trim()),
            None => (
                line.trim_matches(|c: char| c == ':' || c.is_whitespace()),
                "",
            ),
        };
        if tag.is_empty() {
            continue;
        }
        out.push(Element::new(ElementKind::from_lex_tag(tag), contents));
    }
    out
}
