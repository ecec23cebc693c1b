//! Fountain 写出：把剧本元素序列还原成 Fountain 文本。
//!
//! 还原时补回必要的强制标记：小写人物名加 "@"，词表外的场景加 "."，
//! 全大写的动作加 "!"，否则读回来会变成别的类型。

use std::io::Write;

use crate::models::{Element, ElementKind, ParseConf, Screenplay, ScriptResult};

/// 标题页写出状态
enum TitleState {
    Start,
    InTitle,
    Done,
}

/// FountainWriter 把剧本还原为 Fountain 文本
pub struct FountainWriter {
    scene_headings: Vec<String>,
}

impl FountainWriter {
    pub fn new(conf: &ParseConf) -> Self {
        FountainWriter {
            scene_headings: conf.scene_headings.clone(),
        }
    }

    pub fn write<W: Write>(&self, w: &mut W, screenplay: &Screenplay) -> ScriptResult<()> {
        // 解析收尾留下的空元素不写回
        let elements = trim_trailing_empty(screenplay.elements());
        let mut title = TitleState::Start;
        for element in elements {
            if matches!(title, TitleState::Start) {
                if element.kind == ElementKind::HeaderBlockStart {
                    title = TitleState::InTitle;
                    continue;
                }
                title = TitleState::Done;
            }
            if matches!(title, TitleState::InTitle) {
                match &element.kind {
                    ElementKind::HeaderMetaBreak => {}
                    ElementKind::PageBreak => {
                        // 标题页结束，空一行进入正文
                        writeln!(w)?;
                        title = TitleState::Done;
                    }
                    ElementKind::HeaderField(name) => {
                        writeln!(w, "{}: {}", name, element.contents)?;
                    }
                    _ => writeln!(w, "{}: {}", element.kind.lex_tag(), element.contents)?,
                }
                continue;
            }
            self.write_element(w, element)?;
        }
        Ok(())
    }

    fn write_element<W: Write>(&self, w: &mut W, element: &Element) -> ScriptResult<()> {
        match &element.kind {
            ElementKind::PageBreak => writeln!(w, "===")?,
            ElementKind::Empty => writeln!(w)?,
            ElementKind::Speaker => {
                if element.contents != element.contents.to_uppercase() {
                    write!(w, "@")?;
                }
                writeln!(w, "{}", element.contents)?;
            }
            ElementKind::SceneHeading => {
                if !self.scene_supported(&element.contents) {
                    write!(w, ".")?;
                }
                writeln!(w, "{}", element.contents)?;
            }
            ElementKind::Lyrics => writeln!(w, "~{}", element.contents)?,
            ElementKind::Action => {
                if element.contents == element.contents.to_uppercase() {
                    write!(w, "!")?;
                }
                writeln!(w, "{}", element.contents)?;
            }
            _ => writeln!(w, "{}", element.contents)?,
        }
        Ok(())
    }

    fn scene_supported(&self, contents: &str) -> bool {
        self.scene_headings.iter().any(|prefix| {
            contents.starts_with(&format!("{} ", prefix))
                || contents.starts_with(&format!("{}.", prefix))
        })
    }
}

/// 便捷函数：写成字符串
pub fn write_string(screenplay: &Screenplay, conf: &ParseConf) -> String {
    let mut buf = Vec::new();
    match FountainWriter::new(conf).write(&mut buf, screenplay) {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        Err(_) => String::new(),
    }
}

fn trim_trailing_empty(elements: &[Element]) -> &[Element] {
    match elements.last() {
        Some(e) if e.kind == ElementKind::Empty => &elements[..elements.len() - 1],
        _ => elements,
    }
}
