//! 结构分类器
//!
//! 每个分类器都是纯函数：拿一行文本测一种结构模式，命中就给出元素
//! 类型和清理后的内容，不命中返回 None，绝不报错。调用方按固定的
//! 优先级依次尝试（强制前缀最先，然后场景、转场/居中、概要/分页、
//! 章节），没人命中的行落回上下文推断。

use crate::models::ElementKind;
use crate::utils::constants::LINE_REGEX;

/// 分类结果
#[derive(Debug, Clone, PartialEq)]
pub struct Classified {
    pub kind: ElementKind,
    pub contents: String,
    /// 行尾带 "^" 的人物名，是双对话的候选
    pub dual_candidate: bool,
}

impl Classified {
    pub fn plain(kind: ElementKind, contents: impl Into<String>) -> Self {
        Classified {
            kind,
            contents: contents.into(),
            dual_candidate: false,
        }
    }
}

/// 去掉行尾的 "^" 标记（连同它前面的空白），返回是否带标记
pub fn strip_dual_mark(text: &str) -> (String, bool) {
    let re = &LINE_REGEX["dual_mark"];
    if re.is_match(text) {
        (re.replace(text, "").trim().to_string(), true)
    } else {
        (text.trim().to_string(), false)
    }
}

/// 强制类型前缀，在未裁剪的原始行上看第一个字符
///
/// "@" 强制人物名，"~" 强制歌词，"!" 强制动作。标记本身去除；
/// 强制的人物名同样识别行尾 "^"。
pub fn check_forced(line: &str) -> Option<Classified> {
    let first = line.chars().next()?;
    let rest = &line[first.len_utf8()..];
    match first {
        '@' => {
            let (contents, dual_candidate) = strip_dual_mark(rest);
            Some(Classified {
                kind: ElementKind::Speaker,
                contents,
                dual_candidate,
            })
        }
        '~' => Some(Classified::plain(ElementKind::Lyrics, rest.trim())),
        '!' => Some(Classified::plain(ElementKind::Action, rest)),
        _ => None,
    }
}

/// 场景标题
///
/// 大写后的行以某个配置前缀加空格或句点开头，内容整体转大写；
/// 或者以单个 "." 强制（".." 不算），这时去掉点、保留原大小写。
pub fn check_scene(line: &str, scene_headings: &[String]) -> Option<Classified> {
    let upper = line.to_uppercase();
    for prefix in scene_headings {
        if upper.starts_with(&format!("{} ", prefix)) || upper.starts_with(&format!("{}.", prefix))
        {
            return Some(Classified::plain(
                ElementKind::SceneHeading,
                upper.trim(),
            ));
        }
    }
    if line.starts_with('.') && !line.starts_with("..") {
        return Some(Classified::plain(
            ElementKind::SceneHeading,
            line[1..].trim(),
        ));
    }
    None
}

/// 转场和居中文本
///
/// 大写后的行以 ">" 开头或以 " TO:" 结尾是转场；同时以 ">" 开头、
/// "<" 结尾的改判居中。内容去掉包裹的 ">"、"<" 和两端空格。
pub fn check_transition(line: &str) -> Option<Classified> {
    let upper = line.to_uppercase();
    let kind = if upper.starts_with('>') && upper.ends_with('<') {
        ElementKind::Centered
    } else if upper.starts_with('>') || upper.ends_with(" TO:") {
        ElementKind::Transition
    } else {
        return None;
    };
    let contents = upper
        .trim_matches(|c| c == '>' || c == '<' || c == ' ')
        .to_string();
    Some(Classified::plain(kind, contents))
}

/// 概要和分页符
///
/// "=" 开头是概要；整行至少三个 "=" 则是分页符。
pub fn check_synopsis(line: &str) -> Option<Classified> {
    if LINE_REGEX["page_break"].is_match(line) {
        return Some(Classified::plain(ElementKind::PageBreak, ""));
    }
    if line.starts_with('=') {
        return Some(Classified::plain(
            ElementKind::Synopsis,
            line.trim_start_matches(['=', ' ']).trim_end(),
        ));
    }
    None
}

/// 章节
///
/// "#" 开头即章节。内容保留整个 "#" 串，层级由调用方数前导 "#" 得出。
pub fn check_section(line: &str) -> Option<Classified> {
    if line.starts_with('#') {
        return Some(Classified::plain(ElementKind::Section, line.trim_end()));
    }
    None
}

/// 按固定优先级尝试所有结构分类器，第一个命中的生效
pub fn classify_structural(line: &str, scene_headings: &[String]) -> Option<Classified> {
    check_scene(line, scene_headings)
        .or_else(|| check_transition(line))
        .or_else(|| check_synopsis(line))
        .or_else(|| check_section(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ParseConf;

    fn prefixes() -> Vec<String> {
        ParseConf::default().scene_headings
    }

    #[test]
    fn test_scene_prefix_match() {
        let c = check_scene("int. house - day", &prefixes()).unwrap();
        assert_eq!(c.kind, ElementKind::SceneHeading);
        assert_eq!(c.contents, "INT. HOUSE - DAY", "前缀场景内容应转为大写");
    }

    #[test]
    fn test_scene_forced_dot_keeps_case() {
        let c = check_scene(".My Room", &prefixes()).unwrap();
        assert_eq!(c.contents, "My Room", "强制场景应保留原大小写");
        assert!(check_scene("..not a scene", &prefixes()).is_none());
    }

    #[test]
    fn test_transition_and_centered() {
        let t = check_transition("cut TO:").unwrap();
        assert_eq!(t.kind, ElementKind::Transition);
        assert_eq!(t.contents, "CUT TO:");

        let c = check_transition("> THE END <").unwrap();
        assert_eq!(c.kind, ElementKind::Centered);
        assert_eq!(c.contents, "THE END");

        assert!(check_transition("hello").is_none());
    }

    #[test]
    fn test_synopsis_and_page_break() {
        let s = check_synopsis("= Our hero arrives.").unwrap();
        assert_eq!(s.kind, ElementKind::Synopsis);
        assert_eq!(s.contents, "Our hero arrives.");

        let p = check_synopsis("====").unwrap();
        assert_eq!(p.kind, ElementKind::PageBreak);
        assert_eq!(p.contents, "");

        // 两个等号不够分页，按概要处理
        assert_eq!(check_synopsis("==").unwrap().kind, ElementKind::Synopsis);
    }

    #[test]
    fn test_section_keeps_hashes() {
        let c = check_section("## Act Two").unwrap();
        assert_eq!(c.kind, ElementKind::Section);
        assert_eq!(c.contents, "## Act Two");
        assert_eq!(c.contents.chars().take_while(|&ch| ch == '#').count(), 2);
    }

    #[test]
    fn test_forced_prefixes() {
        let s = check_forced("@McAVOY").unwrap();
        assert_eq!(s.kind, ElementKind::Speaker);
        assert_eq!(s.contents, "McAVOY");
        assert!(!s.dual_candidate);

        let d = check_forced("@MARY ^").unwrap();
        assert!(d.dual_candidate, "行尾 ^ 应标成双对话候选");
        assert_eq!(d.contents, "MARY");

        let l = check_forced("~la la la").unwrap();
        assert_eq!(l.kind, ElementKind::Lyrics);
        assert_eq!(l.contents, "la la la");

        let a = check_forced("!BANG").unwrap();
        assert_eq!(a.kind, ElementKind::Action);
        assert_eq!(a.contents, "BANG");

        assert!(check_forced("plain line").is_none());
    }

    #[test]
    fn test_strip_dual_mark() {
        assert_eq!(strip_dual_mark("TOM ^"), ("TOM".to_string(), true));
        assert_eq!(strip_dual_mark("TOM^"), ("TOM".to_string(), true));
        assert_eq!(strip_dual_mark("TOM"), ("TOM".to_string(), false));
    }
}
