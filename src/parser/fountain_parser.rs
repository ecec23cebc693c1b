use log::debug;

use crate::models::{Element, ElementKind, ParseConf, Screenplay};
use crate::parser::classifiers::{check_forced, classify_structural, strip_dual_mark, Classified};
use crate::utils::constants::LINE_REGEX;

/// 单次解析过程中的瞬时状态
///
/// 每次 parse 调用重建，调用间不共享，解析完即丢弃。
#[derive(Debug)]
struct ParseState {
    /// 还在消费标题页元数据
    in_header_block: bool,
    /// 最近一个标题页字段名，供续行复用
    current_header_field: String,
    /// 连续空行计数，标题页的终止启发用
    consecutive_empty_lines: usize,
    /// 是否真的输出过标题页字段，没有就不补页分界
    has_header_content: bool,
    /// 是否已输出过标题页开始标记
    header_started: bool,
    /// 上一个元素允许下一行按台词而不是动作来读
    in_dialogue_context: bool,
    /// 处于 DualOpen/DualNext 和 DualClose 之间
    in_dual_dialogue_block: bool,
}

impl ParseState {
    fn new() -> Self {
        ParseState {
            in_header_block: true,
            current_header_field: String::new(),
            consecutive_empty_lines: 0,
            has_header_content: false,
            header_started: false,
            in_dialogue_context: false,
            in_dual_dialogue_block: false,
        }
    }
}

/// 标题页解析对单行的处理结果
enum HeaderOutcome {
    /// 行已被标题页消费
    Consumed,
    /// 标题页结束，这一行要交给正文解析器重新处理
    FallThrough,
}

/// Fountain 解析器
///
/// 逐行扫描，按固定优先级套结构分类器，套不上的按对话上下文推断，
/// 双对话通过回溯插入 DualOpen 改写已输出的序列。对任意文本都能给出
/// 结果：认不出的非空行一律按动作处理，解析永不失败。
pub struct FountainParser {
    state: ParseState,
    out: Screenplay,
}

impl Default for FountainParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FountainParser {
    pub fn new() -> Self {
        FountainParser {
            state: ParseState::new(),
            out: Screenplay::new(),
        }
    }

    /// 解析 Fountain 文本
    ///
    /// # Arguments
    ///
    /// * `script` - Fountain 格式的剧本文本，任意换行风格
    /// * `conf` - 解析配置（场景前缀词表）
    ///
    /// # Returns
    ///
    /// 有序的剧本元素序列
    pub fn parse(&mut self, script: &str, conf: &ParseConf) -> Screenplay {
        self.state = ParseState::new();
        self.out = Screenplay::new();

        // 统一换行符后逐行处理
        let normalized = script.replace("\r\n", "\n").replace('\r', "\n");
        let mut line_count = 0;
        for line in normalized.lines() {
            self.parse_line(line, conf, false);
            line_count += 1;
        }
        // 末尾追加一个合成空行，让收尾的对话/双对话块也走一遍关闭检查
        self.parse_line("", conf, true);

        debug!("解析完成: {} 行 -> {} 个元素", line_count, self.out.len());
        std::mem::take(&mut self.out)
    }

    fn parse_line(&mut self, line: &str, conf: &ParseConf, is_sentinel: bool) {
        if self.state.in_header_block {
            match self.parse_header_line(line) {
                HeaderOutcome::Consumed => return,
                HeaderOutcome::FallThrough => {}
            }
        }
        self.parse_body_line(line, conf, is_sentinel);
    }

    // ---- 标题页 ----

    fn parse_header_line(&mut self, line: &str) -> HeaderOutcome {
        let blank = line.trim().is_empty();
        if blank {
            self.state.consecutive_empty_lines += 1;
        } else {
            self.state.consecutive_empty_lines = 0;
        }

        let indented = LINE_REGEX["continuation_indent"].is_match(line);
        let is_key_value = line.contains(':') && !indented;
        let is_continuation =
            !blank && !is_key_value && indented && !self.state.current_header_field.is_empty();

        // 终止：出现既非键值也非续行的非空行，或者连续两个空行
        if (!blank && !is_key_value && !is_continuation)
            || self.state.consecutive_empty_lines >= 2
        {
            self.exit_header_block();
            if blank {
                // 触发终止的空行被吞掉，不再作为 Empty 输出
                return HeaderOutcome::Consumed;
            }
            return HeaderOutcome::FallThrough;
        }

        if blank {
            // 标题页内的单个空行不产生元素
            return HeaderOutcome::Consumed;
        }

        if is_key_value {
            // split 在第一个冒号上，键规范化，值为空的键只切换字段
            let (key, value) = match line.split_once(':') {
                Some(pair) => pair,
                None => (line, ""),
            };
            let field = normalize_header_key(key.trim());
            self.ensure_header_started();
            if is_core_field(&self.state.current_header_field) && !is_core_field(&field) {
                self.out.push(Element::marker(ElementKind::HeaderMetaBreak));
            }
            self.state.current_header_field = field.clone();
            let value = value.trim();
            if !value.is_empty() {
                self.out
                    .push(Element::new(ElementKind::HeaderField(field), value));
                self.state.has_header_content = true;
            }
        } else {
            // 续行沿用最近的字段名
            let value = line.trim();
            if !value.is_empty() {
                self.ensure_header_started();
                self.out.push(Element::new(
                    ElementKind::HeaderField(self.state.current_header_field.clone()),
                    value,
                ));
                self.state.has_header_content = true;
            }
        }
        HeaderOutcome::Consumed
    }

    fn ensure_header_started(&mut self) {
        if !self.state.header_started {
            self.out.push(Element::marker(ElementKind::HeaderBlockStart));
            self.state.header_started = true;
        }
    }

    fn exit_header_block(&mut self) {
        self.state.in_header_block = false;
        if self.state.has_header_content {
            self.out.push(Element::marker(ElementKind::PageBreak));
        }
        debug!(
            "标题页结束, 输出字段: {}",
            if self.state.has_header_content { "有" } else { "无" }
        );
    }

    // ---- 正文 ----

    fn parse_body_line(&mut self, line: &str, conf: &ParseConf, is_sentinel: bool) {
        if line.trim().is_empty() {
            self.handle_empty_line(is_sentinel);
            return;
        }

        let classified = check_forced(line)
            .or_else(|| classify_structural(line, &conf.scene_headings))
            .unwrap_or_else(|| self.infer(line));
        self.resolve_dual_and_push(classified);
    }

    /// 推断分类：人物名 / 台词括注 / 台词 / 动作
    fn infer(&self, line: &str) -> Classified {
        // 第一个 "(" 之前的部分全为大写就是人物名
        let before_paren = line.split('(').next().unwrap_or(line);
        if !before_paren.trim().is_empty() && before_paren == before_paren.to_uppercase() {
            let (contents, dual_candidate) = strip_dual_mark(line.trim());
            return Classified {
                kind: ElementKind::Speaker,
                contents,
                dual_candidate,
            };
        }
        if line.starts_with('(') && line.ends_with(')') {
            // 前面没有台词的孤立括注不算对话
            if self.state.in_dialogue_context {
                return Classified::plain(ElementKind::Parenthetical, line.trim());
            }
            return Classified::plain(ElementKind::Action, line);
        }
        if self.state.in_dialogue_context {
            return Classified::plain(ElementKind::Dialogue, line.trim());
        }
        // 动作保留原始缩进
        Classified::plain(ElementKind::Action, line)
    }

    fn handle_empty_line(&mut self, is_sentinel: bool) {
        if is_sentinel && self.state.in_dual_dialogue_block {
            // 合成行只是为了补发 DualClose，本身不进输出
            self.out.push(Element::marker(ElementKind::DualClose));
            self.state.in_dual_dialogue_block = false;
            self.state.in_dialogue_context = false;
            debug!("末尾合成行关闭双对话块");
            return;
        }
        // 人物名后面只跟了空行，说明那行根本没人说话，改判为动作
        if !self.state.in_dual_dialogue_block {
            if let Some(last) = self.out.last_mut() {
                if last.kind == ElementKind::Speaker {
                    last.kind = ElementKind::Action;
                }
            }
        }
        self.out.push(Element::marker(ElementKind::Empty));
        self.state.in_dialogue_context = false;
    }

    /// 双对话处理，之后把元素写入输出并更新对话上下文
    fn resolve_dual_and_push(&mut self, mut classified: Classified) {
        // 关闭检查先行：结构元素或普通人物名会结束已打开的块
        if self.state.in_dual_dialogue_block && !classified.dual_candidate {
            let plain_speaker = classified.kind == ElementKind::Speaker;
            if classified.kind.closes_dual_block() || plain_speaker {
                self.out.push(Element::marker(ElementKind::DualClose));
                self.state.in_dual_dialogue_block = false;
            }
        }

        if classified.dual_candidate {
            if self.state.in_dual_dialogue_block {
                // 第三个同时说话的人不被支持：关块，降级为普通人物名
                self.out.push(Element::marker(ElementKind::DualClose));
                self.state.in_dual_dialogue_block = false;
                classified.dual_candidate = false;
            } else if let Some(open_at) = self.find_dual_open_position() {
                // 回溯到上一个人物名整段台词之前插入 DualOpen
                self.out.insert(open_at, Element::marker(ElementKind::DualOpen));
                self.out.push(Element::marker(ElementKind::DualNext));
                self.state.in_dual_dialogue_block = true;
                debug!("双对话块打开, DualOpen 插入位置 {}", open_at);
            } else {
                // 前面没有可配对的人物名，降级
                classified.dual_candidate = false;
            }
        }

        let kind = classified.kind.clone();
        self.out.push(Element::new(kind.clone(), classified.contents));
        self.state.in_dialogue_context = kind.is_dialogue_element();
    }

    /// DualOpen 的插入点：最近一个人物名再往前数到最近的空行边界
    fn find_dual_open_position(&self) -> Option<usize> {
        let elements = self.out.elements();
        let speaker_idx = elements
            .iter()
            .rposition(|e| e.kind == ElementKind::Speaker)?;
        let boundary = elements[..speaker_idx]
            .iter()
            .rposition(|e| e.kind == ElementKind::Empty);
        Some(boundary.map_or(0, |i| i + 1))
    }
}

/// 标题页键名规范化：核心键归一到 Title/Credit/Author，其余原样保留
fn normalize_header_key(key: &str) -> String {
    match key.to_lowercase().as_str() {
        "title" => "Title".to_string(),
        "credit" => "Credit".to_string(),
        "author" | "authors" => "Author".to_string(),
        _ => key.to_string(),
    }
}

fn is_core_field(field: &str) -> bool {
    matches!(field, "Title" | "Credit" | "Author")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_key_normalization() {
        assert_eq!(normalize_header_key("TITLE"), "Title");
        assert_eq!(normalize_header_key("authors"), "Author");
        assert_eq!(normalize_header_key("Draft date"), "Draft date");
    }

    #[test]
    fn test_whitespace_only_line_is_blank() {
        let mut parser = FountainParser::new();
        let conf = ParseConf::default();
        let result = parser.parse("INT. A - DAY\n   \nHello there.\n", &conf);
        assert_eq!(result[1].kind, ElementKind::Empty);
        assert_eq!(result[2].kind, ElementKind::Action);
    }
}
