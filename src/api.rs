//! 字符串进出的便捷 API
//!
//! 给外层宿主（FFI、桥接层）调用：输入 Fountain 文本，输出 JSON 或
//! lex 文本，配置可省略。

use crate::linter::Linter;
use crate::models::ParseConf;
use crate::parser::FountainParser;
use crate::{lex, writer};

/// 解析 Fountain 文本，返回剧本元素序列的 JSON
pub fn parse_fountain_text(text: &str, conf: Option<ParseConf>) -> String {
    let conf = conf.unwrap_or_default();
    let mut parser = FountainParser::new();
    let screenplay = parser.parse(text, &conf);
    serde_json::to_string(&screenplay).unwrap_or_else(|_| "[]".to_string())
}

/// 解析 Fountain 文本并转换为 lex 文本
pub fn convert_to_lex(text: &str, conf: Option<ParseConf>) -> String {
    let conf = conf.unwrap_or_default();
    let mut parser = FountainParser::new();
    let screenplay = parser.parse(text, &conf);
    lex::write_string(&screenplay)
}

/// 读入 lex 文本并还原为 Fountain 文本
pub fn convert_from_lex(text: &str, conf: Option<ParseConf>) -> String {
    let conf = conf.unwrap_or_default();
    let screenplay = lex::parse(text);
    writer::write_string(&screenplay, &conf)
}

/// 对 Fountain 文本做结构检查，返回 JSON 的问题列表
pub fn lint_fountain_text(text: &str, conf: Option<ParseConf>) -> String {
    let conf = conf.unwrap_or_default();
    let mut parser = FountainParser::new();
    let screenplay = parser.parse(text, &conf);
    let mut linter = Linter::new();
    linter.lint(&screenplay);
    serde_json::to_string(&linter.findings).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Screenplay;

    #[test]
    fn test_parse_fountain_text_json() {
        let json = parse_fountain_text("INT. A - DAY\n\nHello.\n", None);
        let screenplay: Screenplay = serde_json::from_str(&json).expect("JSON 应能读回剧本");
        assert!(!screenplay.is_empty());
    }

    #[test]
    fn test_convert_between_formats() {
        let lex_text = convert_to_lex("INT. A - DAY\n\nMARY\nHi.\n", None);
        assert!(lex_text.starts_with("scene: INT. A - DAY\n"));

        let fountain_text = convert_from_lex(&lex_text, None);
        assert!(fountain_text.contains("INT. A - DAY"));
        assert!(fountain_text.contains("MARY"));
    }

    #[test]
    fn test_lint_fountain_text_json() {
        let json = lint_fountain_text("INT. A - DAY\n\n@\nHello.\n", None);
        assert!(json.contains("Empty speaker"), "空人物名应出现在检查结果里");
    }
}
