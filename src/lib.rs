pub mod api;
pub mod lex;
pub mod linter;
pub mod models;
pub mod parser;
pub mod utils;
pub mod writer;

pub use models::{
    Element,
    ElementKind,
    ParseConf,
    Screenplay,
    ScriptError,
    ScriptResult
};

pub use parser::FountainParser;

pub use writer::FountainWriter;

pub use linter::{
    LintFinding,
    Linter
};

pub use api::{
    convert_from_lex,
    convert_to_lex,
    lint_fountain_text,
    parse_fountain_text
};

/// 解析 Fountain 格式文本
///
/// # Arguments
///
/// * `script` - Fountain 格式的剧本文本
/// * `conf` - 解析配置（场景前缀词表）
///
/// # Returns
///
/// 有序的剧本元素序列
pub fn parse(script: &str, conf: &ParseConf) -> Screenplay {
    let mut parser = FountainParser::new();
    parser.parse(script, conf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let conf = ParseConf::default();
        let result = parse("INT. ROOM - DAY\n\nHello, world!", &conf);
        assert!(!result.is_empty());
        assert_eq!(result[0].kind, ElementKind::SceneHeading);
    }
}
