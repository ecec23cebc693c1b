use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

/// 默认场景前缀（英文习惯用法）
pub const DEFAULT_SCENE_HEADINGS: [&str; 8] = [
    "INT",
    "EXT",
    "EST",
    "INT./EXT",
    "INT/EXT",
    "EXT/INT",
    "EXT./INT",
    "I/E",
];

lazy_static! {
    // 行级标记正则
    pub static ref LINE_REGEX: HashMap<&'static str, Regex> = {
        let mut map = HashMap::new();
        // 行尾的双对话符号，连同前导空白一起去除
        map.insert("dual_mark", Regex::new(r"[ \t]*\^$").unwrap());
        // 三个以上空格开头的行是标题页字段的续行
        map.insert("continuation_indent", Regex::new(r"^ {3,}").unwrap());
        // 整行等号（至少三个）是分页符
        map.insert("page_break", Regex::new(r"^={3,}$").unwrap());
        map
    };
}

// 结构检查提示语
pub const MSG_NESTED_DUAL_DIALOGUE: &str = "Nested dual dialogue block detected. Fountain \
     specification allows only one dual dialogue block at a time.";
pub const MSG_TOO_MANY_DUAL_SPEAKERS: &str =
    "More than two speakers in a dual dialogue block. Fountain specifies only two.";
pub const MSG_MISPLACED_PARENTHETICAL: &str = "Parenthetical without a preceding speaker or \
     dialogue line. This might be interpreted as action.";
pub const MSG_EMPTY_SPEAKER: &str = "Empty speaker name detected.";
