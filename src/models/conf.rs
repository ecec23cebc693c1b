use serde::{Deserialize, Serialize};

use crate::utils::constants::DEFAULT_SCENE_HEADINGS;

/// 解析配置
///
/// 配置作为参数显式传入 parse 调用，不放在任何全局状态里，
/// 不同语言环境的并发解析互不影响。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseConf {
    /// 场景标题识别前缀（按顺序匹配，如 "INT"、"EXT"，可换成其他语言的词表）
    pub scene_headings: Vec<String>,
}

impl Default for ParseConf {
    fn default() -> Self {
        ParseConf {
            scene_headings: DEFAULT_SCENE_HEADINGS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
