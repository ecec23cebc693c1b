//! 结构检查：对解析完成的剧本做一次只读扫描，报告可疑结构。
//! 只产出提示，不中断流程也不修改剧本。

use serde::Serialize;

use crate::models::{Element, ElementKind, Screenplay};
use crate::utils::constants::{
    MSG_EMPTY_SPEAKER, MSG_MISPLACED_PARENTHETICAL, MSG_NESTED_DUAL_DIALOGUE,
    MSG_TOO_MANY_DUAL_SPEAKERS,
};

/// 单条检查结果
#[derive(Debug, Clone, Serialize)]
pub struct LintFinding {
    /// 近似的行号（从 1 开始）
    pub line_num: usize,
    pub message: String,
    pub context: String,
}

/// 结构检查器
#[derive(Debug, Default)]
pub struct Linter {
    pub findings: Vec<LintFinding>,
}

impl Linter {
    pub fn new() -> Self {
        Linter {
            findings: Vec::new(),
        }
    }

    /// 扫描整个剧本，结果累积在 findings 里
    pub fn lint(&mut self, screenplay: &Screenplay) {
        let mut line_num = 1;
        let mut in_dual_block = false;
        for (i, element) in screenplay.elements().iter().enumerate() {
            // 标题页的纯结构标记不对应输入行，不计行号
            if !matches!(
                element.kind,
                ElementKind::HeaderBlockStart | ElementKind::HeaderMetaBreak
            ) {
                line_num += 1;
            }
            in_dual_block = self.check_dual(element, line_num, in_dual_block);
            self.check_basic(element, screenplay, i, line_num);
        }
    }

    fn check_dual(&mut self, element: &Element, line_num: usize, in_dual_block: bool) -> bool {
        match element.kind {
            ElementKind::DualOpen => {
                if in_dual_block {
                    self.add_finding(line_num, MSG_NESTED_DUAL_DIALOGUE, &element.contents);
                }
                true
            }
            ElementKind::DualClose => false,
            ElementKind::Speaker => {
                if element.contents.trim().ends_with('^') && in_dual_block {
                    self.add_finding(line_num, MSG_TOO_MANY_DUAL_SPEAKERS, &element.contents);
                }
                in_dual_block
            }
            _ => in_dual_block,
        }
    }

    fn check_basic(
        &mut self,
        element: &Element,
        screenplay: &Screenplay,
        i: usize,
        line_num: usize,
    ) {
        if element.kind == ElementKind::Speaker && element.contents.trim().is_empty() {
            self.add_finding(line_num, MSG_EMPTY_SPEAKER, &element.contents);
        }
        // 括注前面必须是人物名、台词或另一个括注
        if element.kind == ElementKind::Parenthetical
            && i > 0
            && !screenplay[i - 1].kind.is_dialogue_element()
        {
            self.add_finding(line_num, MSG_MISPLACED_PARENTHETICAL, &element.contents);
        }
    }

    fn add_finding(&mut self, line_num: usize, message: &str, context: &str) {
        self.findings.push(LintFinding {
            line_num,
            message: message.to_string(),
            context: context.to_string(),
        });
    }

    pub fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }

    /// 人读的检查报告
    pub fn format_findings(&self) -> String {
        if !self.has_findings() {
            return "No linting errors found.".to_string();
        }
        let mut out = String::from("Linting Errors:\n");
        for finding in &self.findings {
            out.push_str(&format!(
                "  Line {}: {}\n    Context: \"{}\"\n",
                finding.line_num, finding.message, finding.context
            ));
        }
        out
    }
}
