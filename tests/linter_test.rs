use fountain_lex::models::{Element, ElementKind, ParseConf, Screenplay};
use fountain_lex::{lex, parse, Linter};

#[test]
fn test_no_findings_on_clean_script() {
    let conf = ParseConf::default();
    let screenplay = parse(
        "INT. HOUSE - DAY\n\nMARY\n(softly)\nHello.\n\nTOM ^\nHi.\n",
        &conf,
    );
    let mut linter = Linter::new();
    linter.lint(&screenplay);

    assert!(!linter.has_findings(), "规范剧本不应有任何提示: {}", linter.format_findings());
    assert_eq!(linter.format_findings(), "No linting errors found.");
}

#[test]
fn test_nested_dual_open() {
    let screenplay = Screenplay::from(vec![
        Element::marker(ElementKind::DualOpen),
        Element::new(ElementKind::Speaker, "A"),
        Element::marker(ElementKind::DualOpen),
        Element::new(ElementKind::Speaker, "B"),
        Element::marker(ElementKind::DualClose),
    ]);
    let mut linter = Linter::new();
    linter.lint(&screenplay);

    assert_eq!(linter.findings.len(), 1);
    assert!(linter.findings[0].message.contains("Nested dual dialogue"));
}

#[test]
fn test_too_many_dual_speakers() {
    // 从 lex 读入的剧本里，多出来的 ^ 还留在内容上
    let screenplay = lex::parse(
        "dualspeaker_open: \nspeaker: A\ndialog: One.\ndualspeaker_next: \nspeaker: B\ndialog: Two.\nspeaker: C ^\ndualspeaker_close: \n",
    );
    let mut linter = Linter::new();
    linter.lint(&screenplay);

    assert_eq!(linter.findings.len(), 1);
    assert!(linter.findings[0].message.contains("More than two speakers"));
    assert_eq!(linter.findings[0].context, "C ^");
}

#[test]
fn test_empty_speaker() {
    let conf = ParseConf::default();
    let screenplay = parse("INT. A - DAY\n\n@\nHello.\n", &conf);
    let mut linter = Linter::new();
    linter.lint(&screenplay);

    assert!(linter
        .findings
        .iter()
        .any(|f| f.message.contains("Empty speaker")));
}

#[test]
fn test_misplaced_parenthetical() {
    let screenplay = Screenplay::from(vec![
        Element::new(ElementKind::Action, "She waits."),
        Element::new(ElementKind::Parenthetical, "(beat)"),
    ]);
    let mut linter = Linter::new();
    linter.lint(&screenplay);

    assert_eq!(linter.findings.len(), 1);
    assert!(linter.findings[0]
        .message
        .contains("Parenthetical without a preceding speaker"));
}

#[test]
fn test_format_findings_report() {
    let screenplay = Screenplay::from(vec![Element::new(ElementKind::Speaker, "  ")]);
    let mut linter = Linter::new();
    linter.lint(&screenplay);

    let report = linter.format_findings();
    assert!(report.starts_with("Linting Errors:"));
    assert!(report.contains("Line "));
}
