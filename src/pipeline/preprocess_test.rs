use super::*;

fn contents(lines: &[SourceLine]) -> Vec<&str> {
    lines.iter().map(|l| l.content.as_str()).collect()
}

#[test]
fn comment_free_input_round_trips() {
    let raw = "int a = 1;\nint b = 2;\nreturn a + b;";
    let lines = preprocess(raw);
    assert_eq!(lines.len(), 3);
    assert_eq!(contents(&lines), vec!["int a = 1;", "int b = 2;", "return a + b;"]);
    let numbers: Vec<usize> = lines.iter().map(|l| l.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[test]
fn every_physical_line_keeps_its_number() {
    let raw = "int a;\n\n// gone\nint b;";
    let lines = preprocess(raw);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1].number, 2);
    assert!(!lines[1].has_content());
    assert_eq!(lines[2].number, 3);
    assert!(!lines[2].has_content());
    assert_eq!(lines[3].content, "int b;");
}

#[test]
fn line_comment_stripped_inline() {
    let lines = preprocess("int a; // trailing\nint b;");
    assert_eq!(lines[0].content, "int a;");
    assert_eq!(lines[1].content, "int b;");
}

#[test]
fn full_line_comment_leaves_empty_line() {
    let lines = preprocess("// nothing here");
    assert_eq!(lines.len(), 1);
    assert!(!lines[0].has_content());
}

#[test]
fn single_line_block_comment_removed() {
    let lines = preprocess("int a = /* mid */ 1;");
    assert_eq!(lines[0].content, "int a =  1;");
}

#[test]
fn multi_line_block_comment_blanks_interior() {
    let raw = "int a;\n/* start\nstill inside\nend */ int b;\nint c;";
    let lines = preprocess(raw);
    assert_eq!(lines[0].content, "int a;");
    assert!(!lines[1].has_content()); // opener line
    assert!(!lines[2].has_content()); // interior
    assert_eq!(lines[3].content, "int b;"); // text after the closer survives
    assert_eq!(lines[4].content, "int c;");
}

#[test]
fn unterminated_opener_blanks_rest_of_line() {
    let lines = preprocess("int a; /* open\nint hidden;");
    assert_eq!(lines[0].content, "int a;");
    assert!(!lines[1].has_content());
}

#[test]
fn closer_line_without_trailing_code_is_blank() {
    let raw = "/* open\n */\nint a;";
    let lines = preprocess(raw);
    assert!(!lines[0].has_content());
    assert!(!lines[1].has_content());
    assert_eq!(lines[2].content, "int a;");
}

#[test]
fn whitespace_only_line_has_no_content() {
    let lines = preprocess("   \t  ");
    assert_eq!(lines.len(), 1);
    assert!(!lines[0].has_content());
}

#[test]
fn content_is_trimmed() {
    let lines = preprocess("    int a = 1;   ");
    assert_eq!(lines[0].content, "int a = 1;");
}

#[test]
fn line_comment_inside_block_comment_does_not_close_it() {
    let raw = "/* open\n// still a comment\nclose */\nint a;";
    let lines = preprocess(raw);
    assert!(lines[..3].iter().all(|l| !l.has_content()));
    assert_eq!(lines[3].content, "int a;");
}

#[test]
fn has_content_on_trimmed_text() {
    assert!(SourceLine::new(1, "x").has_content());
    assert!(!SourceLine::new(1, "").has_content());
    assert!(!SourceLine::new(1, "   ").has_content());
}
