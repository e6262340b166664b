/// Line-level preprocessing: strip blank lines and comments while keeping
/// the original line numbering intact.
///
/// Every physical input line produces exactly one `SourceLine`; a line
/// that is entirely comment or whitespace keeps its number with empty
/// content, so later stages can map chunks back to real positions.

/// One physical source line after preprocessing. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number in the original file.
    pub number: usize,
    /// Trimmed content with comments removed; may be empty.
    pub content: String,
}

impl SourceLine {
    pub fn new(number: usize, content: &str) -> Self {
        Self {
            number,
            content: content.trim().to_string(),
        }
    }

    /// True iff the line still carries code after stripping.
    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

/// Strip comments and blank lines in a single forward pass, carrying the
/// block-comment state across lines. No backtracking; at most one block
/// open/close transition is handled per line.
pub fn preprocess(raw: &str) -> Vec<SourceLine> {
    let mut in_block_comment = false;
    raw.lines()
        .enumerate()
        .map(|(i, line)| {
            let content = strip_comments(line, &mut in_block_comment);
            SourceLine::new(i + 1, &content)
        })
        .collect()
}

/// Remove comment text from one line.
///
/// Inside an open block comment the line is blanked unless it contains
/// the close marker, in which case everything up to and including the
/// marker goes. Otherwise line comments are cut first, then a one-line
/// block comment, and an unterminated opener blanks the rest of the line
/// and sets the carry flag.
fn strip_comments(line: &str, in_block_comment: &mut bool) -> String {
    let mut text = line.to_string();

    if *in_block_comment {
        match text.find("*/") {
            Some(pos) => {
                text.replace_range(..pos + 2, "");
                *in_block_comment = false;
            }
            None => return String::new(),
        }
    }

    if let Some(pos) = text.find("//") {
        text.truncate(pos);
    }

    if let Some(open) = text.find("/*") {
        match text[open + 2..].find("*/") {
            Some(close) => {
                text.replace_range(open..open + 2 + close + 2, "");
            }
            None => {
                text.truncate(open);
                *in_block_comment = true;
            }
        }
    }

    text
}

#[cfg(test)]
#[path = "preprocess_test.rs"]
mod tests;
