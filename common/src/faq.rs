use crate::markdown::split_title;

/// A question and its markdown answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// FAQ page content: heading, intro text and the entries in authored order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FaqDocument {
    pub title: Option<String>,
    pub intro: String,
    pub entries: Vec<FaqEntry>,
}

/// Parse an FAQ document.
///
/// An optional `# ` line gives the title. Text before the first `## ` heading
/// is the intro; each `## ` heading starts an entry whose answer is the text
/// up to the next heading. Entries are taken verbatim, empty ones included.
pub fn parse_faq(source: &str) -> FaqDocument {
    let (title, body) = split_title(source);

    let mut intro = String::new();
    let mut entries = Vec::new();
    let mut current_question: Option<String> = None;
    let mut current_answer = String::new();

    for line in body.lines() {
        let heading = line
            .strip_prefix("## ")
            .or_else(|| (line.trim_end() == "##").then_some(""));
        if let Some(question) = heading {
            if let Some(prev) = current_question.take() {
                entries.push(FaqEntry {
                    question: prev,
                    answer: current_answer.trim().to_string(),
                });
                current_answer.clear();
            }
            current_question = Some(question.trim().to_string());
        } else if current_question.is_some() {
            current_answer.push_str(line);
            current_answer.push('\n');
        } else {
            intro.push_str(line);
            intro.push('\n');
        }
    }

    if let Some(question) = current_question {
        entries.push(FaqEntry {
            question,
            answer: current_answer.trim().to_string(),
        });
    }

    FaqDocument {
        title,
        intro: intro.trim().to_string(),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# Frequently Asked Questions

Common questions.

## Is it urgent?

Yes. Call now.

## Do you do commercial?
Absolutely.

Second paragraph.
";

    #[test]
    fn test_parse_title_intro_and_entries() {
        let doc = parse_faq(SAMPLE);
        assert_eq!(doc.title.as_deref(), Some("Frequently Asked Questions"));
        assert_eq!(doc.intro, "Common questions.");
        assert_eq!(doc.entries.len(), 2);
        assert_eq!(doc.entries[0].question, "Is it urgent?");
        assert_eq!(doc.entries[0].answer, "Yes. Call now.");
        assert_eq!(doc.entries[1].question, "Do you do commercial?");
        assert_eq!(doc.entries[1].answer, "Absolutely.\n\nSecond paragraph.");
    }

    #[test]
    fn test_parse_without_title_or_entries() {
        let doc = parse_faq("Nothing to see.\n");
        assert_eq!(doc.title, None);
        assert_eq!(doc.intro, "Nothing to see.");
        assert!(doc.entries.is_empty());
    }

    #[test]
    fn test_empty_question_and_answer_are_kept() {
        let doc = parse_faq("##\n## Next\nAnswer\n");
        assert_eq!(doc.entries.len(), 2);
        assert_eq!(doc.entries[0].question, "");
        assert_eq!(doc.entries[0].answer, "");
        assert_eq!(doc.entries[1].answer, "Answer");
    }

    #[test]
    fn test_third_level_heading_stays_in_answer() {
        let doc = parse_faq("## Q\n### Detail\ntext\n");
        assert_eq!(doc.entries.len(), 1);
        assert_eq!(doc.entries[0].answer, "### Detail\ntext");
    }
}
