//! Text helpers: proposal-id extraction and markdown snippets

/// Extract the numeric part of a proposal id
///
/// Returns the value of the first run of digits, or 0 when the string
/// contains none (or the run overflows).
pub fn proposal_number(id: &str) -> u64 {
    let re = match regex::Regex::new(r"\d+") {
        Ok(re) => re,
        Err(_) => return 0,
    };

    re.find(id)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Extract the first plain-text paragraph of a markdown document
///
/// Headings, images and blank lines are skipped; consecutive text lines are
/// joined with a space. Returns an empty string when no paragraph exists.
pub fn first_paragraph(markdown: &str) -> String {
    let mut paragraph: Vec<&str> = Vec::new();

    for line in markdown.lines() {
        let trimmed = line.trim();

        let skip = trimmed.starts_with('#') || trimmed.starts_with("![");

        if trimmed.is_empty() || skip {
            if !paragraph.is_empty() {
                break;
            }
            continue;
        }

        paragraph.push(trimmed);
    }

    paragraph.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proposal_number_no_digits() {
        assert_eq!(proposal_number(""), 0);
        assert_eq!(proposal_number("JBP-"), 0);
    }

    #[test]
    fn test_proposal_number_first_digit_run() {
        assert_eq!(proposal_number("JBP-123"), 123);
        assert_eq!(proposal_number("JBP-123-v2"), 123);
        assert_eq!(proposal_number("7"), 7);
    }

    #[test]
    fn test_proposal_number_overflow_falls_back() {
        assert_eq!(proposal_number("JBP-99999999999999999999999999"), 0);
    }

    #[test]
    fn test_first_paragraph_skips_heading_and_image() {
        let md = "# Title\n\n![banner](http://example.com/x.png)\n\nFirst para line one\nline two\n\nSecond para";
        assert_eq!(first_paragraph(md), "First para line one line two");
    }

    #[test]
    fn test_first_paragraph_empty_document() {
        assert_eq!(first_paragraph(""), "");
        assert_eq!(first_paragraph("# Only a title\n"), "");
    }
}
