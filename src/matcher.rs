/// How a submitted answer is compared against a canonical one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerClass {
    /// `true`/`yes` or `false`/`no`, case-insensitive.
    Boolean(bool),
    /// Exact numeral text.
    Numeric(String),
    /// Case-folded text equality.
    Text(String),
}

impl AnswerClass {
    pub fn from_canonical(canonical: &str) -> Self {
        let trimmed = canonical.trim();
        let folded = trimmed.to_lowercase();
        match folded.as_str() {
            "true" => AnswerClass::Boolean(true),
            "false" => AnswerClass::Boolean(false),
            _ if trimmed.parse::<i64>().is_ok() => AnswerClass::Numeric(trimmed.to_string()),
            _ => AnswerClass::Text(folded),
        }
    }
}

/// Compares submitted answers for a single question.
#[derive(Debug, Clone)]
pub struct AnswerMatcher {
    class: AnswerClass,
    synonyms: Vec<String>,
}

impl AnswerMatcher {
    pub fn new(canonical: &str, synonyms: &[String]) -> Self {
        Self {
            class: AnswerClass::from_canonical(canonical),
            synonyms: synonyms
                .iter()
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    pub fn matches(&self, submitted: &str) -> bool {
        let trimmed = submitted.trim();
        let folded = trimmed.to_lowercase();

        if self.synonyms.iter().any(|s| *s == folded) {
            return true;
        }

        match &self.class {
            AnswerClass::Boolean(expected) => parse_boolean(&folded) == Some(*expected),
            AnswerClass::Numeric(numeral) => trimmed == numeral,
            AnswerClass::Text(text) => folded == *text,
        }
    }
}

fn parse_boolean(folded: &str) -> Option<bool> {
    match folded {
        "true" | "yes" => Some(true),
        "false" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_canonical_answers() {
        assert_eq!(AnswerClass::from_canonical("true"), AnswerClass::Boolean(true));
        assert_eq!(AnswerClass::from_canonical(" FALSE "), AnswerClass::Boolean(false));
        assert_eq!(
            AnswerClass::from_canonical("42"),
            AnswerClass::Numeric("42".to_string())
        );
        assert_eq!(
            AnswerClass::from_canonical("To test the bartender's skills"),
            AnswerClass::Text("to test the bartender's skills".to_string())
        );
    }

    #[test]
    fn boolean_true_accepts_true_and_yes() {
        let m = AnswerMatcher::new("true", &[]);
        for answer in ["true", "yes", "TRUE", " Yes "] {
            assert!(m.matches(answer), "{answer} should match");
        }
        for answer in ["false", "no", "maybe", "1"] {
            assert!(!m.matches(answer), "{answer} should not match");
        }
    }

    #[test]
    fn boolean_false_accepts_false_and_no() {
        let m = AnswerMatcher::new("false", &[]);
        assert!(m.matches("false"));
        assert!(m.matches("No"));
        assert!(!m.matches("true"));
        assert!(!m.matches("yes"));
    }

    #[test]
    fn numeric_requires_exact_numeral() {
        let m = AnswerMatcher::new("42", &[]);
        assert!(m.matches("42"));
        assert!(m.matches(" 42 "));
        assert!(!m.matches("042"));
        assert!(!m.matches("42.0"));
        assert!(!m.matches("forty-two"));
        assert!(!m.matches("true"));
    }

    #[test]
    fn text_ignores_case_and_padding() {
        let m = AnswerMatcher::new("To test the bartender's skills", &[]);
        assert!(m.matches("to test the BARTENDER'S skills  "));
        assert!(!m.matches("To test the bartender"));
    }

    #[test]
    fn synonyms_extend_every_class() {
        let m = AnswerMatcher::new("42", &["Forty-Two".to_string(), "  ".to_string()]);
        assert!(m.matches("forty-two"));
        assert!(!m.matches(""));
    }
}
