use regex::{Regex, RegexBuilder};

/// Accepted file endings for image URLs.
#[derive(Debug, Clone)]
pub struct ImageSuffixRule {
    pattern: Regex,
    message: String,
}

impl ImageSuffixRule {
    pub fn new<S: AsRef<str>>(
        suffixes: &[S],
        case_insensitive: bool,
    ) -> Result<Self, regex::Error> {
        let alternatives = suffixes
            .iter()
            .map(|suffix| regex::escape(suffix.as_ref()))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = RegexBuilder::new(&format!("(?:{alternatives})\\z"))
            .case_insensitive(case_insensitive)
            .unicode(false)
            .build()?;
        Ok(Self {
            pattern,
            message: format!("Image URL must end in {}", human_list(suffixes)),
        })
    }

    pub fn accepts(&self, url: &str) -> bool {
        self.pattern.is_match(url)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

fn human_list<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} or {}", first.as_ref(), second.as_ref()),
        [head @ .., last] => {
            let head = head
                .iter()
                .map(|item| item.as_ref())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{head}, or {}", last.as_ref())
        }
    }
}
