use crate::foundation::error::{EmberError, EmberResult};

/// Minimal element matcher used for group/skip/element discovery and hook node queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    /// Any element with the given tag name.
    Tag(String),
    /// Any element carrying the class.
    Class(String),
    /// Element with both the tag name and the class.
    TagClass {
        /// Tag name (ASCII case-insensitive).
        tag: String,
        /// Class name.
        class: String,
    },
    /// Any element carrying a class that starts with the prefix.
    ClassPrefix(String),
    /// Matches when any of the inner selectors matches.
    AnyOf(Vec<Selector>),
}

impl Selector {
    /// Parse a comma-separated list of `tag`, `.class` or `tag.class` compounds.
    pub fn parse(s: &str) -> EmberResult<Self> {
        let mut parts = Vec::new();
        for raw in s.split(',') {
            let part = raw.trim();
            if part.is_empty() {
                return Err(EmberError::validation(format!(
                    "empty compound in selector '{s}'"
                )));
            }
            if part.contains(char::is_whitespace) {
                return Err(EmberError::validation(format!(
                    "descendant combinators are not supported in selector '{s}'"
                )));
            }

            let sel = match part.split_once('.') {
                Some(("", class)) => Self::Class(class.to_string()),
                Some((tag, class)) => Self::TagClass {
                    tag: tag.to_ascii_lowercase(),
                    class: class.to_string(),
                },
                None => Self::Tag(part.to_ascii_lowercase()),
            };
            if let Self::Class(c) | Self::TagClass { class: c, .. } = &sel {
                if c.is_empty() || c.contains('.') {
                    return Err(EmberError::validation(format!(
                        "unsupported class compound '{part}'"
                    )));
                }
            }
            parts.push(sel);
        }

        if parts.len() == 1 {
            Ok(parts.remove(0))
        } else {
            Ok(Self::AnyOf(parts))
        }
    }

    /// Test an element given its tag name and class list.
    pub fn matches(&self, tag: &str, classes: &[String]) -> bool {
        match self {
            Self::Tag(t) => tag.eq_ignore_ascii_case(t),
            Self::Class(c) => classes.iter().any(|x| x == c),
            Self::TagClass { tag: t, class: c } => {
                tag.eq_ignore_ascii_case(t) && classes.iter().any(|x| x == c)
            }
            Self::ClassPrefix(p) => classes.iter().any(|x| x.starts_with(p.as_str())),
            Self::AnyOf(list) => list.iter().any(|s| s.matches(tag, classes)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/selector.rs"]
mod tests;
