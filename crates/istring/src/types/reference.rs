use std::fmt::{Display, Formatter, Result as FmtResult};

/// The runtime value a choice template is resolved against.
///
/// Each variant is matched by its own selector algorithm.
///
/// ```
/// use istring::Reference;
///
/// assert_eq!(Reference::from(true), Reference::Boolean(true));
/// assert_eq!(Reference::from("one"), Reference::Text("one".to_string()));
/// assert_eq!(Reference::from(3), Reference::Number(3.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Reference {
    Boolean(bool),
    Text(String),
    Number(f64),
}

impl Display for Reference {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Reference::Boolean(b) => write!(f, "{b}"),
            Reference::Text(s) => write!(f, "{s}"),
            Reference::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<bool> for Reference {
    fn from(b: bool) -> Self {
        Reference::Boolean(b)
    }
}

impl From<String> for Reference {
    fn from(s: String) -> Self {
        Reference::Text(s)
    }
}

impl From<&str> for Reference {
    fn from(s: &str) -> Self {
        Reference::Text(s.to_string())
    }
}

impl From<&String> for Reference {
    fn from(s: &String) -> Self {
        Reference::Text(s.clone())
    }
}

impl From<f64> for Reference {
    fn from(n: f64) -> Self {
        Reference::Number(n)
    }
}

impl From<f32> for Reference {
    fn from(n: f32) -> Self {
        Reference::Number(f64::from(n))
    }
}

impl From<i32> for Reference {
    fn from(n: i32) -> Self {
        Reference::Number(f64::from(n))
    }
}

impl From<u32> for Reference {
    fn from(n: u32) -> Self {
        Reference::Number(f64::from(n))
    }
}

impl From<i64> for Reference {
    fn from(n: i64) -> Self {
        Reference::Number(n as f64)
    }
}
