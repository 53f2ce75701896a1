/// Site root path.
pub const HOME_PATH: &str = "/";

/// Where a link should take the user, and what it says.
///
/// Components emit this as a plain anchor; resolving the path is up to
/// the router of the embedding app.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NavTarget {
    pub path: String,
    pub label: String,
}

impl NavTarget {
    pub fn new(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
        }
    }

    pub fn home() -> Self {
        Self::new(HOME_PATH, "Back to home")
    }

    pub fn is_root(&self) -> bool {
        self.path == HOME_PATH
    }
}

impl Default for NavTarget {
    fn default() -> Self {
        Self::home()
    }
}

impl std::fmt::Display for NavTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path)
    }
}
