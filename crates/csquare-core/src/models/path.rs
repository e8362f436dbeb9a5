//! Absolute paths inside the virtual filesystem.

use std::fmt;

/// A normalized absolute path such as `/` or `/projects/mobile-apps`.
///
/// Always starts with `/`, never ends with one (except the root itself),
/// and never contains empty, `.` or `..` segments.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VirtualPath(String);

impl VirtualPath {
    /// The filesystem root, `/`.
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Build a path from an absolute string, folding `.`, `..` and repeated slashes.
    ///
    /// A leading slash is assumed when missing.
    pub fn normalize(path: &str) -> Self {
        let mut parts: Vec<&str> = Vec::new();
        for part in path.split('/').filter(|s| !s.is_empty()) {
            match part {
                ".." => {
                    parts.pop();
                }
                "." => {}
                _ => parts.push(part),
            }
        }

        Self(format!("/{}", parts.join("/")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path segments from the root down (empty for `/`).
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// The enclosing directory; the root is its own parent.
    pub fn parent(&self) -> Self {
        match self.0.rsplit_once('/') {
            Some(("", _)) | None => Self::root(),
            Some((parent, _)) => Self(parent.to_string()),
        }
    }

    /// The path of `name` directly below this one.
    ///
    /// `name` is a single segment; it is not normalized.
    pub fn child(&self, name: &str) -> Self {
        if self.0 == "/" {
            Self(format!("/{name}"))
        } else {
            Self(format!("{}/{}", self.0, name))
        }
    }
}

impl Default for VirtualPath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for VirtualPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<str> for VirtualPath {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for VirtualPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
