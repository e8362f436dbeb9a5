use crate::config::FILESYSTEM_JSON;
use crate::error::{Result, TerminalError};
use crate::models::{FsEntry, VirtualPath};

/// Directory entry returned by list_dir
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Read-only virtual filesystem.
///
/// The tree is built once and never mutated; sessions share it behind an
/// `Arc`.
///
/// # Path Convention
///
/// - Root: `/`
/// - Nested: `/projects/mobile-apps`
/// - Lookups take normalized [`VirtualPath`]s
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VirtualFs {
    root: FsEntry,
}

impl VirtualFs {
    /// Create filesystem from a JSON manifest whose top level is the root directory.
    pub fn from_json(json: &str) -> Result<Self> {
        let root: FsEntry = serde_json::from_str(json)?;
        Self::from_root(root)
    }

    /// Wrap an already-built tree.
    pub fn from_root(root: FsEntry) -> Result<Self> {
        if !root.is_directory() {
            return Err(TerminalError::RootNotDirectory);
        }
        Ok(Self { root })
    }

    /// The club's tree, compiled into the binary.
    ///
    /// Falls back to an empty root if the embedded manifest does not parse.
    pub fn builtin() -> Self {
        match Self::from_json(FILESYSTEM_JSON) {
            Ok(fs) => fs,
            Err(e) => {
                log::error!("embedded filesystem rejected: {e}");
                Self::empty()
            }
        }
    }

    /// Create empty filesystem (a bare root directory).
    pub fn empty() -> Self {
        Self {
            root: FsEntry::empty_dir(),
        }
    }

    /// Get an entry by absolute path.
    pub fn get_entry(&self, path: &VirtualPath) -> Option<&FsEntry> {
        let mut current = &self.root;
        for part in path.segments() {
            current = current.children()?.get(part)?;
        }
        Some(current)
    }

    /// Check if a path is a directory.
    pub fn is_directory(&self, path: &VirtualPath) -> bool {
        self.get_entry(path).is_some_and(FsEntry::is_directory)
    }

    /// Resolve a path argument against `cwd`, one segment at a time.
    ///
    /// Absolute arguments start from the root. Each named segment must exist
    /// and every segment before the last must be a directory, so `ghost/..`
    /// and `mission.txt/..` do not resolve. `..` at the root stays there.
    /// The final segment may name a file.
    pub fn resolve(&self, cwd: &VirtualPath, arg: &str) -> Option<VirtualPath> {
        let mut current = if arg.starts_with('/') {
            VirtualPath::root()
        } else {
            cwd.clone()
        };
        let mut entry = self.get_entry(&current)?;

        for part in arg.split('/').filter(|s| !s.is_empty()) {
            let children = entry.children()?;
            match part {
                "." => {}
                ".." => {
                    current = current.parent();
                    entry = self.get_entry(&current)?;
                }
                name => {
                    entry = children.get(name)?;
                    current = current.child(name);
                }
            }
        }
        Some(current)
    }

    /// Look up `name` as a direct child of `dir`, without path resolution.
    pub fn child(&self, dir: &VirtualPath, name: &str) -> Option<&FsEntry> {
        self.get_entry(dir)?.children()?.get(name)
    }

    /// List directory contents.
    ///
    /// Returns `None` when the path is missing or is a file. Entries are
    /// sorted with directories first, then files, each group alphabetically.
    pub fn list_dir(&self, path: &VirtualPath) -> Option<Vec<DirEntry>> {
        let children = self.get_entry(path)?.children()?;
        let mut items: Vec<DirEntry> = children
            .iter()
            .map(|(name, entry)| DirEntry {
                name: name.clone(),
                is_dir: entry.is_directory(),
            })
            .collect();
        items.sort_by(|a, b| b.is_dir.cmp(&a.is_dir).then_with(|| a.name.cmp(&b.name)));
        Some(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(p: &str) -> VirtualPath {
        VirtualPath::normalize(p)
    }

    #[test]
    fn test_builtin_parses() {
        let fs = VirtualFs::builtin();
        assert_ne!(fs, VirtualFs::empty());
        assert!(fs.is_directory(&path("/projects")));
        assert!(fs.is_directory(&path("/events")));
        assert!(!fs.is_directory(&path("/events/workshops")));
        assert!(!fs.is_directory(&path("/mission.txt")));
    }

    #[test]
    fn test_root_must_be_directory() {
        assert!(matches!(
            VirtualFs::from_json(r#"["just", "a", "file"]"#),
            Err(TerminalError::RootNotDirectory)
        ));
        assert!(matches!(
            VirtualFs::from_json("{ nope"),
            Err(TerminalError::Manifest(_))
        ));
    }

    #[test]
    fn test_get_entry_through_file_fails() {
        let fs = VirtualFs::builtin();
        assert!(fs.get_entry(&path("/mission.txt/deeper")).is_none());
        assert!(fs.get_entry(&path("/missing")).is_none());
        assert!(fs.get_entry(&VirtualPath::root()).is_some());
    }

    #[test]
    fn test_resolve_relative_and_absolute() {
        let fs = VirtualFs::builtin();
        let projects = path("/projects");
        let resolve = |cwd: &VirtualPath, arg: &str| fs.resolve(cwd, arg).map(|p| p.to_string());

        assert_eq!(resolve(&projects, ".").as_deref(), Some("/projects"));
        assert_eq!(resolve(&projects, "..").as_deref(), Some("/"));
        assert_eq!(resolve(&VirtualPath::root(), "..").as_deref(), Some("/"));
        assert_eq!(resolve(&projects, "../team").as_deref(), Some("/team"));
        assert_eq!(resolve(&projects, "/events/workshops").as_deref(), Some("/events/workshops"));
        assert_eq!(resolve(&projects, "cybersecurity").as_deref(), Some("/projects/cybersecurity"));
    }

    #[test]
    fn test_resolve_walks_real_nodes() {
        let fs = VirtualFs::builtin();
        let root = VirtualPath::root();
        assert_eq!(fs.resolve(&root, "nowhere/.."), None);
        assert_eq!(fs.resolve(&root, "mission.txt/.."), None);
        assert_eq!(fs.resolve(&root, "mission.txt/."), None);
        assert_eq!(fs.resolve(&root, "ghost/../team"), None);
        assert_eq!(fs.resolve(&root, "/team/mentors/x"), None);
        assert_eq!(fs.resolve(&root, "team/../events"), Some(path("/events")));
    }

    #[test]
    fn test_list_dir_sorted_dirs_first() {
        let fs = VirtualFs::builtin();
        let names: Vec<_> = fs
            .list_dir(&VirtualPath::root())
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(
            names,
            vec!["events", "projects", "team", "about.txt", "mission.txt"]
        );
    }

    #[test]
    fn test_list_dir_on_file_is_none() {
        let fs = VirtualFs::builtin();
        assert!(fs.list_dir(&path("/about.txt")).is_none());
        assert!(fs.list_dir(&path("/nowhere")).is_none());
    }

    #[test]
    fn test_child_is_not_path_resolved() {
        let fs = VirtualFs::builtin();
        assert!(fs.child(&VirtualPath::root(), "mission.txt").is_some());
        assert!(fs.child(&VirtualPath::root(), "/mission.txt").is_none());
        assert!(fs.child(&VirtualPath::root(), "projects/mobile-apps").is_none());
    }

    #[test]
    fn test_mission_content() {
        let fs = VirtualFs::builtin();
        let lines = fs
            .child(&VirtualPath::root(), "mission.txt")
            .and_then(FsEntry::content)
            .unwrap();
        assert_eq!(
            lines,
            vec![
                "Coding - Creating - Collaborating",
                "Building the future, one line at a time...",
            ]
        );
    }
}
