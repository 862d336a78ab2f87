use std::{collections::BTreeMap, fmt};

use tracing::debug;

use crate::line::{CdTarget, Line};

/// A directory of the reconstructed filesystem. Owns its subdirectories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryNode {
    files: BTreeMap<String, u64>,
    subdirectories: BTreeMap<String, DirectoryNode>,
}

impl DirectoryNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &BTreeMap<String, u64> {
        &self.files
    }

    pub fn subdirectories(&self) -> &BTreeMap<String, DirectoryNode> {
        &self.subdirectories
    }

    pub fn get_or_create_child(&mut self, name: &str) -> &mut DirectoryNode {
        self.subdirectories.entry(name.to_string()).or_default()
    }

    /// Records a file, replacing the size of an already listed one.
    pub fn add_file(&mut self, name: &str, size: u64) {
        self.files.insert(name.to_string(), size);
    }

    /// Walks `path` from this node, creating any directory that doesn't exist yet.
    pub fn resolve_mut(&mut self, path: &[String]) -> &mut DirectoryNode {
        path.iter()
            .fold(self, |dir, name| dir.get_or_create_child(name))
    }

    pub fn get(&self, path: &[&str]) -> Option<&DirectoryNode> {
        path.iter()
            .try_fold(self, |dir, name| dir.subdirectories.get(*name))
    }

    /// Replays a shell transcript and returns the root of the tree it describes.
    /// Lines that don't parse are skipped.
    pub fn from_transcript(input: impl Iterator<Item = impl Into<String>>) -> Self {
        let mut root = Self::new();
        let mut location = NavigationState::default();
        let mut skipped = 0;

        for line in input {
            let line: String = line.into();
            match Line::parse(&line) {
                Some(Line::Cd(target)) => {
                    location.cd(target);
                    root.resolve_mut(location.path());
                }
                Some(Line::Ls) => {}
                Some(Line::Dir(name)) => {
                    root.resolve_mut(location.path()).get_or_create_child(&name);
                }
                Some(Line::File { name, size }) => {
                    root.resolve_mut(location.path()).add_file(&name, size);
                }
                None => {
                    if !line.trim().is_empty() {
                        skipped += 1;
                    }
                }
            }
        }

        debug!(skipped, "transcript replayed");

        root
    }

    fn fmt_entries(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        for (name, dir) in &self.subdirectories {
            writeln!(f, "{indent}- {name} (dir, size={})", dir.total_size())?;
            dir.fmt_entries(f, depth + 1)?;
        }
        for (name, size) in &self.files {
            writeln!(f, "{indent}- {name} (file, size={size})")?;
        }
        Ok(())
    }
}

/// Renders the node as the root of an indented listing.
impl fmt::Display for DirectoryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- / (dir, size={})", self.total_size())?;
        self.fmt_entries(f, 1)
    }
}

/// Current working directory while a transcript is replayed, as names from the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    path: Vec<String>,
}

impl NavigationState {
    pub fn path(&self) -> &[String] {
        self.path.as_slice()
    }

    pub fn cd(&mut self, target: CdTarget) {
        match target {
            CdTarget::Root => self.path.clear(),
            CdTarget::Up => {
                if self.path.pop().is_none() {
                    debug!("cd .. at the root, staying at the root");
                }
            }
            CdTarget::Into(name) => self.path.push(name),
        }
    }
}
