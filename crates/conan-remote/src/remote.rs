// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use indexmap::IndexMap;

/// One configured package server.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Remote {
    pub name: String,
    pub url: String,
    pub verify_ssl: bool,
}

/// The configured remotes, in the order consulted when a reference is
/// searched without specifying one explicitly — first added, first tried.
#[derive(Clone, Debug, Default)]
pub struct RemoteList {
    remotes: IndexMap<String, Remote>,
}

impl RemoteList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, remote: Remote) {
        self.remotes.insert(remote.name.clone(), remote);
    }

    pub fn remove(&mut self, name: &str) -> Option<Remote> {
        self.remotes.shift_remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Remote> {
        self.remotes.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Remote> {
        self.remotes.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.remotes.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.remotes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.remotes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_insertion_order() {
        let mut remotes = RemoteList::new();
        remotes.add(Remote {
            name: "conancenter".to_string(),
            url: "https://center.conan.io".to_string(),
            verify_ssl: true,
        });
        remotes.add(Remote {
            name: "local".to_string(),
            url: "http://localhost:9300".to_string(),
            verify_ssl: false,
        });
        assert_eq!(
            remotes.names().collect::<Vec<_>>(),
            vec!["conancenter", "local"]
        );
    }

    #[test]
    fn test_remove_returns_removed_remote() {
        let mut remotes = RemoteList::new();
        remotes.add(Remote {
            name: "conancenter".to_string(),
            url: "https://center.conan.io".to_string(),
            verify_ssl: true,
        });
        let removed = remotes.remove("conancenter").unwrap();
        assert_eq!(removed.url, "https://center.conan.io");
        assert!(remotes.is_empty());
    }
}
