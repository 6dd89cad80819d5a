// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use indexmap::IndexMap;

/// The C/C++ compile/link inputs a single dependency exports via its
/// `package_info()` hook.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CppInfo {
    pub include_dirs: Vec<String>,
    pub lib_dirs: Vec<String>,
    pub bin_dirs: Vec<String>,
    pub libs: Vec<String>,
    pub defines: Vec<String>,
    pub cxxflags: Vec<String>,
    pub cflags: Vec<String>,
    pub sharedlinkflags: Vec<String>,
    pub exelinkflags: Vec<String>,
}

macro_rules! merge_first_seen {
    ($self:ident, $other:ident, $($field:ident),+ $(,)?) => {
        $(
            for item in &$other.$field {
                if !$self.$field.contains(item) {
                    $self.$field.push(item.clone());
                }
            }
        )+
    };
}

impl CppInfo {
    fn merge_first_seen(&mut self, other: &CppInfo) {
        merge_first_seen!(
            self,
            other,
            include_dirs,
            lib_dirs,
            bin_dirs,
            libs,
            defines,
            cxxflags,
            cflags,
            sharedlinkflags,
            exelinkflags
        );
    }
}

/// Composed C/C++ build inputs for a single node: the global aggregation
/// (first-occurrence order across the traversal) plus each visited
/// dependency's own contribution, keyed by dependency name in the order it
/// was first encountered. A private edge's subgraph never reaches here.
#[derive(Clone, Debug, Default)]
pub struct DepsCppInfo {
    root: CppInfo,
    deps: IndexMap<String, CppInfo>,
}

impl DepsCppInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> &CppInfo {
        &self.root
    }

    pub fn deps(&self) -> &IndexMap<String, CppInfo> {
        &self.deps
    }

    /// Fold `dep_name`'s own exported info into the aggregated root section
    /// and record it under its own name, first-seen order preserved. A
    /// dependency already visited (diamond dependency) is not re-appended.
    pub fn append(&mut self, dep_name: &str, info: CppInfo) {
        if self.deps.contains_key(dep_name) {
            return;
        }
        self.root.merge_first_seen(&info);
        self.deps.insert(dep_name.to_string(), info);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_is_first_seen_order_and_no_duplicates() {
        let mut deps = DepsCppInfo::new();
        let mut a = CppInfo::default();
        a.include_dirs.push("a/include".to_string());
        deps.append("a", a.clone());

        let mut b = CppInfo::default();
        b.include_dirs.push("b/include".to_string());
        b.include_dirs.push("a/include".to_string()); // shared with `a`
        deps.append("b", b);

        assert_eq!(
            deps.root().include_dirs,
            vec!["a/include".to_string(), "b/include".to_string()]
        );
        assert_eq!(deps.deps().keys().collect::<Vec<_>>(), vec!["a", "b"]);

        // Re-appending `a` (diamond dependency) does not duplicate it.
        deps.append("a", a);
        assert_eq!(deps.deps().len(), 2);
    }
}
