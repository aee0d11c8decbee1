use std::collections::HashSet;

use super::Reference;

/// Keeps references whose project is in the allowed set.
/// An empty set keeps everything.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    projects: HashSet<String>,
}

impl ProjectFilter {
    pub fn new<I, S>(projects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            projects: projects.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn allows(&self, reference: &Reference) -> bool {
        self.projects.is_empty() || self.projects.contains(&reference.project)
    }

    pub fn apply(&self, references: Vec<Reference>) -> Vec<Reference> {
        if self.is_empty() {
            return references;
        }
        references.into_iter().filter(|r| self.allows(r)).collect()
    }
}
