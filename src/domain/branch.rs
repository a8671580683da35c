/// Marker `git rev-parse --abbrev-ref HEAD` prints when no branch is checked out.
const DETACHED_HEAD: &str = "HEAD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchName(pub String);

impl BranchName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses `rev-parse --abbrev-ref HEAD` output. A detached HEAD has no
    /// branch to push, so it is treated the same as no output.
    pub fn parse(output: &str) -> Option<Self> {
        let name = output.trim();
        if name.is_empty() || name == DETACHED_HEAD {
            None
        } else {
            Some(Self(name.to_string()))
        }
    }
}
