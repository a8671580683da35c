use crate::domain::branch::BranchName;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSnapshot {
    pub remote_url: String,
    pub branch: BranchName,
}
