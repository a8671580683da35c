const SAMPLE_LIMIT: usize = 5;
/// Two status columns plus the separating space.
const STATUS_PREFIX_LEN: usize = 3;

pub const NO_CHANGES_MESSAGE: &str = "No changes detected. Nothing to commit.";
pub const STATUS_UNAVAILABLE_MESSAGE: &str =
    "Unable to determine repository status. Try running 'git status' in this folder.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeReport {
    pub has_changes: bool,
    pub files_changed: usize,
    pub summary: String,
}

impl ChangeReport {
    pub fn empty() -> Self {
        Self {
            has_changes: false,
            files_changed: 0,
            summary: NO_CHANGES_MESSAGE.to_string(),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            has_changes: false,
            files_changed: 0,
            summary: STATUS_UNAVAILABLE_MESSAGE.to_string(),
        }
    }

    /// Summarizes `git status --porcelain` output.
    pub fn from_porcelain(output: &str) -> Self {
        let entries = output
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect::<Vec<_>>();

        if entries.is_empty() {
            return Self::empty();
        }

        let sample = entries
            .iter()
            .take(SAMPLE_LIMIT)
            .map(|line| display_path(line))
            .collect::<Vec<_>>()
            .join(", ");
        let more = if entries.len() > SAMPLE_LIMIT { "..." } else { "" };

        Self {
            has_changes: true,
            files_changed: entries.len(),
            summary: format!("{} changed file(s): {sample}{more}", entries.len()),
        }
    }
}

fn display_path(line: &str) -> &str {
    match line.get(STATUS_PREFIX_LEN..) {
        Some(path) if !path.is_empty() => path,
        _ => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_output_reports_no_changes() {
        let report = ChangeReport::from_porcelain("");
        assert!(!report.has_changes);
        assert_eq!(report.summary, NO_CHANGES_MESSAGE);

        let blank = ChangeReport::from_porcelain("\n\n");
        assert!(!blank.has_changes);
    }

    #[test]
    fn strips_status_prefix_including_leading_space() {
        let report = ChangeReport::from_porcelain(" M src/main.rs\n?? notes.txt\n");
        assert!(report.has_changes);
        assert_eq!(report.files_changed, 2);
        assert_eq!(report.summary, "2 changed file(s): src/main.rs, notes.txt");
    }

    #[test]
    fn samples_at_most_five_paths_with_ellipsis() {
        let output = (1..=7)
            .map(|n| format!("?? file{n}.txt"))
            .collect::<Vec<_>>()
            .join("\n");
        let report = ChangeReport::from_porcelain(&output);

        assert_eq!(report.files_changed, 7);
        assert!(report.summary.starts_with("7 changed file(s): "));
        assert!(report.summary.contains("file5.txt"));
        assert!(!report.summary.contains("file6.txt"));
        assert!(report.summary.ends_with("..."));
    }

    #[test]
    fn exactly_five_paths_have_no_ellipsis() {
        let output = (1..=5)
            .map(|n| format!(" M f{n}"))
            .collect::<Vec<_>>()
            .join("\n");
        let report = ChangeReport::from_porcelain(&output);

        assert_eq!(report.summary, "5 changed file(s): f1, f2, f3, f4, f5");
    }

    #[test]
    fn short_lines_are_shown_verbatim() {
        let report = ChangeReport::from_porcelain("?? \n");
        assert_eq!(report.summary, "1 changed file(s): ?? ");
    }
}
