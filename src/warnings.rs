use std::fmt;

/// Non-fatal conditions noticed while building or configuring a changelog.
/// These are reported to the user but never stop the run.
#[derive(Debug, Clone, PartialEq)]
pub enum ChangelogWarning {
    /// Several tags point at the same commit; only one names the bucket
    AmbiguousTag {
        commit: String,
        chosen: String,
        ignored: Vec<String>,
    },
    /// Several format flags were given; the highest priority one is used
    MultipleFormats { chosen: String, ignored: Vec<String> },
}

impl fmt::Display for ChangelogWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangelogWarning::AmbiguousTag {
                commit,
                chosen,
                ignored,
            } => {
                let short_id = if commit.len() > 7 {
                    &commit[..7]
                } else {
                    commit.as_str()
                };
                write!(
                    f,
                    "Commit {} has several tags; using '{}', ignoring {}",
                    short_id,
                    chosen,
                    quoted_list(ignored)
                )
            }
            ChangelogWarning::MultipleFormats { chosen, ignored } => {
                write!(
                    f,
                    "Several formats requested; using --{}, ignoring {}",
                    chosen,
                    ignored
                        .iter()
                        .map(|flag| format!("--{}", flag))
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
        }
    }
}

fn quoted_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("'{}'", item))
        .collect::<Vec<_>>()
        .join(", ")
}
