use colored::{ColoredString, Colorize};
use derive_new::new;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Equal { value: T },
    Delete { value: T },
    Insert { value: T },
}

impl<T> Edit<T>
where
    T: AsRef<str>,
{
    pub fn prefix(&self) -> &'static str {
        match self {
            Edit::Equal { .. } => "  ",
            Edit::Delete { .. } => "- ",
            Edit::Insert { .. } => "+ ",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Edit::Equal { value } | Edit::Delete { value } | Edit::Insert { value } => {
                value.as_ref()
            }
        }
    }

    pub fn as_string(&self) -> String {
        format!("{}{}", self.prefix(), self.value())
    }

    /// Blue for unchanged, red for removed, green for added lines
    pub fn to_colored(&self) -> ColoredString {
        let line = self.as_string();
        match self {
            Edit::Equal { .. } => line.blue(),
            Edit::Delete { .. } => line.red(),
            Edit::Insert { .. } => line.green(),
        }
    }
}

impl<T> Display for Edit<T>
where
    T: AsRef<str>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

pub trait DiffAlgorithm<T> {
    fn diff(&self) -> Vec<Edit<T>>;

    fn format_diff(&self) -> String
    where
        T: AsRef<str>,
    {
        self.diff()
            .iter()
            .map(Edit::as_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Split a text on `\n`, dropping trailing empty segments
///
/// `"a\nb\n"` yields `["a", "b"]` and the empty text yields no lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = text.split('\n').collect::<Vec<_>>();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Same-index comparison of two line sequences
///
/// Lines at equal positions are compared pairwise: equal lines are kept, differing
/// lines become a removal followed by an addition. Once one side runs out, the rest
/// of the other side is reported as removed or added. An insertion in the middle of
/// a file therefore shows every following line as replaced; no alignment search is
/// attempted.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LockstepDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<T: Eq + Clone> DiffAlgorithm<T> for LockstepDiff<'_, T> {
    fn diff(&self) -> Vec<Edit<T>> {
        let mut edits = Vec::with_capacity(self.a.len().max(self.b.len()) * 2);
        let (mut i, mut j) = (0, 0);

        while i < self.a.len() && j < self.b.len() {
            if self.a[i] == self.b[j] {
                edits.push(Edit::Equal {
                    value: self.a[i].clone(),
                });
            } else {
                edits.push(Edit::Delete {
                    value: self.a[i].clone(),
                });
                edits.push(Edit::Insert {
                    value: self.b[j].clone(),
                });
            }
            i += 1;
            j += 1;
        }

        edits.extend(self.a[i..].iter().map(|value| Edit::Delete {
            value: value.clone(),
        }));
        edits.extend(self.b[j..].iter().map(|value| Edit::Insert {
            value: value.clone(),
        }));

        edits
    }
}

/// Diff two texts line by line
pub fn diff_texts<'t>(old: &'t str, new: &'t str) -> Vec<Edit<&'t str>> {
    let (old, new) = (split_lines(old), split_lines(new));
    LockstepDiff::new(&old, &new).diff()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn file_inputs() -> (Vec<&'static str>, Vec<&'static str>) {
        (
            vec!["line1", "line2", "line3", "line4"],
            vec!["line2", "line3_modified", "line4", "line5"],
        )
    }

    #[rstest]
    fn shifted_lines_are_reported_as_replacements(
        file_inputs: (Vec<&'static str>, Vec<&'static str>),
    ) {
        let (a, b) = file_inputs;
        let result = LockstepDiff::new(&a, &b).diff();
        let expected = vec![
            Edit::Delete { value: "line1" },
            Edit::Insert { value: "line2" },
            Edit::Delete { value: "line2" },
            Edit::Insert {
                value: "line3_modified",
            },
            Edit::Delete { value: "line3" },
            Edit::Insert { value: "line4" },
            Edit::Delete { value: "line4" },
            Edit::Insert { value: "line5" },
        ];

        assert_eq!(result, expected);
    }

    #[rstest]
    fn appended_line_is_added() {
        let result = diff_texts("hello\n", "hello\nworld\n");

        assert_eq!(
            result,
            vec![Edit::Equal { value: "hello" }, Edit::Insert { value: "world" }]
        );
    }

    #[rstest]
    fn truncated_file_reports_removed_tail() {
        let result = diff_texts("a\nb\nc", "a");

        assert_eq!(
            result,
            vec![
                Edit::Equal { value: "a" },
                Edit::Delete { value: "b" },
                Edit::Delete { value: "c" },
            ]
        );
    }

    #[rstest]
    #[case("", vec![])]
    #[case("\n\n", vec![])]
    #[case("a\n\nb\n", vec!["a", "", "b"])]
    #[case("no newline", vec!["no newline"])]
    fn splits_on_newlines(#[case] text: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split_lines(text), expected);
    }

    #[rstest]
    fn formats_with_fixed_prefixes() {
        let (a, b) = (["same", "old"], ["same", "new"]);
        let formatted = LockstepDiff::new(&a[..], &b[..]).format_diff();

        assert_eq!(formatted, "  same\n- old\n+ new");
    }

    proptest! {
        #[test]
        fn identical_texts_only_have_equal_lines(lines in proptest::collection::vec("[a-z ]{0,12}", 0..20)) {
            let result = LockstepDiff::new(&lines, &lines).diff();

            prop_assert_eq!(result.len(), lines.len());
            for (edit, line) in result.iter().zip(&lines) {
                prop_assert_eq!(edit, &Edit::Equal { value: line.clone() });
            }
        }

        #[test]
        fn every_line_is_accounted_for(
            a in proptest::collection::vec("[ab]{0,2}", 0..20),
            b in proptest::collection::vec("[ab]{0,2}", 0..20),
        ) {
            let result = LockstepDiff::new(&a, &b).diff();

            let old_lines = result.iter().filter(|edit| !matches!(edit, Edit::Insert { .. })).count();
            let new_lines = result.iter().filter(|edit| !matches!(edit, Edit::Delete { .. })).count();
            let replaced = a.iter().zip(&b).filter(|(old, new)| old != new).count();

            prop_assert_eq!(old_lines, a.len());
            prop_assert_eq!(new_lines, b.len());
            // one emission per position, a replacement pair counting once
            prop_assert_eq!(result.len() - replaced, a.len().max(b.len()));
        }
    }
}
