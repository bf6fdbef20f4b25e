use std::fmt;
use std::str::FromStr;

/// Selects the strategy [`sort_with`](crate::sort_with) runs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    /// Partition sort that finishes small sub-ranges with insertion sort.
    #[default]
    Default,
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 6] = [
        SortAlgorithm::Default,
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Default => "Default Sort",
            SortAlgorithm::Bubble => "Bubble Sort",
            SortAlgorithm::Selection => "Selection Sort",
            SortAlgorithm::Insertion => "Insertion Sort",
            SortAlgorithm::Merge => "Merge Sort",
            SortAlgorithm::Quick => "Quick Sort",
        }
    }

    /// Returns `true` if equal elements keep their relative input order.
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            SortAlgorithm::Bubble
                | SortAlgorithm::Selection
                | SortAlgorithm::Insertion
                | SortAlgorithm::Merge
        )
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseSortAlgorithmError {
    input: String,
}

impl fmt::Display for ParseSortAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown sort algorithm `{}`, expected one of: default, bubble, selection, insertion, \
             merge, quick",
            self.input
        )
    }
}

impl std::error::Error for ParseSortAlgorithmError {}

impl FromStr for SortAlgorithm {
    type Err = ParseSortAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(SortAlgorithm::Default),
            "bubble" => Ok(SortAlgorithm::Bubble),
            "selection" => Ok(SortAlgorithm::Selection),
            "insertion" => Ok(SortAlgorithm::Insertion),
            "merge" => Ok(SortAlgorithm::Merge),
            "quick" => Ok(SortAlgorithm::Quick),
            _ => Err(ParseSortAlgorithmError {
                input: s.to_owned(),
            }),
        }
    }
}
