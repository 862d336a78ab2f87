use std::iter;

use crate::tree::DirectoryNode;

/// Which directory totals are collected by [`DirectoryNode::summarize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeLimits {
    /// Totals at or below this are added to `bounded_sum`.
    pub at_most: u64,
    /// Totals at or above this are candidates for `min_candidate`. `None`
    /// disables the search.
    pub at_least: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeSummary {
    pub total: u64,
    pub bounded_sum: u64,
    pub min_candidate: Option<u64>,
}

impl SizeSummary {
    fn merge(self, other: Self) -> Self {
        Self {
            total: self.total.saturating_add(other.total),
            bounded_sum: self.bounded_sum.saturating_add(other.bounded_sum),
            min_candidate: min_of(self.min_candidate, other.min_candidate),
        }
    }
}

fn min_of(a: Option<u64>, b: Option<u64>) -> Option<u64> {
    a.into_iter().chain(b).min()
}

/// Sizes are unbounded in the transcript, so totals saturate at `u64::MAX`.
fn saturating_sum(sizes: impl Iterator<Item = u64>) -> u64 {
    sizes.fold(0, u64::saturating_add)
}

impl DirectoryNode {
    pub fn total_size(&self) -> u64 {
        saturating_sum(
            self.files()
                .values()
                .copied()
                .chain(self.subdirectories().values().map(|d| d.total_size())),
        )
    }

    /// Totals every directory below (and including) this one in a single
    /// post-order pass and folds them into the two aggregates of `limits`.
    pub fn summarize(&self, limits: &SizeLimits) -> SizeSummary {
        let children = self
            .subdirectories()
            .values()
            .map(|d| d.summarize(limits))
            .fold(SizeSummary::default(), SizeSummary::merge);

        let total = children
            .total
            .saturating_add(saturating_sum(self.files().values().copied()));

        SizeSummary {
            total,
            bounded_sum: if total <= limits.at_most {
                children.bounded_sum.saturating_add(total)
            } else {
                children.bounded_sum
            },
            min_candidate: min_of(
                children.min_candidate,
                limits.at_least.filter(|&least| total >= least).map(|_| total),
            ),
        }
    }

    /// Every directory as a `/`-joined path with its total size, children
    /// before their parent.
    pub fn directory_sizes(&self) -> Vec<(String, u64)> {
        self.sizes_under("/")
    }

    fn sizes_under(&self, path: &str) -> Vec<(String, u64)> {
        let mut total = saturating_sum(self.files().values().copied());
        let mut sizes = vec![];

        for (name, dir) in self.subdirectories() {
            let child_path = format!("{}/{name}", path.trim_end_matches('/'));
            let child_sizes = dir.sizes_under(&child_path);
            total = total.saturating_add(child_sizes.last().map_or(0, |(_, size)| *size));
            sizes.extend(child_sizes);
        }

        sizes.into_iter().chain(iter::once((path.to_string(), total))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> DirectoryNode {
        DirectoryNode::from_transcript(include_str!("../data/test_input").lines())
    }

    fn all_file_sizes(dir: &DirectoryNode) -> u64 {
        dir.files().values().sum::<u64>()
            + dir
                .subdirectories()
                .values()
                .map(all_file_sizes)
                .sum::<u64>()
    }

    #[test]
    fn small_tree_totals() {
        let root = DirectoryNode::from_transcript(
            ["$ cd /", "$ ls", "100 a", "dir b", "$ cd b", "$ ls", "200 c"].into_iter(),
        );

        assert_eq!(root.total_size(), 300);
        assert_eq!(root.get(&["b"]).unwrap().total_size(), 200);
    }

    #[test]
    fn root_total_is_sum_of_all_files() {
        let root = sample();
        assert_eq!(root.total_size(), all_file_sizes(&root));
        assert_eq!(root.total_size(), 48381165);
    }

    #[test]
    fn directory_sizes_are_post_order() {
        assert_eq!(
            sample().directory_sizes(),
            vec![
                ("/a/e".to_string(), 584),
                ("/a".to_string(), 94853),
                ("/d".to_string(), 24933642),
                ("/".to_string(), 48381165),
            ]
        );
    }

    #[rstest]
    #[case(100000, None)]
    #[case(0, Some(1))]
    #[case(50000000, Some(8381165))]
    #[case(u64::MAX, None)]
    fn summary_matches_directory_sizes(#[case] at_most: u64, #[case] at_least: Option<u64>) {
        let root = sample();
        let limits = SizeLimits { at_most, at_least };
        let sizes = root
            .directory_sizes()
            .into_iter()
            .map(|(_, size)| size)
            .collect::<Vec<_>>();

        let summary = root.summarize(&limits);

        assert_eq!(summary.total, root.total_size());
        assert_eq!(
            summary.bounded_sum,
            sizes.iter().filter(|&&s| s <= at_most).sum::<u64>()
        );
        assert_eq!(
            summary.min_candidate,
            at_least.and_then(|least| sizes.iter().copied().filter(|&s| s >= least).min())
        );
        assert_eq!(root.summarize(&limits), summary);
    }

    #[test]
    fn sample_answers() {
        let summary = sample().summarize(&SizeLimits {
            at_most: 100000,
            at_least: Some(8381165),
        });

        assert_eq!(summary.bounded_sum, 95437);
        assert_eq!(summary.min_candidate, Some(24933642));
    }

    #[test]
    fn huge_sizes_saturate() {
        let root = DirectoryNode::from_transcript(
            [
                "$ cd /",
                "18446744073709551615 a",
                "18446744073709551615 b",
                "dir d",
                "$ cd d",
                "18446744073709551615 c",
            ]
            .into_iter(),
        );

        assert_eq!(root.total_size(), u64::MAX);
        assert_eq!(root.get(&["d"]).unwrap().total_size(), u64::MAX);

        let summary = root.summarize(&SizeLimits {
            at_most: u64::MAX,
            at_least: Some(0),
        });
        assert_eq!(summary.total, u64::MAX);
        assert_eq!(summary.bounded_sum, u64::MAX);
        assert_eq!(summary.min_candidate, Some(u64::MAX));
        assert_eq!(
            root.directory_sizes(),
            vec![("/d".to_string(), u64::MAX), ("/".to_string(), u64::MAX)]
        );
    }

    #[test]
    fn no_candidate_is_not_found() {
        let summary = sample().summarize(&SizeLimits {
            at_most: 100000,
            at_least: Some(48381166),
        });
        assert_eq!(summary.min_candidate, None);

        let empty = DirectoryNode::new().summarize(&SizeLimits {
            at_most: 100000,
            at_least: Some(1),
        });
        assert_eq!(empty.total, 0);
        assert_eq!(empty.min_candidate, None);
    }
}
