//! Entropy
//!
//! Shannon entropy of a class distribution and the information gain of
//! partitioning a subset of rows on a categorical attribute.
use crate::config::TieBreak;
use crate::data::Table;
use crate::errors::TreeError;
use hashbrown::HashMap;
use std::cmp::Ordering;

/// Gain of splitting a subset on one attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitCandidate {
    pub gain: f64,
    pub attribute: String,
}

impl SplitCandidate {
    /// Order by gain, then by attribute name.
    fn rank(&self, other: &Self) -> Ordering {
        self.gain
            .total_cmp(&other.gain)
            .then_with(|| self.attribute.cmp(&other.attribute))
    }
}

/// Count the occurrences of every class of `target` within the subset.
pub fn class_counts(table: &Table, index: &[usize], target: &str) -> Result<HashMap<String, usize>, TreeError> {
    let mut counts = HashMap::new();
    for &i in index {
        let class = table.value(i, target)?;
        *counts.entry(class.to_string()).or_insert(0) += 1;
    }
    Ok(counts)
}

/// A single `-p * log2(p)` term with `p = count / total`.
///
/// A zero count contributes exactly 0, `log2(0)` is never evaluated.
pub fn entropy_term(count: usize, total: usize) -> Result<f64, TreeError> {
    if total == 0 {
        return Err(TreeError::UndefinedEntropyTerm { count, total });
    }
    if count == 0 {
        return Ok(0.0);
    }
    let p = count as f64 / total as f64;
    Ok(-p * p.log2())
}

/// Entropy, in bits, of a class histogram over `total` rows.
pub fn distribution_entropy(counts: &HashMap<String, usize>, total: usize) -> Result<f64, TreeError> {
    counts.values().map(|&c| entropy_term(c, total)).sum()
}

/// Entropy, in bits, of the `target` column over the subset.
///
/// Returns 0 exactly when every row shares the same class.
pub fn target_entropy(table: &Table, index: &[usize], target: &str) -> Result<f64, TreeError> {
    if index.is_empty() {
        return Err(TreeError::EmptyDataset);
    }
    let counts = class_counts(table, index, target)?;
    if counts.len() == 1 {
        return Ok(0.0);
    }
    distribution_entropy(&counts, index.len())
}

/// Information gain of partitioning the subset on `attribute`.
///
/// The weighted entropy of the partitions is subtracted from the entropy of
/// the whole subset, a partition holding a single class counts as 0.
pub fn information_gain(
    table: &Table,
    index: &[usize],
    attribute: &str,
    target: &str,
) -> Result<SplitCandidate, TreeError> {
    let parent_entropy = target_entropy(table, index, target)?;
    let total = index.len() as f64;
    let mut weighted = 0.0;
    for (_, part) in table.partition(index, attribute)? {
        let counts = class_counts(table, &part, target)?;
        if counts.len() <= 1 {
            continue;
        }
        weighted += (part.len() as f64 / total) * distribution_entropy(&counts, part.len())?;
    }
    Ok(SplitCandidate {
        gain: (parent_entropy - weighted).abs(),
        attribute: attribute.to_string(),
    })
}

/// Select the candidate with the highest gain.
///
/// Returns `None` if there are no candidates.
pub fn best_split(candidates: Vec<SplitCandidate>, tie_break: TieBreak) -> Option<SplitCandidate> {
    match tie_break {
        TieBreak::GreatestName => candidates.into_iter().max_by(|a, b| a.rank(b)),
        TieBreak::FirstSeen => candidates.into_iter().reduce(|best, c| {
            if c.gain.total_cmp(&best.gain) == Ordering::Greater {
                c
            } else {
                best
            }
        }),
    }
}

/// Class with the highest count, ties are resolved with `tie_break`.
pub fn majority_class<'a, I>(counts: I, tie_break: TieBreak) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a String, &'a usize)>,
{
    let mut ranked: Vec<(&str, usize)> = counts.into_iter().map(|(k, &v)| (k.as_str(), v)).collect();
    if tie_break == TieBreak::FirstSeen {
        // Histograms have no stable order, fall back to the smallest name.
        ranked.sort_by(|a, b| a.0.cmp(b.0));
        return ranked
            .into_iter()
            .reduce(|best, c| if c.1 > best.1 { c } else { best })
            .map(|(k, _)| k);
    }
    ranked
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)))
        .map(|(k, _)| k)
}
