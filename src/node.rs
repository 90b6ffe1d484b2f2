use crate::config::TieBreak;
use crate::entropy::{majority_class, SplitCandidate};
use hashbrown::HashMap;
use std::fmt;

/// A node of the decision tree.
///
/// Nodes live in the arena of their `Tree`; `children` and `parent` are
/// positions in that arena. Only the parent-to-children direction implies
/// ownership of a subset.
#[derive(Clone, Debug)]
pub struct Node {
    pub num: usize,
    pub depth: usize,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
    /// Training rows that reached this node.
    pub index: Vec<usize>,
    /// Attribute this node splits on, empty while the node is a leaf.
    pub split_attribute: String,
    /// Value of the parent's split attribute leading to this node.
    pub split_value: String,
    pub split_gain: f64,
    pub target_distribution: HashMap<String, usize>,
    pub prediction: Option<String>,
}

impl Node {
    /// Create a leaf node, the split is filled in by `make_parent_node`.
    pub fn new(
        num: usize,
        depth: usize,
        parent: Option<usize>,
        index: Vec<usize>,
        split_value: String,
        target_distribution: HashMap<String, usize>,
    ) -> Self {
        Node {
            num,
            depth,
            parent,
            children: Vec::new(),
            index,
            split_attribute: String::new(),
            split_value,
            split_gain: 0.0,
            target_distribution,
            prediction: None,
        }
    }

    /// Record the chosen split and the arena positions of the new children.
    pub fn make_parent_node(&mut self, split: SplitCandidate, children: Vec<usize>) {
        self.split_attribute = split.attribute;
        self.split_gain = split.gain;
        self.children = children;
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The only class present in the subset, if there is exactly one.
    pub fn pure_class(&self) -> Option<&str> {
        let mut present = self.target_distribution.iter().filter(|(_, c)| **c > 0);
        match (present.next(), present.next()) {
            (Some((class, _)), None) => Some(class.as_str()),
            _ => None,
        }
    }

    pub fn is_pure(&self) -> bool {
        self.pure_class().is_some()
    }

    /// Value returned when prediction stops at this node.
    pub fn leaf_value(&self, tie_break: TieBreak) -> Option<&str> {
        self.prediction
            .as_deref()
            .or_else(|| majority_class(&self.target_distribution, tie_break))
    }
}

impl fmt::Display for Node {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut distribution: Vec<_> = self.target_distribution.iter().collect();
        distribution.sort();
        let distribution = distribution
            .iter()
            .map(|(k, v)| format!("{}:{}", k, v))
            .collect::<Vec<_>>()
            .join(",");
        let value = if self.parent.is_some() {
            format!("[{}] ", self.split_value)
        } else {
            String::new()
        };
        if self.is_leaf() {
            let prediction = self.prediction.as_deref().unwrap_or("-");
            write!(f, "{}:{}leaf={},dist={{{}}}", self.num, value, prediction, distribution)
        } else {
            write!(
                f,
                "{}:{}split={},gain={:.4},dist={{{}}}",
                self.num, value, self.split_attribute, self.split_gain, distribution
            )
        }
    }
}
