use crate::config::TieBreak;
use crate::constants::TREE_INDENT;
use crate::data::Table;
use crate::entropy::{best_split, class_counts, information_gain};
use crate::errors::TreeError;
use crate::node::Node;
use hashbrown::HashMap;
use log::{debug, warn};
use std::cmp::max;
use std::fmt::{self, Display};

/// A categorical decision tree stored as an arena of nodes.
///
/// The root is always at position 0, every other node is reachable from it
/// through `Node::children`.
#[derive(Clone, Debug)]
pub struct Tree {
    pub nodes: Vec<Node>,
    pub target: String,
    pub tie_break: TieBreak,
    pub depth: usize,
    pub n_leaves: usize,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    pub fn new() -> Self {
        Tree {
            nodes: Vec::new(),
            target: String::new(),
            tie_break: TieBreak::GreatestName,
            depth: 0,
            n_leaves: 0,
        }
    }

    pub fn with_tie_break(tie_break: TieBreak) -> Self {
        Tree {
            tie_break,
            ..Self::new()
        }
    }

    /// Induce the tree from every row of `table`.
    ///
    /// * `table` - Training rows.
    /// * `attributes` - Candidate split attributes, in scan order. Each one is
    ///   split on at most once in the whole tree.
    /// * `target` - Column holding the class label.
    /// * `max_depth` - Depth at which nodes stop splitting, 0 keeps only the root.
    pub fn fit<S: AsRef<str>>(
        &mut self,
        table: &Table,
        attributes: &[S],
        target: &str,
        max_depth: usize,
    ) -> Result<(), TreeError> {
        if table.is_empty() {
            return Err(TreeError::EmptyDataset);
        }
        table.check_column(target)?;
        let mut pool = Vec::with_capacity(attributes.len());
        for attribute in attributes {
            let attribute = attribute.as_ref();
            table.check_column(attribute)?;
            pool.push(attribute.to_string());
        }

        self.nodes.clear();
        self.target = target.to_string();
        self.depth = 0;

        let index = table.index();
        let target_distribution = class_counts(table, &index, target)?;
        self.nodes
            .push(Node::new(0, 0, None, index, String::new(), target_distribution));

        if let Err(e) = self.build(table, 0, &mut pool, max_depth, 0) {
            self.nodes.clear();
            self.depth = 0;
            return Err(e);
        }
        self.n_leaves = self.nodes.iter().filter(|n| n.is_leaf()).count();
        Ok(())
    }

    /// Split `node_idx` and recurse depth-first into its impure children.
    ///
    /// `pool` is shared by the whole build, an attribute removed here is no
    /// longer available to any other branch.
    fn build(
        &mut self,
        table: &Table,
        node_idx: usize,
        pool: &mut Vec<String>,
        max_depth: usize,
        depth: usize,
    ) -> Result<(), TreeError> {
        if depth == max_depth {
            let tie_break = self.tie_break;
            let node = &mut self.nodes[node_idx];
            if node.prediction.is_none() {
                if !node.is_pure() {
                    warn!(
                        "Node {} reached max depth {} with mixed classes, using the majority class.",
                        node.num, max_depth
                    );
                }
                node.prediction = node.leaf_value(tie_break).map(String::from);
            }
            return Ok(());
        }

        if self.nodes[node_idx].is_leaf() {
            let index = self.nodes[node_idx].index.clone();
            let candidates = pool
                .iter()
                .map(|attribute| information_gain(table, &index, attribute, &self.target))
                .collect::<Result<Vec<_>, _>>()?;
            let split =
                best_split(candidates, self.tie_break).ok_or(TreeError::NoAttributesRemaining { node: node_idx })?;
            pool.retain(|a| a != &split.attribute);

            let mut children = Vec::new();
            for (value, part) in table.partition(&index, &split.attribute)? {
                let num = self.nodes.len();
                let target_distribution = class_counts(table, &part, &self.target)?;
                let mut child = Node::new(num, depth + 1, Some(node_idx), part, value, target_distribution);
                child.prediction = child.pure_class().map(String::from);
                self.nodes.push(child);
                children.push(num);
            }
            self.depth = max(self.depth, depth + 1);

            debug!(
                "node {}, split: {}, gain: {:.4}, children: {}",
                node_idx,
                split.attribute,
                split.gain,
                children.len()
            );
            self.nodes[node_idx].make_parent_node(split, children);
        }

        let children = self.nodes[node_idx].children.clone();
        for child in children {
            if !self.nodes[child].is_pure() {
                self.build(table, child, pool, max_depth, depth + 1)?;
            }
        }
        Ok(())
    }

    pub fn root(&self) -> Option<&Node> {
        self.nodes.first()
    }

    /// Total split gain and number of splits per attribute.
    pub fn attribute_importance(&self) -> HashMap<String, (f64, usize)> {
        let mut stats = HashMap::new();
        for node in self.nodes.iter().filter(|n| !n.is_leaf()) {
            stats
                .entry(node.split_attribute.clone())
                .and_modify(|(g, c): &mut (f64, usize)| {
                    *g += node.split_gain;
                    *c += 1;
                })
                .or_insert((node.split_gain, 1));
        }
        stats
    }
}

impl Display for Tree {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut print_buffer: Vec<usize> = if self.nodes.is_empty() { Vec::new() } else { vec![0] };
        let mut r = String::new();
        while let Some(idx) = print_buffer.pop() {
            let node = &self.nodes[idx];
            r += format!("{}{}\n", TREE_INDENT.repeat(node.depth).as_str(), node).as_str();
            print_buffer.extend(node.children.iter().rev());
        }
        write!(f, "{}", r)
    }
}

/// Build a tree over every row of `table` with the default tie-break.
pub fn build_tree<S: AsRef<str>>(
    table: &Table,
    attributes: &[S],
    target: &str,
    max_depth: usize,
) -> Result<Tree, TreeError> {
    let mut tree = Tree::new();
    tree.fit(table, attributes, target, max_depth)?;
    Ok(tree)
}

// Unit-testing
#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Table {
        Table::from_records(
            &["Outlook", "Windy", "PLAY"],
            &[
                vec!["sunny", "false", "no"],
                vec!["sunny", "true", "no"],
                vec!["rain", "false", "yes"],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_tree_fit_scenario() {
        let table = scenario();
        let tree = build_tree(&table, &["Outlook", "Windy"], "PLAY", 2).unwrap();
        let root = tree.root().unwrap();
        assert_eq!(root.split_attribute, "Outlook");
        assert_eq!(root.children, vec![1, 2]);
        assert_eq!(tree.nodes.len(), 3);
        assert_eq!(tree.n_leaves, 2);
        assert_eq!(tree.depth, 1);

        let sunny = &tree.nodes[1];
        assert_eq!(sunny.split_value, "sunny");
        assert_eq!(sunny.parent, Some(0));
        assert_eq!(sunny.index, vec![0, 1]);
        assert_eq!(sunny.prediction.as_deref(), Some("no"));
        let rain = &tree.nodes[2];
        assert_eq!(rain.split_value, "rain");
        assert_eq!(rain.prediction.as_deref(), Some("yes"));
        assert_eq!(rain.target_distribution.get("yes"), Some(&1));
    }

    #[test]
    fn test_tree_max_depth_zero() {
        let table = scenario();
        let tree = build_tree(&table, &["Outlook", "Windy"], "PLAY", 0).unwrap();
        assert_eq!(tree.nodes.len(), 1);
        let root = tree.root().unwrap();
        assert!(root.is_leaf());
        assert!(root.split_attribute.is_empty());
        assert_eq!(root.prediction.as_deref(), Some("no"));
    }

    #[test]
    fn test_tree_pool_is_shared_between_branches() {
        // `a2` consumes B, so `a3` has nothing left to split on even though
        // B was never used on its own path.
        let table = Table::from_records(
            &["A", "B", "y"],
            &[
                vec!["a1", "b1", "p"],
                vec!["a1", "b2", "p"],
                vec!["a1", "b1", "p"],
                vec!["a1", "b2", "p"],
                vec!["a2", "b1", "p"],
                vec!["a2", "b2", "q"],
                vec!["a3", "b1", "q"],
                vec!["a3", "b2", "p"],
            ],
        )
        .unwrap();
        let mut tree = Tree::new();
        let err = tree.fit(&table, &["A", "B"], "y", 3).unwrap_err();
        assert_eq!(err, TreeError::NoAttributesRemaining { node: 3 });
        assert!(tree.nodes.is_empty());

        // With enough depth budget for A only, the same data builds fine.
        tree.fit(&table, &["A", "B"], "y", 1).unwrap();
        assert_eq!(tree.nodes[0].split_attribute, "A");
        assert_eq!(tree.nodes.len(), 4);
    }

    #[test]
    fn test_tree_no_attributes_remaining() {
        let table = scenario();
        let err = build_tree(&table, &["Windy"], "PLAY", 3).unwrap_err();
        assert_eq!(err, TreeError::NoAttributesRemaining { node: 1 });

        let empty: [&str; 0] = [];
        let err = build_tree(&table, &empty, "PLAY", 1).unwrap_err();
        assert_eq!(err, TreeError::NoAttributesRemaining { node: 0 });
    }

    #[test]
    fn test_tree_invalid_input() {
        let table = scenario();
        let empty = Table::new(table.columns.clone());
        assert_eq!(
            build_tree(&empty, &["Outlook"], "PLAY", 2).unwrap_err(),
            TreeError::EmptyDataset
        );
        assert_eq!(
            build_tree(&table, &["Temperature"], "PLAY", 2).unwrap_err(),
            TreeError::UnknownAttribute("Temperature".to_string())
        );
        assert_eq!(
            build_tree(&table, &["Outlook"], "play", 2).unwrap_err(),
            TreeError::UnknownAttribute("play".to_string())
        );
    }

    #[test]
    fn test_tree_tie_break() {
        // Both attributes separate the classes perfectly.
        let table = Table::from_records(
            &["a", "b", "y"],
            &[vec!["1", "x", "p"], vec!["2", "z", "q"]],
        )
        .unwrap();
        let tree = build_tree(&table, &["a", "b"], "y", 1).unwrap();
        assert_eq!(tree.nodes[0].split_attribute, "b");

        let mut tree = Tree::with_tie_break(TieBreak::FirstSeen);
        tree.fit(&table, &["a", "b"], "y", 1).unwrap();
        assert_eq!(tree.nodes[0].split_attribute, "a");
    }

    #[test]
    fn test_attribute_importance_and_display() {
        let table = scenario();
        let tree = build_tree(&table, &["Outlook", "Windy"], "PLAY", 2).unwrap();
        let importance = tree.attribute_importance();
        assert_eq!(importance.len(), 1);
        let (gain, count) = importance["Outlook"];
        assert_eq!(count, 1);
        assert!(gain > 0.9);

        let printed = format!("{}", tree);
        let lines: Vec<&str> = printed.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("0:split=Outlook"));
        assert_eq!(lines[1], format!("{}1:[sunny] leaf=no,dist={{no:2}}", TREE_INDENT));
        assert_eq!(lines[2], format!("{}2:[rain] leaf=yes,dist={{yes:1}}", TREE_INDENT));
    }
}
