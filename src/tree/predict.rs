//! Tree Prediction Methods
//!
//! Traversal of a fitted tree for single rows and batches of rows.
use super::tree::Tree;
use crate::data::{Row, Table};
use crate::errors::TreeError;
use crate::node::Node;
use rayon::prelude::*;

impl Tree {
    /// Position of the child of `node` matching the row's value of the
    /// split attribute.
    fn get_child_idx(&self, node: &Node, row: &Row, row_num: usize) -> Result<usize, TreeError> {
        let value = row.get(&node.split_attribute).ok_or_else(|| TreeError::MissingValue {
            row: row_num,
            attribute: node.split_attribute.clone(),
        })?;
        node.children
            .iter()
            .copied()
            .find(|&c| &self.nodes[c].split_value == value)
            .ok_or_else(|| TreeError::NoMatchingBranch {
                node: node.num,
                row: row_num,
                attribute: node.split_attribute.clone(),
                value: value.clone(),
            })
    }

    /// Nodes visited by a row, from the root down to the leaf it ends in.
    ///
    /// `row_num` is only used to identify the row in errors.
    pub fn decision_path(&self, row: &Row, row_num: usize) -> Result<Vec<usize>, TreeError> {
        let mut node = self.root().ok_or(TreeError::EmptyDataset)?;
        let mut path = vec![node.num];
        while !node.is_leaf() {
            let child_idx = self.get_child_idx(node, row, row_num)?;
            node = &self.nodes[child_idx];
            path.push(child_idx);
        }
        Ok(path)
    }

    fn predict_row_num(&self, row: &Row, row_num: usize) -> Result<String, TreeError> {
        let mut node = self.root().ok_or(TreeError::EmptyDataset)?;
        while !node.is_leaf() {
            node = &self.nodes[self.get_child_idx(node, row, row_num)?];
        }
        node.leaf_value(self.tie_break)
            .map(String::from)
            .ok_or(TreeError::EmptyDataset)
    }

    /// Predict the class of a single row.
    ///
    /// Errors name the row as row 0.
    pub fn predict_row(&self, row: &Row) -> Result<String, TreeError> {
        self.predict_row_num(row, 0)
    }

    /// Predict the class of every row, keeping the input order.
    ///
    /// * `rows` - Rows to classify.
    /// * `parallel` - Classify on the current rayon thread pool.
    ///
    /// On failure the error of the lowest failing row is returned, whichever
    /// path is taken.
    pub fn predict(&self, rows: &[Row], parallel: bool) -> Result<Vec<String>, TreeError> {
        if parallel {
            let predictions: Result<Vec<String>, TreeError> = rows
                .par_iter()
                .enumerate()
                .map(|(i, row)| self.predict_row_num(row, i))
                .collect();
            // Workers stop at whichever failure they meet first, rerun in
            // order to name the first bad row.
            predictions.or_else(|_| self.predict(rows, false))
        } else {
            rows.iter()
                .enumerate()
                .map(|(i, row)| self.predict_row_num(row, i))
                .collect()
        }
    }

    /// Predict the class of every row of a table.
    pub fn predict_table(&self, table: &Table, parallel: bool) -> Result<Vec<String>, TreeError> {
        self.predict(&table.rows, parallel)
    }
}

/// Classify a single row.
pub fn classify(tree: &Tree, row: &Row) -> Result<String, TreeError> {
    tree.predict_row(row)
}

/// Classify rows in order, the output has one label per input row.
pub fn classify_batch(tree: &Tree, rows: &[Row]) -> Result<Vec<String>, TreeError> {
    tree.predict(rows, true)
}
