//! Classifier
//!
//! Config driven wrapper around a single `Tree`: fit on a table, classify
//! rows and score predictions against the target column.
use crate::config::{TieBreak, TreeConfig};
use crate::data::{Row, Table};
use crate::errors::TreeError;
use crate::metric::accuracy;
use crate::tree::Tree;
use log::info;
use rayon::ThreadPool;
use std::time::Instant;

/// Decision tree classifier over categorical attributes.
#[derive(Clone, Debug)]
pub struct DecisionTreeClassifier {
    pub cfg: TreeConfig,
    pub tree: Tree,
}

impl DecisionTreeClassifier {
    pub fn new(cfg: TreeConfig) -> Self {
        DecisionTreeClassifier {
            tree: Tree::with_tie_break(cfg.tie_break),
            cfg,
        }
    }

    // Set methods for parameters

    /// Set the maximum depth of the tree.
    /// * `max_depth` - Depth at which nodes stop splitting, 0 keeps only the root.
    pub fn set_max_depth(mut self, max_depth: usize) -> Self {
        self.cfg.max_depth = max_depth;
        self
    }

    /// Set the tie-break policy.
    /// * `tie_break` - Ordering of equal gains and equal class counts.
    pub fn set_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.cfg.tie_break = tie_break;
        self.tree.tie_break = tie_break;
        self
    }

    /// Set the number of threads used for batch prediction.
    pub fn set_num_threads(mut self, num_threads: Option<usize>) -> Self {
        self.cfg.num_threads = num_threads;
        self
    }

    pub fn set_verbose(mut self, verbose: bool) -> Self {
        self.cfg.verbose = verbose;
        self
    }

    /// Fit the tree on every row of `table`.
    pub fn fit(&mut self, table: &Table) -> Result<(), TreeError> {
        let start = Instant::now();
        self.tree = Tree::with_tie_break(self.cfg.tie_break);
        self.tree.fit(
            table,
            self.cfg.attributes.as_slice(),
            &self.cfg.target,
            self.cfg.max_depth,
        )?;
        if self.cfg.verbose {
            info!(
                "Finished building a tree with {0} nodes, {1} leaves and depth {2} in {3} ms.",
                self.tree.nodes.len(),
                self.tree.n_leaves,
                self.tree.depth,
                start.elapsed().as_millis()
            );
        }
        Ok(())
    }

    /// Classify a single row.
    pub fn predict_row(&self, row: &Row) -> Result<String, TreeError> {
        self.tree.predict_row(row)
    }

    /// Classify every row on a thread pool sized by `num_threads`.
    pub fn predict(&self, rows: &[Row]) -> Result<Vec<String>, TreeError> {
        let pool = self.thread_pool()?;
        pool.install(|| self.tree.predict(rows, true))
    }

    /// Accuracy, in percent, of the predictions on `table` against its target column.
    pub fn score(&self, table: &Table) -> Result<f64, TreeError> {
        let actual = table.column(&self.cfg.target)?;
        let predicted = self.predict(&table.rows)?;
        accuracy(&actual, &predicted)
    }

    fn thread_pool(&self) -> Result<ThreadPool, TreeError> {
        // 0 lets rayon pick the number of threads.
        let num_threads = self.cfg.num_threads.unwrap_or(0);
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map_err(|e| {
                TreeError::InvalidParameter(
                    "num_threads".to_string(),
                    "a buildable thread pool".to_string(),
                    e.to_string(),
                )
            })
    }
}
