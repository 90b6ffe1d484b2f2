mod node;

// Modules
pub mod classifier;
pub mod config;
pub mod constants;
pub mod data;
pub mod entropy;
pub mod errors;
pub mod metric;
pub mod tree;
pub mod utils;

// Individual classes, and functions
pub use classifier::DecisionTreeClassifier;
pub use config::{TieBreak, TreeConfig};
pub use data::{Row, Table};
pub use errors::TreeError;
pub use metric::accuracy;
pub use node::Node;
pub use tree::{build_tree, classify, classify_batch, Tree};
