pub mod predict;
pub mod tree;

pub use predict::{classify, classify_batch};
pub use tree::{build_tree, Tree};

// Unit-testing
#[cfg(test)]
mod tests {

    use crate::data::Table;
    use crate::metric::accuracy;
    use crate::tree::{build_tree, classify_batch};
    use crate::utils::precision_round;

    use std::error::Error;

    const ATTRIBUTES: [&str; 4] = ["Outlook", "Temperature", "Humidity", "Windy"];

    fn read_table(path: &str) -> Result<Table, Box<dyn Error>> {
        let mut reader = csv::Reader::from_path(path)?;
        let columns = reader.headers()?.iter().map(String::from).collect();
        let mut table = Table::new(columns);
        for record in reader.records() {
            table.push(record?.iter().map(String::from).collect())?;
        }
        Ok(table)
    }

    #[test]
    fn test_tree_golf() -> Result<(), Box<dyn Error>> {
        let train = read_table("resources/golf.csv")?;
        let tree = build_tree(&train, &ATTRIBUTES, "PLAY", 3)?;
        println!("{}", tree);

        let root = &tree.nodes[0];
        assert_eq!(root.split_attribute, "Outlook");
        let splits: Vec<(&str, &str)> = root
            .children
            .iter()
            .map(|&c| (tree.nodes[c].split_value.as_str(), tree.nodes[c].split_attribute.as_str()))
            .collect();
        assert_eq!(splits, vec![("sunny", "Humidity"), ("overcast", ""), ("rain", "Windy")]);
        assert_eq!(tree.nodes.len(), 8);
        assert_eq!(tree.n_leaves, 5);
        assert_eq!(tree.depth, 2);

        // Every leaf is pure and predicts its only class.
        for leaf in tree.nodes.iter().filter(|n| n.is_leaf()) {
            assert_eq!(leaf.target_distribution.len(), 1);
            assert_eq!(leaf.prediction.as_deref(), leaf.pure_class());
        }

        // Leaf subsets partition the training rows.
        let mut covered: Vec<usize> = tree
            .nodes
            .iter()
            .filter(|n| n.is_leaf())
            .flat_map(|n| n.index.iter().copied())
            .collect();
        covered.sort();
        assert_eq!(covered, train.index());

        let train_preds = classify_batch(&tree, &train.rows)?;
        assert_eq!(accuracy(&train.column("PLAY")?, &train_preds)?, 100.0);

        let test = read_table("resources/golf_test.csv")?;
        let preds = classify_batch(&tree, &test.rows)?;
        assert_eq!(preds, vec!["no", "yes", "yes", "yes", "no", "yes"]);
        let acc = accuracy(&test.column("PLAY")?, &preds)?;
        assert_eq!(precision_round(acc, 4), 66.6667);
        Ok(())
    }

    #[test]
    fn test_predict_table_from_rows() -> Result<(), Box<dyn Error>> {
        let train = read_table("resources/golf.csv")?;
        let tree = build_tree(&train, &ATTRIBUTES, "PLAY", 3)?;

        let test = read_table("resources/golf_test.csv")?;
        let table = Table::from_rows(test.columns.clone(), test.rows.clone());
        assert_eq!(table, test);
        assert_eq!(table.len(), 6);

        let expected = classify_batch(&tree, &test.rows)?;
        assert_eq!(tree.predict_table(&table, false)?, expected);
        assert_eq!(tree.predict_table(&table, true)?, expected);

        // Fitting on the rebuilt table gives the same tree.
        let from_rows = Table::from_rows(train.columns.clone(), train.rows.clone());
        let rebuilt = build_tree(&from_rows, &ATTRIBUTES, "PLAY", 3)?;
        assert_eq!(format!("{}", rebuilt), format!("{}", tree));
        Ok(())
    }

    #[test]
    fn test_tree_golf_shallow() -> Result<(), Box<dyn Error>> {
        let train = read_table("resources/golf.csv")?;
        let tree = build_tree(&train, &ATTRIBUTES, "PLAY", 1)?;
        assert_eq!(tree.nodes.len(), 4);
        let predictions: Vec<&str> = tree.nodes[1..]
            .iter()
            .map(|n| n.prediction.as_deref().unwrap_or_default())
            .collect();
        assert_eq!(predictions, vec!["no", "yes", "yes"]);

        let test = read_table("resources/golf_test.csv")?;
        let preds = classify_batch(&tree, &test.rows)?;
        assert_eq!(accuracy(&test.column("PLAY")?, &preds)?, 100.0);
        Ok(())
    }
}
