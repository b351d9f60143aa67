//! The tree both panes show.

use arbor::TreeError;
use arbor::node::{NodeId, TreeModel};

/// A root with four children, one collapsed branch hiding a deep chain
/// (with a hidden link) and one long expanded chain.
pub fn build() -> Result<(TreeModel<String>, NodeId), TreeError> {
    let mut model = TreeModel::new();
    let root = model.insert("root".to_string())?;
    let child1 = model.add_child_value(root, "child_1".to_string(), false)?;
    let child2 = model.add_child_value(root, "child_2".to_string(), true)?;
    model.add_child_value(root, "child_3".to_string(), true)?;
    model.add_child_value(root, "child_44".to_string(), true)?;

    let child4 = model.add_child_value(child1, "child_4".to_string(), true)?;
    for i in 5..8 {
        model.add_child_value(child4, format!("child_{i}"), true)?;
    }

    let mut parent = child4;
    for i in 9..20 {
        parent = model.add_child_value(parent, format!("child_{i}"), true)?;
        if i == 9 {
            model.set_visible(parent, false)?;
            model.set_label(parent, "child_9 (hidden)")?;
        }
    }

    let mut parent = child2;
    for i in 20..30 {
        parent = model.add_child_value(parent, format!("child_{i}"), true)?;
    }

    Ok((model, root))
}
