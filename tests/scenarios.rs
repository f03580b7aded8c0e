use rebalancing_bst::{DuplicateValueError, Tree, TreeError, ValueNotFoundError};

fn sample() -> Tree<i32> {
    Tree::new(vec![5, 3, 8, 1, 4, 7, 9])
}

#[test]
fn built_tree_is_balanced() {
    let tree = sample();

    assert_eq!(tree.inorder(), vec![1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(tree.level_order(), vec![5, 3, 8, 1, 4, 7, 9]);
    assert_eq!(tree.height(), 2);
    assert!(tree.is_balanced());
    assert!(tree.root().map_or(false, |root| tree.is_balanced_at(root)));
}

#[test]
fn ascending_run_unbalances_and_rebalance_restores() {
    let mut tree = sample();

    for value in [10, 11, 12, 13, 14] {
        tree.insert(value).unwrap();
    }
    assert!(!tree.is_balanced());
    assert_eq!(tree.height(), 7);

    tree.rebalance();
    assert!(tree.is_balanced());
    assert_eq!(
        tree.inorder(),
        vec![1, 3, 4, 5, 7, 8, 9, 10, 11, 12, 13, 14]
    );

    let once = tree.clone();
    tree.rebalance();
    assert_eq!(tree, once);
}

#[test]
fn three_values_in_every_order() {
    let tree = Tree::new(vec![1, 2, 3]);

    assert_eq!(tree.level_order(), vec![2, 1, 3]);
    assert_eq!(tree.preorder(), vec![2, 1, 3]);
    assert_eq!(tree.inorder(), vec![1, 2, 3]);
    assert_eq!(tree.postorder(), vec![1, 3, 2]);
}

#[test]
fn rejected_mutations_change_nothing() {
    let mut tree = sample();
    let before = tree.clone();

    assert_eq!(tree.insert(4), Err(DuplicateValueError));
    assert_eq!(tree.delete(&6), Err(ValueNotFoundError));

    assert_eq!(tree, before);
    assert!(tree.find(&4).is_some());
    assert_eq!(tree.preorder(), before.preorder());
}

#[test]
fn errors_convert_for_question_mark() {
    fn churn(tree: &mut Tree<i32>) -> Result<i32, TreeError> {
        tree.insert(6)?;
        let deleted = tree.delete(&5)?;
        tree.insert(6)?;
        Ok(deleted)
    }

    let mut tree = sample();
    assert_eq!(
        churn(&mut tree),
        Err(TreeError::Duplicate(DuplicateValueError))
    );
    assert!(!tree.contains(&5));
    assert!(tree.contains(&6));
}

#[test]
fn depth_of_found_nodes() {
    let tree = sample();

    for (value, depth) in [(5, 0), (3, 1), (8, 1), (1, 2), (4, 2), (7, 2), (9, 2)] {
        let node = tree.find(&value).unwrap();
        assert_eq!(tree.depth(node), Some(depth));
    }
}
