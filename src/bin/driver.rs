//! Exercises a [`Tree`] end to end: build it from random values, print every
//! traversal, unbalance it with an ascending run of larger values, rebalance
//! it, and print every traversal again.

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use rebalancing_bst::{Tree, TreeError};

#[derive(Debug, Parser)]
#[command(about = "Build, unbalance, and rebalance a binary search tree")]
struct Args {
    /// How many random values to build the tree from.
    #[arg(long, env = "BST_COUNT", default_value_t = 15)]
    count: usize,

    /// Random values are drawn from `1..=max`.
    #[arg(
        long,
        env = "BST_MAX",
        default_value_t = 100,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    max: u32,

    /// How many values above `max` to insert to unbalance the tree.
    #[arg(long, env = "BST_UNBALANCE", default_value_t = 10)]
    unbalance: u32,

    /// Seed for the random values. Drawn from entropy when not set.
    #[arg(long, env = "BST_SEED")]
    seed: Option<u64>,
}

fn print_traversals(tree: &Tree<u32>) {
    println!("level order: {:?}", tree.level_order());
    println!("preorder:    {:?}", tree.preorder());
    println!("postorder:   {:?}", tree.postorder());
    println!("inorder:     {:?}", tree.inorder());
}

/// Inserts up to `count` ascending values just above `max`, stopping early if
/// they would run past `u32::MAX`. Returns how many were inserted.
fn unbalance(tree: &mut Tree<u32>, max: u32, count: u32) -> Result<u32, TreeError> {
    let mut inserted = 0;
    for offset in 1..=count {
        let Some(value) = max.checked_add(offset) else {
            warn!(inserted, requested = count, "ran out of values above max");
            break;
        };
        tree.insert(value)?;
        inserted += 1;
    }

    Ok(inserted)
}

fn main() -> Result<(), TreeError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let values: Vec<u32> = (0..args.count)
        .map(|_| rng.gen_range(1..=args.max))
        .collect();
    info!(count = values.len(), "building tree");

    let mut tree = Tree::new(values);
    println!("balanced: {}", tree.is_balanced());
    print_traversals(&tree);

    let inserted = unbalance(&mut tree, args.max, args.unbalance)?;
    info!(
        inserted,
        len = tree.len(),
        height = tree.height(),
        "unbalanced tree"
    );
    println!("balanced: {}", tree.is_balanced());

    tree.rebalance();
    info!(len = tree.len(), height = tree.height(), "rebalanced tree");
    println!("balanced: {}", tree.is_balanced());
    print_traversals(&tree);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbalance_inserts_above_max() {
        let mut tree = Tree::new(vec![1, 5, 9]);

        assert_eq!(unbalance(&mut tree, 9, 4), Ok(4));
        assert_eq!(tree.inorder(), vec![1, 5, 9, 10, 11, 12, 13]);
        assert!(!tree.is_balanced());
    }

    #[test]
    fn unbalance_stops_at_the_largest_value() {
        let mut tree = Tree::new(vec![u32::MAX - 1]);

        assert_eq!(unbalance(&mut tree, u32::MAX - 1, 3), Ok(1));
        assert_eq!(tree.inorder(), vec![u32::MAX - 1, u32::MAX]);

        let mut tree = Tree::new(vec![u32::MAX]);
        assert_eq!(unbalance(&mut tree, u32::MAX, 3), Ok(0));
        assert_eq!(tree.len(), 1);
    }
}
