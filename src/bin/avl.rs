//! Builds an AVL tree from the command line and prints its shape.
//!
//! ```text
//! $ avl --insert 1,2,3,4,5,6,7 --delete 4
//! [[1, 2, 3], 5, [, 6, 7]]
//! ```

use clap::{ArgAction, Parser};
use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use avltree::Tree;

#[derive(Parser, Debug)]
#[command(name = "avl", about = "Builds an AVL tree and prints its shape")]
struct Opts {
    /// Values to insert, in order
    #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
    insert: Vec<i64>,

    /// Values to delete once everything is inserted, in order
    #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
    delete: Vec<i64>,

    /// Replay the four rotation cases instead of building a tree from --insert/--delete
    #[arg(long, conflicts_with_all = ["insert", "delete"])]
    walkthrough: bool,

    /// More logging; repeat for more detail (-vvv traces every rotation)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn print_tree(tree: &Tree<i64>) {
    println!("{}", tree);
    info!(
        "in order: {:?}, height: {}",
        tree.in_order().collect::<Vec<_>>(),
        tree.height()
    );
}

/// Each rotation case in turn, ending with deletions that force the tree to rebalance
/// from the other side.
fn walkthrough() {
    let cases: [(&str, &[i64], &[i64]); 4] = [
        ("left right", &[4, 1, 2, 3], &[]),
        ("right left", &[1, 4, 3, 2], &[]),
        ("left left", &[4, 3, 2, 1], &[]),
        ("right right", &[1, 2, 3, 4, 5, 6, 7], &[1, 2, 3]),
    ];

    for (name, inserts, deletes) in cases.iter() {
        info!("{} case", name);
        let mut tree = Tree::new();
        tree.insert_all(inserts.iter().copied()).delete_all(deletes.iter());
        print_tree(&tree);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Opts::parse();

    TermLogger::init(
        level_filter(opts.verbose),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    if opts.walkthrough {
        walkthrough();
        return Ok(());
    }

    let mut tree = Tree::new();
    tree.insert_all(opts.insert).delete_all(&opts.delete);
    print_tree(&tree);

    Ok(())
}
