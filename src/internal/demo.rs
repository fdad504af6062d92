//! Walks a tiny table through its whole lifecycle: chaining, lookup, resize and teardown.
//!
//! Run with `RUST_LOG=chaintable=debug` to see the table's own lifecycle records.

use chaintable::{HashTable, logger};
use log::{info, warn};

/// Bucket count of the starting table, deliberately smaller than the number of entries
const INITIAL_CAPACITY: usize = 2;

/// Entries inserted by the demo
const LINES: [(&str, &str); 3] = [
    ("line_1", "Tiny hash table"),
    ("line_2", "Filled beyond capacity"),
    ("line_3", "Linked list saves the day!"),
];

/// Prints every demo entry as currently stored
fn print_lines(table: &HashTable) -> Result<(), Box<dyn std::error::Error>> {
    for (key, _) in LINES {
        println!("{key}: {}", table.retrieve(key)?);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init_logger();

    let mut table = HashTable::new(INITIAL_CAPACITY)?;
    for (key, value) in LINES {
        table.insert(key, value);
    }
    info!(
        "stored {} entries in {} buckets, longest chain {}",
        table.len(),
        table.capacity(),
        table.longest_chain()
    );
    print_lines(&table)?;

    let old_capacity = table.capacity();
    let mut table = table.resize();
    println!("Resizing hash table from {old_capacity} to {}.", table.capacity());
    print_lines(&table)?;

    let removed = table.remove("line_2")?;
    println!("Removed line_2: {removed}");
    if let Err(err) = table.retrieve("line_2") {
        warn!("{err}");
    }

    table.destroy();
    Ok(())
}
