//! Walk-through of the growable array API.
//!
//! Demonstrates: push with doubling → pop → mid insert/remove → append and
//! pop paths of insert/remove → copy-assignment → clear and reuse.

use growarray::GrowableArray;

fn print_array(label: &str, arr: &GrowableArray<i32>) {
    println!("{label}: {arr:?}");
    println!("  size: {}, cap: {}", arr.len(), arr.capacity());
}

fn main() {
    println!("=== GrowableArray Driver ===\n");

    let mut da = GrowableArray::new();
    for v in 1..=5 {
        da.push(v);
    }
    print_array("after push 1..=5", &da);

    da.pop();
    da.insert(2, 6);
    da.remove(3);
    let end = da.len();
    da.insert(end, 7);
    da.push(8);
    da.push(9);
    let last = da.len() - 1;
    da.remove(last);
    print_array("after edits", &da);

    let mut da2 = GrowableArray::new();
    da2.clone_from(&da);
    print_array("copy", &da2);
    println!("  copy[2] = {}", da2[2]);

    da.clear();
    da.push(1);
    print_array("after clear + push", &da);

    let stats = da.stats();
    println!(
        "\nbuffer traffic: {} reallocations, {} rebuilds, {} elements moved",
        stats.reallocations, stats.rebuilds, stats.elements_moved
    );

    if let Err(err) = da.try_remove(5) {
        println!("try_remove(5) rejected: {err}");
    }
}
