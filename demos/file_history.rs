//! File-backed History
//!
//! This example persists history to disk and reloads it in a second session.
//!
//! Key concepts:
//! - `FileStore` keeps each storage key in `<dir>/<key>.json`
//! - Every history change is written with a temp-file-then-rename
//! - A new session built on the same directory sees earlier entries
//! - Clearing all history is persisted too
//!
//! Run with: cargo run --example file_history

use calcpad::{Calculator, FileStore, Key};
use std::fs;

fn run(calculator: &mut Calculator<FileStore>, labels: &[&str]) {
    for label in labels {
        calculator.press(Key::from_label(label).unwrap());
    }
    println!("  {} -> {}", labels.concat(), calculator.display_value());
}

fn main() {
    println!("=== File-backed History Example ===\n");

    let dir = tempfile::tempdir().unwrap();

    println!("Session 1: calculating");
    println!("----------------------------------------");
    let mut calculator = Calculator::builder()
        .store(FileStore::open(dir.path()).unwrap())
        .build()
        .unwrap();
    run(&mut calculator, &["1", "2", "×", "3", "="]);
    run(&mut calculator, &["-", "6", "="]);

    let snapshot = fs::read_to_string(dir.path().join("equations.json")).unwrap();
    println!("\nStored snapshot: {snapshot}\n");
    drop(calculator);

    println!("Session 2: reloading");
    println!("----------------------------------------");
    let mut calculator = Calculator::builder()
        .store(FileStore::open(dir.path()).unwrap())
        .build()
        .unwrap();
    for entry in calculator.history().entries() {
        println!("  {} = {}", entry.expression, entry.result);
    }

    println!("\nClearing all history");
    calculator.request_clear_all();
    calculator.confirm_clear_all();

    let snapshot = fs::read_to_string(dir.path().join("equations.json")).unwrap();
    println!("Stored snapshot: {snapshot}");

    println!("\nKey Takeaways:");
    println!("- History survives across sessions through the store");
    println!("- A crash mid-write never leaves a torn snapshot");
    println!("- Storage problems are logged, never fatal");
}
