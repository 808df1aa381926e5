//! Keypad Session
//!
//! This example drives a calculator the way a button grid would.
//!
//! Key concepts:
//! - Button labels map to keys with `Key::from_label`
//! - The live preview updates on every press without committing anything
//! - `=` records the expression and chains from its result
//! - Errors show a sticky sentinel that the next digit replaces
//!
//! Run with: cargo run --example keypad_session

use calcpad::{CalculationOutcome, Calculator, Key};

fn press(calculator: &mut Calculator, label: &str) {
    let key = Key::from_label(label).unwrap();
    let outcome = calculator.press(key);

    let preview = calculator.live_result();
    println!(
        "  [{:>2}] display: {:<14} preview: {:<10} phase: {}",
        label,
        calculator.display_value(),
        preview,
        calculator.phase().name()
    );

    match outcome {
        CalculationOutcome::Evaluated(entry) => {
            println!("       recorded {} = {}", entry.expression, entry.result);
        }
        CalculationOutcome::Failed(error) => println!("       failed: {error}"),
        CalculationOutcome::Idle => {}
    }
}

fn main() {
    println!("=== Keypad Session Example ===\n");

    let mut calculator = Calculator::new();

    println!("Typing (2+3)×4 and evaluating:");
    for label in ["(", "2", "+", "3", ")", "×", "4", "="] {
        press(&mut calculator, label);
    }

    println!("\nChaining from the result:");
    for label in ["÷", "8", "="] {
        press(&mut calculator, label);
    }

    println!("\nDividing by zero:");
    for label in ["÷", "0", "="] {
        press(&mut calculator, label);
    }

    println!("\nRecovering with a digit:");
    for label in ["7", "%", "±"] {
        press(&mut calculator, label);
    }

    println!("\nHistory:");
    for entry in calculator.history().entries() {
        println!("  {} = {}", entry.expression, entry.result);
    }

    println!("\n=== Example Complete ===");
}
