//! Order form example - converting a JSON payload with field types
//!
//! Shows how the field types look on a deserialized struct, and how a form
//! handler reports every bad field at once.
//!
//! Run with `cargo run --example order_form --features serde`.

use grammarie::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Order {
    sku: LowercaseStr,
    price: Decimal2,
    placed_at: StrTimestampIso,
    placed_ms: IntTimestampMs,
    zone: TimeZoneString,
}

fn main() {
    println!("=== Deserializing a payload ===");
    let payload = r#"{
        "sku": "ABC-123",
        "price": 19.999,
        "placed_at": "2022-05-03T13:15:01.250+02:00",
        "placed_ms": "2022-05-03T11:15:01Z",
        "zone": "Europe/Oslo"
    }"#;
    match serde_json::from_str::<Order>(payload) {
        Ok(order) => {
            println!("sku:       {}", order.sku);
            println!("price:     {}", order.price);
            println!("placed at: {}", order.placed_at);
            println!("placed ms: {}", order.placed_ms);
            println!("zone:      {}", order.zone);
            if let Ok(json) = serde_json::to_string(&order) {
                println!("back out:  {}", json);
            }
        }
        Err(err) => println!("rejected: {}", err),
    }

    println!("\n=== A bad field fails the whole struct ===");
    let bad = r#"{"sku": "x", "price": 1, "placed_at": 1651576501, "placed_ms": 0, "zone": "UTC"}"#;
    if let Err(err) = serde_json::from_str::<Order>(bad) {
        println!("rejected: {}", err);
    }

    println!("\n=== Reporting every field from a form ===");
    let result = (
        LowercaseStr::validate_field("sku", "ABC-123"),
        Decimal2::validate_field("price", "nineteen"),
        StrTimestampIso::validate_field("placed_at", "2022-05-03T11:15:60Z"),
        TimeZoneString::validate_field("zone", "Mars/Olympus"),
    )
        .validate_all();
    match result {
        Ok((sku, ..)) => println!("accepted {}", sku),
        Err(errors) => {
            println!("{} fields rejected:", errors.len());
            for error in errors.iter() {
                println!("  {}", error);
            }
        }
    }
}
