//! Round-trips a rectangle through JSON.
//!
//! Run with: `cargo run --example rectangle`

use selector_kata::{Rectangle, from_json, to_json};

fn main() -> selector_kata::Result<()> {
    let rect = Rectangle::new(10.0, 20.0);
    let json = to_json(&rect)?;
    println!("{} -> area {}", json, rect.area());

    let back: Rectangle = from_json(&json)?;
    println!("restored {:?} -> area {}", back, back.area());

    if let Err(e) = from_json::<Rectangle>(r#"{ "width": 10 }"#) {
        println!("error: {}", e);
    }
    Ok(())
}
