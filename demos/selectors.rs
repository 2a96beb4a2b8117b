//! Builds a few selectors and prints them, logging builder activity to
//! `selectors.log`.
//!
//! Run with: `cargo run --example selectors`

use log::LevelFilter;
use selector_kata::{Combinator, combine, element, id, init_logger, pseudo_element};

fn main() -> selector_kata::Result<()> {
    init_logger("selectors.log", LevelFilter::Trace)?;

    let selectors = [
        id("main").class("container")?.class("editable")?,
        element("a").attr(r#"href$=".png""#)?.pseudo_class("focus")?,
        pseudo_element("selection"),
        combine(
            element("div").id("main")?.class("container")?.class("draggable")?,
            Combinator::AdjacentSibling,
            combine(
                element("table").id("data")?,
                Combinator::GeneralSibling,
                combine(
                    element("tr").pseudo_class("nth-of-type(even)")?,
                    ">".parse()?,
                    element("td").pseudo_class("nth-of-type(even)")?,
                ),
            ),
        ),
    ];

    for sel in &selectors {
        println!("{}", sel);
    }

    // Invalid sequences are reported, not built.
    match id("x").element("y") {
        Ok(sel) => println!("unexpected: {}", sel),
        Err(e) => println!("error: {}", e),
    }

    Ok(())
}
