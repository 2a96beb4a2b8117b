//! Integration tests for combining selector expressions.
//!
//! - Combinator tokens: descendant (space), child (`>`), `+`, `~`
//! - Nested combinations flatten into one string
//! - Independent chains do not share state

use std::thread;

use selector_builder::{
    Combinator, SelectorExpression, SelectorState, class, combine, element, id, pseudo_class,
};

fn even(tag: &str) -> SelectorExpression {
    element(tag).pseudo_class("nth-of-type(even)").unwrap()
}

// ============================================================================
// SINGLE COMBINATIONS
// ============================================================================

#[test]
fn test_adjacent_sibling() {
    let sel = combine(
        element("div").id("main").unwrap(),
        Combinator::AdjacentSibling,
        element("table").id("data").unwrap(),
    );
    assert_eq!(sel.stringify(), "div#main + table#data");
}

#[test]
fn test_each_combinator_token() {
    let cases = [
        (" ", "ul   li"),
        (">", "ul > li"),
        ("+", "ul + li"),
        ("~", "ul ~ li"),
    ];
    for (token, expected) in cases {
        let combinator: Combinator = token.parse().unwrap();
        let sel = combine(element("ul"), combinator, element("li"));
        assert_eq!(sel.stringify(), expected, "token {token:?}");
    }
}

#[test]
fn test_descendant_keeps_surrounding_spaces() {
    let sel = combine(even("tr"), Combinator::Descendant, even("td"));
    assert_eq!(
        sel.stringify(),
        "tr:nth-of-type(even)   td:nth-of-type(even)"
    );
}

#[test]
fn test_combine_method_matches_entry_point() {
    let via_method = class("a").combine(Combinator::Child, class("b"));
    let via_function = combine(class("a"), Combinator::Child, class("b"));
    assert_eq!(via_method, via_function);
    assert_eq!(via_method.state(), SelectorState::Combined);
}

// ============================================================================
// NESTED COMBINATIONS
// ============================================================================

#[test]
fn test_nested_right_operand() {
    let sel = combine(
        element("p").pseudo_class("focus").unwrap(),
        Combinator::Descendant,
        combine(even("tr"), Combinator::GeneralSibling, even("td")),
    );
    insta::assert_snapshot!(
        sel.stringify(),
        @"p:focus   tr:nth-of-type(even) ~ td:nth-of-type(even)"
    );
}

#[test]
fn test_nested_left_operand() {
    let sel = combine(
        combine(element("div").id("main").unwrap(), Combinator::Child, element("table")),
        Combinator::AdjacentSibling,
        element("section").class("footer").unwrap(),
    );
    assert_eq!(sel.stringify(), "div#main > table + section.footer");
}

#[test]
fn test_deep_nesting() {
    let sel = combine(
        element("div").id("main").unwrap().class("container").unwrap().class("draggable").unwrap(),
        Combinator::AdjacentSibling,
        combine(
            element("table").id("data").unwrap(),
            Combinator::GeneralSibling,
            combine(
                element("tr").pseudo_class("nth-of-type(even)").unwrap(),
                Combinator::Descendant,
                element("td").pseudo_class("nth-of-type(even)").unwrap(),
            ),
        ),
    );
    insta::assert_snapshot!(
        sel.stringify(),
        @"div#main.container.draggable + table#data ~ tr:nth-of-type(even)   td:nth-of-type(even)"
    );
}

// ============================================================================
// AFTER COMBINING
// ============================================================================

#[test]
fn test_parts_may_follow_a_combination() {
    let sel = element("nav")
        .combine(Combinator::Child, element("a"))
        .class("active")
        .unwrap();
    assert_eq!(sel.stringify(), "nav > a.active");
}

#[test]
fn test_left_operand_bookkeeping_survives_combination() {
    // The left operand's element is still recorded after combining.
    let err = element("nav")
        .combine(Combinator::Child, element("a"))
        .element("b")
        .unwrap_err();
    assert!(matches!(
        err,
        selector_builder::SelectorError::DuplicatePart { .. }
    ));
}

// ============================================================================
// INDEPENDENT CHAINS
// ============================================================================

#[test]
fn test_chains_on_separate_threads() {
    let handles: Vec<_> = (0..8)
        .map(|n| {
            thread::spawn(move || {
                let sel = id(format!("item-{n}"))
                    .class("row")
                    .unwrap()
                    .pseudo_class("hover")
                    .unwrap();
                sel.stringify()
            })
        })
        .collect();

    for (n, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("#item-{n}.row:hover"));
    }
}

#[test]
fn test_interleaved_chains() {
    let first = id("one");
    let second = id("two");
    let first = first.class("a").unwrap();
    let second = second.pseudo_class("focus").unwrap();
    assert_eq!(first.stringify(), "#one.a");
    assert_eq!(second.stringify(), "#two:focus");
    assert_eq!(pseudo_class("root").stringify(), ":root");
}
