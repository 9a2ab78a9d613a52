use masthead_tokens::{
    resolve_reference, Literal, Resolved, Resolver, Token, TokenGraph, TokenGroup, TokenType,
    UnresolvedReason, DEFAULT_MAX_DEPTH,
};
use proptest::prelude::*;

#[test]
fn resolves_a_primitive_directly() {
    let primitives = TokenGroup::new().with("_palette.gray.96", Token::new("#ededed", TokenType::Color));
    let resolved = resolve_reference(
        &Literal::from("{_palette.gray.96}"),
        &primitives,
        &TokenGroup::new(),
        DEFAULT_MAX_DEPTH,
    );
    assert_eq!(resolved, Resolved::Value("#ededed".into()));
}

#[test]
fn resolves_two_hop_indirection() {
    let graph = TokenGraph::from_json_str(
        r##"{
            "primitives": { "_palette": { "red": { "48": { "value": "#cc2828" } } } },
            "alias": { "color": { "brand": { "primary": { "value": "{_palette.red.48}" } } } }
        }"##,
    )
    .unwrap();
    assert_eq!(
        Resolver::new(&graph).resolve_str("{color.brand.primary}").as_str(),
        "#cc2828"
    );
}

#[test]
fn two_node_cycle_returns_the_original_reference() {
    let alias = TokenGroup::new()
        .with("a", Token::untyped("{b}"))
        .with("b", Token::untyped("{a}"));
    for max_depth in [0, 1, 2, 3, DEFAULT_MAX_DEPTH, 10_000] {
        let resolved = resolve_reference(&Literal::from("{a}"), &TokenGroup::new(), &alias, max_depth);
        assert_eq!(resolved.as_str(), "{a}", "max_depth={max_depth}");
        assert!(!resolved.is_resolved());
    }
}

#[test]
fn float_primitives_resolve_without_a_trailing_zero() {
    let graph = TokenGraph::from_json_str(
        r#"{
            "primitives": { "_s": { "a": { "value": 1.0 }, "b": { "value": 1e3 }, "c": { "value": 1.5 } } },
            "alias": {}
        }"#,
    )
    .unwrap();
    let resolver = Resolver::new(&graph);
    let values: Vec<String> = ["{_s.a}", "{_s.b}", "{_s.c}"]
        .iter()
        .map(|r| resolver.resolve_str(r).into_string())
        .collect();
    assert_eq!(values, vec!["1", "1000", "1.5"]);
}

/// Alias chain `c0 -> c1 -> ... -> c{len-1} -> _end`.
fn chain(len: usize) -> TokenGraph {
    let mut alias = TokenGroup::new();
    for i in 0..len {
        let next = if i + 1 == len {
            "{_end}".to_string()
        } else {
            format!("{{c{}}}", i + 1)
        };
        alias.insert_path(&format!("c{i}"), Token::untyped(next));
    }
    TokenGraph::new(TokenGroup::new().with("_end", Token::untyped("terminal")), alias)
}

proptest! {
    #[test]
    fn non_reference_strings_pass_through(s in "[^{}]*|\\{[^{}]*|[^{}]*\\}") {
        let graph = chain(1);
        prop_assert_eq!(Resolver::new(&graph).resolve_str(&s), Resolved::Value(s.clone()));
    }

    #[test]
    fn numbers_pass_through(n in any::<i64>()) {
        let graph = chain(1);
        let resolved = Resolver::new(&graph).resolve(&Literal::from(n));
        prop_assert_eq!(resolved.as_str(), n.to_string());
    }

    #[test]
    fn chains_within_the_budget_resolve(len in 1usize..12, slack in 0usize..4) {
        // `len` aliases plus the terminal primitive.
        let graph = chain(len);
        let resolver = Resolver::new(&graph).with_max_depth(len + 1 + slack);
        let resolved = resolver.resolve_str("{c0}");
        prop_assert_eq!(resolved.as_str(), "terminal");
    }

    #[test]
    fn chains_beyond_the_budget_return_the_reference(len in 1usize..12, short in 1usize..12) {
        prop_assume!(short <= len);
        let graph = chain(len);
        let resolved = Resolver::new(&graph).with_max_depth(short).resolve_str("{c0}");
        prop_assert_eq!(resolved.as_str(), "{c0}");
        prop_assert_eq!(
            &resolved.unresolved().unwrap().reason,
            &UnresolvedReason::DepthExceeded { max_depth: short }
        );
    }
}
