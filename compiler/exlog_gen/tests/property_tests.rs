//! Property-based tests for the generation pipeline.
//!
//! Random call-site sequences are pushed through `generate` to check:
//! 1. Determinism: the same records always give the same output
//! 2. Conservation: every call site is either a branch or a warning
//! 3. Selection: a distinct closed type selects exactly its own branch
//! 4. Ordering: out-of-order lines never produce two entries for one line

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use exlog_gen::{
    are_distinguishable, generate, Callee, GenConfig, InvocationRecord, InvocationSyntax,
    NeverCancel, Snippet,
};
use exlog_ir::{LineSpan, TypeDescriptor};
use proptest::prelude::*;

// -- Strategies --

fn primitive_strategy() -> impl Strategy<Value = TypeDescriptor> {
    prop::sample::select(vec!["Int32", "Int64", "String", "Boolean", "Char", "Double"])
        .prop_map(TypeDescriptor::primitive)
}

/// Closed types: no type parameter anywhere.
fn closed_type_strategy() -> impl Strategy<Value = TypeDescriptor> {
    primitive_strategy().prop_recursive(3, 12, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(TypeDescriptor::array),
            inner.clone().prop_map(TypeDescriptor::nullable),
            inner
                .clone()
                .prop_map(|t| TypeDescriptor::named("List", vec![t])),
            (inner.clone(), inner)
                .prop_map(|(k, v)| TypeDescriptor::named("Dictionary", vec![k, v])),
        ]
    })
}

fn any_type_strategy() -> impl Strategy<Value = TypeDescriptor> {
    prop_oneof![
        4 => closed_type_strategy(),
        1 => Just(TypeDescriptor::type_parameter("T")),
        1 => closed_type_strategy()
            .prop_map(|t| TypeDescriptor::named("Pair", vec![t, TypeDescriptor::type_parameter("U")])),
    ]
}

/// Call sites sorted by line, the order a front-end discovers them in.
fn sites_strategy(
    ty: impl Strategy<Value = TypeDescriptor>,
) -> impl Strategy<Value = Vec<(u32, TypeDescriptor)>> {
    prop::collection::vec((1u32..6, ty), 0..24).prop_map(|mut sites| {
        sites.sort_by_key(|(line, _)| *line);
        sites
    })
}

/// Call sites in arbitrary line order.
fn unsorted_sites_strategy() -> impl Strategy<Value = Vec<(u32, TypeDescriptor)>> {
    prop::collection::vec((1u32..6, any_type_strategy()), 0..24)
}

// -- Helpers --

fn record(index: usize, line: u32, ty: TypeDescriptor) -> InvocationRecord {
    let receiver = format!("v{index}");
    let column = 1 + 10 * u32::try_from(index).unwrap();
    let width = u32::try_from(receiver.len()).unwrap();
    InvocationRecord {
        file: "src/main.rs".to_string(),
        member: "main".to_string(),
        span: LineSpan::on_line(line, column, column + width + 6),
        syntax: InvocationSyntax {
            callee: Callee::MemberAccess {
                receiver: Snippet::new(receiver, LineSpan::on_line(line, column, column + width)),
                name: Snippet::new(
                    "log",
                    LineSpan::on_line(line, column + width + 1, column + width + 4),
                ),
            },
            arguments: Vec::new(),
            conditional: None,
        },
        type_argument: Some(ty),
    }
}

fn records(sites: Vec<(u32, TypeDescriptor)>) -> Vec<InvocationRecord> {
    sites
        .into_iter()
        .enumerate()
        .map(|(i, (line, ty))| record(i, line, ty))
        .collect()
}

// -- Property Tests --

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 1000,
        ..ProptestConfig::default()
    })]

    /// Two runs over the same records agree on everything.
    #[test]
    fn prop_generation_is_deterministic(sites in sites_strategy(any_type_strategy())) {
        let records = records(sites);
        let config = GenConfig::default();
        let first = generate(&records, &config, &NeverCancel).unwrap();
        let second = generate(&records, &config, &NeverCancel).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Each site ends up as exactly one branch or exactly one warning.
    #[test]
    fn prop_sites_are_kept_or_reported(sites in sites_strategy(any_type_strategy())) {
        let count = sites.len();
        let generated = generate(&records(sites), &GenConfig::default(), &NeverCancel).unwrap();
        let branches: usize = generated.table.entries().iter().map(|e| e.branches.len()).sum();
        prop_assert_eq!(branches + generated.diagnostics.len(), count);
    }

    /// Branches sharing an entry are pairwise distinguishable.
    #[test]
    fn prop_entries_are_unambiguous(sites in sites_strategy(any_type_strategy())) {
        let generated = generate(&records(sites), &GenConfig::default(), &NeverCancel).unwrap();
        for entry in generated.table.entries() {
            if entry.is_unconditional() {
                continue;
            }
            for (i, a) in entry.branches.iter().enumerate() {
                for b in &entry.branches[i + 1..] {
                    prop_assert!(are_distinguishable(&a.ty, &b.ty));
                }
            }
        }
    }

    /// On a line of distinct closed types, each type selects its own expression.
    #[test]
    fn prop_distinct_types_select_their_branch(
        types in prop::collection::vec(closed_type_strategy(), 1..8)
    ) {
        let mut distinct: Vec<TypeDescriptor> = Vec::new();
        for ty in types {
            if !distinct.contains(&ty) {
                distinct.push(ty);
            }
        }
        let sites: Vec<_> = distinct.iter().cloned().map(|ty| (7, ty)).collect();
        let generated = generate(&records(sites), &GenConfig::default(), &NeverCancel).unwrap();

        prop_assert!(generated.diagnostics.is_empty());
        let entry = generated.table.get("src/main.rs", 7).unwrap();
        for (i, ty) in distinct.iter().enumerate() {
            let selected = entry.select(ty).map(|b| b.expression.clone());
            prop_assert_eq!(selected, Some(format!("v{i}")));
        }
    }

    /// Lines that come back after other lines are reported, never duplicated.
    #[test]
    fn prop_revisited_lines_keep_one_entry(sites in unsorted_sites_strategy()) {
        let count = sites.len();
        let generated = generate(&records(sites), &GenConfig::default(), &NeverCancel).unwrap();

        let mut lines: Vec<u32> = generated.table.entries().iter().map(|e| e.position.line).collect();
        let entries = lines.len();
        lines.sort_unstable();
        lines.dedup();
        prop_assert_eq!(lines.len(), entries);

        let branches: usize = generated.table.entries().iter().map(|e| e.branches.len()).sum();
        prop_assert_eq!(branches + generated.diagnostics.len(), count);
    }
}
