//! Property-based tests for license naming and credit tree traversal.

use std::collections::HashSet;

use libcredit::vocab::{cc, dc};
use libcredit::{
    credit_with, license_name, normalize_license_uri, Credit, EventRecorder, FormatEvent,
    MemoryGraph, ResolveOptions, Term,
};
use proptest::collection::vec;
use proptest::prelude::*;

const CC_CODES: &[&str] = &["by", "by-sa", "by-nd", "by-nc", "by-nc-sa", "by-nc-nd"];
const VERSIONS: &[&str] = &["1.0", "2.0", "2.5", "3.0", "4.0"];
const JURISDICTIONS: &[&str] = &["", "au/", "se/", "de/"];
const SUFFIXES: &[&str] = &["", "deed.en", "deed.sv", "deed.en_US", "legalcode", "legalcode.txt"];

fn node_uri(i: usize) -> String {
    format!("http://node-{}/", i)
}

/// Graph of `edges.len()` titled resources, where `edges[i]` lists the
/// sources of resource `i` (indices wrap, so cycles are common)
fn source_graph(edges: &[Vec<usize>]) -> MemoryGraph {
    let mut graph = MemoryGraph::new();
    for (i, targets) in edges.iter().enumerate() {
        let subject = node_uri(i);
        graph.insert(&subject, dc::TITLE, Term::literal(format!("node {}", i)));
        for t in targets {
            graph.insert(&subject, cc::SOURCE, Term::iri(node_uri(t % edges.len())));
        }
    }
    graph
}

/// Nodes of the tree down to `depth` levels of sources
fn count_nodes(credit: &Credit, depth: usize) -> usize {
    1 + if depth == 0 {
        0
    } else {
        credit
            .sources()
            .iter()
            .map(|s| count_nodes(s, depth - 1))
            .sum()
    }
}

/// Checks no subject repeats on its own ancestor chain; returns the tree height
fn check_chain(credit: &Credit, chain: &mut Vec<String>) -> Result<usize, String> {
    if chain.iter().any(|a| a == credit.subject()) {
        return Err(format!("{} is its own ancestor", credit.subject()));
    }
    chain.push(credit.subject().to_string());
    let mut height = 0;
    for source in credit.sources() {
        height = height.max(1 + check_chain(source, chain)?);
    }
    chain.pop();
    Ok(height)
}

proptest! {
    /// Deed and legal code suffixes do not change a license's name.
    #[test]
    fn license_name_ignores_deed_suffix(
        code in prop::sample::select(CC_CODES),
        version in prop::sample::select(VERSIONS),
        jurisdiction in prop::sample::select(JURISDICTIONS),
        suffix in prop::sample::select(SUFFIXES),
        https in any::<bool>(),
    ) {
        let scheme = if https { "https" } else { "http" };
        let uri = format!(
            "{}://creativecommons.org/licenses/{}/{}/{}{}",
            scheme, code, version, jurisdiction, suffix
        );
        let normalized = normalize_license_uri(&uri);

        prop_assert!(normalized.starts_with("http://creativecommons.org/licenses/"));
        prop_assert!(normalized.ends_with('/'));
        prop_assert_eq!(normalize_license_uri(&normalized), normalized.clone());
        prop_assert_eq!(license_name(&normalized), license_name(&uri));
        prop_assert!(license_name(&uri).is_some());
    }

    /// Resolution terminates on cyclic graphs and never nests a resource
    /// inside itself or deeper than the resolve depth.
    #[test]
    fn resolution_is_acyclic_and_depth_bounded(
        edges in vec(vec(0usize..8, 0..3), 1..7),
        max_depth in 0usize..6,
    ) {
        let graph = source_graph(&edges);
        let options = ResolveOptions { max_depth };
        let credit = credit_with(&graph, &node_uri(0), &options).unwrap().unwrap();

        let height = check_chain(&credit, &mut Vec::new());
        prop_assert!(height.is_ok(), "{:?}", height);
        let height = height.unwrap();
        prop_assert!(height <= max_depth);
        prop_assert!(height < edges.len());

        let subjects: HashSet<&str> = credit.sources().iter().map(|s| s.subject()).collect();
        prop_assert_eq!(subjects.len(), credit.sources().len());
    }

    /// Every `begin` is matched by an `end`, and exactly the nodes within the
    /// format depth are visited.
    #[test]
    fn formatting_is_balanced_and_depth_bounded(
        edges in vec(vec(0usize..8, 0..3), 1..7),
        format_depth in 0usize..5,
    ) {
        let graph = source_graph(&edges);
        let credit = credit_with(&graph, &node_uri(0), &ResolveOptions::default())
            .unwrap()
            .unwrap();

        let mut recorder = EventRecorder::new();
        credit.format(&mut recorder, format_depth, None);

        let mut open = 0usize;
        let mut deepest = 0usize;
        for event in &recorder.events {
            match event {
                FormatEvent::Begin => {
                    open += 1;
                    deepest = deepest.max(open);
                }
                FormatEvent::End => {
                    prop_assert!(open > 0);
                    open -= 1;
                }
                _ => {}
            }
        }
        prop_assert_eq!(open, 0);
        prop_assert!(deepest <= format_depth + 1);
        prop_assert_eq!(recorder.nodes(), count_nodes(&credit, format_depth));
        prop_assert_eq!(recorder.events.first(), Some(&FormatEvent::Begin));
        prop_assert_eq!(recorder.events.last(), Some(&FormatEvent::End));
    }
}
