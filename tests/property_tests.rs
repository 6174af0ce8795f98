//! Property-based tests for the resolver and its supporting types
//!
//! The resolver's contract is law-shaped: determinism, collision avoidance,
//! precedence of short names. These properties are checked against generated
//! paths and registries rather than hand-picked cases.

use proptest::prelude::*;

use pathlabel::{resolve_name, NameRegistry, NodePath, PathSegment};

fn segment() -> impl Strategy<Value = PathSegment> {
    prop_oneof![
        "[a-z_]{1,8}".prop_map(PathSegment::Key),
        (0usize..20).prop_map(PathSegment::Index),
    ]
}

fn node_path() -> impl Strategy<Value = NodePath> {
    prop::collection::vec(segment(), 1..6)
        .prop_map(|segments| NodePath::from_segments(segments).unwrap())
}

/// Registries whose names live in a disjoint alphabet (`#`-prefixed), so no
/// candidate the resolver can construct ever matches one.
fn disjoint_registry() -> impl Strategy<Value = NameRegistry> {
    prop::collection::vec("#[a-z]{1,10}", 0..8).prop_map(|names| {
        NameRegistry::from_entries(
            names
                .into_iter()
                .enumerate()
                .map(|(i, name)| (format!("[{}]", i), format!("{}{}", name, i))),
        )
        .unwrap()
    })
}

proptest! {
    #[test]
    fn determinism(path in node_path(), existing in disjoint_registry()) {
        prop_assert_eq!(resolve_name(&path, &existing), resolve_name(&path, &existing));
    }

    #[test]
    fn result_is_never_empty(path in node_path(), existing in disjoint_registry()) {
        prop_assert!(!resolve_name(&path, &existing).is_empty());
    }

    #[test]
    fn disjoint_registries_never_force_widening(
        path in node_path(),
        existing in disjoint_registry(),
    ) {
        // With no name the resolver could ever produce, the result must both
        // avoid the registry and equal the empty-registry resolution.
        let name = resolve_name(&path, &existing);
        prop_assert!(!existing.is_taken(&name));
        prop_assert_eq!(name, resolve_name(&path, &NameRegistry::new()));
    }

    #[test]
    fn key_terminal_resolves_to_the_key(
        prefix in prop::collection::vec(segment(), 0..4),
        key in "[a-z_]{1,8}",
    ) {
        let mut segments = prefix;
        segments.push(PathSegment::Key(key.clone()));
        let path = NodePath::from_segments(segments).unwrap();
        prop_assert_eq!(resolve_name(&path, &NameRegistry::new()), key);
    }

    #[test]
    fn index_with_key_parent_borrows_the_key(
        parent in "[a-z_]{1,8}",
        position in 0usize..100,
    ) {
        let path = NodePath::new(PathSegment::Key(parent.clone()))
            .child(PathSegment::Index(position));
        prop_assert_eq!(
            resolve_name(&path, &NameRegistry::new()),
            format!("{}-{}", parent, position)
        );
    }

    #[test]
    fn single_index_uses_index_form(position in 0usize..100) {
        let path = NodePath::new(PathSegment::Index(position));
        prop_assert_eq!(
            resolve_name(&path, &NameRegistry::new()),
            format!("index-{}", position)
        );
    }

    #[test]
    fn candidate_chain_is_fresh_until_exhausted(
        path in node_path(),
        existing in disjoint_registry(),
    ) {
        // Repeatedly poison the registry with whatever the resolver answers.
        // Every answer before exhaustion must avoid the registry; exhaustion
        // (a repeated answer) can only happen once the whole path has been
        // spent, so the chain yields between 1 and len(path) fresh names.
        let mut names: Vec<(String, String)> = existing
            .iter()
            .map(|(location, name)| (location.to_string(), name.to_string()))
            .collect();
        let mut probe = NameRegistry::from_entries(names.clone()).unwrap();
        let mut fresh = 0usize;

        for i in 0..path.len() + 1 {
            let candidate = resolve_name(&path, &probe);
            if probe.is_taken(&candidate) {
                // Disambiguation exhausted: from here the answer never changes.
                prop_assert_eq!(&candidate, &resolve_name(&path, &probe));
                break;
            }
            fresh += 1;
            names.push((format!("[\"poison\"][{}]", i), candidate));
            probe = NameRegistry::from_entries(names.clone()).unwrap();
        }

        prop_assert!(fresh >= 1, "even an empty registry must yield one name");
        prop_assert!(
            fresh <= path.len(),
            "chain produced {} names from {} segments",
            fresh,
            path.len()
        );
    }

    #[test]
    fn node_path_round_trips_through_json(path in node_path()) {
        let json = serde_json::to_string(&path).unwrap();
        let back: NodePath = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, path);
    }

    #[test]
    fn serialized_keys_are_injective(a in node_path(), b in node_path()) {
        if a != b {
            prop_assert_ne!(a.serialized(), b.serialized());
        }
    }

    #[test]
    fn registry_stays_coherent(paths in prop::collection::vec(node_path(), 0..10)) {
        // resolve -> record over arbitrary paths: the registry must stay a
        // bijection between its recorded paths and names.
        let mut registry = NameRegistry::new();
        for path in &paths {
            if registry.name_for(path).is_some() {
                continue;
            }
            let name = resolve_name(path, &registry);
            if registry.is_taken(&name) {
                // Degenerate full-path collision; recording would break the
                // bijection and is refused.
                prop_assert!(registry.record(path, name).is_err());
                continue;
            }
            registry.record(path, name).unwrap();
        }
        for (location, name) in registry.iter() {
            prop_assert_eq!(registry.path_for(name), Some(location));
        }
    }
}
