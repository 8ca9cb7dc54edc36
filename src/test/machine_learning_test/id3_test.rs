use super::*;
use approx::assert_abs_diff_eq;

#[test]
fn test_entropy_balanced_labels() {
    let examples = weather_examples();
    // Two "N" and two "Y" labels carry exactly one bit
    assert_abs_diff_eq!(entropy(&examples), 1.0, epsilon = 1e-12);
}

#[test]
fn test_entropy_homogeneous_and_empty() {
    let examples = examples_from(&[&["A", "yes"], &["B", "yes"]]);
    assert_abs_diff_eq!(entropy(&examples), 0.0);

    let empty: Vec<Example<&str>> = Vec::new();
    assert_abs_diff_eq!(entropy(&empty), 0.0);
}

#[test]
fn test_entropy_bounds() {
    let examples = examples_from(&[
        &["a", "x"],
        &["b", "y"],
        &["c", "z"],
        &["d", "x"],
        &["e", "x"],
    ]);
    let e = entropy(&examples);
    assert!(e > 0.0);
    assert!(e <= 3f64.log2());

    let uniform = examples_from(&[&["a", "x"], &["b", "y"], &["c", "z"]]);
    assert_abs_diff_eq!(entropy(&uniform), 3f64.log2(), epsilon = 1e-12);
}

#[test]
fn test_entropy_accepts_borrowed_examples() {
    let examples = weather_examples();
    let borrowed: Vec<&Example<&str>> = examples.iter().take(3).collect();
    // One "N" and two "Y"
    let expected = -(1.0 / 3.0) * (1.0f64 / 3.0).log2() - (2.0 / 3.0) * (2.0f64 / 3.0).log2();
    assert_abs_diff_eq!(entropy(&borrowed), expected, epsilon = 1e-12);
}

#[test]
fn test_is_homogeneous() {
    assert!(!is_homogeneous(&weather_examples()));
    assert!(is_homogeneous(&examples_from(&[&["A", "yes"], &["B", "yes"]])));

    let empty: Vec<Example<&str>> = Vec::new();
    assert!(is_homogeneous(&empty));
}

#[test]
fn test_split_partition_is_complete_and_disjoint() {
    let examples = weather_examples();

    for index in 0..2 {
        let partition = split(&examples, index).unwrap();

        let total: usize = partition.values().map(Vec::len).sum();
        assert_eq!(total, examples.len());

        for example in &examples {
            let occurrences = partition
                .values()
                .flatten()
                .filter(|member| std::ptr::eq(**member, example))
                .count();
            assert_eq!(occurrences, 1);
        }

        for (value, subset) in partition.iter() {
            assert!(subset.iter().all(|e| e.attribute(index) == Some(*value)));
        }
    }
}

#[test]
fn test_split_keeps_input_order() {
    let examples = weather_examples();
    let partition = split(&examples, 1).unwrap();

    let high: Vec<&str> = partition[&"H"].iter().map(|e| *e.label()).collect();
    assert_eq!(high, vec!["N", "Y", "Y"]);
    assert_eq!(partition[&"C"].len(), 1);
    assert_eq!(partition.len(), 2);
}

#[test]
fn test_split_out_of_range_index() {
    let examples = examples_from(&[&["A", "yes"]]);

    assert_eq!(
        split(&examples, 5).unwrap_err(),
        ModelError::IndexOutOfBounds {
            index: 5,
            n_attributes: 1
        }
    );
    // The label column is not an attribute
    assert!(matches!(
        split(&examples, 1),
        Err(ModelError::IndexOutOfBounds { index: 1, .. })
    ));
}

#[test]
fn test_split_empty_input() {
    let empty: Vec<Example<&str>> = Vec::new();
    assert!(split(&empty, 0).unwrap().is_empty());
}

#[test]
fn test_weighted_child_entropy() {
    let examples = weather_examples();

    // Outlook leaves one "N" and one "Y" on each branch
    assert_abs_diff_eq!(
        weighted_child_entropy(&examples, 0).unwrap(),
        1.0,
        epsilon = 1e-12
    );

    // Humidity: "H" holds {N, Y, Y}, "C" holds {N}
    let h = -(1.0 / 3.0) * (1.0f64 / 3.0).log2() - (2.0 / 3.0) * (2.0f64 / 3.0).log2();
    assert_abs_diff_eq!(
        weighted_child_entropy(&examples, 1).unwrap(),
        h * 3.0 / 4.0,
        epsilon = 1e-12
    );

    assert!(weighted_child_entropy(&examples, 2).is_err());
}

#[test]
fn test_select_attribute_prefers_lowest_weighted_entropy() {
    let examples = weather_examples();
    assert_eq!(select_attribute(&examples).unwrap(), Some(1));
}

#[test]
fn test_select_attribute_never_exceeds_parent_entropy() {
    let examples = examples_from(&[
        &["a", "p", "x", "1"],
        &["a", "q", "y", "0"],
        &["b", "p", "x", "1"],
        &["b", "q", "x", "1"],
        &["c", "p", "y", "0"],
        &["c", "q", "y", "1"],
    ]);

    let index = select_attribute(&examples).unwrap().unwrap();
    assert!(weighted_child_entropy(&examples, index).unwrap() < entropy(&examples));
    for other in 0..3 {
        assert!(
            weighted_child_entropy(&examples, index).unwrap()
                <= weighted_child_entropy(&examples, other).unwrap()
        );
    }
}

#[test]
fn test_select_attribute_ties_go_to_lowest_index() {
    // Both attribute columns separate the labels perfectly
    let examples = examples_from(&[&["A", "P", "yes"], &["B", "Q", "no"]]);
    assert_eq!(select_attribute(&examples).unwrap(), Some(0));
}

#[test]
fn test_select_attribute_without_gain() {
    let examples = examples_from(&[&["A", "yes"], &["A", "no"]]);
    assert_eq!(select_attribute(&examples).unwrap(), None);

    // Three identical splits whose weights are thirds
    let thirds = examples_from(&[
        &["A", "x"],
        &["A", "y"],
        &["B", "x"],
        &["B", "y"],
        &["C", "x"],
        &["C", "y"],
    ]);
    assert_eq!(select_attribute(&thirds).unwrap(), None);
}

#[test]
fn test_select_attribute_degenerate_inputs() {
    let label_only = examples_from(&[&["yes"], &["no"]]);
    assert_eq!(select_attribute(&label_only).unwrap(), None);

    let empty: Vec<Example<&str>> = Vec::new();
    assert_eq!(select_attribute(&empty).unwrap(), None);
}

#[test]
fn test_majority_label() {
    let examples = examples_from(&[&["a", "Y"], &["b", "Y"], &["c", "N"]]);
    assert_eq!(majority_label(&examples), Some("Y"));

    // Equal counts resolve to the smallest label
    let tied = examples_from(&[&["a", "Y"], &["b", "N"]]);
    assert_eq!(majority_label(&tied), Some("N"));

    let empty: Vec<Example<&str>> = Vec::new();
    assert_eq!(majority_label(&empty), None);
}

#[test]
fn test_build_homogeneous_returns_leaf() {
    let examples = examples_from(&[&["A", "yes"], &["B", "yes"]]);
    let mut recorder = TraceRecorder::default();

    let tree = build(&examples, &mut recorder).unwrap();

    assert_eq!(tree, Node::Leaf { label: "yes" });
    assert_eq!(recorder.lines().len(), 1);
}

#[test]
fn test_build_weather_tree() {
    let tree = build(&weather_examples(), &mut SilentObserver).unwrap();

    assert_eq!(tree.attribute_index(), Some(1));
    let children = tree.children().unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children[&"C"], Node::Leaf { label: "N" });

    let humid = &children[&"H"];
    assert_eq!(humid.attribute_index(), Some(0));
    let humid_children = humid.children().unwrap();
    assert_eq!(humid_children[&"R"], Node::Leaf { label: "Y" });
    // {N, Y} cannot be separated further, the tie resolves to "N"
    assert_eq!(humid_children[&"S"], Node::Leaf { label: "N" });
}

#[test]
fn test_build_stores_majority_labels() {
    let tree = build(&weather_examples(), &mut SilentObserver).unwrap();

    match &tree {
        Node::Internal {
            majority_label,
            children,
            ..
        } => {
            assert_eq!(*majority_label, "N");
            assert!(matches!(
                &children[&"H"],
                Node::Internal {
                    majority_label: "Y",
                    ..
                }
            ));
        }
        Node::Leaf { .. } => panic!("expected an internal root"),
    }
}

#[test]
fn test_build_conflicting_duplicates_terminates() {
    let examples = examples_from(&[&["A", "y"], &["A", "n"], &["B", "y"]]);
    let tree = build(&examples, &mut SilentObserver).unwrap();

    assert_eq!(tree.attribute_index(), Some(0));
    let children = tree.children().unwrap();
    assert_eq!(children[&"A"], Node::Leaf { label: "n" });
    assert_eq!(children[&"B"], Node::Leaf { label: "y" });
}

#[test]
fn test_build_rejects_empty_input() {
    let empty: Vec<Example<&str>> = Vec::new();
    assert!(matches!(
        build(&empty, &mut SilentObserver),
        Err(ModelError::InputValidationError(_))
    ));
}

#[test]
fn test_build_rejects_ragged_input() {
    let examples = examples_from(&[&["A", "H", "yes"], &["B", "no"]]);
    match build(&examples, &mut SilentObserver) {
        Err(ModelError::InputValidationError(msg)) => assert!(msg.contains("row 1")),
        other => panic!("expected an input validation error, got {:?}", other),
    }
}

#[test]
fn test_build_observer_sees_every_node() {
    let examples = weather_examples();
    let mut recorder = TraceRecorder::default();

    let observed = build(&examples, &mut recorder).unwrap();
    let silent = build(&examples, &mut SilentObserver).unwrap();

    assert_eq!(observed, silent);
    // Two internal nodes and three leaves
    assert_eq!(recorder.lines().len(), 5);
    assert!(recorder.lines()[0].contains("splitting on attribute 1"));
    assert_eq!(
        recorder
            .lines()
            .iter()
            .filter(|line| line.contains("not splitting"))
            .count(),
        3
    );
}

#[test]
fn test_build_with_integer_values() {
    let examples = vec![
        Example::new(vec![0u8, 1, 0]).unwrap(),
        Example::new(vec![0, 0, 0]).unwrap(),
        Example::new(vec![1, 1, 1]).unwrap(),
        Example::new(vec![1, 0, 1]).unwrap(),
    ];
    let tree = build(&examples, &mut SilentObserver).unwrap();

    assert_eq!(tree.attribute_index(), Some(0));
    assert_eq!(tree.n_leaves(), 2);
}
