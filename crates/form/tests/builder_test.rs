use pretty_assertions::assert_eq;
use trellis_form::prelude::*;

// ---------------------------------------------------------------------------
// 1. The builder produces exactly the tree it was told to
// ---------------------------------------------------------------------------

#[test]
fn built_tree_matches_hand_constructed_nodes() {
    let built = Form::builder()
        .group(
            "Ultimate answer",
            GroupOptions::new().with_validation_message("At least one selection is required"),
            |group| {
                group.checkbox("foo", "Foo", CheckboxOptions::new());
            },
        )
        .build()
        .unwrap();

    let mut group = GroupInput::new("ultimate-answer", "Ultimate answer");
    group.validation_message = Some("At least one selection is required".into());
    let group = group.with_child(InputNode::Checkbox(CheckboxInput::new("foo", "Foo")));
    let expected = Form::from_nodes(vec![InputNode::Group(group)]).unwrap();

    assert_eq!(built, expected);
}

#[test]
fn resolve_of_a_built_form_matches_the_expected_contract_tree() {
    let resolved = Form::builder()
        .group("Answers", GroupOptions::new().disabled(), |group| {
            group.checkbox("foo", "Foo", CheckboxOptions::new());
        })
        .build()
        .unwrap()
        .resolve();

    let expected = ResolvedForm {
        nodes: vec![ResolvedNode::Group(ResolvedGroup {
            id: "answers".into(),
            legend: "Answers".into(),
            caption: None,
            state: ResolvedState {
                disabled: true,
                hidden: false,
            },
            validation: ValidationSlot {
                id: "answers-validation".into(),
                visible: false,
                text: String::new(),
            },
            children: vec![ResolvedNode::Leaf(ResolvedLeaf {
                id: "foo".into(),
                label: "Foo".into(),
                caption: None,
                kind: InputKind::Checkbox,
                state: ResolvedState {
                    disabled: true,
                    hidden: false,
                },
                value: None,
                checked: false,
            })],
        })],
    };

    assert_eq!(resolved, expected);
}

// ---------------------------------------------------------------------------
// 2. Contract violations fail at build time, not at resolve time
// ---------------------------------------------------------------------------

#[test]
fn empty_leaf_label_is_rejected() {
    let err = Form::builder()
        .checkbox("foo", "", CheckboxOptions::new())
        .build()
        .unwrap_err();

    assert_eq!(err, FormError::EmptyLabel { id: "foo".into() });
    assert_eq!(err.code(), "FORM_EMPTY_LABEL");
    assert_eq!(err.category(), "label");
}

#[test]
fn duplicate_sibling_ids_are_rejected() {
    let err = Form::builder()
        .group("Pair", GroupOptions::new(), |group| {
            group
                .checkbox("same", "One", CheckboxOptions::new())
                .checkbox("same", "Two", CheckboxOptions::new());
        })
        .build()
        .unwrap_err();

    assert_eq!(err, FormError::DuplicateId { id: "same".into() });
}

#[test]
fn group_slug_collisions_are_rejected() {
    // Two labels that slugify to the same id.
    let err = Form::builder()
        .group("My Group", GroupOptions::new(), |_| {})
        .group("My  group!", GroupOptions::new(), |_| {})
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        FormError::DuplicateId {
            id: "my-group".into()
        }
    );
}

#[test]
fn explicit_ids_avoid_slug_collisions() {
    let form = Form::builder()
        .group("My Group", GroupOptions::new(), |_| {})
        .group("My  group!", GroupOptions::new().with_id("other"), |_| {})
        .build()
        .unwrap();

    assert_eq!(form.nodes()[0].id(), "my-group");
    assert_eq!(form.nodes()[1].id(), "other");
}

// ---------------------------------------------------------------------------
// 3. Form shapes are plain values
// ---------------------------------------------------------------------------

fn survey_form(invalid: bool) -> Form {
    let message = invalid.then(|| "At least one selection is required".to_owned());

    let mut options = GroupOptions::new();
    if let Some(message) = message {
        options = options.with_validation_message(message);
    }

    Form::builder()
        .group("Ultimate answer", options, |group| {
            group.checkbox("foo", "Foo", CheckboxOptions::new());
        })
        .build()
        .expect("survey form is well-formed")
}

#[test]
fn the_same_shape_function_serves_both_validation_states() {
    let invalid = survey_form(true).resolve();
    let valid = survey_form(false).resolve();

    assert!(invalid.nodes[0].as_group().unwrap().validation.visible);
    assert!(!valid.nodes[0].as_group().unwrap().validation.visible);

    // Apart from the slot, both renders describe the same tree.
    let invalid_ids: Vec<&str> = invalid.nodes[0]
        .children()
        .unwrap()
        .iter()
        .map(ResolvedNode::id)
        .collect();
    let valid_ids: Vec<&str> = valid.nodes[0]
        .children()
        .unwrap()
        .iter()
        .map(ResolvedNode::id)
        .collect();
    assert_eq!(invalid_ids, valid_ids);
}

#[test]
fn form_definitions_round_trip_through_json() {
    let form = survey_form(true);

    let json = serde_json::to_string_pretty(&form).unwrap();
    let restored: Form = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, form);

    // The restored definition resolves identically.
    assert_eq!(restored.resolve(), form.resolve());
}

#[test]
fn resolved_trees_round_trip_through_json() {
    let resolved = survey_form(true).resolve();

    let json = serde_json::to_string(&resolved).unwrap();
    let restored: ResolvedForm = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, resolved);
}
