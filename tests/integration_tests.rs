use strpack::{Input, StrPack, StrPackError, DEFAULT_DELIMITER};

#[test]
fn test_new_pack_is_empty() {
    let pack = StrPack::new(",").unwrap();

    assert_eq!(pack.len(), 0);
    assert!(pack.is_empty());
    assert_eq!(pack.byte_len(), 0);
    assert_eq!(pack.to_vec(), Vec::<&str>::new());
}

#[test]
fn test_empty_delimiter_rejected() {
    assert_eq!(StrPack::new("").unwrap_err(), StrPackError::EmptyDelimiter);
    assert_eq!(
        StrPack::from_joined("a,b", "").unwrap_err(),
        StrPackError::EmptyDelimiter
    );
}

#[test]
fn test_default_uses_control_delimiter() {
    let pack = StrPack::default();
    assert_eq!(pack.delimiter(), DEFAULT_DELIMITER);
    assert!(pack.is_empty());
}

#[test]
fn test_from_joined_counts_items() {
    let pack = StrPack::from_joined("a,b,c", ",").unwrap();

    assert_eq!(pack.len(), 3);
    assert_eq!(pack.to_vec(), ["a", "b", "c"]);
}

#[test]
fn test_from_joined_normalizes_dirty_input() {
    let pack = StrPack::from_joined(",a,,b,,,c,", ",").unwrap();

    assert_eq!(pack.len(), 3);
    assert_eq!(pack.as_str(), "a,b,c");
}

#[test]
fn test_normalization_idempotent() {
    let clean = StrPack::from_joined("a,b,c", ",").unwrap();
    let dirty = StrPack::from_joined(",,a,b,,c,,", ",").unwrap();

    assert_eq!(clean, dirty);
}

#[test]
fn test_from_joined_single_item_no_delimiter() {
    let pack = StrPack::from_joined("lonely", ",").unwrap();

    assert_eq!(pack.len(), 1);
    assert_eq!(pack.first(), Some("lonely"));
    assert_eq!(pack.last(), Some("lonely"));
}

#[test]
fn test_from_items_discards_empty_items() {
    let pack = StrPack::from_items(["a", "", "b"], ",").unwrap();

    assert_eq!(pack.len(), 2);
    assert_eq!(pack.to_vec(), ["a", "b"]);
}

#[test]
fn test_from_pack_rewrites_delimiter() {
    let commas = StrPack::from_items(["x", "y", "z"], ",").unwrap();
    let pipes = StrPack::from_pack(&commas, "|").unwrap();

    assert_eq!(pipes.as_str(), "x|y|z");
    assert_eq!(pipes.len(), 3);
}

#[test]
fn test_from_input_shapes() {
    let joined = StrPack::from_input(Input::Joined("a,b"), ",").unwrap();
    let items = StrPack::from_input(Input::Items(&["a", "b"]), ",").unwrap();
    let pack = StrPack::from_input(Input::Pack(&joined), ",").unwrap();

    assert_eq!(joined, items);
    assert_eq!(joined, pack);
}

#[test]
fn test_multichar_delimiter() {
    let pack = StrPack::from_joined("one--two--three", "--").unwrap();

    assert_eq!(pack.len(), 3);
    assert_eq!(pack.first(), Some("one"));
    assert_eq!(pack.last(), Some("three"));
    assert_eq!(pack.to_vec(), ["one", "two", "three"]);
}

#[test]
fn test_push_returns_new_count() {
    let mut pack = StrPack::new(",").unwrap();

    assert_eq!(pack.push("x").unwrap(), 1);
    assert_eq!(pack.push("y").unwrap(), 2);
    assert_eq!(pack.as_str(), "x,y");
}

#[test]
fn test_push_on_empty_first_and_last_agree() {
    let mut pack = StrPack::new(",").unwrap();
    pack.push("x").unwrap();

    assert_eq!(pack.len(), 1);
    assert_eq!(pack.first(), Some("x"));
    assert_eq!(pack.last(), Some("x"));
}

#[test]
fn test_add_is_push_alias() {
    let mut pack = StrPack::new(",").unwrap();
    pack.add("a").unwrap();
    pack.push("b").unwrap();

    assert_eq!(pack.to_vec(), ["a", "b"]);
}

#[test]
fn test_push_empty_item_rejected() {
    let mut pack = StrPack::new(",").unwrap();

    assert_eq!(
        pack.push("").unwrap_err(),
        StrPackError::EmptyItem { operation: "push" }
    );
    assert!(pack.is_empty());
}

#[test]
fn test_unshift_prepends() {
    let mut pack = StrPack::from_items(["b", "c"], ",").unwrap();

    assert_eq!(pack.unshift("a").unwrap(), 3);
    assert_eq!(pack.to_vec(), ["a", "b", "c"]);
}

#[test]
fn test_pop_removes_trailing_item() {
    let mut pack = StrPack::from_items(["a", "b", "c"], ",").unwrap();

    assert_eq!(pack.pop(), Some("c".to_string()));
    assert_eq!(pack.len(), 2);
    assert_eq!(pack.as_str(), "a,b");

    assert_eq!(pack.pop(), Some("b".to_string()));
    assert_eq!(pack.pop(), Some("a".to_string()));
    assert_eq!(pack.pop(), None);
    assert!(pack.is_empty());
}

#[test]
fn test_shift_removes_leading_item() {
    let mut pack = StrPack::from_items(["a", "b", "c"], ",").unwrap();

    assert_eq!(pack.shift(), Some("a".to_string()));
    assert_eq!(pack.as_str(), "b,c");
    assert_eq!(pack.shift(), Some("b".to_string()));
    assert_eq!(pack.shift(), Some("c".to_string()));
    assert_eq!(pack.shift(), None);
}

#[test]
fn test_has_structural_positions() {
    let pack = StrPack::from_items(["head", "middle", "tail"], ",").unwrap();

    assert!(pack.has("head").unwrap());
    assert!(pack.has("middle").unwrap());
    assert!(pack.has("tail").unwrap());
    assert!(!pack.has("hea").unwrap());
    assert!(!pack.has("iddle").unwrap());
    assert!(!pack.has("absent").unwrap());
}

#[test]
fn test_has_single_item_exact_match() {
    let pack = StrPack::from_joined("only", ",").unwrap();

    assert!(pack.has("only").unwrap());
    assert!(!pack.has("onl").unwrap());
}

#[test]
fn test_has_on_empty_pack() {
    let pack = StrPack::new(",").unwrap();
    assert!(!pack.has("x").unwrap());
}

#[test]
fn test_has_after_push_and_remove() {
    let mut pack = StrPack::from_items(["a", "b"], ",").unwrap();

    pack.push("c").unwrap();
    assert!(pack.has("c").unwrap());

    assert!(pack.remove("c").unwrap());
    assert!(!pack.has("c").unwrap());
}

#[test]
fn test_remove_first_middle_last() {
    let mut pack = StrPack::from_items(["a", "b", "c", "d"], ",").unwrap();

    assert!(pack.remove("a").unwrap());
    assert_eq!(pack.as_str(), "b,c,d");

    assert!(pack.remove("c").unwrap());
    assert_eq!(pack.as_str(), "b,d");

    assert!(pack.remove("d").unwrap());
    assert_eq!(pack.as_str(), "b");
    assert_eq!(pack.len(), 1);
}

#[test]
fn test_remove_reports_absence() {
    let mut pack = StrPack::from_items(["a", "b"], ",").unwrap();

    assert!(!pack.remove("z").unwrap());
    assert_eq!(pack.len(), 2);
}

#[test]
fn test_remove_only_first_occurrence() {
    let mut pack = StrPack::from_items(["x", "dup", "y", "dup"], ",").unwrap();

    assert!(pack.remove("dup").unwrap());
    assert_eq!(pack.to_vec(), ["x", "y", "dup"]);
    assert!(pack.has("dup").unwrap());
}

#[test]
fn test_clear_resets_everything() {
    let mut pack = StrPack::from_items(["a", "b"], ",").unwrap();
    pack.clear();

    assert!(pack.is_empty());
    assert_eq!(pack.byte_len(), 0);
    assert_eq!(pack.first(), None);
    assert_eq!(pack.last(), None);
    assert_eq!(pack.pop(), None);
}

#[test]
fn test_concat_pack_with_different_delimiter() {
    let mut left = StrPack::from_items(["a", "b"], ",").unwrap();
    let right = StrPack::from_items(["c", "d"], "|").unwrap();

    let total = left.concat(Input::Pack(&right));

    assert_eq!(total, 4);
    assert_eq!(left.as_str(), "a,b,c,d");
}

#[test]
fn test_concat_pack_onto_empty() {
    let mut left = StrPack::new(",").unwrap();
    let right = StrPack::from_items(["c", "d"], ",").unwrap();

    assert_eq!(left.concat(Input::Pack(&right)), 2);
    assert_eq!(left.as_str(), "c,d");
}

#[test]
fn test_concat_joined_normalizes() {
    let mut pack = StrPack::from_items(["a"], ",").unwrap();

    assert_eq!(pack.concat(Input::Joined(",b,,c,")), 3);
    assert_eq!(pack.as_str(), "a,b,c");
}

#[test]
fn test_concat_items() {
    let mut pack = StrPack::from_items(["a"], ",").unwrap();

    assert_eq!(pack.concat(Input::Items(&["b", "c"])), 3);
    assert_eq!(pack.to_vec(), ["a", "b", "c"]);
}

#[test]
fn test_concat_empty_inputs_are_noops() {
    let mut pack = StrPack::from_items(["a"], ",").unwrap();
    let empty = StrPack::new(",").unwrap();

    assert_eq!(pack.concat(Input::Pack(&empty)), 1);
    assert_eq!(pack.concat(Input::Joined("")), 1);
    assert_eq!(pack.concat(Input::Items(&[])), 1);
    assert_eq!(pack.as_str(), "a");
}

#[test]
fn test_clone_does_not_alias() {
    let original = StrPack::from_items(["a", "b"], ",").unwrap();
    let mut copy = original.clone();

    copy.push("c").unwrap();

    assert_eq!(original.len(), 2);
    assert_eq!(copy.len(), 3);
}

#[test]
fn test_set_delimiter_rewrites_buffer() {
    let mut pack = StrPack::from_items(["a", "b", "c"], ",").unwrap();

    pack.set_delimiter("::").unwrap();

    assert_eq!(pack.delimiter(), "::");
    assert_eq!(pack.as_str(), "a::b::c");
    assert_eq!(pack.len(), 3);
    assert!(pack.has("b").unwrap());
}

#[test]
fn test_set_delimiter_empty_rejected() {
    let mut pack = StrPack::from_items(["a"], ",").unwrap();
    assert_eq!(pack.set_delimiter("").unwrap_err(), StrPackError::EmptyDelimiter);
}

#[test]
fn test_map_transforms_each_item() {
    let pack = StrPack::from_items(["a", "b"], ",").unwrap();
    let upper = pack.map(|item| item.to_uppercase());

    assert_eq!(upper.to_vec(), ["A", "B"]);
    assert_eq!(pack.to_vec(), ["a", "b"]);
}

#[test]
fn test_map_renormalizes_results() {
    let pack = StrPack::from_items(["keep", "drop", "keep"], ",").unwrap();

    // An empty transform result disappears after re-normalization.
    let filtered = pack.map(|item| if item == "drop" { String::new() } else { item.to_string() });
    assert_eq!(filtered.to_vec(), ["keep", "keep"]);

    // A result containing the delimiter splits into several items.
    let split = pack.map(|item| format!("{item},{item}"));
    assert_eq!(split.len(), 6);
}

#[test]
fn test_display_is_raw_buffer() {
    let pack = StrPack::from_items(["a", "b"], "|").unwrap();
    assert_eq!(pack.to_string(), "a|b");
}

#[test]
fn test_byte_len_is_buffer_length_not_count() {
    let pack = StrPack::from_items(["ab", "cd"], ",").unwrap();

    assert_eq!(pack.byte_len(), 5);
    assert_eq!(pack.len(), 2);
}

#[test]
fn test_collect_and_extend() {
    let mut pack: StrPack = ["a", "b"].into_iter().collect();
    assert_eq!(pack.delimiter(), DEFAULT_DELIMITER);
    assert_eq!(pack.to_vec(), ["a", "b"]);

    pack.extend(["c", "", "d"]);
    assert_eq!(pack.to_vec(), ["a", "b", "c", "d"]);
}

#[test]
fn test_count_matches_to_vec_after_mixed_mutations() {
    let mut pack = StrPack::new(",").unwrap();

    pack.push("a").unwrap();
    pack.unshift("b").unwrap();
    pack.push("c").unwrap();
    pack.concat(Input::Items(&["d", "e"]));
    pack.pop();
    pack.shift();
    pack.remove("c").unwrap();

    assert_eq!(pack.len(), pack.to_vec().len());
}
