use quizcards::vdom::{
    br, button, diff, div, input, p, text, Node, PatchError, Renderer, TreeRenderer,
};

#[derive(Debug, Clone, PartialEq)]
enum Msg {
    Press(u32),
    Typed(String),
}

fn list(items: &[&str]) -> Node<Msg> {
    div()
        .id("root")
        .children(items.iter().enumerate().map(|(i, item)| -> Node<Msg> {
            p().class("item")
                .child(text(*item))
                .child(button().on_click(Msg::Press(i as u32)).text("go"))
                .into()
        }))
        .into()
}

fn converges(old: &Node<Msg>, new: &Node<Msg>) {
    let mut renderer = TreeRenderer::new();
    let mut live = renderer.materialize(old);
    let patches = renderer.diff(old, new);
    renderer
        .apply_patch(&mut live, &patches)
        .expect("patches apply cleanly");
    assert_eq!(&live.to_node(), new);
}

#[test]
fn patched_tree_matches_target() {
    let cases: &[(&[&str], &[&str])] = &[
        (&[], &["a"]),
        (&["a"], &[]),
        (&["a", "b", "c"], &["b", "c"]),
        (&["a"], &["a", "b", "c"]),
        (&["a", "b"], &["x", "y"]),
    ];
    for (old, new) in cases {
        converges(&list(old), &list(new));
    }
}

#[test]
fn tag_change_replaces_subtree() {
    let old: Node<Msg> = div().child(p().text("one")).into();
    let new: Node<Msg> = div()
        .child(input().attr("value", "one").on_input(Msg::Typed))
        .child(br())
        .into();
    converges(&old, &new);
}

#[test]
fn identical_trees_produce_no_patches() {
    let tree = list(&["a", "b"]);
    assert!(diff(&tree, &tree.clone()).is_empty());
}

#[test]
fn unchanged_nodes_keep_their_identity() {
    let old = list(&["a", "b"]);
    let new = list(&["a", "b", "c"]);
    let mut renderer = TreeRenderer::new();
    let mut live = renderer.materialize(&old);
    let before = live.get(&[1, 1]).map(|n| n.id());

    let patches = renderer.diff(&old, &new);
    renderer.apply_patch(&mut live, &patches).expect("apply");

    assert_eq!(live.get(&[1, 1]).map(|n| n.id()), before);
    assert_eq!(live.children().len(), 3);
}

#[test]
fn text_update_is_a_single_patch() {
    let old = list(&["a"]);
    let new = list(&["b"]);
    let patches = diff(&old, &new);
    assert_eq!(patches.len(), 1);
}

#[test]
fn patches_against_the_wrong_tree_fail() {
    let mut renderer = TreeRenderer::new();
    let mut live = renderer.materialize(&list(&[]));
    let patches = renderer.diff(&list(&["a", "b"]), &list(&["a", "c"]));
    let err = renderer
        .apply_patch(&mut live, &patches)
        .expect_err("paths do not exist");
    assert!(matches!(err, PatchError::InvalidPath { .. }));
}
