use arbor::TreeError;
use arbor::node::{NodeId, TreeModel};
use arbor::widgets::tree::{
    DISPLAY_BLOCK, DISPLAY_BRACKETS, LEAF_MARKER, TREE_LEVEL_INDENT, TreeRenderer, TreeView,
};
use arbor_term::{Buffer, Surface, ThemeDefinition};

type Model = TreeModel<&'static str>;

/// root -> c1 (expanded) -> c1a; c2 (collapsed) -> x; c3 (leaf)
fn mixed_tree() -> (TreeView<&'static str>, [NodeId; 4]) {
    let mut model = Model::new();
    let root = model.insert("root").unwrap();
    let c1 = model.add_child_value(root, "c1", true).unwrap();
    let c1a = model.add_child_value(c1, "c1a", true).unwrap();
    let c2 = model.add_child_value(root, "c2", false).unwrap();
    model.add_child_value(c2, "x", true).unwrap();
    model.add_child_value(root, "c3", false).unwrap();
    let view = TreeView::new(model, root, 20, 5).unwrap();
    (view, [root, c1, c1a, c2])
}

fn rows(buf: &Buffer) -> Vec<String> {
    (0..buf.height())
        .map(|y| buf.row_text(y).trim_end().to_string())
        .collect()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_negative_indent_is_rejected() {
    assert_eq!(TreeRenderer::new(-1, true, false), Err(TreeError::InvalidIndent(-1)));
    assert!(TreeRenderer::new(0, true, false).is_ok());
}

#[test]
fn test_from_theme_reads_properties() {
    let theme = ThemeDefinition::dark()
        .with_integer(TREE_LEVEL_INDENT, 2)
        .with_boolean(DISPLAY_BRACKETS, false)
        .with_boolean(DISPLAY_BLOCK, true);
    let renderer = TreeRenderer::from_theme(&theme).unwrap();

    assert_eq!(renderer.indent(), 2);
    assert!(!renderer.display_brackets());
    assert!(renderer.display_block());

    let defaults = TreeRenderer::from_theme(&ThemeDefinition::dark()).unwrap();
    assert_eq!(defaults, TreeRenderer::default());
}

#[test]
fn test_from_theme_rejects_negative_indent() {
    let theme = ThemeDefinition::dark().with_integer(TREE_LEVEL_INDENT, -3);
    assert_eq!(TreeRenderer::from_theme(&theme), Err(TreeError::InvalidIndent(-3)));
}

// ============================================================================
// Row layout
// ============================================================================

#[test]
fn test_draw_with_brackets() {
    let (view, _) = mixed_tree();
    let theme = ThemeDefinition::dark();
    let mut renderer = TreeRenderer::default();
    let mut buf = Buffer::new(20, 5);

    let scrollbar = renderer.draw(&view, &mut buf, &theme);

    assert!(scrollbar.is_none());
    assert_eq!(
        rows(&buf),
        vec!["[<] root", " [<] c1", "  [.] c1a", " [>] c2", " [.] c3"]
    );
}

#[test]
fn test_draw_without_brackets() {
    let (view, _) = mixed_tree();
    let theme = ThemeDefinition::dark();
    let mut renderer = TreeRenderer::new(1, false, false).unwrap();
    let mut buf = Buffer::new(20, 5);

    renderer.draw(&view, &mut buf, &theme);

    assert_eq!(rows(&buf), vec!["< root", " < c1", "  . c1a", " > c2", " . c3"]);
}

#[test]
fn test_draw_block_mode() {
    let (view, _) = mixed_tree();
    let theme = ThemeDefinition::dark().with_character(LEAF_MARKER, '*');
    let mut renderer = TreeRenderer::new(2, false, true).unwrap();
    let mut buf = Buffer::new(20, 5);

    renderer.draw(&view, &mut buf, &theme);

    let rows = rows(&buf);
    // Labels end at column 17 (columns - 3).
    assert_eq!(rows[0], "< ...........root");
    assert_eq!(rows[1], "  < ...........c1");
    assert_eq!(rows[2], "    * ........c1a");
    assert_eq!(rows[4], "  * ...........c3");
}

#[test]
fn test_draw_hidden_root() {
    let (mut view, _) = mixed_tree();
    view.set_display_root(false);
    let mut renderer = TreeRenderer::default();
    let mut buf = Buffer::new(20, 5);

    renderer.draw(&view, &mut buf, &ThemeDefinition::dark());

    assert_eq!(rows(&buf), vec!["[<] c1", " [.] c1a", "[>] c2", "[.] c3", ""]);
}

#[test]
fn test_focused_row_styles() {
    let (view, _) = mixed_tree();
    let theme = ThemeDefinition::dark();
    let mut renderer = TreeRenderer::default();
    let mut buf = Buffer::new(20, 5);
    renderer.draw(&view, &mut buf, &theme);

    // Root is selected.
    let style = |x, y| buf.get(x, y).unwrap().cell_style();
    assert_eq!(style(0, 0), theme.prelight());
    assert_eq!(style(1, 0), theme.selected());
    assert_eq!(style(2, 0), theme.prelight());
    assert_eq!(style(4, 0), theme.active());

    assert_eq!(style(1, 1), theme.normal());
    assert_eq!(style(5, 1), theme.normal());
    // Untouched cells keep the background fill.
    assert_eq!(style(19, 4), theme.normal());
}

// ============================================================================
// Cursor and size
// ============================================================================

#[test]
fn test_cursor_follows_selection() {
    let (mut view, _) = mixed_tree();
    let renderer = TreeRenderer::default();
    assert_eq!(renderer.cursor_location(&view), (1, 0));

    view.select_next();
    assert_eq!(renderer.cursor_location(&view), (2, 1));
    view.select_next();
    assert_eq!(renderer.cursor_location(&view), (3, 2));

    let bare = TreeRenderer::new(1, false, false).unwrap();
    assert_eq!(bare.cursor_location(&view), (2, 2));
}

#[test]
fn test_preferred_size() {
    let (mut view, [root, ..]) = mixed_tree();
    let renderer = TreeRenderer::default();
    // Widest row is "  [.] c1a"; rows are root, c1, c1a, c2, c3.
    assert_eq!(renderer.preferred_size(&view), (9, 5));

    let bare = TreeRenderer::new(1, false, false).unwrap();
    assert_eq!(bare.preferred_size(&view), (7, 5));

    view.update(|model| model.set_expanded(root, false)).unwrap();
    assert_eq!(renderer.preferred_size(&view), (8, 1));
}

// ============================================================================
// Scrollbar
// ============================================================================

fn long_chain(len: usize) -> TreeView<String> {
    let mut model = TreeModel::new();
    let root = model.insert("root".to_string()).unwrap();
    for i in 0..len {
        model.add_child_value(root, format!("n{i}"), true).unwrap();
    }
    TreeView::new(model, root, 12, 4).unwrap()
}

#[test]
fn test_scrollbar_appears_when_tree_overflows() {
    let view = long_chain(10);
    let theme = ThemeDefinition::dark();
    let mut renderer = TreeRenderer::default();
    let mut buf = Buffer::new(12, 4);

    let geometry = renderer.draw(&view, &mut buf, &theme).unwrap();

    assert_eq!(geometry.x, 11);
    assert_eq!(geometry.height, 4);
    assert_eq!((geometry.handle_pos, geometry.handle_size), (0, 2));
    assert_eq!(renderer.scrollbar().maximum(), 11);
    assert_eq!(renderer.scrollbar().view_size(), 4);
    assert_eq!(renderer.scrollbar().position(), 0);

    assert_eq!(buf.get(11, 0).unwrap().char, '█');
    assert_eq!(buf.get(11, 1).unwrap().char, '█');
    assert_eq!(buf.get(11, 2).unwrap().char, '│');
    assert_eq!(buf.row_text(1).trim_end(), " [.] n0    █");
}

#[test]
fn test_scrollbar_tracks_selection() {
    let mut view = long_chain(10);
    view.select_last_node();
    let mut renderer = TreeRenderer::default();
    let mut buf = Buffer::new(12, 4);

    let geometry = renderer.draw(&view, &mut buf, &ThemeDefinition::dark()).unwrap();

    assert_eq!(renderer.scrollbar().position(), 7);
    assert_eq!(geometry.handle_pos, 2);
    assert!(geometry.handle_contains(11, 3));
    assert!(!geometry.handle_contains(11, 0));
    assert_eq!(buf.row_text(3).trim_end(), " [.] n9    █");
}
