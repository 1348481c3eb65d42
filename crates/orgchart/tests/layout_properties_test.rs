//! Property tests for the tree layout laws on generated charts.

use float_cmp::approx_eq;
use proptest::prelude::*;

use orgchart::{
    geometry::{Insets, Size},
    hierarchy::Hierarchy,
    layout::{Layout, LayoutEngine},
    links,
    person::RawNode,
};

// ===================
// Strategies
// ===================

fn tree_strategy() -> impl Strategy<Value = RawNode> {
    let leaf = (0.0f64..20.0).prop_map(|value| RawNode::new("leaf", "Employer", "", value));
    leaf.prop_recursive(5, 64, 5, |inner| {
        (prop::collection::vec(inner, 1..6), 0.0f64..20.0).prop_map(|(children, value)| {
            RawNode::new("node", "Employer", "", value).with_children(children)
        })
    })
}

fn engine_strategy() -> impl Strategy<Value = LayoutEngine> {
    (200.0f32..2000.0, 200.0f32..2000.0, 0.0f32..90.0).prop_map(|(width, height, margin)| {
        LayoutEngine::new(Size::new(width, height)).with_margins(Insets::uniform(margin))
    })
}

fn calculate<'a>(engine: &LayoutEngine, hierarchy: &Hierarchy<'a>) -> Result<Layout<'a>, TestCaseError> {
    engine
        .calculate(hierarchy)
        .map_err(|err| TestCaseError::fail(format!("layout failed: {err}")))
}

// ===================
// Property Test Functions
// ===================

/// Every input record is positioned once, and only the root lacks a parent.
fn check_count_preserved(root: &RawNode, engine: &LayoutEngine) -> Result<(), TestCaseError> {
    let hierarchy = Hierarchy::build(root).map_err(|err| TestCaseError::fail(err.to_string()))?;
    let layout = calculate(engine, &hierarchy)?;

    prop_assert_eq!(layout.len(), root.count());
    let roots: Vec<_> = layout.nodes().iter().filter(|node| node.parent().is_none()).collect();
    prop_assert_eq!(roots.len(), 1);
    prop_assert_eq!(roots[0].id(), hierarchy.root());
    Ok(())
}

/// Each parent sits at the mean breadth of its children, and siblings never
/// share or swap positions.
fn check_breadth_laws(root: &RawNode, engine: &LayoutEngine) -> Result<(), TestCaseError> {
    let hierarchy = Hierarchy::build(root).map_err(|err| TestCaseError::fail(err.to_string()))?;
    let layout = calculate(engine, &hierarchy)?;

    for node in layout.nodes() {
        let children = node.children();
        if children.is_empty() {
            continue;
        }

        let breadths: Vec<f32> = children.iter().map(|&child| layout[child].breadth_axis()).collect();
        let mean = breadths.iter().sum::<f32>() / breadths.len() as f32;
        prop_assert!(
            approx_eq!(f32, node.breadth_axis(), mean, epsilon = 0.01),
            "{} at {} is not at the mean {mean} of {breadths:?}",
            node.id(),
            node.breadth_axis()
        );

        for pair in breadths.windows(2) {
            prop_assert!(pair[0] < pair[1], "siblings out of order: {breadths:?}");
        }
    }
    Ok(())
}

/// The depth coordinate is proportional to the level.
fn check_depth_proportional(root: &RawNode, engine: &LayoutEngine) -> Result<(), TestCaseError> {
    let hierarchy = Hierarchy::build(root).map_err(|err| TestCaseError::fail(err.to_string()))?;
    let layout = calculate(engine, &hierarchy)?;
    let inner_height = layout.inner_size().height();
    let max_depth = layout.max_depth();

    for node in layout.nodes() {
        let expected = if max_depth == 0 {
            0.0
        } else {
            node.level() as f32 / max_depth as f32 * inner_height
        };
        prop_assert!(
            approx_eq!(f32, node.depth_axis(), expected, epsilon = 0.01),
            "level {} at {} instead of {expected}",
            node.level(),
            node.depth_axis()
        );
    }
    Ok(())
}

/// Laying out the same hierarchy twice gives identical positions.
fn check_idempotent(root: &RawNode, engine: &LayoutEngine) -> Result<(), TestCaseError> {
    let hierarchy = Hierarchy::build(root).map_err(|err| TestCaseError::fail(err.to_string()))?;
    let first = calculate(engine, &hierarchy)?;
    let second = calculate(engine, &hierarchy)?;

    prop_assert_eq!(first.nodes(), second.nodes());
    Ok(())
}

/// Every connector starts at its child and ends at its parent.
fn check_link_endpoints(root: &RawNode, engine: &LayoutEngine) -> Result<(), TestCaseError> {
    let hierarchy = Hierarchy::build(root).map_err(|err| TestCaseError::fail(err.to_string()))?;
    let layout = calculate(engine, &hierarchy)?;
    let links = links::link_paths(&layout).map_err(|err| TestCaseError::fail(err.to_string()))?;

    prop_assert_eq!(links.len(), layout.len() - 1);
    for link in &links {
        let child = &layout[link.child()];
        let parent = &layout[link.parent()];
        prop_assert_eq!(child.parent(), Some(link.parent()));
        prop_assert_eq!(link.curve().start(), child.screen_point());
        prop_assert_eq!(link.curve().end(), parent.screen_point());
    }
    Ok(())
}

// ===================
// Proptest Wrappers
// ===================

proptest! {
    #[test]
    fn count_preserved(root in tree_strategy(), engine in engine_strategy()) {
        check_count_preserved(&root, &engine)?;
    }

    #[test]
    fn breadth_laws(root in tree_strategy(), engine in engine_strategy()) {
        check_breadth_laws(&root, &engine)?;
    }

    #[test]
    fn depth_proportional(root in tree_strategy(), engine in engine_strategy()) {
        check_depth_proportional(&root, &engine)?;
    }

    #[test]
    fn idempotent(root in tree_strategy(), engine in engine_strategy()) {
        check_idempotent(&root, &engine)?;
    }

    #[test]
    fn link_endpoints(root in tree_strategy(), engine in engine_strategy()) {
        check_link_endpoints(&root, &engine)?;
    }
}
