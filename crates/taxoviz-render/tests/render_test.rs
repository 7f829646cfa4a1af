use taxoviz_core::{Selection, Taxonomy, TaxonomyNode};
use taxoviz_render::{
    DetachedSurface, DrawCommand, DrawSurface, LayoutOptions, RecordingSurface, RenderOutcome,
    SvgRenderOptions, SvgSurface, render,
};

const SELECTED_FILL: &str = "#ff7c95";
const MUTED_FILL: &str = "#ffc0cb";

fn abc() -> Taxonomy {
    Taxonomy::new(vec![
        TaxonomyNode::new("a", "A"),
        TaxonomyNode::new("b", "B").with_children([
            TaxonomyNode::new("b1", "B1"),
            TaxonomyNode::new("b2", "B2"),
        ]),
        TaxonomyNode::new("c", "C").with_children([TaxonomyNode::new("c1", "C1")]),
    ])
}

fn op_names(surface: &RecordingSurface) -> Vec<&'static str> {
    surface
        .commands()
        .iter()
        .map(|c| match c {
            DrawCommand::Clear => "clear",
            DrawCommand::Circle { .. } => "circle",
            DrawCommand::Line { .. } => "line",
            DrawCommand::Text { .. } => "text",
        })
        .collect()
}

#[test]
fn draws_in_hub_then_per_node_order() {
    let t = abc();
    let mut s = RecordingSurface::new(600.0, 600.0);
    let outcome = render(&mut s, t.top_level(), t.select(Some("b")), &LayoutOptions::default());
    assert_eq!(outcome, RenderOutcome::Drawn);

    #[rustfmt::skip]
    let expected = [
        "clear",
        "circle", "text",
        "line", "circle", "text",
        "line", "circle", "text",
        "line", "circle", "text",
        "line", "circle", "text",
        "line", "circle", "text",
    ];
    assert_eq!(op_names(&s), expected);

    let labels: Vec<&str> = s.texts().map(|(t, _, _)| t).collect();
    assert_eq!(labels, ["Taxonomy", "A", "B", "B1", "B2", "C"]);
}

#[test]
fn exactly_one_node_is_emphasized() {
    let t = abc();
    let mut s = RecordingSurface::new(600.0, 600.0);
    render(&mut s, t.top_level(), t.select(Some("b")), &LayoutOptions::default());

    let node_fills: Vec<&str> = s
        .circles()
        .filter(|(_, r, _)| *r == 30.0)
        .map(|(_, _, f)| f.color.as_str())
        .collect();
    assert_eq!(node_fills, [MUTED_FILL, SELECTED_FILL, MUTED_FILL]);

    let selected_label = s.texts().find(|(t, _, _)| *t == "B").expect("B label");
    assert_eq!(selected_label.2.color, "white");
    let muted_label = s.texts().find(|(t, _, _)| *t == "A").expect("A label");
    assert_eq!(muted_label.2.color, "#ff385f");
}

#[test]
fn nothing_is_emphasized_without_a_selection() {
    let t = abc();
    let mut s = RecordingSurface::new(600.0, 600.0);
    render(&mut s, t.top_level(), Selection::None, &LayoutOptions::default());
    assert!(s.circles().all(|(_, _, f)| f.color != SELECTED_FILL));
    // Hub plus three first-ring nodes, no children.
    assert_eq!(s.circles().count(), 4);
    assert_eq!(s.lines().count(), 3);
}

#[test]
fn second_ring_count_matches_children_of_the_selected_node() {
    let t = abc();
    let options = LayoutOptions::default();
    for (id, expected) in [("a", 0usize), ("b", 2), ("c", 1)] {
        let mut s = RecordingSurface::new(600.0, 600.0);
        render(&mut s, t.top_level(), t.select(Some(id)), &options);
        let child_circles = s.circles().filter(|(_, r, _)| *r == 20.0).count();
        assert_eq!(child_circles, expected, "selected {id}");
        assert_eq!(s.lines().count(), 3 + expected, "selected {id}");
    }
}

#[test]
fn accepts_a_plain_optional_node_reference() {
    let t = abc();
    let selected: Option<&TaxonomyNode> = t.find_top_level("c");
    let mut s = RecordingSurface::new(500.0, 500.0);
    render(&mut s, t.top_level(), selected, &LayoutOptions::default());
    assert_eq!(s.circles().filter(|(_, _, f)| f.color == SELECTED_FILL).count(), 1);
}

#[test]
fn empty_taxonomy_draws_only_the_hub() {
    let mut s = RecordingSurface::new(320.0, 240.0);
    render(&mut s, &[], Selection::None, &LayoutOptions::default());
    assert_eq!(op_names(&s), ["clear", "circle", "text"]);
    let (center, radius, fill) = s.circles().next().expect("hub");
    assert_eq!((center.x, center.y, radius), (160.0, 120.0, 50.0));
    assert_eq!(fill.color, "#FFC0CB");
}

#[test]
fn unavailable_surfaces_are_left_untouched() {
    let t = abc();
    let options = LayoutOptions::default();

    let mut detached = RecordingSurface::detached();
    let outcome = render(&mut detached, t.top_level(), t.select(Some("b")), &options);
    assert_eq!(outcome, RenderOutcome::SurfaceUnavailable);
    assert!(detached.commands().is_empty());
    assert_eq!(detached.clear_count(), 0);

    let mut zero = RecordingSurface::new(0.0, 480.0);
    assert!(!render(&mut zero, t.top_level(), Selection::None, &options).is_drawn());
    assert!(zero.commands().is_empty());

    assert_eq!(
        render(&mut DetachedSurface, t.top_level(), Selection::None, &options),
        RenderOutcome::SurfaceUnavailable
    );
}

#[test]
fn rendering_twice_is_idempotent() {
    let t = abc();
    let options = LayoutOptions::default();

    let mut s = RecordingSurface::new(640.0, 480.0);
    render(&mut s, t.top_level(), t.select(Some("b")), &options);
    let first = s.commands().to_vec();
    render(&mut s, t.top_level(), t.select(Some("b")), &options);
    assert_eq!(s.commands(), first.as_slice());
    assert_eq!(s.clear_count(), 2);

    let mut svg = SvgSurface::new(640.0, 480.0);
    render(&mut svg, t.top_level(), t.select(Some("b")), &options);
    let a = svg.to_svg(&SvgRenderOptions::default());
    render(&mut svg, t.top_level(), t.select(Some("b")), &options);
    let b = svg.to_svg(&SvgRenderOptions::default());
    assert_eq!(a, b);
}

#[test]
fn resize_then_render_recenters_the_hub() {
    let t = abc();
    let options = LayoutOptions::default();
    let mut s = RecordingSurface::new(600.0, 600.0);
    render(&mut s, t.top_level(), Selection::None, &options);
    let (hub, _, _) = s.circles().next().expect("hub");
    assert_eq!((hub.x, hub.y), (300.0, 300.0));

    s.resize(800.0, 300.0);
    render(&mut s, t.top_level(), Selection::None, &options);
    let (hub, _, _) = s.circles().next().expect("hub");
    assert_eq!((hub.x, hub.y), (400.0, 150.0));
    let (_, first, _) = s.lines().next().expect("spoke");
    assert!((first.y - 50.0).abs() < 1e-9);
}

#[test]
fn renders_through_a_trait_object() {
    let t = abc();
    let mut s = RecordingSurface::new(300.0, 300.0);
    {
        let dynamic: &mut dyn DrawSurface = &mut s;
        render(dynamic, t.top_level(), Selection::None, &LayoutOptions::default());
    }
    assert_eq!(s.clear_count(), 1);
}
