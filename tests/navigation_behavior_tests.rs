use approx::assert_relative_eq;
use carousel_rs::api::{CarouselConfig, CarouselEngine, MountDescriptor};
use carousel_rs::render::NullRenderer;

fn engine(slides: usize, looping: bool) -> CarouselEngine<NullRenderer> {
    CarouselEngine::new(
        NullRenderer::default(),
        MountDescriptor::standard(slides),
        CarouselConfig::default().with_loop(looping),
    )
    .expect("engine init")
}

#[test]
fn looping_next_wraps_from_last_to_first() {
    let mut engine = engine(3, true);
    engine.go_to_slide(2).expect("go to 2");
    assert!(engine.go_to_next().expect("next"));
    assert_eq!(engine.current_index(), 0);
}

#[test]
fn looping_previous_wraps_from_first_to_last() {
    let mut engine = engine(3, true);
    assert!(engine.go_to_previous().expect("previous"));
    assert_eq!(engine.current_index(), 2);
}

#[test]
fn bounded_navigation_is_a_no_op_at_edges() {
    let mut engine = engine(3, false);
    let renders_before = engine.renderer().render_count;
    assert!(!engine.go_to_previous().expect("previous"));
    assert_eq!(engine.current_index(), 0);
    assert_eq!(engine.renderer().render_count, renders_before);

    engine.go_to_slide(2).expect("go to 2");
    assert!(!engine.go_to_next().expect("next"));
    assert_eq!(engine.current_index(), 2);
}

#[test]
fn go_to_slide_sets_exact_index_and_ignores_out_of_range() {
    let mut engine = engine(5, true);
    for index in 0..5 {
        assert!(engine.go_to_slide(index).expect("in range"));
        assert_eq!(engine.current_index(), index);
    }

    let renders_before = engine.renderer().render_count;
    assert!(!engine.go_to_slide(5).expect("out of range"));
    assert!(!engine.go_to_slide(42).expect("out of range"));
    assert_eq!(engine.current_index(), 4);
    assert_eq!(engine.renderer().render_count, renders_before);
}

#[test]
fn every_transition_renders_one_consistent_frame() {
    let mut engine = engine(4, false);
    engine.go_to_next().expect("next");
    engine.go_to_next().expect("next");

    let frame = engine.last_frame().expect("frame");
    assert_relative_eq!(frame.position.track_offset_percent, -200.0);
    assert_eq!(frame.position.counter_text(), "3");
    assert_eq!(frame.position.total_display, 4);
    assert_eq!(frame.indicators.active_index(), Some(2));
    assert_eq!(frame.indicators.active_count(), 1);
    assert!(frame.buttons.prev_enabled);
    assert!(frame.buttons.next_enabled);

    engine.go_to_slide(3).expect("last");
    let frame = engine.last_frame().expect("frame");
    assert!(!frame.buttons.next_enabled);
    assert_eq!(frame, &engine.build_frame());
}

#[test]
fn zero_slides_is_an_inert_widget() {
    let mut engine = engine(0, true);
    assert!(!engine.go_to_next().expect("next"));
    assert!(!engine.go_to_previous().expect("previous"));
    assert!(!engine.go_to_slide(0).expect("slide"));
    assert_eq!(engine.current_index(), 0);

    let frame = engine.last_frame().expect("mount frame");
    assert_eq!(frame.position.current_display, 0);
    assert_eq!(frame.position.total_display, 0);
    assert!(frame.indicators.is_empty());
    assert!(!frame.buttons.prev_enabled);
    assert!(!frame.buttons.next_enabled);
}
