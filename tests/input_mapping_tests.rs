use carousel_rs::api::{CarouselConfig, CarouselEngine, MountDescriptor};
use carousel_rs::interaction::{InputEvent, KeyCode};
use carousel_rs::render::NullRenderer;

fn engine(slides: usize, config: CarouselConfig) -> CarouselEngine<NullRenderer> {
    CarouselEngine::new(
        NullRenderer::default(),
        MountDescriptor::standard(slides),
        config,
    )
    .expect("engine init")
}

#[test]
fn buttons_and_keys_drive_navigation() {
    let mut engine = engine(4, CarouselConfig::default());
    assert!(engine.handle_input(InputEvent::NextButton).expect("next"));
    assert!(engine.handle_input(InputEvent::NextButton).expect("next"));
    assert!(engine.handle_input(InputEvent::PrevButton).expect("prev"));
    assert_eq!(engine.current_index(), 1);

    engine
        .handle_input(InputEvent::KeyDown {
            key: KeyCode::ArrowLeft,
        })
        .expect("left");
    engine
        .handle_input(InputEvent::KeyDown {
            key: KeyCode::ArrowLeft,
        })
        .expect("left");
    assert_eq!(engine.current_index(), 3);

    assert!(
        !engine
            .handle_input(InputEvent::KeyDown {
                key: KeyCode::Other,
            })
            .expect("other key")
    );
    assert_eq!(engine.current_index(), 3);
}

#[test]
fn indicator_activation_jumps_to_slide() {
    let mut engine = engine(5, CarouselConfig::default());
    assert!(
        engine
            .handle_input(InputEvent::IndicatorActivated { index: 3 })
            .expect("indicator")
    );
    assert_eq!(engine.current_index(), 3);
    assert!(
        !engine
            .handle_input(InputEvent::IndicatorActivated { index: 9 })
            .expect("stale indicator")
    );
    assert_eq!(engine.current_index(), 3);
}

#[test]
fn swipe_direction_picks_next_or_previous() {
    let mut engine = engine(3, CarouselConfig::default().with_loop(false));

    engine
        .handle_input(InputEvent::TouchStart { x: 300.0 })
        .expect("touch start");
    assert!(engine.swipe_tracker().is_tracking());
    assert!(
        engine
            .handle_input(InputEvent::TouchEnd { x: 200.0 })
            .expect("swipe left")
    );
    assert_eq!(engine.current_index(), 1);

    engine
        .handle_input(InputEvent::TouchStart { x: 100.0 })
        .expect("touch start");
    engine
        .handle_input(InputEvent::TouchEnd { x: 180.0 })
        .expect("swipe right");
    assert_eq!(engine.current_index(), 0);
}

#[test]
fn short_swipes_are_ignored() {
    let mut engine = engine(3, CarouselConfig::default());
    engine
        .handle_input(InputEvent::TouchStart { x: 200.0 })
        .expect("touch start");
    assert!(
        !engine
            .handle_input(InputEvent::TouchEnd { x: 150.0 })
            .expect("exactly threshold")
    );
    assert_eq!(engine.current_index(), 0);
}

#[test]
fn swipe_threshold_is_configurable() {
    let mut engine = engine(3, CarouselConfig::default().with_swipe_threshold_px(10.0));
    engine
        .handle_input(InputEvent::TouchStart { x: 50.0 })
        .expect("touch start");
    engine
        .handle_input(InputEvent::TouchEnd { x: 30.0 })
        .expect("swipe");
    assert_eq!(engine.current_index(), 1);
}

#[test]
fn play_pause_control_toggles_autoplay() {
    let mut engine = engine(3, CarouselConfig::default());
    engine
        .handle_input(InputEvent::PlayPauseControl)
        .expect("play");
    assert!(engine.is_playing());
    engine
        .handle_input(InputEvent::PlayPauseControl)
        .expect("pause");
    assert!(!engine.is_playing());
}

#[test]
fn input_after_teardown_is_ignored() {
    let mut engine = engine(3, CarouselConfig::default());
    engine.teardown();
    assert!(!engine.handle_input(InputEvent::NextButton).expect("next"));
    assert!(
        !engine
            .handle_input(InputEvent::PlayPauseControl)
            .expect("play")
    );
    assert!(!engine.is_playing());
}
