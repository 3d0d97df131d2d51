use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use carousel_rs::CarouselError;
use carousel_rs::api::{CarouselConfig, CarouselEngine, MountDescriptor};
use carousel_rs::error::CarouselResult;
use carousel_rs::render::{ButtonState, IndicatorSet, PlayPauseState, Renderer, SlidePosition};

/// Fails the next `failures` slide-position renders, then recovers.
struct FlakyRenderer {
    failures: Rc<Cell<usize>>,
}

impl Renderer for FlakyRenderer {
    fn render_slide_position(&mut self, _position: &SlidePosition) -> CarouselResult<()> {
        let remaining = self.failures.get();
        if remaining > 0 {
            self.failures.set(remaining - 1);
            return Err(CarouselError::Render("track element detached".to_owned()));
        }
        Ok(())
    }

    fn render_indicators(&mut self, _indicators: &IndicatorSet) -> CarouselResult<()> {
        Ok(())
    }

    fn render_buttons(&mut self, _buttons: ButtonState) -> CarouselResult<()> {
        Ok(())
    }

    fn render_play_pause(&mut self, _state: PlayPauseState) -> CarouselResult<()> {
        Ok(())
    }
}

fn engine(slides: usize, interval_ms: u64) -> (CarouselEngine<FlakyRenderer>, Rc<Cell<usize>>) {
    let failures = Rc::new(Cell::new(0));
    let engine = CarouselEngine::new(
        FlakyRenderer {
            failures: failures.clone(),
        },
        MountDescriptor::standard(slides),
        CarouselConfig::default().with_autoplay_interval_ms(interval_ms),
    )
    .expect("engine init");
    (engine, failures)
}

#[test]
fn failed_render_keeps_the_manual_transition() {
    let (mut engine, failures) = engine(4, 1_000);
    failures.set(1);

    let result = engine.go_to_next();
    assert!(matches!(result, Err(CarouselError::Render(_))));
    assert_eq!(engine.current_index(), 1);
    assert_eq!(
        engine.last_frame().expect("mount frame").position.current_display,
        1
    );

    assert!(engine.go_to_next().expect("renderer recovered"));
    assert_eq!(engine.current_index(), 2);
    assert_eq!(
        engine.last_frame().expect("frame").position.current_display,
        3
    );
}

#[test]
fn failed_autoplay_render_defers_pending_ticks() {
    let (mut engine, failures) = engine(10, 100);
    engine.start_autoplay().expect("start");
    failures.set(1);

    let result = engine.advance_time(Duration::from_millis(300));
    assert!(matches!(result, Err(CarouselError::Render(_))));
    assert_eq!(engine.current_index(), 1);
    assert!(engine.is_playing());

    assert_eq!(engine.advance_time(Duration::ZERO).expect("catch up"), 2);
    assert_eq!(engine.current_index(), 3);
    assert_eq!(engine.advance_time(Duration::ZERO).expect("settled"), 0);
}

#[test]
fn long_gap_catch_up_lands_on_the_periodic_index() {
    let (mut engine, _failures) = engine(4, 10);
    engine.start_autoplay().expect("start");

    let periods = engine
        .advance_time(Duration::from_secs(3_600))
        .expect("catch up");
    assert_eq!(periods, 360_000);
    assert_eq!(engine.current_index(), (360_000 % 4) as usize);

    engine.advance_time(Duration::from_millis(30)).expect("advance");
    assert_eq!(engine.current_index(), 3);
}
