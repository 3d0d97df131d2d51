pub mod autoplay;
pub mod navigation;

pub use autoplay::{AutoplayTimer, TimerHandle};
pub use navigation::CarouselState;
