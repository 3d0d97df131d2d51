use crate::error::{CarouselError, CarouselResult};

use super::CarouselConfig;

pub(super) fn validate_config(config: CarouselConfig) -> CarouselResult<()> {
    if config.autoplay_interval_ms == 0 {
        return Err(CarouselError::InvalidConfig(
            "autoPlayInterval must be greater than zero".to_owned(),
        ));
    }
    if !config.swipe_threshold_px.is_finite() || config.swipe_threshold_px < 0.0 {
        return Err(CarouselError::InvalidConfig(
            "swipe threshold must be finite and >= 0".to_owned(),
        ));
    }
    Ok(())
}
