use crate::error::{SliderError, SliderResult};

use super::SliderEngineConfig;

pub(super) fn validate_engine_config(
    config: SliderEngineConfig,
) -> SliderResult<SliderEngineConfig> {
    if !config.card_width_px.is_finite() || config.card_width_px <= 0.0 {
        return Err(SliderError::InvalidConfig(
            "card_width_px must be finite and > 0".to_owned(),
        ));
    }
    if !config.min_drag_distance_px.is_finite() || config.min_drag_distance_px < 0.0 {
        return Err(SliderError::InvalidConfig(
            "min_drag_distance_px must be finite and >= 0".to_owned(),
        ));
    }
    if !config.jitter_threshold_px.is_finite() || config.jitter_threshold_px < 0.0 {
        return Err(SliderError::InvalidConfig(
            "jitter_threshold_px must be finite and >= 0".to_owned(),
        ));
    }
    if config.autoplay_interval_ms == 0 {
        return Err(SliderError::InvalidConfig(
            "autoplay_interval_ms must be > 0".to_owned(),
        ));
    }
    Ok(config)
}

/// Returns a violation reason when a pointer coordinate cannot be used.
pub(super) fn pointer_coordinate_violation(x: f64) -> Option<String> {
    if x.is_finite() {
        None
    } else {
        Some(format!("pointer coordinate must be finite, got {x}"))
    }
}

#[cfg(test)]
mod tests {
    use super::{pointer_coordinate_violation, validate_engine_config};
    use crate::api::SliderEngineConfig;

    #[test]
    fn rejects_negative_card_width() {
        let config = SliderEngineConfig::default().with_card_width_px(-300.0);
        assert!(validate_engine_config(config).is_err());
    }

    #[test]
    fn rejects_zero_interval() {
        let config = SliderEngineConfig::default().with_autoplay_interval_ms(0);
        assert!(validate_engine_config(config).is_err());
    }

    #[test]
    fn accepts_zero_thresholds() {
        let config = SliderEngineConfig::default()
            .with_min_drag_distance_px(0.0)
            .with_jitter_threshold_px(0.0);
        assert!(validate_engine_config(config).is_ok());
    }

    #[test]
    fn flags_non_finite_coordinates() {
        assert!(pointer_coordinate_violation(12.5).is_none());
        assert!(pointer_coordinate_violation(f64::NAN).is_some());
        assert!(pointer_coordinate_violation(f64::INFINITY).is_some());
    }
}
