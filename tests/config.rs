mod tests {
    use embassy_time::Duration;
    use myrtio_menorah::{
        ConfigError, DEFAULT_CONFIG, Direction, Error, MenorahConfig, MenorahController,
    };

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(DEFAULT_CONFIG.validate(), Ok(()));
        assert_eq!(MenorahConfig::default().initial_night, 4);
    }

    #[test]
    fn test_pixel_count() {
        let config = MenorahConfig {
            leds_per_strip: 7,
            ..DEFAULT_CONFIG
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::PixelCount {
                expected: 8,
                found: 7
            })
        );
    }

    #[test]
    fn test_initial_night_range() {
        let config = MenorahConfig {
            initial_night: 0,
            ..DEFAULT_CONFIG
        };
        assert_eq!(config.validate(), Err(ConfigError::NightOutOfRange(0)));

        let config = MenorahConfig {
            initial_night: 9,
            ..DEFAULT_CONFIG
        };
        assert_eq!(config.validate(), Err(ConfigError::NightOutOfRange(9)));
    }

    #[test]
    fn test_burn_settings() {
        let mut config = DEFAULT_CONFIG;
        config.burn.base_duration = Duration::from_ticks(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroBurnDuration));

        let mut config = DEFAULT_CONFIG;
        config.burn.variation = 1.0;
        assert_eq!(config.validate(), Err(ConfigError::VariationOutOfRange));
    }

    #[test]
    fn test_layout_and_flame() {
        let mut config = DEFAULT_CONFIG;
        config.layout.base_wax_leds = 9;
        assert_eq!(config.validate(), Err(ConfigError::WaxHeight(9)));

        let mut config = DEFAULT_CONFIG;
        config.layout.flame_start_leds = 6;
        assert_eq!(
            config.validate(),
            Err(ConfigError::FlameHeight { start: 6, max: 5 })
        );

        let mut config = DEFAULT_CONFIG;
        config.flame.min_brightness = 250;
        assert_eq!(
            config.validate(),
            Err(ConfigError::FlameBrightness { min: 250, max: 204 })
        );

        let mut config = DEFAULT_CONFIG;
        config.flame.speed = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::AnimationSpeed));

        let mut config = DEFAULT_CONFIG;
        config.colors.flame_palette = &[];
        assert_eq!(config.validate(), Err(ConfigError::EmptyFlamePalette));
    }

    #[test]
    fn test_wax_and_flame_fit_strip() {
        let mut config = DEFAULT_CONFIG;
        config.layout.base_wax_leds = 8;
        assert_eq!(
            config.validate(),
            Err(ConfigError::CandleTooTall { wax: 8, flame: 3 })
        );

        config.layout.base_wax_leds = 6;
        assert_eq!(
            config.validate(),
            Err(ConfigError::CandleTooTall { wax: 6, flame: 3 })
        );

        config.layout.base_wax_leds = 5;
        config.layout.flame_start_leds = 4;
        assert_eq!(
            config.validate(),
            Err(ConfigError::CandleTooTall { wax: 5, flame: 4 })
        );

        config.layout.base_wax_leds = 4;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_brightness_levels() {
        let mut config = DEFAULT_CONFIG;
        config.brightness.levels = &[];
        assert_eq!(config.validate(), Err(ConfigError::NoBrightnessLevels));

        let mut config = DEFAULT_CONFIG;
        config.brightness.initial_level = 5;
        assert_eq!(
            config.validate(),
            Err(ConfigError::BrightnessLevelOutOfRange {
                level: 5,
                levels: 5
            })
        );
    }

    #[test]
    fn test_gesture_conflict() {
        let mut config = DEFAULT_CONFIG;
        config.gestures.confirm = Direction::Up;
        assert_eq!(
            config.validate(),
            Err(ConfigError::GestureConflict(Direction::Up))
        );

        let mut config = DEFAULT_CONFIG;
        config.gestures.dimmer = Direction::Up;
        assert_eq!(
            config.validate(),
            Err(ConfigError::GestureConflict(Direction::Up))
        );
    }

    #[test]
    fn test_controller_rejects_invalid_config() {
        let mut config = DEFAULT_CONFIG;
        config.frame_duration = Duration::from_ticks(0);
        let result = MenorahController::new(&config, 1);
        assert!(matches!(result, Err(ConfigError::ZeroFrameDuration)));

        let error = Error::from(ConfigError::ZeroFrameDuration);
        assert_eq!(error, Error::InvalidConfiguration(ConfigError::ZeroFrameDuration));
        assert_eq!(
            error.to_string(),
            "invalid configuration: frame duration must be non-zero"
        );
    }
}
