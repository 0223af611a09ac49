mod tests {
    use myrtio_menorah::color::{rgbw, scale_color};
    use myrtio_menorah::config::BrightnessConfig;
    use myrtio_menorah::{BrightnessController, DEFAULT_CONFIG, Frame, StripId};

    #[test]
    fn test_initial_level() {
        let brightness = BrightnessController::new(&DEFAULT_CONFIG.brightness);
        assert_eq!(brightness.level(), 2);
        assert_eq!(brightness.level_count(), 5);
        assert_eq!(brightness.scale(), 51);
    }

    #[test]
    fn test_clamped_at_both_ends() {
        let mut brightness = BrightnessController::new(&DEFAULT_CONFIG.brightness);
        assert!(brightness.increase());
        assert!(brightness.increase());
        assert!(!brightness.increase());
        assert_eq!(brightness.level(), 4);
        assert_eq!(brightness.scale(), 252);

        for _ in 0..4 {
            assert!(brightness.decrease());
        }
        assert!(!brightness.decrease());
        assert_eq!(brightness.level(), 0);
        assert_eq!(brightness.scale(), 3);
    }

    #[test]
    fn test_initial_level_clamped() {
        static LEVELS: [u8; 2] = [10, 20];
        let brightness = BrightnessController::new(&BrightnessConfig {
            levels: &LEVELS,
            initial_level: 9,
        });
        assert_eq!(brightness.level(), 1);
    }

    #[test]
    fn test_apply_scales_frame() {
        let color = rgbw(200, 100, 50, 250);
        let mut frame = Frame::new();
        frame.shamash_mut()[0] = color;
        frame.strip_mut(StripId::Candle(8)).unwrap()[7] = color;

        let brightness = BrightnessController::new(&DEFAULT_CONFIG.brightness);
        brightness.apply(&mut frame);
        assert_eq!(frame.shamash()[0], scale_color(color, 51));
        assert_eq!(frame.candle(8).unwrap()[7], scale_color(color, 51));
        assert_eq!(frame.candle(1).unwrap()[0], rgbw(0, 0, 0, 0));
    }
}
