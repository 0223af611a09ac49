mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_menorah::color::{BLACK, scale_color};
    use myrtio_menorah::{
        CandleStatus, DEFAULT_CONFIG, Gesture, MenorahConfig, MenorahController, Phase,
        SensorUnavailable,
    };

    const LEVEL_SCALE: u8 = 51;

    fn config() -> MenorahConfig {
        let mut config = DEFAULT_CONFIG;
        config.burn.base_duration = Duration::from_secs(10);
        config
    }

    fn test_mode_config() -> MenorahConfig {
        MenorahConfig {
            test_mode: true,
            ..config()
        }
    }

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    fn status(controller: &MenorahController, n: u8) -> Option<CandleStatus> {
        controller.candle(n).map(|candle| candle.status())
    }

    #[test]
    fn test_selecting_previews_night() {
        let mut controller = MenorahController::new(&config(), 1).unwrap();
        assert_eq!(controller.phase(), Phase::Selecting);

        let warm = scale_color(DEFAULT_CONFIG.colors.shamash, LEVEL_SCALE);
        let frame = controller.update(Ok(Gesture::Up), at(0));
        assert_eq!(frame.shamash()[..5], [warm; 5]);
        assert_eq!(frame.shamash()[5..], [BLACK; 3]);
        assert!(frame.strips().skip(1).all(|(_, pixels)| *pixels == [BLACK; 8]));
        assert_eq!(controller.night(), 5);
        assert_eq!(controller.brightness().level(), 2);
    }

    #[test]
    fn test_full_evening() {
        let mut controller = MenorahController::new(&config(), 42).unwrap();

        controller.update(Ok(Gesture::Up), at(0));
        controller.update(Ok(Gesture::Up), at(100));
        assert_eq!(controller.night(), 5);
        controller.update(Ok(Gesture::Down), at(600));
        assert_eq!(controller.night(), 4);

        controller.update(Ok(Gesture::Right), at(1_200));
        assert_eq!(controller.phase(), Phase::Lighting);
        for n in 5..=8 {
            assert_eq!(controller.candle(n).map(|c| c.is_placed()), Some(true));
        }
        for n in 1..=4 {
            assert_eq!(controller.candle(n).map(|c| c.is_placed()), Some(false));
        }
        let unlit_wax = scale_color(
            scale_color(DEFAULT_CONFIG.colors.wax, DEFAULT_CONFIG.colors.unlit_scale),
            LEVEL_SCALE,
        );
        assert_eq!(controller.frame().candle(5).unwrap()[..5], [unlit_wax; 5]);
        assert_eq!(controller.frame().candle(4), Some(&[BLACK; 8]));

        // Lighting interval runs from the confirmation
        controller.update(Ok(Gesture::Up), at(1_700));
        assert_eq!(status(&controller, 8), Some(CandleStatus::Unlit));

        controller.update(Ok(Gesture::Left), at(2_200));
        assert_eq!(status(&controller, 8), Some(CandleStatus::LitPending));

        // No gestures, no progress
        for ms in (2_300..12_300).step_by(100) {
            controller.update(Ok(Gesture::None), at(ms));
        }
        assert_eq!(controller.phase(), Phase::Lighting);
        assert_eq!(status(&controller, 7), Some(CandleStatus::Unlit));
        assert_eq!(
            controller.candle(8).map(|c| c.elapsed()),
            Some(Duration::from_ticks(0))
        );

        controller.update(Ok(Gesture::Up), at(13_000));
        controller.update(Ok(Gesture::Down), at(14_000));
        assert_eq!(controller.phase(), Phase::Lighting);
        // Up and Down light candles here, never change the brightness
        assert_eq!(controller.brightness().level(), 2);
        controller.update(Ok(Gesture::Right), at(15_000));
        assert_eq!(controller.phase(), Phase::Burning);
        assert_eq!(controller.brightness().level(), 2);
        for n in 5..=8 {
            assert_eq!(status(&controller, n), Some(CandleStatus::Burning));
            // The frame that lit the last candle does not count as burn time
            assert_eq!(
                controller.candle(n).map(|c| c.elapsed()),
                Some(Duration::from_ticks(0))
            );
        }
        for n in 1..=4 {
            assert_eq!(status(&controller, n), Some(CandleStatus::Unlit));
        }

        let mut now = 15_000;
        while controller.phase() != Phase::Idle && now < 40_000 {
            now += 100;
            controller.update(Ok(Gesture::None), at(now));
        }
        assert_eq!(controller.phase(), Phase::Idle);
        for n in 5..=8 {
            assert_eq!(status(&controller, n), Some(CandleStatus::BurnedOut));
        }

        let colors = DEFAULT_CONFIG.colors;
        let ember = scale_color(scale_color(colors.ember, colors.ember_scale), LEVEL_SCALE);
        let frame = controller.frame();
        let last = frame.candle(8).unwrap();
        assert_eq!(last[0], ember);
        assert_eq!(last[1..], [BLACK; 7]);
        assert_eq!(frame.candle(1), Some(&[BLACK; 8]));
        assert_eq!(frame.shamash(), &[scale_color(colors.shamash, LEVEL_SCALE); 8]);
    }

    #[test]
    fn test_idle_holds_frame() {
        let mut controller = MenorahController::new(&test_mode_config(), 3).unwrap();
        let mut now = 0;
        while controller.phase() != Phase::Idle && now < 30_000 {
            controller.update(Ok(Gesture::None), at(now));
            now += 100;
        }
        assert_eq!(controller.phase(), Phase::Idle);

        let frozen = controller.frame().clone();
        controller.update(Ok(Gesture::Up), at(now + 1_000));
        controller.update(Ok(Gesture::None), at(now + 5_000));
        assert_eq!(controller.frame(), &frozen);
        assert_eq!(controller.brightness().level(), 2);
    }

    #[test]
    fn test_mode_burns_all_candles() {
        let controller = MenorahController::new(&test_mode_config(), 7).unwrap();
        assert_eq!(controller.phase(), Phase::Burning);
        assert_eq!(controller.night(), 8);
        assert!(
            controller
                .candles()
                .iter()
                .all(|candle| candle.status() == CandleStatus::Burning)
        );

        let styles: Vec<_> = controller
            .candles()
            .iter()
            .map(|candle| candle.flicker().style())
            .collect();
        assert_eq!(styles.len(), 8);
        for (i, style) in styles.iter().enumerate() {
            assert!(!styles[i + 1..].contains(style), "{style:?} repeated");
        }

        let seeds: Vec<_> = controller.candles().iter().map(|c| c.flicker_seed()).collect();
        for (i, seed) in seeds.iter().enumerate() {
            assert!(!seeds[i + 1..].contains(seed));
        }
    }

    #[test]
    fn test_durations_reproducible_by_seed() {
        let durations = |seed| {
            let controller = MenorahController::new(&test_mode_config(), seed).unwrap();
            controller
                .candles()
                .iter()
                .map(|candle| candle.target_duration())
                .collect::<Vec<_>>()
        };

        let first = durations(42);
        assert_eq!(first, durations(42));
        assert_ne!(first, durations(43));
        assert!(first.iter().any(|duration| *duration != first[0]));
    }

    #[test]
    fn test_brightness_gestures_while_burning() {
        let mut controller = MenorahController::new(&test_mode_config(), 5).unwrap();
        controller.update(Ok(Gesture::Up), at(0));
        assert_eq!(controller.brightness().level(), 3);
        controller.update(Ok(Gesture::Up), at(600));
        controller.update(Ok(Gesture::Up), at(1_200));
        assert_eq!(controller.brightness().level(), 4);
        controller.update(Ok(Gesture::Down), at(1_800));
        assert_eq!(controller.brightness().level(), 3);

        let warm = scale_color(DEFAULT_CONFIG.colors.shamash, 128);
        assert_eq!(controller.frame().shamash(), &[warm; 8]);
    }

    #[test]
    fn test_sensor_loss_keeps_rendering() {
        let mut controller = MenorahController::new(&config(), 9).unwrap();
        controller.update(Err(SensorUnavailable), at(0));
        assert!(controller.is_input_stalled());

        controller.update(Ok(Gesture::Up), at(1_000));
        assert_eq!(controller.night(), 4);
        assert_eq!(controller.phase(), Phase::Selecting);

        let warm = scale_color(DEFAULT_CONFIG.colors.shamash, LEVEL_SCALE);
        assert_eq!(controller.frame().shamash()[..4], [warm; 4]);
    }
}
