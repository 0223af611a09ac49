mod tests {
    use std::collections::VecDeque;

    use embassy_time::{Duration, Instant};
    use myrtio_menorah::{
        ConfigError, DEFAULT_CONFIG, Error, FrameScheduler, Gesture, GestureSource,
        MenorahConfig, MenorahController, Phase, SensorUnavailable, StripId, StripPixels,
        StripSink,
    };

    #[derive(Default)]
    struct ScriptedSource {
        gestures: VecDeque<Gesture>,
        missing: bool,
    }

    impl GestureSource for ScriptedSource {
        fn probe(&mut self) -> Result<(), SensorUnavailable> {
            if self.missing {
                Err(SensorUnavailable)
            } else {
                Ok(())
            }
        }

        fn poll(&mut self) -> Result<Gesture, SensorUnavailable> {
            Ok(self.gestures.pop_front().unwrap_or_default())
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        writes: Vec<(StripId, StripPixels)>,
    }

    impl StripSink for RecordingSink {
        fn write(&mut self, strip: StripId, pixels: &StripPixels) {
            self.writes.push((strip, *pixels));
        }
    }

    fn scheduler(source: ScriptedSource) -> FrameScheduler<ScriptedSource, RecordingSink> {
        FrameScheduler::start(&DEFAULT_CONFIG, 1, source, RecordingSink::default()).unwrap()
    }

    #[test]
    fn test_writes_all_strips() {
        let mut scheduler = scheduler(ScriptedSource::default());
        scheduler.tick(Instant::from_millis(0));

        let strips: Vec<_> = scheduler.sink().writes.iter().map(|(id, _)| *id).collect();
        assert_eq!(strips.len(), 9);
        assert_eq!(strips[0], StripId::Shamash);
        for (n, strip) in (1u8..).zip(&strips[1..]) {
            assert_eq!(*strip, StripId::Candle(n));
        }
        assert_eq!(
            scheduler.sink().writes[0].1,
            *scheduler.controller().frame().shamash()
        );
    }

    #[test]
    fn test_frame_pacing() {
        let mut scheduler = scheduler(ScriptedSource::default());
        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.next_deadline, Instant::from_millis(20));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));

        let result = scheduler.tick(Instant::from_millis(25));
        assert_eq!(result.next_deadline, Instant::from_millis(40));
        assert_eq!(result.sleep_duration, Duration::from_millis(15));
    }

    #[test]
    fn test_small_lag_catches_up() {
        let mut scheduler = scheduler(ScriptedSource::default());
        scheduler.tick(Instant::from_millis(0));

        let result = scheduler.tick(Instant::from_millis(50));
        assert_eq!(result.next_deadline, Instant::from_millis(40));
        assert_eq!(result.sleep_duration, Duration::from_millis(0));
    }

    #[test]
    fn test_drift_correction_skips_backlog() {
        let mut scheduler = scheduler(ScriptedSource::default());
        scheduler.tick(Instant::from_millis(0));

        let result = scheduler.tick(Instant::from_millis(500));
        assert_eq!(result.next_deadline, Instant::from_millis(520));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));
    }

    #[test]
    fn test_gestures_reach_controller() {
        let source = ScriptedSource {
            gestures: VecDeque::from([Gesture::Right]),
            missing: false,
        };
        let mut scheduler = scheduler(source);
        scheduler.tick(Instant::from_millis(0));
        assert_eq!(scheduler.controller().phase(), Phase::Lighting);
        assert_eq!(scheduler.health(), Ok(()));
    }

    #[test]
    fn test_missing_sensor_reports_health() {
        let source = ScriptedSource {
            gestures: VecDeque::from([Gesture::Right]),
            missing: true,
        };
        let mut scheduler = scheduler(source);
        assert_eq!(scheduler.health(), Err(Error::SensorUnavailable));

        scheduler.tick(Instant::from_millis(0));
        assert_eq!(scheduler.controller().phase(), Phase::Selecting);
        assert_eq!(scheduler.sink().writes.len(), 9);
    }

    #[test]
    fn test_start_rejects_invalid_config() {
        let config = MenorahConfig {
            initial_night: 0,
            ..DEFAULT_CONFIG
        };
        let result = FrameScheduler::start(
            &config,
            1,
            ScriptedSource::default(),
            RecordingSink::default(),
        );
        assert!(matches!(
            result,
            Err(Error::InvalidConfiguration(ConfigError::NightOutOfRange(0)))
        ));
    }

    #[test]
    fn test_new_wraps_controller() {
        let controller = MenorahController::new(&DEFAULT_CONFIG, 2).unwrap();
        let mut scheduler =
            FrameScheduler::new(controller, ScriptedSource::default(), RecordingSink::default());
        scheduler.controller_mut().sensor_unavailable();
        assert_eq!(scheduler.health(), Err(Error::SensorUnavailable));
    }
}
