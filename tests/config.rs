#[cfg(test)]
mod tests {
    use jornada::libs::category::CategoryLimits;
    use jornada::libs::config::Config;
    use jornada::libs::ruler::HourRange;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_defaults(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert_eq!(config.limits, CategoryLimits { break_minutes: 15, lunch_minutes: 60 });
        assert_eq!(config.anchor_hour, 0);
        assert_eq!(config.ruler, HourRange::new(12, 32));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_without_file_yields_defaults(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_round_trip(_ctx: &mut ConfigTestContext) {
        let config = Config {
            limits: CategoryLimits { break_minutes: 10, lunch_minutes: 45 },
            anchor_hour: 12,
            ruler: HourRange::new(8, 24),
        };
        config.save().unwrap();

        let read_back = Config::read().unwrap();
        assert_eq!(read_back, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_restores_defaults(_ctx: &mut ConfigTestContext) {
        let config = Config {
            anchor_hour: 12,
            ..Config::default()
        };
        config.save().unwrap();
        Config::delete().unwrap();

        assert_eq!(Config::read().unwrap(), Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_anchor_policy_from_config(_ctx: &mut ConfigTestContext) {
        let mut config = Config::default();
        assert_eq!(config.anchor_policy().anchor_minute, 0);
        config.anchor_hour = 12;
        assert_eq!(config.anchor_policy().anchor_minute, 720);
    }

    // A noon anchor keeps early-morning times past a late-evening shift
    // start; the default midnight anchor leaves daytime times untouched.
    #[test_context(ConfigTestContext)]
    #[test]
    fn test_anchor_policy_for_overnight_breaks(_ctx: &mut ConfigTestContext) {
        use jornada::libs::clock::{parse_clock_input, Meridiem};

        let daytime = Config::default().anchor_policy();
        assert_eq!(parse_clock_input(9, 0, Meridiem::Am, daytime), Some(540));

        let overnight = Config {
            anchor_hour: 12,
            ..Config::default()
        }
        .anchor_policy();
        let shift_start = parse_clock_input(10, 0, Meridiem::Pm, overnight).unwrap();
        let break_start = parse_clock_input(1, 0, Meridiem::Am, overnight).unwrap();
        assert!(break_start > shift_start);
        assert_eq!(break_start, 60 + 1440);
    }
}
