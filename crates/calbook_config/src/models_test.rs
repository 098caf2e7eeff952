#[cfg(test)]
mod tests {
    use crate::models::{AppConfig, ServerSettings, TimeWindow, WeeklyAvailability};
    use chrono::{NaiveTime, Weekday};
    use chrono_tz::Tz;

    #[test]
    fn test_default_document_shape() {
        // The built-in defaults must serialize to the exact document the
        // frontend and the owner's editor expect: camelCase keys, "HH:MM"
        // windows, null for closed days.
        let value = serde_json::to_value(AppConfig::default()).expect("serialize failed");

        assert_eq!(value["ownerName"], "Your Name");
        assert_eq!(value["ownerEmail"], "you@example.com");
        assert_eq!(value["calendarId"], "primary");
        assert_eq!(value["meetingDuration"], 30);
        assert_eq!(value["bufferTime"], 15);
        assert_eq!(value["timezone"], "Europe/Madrid");
        assert_eq!(value["brandColor"], "#4F46E5");
        assert_eq!(value["logoUrl"], serde_json::Value::Null);

        assert_eq!(value["availability"]["monday"]["start"], "09:00");
        assert_eq!(value["availability"]["friday"]["end"], "17:00");
        assert_eq!(value["availability"]["saturday"], serde_json::Value::Null);
        assert_eq!(value["availability"]["sunday"], serde_json::Value::Null);

        assert_eq!(value["meetingTypes"][0]["id"], "intro");
        assert_eq!(value["meetingTypes"][0]["name"], "Intro Call");
        assert_eq!(value["meetingTypes"][0]["duration"], 30);
        assert_eq!(value["meetingTypes"][1]["id"], "deep-dive");
        assert_eq!(value["meetingTypes"][1]["duration"], 60);

        assert_eq!(value["smtp"]["host"], "smtp.gmail.com");
        assert_eq!(value["smtp"]["port"], 587);
        assert_eq!(value["smtp"]["user"], "");
    }

    #[test]
    fn test_window_times_serialize_as_hh_mm() {
        let window = TimeWindow {
            start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
        };
        let value = serde_json::to_value(&window).expect("serialize failed");
        assert_eq!(value["start"], "09:00");
        assert_eq!(value["end"], "17:30");

        let parsed: TimeWindow = serde_json::from_value(value).expect("deserialize failed");
        assert_eq!(parsed, window);
    }

    #[test]
    fn test_config_round_trips() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).expect("serialize failed");
        let parsed: AppConfig = serde_json::from_str(&json).expect("deserialize failed");
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_unknown_timezone_falls_back() {
        let config = AppConfig {
            timezone: "Not/AZone".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.parsed_timezone(), Tz::Europe__Madrid);

        let config = AppConfig {
            timezone: "America/New_York".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.parsed_timezone(), Tz::America__New_York);
    }

    #[test]
    fn test_window_for_maps_weekdays() {
        let config = AppConfig::default();
        for day in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
        ] {
            assert!(
                config.availability.window_for(day).is_some(),
                "{:?} should be open by default",
                day
            );
        }
        assert!(config.availability.window_for(Weekday::Sat).is_none());
        assert!(config.availability.window_for(Weekday::Sun).is_none());
    }

    #[test]
    fn test_empty_availability_is_all_closed() {
        // The derived default is the all-closed week; the bookable workweek
        // lives only in AppConfig::default()
        let empty = WeeklyAvailability::default();
        for day in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ] {
            assert!(empty.window_for(day).is_none());
        }
    }

    #[test]
    fn test_settings_paths_join_data_dir() {
        let settings = ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 3457,
            data_dir: "/var/lib/calbook".to_string(),
            public_dir: "public".to_string(),
        };
        assert_eq!(
            settings.config_path(),
            std::path::Path::new("/var/lib/calbook/config.json")
        );
        assert_eq!(
            settings.bookings_path(),
            std::path::Path::new("/var/lib/calbook/bookings.json")
        );
    }
}
