// --- File: crates/calbook_config/src/models.rs ---

use std::path::{Path, PathBuf};

use chrono::NaiveTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Zone used when the configured timezone string is not a known IANA name.
pub const DEFAULT_TIMEZONE: Tz = Tz::Europe__Madrid;

// --- Runtime Server Settings ---
// Process-level settings (bind address, document locations). These never live
// in the owner-editable config.json; they come from the environment or an
// optional settings file via `load_settings`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub data_dir: String,
    pub public_dir: String,
}

impl ServerSettings {
    pub fn config_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join("config.json")
    }

    pub fn bookings_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join("bookings.json")
    }
}

// --- Owner Scheduling Configuration ---
// The owner-editable document persisted as config.json. Every top-level field
// has a built-in default; a partial document on disk overrides defaults field
// by field. Container-level `serde(default)` is exactly that shallow merge:
// a stored `availability` object replaces the whole default template.

/// One open interval of a weekday, "HH:MM" strings on disk.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    #[serde(with = "hhmm")]
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "09:00"))]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "17:00"))]
    pub end: NaiveTime,
}

/// Weekly availability template. A `null` or absent day is closed.
///
/// The derived `Default` is the all-closed week; the bookable workweek
/// default belongs to `AppConfig::default()`.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct WeeklyAvailability {
    pub monday: Option<TimeWindow>,
    pub tuesday: Option<TimeWindow>,
    pub wednesday: Option<TimeWindow>,
    pub thursday: Option<TimeWindow>,
    pub friday: Option<TimeWindow>,
    pub saturday: Option<TimeWindow>,
    pub sunday: Option<TimeWindow>,
}

impl WeeklyAvailability {
    /// Window for a weekday, `None` when the day is closed.
    pub fn window_for(&self, weekday: chrono::Weekday) -> Option<&TimeWindow> {
        use chrono::Weekday::*;
        match weekday {
            Mon => self.monday.as_ref(),
            Tue => self.tuesday.as_ref(),
            Wed => self.wednesday.as_ref(),
            Thu => self.thursday.as_ref(),
            Fri => self.friday.as_ref(),
            Sat => self.saturday.as_ref(),
            Sun => self.sunday.as_ref(),
        }
    }
}

/// A bookable meeting kind offered to visitors.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct MeetingType {
    #[cfg_attr(feature = "openapi", schema(example = "intro"))]
    pub id: String,
    #[cfg_attr(feature = "openapi", schema(example = "Intro Call"))]
    pub name: String,
    /// Minutes.
    #[cfg_attr(feature = "openapi", schema(example = 30))]
    pub duration: i64,
    pub description: String,
}

/// Outbound mail settings. Carried in the document but not acted on; no mail
/// is sent by this service.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: "smtp.gmail.com".to_string(),
            port: 587,
            user: String::new(),
            pass: String::new(),
        }
    }
}

// --- Unified Owner Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub owner_name: String,
    pub owner_email: String,
    // Inert: kept for owners migrating from calendar-synced setups.
    pub calendar_id: String,
    /// Default slot length in minutes.
    pub meeting_duration: i64,
    /// Gap enforced between consecutive candidate slots, in minutes.
    pub buffer_time: i64,
    pub availability: WeeklyAvailability,
    /// IANA zone name the availability template is interpreted in.
    pub timezone: String,
    pub brand_color: String,
    pub logo_url: Option<String>,
    pub meeting_types: Vec<MeetingType>,
    // Inert: no mail is sent, see SmtpConfig.
    pub smtp: SmtpConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let weekday = TimeWindow {
            start: hm(9, 0),
            end: hm(17, 0),
        };
        Self {
            owner_name: "Your Name".to_string(),
            owner_email: "you@example.com".to_string(),
            calendar_id: "primary".to_string(),
            meeting_duration: 30,
            buffer_time: 15,
            availability: WeeklyAvailability {
                monday: Some(weekday.clone()),
                tuesday: Some(weekday.clone()),
                wednesday: Some(weekday.clone()),
                thursday: Some(weekday.clone()),
                friday: Some(weekday),
                saturday: None,
                sunday: None,
            },
            timezone: "Europe/Madrid".to_string(),
            brand_color: "#4F46E5".to_string(),
            logo_url: None,
            meeting_types: vec![
                MeetingType {
                    id: "intro".to_string(),
                    name: "Intro Call".to_string(),
                    duration: 30,
                    description: "Quick intro call".to_string(),
                },
                MeetingType {
                    id: "deep-dive".to_string(),
                    name: "Deep Dive".to_string(),
                    duration: 60,
                    description: "In-depth session".to_string(),
                },
            ],
            smtp: SmtpConfig::default(),
        }
    }
}

impl AppConfig {
    /// The configured zone, falling back to [`DEFAULT_TIMEZONE`] when the
    /// string is not a known IANA name. The raw string is still what goes
    /// over the wire.
    pub fn parsed_timezone(&self) -> Tz {
        self.timezone.parse().unwrap_or(DEFAULT_TIMEZONE)
    }
}

// Constant clock times; only used with in-range values.
fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

/// Serde adapter for the "HH:MM" window format.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
