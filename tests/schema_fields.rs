//! Field types used on deserialized structs
#![cfg(feature = "serde")]

use chrono::{TimeZone as _, Utc};
use grammarie::{
    Decimal1, FloatTimestampMs, FloatTimestampS, IntTimestampS, LowercaseStr, StrTimestampIso,
    TimeZone, TimeZoneString,
};
use serde::{Deserialize, Serialize};

fn release_date() -> FloatTimestampS {
    FloatTimestampS::new(Utc.with_ymd_and_hms(2022, 5, 3, 11, 15, 1).unwrap())
        .expect("default datetime converts")
}

fn default_locale() -> LowercaseStr {
    LowercaseStr::new("NB-NO").expect("default string converts")
}

#[derive(Debug, Deserialize)]
struct Release {
    #[serde(default = "release_date")]
    ts: FloatTimestampS,
    #[serde(default = "default_locale")]
    locale: LowercaseStr,
}

#[derive(Debug, Deserialize)]
struct Location {
    tz: TimeZone,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Event {
    name: LowercaseStr,
    at: StrTimestampIso,
    zone: TimeZoneString,
    score: Decimal1,
    epoch: IntTimestampS,
}

#[test]
fn default_datetime_is_converted() {
    let release: Release = serde_json::from_str("{}").unwrap();
    assert!((*release.ts - 1651576501.0).abs() < 1e-6);
    assert_eq!(release.locale.get(), "nb-no");
}

#[test]
fn explicit_value_overrides_default() {
    let release: Release = serde_json::from_str(r#"{"ts": 1651576501000, "locale": "EN"}"#).unwrap();
    assert!((*release.ts - 1651576501.0).abs() < 1e-6);
    assert_eq!(release.locale.get(), "en");
}

#[test]
fn timezone_object_field() {
    let oslo: Location = serde_json::from_str(r#"{"tz": "Europe/Oslo"}"#).unwrap();
    assert_eq!(*oslo.tz, chrono_tz::Europe::Oslo);
    let utc: Location = serde_json::from_str(r#"{"tz": "UTC"}"#).unwrap();
    assert_eq!(*utc.tz, chrono_tz::UTC);
    assert!(serde_json::from_str::<Location>(r#"{"tz": "foo"}"#).is_err());
}

#[test]
fn event_round_trip() {
    let json = r#"{
        "name": "Launch",
        "at": "2022-05-03T11:15:01Z",
        "zone": "Europe/Oslo",
        "score": "4.25",
        "epoch": 1651576501000
    }"#;
    let event: Event = serde_json::from_str(json).unwrap();
    assert_eq!(event.name.get(), "launch");
    assert_eq!(event.at.get(), "2022-05-03 11:15:01+00:00");
    assert_eq!(event.score.to_string(), "4.2");
    assert_eq!(*event.epoch, 1651576501);

    let out = serde_json::to_string(&event).unwrap();
    let again: Event = serde_json::from_str(&out).unwrap();
    assert_eq!(again, event);
}

#[test]
fn iso_field_rejects_numbers() {
    let json = r#"{"name": "x", "at": 1651576501, "zone": "UTC", "score": 1, "epoch": 0}"#;
    let err = serde_json::from_str::<Event>(json).unwrap_err();
    assert!(err.to_string().contains("expected str, got int"));
}

#[test]
fn float_millis_from_json() {
    let ms: FloatTimestampMs = serde_json::from_str(r#""2022-05-03 11:15:01Z""#).unwrap();
    assert!((*ms - 1651576501000.0).abs() < 1e-3);
}
