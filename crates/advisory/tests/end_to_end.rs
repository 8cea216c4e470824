use advisory::{hand_off, AdvisoryError, AdvisoryFailure, Locale, NavigationSession, SessionConfig, SpeechSink};
use frame_aggregator::{RawDetection, SeverityTier};
use hazard::HazardCategory;
use spatial::{BoundingBox, Corridor, DistanceBand, HorizontalZone, Urgency};
use std::sync::Mutex;
use std::time::{Duration, Instant};

fn car() -> RawDetection {
    RawDetection::new("car", 0.9, BoundingBox::new(0.4, 0.6, 0.3, 0.3))
}

fn pole() -> RawDetection {
    RawDetection::new("pole", 0.6, BoundingBox::new(0.45, 0.3, 0.05, 0.4))
}

#[test]
fn test_car_ahead_produces_critical_advisory() {
    let session = NavigationSession::new(SessionConfig::default()).unwrap();
    let outcome = session.process_frame(vec![car()], Instant::now()).unwrap();

    let entry = &outcome.snapshot.entries[0];
    assert_eq!(entry.position.horizontal_zone, HorizontalZone::Ahead);
    assert!(matches!(
        entry.position.distance_band,
        DistanceBand::VeryClose | DistanceBand::Close
    ));
    assert_eq!(entry.category, HazardCategory::MovingVehicle);
    assert_eq!(entry.priority, 1);
    assert!(entry.position.urgency >= Urgency::High);
    assert_eq!(entry.tier, SeverityTier::Critical);

    // Box area 0.09 stays under the 0.15 center threshold
    assert!(!outcome.walkability.corridor(Corridor::Center).blocked);
    assert_eq!(outcome.walkability.corridor(Corridor::Left).clearance_m, 10.0);

    let advisory = outcome.advisory.expect("advisory issued");
    let critical = advisory.prompt.find("CRITICAL").expect("critical section");
    assert!(advisory.prompt[critical..].contains("car"));
}

#[test]
fn test_empty_to_pole_transition_inside_cooldown() {
    let session = NavigationSession::new(SessionConfig::default()).unwrap();
    let t0 = Instant::now();

    let first = session.process_frame(Vec::new(), t0).unwrap();
    assert_eq!(first.snapshot.signature, "");
    assert!(first.advisory.is_some());

    let second = session
        .process_frame(vec![pole()], t0 + Duration::from_secs(3))
        .unwrap();
    assert_eq!(second.snapshot.signature, "pole");
    assert!(second.advisory.is_some());

    // Objects disappearing is also a change
    let third = session
        .process_frame(Vec::new(), t0 + Duration::from_secs(4))
        .unwrap();
    let clear = third.advisory.expect("clear-path advisory");
    assert!(clear.prompt.contains("NO OBSTACLES DETECTED"));
}

#[test]
fn test_scene_cadence_over_a_walk() {
    let session = NavigationSession::new(SessionConfig::default()).unwrap();
    let t0 = Instant::now();
    let at = |s: u64| t0 + Duration::from_secs(s);

    let issued: Vec<bool> = [
        (vec![car()], at(0)),
        (vec![car()], at(5)),
        (vec![car(), pole()], at(6)),
        (vec![pole(), car()], at(10)),
        (vec![pole(), car()], at(36)),
    ]
    .into_iter()
    .map(|(frame, now)| session.process_frame(frame, now).unwrap().advisory.is_some())
    .collect();

    assert_eq!(issued, vec![true, false, true, false, true]);
}

#[test]
fn test_fixed_interval_session() {
    let session = NavigationSession::new(SessionConfig::fixed_interval(60)).unwrap();
    let t0 = Instant::now();

    assert!(session.process_frame(vec![car()], t0).unwrap().advisory.is_some());
    let changed = session
        .process_frame(vec![pole()], t0 + Duration::from_secs(10))
        .unwrap();
    assert!(changed.advisory.is_none());
    let later = session
        .process_frame(vec![pole()], t0 + Duration::from_secs(60))
        .unwrap();
    assert!(later.advisory.is_some());
}

#[test]
fn test_arabic_session_prompt() {
    let config = SessionConfig {
        locale: Locale::Ar,
        ..Default::default()
    };
    let session = NavigationSession::new(config).unwrap();
    let advisory = session
        .process_frame(vec![car()], Instant::now())
        .unwrap()
        .advisory
        .unwrap();

    assert_eq!(advisory.locale, Locale::Ar);
    assert!(advisory.prompt.contains("مخاطر حرجة"));
    assert!(advisory.prompt.contains("car"));
}

#[test]
fn test_advisory_request_serializes() {
    let session = NavigationSession::new(SessionConfig::default()).unwrap();
    let advisory = session
        .process_frame(vec![car()], Instant::now())
        .unwrap()
        .advisory
        .unwrap();

    let json = serde_json::to_value(&advisory).unwrap();
    assert_eq!(json["locale"], "en");
    assert_eq!(json["signature"], "car");
    assert_eq!(json["sequence"], advisory.sequence);
}

struct Collect(Mutex<Vec<String>>);

impl SpeechSink for Collect {
    fn speak(&self, text: &str, _locale: Locale) -> Result<(), AdvisoryError> {
        self.0.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[test]
fn test_failed_request_still_speaks() {
    let sink = Collect(Mutex::new(Vec::new()));
    hand_off(Ok("Path is clear. Continue straight ahead.".into()), &sink, Locale::En).unwrap();
    hand_off(Err(AdvisoryFailure::HttpStatus(500)), &sink, Locale::En).unwrap();

    let spoken = sink.0.lock().unwrap();
    assert_eq!(spoken[0], "Path is clear. Continue straight ahead.");
    assert_eq!(spoken[1], AdvisoryFailure::HttpStatus(500).fallback_phrase(Locale::En));
}
