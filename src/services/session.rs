//! Per-visitor planner state, keyed by the `planner_session` cookie.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::models::destination::{Destination, SelectedArea};
use crate::models::preferences::{Recommendations, TravelPreferences};
use crate::models::upload::UploadRecord;
use crate::services::drill_down::DrillDown;
use crate::services::validation::ValidationError;

pub const SESSION_COOKIE: &str = "planner_session";
pub const STEP_COUNT: u8 = 3;

/// Values pre-filled on the booking step.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct BookingDefaults {
    pub destination: String,
    pub passengers: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerSession {
    step: u8,
    pub preferences: Option<TravelPreferences>,
    pub recommendations: Option<Recommendations>,
    pub drill_down: DrillDown,
    pub selected_destination: Option<SelectedArea>,
    pub uploaded_photo_url: Option<String>,
    pub last_upload: Option<UploadRecord>,
}

impl Default for PlannerSession {
    fn default() -> Self {
        Self {
            step: 1,
            preferences: None,
            recommendations: None,
            drill_down: DrillDown::default(),
            selected_destination: None,
            uploaded_photo_url: None,
            last_upload: None,
        }
    }
}

impl PlannerSession {
    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn progress(&self) -> f64 {
        f64::from(self.step) / f64::from(STEP_COUNT) * 100.0
    }

    /// Moves to `step` if its prerequisites are met.
    pub fn go_to_step(&mut self, step: u8) -> Result<(), ValidationError> {
        match step {
            1 => {}
            2 if self.recommendations.is_none() => {
                return Err(ValidationError::RecommendationsRequired)
            }
            2 => {}
            3 if self.selected_destination.is_none() => {
                return Err(ValidationError::DestinationRequired)
            }
            3 => {}
            other => return Err(ValidationError::UnknownStep(other)),
        }
        self.step = step;
        Ok(())
    }

    pub fn store_recommendations(
        &mut self,
        preferences: TravelPreferences,
        recommendations: Recommendations,
    ) {
        self.preferences = Some(preferences);
        self.recommendations = Some(recommendations);
    }

    pub fn recommended(&self, destination_id: &str) -> Option<&Destination> {
        self.recommendations
            .as_ref()?
            .destinations
            .iter()
            .find(|d| d.id == destination_id)
    }

    /// Selects one of the recommended destinations.
    pub fn select_recommended(&mut self, destination_id: &str) -> Result<&SelectedArea, ValidationError> {
        let destination = self
            .recommended(destination_id)
            .ok_or(ValidationError::DestinationRequired)?;
        let selected = SelectedArea {
            id: destination.id.clone(),
            name: destination.name.clone(),
            city: None,
            country: destination.country.clone(),
            continent: destination.continent.clone(),
        };
        Ok(self.selected_destination.insert(selected))
    }

    pub fn booking_defaults(&self) -> Option<BookingDefaults> {
        let destination = self.selected_destination.as_ref()?;
        Some(BookingDefaults {
            destination: destination.name.clone(),
            passengers: self.preferences.as_ref().and_then(|p| p.party_size()),
        })
    }

    pub fn record_upload(&mut self, photo_url: &str, file_name: &str, now: DateTime<Utc>) {
        self.uploaded_photo_url = Some(photo_url.to_string());
        self.last_upload = Some(UploadRecord {
            photo_url: photo_url.to_string(),
            timestamp: now,
            file_name: file_name.to_string(),
        });
    }

    pub fn recent_upload(&self, now: DateTime<Utc>) -> Option<&UploadRecord> {
        self.last_upload.as_ref().filter(|record| record.is_recent(now))
    }

    pub fn clear_upload(&mut self) {
        self.uploaded_photo_url = None;
        self.last_upload = None;
    }

    pub fn require_photo(&self) -> Result<&str, ValidationError> {
        self.uploaded_photo_url
            .as_deref()
            .ok_or(ValidationError::PhotoRequired)
    }
}

pub type SessionHandle = Arc<Mutex<PlannerSession>>;

/// Sessions idle for longer than this are dropped. Matches the window in
/// which a recent upload is offered again.
pub const SESSION_TTL_HOURS: i64 = 24;

struct SessionEntry {
    handle: SessionHandle,
    last_seen: DateTime<Utc>,
}

pub struct SessionStore {
    sessions: RwLock<HashMap<String, SessionEntry>>,
    ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_ttl(Duration::hours(SESSION_TTL_HOURS))
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Looks up the session for a cookie value without creating one.
    pub fn find(&self, id: Option<&str>) -> Option<SessionHandle> {
        self.find_at(id?, Utc::now())
    }

    fn find_at(&self, id: &str, now: DateTime<Utc>) -> Option<SessionHandle> {
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let expired = now - sessions.get(id)?.last_seen > self.ttl;
        if expired {
            sessions.remove(id);
            return None;
        }
        let entry = sessions.get_mut(id)?;
        entry.last_seen = now;
        Some(Arc::clone(&entry.handle))
    }

    /// Looks up the session for a cookie value, creating a fresh one when the
    /// cookie is missing, unknown or expired. The flag is true for new sessions.
    pub fn get_or_create(&self, id: Option<&str>) -> (String, SessionHandle, bool) {
        self.get_or_create_at(id, Utc::now())
    }

    /// As [`SessionStore::get_or_create`], with an explicit clock. Expired
    /// sessions are pruned whenever a new one is inserted.
    pub fn get_or_create_at(
        &self,
        id: Option<&str>,
        now: DateTime<Utc>,
    ) -> (String, SessionHandle, bool) {
        if let Some(id) = id {
            if let Some(handle) = self.find_at(id, now) {
                return (id.to_string(), handle, false);
            }
        }

        let id = Uuid::new_v4().to_string();
        let handle = Arc::new(Mutex::new(PlannerSession::default()));

        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let before = sessions.len();
        let ttl = self.ttl;
        sessions.retain(|_, entry| now - entry.last_seen <= ttl);
        let pruned = before - sessions.len();
        if pruned > 0 {
            log::info!("Pruned {} idle planner sessions", pruned);
        }
        sessions.insert(
            id.clone(),
            SessionEntry {
                handle: Arc::clone(&handle),
                last_seen: now,
            },
        );
        log::debug!("Created planner session {}", id);
        (id, handle, true)
    }

    pub fn remove(&self, id: &str) -> bool {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
            .is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preferences(group_size: &str) -> TravelPreferences {
        TravelPreferences {
            age_group: "26-35".to_string(),
            group_size: group_size.to_string(),
            trip_duration: "7".to_string(),
            interests: vec!["culture".to_string()],
            ..Default::default()
        }
    }

    fn recommendations() -> Recommendations {
        Recommendations {
            destinations: crate::services::fallback::mock_destinations(),
            itinerary: Vec::new(),
        }
    }

    #[test]
    fn test_step_guards() {
        let mut session = PlannerSession::default();
        assert_eq!(session.go_to_step(2), Err(ValidationError::RecommendationsRequired));
        assert_eq!(session.go_to_step(3), Err(ValidationError::DestinationRequired));
        assert_eq!(session.go_to_step(4), Err(ValidationError::UnknownStep(4)));
        assert_eq!(session.step(), 1);

        session.store_recommendations(preferences("family"), recommendations());
        session.go_to_step(2).unwrap();
        assert_eq!(session.step(), 2);

        session.select_recommended("paris").unwrap();
        session.go_to_step(3).unwrap();
        assert_eq!(session.progress(), 100.0);
    }

    #[test]
    fn test_booking_defaults_from_group_size() {
        let mut session = PlannerSession::default();
        assert!(session.booking_defaults().is_none());

        session.store_recommendations(preferences("family"), recommendations());
        session.select_recommended("tokyo").unwrap();
        let defaults = session.booking_defaults().unwrap();
        assert_eq!(defaults.destination, "Tokyo");
        assert_eq!(defaults.passengers, Some(4));

        session.preferences = Some(preferences("3"));
        assert_eq!(session.booking_defaults().unwrap().passengers, None);
    }

    #[test]
    fn test_unknown_recommendation_is_rejected() {
        let mut session = PlannerSession::default();
        session.store_recommendations(preferences("solo"), recommendations());
        assert!(session.select_recommended("atlantis").is_err());
        assert!(session.selected_destination.is_none());
    }

    #[test]
    fn test_upload_memory() {
        let now = Utc::now();
        let mut session = PlannerSession::default();
        assert_eq!(session.require_photo(), Err(ValidationError::PhotoRequired));

        session.record_upload("https://cdn.example.com/me.jpg", "me.jpg", now - Duration::hours(2));
        assert_eq!(session.require_photo().unwrap(), "https://cdn.example.com/me.jpg");
        assert!(session.recent_upload(now).is_some());
        assert!(session.recent_upload(now + Duration::days(1)).is_none());

        session.clear_upload();
        assert!(session.last_upload.is_none());
    }

    #[test]
    fn test_store_reuses_known_ids() {
        let store = SessionStore::new();
        let (id, _, created) = store.get_or_create(None);
        assert!(created);

        let (same, _, created) = store.get_or_create(Some(&id));
        assert_eq!(same, id);
        assert!(!created);

        let (other, _, created) = store.get_or_create(Some("forged"));
        assert_ne!(other, "forged");
        assert!(created);
        assert_eq!(store.len(), 2);

        assert!(store.remove(&id));
        assert_eq!(store.len(), 1);
    }

    #[actix_rt::test]
    async fn test_session_mutex_serializes_updates() {
        let store = SessionStore::new();
        let (id, handle, _) = store.get_or_create(None);

        let mut guard = handle.lock().await;
        let (_, again, _) = store.get_or_create(Some(&id));
        assert!(again.try_lock().is_err());
        guard.go_to_step(1).unwrap();
        drop(guard);
        assert!(again.try_lock().is_ok());
    }

    #[test]
    fn test_idle_sessions_are_pruned() {
        let store = SessionStore::new();
        let start = Utc::now();
        let (stale, _, _) = store.get_or_create_at(None, start);
        let (active, _, _) = store.get_or_create_at(None, start);

        let later = start + Duration::hours(SESSION_TTL_HOURS - 1);
        let (_, _, created) = store.get_or_create_at(Some(&active), later);
        assert!(!created);

        let next_day = start + Duration::hours(SESSION_TTL_HOURS + 1);
        let (_, _, created) = store.get_or_create_at(None, next_day);
        assert!(created);
        assert_eq!(store.len(), 2);

        let (replaced, _, created) = store.get_or_create_at(Some(&stale), next_day);
        assert!(created);
        assert_ne!(replaced, stale);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_find_never_creates() {
        let store = SessionStore::new();
        assert!(store.find(None).is_none());
        assert!(store.find(Some("unknown")).is_none());
        assert!(store.is_empty());

        let (id, _, _) = store.get_or_create(None);
        assert!(store.find(Some(&id)).is_some());
        assert_eq!(store.len(), 1);
    }
}
