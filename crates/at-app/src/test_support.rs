//! Hand-written port fakes shared by the unit tests of this crate.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex as StdMutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use at_core::admin::{PendingHolding, PendingStartup};
use at_core::comments::CommentNode;
use at_core::portfolio::{DocumentKind, InvestorDetails, StartupDetails};
use at_core::ports::*;
use at_core::post::Post;
use at_core::session::AuthSession;
use at_core::setup::ProfileSetupState;
use at_core::verification::VerificationSnapshot;
use at_core::{AuthToken, CompanyId, HoldingId, ProfileUpdate, ReelId, Role, User, UserId};

pub(crate) fn user(id: &str, role: Role) -> User {
    User {
        id: UserId::new(id),
        email: Some(format!("{id}@example.com")),
        username: None,
        display_name: None,
        bio: None,
        avatar_url: None,
        roles: vec![role],
        profile_setup_complete: false,
        kyc_completed: false,
        portfolio_complete: false,
        verified: false,
        blocked: false,
    }
}

pub(crate) fn server_error(status: u16, message: &str) -> ApiError {
    ApiError::Server {
        status,
        message: message.to_string(),
    }
}

#[derive(Default)]
pub(crate) struct MemoryStore {
    values: StdMutex<HashMap<String, String>>,
    fail_writes: StdMutex<bool>,
}

impl MemoryStore {
    pub(crate) fn value(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    pub(crate) fn insert(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub(crate) fn fail_writes(&self) {
        *self.fail_writes.lock().unwrap() = true;
    }
}

#[async_trait]
impl KeyValueStorePort for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.value(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if *self.fail_writes.lock().unwrap() {
            return Err(StorageError::Io("disk full".into()));
        }
        self.insert(key, value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        if *self.fail_writes.lock().unwrap() {
            return Err(StorageError::Io("disk full".into()));
        }
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}

/// Profile endpoint fake that applies updates to an in-memory user.
pub(crate) struct FakeProfile {
    user: StdMutex<User>,
    updates: StdMutex<Vec<ProfileUpdate>>,
    fail_updates: StdMutex<Option<ApiError>>,
    fail_get: StdMutex<Option<ApiError>>,
}

impl FakeProfile {
    pub(crate) fn new(user: User) -> Self {
        Self {
            user: StdMutex::new(user),
            updates: StdMutex::new(Vec::new()),
            fail_updates: StdMutex::new(None),
            fail_get: StdMutex::new(None),
        }
    }

    pub(crate) fn fail_updates_with(&self, err: ApiError) {
        *self.fail_updates.lock().unwrap() = Some(err);
    }

    pub(crate) fn fail_get_with(&self, err: ApiError) {
        *self.fail_get.lock().unwrap() = Some(err);
    }

    pub(crate) fn updates(&self) -> Vec<ProfileUpdate> {
        self.updates.lock().unwrap().clone()
    }

    pub(crate) fn user(&self) -> User {
        self.user.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProfilePort for FakeProfile {
    async fn get_profile(&self) -> Result<User, ApiError> {
        if let Some(err) = self.fail_get.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self.user())
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        self.updates.lock().unwrap().push(update.clone());
        if let Some(err) = self.fail_updates.lock().unwrap().clone() {
            return Err(err);
        }
        let mut user = self.user.lock().unwrap();
        user.apply(update);
        Ok(user.clone())
    }
}

#[derive(Default)]
pub(crate) struct RecordingAlerts {
    alerts: StdMutex<Vec<(String, String)>>,
}

impl RecordingAlerts {
    pub(crate) fn messages(&self) -> Vec<String> {
        self.alerts
            .lock()
            .unwrap()
            .iter()
            .map(|(_, message)| message.clone())
            .collect()
    }
}

#[async_trait]
impl AlertPort for RecordingAlerts {
    async fn alert(&self, title: &str, message: &str) {
        self.alerts
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string()));
    }
}

#[derive(Default)]
pub(crate) struct RecordingVerificationEvents {
    snapshots: StdMutex<Vec<VerificationSnapshot>>,
    completed: AtomicUsize,
}

impl RecordingVerificationEvents {
    pub(crate) fn snapshots(&self) -> Vec<VerificationSnapshot> {
        self.snapshots.lock().unwrap().clone()
    }

    pub(crate) fn completed_count(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VerificationEventPort for RecordingVerificationEvents {
    async fn emit_verification_changed(&self, snapshot: VerificationSnapshot) {
        self.snapshots.lock().unwrap().push(snapshot);
    }

    async fn verification_completed(&self) {
        self.completed.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
pub(crate) struct RecordingSetupEvents {
    states: StdMutex<Vec<ProfileSetupState>>,
}

impl RecordingSetupEvents {
    pub(crate) fn states(&self) -> Vec<ProfileSetupState> {
        self.states.lock().unwrap().clone()
    }
}

#[async_trait]
impl SetupEventPort for RecordingSetupEvents {
    async fn emit_setup_state_changed(&self, state: ProfileSetupState) {
        self.states.lock().unwrap().push(state);
    }
}

/// Upload fake returning `https://cdn.test/<file name>`, optionally failing on one file.
#[derive(Default)]
pub(crate) struct FakeMedia {
    uploads: StdMutex<Vec<PathBuf>>,
    fail_on: StdMutex<Option<String>>,
}

impl FakeMedia {
    pub(crate) fn fail_on(&self, file_name: &str) {
        *self.fail_on.lock().unwrap() = Some(file_name.to_string());
    }

    pub(crate) fn uploads(&self) -> Vec<PathBuf> {
        self.uploads.lock().unwrap().clone()
    }

    fn upload(&self, path: &Path) -> Result<String, ApiError> {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        if self.fail_on.lock().unwrap().as_deref() == Some(name.as_str()) {
            return Err(server_error(413, "File too large"));
        }
        self.uploads.lock().unwrap().push(path.to_path_buf());
        Ok(format!("https://cdn.test/{name}"))
    }
}

#[async_trait]
impl MediaUploadPort for FakeMedia {
    async fn upload_avatar(&self, path: &Path) -> Result<String, ApiError> {
        self.upload(path)
    }

    async fn upload_document(&self, _kind: DocumentKind, path: &Path) -> Result<String, ApiError> {
        self.upload(path)
    }

    async fn upload_video(&self, path: &Path) -> Result<String, ApiError> {
        self.upload(path)
    }
}

#[derive(Default)]
pub(crate) struct FakeInvestorDetails {
    details: StdMutex<InvestorDetails>,
    saves: AtomicUsize,
    fail_saves: StdMutex<Option<ApiError>>,
}

impl FakeInvestorDetails {
    pub(crate) fn with(details: InvestorDetails) -> Self {
        Self {
            details: StdMutex::new(details),
            ..Self::default()
        }
    }

    pub(crate) fn details(&self) -> InvestorDetails {
        self.details.lock().unwrap().clone()
    }

    pub(crate) fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub(crate) fn fail_saves_with(&self, err: Option<ApiError>) {
        *self.fail_saves.lock().unwrap() = err;
    }
}

#[async_trait]
impl InvestorDetailsPort for FakeInvestorDetails {
    async fn get_investor_details(&self) -> Result<InvestorDetails, ApiError> {
        Ok(self.details())
    }

    async fn save_investor_details(&self, details: &InvestorDetails) -> Result<(), ApiError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.fail_saves.lock().unwrap().clone() {
            return Err(err);
        }
        *self.details.lock().unwrap() = details.clone();
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct FakeStartupDetails {
    details: StdMutex<StartupDetails>,
    saves: AtomicUsize,
}

impl FakeStartupDetails {
    pub(crate) fn replace(&self, details: StartupDetails) {
        *self.details.lock().unwrap() = details;
    }

    pub(crate) fn details(&self) -> StartupDetails {
        self.details.lock().unwrap().clone()
    }

    pub(crate) fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StartupDetailsPort for FakeStartupDetails {
    async fn get_startup_details(&self) -> Result<StartupDetails, ApiError> {
        Ok(self.details())
    }

    async fn save_startup_details(&self, details: &StartupDetails) -> Result<(), ApiError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.details.lock().unwrap() = details.clone();
        Ok(())
    }
}

/// Picker fake that answers each call from a queue.
#[derive(Default)]
pub(crate) struct ScriptedPicker {
    answers: StdMutex<Vec<Result<PathBuf, PickerError>>>,
}

impl ScriptedPicker {
    pub(crate) fn push(&self, answer: Result<PathBuf, PickerError>) {
        self.answers.lock().unwrap().insert(0, answer);
    }
}

#[async_trait]
impl MediaPickerPort for ScriptedPicker {
    async fn pick(&self, _kind: MediaKind) -> Result<PathBuf, PickerError> {
        self.answers
            .lock()
            .unwrap()
            .pop()
            .unwrap_or(Err(PickerError::Cancelled))
    }
}

pub(crate) struct FixedClock(pub NaiveDate);

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
            .and_hms_opt(12, 0, 0)
            .unwrap()
            .and_utc()
            .timestamp_millis()
    }
}

/// Auth endpoint fake: `good-password` logs in, everything else is rejected.
#[derive(Default)]
pub(crate) struct FakeAuth {
    reset_requests: StdMutex<Vec<String>>,
}

impl FakeAuth {
    pub(crate) fn reset_requests(&self) -> Vec<String> {
        self.reset_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuthPort for FakeAuth {
    async fn login(&self, credentials: &Credentials) -> Result<AuthSession, ApiError> {
        if credentials.password.expose() != "good-password" {
            return Err(server_error(401, "Invalid credentials"));
        }
        Ok(AuthSession {
            token: AuthToken::new("token-1"),
            user: user("u1", Role::Personal),
        })
    }

    async fn register(&self, registration: &Registration) -> Result<AuthSession, ApiError> {
        let mut user = user("u2", registration.role);
        user.email = Some(registration.email.clone());
        user.username = Some(registration.username.clone());
        Ok(AuthSession {
            token: AuthToken::new("token-2"),
            user,
        })
    }

    async fn forgot_password(&self, email: &str) -> Result<(), ApiError> {
        self.reset_requests.lock().unwrap().push(email.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct FakeAdmin {
    calls: StdMutex<Vec<String>>,
}

impl FakeAdmin {
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl AdminPort for FakeAdmin {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        Ok(vec![user("u1", Role::Startup), user("u2", Role::Investor)])
    }

    async fn set_user_blocked(&self, user_id: &UserId, blocked: bool) -> Result<(), ApiError> {
        self.record(format!("block {user_id} {blocked}"));
        Ok(())
    }

    async fn pending_startups(&self) -> Result<Vec<PendingStartup>, ApiError> {
        Ok(Vec::new())
    }

    async fn approve_startup(&self, id: &CompanyId) -> Result<(), ApiError> {
        self.record(format!("approve startup {id}"));
        Ok(())
    }

    async fn reject_startup(&self, id: &CompanyId, reason: &str) -> Result<(), ApiError> {
        self.record(format!("reject startup {id}: {reason}"));
        Ok(())
    }

    async fn pending_holdings(&self) -> Result<Vec<PendingHolding>, ApiError> {
        Ok(Vec::new())
    }

    async fn approve_holding(&self, id: &HoldingId) -> Result<(), ApiError> {
        self.record(format!("approve holding {id}"));
        Ok(())
    }

    async fn reject_holding(&self, id: &HoldingId, reason: &str) -> Result<(), ApiError> {
        self.record(format!("reject holding {id}: {reason}"));
        Ok(())
    }
}

pub(crate) struct FakePosts(pub Vec<Post>);

#[async_trait]
impl PostsPort for FakePosts {
    async fn my_posts(&self) -> Result<Vec<Post>, ApiError> {
        Ok(self.0.clone())
    }
}

pub(crate) struct FakeReels(pub Vec<CommentNode>);

#[async_trait]
impl ReelsPort for FakeReels {
    async fn reel_comments(&self, _reel_id: &ReelId) -> Result<Vec<CommentNode>, ApiError> {
        Ok(self.0.clone())
    }
}
