//! Admin console against an in-memory [`BackendStore`] double, exercising
//! the same action/event round trip the app performs.

use std::sync::Mutex;

use async_trait::async_trait;

use skore::backend::{
    BackendError, BackendStore, BusinessUser, RowQuery, SignUpRequest, UserPatch,
};
use skore::ui::admin::{AdminAction, AdminEvent, AdminPanel};

struct MemoryBackend {
    users: Mutex<Vec<BusinessUser>>,
    /// When set, every call fails with this HTTP status.
    fail_with: Option<u16>,
}

impl MemoryBackend {
    fn seeded() -> Self {
        Self {
            users: Mutex::new(vec![
                user(1, "Ana Silva", "ana@acme.test", "admin"),
                user(2, "Bo Lindqvist", "bo@acme.test", "member"),
                user(3, "Chen Wei", "chen@acme.test", "member"),
            ]),
            fail_with: None,
        }
    }

    fn failing(code: u16) -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            fail_with: Some(code),
        }
    }

    fn check(&self) -> Result<(), BackendError> {
        match self.fail_with {
            Some(code) => Err(BackendError::Status {
                code,
                body: "simulated failure".to_string(),
            }),
            None => Ok(()),
        }
    }
}

fn user(id: u64, name: &str, email: &str, role: &str) -> BusinessUser {
    BusinessUser {
        id,
        email: email.to_string(),
        full_name: name.to_string(),
        company: "Acme".to_string(),
        role: role.to_string(),
        active: true,
    }
}

#[async_trait]
impl BackendStore for MemoryBackend {
    fn is_configured(&self) -> bool {
        true
    }

    async fn list_users(&self, query: &RowQuery) -> Result<Vec<BusinessUser>, BackendError> {
        self.check()?;
        let needle = query.search.to_lowercase();
        let mut rows: Vec<BusinessUser> = self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| {
                needle.is_empty()
                    || u.full_name.to_lowercase().contains(&needle)
                    || u.email.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
        if query.order_by.as_deref() == Some("full_name") {
            rows.sort_by(|a, b| a.full_name.cmp(&b.full_name));
            if query.descending {
                rows.reverse();
            }
        }
        Ok(rows)
    }

    async fn create_user(&self, req: &SignUpRequest) -> Result<BusinessUser, BackendError> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let created = BusinessUser {
            id,
            email: req.email.clone(),
            full_name: req.full_name.clone(),
            company: req.company.clone(),
            role: req.role.clone(),
            active: true,
        };
        users.push(created.clone());
        Ok(created)
    }

    async fn update_user(&self, id: u64, patch: &UserPatch) -> Result<BusinessUser, BackendError> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        let existing = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(BackendError::Status {
                code: 404,
                body: "no such user".to_string(),
            })?;
        if let Some(name) = &patch.full_name {
            existing.full_name = name.clone();
        }
        if let Some(company) = &patch.company {
            existing.company = company.clone();
        }
        if let Some(role) = &patch.role {
            existing.role = role.clone();
        }
        if let Some(active) = patch.active {
            existing.active = active;
        }
        Ok(existing.clone())
    }

    async fn delete_user(&self, id: u64) -> Result<(), BackendError> {
        self.check()?;
        self.users.lock().unwrap().retain(|u| u.id != id);
        Ok(())
    }
}

/// Run one action against the store, mirroring the app's dispatch.
async fn dispatch(store: &MemoryBackend, action: AdminAction) -> AdminEvent {
    match action {
        AdminAction::List(query) => AdminEvent::Listed(store.list_users(&query).await),
        AdminAction::Create(req) => AdminEvent::Created(store.create_user(&req).await),
        AdminAction::Update(id, patch) => AdminEvent::Updated(store.update_user(id, &patch).await),
        AdminAction::Delete(id) => AdminEvent::Deleted(id, store.delete_user(id).await),
    }
}

#[tokio::test]
async fn test_refresh_lists_users_sorted_by_name() {
    let store = MemoryBackend::seeded();
    let mut panel = AdminPanel::new(store.is_configured());

    let action = panel.refresh().expect("configured panel should load");
    let event = dispatch(&store, action).await;
    panel.apply(event);

    assert_eq!(panel.users.len(), 3);
    assert_eq!(panel.users[0].full_name, "Ana Silva");
    assert_eq!(panel.state.selected(), Some(0));
    assert!(!panel.loading);
}

#[tokio::test]
async fn test_search_narrows_the_listing() {
    let store = MemoryBackend::seeded();
    let mut panel = AdminPanel::new(true);

    panel.search = "chen".to_string();
    let action = panel.refresh().expect("search refresh");
    panel.apply(dispatch(&store, action).await);

    assert_eq!(panel.users.len(), 1);
    assert_eq!(panel.users[0].email, "chen@acme.test");
}

#[tokio::test]
async fn test_signup_round_trip_adds_the_user_to_the_store() {
    let store = MemoryBackend::seeded();
    let mut panel = AdminPanel::new(true);

    let action = panel.refresh().expect("initial load");
    panel.apply(dispatch(&store, action).await);

    panel.begin_signup();
    for c in "Dana Osei".chars() {
        panel.signup_input_char(c);
    }
    panel.signup_cycle_focus();
    for c in "dana@acme.test".chars() {
        panel.signup_input_char(c);
    }
    panel.signup_cycle_focus();
    for c in "Acme".chars() {
        panel.signup_input_char(c);
    }
    let action = panel.commit_signup().expect("valid form");
    panel.apply(dispatch(&store, action).await);

    assert_eq!(panel.users.len(), 4);
    assert!(panel.success.as_deref().unwrap().contains("dana@acme.test"));
    let stored = store
        .list_users(&RowQuery::default())
        .await
        .expect("listing");
    assert_eq!(
        stored.iter().find(|u| u.id == 4).map(|u| u.role.as_str()),
        Some("member")
    );
}

#[tokio::test]
async fn test_deactivate_round_trip_persists_in_the_store() {
    let store = MemoryBackend::seeded();
    let mut panel = AdminPanel::new(true);

    let action = panel.refresh().expect("initial load");
    panel.apply(dispatch(&store, action).await);

    let action = panel.toggle_active().expect("selected user");
    panel.apply(dispatch(&store, action).await);

    assert!(!panel.users[0].active);
    let stored = store
        .list_users(&RowQuery::default())
        .await
        .expect("listing");
    assert_eq!(stored.iter().find(|u| u.id == 1).map(|u| u.active), Some(false));
}

#[tokio::test]
async fn test_role_edit_round_trip_persists_in_the_store() {
    let store = MemoryBackend::seeded();
    let mut panel = AdminPanel::new(true);

    let action = panel.refresh().expect("initial load");
    panel.apply(dispatch(&store, action).await);

    // Bo Lindqvist, member -> manager.
    panel.state.select(Some(1));
    panel.begin_role_edit();
    panel.cycle_role();
    let action = panel.commit_role_edit().expect("changed draft");
    panel.apply(dispatch(&store, action).await);

    assert_eq!(panel.users[1].role, "manager");
    let stored = store
        .list_users(&RowQuery::default())
        .await
        .expect("listing");
    assert_eq!(
        stored.iter().find(|u| u.id == 2).map(|u| u.role.as_str()),
        Some("manager")
    );
}

#[tokio::test]
async fn test_delete_round_trip_removes_the_row() {
    let store = MemoryBackend::seeded();
    let mut panel = AdminPanel::new(true);

    let action = panel.refresh().expect("initial load");
    panel.apply(dispatch(&store, action).await);

    panel.state.select(Some(2));
    let action = panel.delete_selected().expect("delete request");
    panel.apply(dispatch(&store, action).await);

    assert_eq!(panel.users.len(), 2);
    assert!(panel.users.iter().all(|u| u.id != 3));
    let stored = store
        .list_users(&RowQuery::default())
        .await
        .expect("listing");
    assert_eq!(stored.len(), 2);
}

#[tokio::test]
async fn test_backend_failure_surfaces_inline_and_unblocks() {
    let store = MemoryBackend::failing(503);
    let mut panel = AdminPanel::new(true);

    let action = panel.refresh().expect("first attempt");
    panel.apply(dispatch(&store, action).await);

    assert!(panel.error.as_deref().unwrap().contains("503"));
    // The failed call released the loading guard; a retry is allowed.
    assert!(panel.refresh().is_some());
}
