//! HttpRosterApi and RosterController against a stub roster server.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;

use guildroster_domain::{GroupKey, GroupName, Password, RealmKey};
use guildroster_player::application::services::{
    PASSWORD_INVALID_MESSAGE, SAVE_FAILED_MESSAGE,
};
use guildroster_player::infrastructure::platform::PlatformEvent;
use guildroster_player::{
    ApiError, FormError, FormPhase, HttpRosterApi, PageSnapshot, RecordingPlatform,
    RosterApiPort, RosterController,
};
use guildroster_shared::{GroupLocator, GroupNameCheck, GroupUpdate, PasswordCheck};

const PASSWORD: &str = "s3cret & more";
const TAKEN_GROUP: &str = "raiders";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Received {
    path: String,
    form: HashMap<String, String>,
}

#[derive(Clone, Default)]
struct Stub {
    received: Arc<Mutex<Vec<Received>>>,
    fail_updates: bool,
}

impl Stub {
    fn record(&self, path: String, form: &HashMap<String, String>) {
        self.received
            .lock()
            .expect("stub lock")
            .push(Received {
                path,
                form: form.clone(),
            });
    }

    fn received(&self) -> Vec<Received> {
        self.received.lock().expect("stub lock").clone()
    }

    fn paths(&self) -> Vec<String> {
        self.received().into_iter().map(|r| r.path).collect()
    }
}

fn password_ok(form: &HashMap<String, String>) -> bool {
    form.get("pw").map(String::as_str) == Some(PASSWORD)
}

async fn validate(State(stub): State<Stub>, Form(form): Form<HashMap<String, String>>) -> StatusCode {
    stub.record("/val".into(), &form);
    if form.contains_key("newgn") {
        return match form.get("group").map(String::as_str) {
            Some(TAKEN_GROUP) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::OK,
        };
    }
    if password_ok(&form) {
        StatusCode::OK
    } else {
        StatusCode::UNAUTHORIZED
    }
}

async fn update(
    State(stub): State<Stub>,
    Path((realm, group)): Path<(String, String)>,
    Form(form): Form<HashMap<String, String>>,
) -> StatusCode {
    stub.record(format!("/{realm}/{group}"), &form);
    if stub.fail_updates {
        StatusCode::INTERNAL_SERVER_ERROR
    } else if password_ok(&form) {
        StatusCode::OK
    } else {
        StatusCode::UNAUTHORIZED
    }
}

async fn delete(State(stub): State<Stub>, Form(form): Form<HashMap<String, String>>) -> StatusCode {
    stub.record("/delete".into(), &form);
    if password_ok(&form) {
        StatusCode::OK
    } else {
        StatusCode::UNAUTHORIZED
    }
}

async fn spawn_stub(stub: Stub) -> String {
    let app = Router::new()
        .route("/val", post(validate))
        .route("/delete", post(delete))
        .route("/{realm}/{group}", post(update))
        .with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub server");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });
    format!("http://{addr}")
}

const PAGE: &str = r#"{
    "realm_options": [
        {"key": "area-52", "display": "Area 52"},
        {"key": "realm-a", "display": "Realm A"}
    ],
    "current_realm": "area-52",
    "group": "raiders",
    "group_name": "Raiders & Co",
    "rows": [
        {"name": "tanky", "role": "tank", "status": "main"}
    ]
}"#;

fn controller(base_url: &str, platform: &RecordingPlatform) -> RosterController {
    let state = PageSnapshot::from_json(PAGE)
        .expect("parse page")
        .into_form_state()
        .expect("valid page");
    RosterController::new(
        state,
        Arc::new(HttpRosterApi::new(base_url)),
        Arc::new(platform.clone()),
    )
}

fn password_check() -> PasswordCheck {
    PasswordCheck {
        group: GroupKey::new("raiders").expect("valid"),
        realm: RealmKey::new("area-52").expect("valid"),
        password: Password::new(PASSWORD),
    }
}

#[tokio::test]
async fn validate_password_sends_form_body() {
    let stub = Stub::default();
    let api = HttpRosterApi::new(&spawn_stub(stub.clone()).await);

    api.validate_password(&password_check())
        .await
        .expect("accepted");

    let received = stub.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].form.get("group").map(String::as_str), Some("raiders"));
    assert_eq!(received[0].form.get("realm").map(String::as_str), Some("area-52"));
    assert_eq!(received[0].form.get("pw").map(String::as_str), Some(PASSWORD));
}

#[tokio::test]
async fn wrong_password_maps_to_unauthorized() {
    let stub = Stub::default();
    let api = HttpRosterApi::new(&spawn_stub(stub).await);
    let mut check = password_check();
    check.password = Password::new("nope");

    assert_eq!(
        api.validate_password(&check).await,
        Err(ApiError::Unauthorized)
    );
}

#[tokio::test]
async fn update_posts_to_group_path() {
    let stub = Stub::default();
    let api = HttpRosterApi::new(&spawn_stub(stub.clone()).await);
    let locator = GroupLocator::from_display("Area 52", "Raiders").expect("valid");
    let update = GroupUpdate {
        group_name: GroupName::new("Raiders").expect("valid"),
        json: r#"{"toons":[]}"#.into(),
        password: Password::new(PASSWORD),
    };

    api.update_group(&locator, &update).await.expect("saved");

    let received = stub.received();
    assert_eq!(received[0].path, "/area-52/raiders");
    assert_eq!(
        received[0].form.get("json").map(String::as_str),
        Some(r#"{"toons":[]}"#)
    );
}

#[tokio::test]
async fn update_escapes_reserved_characters_in_group_path() {
    let stub = Stub::default();
    let api = HttpRosterApi::new(&spawn_stub(stub.clone()).await);

    for (display, expected) in [("#1 Guild", "/area-52/#1-guild"), ("AC/DC", "/area-52/ac/dc")] {
        let locator = GroupLocator::from_display("Area 52", display).expect("valid");
        let update = GroupUpdate {
            group_name: GroupName::new(display).expect("valid"),
            json: r#"{"toons":[]}"#.into(),
            password: Password::new(PASSWORD),
        };

        api.update_group(&locator, &update)
            .await
            .unwrap_or_else(|err| panic!("{display} should be saved: {err}"));
        assert_eq!(stub.paths().last().map(String::as_str), Some(expected));
    }
    assert_eq!(stub.paths().len(), 2);
}

#[tokio::test]
async fn server_errors_map_to_status() {
    let stub = Stub {
        fail_updates: true,
        ..Stub::default()
    };
    let api = HttpRosterApi::new(&spawn_stub(stub).await);
    let locator = GroupLocator::from_display("Area 52", "Raiders").expect("valid");
    let update = GroupUpdate {
        group_name: GroupName::new("Raiders").expect("valid"),
        json: r#"{"toons":[]}"#.into(),
        password: Password::new(PASSWORD),
    };

    assert_eq!(
        api.update_group(&locator, &update).await,
        Err(ApiError::Status(500))
    );
}

#[tokio::test]
async fn group_name_check_uses_newgn() {
    let stub = Stub::default();
    let api = HttpRosterApi::new(&spawn_stub(stub.clone()).await);
    let check = GroupNameCheck {
        group: GroupKey::new("night-shift").expect("valid"),
        realm: RealmKey::new("area-52").expect("valid"),
        new_group_name: GroupName::new("Night Shift").expect("valid"),
    };

    api.check_group_name(&check).await.expect("free");
    assert_eq!(
        stub.received()[0].form.get("newgn").map(String::as_str),
        Some("Night Shift")
    );
}

#[tokio::test]
async fn submit_flow_saves_roster_and_navigates() {
    let stub = Stub::default();
    let base_url = spawn_stub(stub.clone()).await;
    let platform = RecordingPlatform::new();
    let mut ctrl = controller(&base_url, &platform);

    let id = ctrl.on_add_row().expect("add row");
    ctrl.on_name_edit(id, "zekk").expect("valid name");
    ctrl.on_role_change(id, "healer").expect("valid role");
    ctrl.on_status_change(id, "bench").expect("valid status");
    ctrl.on_realm_change(id).expect("editable");
    ctrl.on_realm_confirm("Realm A").expect("known realm");
    ctrl.on_add_row().expect("blank row");

    let location = ctrl
        .on_submit(Password::new(PASSWORD))
        .await
        .expect("submitted");

    assert_eq!(location, "/area-52/raiders");
    assert_eq!(stub.paths(), vec!["/val", "/area-52/raiders"]);

    let update = &stub.received()[1].form;
    assert_eq!(update.get("group").map(String::as_str), Some("Raiders & Co"));
    let json: serde_json::Value =
        serde_json::from_str(update.get("json").expect("json field")).expect("valid json");
    assert_eq!(
        json,
        serde_json::json!({"toons": [
            {"name": "Tanky", "role": "tank", "status": "main", "realm": "area-52"},
            {"name": "Zekk", "role": "healer", "status": "bench", "realm": "realm-a"}
        ]})
    );

    assert_eq!(
        platform.events(),
        vec![PlatformEvent::Navigate("/area-52/raiders".into())]
    );
    assert!(matches!(ctrl.state().phase(), FormPhase::Submitted { .. }));
}

#[tokio::test]
async fn submit_with_wrong_password_stops_after_validation() {
    let stub = Stub::default();
    let base_url = spawn_stub(stub.clone()).await;
    let platform = RecordingPlatform::new();
    let mut ctrl = controller(&base_url, &platform);

    let err = ctrl
        .on_submit(Password::new("wrong"))
        .await
        .expect_err("rejected");

    assert_eq!(err, FormError::AuthenticationFailed);
    assert_eq!(stub.paths(), vec!["/val"]);
    assert_eq!(
        platform.events(),
        vec![PlatformEvent::Error(PASSWORD_INVALID_MESSAGE.into())]
    );
    assert!(ctrl.state().is_editable());
}

#[tokio::test]
async fn failed_update_returns_to_editing() {
    let stub = Stub {
        fail_updates: true,
        ..Stub::default()
    };
    let base_url = spawn_stub(stub.clone()).await;
    let platform = RecordingPlatform::new();
    let mut ctrl = controller(&base_url, &platform);

    let err = ctrl
        .on_submit(Password::new(PASSWORD))
        .await
        .expect_err("server error");

    assert_eq!(err, FormError::SubmissionFailed(ApiError::Status(500)));
    assert_eq!(
        platform.events(),
        vec![PlatformEvent::Error(SAVE_FAILED_MESSAGE.into())]
    );
    assert!(ctrl.state().is_editable());
    assert_eq!(platform.last_navigation(), None);
}

#[tokio::test]
async fn delete_flow_navigates_home() {
    let stub = Stub::default();
    let base_url = spawn_stub(stub.clone()).await;
    let platform = RecordingPlatform::new();
    let mut ctrl = controller(&base_url, &platform);

    ctrl.on_delete_group(Password::new(PASSWORD), Password::new(PASSWORD))
        .await
        .expect("deleted");

    assert_eq!(stub.paths(), vec!["/val", "/delete"]);
    assert_eq!(platform.last_navigation().as_deref(), Some("/"));
}

#[tokio::test]
async fn group_name_availability() {
    let stub = Stub::default();
    let base_url = spawn_stub(stub).await;
    let platform = RecordingPlatform::new();
    let ctrl = controller(&base_url, &platform);

    assert!(ctrl
        .on_check_group_name("Area 52", "Night Shift")
        .await
        .expect("answered"));
    assert!(!ctrl
        .on_check_group_name("Area 52", "Raiders")
        .await
        .expect("answered"));
}
