use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{mpsc, Arc, Mutex};
use url::Url;

/// In-process stand-in for the note server, implementing the endpoints the
/// client consumes with the same `{success, message}` envelope and the same
/// edge-case behavior (404 on get, soft failure on edit/delete of a missing
/// note, rejection of a blank title).
#[allow(dead_code)]
pub struct TestServer {
    pub base_url: Url,
    state: Shared,
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct StoredNote {
    pub title: String,
    pub content: String,
    pub image_filename: Option<String>,
}

#[derive(Default)]
struct ServerState {
    notes: HashMap<i64, StoredNote>,
    next_id: i64,
    reloads: usize,
}

type Shared = Arc<Mutex<ServerState>>;

#[allow(dead_code)]
impl TestServer {
    /// Bind an ephemeral port and serve on a background thread for the rest
    /// of the test process.
    pub fn start() -> Self {
        let state: Shared = Arc::new(Mutex::new(ServerState {
            next_id: 1,
            ..ServerState::default()
        }));
        let app_state = state.clone();
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to build test runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("Failed to bind test server");
                tx.send(listener.local_addr().expect("Test server address"))
                    .expect("Failed to report test server address");
                axum::serve(listener, router(app_state))
                    .await
                    .expect("Test server exited");
            });
        });

        let addr: SocketAddr = rx.recv().expect("Test server never started");
        let base_url = Url::parse(&format!("http://{addr}")).expect("Test server URL");
        Self { base_url, state }
    }

    pub fn insert_note(&self, id: i64, title: &str, content: &str, image: Option<&str>) {
        let mut state = self.state.lock().unwrap();
        state.notes.insert(
            id,
            StoredNote {
                title: title.to_string(),
                content: content.to_string(),
                image_filename: image.map(|s| s.to_string()),
            },
        );
        state.next_id = state.next_id.max(id + 1);
    }

    pub fn note(&self, id: i64) -> Option<StoredNote> {
        self.state.lock().unwrap().notes.get(&id).cloned()
    }

    pub fn note_count(&self) -> usize {
        self.state.lock().unwrap().notes.len()
    }

    pub fn reload_count(&self) -> usize {
        self.state.lock().unwrap().reloads
    }
}

/// A tiny but genuine PNG header; the fixture server never decodes it.
#[allow(dead_code)]
pub fn sample_png() -> Vec<u8> {
    b"\x89PNG\r\n\x1a\n0000".to_vec()
}

fn router(state: Shared) -> Router {
    Router::new()
        .route("/add_note", post(add_note))
        .route("/edit_note/{id}", post(edit_note))
        .route("/get_note/{id}", get(get_note))
        .route("/delete_note/{id}", post(delete_note))
        .route("/notes", get(notes_page))
        .with_state(state)
}

async fn read_form(mut multipart: Multipart) -> (String, String, Option<String>) {
    let mut title = String::new();
    let mut content = String::new();
    let mut image = None;

    while let Some(field) = multipart.next_field().await.expect("multipart field") {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "title" => title = field.text().await.expect("title field"),
            "content" => content = field.text().await.expect("content field"),
            "image" => {
                let file_name = field.file_name().map(|s| s.to_string());
                let _bytes = field.bytes().await.expect("image bytes");
                image = file_name;
            }
            _ => {}
        }
    }

    (title, content, image)
}

async fn add_note(State(state): State<Shared>, multipart: Multipart) -> Json<Value> {
    let (title, content, image) = read_form(multipart).await;
    if title.trim().is_empty() {
        return Json(json!({"success": false, "message": "Title is required"}));
    }

    let mut state = state.lock().unwrap();
    let id = state.next_id;
    state.next_id += 1;
    state.notes.insert(
        id,
        StoredNote {
            title: title.trim().to_string(),
            content: content.trim().to_string(),
            image_filename: image,
        },
    );
    Json(json!({"success": true, "message": "Note added successfully"}))
}

async fn edit_note(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> Json<Value> {
    let (title, content, image) = read_form(multipart).await;

    let mut state = state.lock().unwrap();
    let Some(note) = state.notes.get_mut(&id) else {
        return Json(json!({"success": false, "message": "Note not found"}));
    };
    if title.trim().is_empty() {
        return Json(json!({"success": false, "message": "Title is required"}));
    }

    note.title = title.trim().to_string();
    note.content = content.trim().to_string();
    if image.is_some() {
        note.image_filename = image;
    }
    Json(json!({"success": true, "message": "Note updated successfully"}))
}

async fn get_note(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let state = state.lock().unwrap();
    match state.notes.get(&id) {
        Some(note) => Json(json!({
            "id": id,
            "title": note.title,
            "content": note.content,
            "image_filename": note.image_filename,
            "created_at": "2024-01-01 10:00:00",
            "updated_at": "2024-01-02 11:00:00",
        }))
        .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Note not found"})),
        )
            .into_response(),
    }
}

async fn delete_note(State(state): State<Shared>, Path(id): Path<i64>) -> Json<Value> {
    let mut state = state.lock().unwrap();
    if state.notes.remove(&id).is_none() {
        return Json(json!({"success": false, "message": "Note not found"}));
    }
    Json(json!({"success": true, "message": "Note deleted successfully"}))
}

async fn notes_page(State(state): State<Shared>) -> Html<&'static str> {
    state.lock().unwrap().reloads += 1;
    Html("<!DOCTYPE html><html><body>notes</body></html>")
}
