//! In-memory fakes for the storage and transport seams.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::api::{HttpRequest, HttpResponse, Transport};
use crate::session::KeyValueStore;

#[derive(Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(entries: &[(&str, &str)]) -> Self {
        let store = Self::new();
        for (key, value) in entries {
            store.set(key, value);
        }
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

struct Reply {
    gate: Option<oneshot::Receiver<()>>,
    outcome: Result<HttpResponse, String>,
}

/// Replays scripted responses in order and records every request.
#[derive(Clone, Default)]
pub struct FakeTransport {
    replies: Rc<RefCell<VecDeque<Reply>>>,
    sent: Rc<RefCell<Vec<HttpRequest>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: serde_json::Value) {
        self.respond_raw(status, &body.to_string());
    }

    pub fn respond_raw(&self, status: u16, body: &str) {
        self.push(None, Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
    }

    /// Like [`respond`](Self::respond), but the reply is held back until
    /// `gate` fires.
    pub fn respond_after(&self, gate: oneshot::Receiver<()>, status: u16, body: serde_json::Value) {
        self.push(
            Some(gate),
            Ok(HttpResponse {
                status,
                body: body.to_string(),
            }),
        );
    }

    pub fn fail(&self, message: &str) {
        self.push(None, Err(message.to_string()));
    }

    fn push(&self, gate: Option<oneshot::Receiver<()>>, outcome: Result<HttpResponse, String>) {
        self.replies.borrow_mut().push_back(Reply { gate, outcome });
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.sent.borrow().iter().map(|r| r.path.clone()).collect()
    }

    pub fn body_json(&self, index: usize) -> serde_json::Value {
        let sent = self.sent.borrow();
        let body = sent[index].body.as_deref().unwrap_or("null");
        serde_json::from_str(body).unwrap()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        self.sent.borrow_mut().push(request);
        let reply = self.replies.borrow_mut().pop_front();
        let Some(reply) = reply else {
            return Err("no scripted reply".to_string());
        };
        if let Some(gate) = reply.gate {
            let _ = gate.await;
        }
        reply.outcome
    }
}
