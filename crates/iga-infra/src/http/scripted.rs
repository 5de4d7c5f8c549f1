//! Scripted transport: records every request and answers from canned replies.
//!
//! Replies are registered per method and path. Several replies for the same
//! route are served in order and the last one keeps answering.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use iga_core::ports::{HttpRequest, HttpResponse, HttpTransport, Method, TransportError};

#[derive(Debug, Clone)]
pub enum Reply {
    Respond(HttpResponse),
    /// Simulates a request that never got a response.
    Fail,
}

struct Route {
    method: Method,
    path: String,
    replies: VecDeque<Reply>,
}

#[derive(Default)]
pub struct ScriptedTransport {
    routes: Mutex<Vec<Route>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&self, method: Method, path: &str, reply: Reply) -> &Self {
        let mut routes = self.routes.lock();
        match routes
            .iter_mut()
            .find(|r| r.method == method && r.path == path)
        {
            Some(route) => route.replies.push_back(reply),
            None => routes.push(Route {
                method,
                path: path.to_string(),
                replies: VecDeque::from([reply]),
            }),
        }
        self
    }

    /// Answer `method path` with `status` and a JSON body.
    pub fn json(&self, method: Method, path: &str, status: u16, body: Value) -> &Self {
        self.on(method, path, Reply::Respond(HttpResponse::json(status, &body)))
    }

    pub fn fail(&self, method: Method, path: &str) -> &Self {
        self.on(method, path, Reply::Fail)
    }

    /// Every request received, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    pub fn requests_to(&self, method: Method, path: &str) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .cloned()
            .collect()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().last().cloned()
    }

    fn next_reply(&self, method: Method, path: &str) -> Option<Reply> {
        let mut routes = self.routes.lock();
        let route = routes
            .iter_mut()
            .find(|r| r.method == method && r.path == path)?;
        if route.replies.len() > 1 {
            route.replies.pop_front()
        } else {
            route.replies.front().cloned()
        }
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let reply = self.next_reply(request.method, &request.path);
        let (method, path) = (request.method, request.path.clone());
        self.requests.lock().push(request);

        match reply {
            Some(Reply::Respond(response)) => Ok(response),
            Some(Reply::Fail) => Err(TransportError::Connection(format!(
                "scripted failure for {method} {path}"
            ))),
            None => Err(TransportError::Connection(format!(
                "no scripted reply for {method} {path}"
            ))),
        }
    }
}
