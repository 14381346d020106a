//! Shared state holder for the todo list.
//!
//! # Design
//! `TodoStore` is a cheap-clone handle passed explicitly to every view. All
//! clones see the same list. The list is a cache of the backend: only
//! `fetch_todos` writes it, and it always replaces the whole list, so there
//! is exactly one writer and no partial updates.
//!
//! Everything runs on one execution context, so the handle is `Rc`-based and
//! deliberately `!Send`. Overlapping actions interleave at `.await` points;
//! whichever refetch completes last determines the list.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::Todo;

struct Backend<T> {
    client: TodoClient,
    transport: T,
}

struct Inner<T> {
    backend: Option<Backend<T>>,
    todos: RefCell<Vec<Todo>>,
    revision: Cell<u64>,
}

/// Handle to the single live copy of the todo list plus its refresh.
pub struct TodoStore<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for TodoStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

/// A detached store: the list is empty and `fetch_todos` does nothing.
impl<T> Default for TodoStore<T> {
    fn default() -> Self {
        Self {
            inner: Rc::new(Inner {
                backend: None,
                todos: RefCell::new(Vec::new()),
                revision: Cell::new(0),
            }),
        }
    }
}

impl<T> TodoStore<T> {
    /// Snapshot of the current list in rendering order.
    pub fn todos(&self) -> Vec<Todo> {
        self.inner.todos.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.inner.todos.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of times the list has been replaced.
    pub fn revision(&self) -> u64 {
        self.inner.revision.get()
    }

    pub fn is_detached(&self) -> bool {
        self.inner.backend.is_none()
    }

    fn replace(&self, todos: Vec<Todo>) {
        *self.inner.todos.borrow_mut() = todos;
        self.inner.revision.set(self.inner.revision.get() + 1);
    }
}

impl<T: Transport> TodoStore<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                backend: Some(Backend { client, transport }),
                todos: RefCell::new(Vec::new()),
                revision: Cell::new(0),
            }),
        }
    }

    /// Reload the whole list from `GET /todo` and replace the cached copy.
    ///
    /// On error the previous list stays in place.
    pub async fn fetch_todos(&self) -> Result<(), ApiError> {
        let Some(backend) = self.inner.backend.as_ref() else {
            return Ok(());
        };
        let response = send(backend, backend.client.build_list_todos()).await?;
        let todos = backend.client.parse_list_todos(response)?;
        tracing::debug!(count = todos.len(), "todo list refreshed");
        self.replace(todos);
        Ok(())
    }

    /// Send one mutating request, then refetch the list.
    ///
    /// `build` receives the client and returns the request to send. The
    /// refetch only happens after the mutation has succeeded. A detached
    /// store sends nothing.
    pub(crate) async fn mutate<F>(&self, build: F) -> Result<(), ApiError>
    where
        F: FnOnce(&TodoClient) -> Result<HttpRequest, ApiError>,
    {
        let Some(backend) = self.inner.backend.as_ref() else {
            return Ok(());
        };
        let request = build(&backend.client)?;
        let response = send(backend, request).await?;
        backend.client.parse_mutation(response)?;
        self.fetch_todos().await
    }
}

async fn send<T: Transport>(
    backend: &Backend<T>,
    request: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    tracing::debug!(method = %request.method, path = %request.path, "sending request");
    let response = backend.transport.send(request).await?;
    tracing::debug!(status = response.status, "received response");
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::testing::ScriptedTransport;

    fn store(transport: &ScriptedTransport) -> TodoStore<&ScriptedTransport> {
        TodoStore::new(TodoClient::new("/api"), transport)
    }

    #[tokio::test]
    async fn fetch_replaces_list_with_server_data() {
        let transport = ScriptedTransport::new();
        transport.push_list(&[("1", "a"), ("2", "b")]);
        let store = store(&transport);

        store.fetch_todos().await.unwrap();

        assert_eq!(store.todos(), vec![Todo::new("1", "a"), Todo::new("2", "b")]);
        assert_eq!(store.revision(), 1);
        assert_eq!(transport.requests()[0].method, HttpMethod::Get);
        assert_eq!(transport.requests()[0].path, "/api/todo");
    }

    #[tokio::test]
    async fn fetch_twice_is_idempotent() {
        let transport = ScriptedTransport::new();
        transport.push_list(&[("1", "a"), ("2", "b")]);
        transport.push_list(&[("1", "a"), ("2", "b")]);
        let store = store(&transport);

        store.fetch_todos().await.unwrap();
        let first = store.todos();
        store.fetch_todos().await.unwrap();

        assert_eq!(store.todos(), first);
        assert_eq!(store.revision(), 2);
    }

    #[tokio::test]
    async fn malformed_data_empties_the_list() {
        let transport = ScriptedTransport::new();
        transport.push_list(&[("1", "a")]);
        transport.push(200, r#"{"data":null}"#);
        let store = store(&transport);

        store.fetch_todos().await.unwrap();
        store.fetch_todos().await.unwrap();

        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn failed_fetch_keeps_previous_list() {
        let transport = ScriptedTransport::new();
        transport.push_list(&[("1", "a")]);
        transport.push(200, "<html>proxy error</html>");
        transport.push_failure("connection refused");
        let store = store(&transport);

        store.fetch_todos().await.unwrap();
        let err = store.fetch_todos().await.unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
        let err = store.fetch_todos().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));

        assert_eq!(store.todos(), vec![Todo::new("1", "a")]);
        assert_eq!(store.revision(), 1);
    }

    #[tokio::test]
    async fn overlapping_fetches_last_to_complete_wins() {
        // Request #0 is held until the second fetch has finished.
        let transport = ScriptedTransport::gated(0);
        transport.push_list(&[("1", "older request")]);
        transport.push_list(&[("2", "newer request")]);
        let store = store(&transport);

        let slow = store.fetch_todos();
        let fast = async {
            tokio::task::yield_now().await;
            store.fetch_todos().await.unwrap();
            let mid = store.todos();
            transport.release();
            mid
        };
        let (slow_result, mid) = tokio::join!(slow, fast);

        slow_result.unwrap();
        assert_eq!(mid, vec![Todo::new("2", "newer request")]);
        assert_eq!(store.todos(), vec![Todo::new("1", "older request")]);
        assert_eq!(store.revision(), 2);
    }

    #[tokio::test]
    async fn clones_share_one_list() {
        let transport = ScriptedTransport::new();
        transport.push_list(&[("9", "shared")]);
        let store = store(&transport);
        let other = store.clone();

        other.fetch_todos().await.unwrap();

        assert_eq!(store.todos(), vec![Todo::new("9", "shared")]);
    }

    #[tokio::test]
    async fn detached_store_is_empty_and_refresh_is_noop() {
        let store: TodoStore<ScriptedTransport> = TodoStore::default();

        store.fetch_todos().await.unwrap();

        assert!(store.is_detached());
        assert!(store.is_empty());
        assert_eq!(store.revision(), 0);
    }

    #[tokio::test]
    async fn failed_mutation_skips_refetch() {
        let transport = ScriptedTransport::new();
        transport.push(500, "boom");
        let store = store(&transport);

        let err = store
            .mutate(|client| client.build_delete_todo("1"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Http { status: 500, .. }));
        assert_eq!(transport.requests().len(), 1);
    }
}
