//! Dictionary requests and the loading / error / result lifecycle

use crate::error::LookupError;
use crate::types::{Entry, LookupView};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// HTTP client for the entries endpoint
#[derive(Clone)]
pub struct LookupClient {
    client: reqwest::Client,
    base_url: reqwest::Url,
}

impl LookupClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, LookupError> {
        let base_url =
            reqwest::Url::parse(base_url).map_err(|e| LookupError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(LookupError::InvalidUrl(base_url.to_string()));
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("word-lookup/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(LookupError::Network)?;
        Ok(Self { client, base_url })
    }

    /// `{base}/{word}` with the word percent-encoded as one path segment
    pub fn entry_url(&self, word: &str) -> Result<reqwest::Url, LookupError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LookupError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(word);
        Ok(url)
    }

    pub async fn lookup(&self, word: &str) -> Result<Vec<Entry>, LookupError> {
        let url = self.entry_url(word)?;
        debug!(url = %url, "Requesting definition");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(LookupError::Network)?;

        let status = response.status();
        debug!(status = %status, "Dictionary response received");
        if !status.is_success() {
            return Err(LookupError::NotFound { status });
        }

        response
            .json::<Vec<Entry>>()
            .await
            .map_err(LookupError::Decode)
    }
}

/// Shared between the UI thread and the in-flight request task
#[derive(Debug, Default)]
pub struct LookupState {
    pub loading: bool,
    pub error: Option<String>,
    pub entries: Vec<Arc<Entry>>,
    generation: u64,
}

impl LookupState {
    /// Start a new submission. Returns its generation.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    /// Apply an outcome. Outcomes from superseded generations are dropped.
    pub fn finish(&mut self, generation: u64, result: Result<Vec<Entry>, LookupError>) -> bool {
        if generation != self.generation {
            return false;
        }
        match result {
            Ok(entries) => self.entries = entries.into_iter().map(Arc::new).collect(),
            Err(e) => {
                self.error = Some(e.to_string());
                self.entries.clear();
            }
        }
        self.loading = false;
        true
    }

    #[cfg(test)]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Error beats loading, loading beats the result. Only the first entry
    /// is ever shown; it is shared, not copied, with the view.
    pub fn view(&self) -> LookupView {
        if let Some(error) = &self.error {
            LookupView::Error(error.clone())
        } else if self.loading {
            LookupView::Loading
        } else if let Some(entry) = self.entries.first() {
            LookupView::Entry(Arc::clone(entry))
        } else {
            LookupView::Empty
        }
    }
}

/// Trimmed query, or `None` when there is nothing to look up
pub fn normalize_query(query: &str) -> Option<&str> {
    let trimmed = query.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Run one request and publish its outcome. Returns false if the request was
/// cancelled or its outcome was stale.
pub async fn run_lookup(
    client: &LookupClient,
    word: &str,
    generation: u64,
    state: &Mutex<LookupState>,
    token: &CancellationToken,
) -> bool {
    let result = tokio::select! {
        _ = token.cancelled() => {
            debug!(word, generation, "Lookup superseded, dropping request");
            return false;
        }
        result = client.lookup(word) => result,
    };

    match &result {
        Ok(entries) => info!(word, generation, entries = entries.len(), "Lookup succeeded"),
        Err(LookupError::NotFound { status }) => {
            info!(word, generation, status = %status, "No definition found")
        }
        Err(e) => warn!(word, generation, error = %e, "Lookup failed"),
    }

    let applied = lock(state).finish(generation, result);
    if !applied {
        debug!(word, generation, "Discarding stale lookup outcome");
    }
    applied
}

fn lock(state: &Mutex<LookupState>) -> MutexGuard<'_, LookupState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Search control backend: owns the client, the shared state and the
/// cancellation token of the request in flight.
pub struct Lookup {
    client: LookupClient,
    state: Arc<Mutex<LookupState>>,
    cancel_token: Option<CancellationToken>,
}

impl Lookup {
    pub fn new(client: LookupClient) -> Self {
        Self {
            client,
            state: Arc::new(Mutex::new(LookupState::default())),
            cancel_token: None,
        }
    }

    pub fn state(&self) -> MutexGuard<'_, LookupState> {
        lock(&self.state)
    }

    /// Submit a query. Empty queries are ignored and return false. Any
    /// request still in flight is cancelled. `on_done` runs after the
    /// outcome has been published.
    pub fn submit<F>(&mut self, query: &str, runtime: &tokio::runtime::Handle, on_done: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        let Some(word) = normalize_query(query) else {
            debug!("Ignoring empty query");
            return false;
        };

        if let Some(previous) = self.cancel_token.take() {
            previous.cancel();
        }
        let token = CancellationToken::new();
        self.cancel_token = Some(token.clone());

        let generation = self.state().begin();
        info!(word, generation, "Starting lookup");

        let client = self.client.clone();
        let state = self.state.clone();
        let word = word.to_owned();
        runtime.spawn(async move {
            if run_lookup(&client, &word, generation, &state, &token).await {
                on_done();
            }
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    const HELLO_JSON: &str = r#"[{
        "word": "hello",
        "phonetic": "/həˈləʊ/",
        "phonetics": [{"text": "/həˈləʊ/", "audio": ""}],
        "meanings": [
            {"partOfSpeech": "noun", "definitions": [{"definition": "A greeting."}], "synonyms": [], "antonyms": []},
            {"partOfSpeech": "verb", "definitions": [{"definition": "To greet."}], "synonyms": [], "antonyms": []}
        ],
        "sourceUrls": ["https://en.wiktionary.org/wiki/hello"]
    }]"#;

    const SLOW_JSON: &str = r#"[{"word": "slow", "meanings": []}]"#;

    const NOT_FOUND_JSON: &str =
        r#"{"title": "No Definitions Found", "message": "Sorry pal", "resolution": "Try again"}"#;

    /// Minimal HTTP/1.1 server answering by request path
    async fn spawn_server() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                tokio::spawn(async move {
                    let mut buf = Vec::new();
                    let mut chunk = [0u8; 1024];
                    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                        match socket.read(&mut chunk).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => buf.extend_from_slice(&chunk[..n]),
                        }
                    }
                    let request = String::from_utf8_lossy(&buf);
                    let path = request
                        .lines()
                        .next()
                        .and_then(|line| line.split_whitespace().nth(1))
                        .unwrap_or("/")
                        .to_string();

                    let (status, body) = match path.as_str() {
                        "/api/v2/entries/en/hello" => ("200 OK", HELLO_JSON),
                        "/api/v2/entries/en/slow" => {
                            tokio::time::sleep(Duration::from_millis(400)).await;
                            ("200 OK", SLOW_JSON)
                        }
                        "/api/v2/entries/en/garbage" => ("200 OK", "<html>oops</html>"),
                        "/api/v2/entries/en/two%20words" => ("200 OK", "[]"),
                        _ => ("404 Not Found", NOT_FOUND_JSON),
                    };
                    let response = format!(
                        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        format!("http://{}/api/v2/entries/en", addr)
    }

    fn client_for(base: &str) -> LookupClient {
        LookupClient::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_entry_url_encodes_word_as_single_segment() {
        let client = client_for("https://api.dictionaryapi.dev/api/v2/entries/en");
        assert_eq!(
            client.entry_url("hello").unwrap().as_str(),
            "https://api.dictionaryapi.dev/api/v2/entries/en/hello"
        );
        assert_eq!(
            client.entry_url("a/b c").unwrap().as_str(),
            "https://api.dictionaryapi.dev/api/v2/entries/en/a%2Fb%20c"
        );

        let trailing = client_for("https://api.dictionaryapi.dev/api/v2/entries/en/");
        assert_eq!(
            trailing.entry_url("cat").unwrap().as_str(),
            "https://api.dictionaryapi.dev/api/v2/entries/en/cat"
        );
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        assert!(matches!(
            LookupClient::new("not a url", Duration::from_secs(1)),
            Err(LookupError::InvalidUrl(_))
        ));
        assert!(matches!(
            LookupClient::new("mailto:someone@example.com", Duration::from_secs(1)),
            Err(LookupError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("   \t"), None);
        assert_eq!(normalize_query("  hello "), Some("hello"));
    }

    #[test]
    fn test_state_lifecycle() {
        let mut state = LookupState::default();
        assert_eq!(state.view(), LookupView::Empty);

        let generation = state.begin();
        assert!(state.loading);
        assert_eq!(state.view(), LookupView::Loading);

        let entry: Entry = serde_json::from_str(r#"{"word": "cat"}"#).unwrap();
        assert!(state.finish(generation, Ok(vec![entry.clone()])));
        assert!(!state.loading);
        assert_eq!(state.view(), LookupView::Entry(Arc::new(entry)));
    }

    #[test]
    fn test_view_shows_first_entry_only() {
        let mut state = LookupState::default();
        let generation = state.begin();
        let first: Entry = serde_json::from_str(r#"{"word": "bank"}"#).unwrap();
        let second: Entry = serde_json::from_str(r#"{"word": "bank", "phonetic": "/bæŋk/"}"#).unwrap();

        assert!(state.finish(generation, Ok(vec![first.clone(), second])));
        assert_eq!(state.entries.len(), 2);
        assert_eq!(state.view(), LookupView::Entry(Arc::new(first)));
    }

    #[test]
    fn test_failure_clears_prior_result() {
        let mut state = LookupState::default();
        let first = state.begin();
        let entry: Entry = serde_json::from_str(r#"{"word": "cat"}"#).unwrap();
        state.finish(first, Ok(vec![entry]));

        let second = state.begin();
        let status = reqwest::StatusCode::NOT_FOUND;
        assert!(state.finish(second, Err(LookupError::NotFound { status })));
        assert!(state.entries.is_empty());
        assert!(!state.loading);
        assert_eq!(
            state.view(),
            LookupView::Error(crate::constants::NOT_FOUND_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_begin_clears_error() {
        let mut state = LookupState::default();
        let first = state.begin();
        state.finish(
            first,
            Err(LookupError::NotFound { status: reqwest::StatusCode::NOT_FOUND }),
        );
        assert!(state.error.is_some());

        state.begin();
        assert!(state.error.is_none());
        assert_eq!(state.view(), LookupView::Loading);
    }

    #[test]
    fn test_stale_outcome_ignored() {
        let mut state = LookupState::default();
        let stale = state.begin();
        let current = state.begin();

        let entry: Entry = serde_json::from_str(r#"{"word": "old"}"#).unwrap();
        assert!(!state.finish(stale, Ok(vec![entry])));
        assert!(state.loading);
        assert!(state.entries.is_empty());

        assert!(state.finish(current, Ok(vec![])));
        assert!(!state.loading);
        assert_eq!(state.generation(), current);
    }

    #[tokio::test]
    async fn test_client_parses_success() {
        let base = spawn_server().await;
        let entries = client_for(&base).lookup("hello").await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "hello");
        assert_eq!(entries[0].meanings.len(), 2);
    }

    #[tokio::test]
    async fn test_client_not_found_message() {
        let base = spawn_server().await;
        let err = client_for(&base).lookup("qwzxv").await.unwrap_err();
        assert!(matches!(err, LookupError::NotFound { .. }));
        assert_eq!(err.to_string(), crate::constants::NOT_FOUND_MESSAGE);
    }

    #[tokio::test]
    async fn test_client_decode_error() {
        let base = spawn_server().await;
        let err = client_for(&base).lookup("garbage").await.unwrap_err();
        assert!(matches!(err, LookupError::Decode(_)));
    }

    #[tokio::test]
    async fn test_client_encodes_spaces() {
        let base = spawn_server().await;
        let entries = client_for(&base).lookup("two words").await.unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_client_network_error() {
        // Bind then drop to get a port nothing listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(&format!("http://{}/api", addr));
        let err = client.lookup("hello").await.unwrap_err();
        assert!(matches!(err, LookupError::Network(_)));
    }

    #[tokio::test]
    async fn test_submit_empty_query_does_nothing() {
        let base = spawn_server().await;
        let mut lookup = Lookup::new(client_for(&base));
        let handle = tokio::runtime::Handle::current();

        assert!(!lookup.submit("", &handle, || {}));
        assert!(!lookup.submit("   ", &handle, || {}));
        assert_eq!(lookup.state().generation(), 0);
        assert!(!lookup.state().loading);
    }

    #[tokio::test]
    async fn test_submit_publishes_result() {
        let base = spawn_server().await;
        let mut lookup = Lookup::new(client_for(&base));
        let handle = tokio::runtime::Handle::current();

        let (tx, rx) = oneshot::channel();
        assert!(lookup.submit(" hello ", &handle, move || {
            let _ = tx.send(());
        }));
        assert!(lookup.state().loading);

        rx.await.unwrap();
        let state = lookup.state();
        assert!(!state.loading);
        match state.view() {
            LookupView::Entry(entry) => {
                assert_eq!(entry.word, "hello");
                assert_eq!(entry.meanings.len(), 2);
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_submit_failure_clears_result() {
        let base = spawn_server().await;
        let mut lookup = Lookup::new(client_for(&base));
        let handle = tokio::runtime::Handle::current();

        let (tx, rx) = oneshot::channel();
        lookup.submit("hello", &handle, move || {
            let _ = tx.send(());
        });
        rx.await.unwrap();
        assert_eq!(lookup.state().entries.len(), 1);

        let (tx, rx) = oneshot::channel();
        lookup.submit("qwzxv", &handle, move || {
            let _ = tx.send(());
        });
        rx.await.unwrap();

        let state = lookup.state();
        assert!(state.entries.is_empty());
        assert!(!state.loading);
        assert_eq!(
            state.error.as_deref(),
            Some(crate::constants::NOT_FOUND_MESSAGE)
        );
    }

    #[tokio::test]
    async fn test_superseded_request_is_dropped() {
        let base = spawn_server().await;
        let mut lookup = Lookup::new(client_for(&base));
        let handle = tokio::runtime::Handle::current();

        let (slow_tx, mut slow_rx) = oneshot::channel();
        lookup.submit("slow", &handle, move || {
            let _ = slow_tx.send(());
        });

        let (tx, rx) = oneshot::channel();
        lookup.submit("hello", &handle, move || {
            let _ = tx.send(());
        });
        rx.await.unwrap();

        // Give the slow response time to arrive if it were still running
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert!(slow_rx.try_recv().is_err());

        let state = lookup.state();
        assert_eq!(state.generation(), 2);
        assert_eq!(state.entries[0].word, "hello");
        assert!(!state.loading);
    }
}
