//! App — component-based event loop.
//!
//! Architecture:
//! - `App` owns all components and `AppState` (shared read-only data for
//!   components).
//! - A `tokio::mpsc` channel carries `AppMessage` events in from background
//!   tasks; terminal input is read on a blocking task and forwarded the same
//!   way.
//! - Components return `Vec<Action>`; App dispatches each Action.
//! - Every navigation bumps a generation counter. Fetch results are stamped
//!   with the generation that started them, and results from a superseded
//!   navigation are dropped on arrival — a stale response can never overwrite
//!   the page the user is actually on.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::sync::mpsc;
use tracing::{info, warn};

use media_api::analytics::{aggregate_views, DailyViews};
use media_api::client::{ApiClient, ApiError};
use media_api::items::{channel_card, media_item_card, playlist_card, CardItem};
use media_api::resources::{ListQuery, MediaItem, MediaItemCreate, Profile};
use media_api::upload;

use crate::action::{Action, Page};
use crate::app_state::{AppState, Severity};
use crate::component::Component;
use crate::components::{
    analytics_panel::AnalyticsPanel, header::Header, media_detail::MediaDetail,
    media_list::MediaList,
};
use crate::widgets::search_input::{SearchAction, SearchInput};
use crate::widgets::status_bar::{self, InputMode};

// ── Internal event bus ────────────────────────────────────────────────────────

enum AppMessage {
    Event(Event),
    ProfileLoaded(Box<Profile>),
    /// (generation, listing heading, cards)
    CardsLoaded(u64, Option<String>, Vec<CardItem>),
    MediaLoaded(u64, Box<MediaItem>),
    AnalyticsLoaded(u64, Vec<DailyViews>),
    FetchFailed(u64, String),
    /// A patch came back with the updated item.
    MediaPatched(Box<MediaItem>),
    /// Upload/patch pipeline finished; Ok carries the confirmation message.
    MutationFinished(Result<String, String>),
}

pub struct App {
    state: AppState,
    client: Arc<ApiClient>,

    header: Header,
    media_list: MediaList,
    media_detail: MediaDetail,
    analytics_panel: AnalyticsPanel,

    /// Bottom-line prompt reused for the upload path and the retitle field.
    prompt: SearchInput,
    clipboard: Option<arboard::Clipboard>,

    latest_count: u64,
    generation: u64,
    mutation_in_flight: bool,
    should_quit: bool,

    tx: mpsc::Sender<AppMessage>,
    rx: Option<mpsc::Receiver<AppMessage>>,
}

impl App {
    pub fn new(client: Arc<ApiClient>, base_url: String, latest_count: u64) -> Self {
        let (tx, rx) = mpsc::channel::<AppMessage>(256);
        Self {
            state: AppState::new(base_url),
            client,
            header: Header::new(),
            media_list: MediaList::new(),
            media_detail: MediaDetail::new(),
            analytics_panel: AnalyticsPanel::new(),
            prompt: SearchInput::new(">", ""),
            clipboard: None,
            latest_count,
            generation: 0,
            mutation_in_flight: false,
            should_quit: false,
            tx,
            rx: Some(rx),
        }
    }

    // ── Main run loop ─────────────────────────────────────────────────────────

    pub async fn run(mut self) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let mut rx = self
            .rx
            .take()
            .ok_or_else(|| anyhow::anyhow!("app already running"))?;

        // ── Background task: keyboard events ─────────────────────────────────
        let event_tx = self.tx.clone();
        tokio::task::spawn_blocking(move || loop {
            match event::read() {
                Ok(ev) => {
                    if event_tx.blocking_send(AppMessage::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        });

        // Profile once per page session, landing page immediately.
        self.spawn_profile_fetch();
        self.navigate(Page::Home);

        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal.draw(|f| self.draw(f))?;
            }

            let Some(msg) = rx.recv().await else { break };
            needs_redraw = self.handle_message(msg);
            // Coalesce whatever else is already queued before redrawing.
            while let Ok(next) = rx.try_recv() {
                needs_redraw |= self.handle_message(next);
            }

            if self.should_quit {
                break;
            }
        }

        // ── Teardown ──────────────────────────────────────────────────────────
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    // ── Message handling ──────────────────────────────────────────────────────

    fn handle_message(&mut self, msg: AppMessage) -> bool {
        match msg {
            AppMessage::Event(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                for action in self.handle_key(key) {
                    self.dispatch(action);
                }
                true
            }
            AppMessage::Event(Event::Resize(..)) => true,
            AppMessage::Event(_) => false,

            AppMessage::ProfileLoaded(profile) => {
                self.state.profile = Some(*profile);
                true
            }

            AppMessage::CardsLoaded(generation, heading, cards) => {
                if generation != self.generation {
                    return false;
                }
                self.state.loading = false;
                self.state.listing_title = heading;
                self.media_list.set_cards(cards);
                true
            }

            AppMessage::MediaLoaded(generation, item) => {
                if generation != self.generation {
                    return false;
                }
                self.state.media_item = Some(*item);
                if matches!(self.state.page, Page::Media(_)) {
                    self.state.loading = false;
                }
                true
            }

            AppMessage::AnalyticsLoaded(generation, series) => {
                if generation != self.generation {
                    return false;
                }
                self.state.loading = false;
                self.state.analytics = Some(series);
                true
            }

            AppMessage::FetchFailed(generation, message) => {
                if generation != self.generation {
                    return false;
                }
                // Degrade to an explicit empty state, never a stuck spinner.
                self.state.loading = false;
                if matches!(self.state.page, Page::Analytics(_)) {
                    self.state.analytics = Some(Vec::new());
                }
                if self.state.page.is_listing() {
                    self.media_list.set_cards(Vec::new());
                }
                self.state.status = Some((Severity::Error, message));
                true
            }

            AppMessage::MediaPatched(item) => {
                self.mutation_in_flight = false;
                self.state.media_item = Some(*item);
                self.state.status = Some((Severity::Info, "title updated".to_string()));
                true
            }

            AppMessage::MutationFinished(result) => {
                self.mutation_in_flight = false;
                self.state.status = Some(match result {
                    Ok(message) => (Severity::Info, message),
                    Err(message) => (Severity::Error, message),
                });
                true
            }
        }
    }

    // ── Key routing ───────────────────────────────────────────────────────────

    fn handle_key(&mut self, key: KeyEvent) -> Vec<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return vec![Action::Quit];
        }

        match self.state.input_mode {
            InputMode::Search => return self.header.handle_key(key, &self.state),
            InputMode::Upload => {
                return match self.prompt.handle_key(key) {
                    SearchAction::Confirmed(text) if !text.trim().is_empty() => {
                        vec![Action::Upload(PathBuf::from(text.trim()))]
                    }
                    SearchAction::Confirmed(_) | SearchAction::Cancelled => {
                        vec![Action::ClosePrompt]
                    }
                    _ => Vec::new(),
                };
            }
            InputMode::Edit => {
                return match self.prompt.handle_key(key) {
                    SearchAction::Confirmed(text) if !text.trim().is_empty() => {
                        vec![Action::SubmitEdit(text.trim().to_string())]
                    }
                    SearchAction::Confirmed(_) | SearchAction::Cancelled => {
                        vec![Action::ClosePrompt]
                    }
                    _ => Vec::new(),
                };
            }
            InputMode::Normal => {}
        }

        match key.code {
            KeyCode::Char('q') => vec![Action::Quit],
            KeyCode::Esc | KeyCode::Backspace => vec![Action::Back],
            KeyCode::Char('/') if self.state.page == Page::Home => vec![Action::OpenSearch],
            KeyCode::Char('n') if self.state.page == Page::Home => vec![Action::OpenUploadPrompt],
            KeyCode::Char('r') => vec![Action::Refresh],
            KeyCode::Char('1') if self.state.page.is_listing() => {
                vec![Action::Navigate(Page::Home)]
            }
            KeyCode::Char('2') if self.state.page.is_listing() => {
                vec![Action::Navigate(Page::Channels)]
            }
            KeyCode::Char('3') if self.state.page.is_listing() => {
                vec![Action::Navigate(Page::Playlists)]
            }
            _ => {
                let component: &mut dyn Component = if self.state.page.is_listing() {
                    &mut self.media_list
                } else if matches!(self.state.page, Page::Media(_)) {
                    &mut self.media_detail
                } else {
                    &mut self.analytics_panel
                };
                tracing::trace!("key {:?} -> {:?}", key.code, component.id());
                component.handle_key(key, &self.state)
            }
        }
    }

    // ── Action dispatch ───────────────────────────────────────────────────────

    fn dispatch(&mut self, action: Action) {
        match action {
            Action::Navigate(page) => self.navigate(page),
            Action::Back => self.navigate_back(),

            Action::OpenSearch => {
                self.header.open_search();
                self.state.input_mode = InputMode::Search;
            }
            Action::SubmitSearch(query) => {
                self.state.input_mode = InputMode::Normal;
                self.state.search_query = Some(query.clone());
                self.state.status = None;
                self.state.loading = true;
                self.generation += 1;
                self.spawn_search_fetch(self.generation, query);
            }
            Action::CloseSearch => {
                self.header.close_search();
                self.state.input_mode = InputMode::Normal;
                if self.state.search_query.take().is_some() {
                    // Drop the results section, back to the latest media.
                    self.navigate(Page::Home);
                }
            }

            Action::OpenAnalytics => {
                if let Page::Media(id) = self.state.page.clone() {
                    self.navigate(Page::Analytics(id));
                }
            }
            Action::CopyEmbedCode => match self.current_media_id() {
                Some(id) => {
                    let code = format!(
                        r#"<iframe src="{}/media/{}/embed" width="640" height="360" frameborder="0" allowfullscreen></iframe>"#,
                        self.state.base_url, id
                    );
                    self.copy_to_clipboard(code, "embed code copied");
                }
                None => self.state.status = Some((Severity::Info, "no media loaded".to_string())),
            },
            Action::CopySourceUrl => {
                let source_url = self
                    .state
                    .media_item
                    .as_ref()
                    .and_then(|item| item.sources.as_deref())
                    .and_then(media_api::sources::best_source)
                    .map(|source| source.url.clone());
                match source_url {
                    Some(url) => self.copy_to_clipboard(url, "source URL copied"),
                    None => self.state.status = Some((Severity::Info, "no downloadable source".to_string())),
                }
            }

            Action::OpenEditPrompt => {
                if self.mutation_in_flight {
                    self.state.status = Some((Severity::Info, "another change is still in flight".to_string()));
                    return;
                }
                let current_title = self
                    .state
                    .media_item
                    .as_ref()
                    .map(|item| item.title.clone())
                    .unwrap_or_default();
                self.prompt = SearchInput::new(">", "new title");
                self.prompt.set_value(&current_title);
                self.prompt.activate();
                self.state.input_mode = InputMode::Edit;
            }
            Action::SubmitEdit(title) => {
                self.state.input_mode = InputMode::Normal;
                if let Some(item) = self.state.media_item.clone() {
                    self.mutation_in_flight = true;
                    self.state.status = Some((Severity::Info, "saving…".to_string()));
                    self.spawn_retitle(item, title);
                }
            }

            Action::OpenUploadPrompt => {
                if self.mutation_in_flight {
                    self.state.status = Some((Severity::Info, "another change is still in flight".to_string()));
                    return;
                }
                self.prompt = SearchInput::new(">", "path to media file");
                self.prompt.activate();
                self.state.input_mode = InputMode::Upload;
            }
            Action::Upload(path) => {
                self.state.input_mode = InputMode::Normal;
                self.mutation_in_flight = true;
                self.state.status = Some((Severity::Info, format!("uploading {}…", path.display())));
                self.spawn_upload(path);
            }

            Action::ClosePrompt => {
                self.prompt.deactivate();
                self.state.input_mode = InputMode::Normal;
            }

            Action::Refresh => self.navigate(self.state.page.clone()),
            Action::ShowStatus(message) => self.state.status = Some((Severity::Info, message)),
            Action::Quit => self.should_quit = true,
        }
    }

    // ── Navigation & fetch orchestration ──────────────────────────────────────

    /// Switch pages and start the fetches the new page needs. Bumps the
    /// generation so in-flight results for the old page are discarded.
    fn navigate(&mut self, page: Page) {
        self.generation += 1;
        let generation = self.generation;
        self.state.status = None;
        self.state.listing_title = None;
        self.state.input_mode = InputMode::Normal;
        self.state.loading = true;

        match &page {
            Page::Home => {
                self.state.search_query = None;
                self.header.close_search();
                self.media_list.set_cards(Vec::new());
                self.spawn_home_fetch(generation);
            }
            Page::Channels => {
                self.media_list.set_cards(Vec::new());
                self.spawn_channels_fetch(generation);
            }
            Page::Playlists => {
                self.media_list.set_cards(Vec::new());
                self.spawn_playlists_fetch(generation);
            }
            Page::Channel(id) => {
                self.media_list.set_cards(Vec::new());
                self.spawn_channel_media_fetch(generation, id.clone());
            }
            Page::Playlist(id) => {
                self.media_list.set_cards(Vec::new());
                self.spawn_playlist_media_fetch(generation, id.clone());
            }
            Page::Media(id) => {
                self.state.analytics = None;
                if self.current_media_id().as_deref() != Some(id) {
                    self.state.media_item = None;
                    self.spawn_media_fetch(generation, id.clone());
                } else {
                    self.state.loading = false;
                }
            }
            Page::Analytics(id) => {
                self.state.analytics = None;
                if self.current_media_id().as_deref() != Some(id) {
                    self.state.media_item = None;
                    self.spawn_media_fetch(generation, id.clone());
                }
                self.spawn_analytics_fetch(generation, id.clone());
            }
        }

        self.state.page = page;
    }

    fn navigate_back(&mut self) {
        let target = match &self.state.page {
            Page::Home => return,
            Page::Channels | Page::Playlists => Page::Home,
            Page::Channel(_) => Page::Channels,
            Page::Playlist(_) => Page::Playlists,
            Page::Media(_) => Page::Home,
            Page::Analytics(id) => Page::Media(id.clone()),
        };
        self.navigate(target);
    }

    fn current_media_id(&self) -> Option<String> {
        self.state.media_item.as_ref().and_then(|item| item.id.clone())
    }

    fn copy_to_clipboard(&mut self, text: String, confirmation: &str) {
        if self.clipboard.is_none() {
            match arboard::Clipboard::new() {
                Ok(clipboard) => self.clipboard = Some(clipboard),
                Err(e) => warn!("clipboard unavailable: {}", e),
            }
        }
        self.state.status = Some(match self.clipboard.as_mut() {
            Some(clipboard) => match clipboard.set_text(text) {
                Ok(()) => (Severity::Info, confirmation.to_string()),
                Err(e) => (Severity::Error, format!("copy failed: {}", e)),
            },
            None => (Severity::Error, "clipboard unavailable".to_string()),
        });
    }

    // ── Fetch tasks ───────────────────────────────────────────────────────────

    fn spawn_profile_fetch(&self) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            match client.profile().await {
                Ok(profile) => {
                    let _ = tx.send(AppMessage::ProfileLoaded(Box::new(profile))).await;
                }
                // No profile just means the anonymous header; not fatal.
                Err(e) => warn!("could not load profile: {}", e),
            }
        });
    }

    fn spawn_home_fetch(&self, generation: u64) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        let count = self.latest_count as usize;
        tokio::spawn(async move {
            let query = ListQuery {
                search: None,
                ordering: Some("-publishedAt".to_string()),
            };
            match client.media_list(&query).await {
                Ok(list) => {
                    let cards = list.results.iter().take(count).map(media_item_card).collect();
                    let _ = tx.send(AppMessage::CardsLoaded(generation, None, cards)).await;
                }
                Err(e) => {
                    let _ = tx
                        .send(AppMessage::FetchFailed(generation, fetch_error("media", &e)))
                        .await;
                }
            }
        });
    }

    fn spawn_search_fetch(&self, generation: u64, search: String) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            match client.media_list(&ListQuery::search(search)).await {
                Ok(list) => {
                    let cards = list.results.iter().map(media_item_card).collect();
                    let _ = tx.send(AppMessage::CardsLoaded(generation, None, cards)).await;
                }
                Err(e) => {
                    let _ = tx
                        .send(AppMessage::FetchFailed(
                            generation,
                            fetch_error("search results", &e),
                        ))
                        .await;
                }
            }
        });
    }

    fn spawn_channels_fetch(&self, generation: u64) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            match client.channel_list(&ListQuery::default()).await {
                Ok(list) => {
                    let cards = list.results.iter().map(channel_card).collect();
                    let _ = tx.send(AppMessage::CardsLoaded(generation, None, cards)).await;
                }
                Err(e) => {
                    let _ = tx
                        .send(AppMessage::FetchFailed(generation, fetch_error("channels", &e)))
                        .await;
                }
            }
        });
    }

    fn spawn_playlists_fetch(&self, generation: u64) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            match client.playlist_list(&ListQuery::default()).await {
                Ok(list) => {
                    let cards = list.results.iter().map(playlist_card).collect();
                    let _ = tx.send(AppMessage::CardsLoaded(generation, None, cards)).await;
                }
                Err(e) => {
                    let _ = tx
                        .send(AppMessage::FetchFailed(
                            generation,
                            fetch_error("playlists", &e),
                        ))
                        .await;
                }
            }
        });
    }

    fn spawn_channel_media_fetch(&self, generation: u64, id: String) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = async {
                let channel = client.channel_get(&id).await?;
                let list = client
                    .media_list_at(&channel.media_url, &ListQuery::default())
                    .await?;
                Ok::<_, ApiError>((channel.title, list))
            }
            .await;
            match result {
                Ok((title, list)) => {
                    let cards = list.results.iter().map(media_item_card).collect();
                    let _ = tx
                        .send(AppMessage::CardsLoaded(generation, Some(title), cards))
                        .await;
                }
                Err(e) => {
                    let _ = tx
                        .send(AppMessage::FetchFailed(generation, fetch_error("channel", &e)))
                        .await;
                }
            }
        });
    }

    fn spawn_playlist_media_fetch(&self, generation: u64, id: String) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = async {
                let playlist = client.playlist_get(&id).await?;
                let list = client
                    .media_list_at(&playlist.media_url, &ListQuery::default())
                    .await?;
                Ok::<_, ApiError>((playlist.title, list))
            }
            .await;
            match result {
                Ok((title, list)) => {
                    let cards = list.results.iter().map(media_item_card).collect();
                    let _ = tx
                        .send(AppMessage::CardsLoaded(generation, Some(title), cards))
                        .await;
                }
                Err(e) => {
                    let _ = tx
                        .send(AppMessage::FetchFailed(
                            generation,
                            fetch_error("playlist", &e),
                        ))
                        .await;
                }
            }
        });
    }

    fn spawn_media_fetch(&self, generation: u64, id: String) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            match client.media_get(&id).await {
                Ok(item) => {
                    let _ = tx
                        .send(AppMessage::MediaLoaded(generation, Box::new(item)))
                        .await;
                }
                Err(e) => {
                    let _ = tx
                        .send(AppMessage::FetchFailed(generation, fetch_error("media", &e)))
                        .await;
                }
            }
        });
    }

    fn spawn_analytics_fetch(&self, generation: u64, id: String) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            match client.media_analytics(&id).await {
                Ok(events) => {
                    // Aggregation happens here, client-side: the wire rows
                    // are raw and may repeat days.
                    let series = aggregate_views(&events);
                    let _ = tx.send(AppMessage::AnalyticsLoaded(generation, series)).await;
                }
                Err(e) => {
                    let _ = tx
                        .send(AppMessage::FetchFailed(
                            generation,
                            fetch_error("analytics", &e),
                        ))
                        .await;
                }
            }
        });
    }

    fn spawn_retitle(&self, mut item: MediaItem, title: String) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            item.title = title;
            match client.media_patch(&item).await {
                Ok(updated) => {
                    let _ = tx.send(AppMessage::MediaPatched(Box::new(updated))).await;
                }
                Err(e) => {
                    let _ = tx
                        .send(AppMessage::MutationFinished(Err(fetch_error(
                            "title change",
                            &e,
                        ))))
                        .await;
                }
            }
        });
    }

    fn spawn_upload(&self, path: PathBuf) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = upload_pipeline(&client, &path)
                .await
                .map_err(|e| format!("upload failed: {:#}", e));
            let _ = tx.send(AppMessage::MutationFinished(result)).await;
        });
    }

    // ── Drawing ───────────────────────────────────────────────────────────────

    fn draw(&mut self, frame: &mut ratatui::Frame) {
        frame.render_widget(
            ratatui::widgets::Block::default()
                .style(ratatui::style::Style::default().bg(crate::theme::C_BG)),
            frame.area(),
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(frame.area());

        self.header.draw(frame, chunks[0], false, &self.state);

        if self.state.page.is_listing() {
            self.media_list.draw(frame, chunks[1], true, &self.state);
        } else if matches!(self.state.page, Page::Media(_)) {
            self.media_detail.draw(frame, chunks[1], true, &self.state);
        } else {
            self.analytics_panel.draw(frame, chunks[1], true, &self.state);
        }

        // The prompt takes over the status line while it is open.
        if matches!(self.state.input_mode, InputMode::Upload | InputMode::Edit) {
            self.prompt.draw(frame, chunks[2]);
        } else {
            status_bar::draw_status_bar(frame, chunks[2], &self.state);
        }
    }
}

/// One-line failure message for the status bar, preferring the API's own
/// `detail` text when it sent one.
fn fetch_error(what: &str, error: &ApiError) -> String {
    match error.detail() {
        Some(detail) => format!("could not load {}: {}", what, detail),
        None => format!("could not load {}: {}", what, error),
    }
}

/// Create a media item for a local file, fetch its upload target and stream
/// the file there. One user action, invoked at most once per prompt submit.
async fn upload_pipeline(client: &ApiClient, path: &Path) -> Result<String, anyhow::Error> {
    use anyhow::Context;

    let title = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("untitled")
        .to_string();

    // 1. Create the media item.
    let item = client
        .media_create(&MediaItemCreate {
            title,
            description: String::new(),
            language: String::new(),
            copyright: String::new(),
            tags: Vec::new(),
        })
        .await
        .context("creating media item")?;
    let id = item.id.clone().context("created media item has no id")?;
    info!("created media item {}", id);

    // 2. Fetch the upload target.
    let target = client
        .media_upload_get(&id)
        .await
        .context("fetching upload target")?;

    // 3. Stream the file.
    upload::send_file(&target, path)
        .await
        .context("sending file")?;

    Ok(format!("uploaded {} as media {}", path.display(), id))
}
