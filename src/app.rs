//! Application state and core logic

use crate::api::{ApiError, EventApi, FetchFailure};
use crate::payment::{PaymentGateway, PaymentOutcome};
use crate::state::forms::{field, finalize_submission};
use crate::state::{
    AppState, DetailSection, EventDefinition, EventLoad, EventPageState, Form, FormValues,
    LoadedEvent, LocationType, PaymentResolution, RedirectTimer, SubmissionOutcome,
    SubmissionPhase, SubmitOutcome, View, ViewParams,
};
use anyhow::Result;
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Results of background work, delivered back to the UI loop
#[derive(Debug)]
pub enum AppEvent {
    EventLoaded {
        event_id: String,
        result: Result<EventDefinition, ApiError>,
    },
    PaymentFinished(PaymentOutcome),
    SubmissionFinished(Result<(), ApiError>),
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the public event API
    api: Arc<dyn EventApi>,
    /// Gateway charging paid registrations
    gateway: Arc<dyn PaymentGateway>,
    /// Delay before leaving a submitted page
    redirect_delay: Duration,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(
        api: Arc<dyn EventApi>,
        gateway: Arc<dyn PaymentGateway>,
        redirect_delay: Duration,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            api,
            gateway,
            redirect_delay,
            events_tx,
            events_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Open the initial route without recording history
    pub fn open(&mut self, path: &str) {
        let (view, params) = View::from_path(path);
        self.enter(view, params);
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View, params: ViewParams) {
        self.state.view_history.push((
            self.state.current_view.clone(),
            self.state.view_params.clone(),
        ));
        self.enter(view, params);
    }

    /// Go back to previous view, quitting when there is none
    pub fn go_back(&mut self) {
        match self.state.view_history.pop() {
            Some((view, params)) => self.enter(view, params),
            None => self.quit = true,
        }
    }

    /// Switch views, tearing down the event page and its timers
    fn enter(&mut self, view: View, params: ViewParams) {
        self.state.event_page = None;
        self.state.status_message = None;

        let (view, params) = match (view, params.event_id.clone()) {
            (View::Event, Some(event_id)) => {
                self.state.event_page = Some(EventPageState::new(event_id.clone()));
                self.spawn_fetch(event_id);
                (View::Event, params)
            }
            // An event route without an id goes straight to not-found
            (View::Event, None) => (View::NotFound, ViewParams::default()),
            (view, _) => (view, params),
        };

        tracing::info!(path = %view.path(&params), "navigate");
        self.state.current_view = view;
        self.state.view_params = params;
    }

    fn spawn_fetch(&self, event_id: String) {
        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = api.fetch_event(&event_id).await;
            let _ = tx.send(AppEvent::EventLoaded { event_id, result });
        });
    }

    fn spawn_submission(&self, event_id: String, values: FormValues) {
        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = finalize_submission(api.as_ref(), &event_id, &values).await;
            let _ = tx.send(AppEvent::SubmissionFinished(result));
        });
    }

    /// Apply every background result that has arrived
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_app_event(event);
        }
    }

    /// Apply one background result
    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::EventLoaded { event_id, result } => self.on_event_loaded(event_id, result),
            AppEvent::PaymentFinished(outcome) => self.on_payment_finished(outcome),
            AppEvent::SubmissionFinished(result) => self.on_submission_finished(result),
        }
    }

    fn on_event_loaded(&mut self, event_id: String, result: Result<EventDefinition, ApiError>) {
        let Some(page) = self
            .state
            .event_page
            .as_mut()
            .filter(|page| page.event_id == event_id)
        else {
            tracing::debug!(%event_id, "dropping fetch result for a page no longer shown");
            return;
        };

        let failure = match result {
            Ok(event) => {
                page.load = EventLoad::Ready(Box::new(LoadedEvent::new(event)));
                return;
            }
            Err(err) => {
                tracing::warn!(%event_id, error = %err, "failed to load event");
                FetchFailure::from(&err)
            }
        };

        match failure {
            FetchFailure::NotFound => self.navigate(View::NotFound, ViewParams::default()),
            FetchFailure::Inline(message) => {
                if let Some(page) = self.state.event_page.as_mut() {
                    page.load = EventLoad::Failed(message);
                }
            }
        }
    }

    fn on_payment_finished(&mut self, outcome: PaymentOutcome) {
        let Some(page) = self.state.event_page.as_mut() else {
            return;
        };
        let event_id = page.event_id.clone();
        let Some(loaded) = page.loaded_mut() else {
            return;
        };

        match loaded.form.complete_payment(outcome) {
            PaymentResolution::Proceed(values) => self.spawn_submission(event_id, values),
            PaymentResolution::Declined(reason) => {
                self.push_error(format!("Payment failed: {reason}"));
            }
            PaymentResolution::Ignored => {}
        }
    }

    fn on_submission_finished(&mut self, result: Result<(), ApiError>) {
        let delay = self.redirect_delay;
        let Some(loaded) = self.state.loaded_event_mut() else {
            return;
        };

        match loaded.form.finish_submission(result) {
            SubmissionOutcome::Submitted => {
                loaded.redirect = Some(RedirectTimer::new(View::Success, delay));
                self.state.status_message = Some("Registration submitted".to_string());
            }
            SubmissionOutcome::Failed(message) => self.push_error(message),
            SubmissionOutcome::Ignored => {}
        }
    }

    /// Periodic work: countdown refresh and the post-submission redirect
    pub fn tick(&mut self) {
        let now = Instant::now();
        let redirect = self.state.loaded_event_mut().and_then(|loaded| {
            loaded.countdown.tick(Utc::now());
            loaded
                .redirect
                .as_ref()
                .filter(|r| r.is_due(now))
                .map(|r| r.target.clone())
        });

        if let Some(target) = redirect {
            self.navigate(target, ViewParams::default());
        }
    }

    /// Validate and submit the registration form
    pub fn submit(&mut self) {
        let Some(page) = self.state.event_page.as_mut() else {
            return;
        };
        let event_id = page.event_id.clone();
        let Some(loaded) = page.loaded_mut() else {
            return;
        };

        match loaded.form.submit(&loaded.event) {
            SubmitOutcome::Ready(values) => self.spawn_submission(event_id, values),
            SubmitOutcome::Invalid { errors } => {
                let first_invalid = loaded
                    .event
                    .fields
                    .iter()
                    .position(|f| loaded.form.errors.contains_key(&f.id));
                if let Some(index) = first_invalid {
                    loaded.form.set_active_field(index);
                }
                self.state.status_message = Some(format!(
                    "{errors} required field{} missing",
                    if errors == 1 { "" } else { "s" }
                ));
            }
            SubmitOutcome::AwaitingPayment { amount } => {
                tracing::info!(%event_id, amount, "awaiting payment");
            }
            SubmitOutcome::Ignored => {}
        }
    }

    /// Start charging the selected payment method
    pub fn confirm_payment(&mut self) {
        let Some(loaded) = self.state.loaded_event_mut() else {
            return;
        };
        let Some((amount, method)) = loaded.form.confirm_payment() else {
            return;
        };

        let gateway = Arc::clone(&self.gateway);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = gateway.charge(amount, method).await;
            let _ = tx.send(AppEvent::PaymentFinished(outcome));
        });
    }

    /// Close the payment dialog
    pub fn cancel_payment(&mut self) {
        if let Some(loaded) = self.state.loaded_event_mut() {
            loaded.form.cancel_payment();
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        match self.state.current_view {
            View::Event => self.handle_event_key(key),
            View::Success | View::Expired => match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => self.quit = true,
                _ => {}
            },
            View::NotFound => match key.code {
                KeyCode::Char('b') | KeyCode::Backspace => self.go_back(),
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => self.quit = true,
                _ => {}
            },
        }
    }

    /// Handle keys on the event page
    fn handle_event_key(&mut self, key: KeyEvent) {
        let phase = match self.state.event_page.as_ref().map(|p| &p.load) {
            Some(EventLoad::Ready(loaded)) => loaded.form.phase(),
            Some(EventLoad::Failed(_)) => {
                // "Go Back" leads to the site root, which has no view of its own
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                    let (view, params) = View::from_path("/");
                    self.navigate(view, params);
                }
                return;
            }
            _ => return,
        };

        match phase {
            SubmissionPhase::AwaitingPayment => self.handle_payment_key(key),
            SubmissionPhase::Editing => self.handle_form_key(key),
            SubmissionPhase::Submitting | SubmissionPhase::Submitted => {}
        }
    }

    /// Handle keys in the payment dialog
    fn handle_payment_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.cancel_payment(),
            KeyCode::Enter => self.confirm_payment(),
            KeyCode::Left | KeyCode::Up | KeyCode::Right | KeyCode::Down => {
                let forward = matches!(key.code, KeyCode::Right | KeyCode::Down);
                if let Some(loaded) = self.state.loaded_event_mut() {
                    if let Some(method) = loaded.form.payment().map(|p| p.method) {
                        let next = if forward { method.next() } else { method.prev() };
                        loaded.form.select_payment_method(next);
                    }
                }
            }
            _ => {}
        }
    }

    /// Handle keys while editing the registration form
    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit();
                return;
            }
            KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_contact();
                return;
            }
            KeyCode::F(n @ 1..=3) => {
                let section = match n {
                    1 => DetailSection::About,
                    2 => DetailSection::Contact,
                    _ => DetailSection::Location,
                };
                if let Some(loaded) = self.state.loaded_event_mut() {
                    loaded.sections.toggle(section);
                }
                return;
            }
            _ => {}
        }

        let Some(loaded) = self.state.loaded_event_mut() else {
            return;
        };
        let on_button_row = loaded.form.is_buttons_row_active();

        match key.code {
            KeyCode::Tab | KeyCode::Down => loaded.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => loaded.form.prev_field(),
            KeyCode::Enter if on_button_row => self.submit(),
            KeyCode::Enter => loaded.form.next_field(),
            _ if on_button_row => {}
            _ => edit_active_field(loaded, key),
        }
    }

    /// Copy the contact phone to the clipboard, or the map link when only
    /// the location section is open
    fn copy_contact(&mut self) {
        let Some(loaded) = self.state.loaded_event() else {
            return;
        };
        let event = &loaded.event;
        let sections = loaded.sections;
        let text = match (event.location(), event.location_type) {
            (Some(url), LocationType::Url) if sections.location && !sections.contact => {
                url.to_string()
            }
            _ => event.contact_phone.clone(),
        };
        if text.is_empty() {
            return;
        }

        match self.copy_to_clipboard(&text) {
            Ok(()) => self.state.status_message = Some(format!("Copied {text}")),
            Err(err) => {
                tracing::warn!(error = %err, "clipboard unavailable");
                self.push_error(format!("Could not copy to clipboard: {err}"));
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

/// Apply a typing, deletion or option-cycling key to the focused field
fn edit_active_field(loaded: &mut LoadedEvent, key: KeyEvent) {
    let Some(field_id) = loaded.form.active_field_id().map(str::to_string) else {
        return;
    };
    let Some(field) = loaded.event.field(&field_id) else {
        return;
    };
    let current = loaded.form.value(&field_id);

    let next = match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            field::push_char(field, current, c)
        }
        KeyCode::Backspace => field::pop_char(field, current),
        KeyCode::Left => field::cycle_option(field, current, false),
        KeyCode::Right => field::cycle_option(field, current, true),
        _ => None,
    };

    if let Some(value) = next {
        loaded.form.on_field_change(&field_id, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockEventApi;
    use crate::payment::{MockPaymentGateway, PaymentMethod};
    use crate::state::{Category, FieldDefinition, FieldKind};
    use pretty_assertions::assert_eq;

    fn test_event(category: Category) -> EventDefinition {
        EventDefinition {
            id: "evt-7".to_string(),
            name: "Hack Night".to_string(),
            description: "# Welcome\n- bring a laptop".to_string(),
            category,
            amount: (category == Category::Paid).then_some(300.0),
            expiry_date: Utc::now() + chrono::Duration::days(3),
            contact_name: "Dev".to_string(),
            contact_phone: "+91 90000 00000".to_string(),
            location: Some("Community Hall".to_string()),
            location_type: LocationType::Address,
            fields: vec![
                FieldDefinition {
                    id: "name".to_string(),
                    label: "Name".to_string(),
                    kind: FieldKind::Text,
                    required: true,
                    options: Vec::new(),
                },
                FieldDefinition {
                    id: "track".to_string(),
                    label: "Track".to_string(),
                    kind: FieldKind::Dropdown,
                    required: true,
                    options: vec!["Web".to_string(), "Systems".to_string()],
                },
            ],
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn create_app(api: MockEventApi, gateway: MockPaymentGateway) -> App {
        App::new(Arc::new(api), Arc::new(gateway), Duration::ZERO)
    }

    fn api_serving(event: EventDefinition) -> MockEventApi {
        let mut api = MockEventApi::new();
        api.expect_fetch_event()
            .returning(move |_| Ok(event.clone()));
        api
    }

    /// Open the event route and apply the fetch result
    async fn open_event(app: &mut App) {
        app.open("/event/evt-7");
        let event = app.events_rx.recv().await.unwrap();
        app.handle_app_event(event);
    }

    /// Fill every required field through key events
    fn fill_form(app: &mut App) {
        for c in "Ravi".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Right));
    }

    fn phase(app: &App) -> SubmissionPhase {
        app.state.loaded_event().unwrap().form.phase()
    }

    mod routing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_missing_id_redirects_to_not_found() {
            let mut api = MockEventApi::new();
            api.expect_fetch_event().times(0);
            let mut app = create_app(api, MockPaymentGateway::new());

            app.open("/event/");

            assert_eq!(app.state.current_view, View::NotFound);
            assert!(app.state.event_page.is_none());
        }

        #[tokio::test]
        async fn test_unknown_path_is_not_found() {
            let mut app = create_app(MockEventApi::new(), MockPaymentGateway::new());
            app.open("/somewhere/else");
            assert_eq!(app.state.current_view, View::NotFound);
        }

        #[tokio::test]
        async fn test_go_back_without_history_quits() {
            let mut app = create_app(MockEventApi::new(), MockPaymentGateway::new());
            app.open("/404");
            app.handle_key(key(KeyCode::Char('b')));
            assert!(app.should_quit());
        }
    }

    mod loading {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_fetch_success_builds_form() {
            let mut app = create_app(
                api_serving(test_event(Category::Free)),
                MockPaymentGateway::new(),
            );
            open_event(&mut app).await;

            let loaded = app.state.loaded_event().unwrap();
            assert_eq!(loaded.event.name, "Hack Night");
            assert_eq!(loaded.form.phase(), SubmissionPhase::Editing);
            assert!(!loaded.countdown.current().expired);
        }

        #[tokio::test]
        async fn test_fetch_404_navigates_without_inline_error() {
            let mut api = MockEventApi::new();
            api.expect_fetch_event()
                .times(1)
                .returning(|_| Err(ApiError::NotFound));
            let mut app = create_app(api, MockPaymentGateway::new());

            open_event(&mut app).await;

            assert_eq!(app.state.current_view, View::NotFound);
            assert!(app.state.event_page.is_none());
            assert!(!app.state.has_errors());
        }

        #[tokio::test]
        async fn test_fetch_closed_shows_inline_message() {
            let mut api = MockEventApi::new();
            api.expect_fetch_event()
                .returning(|_| Err(ApiError::Closed { status: 410 }));
            let mut app = create_app(api, MockPaymentGateway::new());

            open_event(&mut app).await;

            assert_eq!(app.state.current_view, View::Event);
            let page = app.state.event_page.as_ref().unwrap();
            assert!(
                matches!(&page.load, EventLoad::Failed(m) if m == "This event is closed or expired")
            );
        }

        #[tokio::test]
        async fn test_fetch_other_failure_is_generic() {
            let mut api = MockEventApi::new();
            api.expect_fetch_event().returning(|_| {
                Err(ApiError::Status {
                    status: 500,
                    message: None,
                })
            });
            let mut app = create_app(api, MockPaymentGateway::new());

            open_event(&mut app).await;

            let page = app.state.event_page.as_ref().unwrap();
            assert!(matches!(&page.load, EventLoad::Failed(m) if m == "Something went wrong"));
        }

        #[tokio::test]
        async fn test_stale_fetch_result_is_dropped() {
            let mut app = create_app(MockEventApi::new(), MockPaymentGateway::new());
            app.open("/success");
            app.handle_app_event(AppEvent::EventLoaded {
                event_id: "evt-7".to_string(),
                result: Ok(test_event(Category::Free)),
            });
            assert_eq!(app.state.current_view, View::Success);
            assert!(app.state.event_page.is_none());
        }
    }

    mod editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_typing_and_dropdown_cycling() {
            let mut app = create_app(
                api_serving(test_event(Category::Free)),
                MockPaymentGateway::new(),
            );
            open_event(&mut app).await;

            fill_form(&mut app);
            app.handle_key(key(KeyCode::Right));

            let form = &app.state.loaded_event().unwrap().form;
            assert_eq!(form.value("name"), "Ravi");
            assert_eq!(form.value("track"), "Systems");
        }

        #[tokio::test]
        async fn test_invalid_submit_focuses_first_error() {
            let mut api = api_serving(test_event(Category::Free));
            api.expect_submit_event().times(0);
            let mut app = create_app(api, MockPaymentGateway::new());
            open_event(&mut app).await;
            app.handle_key(key(KeyCode::Tab));

            app.handle_key(ctrl('s'));

            let form = &app.state.loaded_event().unwrap().form;
            assert_eq!(form.errors.len(), 2);
            assert_eq!(form.active_field_id(), Some("name"));
            assert_eq!(form.phase(), SubmissionPhase::Editing);
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("2 required fields missing")
            );
        }

        #[tokio::test]
        async fn test_section_toggle() {
            let mut app = create_app(
                api_serving(test_event(Category::Free)),
                MockPaymentGateway::new(),
            );
            open_event(&mut app).await;

            app.handle_key(key(KeyCode::F(2)));

            let sections = app.state.loaded_event().unwrap().sections;
            assert!(sections.is_expanded(DetailSection::Contact));
            assert!(!sections.is_expanded(DetailSection::About));
        }
    }

    mod free_submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_submit_then_redirect_to_success() {
            let mut api = api_serving(test_event(Category::Free));
            api.expect_submit_event()
                .withf(|id, values| id == "evt-7" && values["name"] == "Ravi")
                .times(1)
                .returning(|_, _| Ok(()));
            let mut app = create_app(api, MockPaymentGateway::new());
            open_event(&mut app).await;
            fill_form(&mut app);

            app.submit();
            assert_eq!(phase(&app), SubmissionPhase::Submitting);

            let event = app.events_rx.recv().await.unwrap();
            app.handle_app_event(event);
            assert_eq!(phase(&app), SubmissionPhase::Submitted);
            assert!(app.state.loaded_event().unwrap().redirect.is_some());

            app.tick();
            assert_eq!(app.state.current_view, View::Success);
            assert!(app.state.event_page.is_none());
        }

        #[tokio::test]
        async fn test_double_submit_sends_once() {
            let mut api = api_serving(test_event(Category::Free));
            api.expect_submit_event()
                .times(1)
                .returning(|_, _| Ok(()));
            let mut app = create_app(api, MockPaymentGateway::new());
            open_event(&mut app).await;
            fill_form(&mut app);

            app.submit();
            app.submit();

            let event = app.events_rx.recv().await.unwrap();
            app.handle_app_event(event);
            assert_eq!(phase(&app), SubmissionPhase::Submitted);
            assert!(app.events_rx.try_recv().is_err());
        }

        #[tokio::test]
        async fn test_conflict_alerts_and_keeps_values() {
            let mut api = api_serving(test_event(Category::Free));
            api.expect_submit_event()
                .returning(|_, _| Err(ApiError::Conflict));
            let mut app = create_app(api, MockPaymentGateway::new());
            open_event(&mut app).await;
            fill_form(&mut app);

            app.submit();
            let event = app.events_rx.recv().await.unwrap();
            app.handle_app_event(event);

            assert_eq!(phase(&app), SubmissionPhase::Editing);
            assert_eq!(
                app.state.current_error(),
                Some("You have already submitted this form")
            );
            let form = &app.state.loaded_event().unwrap().form;
            assert_eq!(form.value("name"), "Ravi");
            assert_eq!(form.value("track"), "Web");
        }

        #[tokio::test]
        async fn test_leaving_page_cancels_redirect() {
            let mut api = api_serving(test_event(Category::Free));
            api.expect_submit_event().returning(|_, _| Ok(()));
            let mut app = App::new(
                Arc::new(api),
                Arc::new(MockPaymentGateway::new()),
                Duration::from_secs(60),
            );
            open_event(&mut app).await;
            fill_form(&mut app);
            app.submit();
            let event = app.events_rx.recv().await.unwrap();
            app.handle_app_event(event);

            app.navigate(View::NotFound, ViewParams::default());
            app.tick();

            assert_eq!(app.state.current_view, View::NotFound);
        }
    }

    mod paid_submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_paid_event_waits_for_payment() {
            let mut api = api_serving(test_event(Category::Paid));
            api.expect_submit_event().times(0);
            let mut gateway = MockPaymentGateway::new();
            gateway.expect_charge().times(0);
            let mut app = create_app(api, gateway);
            open_event(&mut app).await;
            fill_form(&mut app);

            app.submit();

            assert_eq!(phase(&app), SubmissionPhase::AwaitingPayment);
            let payment = app.state.loaded_event().unwrap().form.payment().cloned();
            assert_eq!(payment.map(|p| p.amount), Some(300.0));
        }

        #[tokio::test]
        async fn test_cancel_payment_with_escape() {
            let mut api = api_serving(test_event(Category::Paid));
            api.expect_submit_event().times(0);
            let mut app = create_app(api, MockPaymentGateway::new());
            open_event(&mut app).await;
            fill_form(&mut app);
            app.submit();

            app.handle_key(key(KeyCode::Esc));

            assert_eq!(phase(&app), SubmissionPhase::Editing);
            assert_eq!(
                app.state.loaded_event().unwrap().form.value("name"),
                "Ravi"
            );
        }

        #[tokio::test]
        async fn test_confirmed_payment_submits() {
            let mut api = api_serving(test_event(Category::Paid));
            api.expect_submit_event()
                .times(1)
                .returning(|_, _| Ok(()));
            let mut gateway = MockPaymentGateway::new();
            gateway
                .expect_charge()
                .withf(|amount, method| *amount == 300.0 && *method == PaymentMethod::Upi)
                .times(1)
                .returning(|_, _| PaymentOutcome::Approved);
            let mut app = create_app(api, gateway);
            open_event(&mut app).await;
            fill_form(&mut app);
            app.submit();

            app.handle_key(key(KeyCode::Right));
            app.handle_key(key(KeyCode::Enter));
            assert!(app
                .state
                .loaded_event()
                .unwrap()
                .form
                .payment()
                .is_some_and(|p| p.processing));

            let paid = app.events_rx.recv().await.unwrap();
            app.handle_app_event(paid);
            assert_eq!(phase(&app), SubmissionPhase::Submitting);

            let submitted = app.events_rx.recv().await.unwrap();
            app.handle_app_event(submitted);
            assert_eq!(phase(&app), SubmissionPhase::Submitted);
        }

        #[tokio::test]
        async fn test_declined_payment_alerts() {
            let mut api = api_serving(test_event(Category::Paid));
            api.expect_submit_event().times(0);
            let mut gateway = MockPaymentGateway::new();
            gateway
                .expect_charge()
                .returning(|_, _| PaymentOutcome::Declined("Insufficient funds".to_string()));
            let mut app = create_app(api, gateway);
            open_event(&mut app).await;
            fill_form(&mut app);
            app.submit();
            app.confirm_payment();

            let paid = app.events_rx.recv().await.unwrap();
            app.handle_app_event(paid);

            assert_eq!(phase(&app), SubmissionPhase::Editing);
            assert_eq!(
                app.state.current_error(),
                Some("Payment failed: Insufficient funds")
            );
        }
    }
}
