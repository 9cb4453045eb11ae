//! Application state and the reactions to user actions and API responses.
//!
//! `App` is owned by the event loop and only ever mutated there. Calls to
//! the [`QuizApi`] run as spawned tasks that report back through the event
//! channel; responses addressed to a screen the user already left are
//! dropped by comparing request tickets.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use uuid::Uuid;

use crate::api::{ApiResult, QuizApi};
use crate::form::QuizForm;
use crate::models::{NewResult, Question, Quiz, QuizDraft, QuizResult};
use crate::optimistic::Optimistic;
use crate::session::SolveSession;
use crate::sort::{HistorySort, ListSort};
use crate::timer::{Countdown, TICK};

/// Events delivered to the event loop besides terminal input.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// One second of the solver countdown elapsed. `countdown` identifies
    /// which countdown of the solver screen sent it.
    Tick { ticket: u64, countdown: u64 },
    /// An API call completed.
    Api { ticket: u64, response: ApiResponse },
}

#[derive(Debug, Clone)]
pub enum ApiResponse {
    Quizzes(ApiResult<Vec<Quiz>>),
    QuizLoaded(ApiResult<Option<Quiz>>),
    Results(ApiResult<Vec<QuizResult>>),
    QuizCreated(ApiResult<Quiz>),
    QuizUpdated(ApiResult<Option<Quiz>>),
    QuizDeleted(ApiResult<()>),
    ResultRecorded(ApiResult<QuizResult>),
}

impl ApiResponse {
    /// Loads made for one screen; the rest update shared caches.
    fn is_screen_bound(&self) -> bool {
        matches!(self, ApiResponse::QuizLoaded(_) | ApiResponse::Results(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct ListScreen {
    pub sort: ListSort,
    pub selected: usize,
    /// Quiz awaiting delete confirmation.
    pub confirm_delete: Option<Uuid>,
}

#[derive(Debug)]
pub enum FormScreen {
    Loading,
    Missing,
    Ready(QuizForm),
}

#[derive(Debug)]
pub enum SolveState {
    Loading,
    Missing,
    Active(SolveSession),
}

#[derive(Debug)]
pub struct SolveScreen {
    pub state: SolveState,
    pub selected: usize,
    countdown: Option<Countdown>,
    /// Bumped on every countdown start; ticks from earlier ones are ignored.
    countdown_generation: u64,
}

impl SolveScreen {
    pub fn session(&self) -> Option<&SolveSession> {
        match &self.state {
            SolveState::Active(session) => Some(session),
            _ => None,
        }
    }

    pub fn countdown_running(&self) -> bool {
        self.countdown.is_some()
    }
}

#[derive(Debug)]
pub struct HistoryScreen {
    pub sort: HistorySort,
    pub scroll: usize,
    pub loading: bool,
}

#[derive(Debug)]
pub enum Screen {
    List(ListScreen),
    Form(FormScreen),
    Solve(SolveScreen),
    History(HistoryScreen),
}

pub struct App {
    pub screen: Screen,
    pub should_quit: bool,
    status: Option<Status>,
    quizzes: Optimistic<Vec<Quiz>>,
    quizzes_loaded: bool,
    results: Vec<QuizResult>,
    api: Arc<dyn QuizApi>,
    events: mpsc::UnboundedSender<AppEvent>,
    quiz_duration: Duration,
    ticket: u64,
}

impl App {
    pub fn new(
        api: Arc<dyn QuizApi>,
        events: mpsc::UnboundedSender<AppEvent>,
        quiz_duration: Duration,
    ) -> Self {
        Self {
            screen: Screen::List(ListScreen::default()),
            should_quit: false,
            status: None,
            quizzes: Optimistic::default(),
            quizzes_loaded: false,
            results: Vec::new(),
            api,
            events,
            quiz_duration,
            ticket: 0,
        }
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn quizzes(&self) -> &[Quiz] {
        self.quizzes.current()
    }

    pub fn quizzes_loaded(&self) -> bool {
        self.quizzes_loaded
    }

    pub fn quizzes_pending(&self) -> bool {
        self.quizzes.is_pending()
    }

    pub fn results(&self) -> &[QuizResult] {
        &self.results
    }

    pub fn quiz_title(&self, id: Uuid) -> Option<&str> {
        self.quizzes()
            .iter()
            .find(|q| q.id == id)
            .map(|q| q.title.as_str())
    }

    /// Quizzes in the order the list screen shows them.
    pub fn sorted_quizzes(&self) -> Vec<&Quiz> {
        let sort = match &self.screen {
            Screen::List(list) => list.sort,
            _ => ListSort::Default,
        };
        sort.apply(self.quizzes())
    }

    pub fn sorted_results(&self) -> Vec<&QuizResult> {
        let sort = match &self.screen {
            Screen::History(history) => history.sort,
            _ => HistorySort::Date,
        };
        sort.apply(&self.results)
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // Navigation.

    pub fn open_list(&mut self) {
        let selected = match &self.screen {
            Screen::List(list) => list.selected,
            _ => 0,
        };
        let sort = match &self.screen {
            Screen::List(list) => list.sort,
            _ => ListSort::Default,
        };
        self.switch(Screen::List(ListScreen {
            sort,
            selected,
            confirm_delete: None,
        }));
        self.refresh_quizzes();
    }

    pub fn open_create(&mut self) {
        self.switch(Screen::Form(FormScreen::Ready(QuizForm::create())));
    }

    pub fn open_edit(&mut self, id: Uuid) {
        self.switch(Screen::Form(FormScreen::Loading));
        self.load_quiz(id);
    }

    pub fn open_solve(&mut self, id: Uuid) {
        self.switch(Screen::Solve(SolveScreen {
            state: SolveState::Loading,
            selected: 0,
            countdown: None,
            countdown_generation: 0,
        }));
        self.load_quiz(id);
    }

    pub fn open_history(&mut self) {
        self.switch(Screen::History(HistoryScreen {
            sort: HistorySort::default(),
            scroll: 0,
            loading: true,
        }));
        let ticket = self.ticket;
        self.request(ticket, |api| async move {
            ApiResponse::Results(api.fetch_results().await)
        });
        self.refresh_quizzes();
    }

    fn switch(&mut self, screen: Screen) {
        self.ticket += 1;
        self.status = None;
        self.screen = screen;
    }

    // Quiz list.

    pub fn list_move(&mut self, delta: isize) {
        let count = self.quizzes().len();
        if let Screen::List(list) = &mut self.screen {
            list.selected = list
                .selected
                .saturating_add_signed(delta)
                .min(count.saturating_sub(1));
        }
    }

    pub fn list_cycle_sort(&mut self) {
        if let Screen::List(list) = &mut self.screen {
            list.sort = list.sort.next();
        }
    }

    /// Id of the highlighted quiz, skipping quizzes that are not saved yet.
    pub fn selected_quiz_id(&self) -> Option<Uuid> {
        let Screen::List(list) = &self.screen else {
            return None;
        };
        self.sorted_quizzes()
            .get(list.selected)
            .map(|q| q.id)
            .filter(|id| !id.is_nil())
    }

    pub fn list_request_delete(&mut self) {
        let selected = self.selected_quiz_id();
        if let Screen::List(list) = &mut self.screen {
            list.confirm_delete = selected;
        }
    }

    pub fn list_cancel_delete(&mut self) {
        if let Screen::List(list) = &mut self.screen {
            list.confirm_delete = None;
        }
    }

    pub fn list_confirm_delete(&mut self) {
        let Screen::List(list) = &mut self.screen else {
            return;
        };
        let Some(id) = list.confirm_delete.take() else {
            return;
        };

        self.quizzes.apply(|quizzes| quizzes.retain(|q| q.id != id));
        self.list_move(0);
        self.request(0, move |api| async move {
            ApiResponse::QuizDeleted(api.delete_quiz(id).await)
        });
    }

    fn refresh_quizzes(&mut self) {
        self.request(0, |api| async move {
            ApiResponse::Quizzes(api.fetch_quizzes().await)
        });
    }

    fn load_quiz(&mut self, id: Uuid) {
        let ticket = self.ticket;
        self.request(ticket, move |api| async move {
            ApiResponse::QuizLoaded(api.fetch_quiz(id).await)
        });
    }

    // Quiz form.

    pub fn form_mut(&mut self) -> Option<&mut QuizForm> {
        match &mut self.screen {
            Screen::Form(FormScreen::Ready(form)) => Some(form),
            _ => None,
        }
    }

    /// Validate the form and save it. On a validation failure the form
    /// stays open with the reason shown and nothing is sent.
    pub fn submit_form(&mut self) {
        let Some(form) = self.form_mut() else {
            return;
        };
        let editing = form.editing();
        let draft = match form.submit() {
            Ok(draft) => draft,
            Err(e) => {
                self.set_status(StatusKind::Error, e.to_string());
                return;
            }
        };

        match editing {
            Some(id) => {
                let tentative = tentative_quiz(id, &draft);
                self.quizzes.apply(|quizzes| {
                    if let Some(slot) = quizzes.iter_mut().find(|q| q.id == id) {
                        *slot = tentative;
                    }
                });
                self.request(0, move |api| async move {
                    ApiResponse::QuizUpdated(api.update_quiz(id, draft).await)
                });
            }
            None => {
                let tentative = tentative_quiz(Uuid::nil(), &draft);
                self.quizzes.apply(|quizzes| quizzes.push(tentative));
                self.request(0, move |api| async move {
                    ApiResponse::QuizCreated(api.add_quiz(draft).await)
                });
            }
        }
        self.open_list();
    }

    // Solver.

    pub fn solve_mut(&mut self) -> Option<&mut SolveScreen> {
        match &mut self.screen {
            Screen::Solve(solve) => Some(solve),
            _ => None,
        }
    }

    pub fn solve_move(&mut self, delta: isize) {
        if let Some(solve) = self.solve_mut() {
            let count = solve
                .session()
                .and_then(|s| s.current_question())
                .map_or(0, |q| q.answers.len());
            solve.selected = solve
                .selected
                .saturating_add_signed(delta)
                .min(count.saturating_sub(1));
        }
    }

    pub fn solve_answer(&mut self) {
        self.with_session(|session, selected| {
            let before = session.current_index();
            session.answer(*selected);
            if session.current_index() != before {
                *selected = 0;
            }
            None
        });
    }

    pub fn solve_request_finish(&mut self) {
        self.with_session(|session, _| {
            session.request_finish();
            None
        });
    }

    pub fn solve_confirm_finish(&mut self) {
        self.with_session(|session, _| session.confirm_finish());
    }

    pub fn solve_cancel_finish(&mut self) {
        self.with_session(|session, _| {
            session.cancel_finish();
            None
        });
    }

    fn on_tick(&mut self, countdown: u64) {
        let current = matches!(
            &self.screen,
            Screen::Solve(solve) if solve.countdown.is_some() && solve.countdown_generation == countdown
        );
        if !current {
            log::debug!("Discarding tick from a stopped countdown");
            return;
        }
        self.with_session(|session, _| session.tick());
    }

    /// Run a session transition, record its result if it produced one, and
    /// keep the countdown running exactly while the session is in progress.
    fn with_session<F>(&mut self, transition: F)
    where
        F: FnOnce(&mut SolveSession, &mut usize) -> Option<NewResult>,
    {
        let ticket = self.ticket;
        let events = self.events.clone();
        let Screen::Solve(solve) = &mut self.screen else {
            return;
        };
        let SolveState::Active(session) = &mut solve.state else {
            return;
        };

        let finished = transition(session, &mut solve.selected);

        if session.is_in_progress() {
            if solve.countdown.is_none() {
                solve.countdown_generation += 1;
                solve.countdown = Some(Countdown::start(
                    TICK,
                    events,
                    AppEvent::Tick {
                        ticket,
                        countdown: solve.countdown_generation,
                    },
                ));
            }
        } else if let Some(countdown) = solve.countdown.take() {
            countdown.stop();
        }

        if let Some(result) = finished {
            self.record_result(result);
        }
    }

    fn record_result(&mut self, result: NewResult) {
        log::info!(
            "Quiz {} finished with score {:.2}",
            result.quiz_id,
            result.score
        );
        self.request(0, move |api| async move {
            ApiResponse::ResultRecorded(api.add_result(result).await)
        });
    }

    // History.

    pub fn history_cycle_sort(&mut self) {
        if let Screen::History(history) = &mut self.screen {
            history.sort = history.sort.next();
            history.scroll = 0;
        }
    }

    pub fn history_scroll(&mut self, delta: isize) {
        let count = self.results.len();
        if let Screen::History(history) = &mut self.screen {
            history.scroll = history
                .scroll
                .saturating_add_signed(delta)
                .min(count.saturating_sub(1));
        }
    }

    // Events.

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick { ticket, countdown } => {
                if ticket == self.ticket {
                    self.on_tick(countdown);
                }
            }
            AppEvent::Api { ticket, response } => {
                if response.is_screen_bound() && ticket != self.ticket {
                    log::debug!("Discarding response for a screen that was left");
                    return;
                }
                self.handle_response(response);
            }
        }
    }

    fn handle_response(&mut self, response: ApiResponse) {
        match response {
            ApiResponse::Quizzes(Ok(quizzes)) => {
                self.quizzes.confirm(quizzes);
                self.quizzes_loaded = true;
                self.list_move(0);
            }
            ApiResponse::QuizLoaded(Ok(quiz)) => self.quiz_loaded(quiz),
            ApiResponse::Results(Ok(results)) => {
                self.results = results;
                if let Screen::History(history) = &mut self.screen {
                    history.loading = false;
                }
            }
            ApiResponse::QuizCreated(Ok(quiz)) => {
                log::info!("Created quiz {} \"{}\"", quiz.id, quiz.title);
                self.set_status(StatusKind::Info, format!("Quiz \"{}\" created.", quiz.title));
                self.settle_quizzes();
            }
            ApiResponse::QuizUpdated(Ok(Some(quiz))) => {
                log::info!("Updated quiz {}", quiz.id);
                self.set_status(StatusKind::Info, format!("Quiz \"{}\" saved.", quiz.title));
                self.settle_quizzes();
            }
            ApiResponse::QuizUpdated(Ok(None)) => {
                log::warn!("Tried to update a quiz that no longer exists");
                self.quizzes.revert();
                self.set_status(StatusKind::Error, "Quiz no longer exists.");
            }
            ApiResponse::QuizDeleted(Ok(())) => self.settle_quizzes(),
            ApiResponse::ResultRecorded(Ok(result)) => self.results.push(result),
            ApiResponse::QuizCreated(Err(e))
            | ApiResponse::QuizUpdated(Err(e))
            | ApiResponse::QuizDeleted(Err(e)) => {
                log::error!("Quiz change rejected: {}", e);
                self.quizzes.revert();
                self.list_move(0);
                self.set_status(StatusKind::Error, e.to_string());
            }
            ApiResponse::Quizzes(Err(e))
            | ApiResponse::QuizLoaded(Err(e))
            | ApiResponse::Results(Err(e))
            | ApiResponse::ResultRecorded(Err(e)) => {
                log::error!("API call failed: {}", e);
                self.set_status(StatusKind::Error, e.to_string());
            }
        }
    }

    fn quiz_loaded(&mut self, quiz: Option<Quiz>) {
        let duration = self.quiz_duration;
        match &mut self.screen {
            Screen::Form(form) => {
                *form = match quiz {
                    Some(quiz) => FormScreen::Ready(QuizForm::edit(&quiz)),
                    None => FormScreen::Missing,
                };
            }
            Screen::Solve(solve) => {
                let Some(quiz) = quiz else {
                    solve.state = SolveState::Missing;
                    return;
                };
                log::info!("Starting quiz {} \"{}\"", quiz.id, quiz.title);
                solve.state = SolveState::Active(SolveSession::new(quiz, duration));
                // Starts the countdown.
                self.with_session(|_, _| None);
            }
            _ => {}
        }
    }

    fn settle_quizzes(&mut self) {
        self.quizzes.settle();
        self.refresh_quizzes();
    }

    fn set_status(&mut self, kind: StatusKind, message: impl Into<String>) {
        self.status = Some(Status {
            kind,
            message: message.into(),
        });
    }

    fn request<F, Fut>(&self, ticket: u64, call: F)
    where
        F: FnOnce(Arc<dyn QuizApi>) -> Fut,
        Fut: Future<Output = ApiResponse> + Send + 'static,
    {
        let call = call(Arc::clone(&self.api));
        let events = self.events.clone();
        tokio::spawn(async move {
            let response = call.await;
            let _ = events.send(AppEvent::Api { ticket, response });
        });
    }
}

/// The list entry shown while a save is in flight.
fn tentative_quiz(id: Uuid, draft: &QuizDraft) -> Quiz {
    Quiz {
        id,
        title: draft.title.clone(),
        questions: draft
            .questions
            .iter()
            .map(|q| Question {
                id: Uuid::nil(),
                text: q.text.clone(),
                answers: q.answers.clone(),
                correct_answer: q.correct_answer,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use tokio::sync::mpsc::UnboundedReceiver;

    use super::*;
    use crate::api::{ApiError, MockApi};
    use crate::models::{QuestionDraft, ValidationError};
    use crate::session::Phase;
    use crate::store::{SharedStore, Store};

    fn two_question_quiz() -> QuizDraft {
        QuizDraft {
            title: "Pairs".to_string(),
            questions: [1, 0]
                .into_iter()
                .map(|correct_answer| QuestionDraft {
                    text: "Pick".to_string(),
                    answers: vec!["zero".to_string(), "one".to_string()],
                    correct_answer,
                })
                .collect(),
        }
    }

    fn setup(store: Store, duration: Duration) -> (App, UnboundedReceiver<AppEvent>, SharedStore) {
        let shared = store.into_shared();
        let api = Arc::new(MockApi::new(Arc::clone(&shared), Duration::ZERO));
        let (tx, rx) = mpsc::unbounded_channel();
        (App::new(api, tx, duration), rx, shared)
    }

    async fn next_event(app: &mut App, rx: &mut UnboundedReceiver<AppEvent>) {
        let event = tokio::time::timeout(Duration::from_secs(600), rx.recv())
            .await
            .expect("no event arrived")
            .expect("event channel closed");
        app.handle_event(event);
    }

    async fn pump_until<F>(app: &mut App, rx: &mut UnboundedReceiver<AppEvent>, done: F)
    where
        F: Fn(&App) -> bool,
    {
        while !done(app) {
            next_event(app, rx).await;
        }
    }

    fn fill_form(app: &mut App) {
        let form = app.form_mut().unwrap();
        "Capitals".chars().for_each(|c| form.insert_char(c));
        form.add_question();
        "France?".chars().for_each(|c| form.insert_char(c));
        form.focus_next();
        "Paris".chars().for_each(|c| form.insert_char(c));
        form.focus_next();
        "Rome".chars().for_each(|c| form.insert_char(c));
    }

    fn session(app: &App) -> &SolveSession {
        match &app.screen {
            Screen::Solve(solve) => solve.session().expect("session not started"),
            _ => panic!("not on the solver"),
        }
    }

    #[tokio::test]
    async fn test_list_loads_quizzes() {
        let (mut app, mut rx, _) = setup(Store::with_quizzes([two_question_quiz()]), Duration::from_secs(120));
        app.open_list();
        assert!(!app.quizzes_loaded());

        pump_until(&mut app, &mut rx, App::quizzes_loaded).await;

        assert_eq!(app.quizzes().len(), 1);
        assert!(app.selected_quiz_id().is_some());
    }

    #[tokio::test]
    async fn test_create_is_optimistic_then_reconciled() {
        let (mut app, mut rx, store) = setup(Store::new(), Duration::from_secs(120));
        app.open_create();
        fill_form(&mut app);
        app.submit_form();

        assert!(matches!(app.screen, Screen::List(_)));
        assert_eq!(app.quizzes().len(), 1);
        assert!(app.quizzes()[0].id.is_nil());
        assert!(app.quizzes_pending());

        pump_until(&mut app, &mut rx, |app| {
            !app.quizzes_pending() && app.quizzes().iter().all(|q| !q.id.is_nil())
        })
        .await;

        let stored = store.lock().await.quizzes().to_vec();
        assert_eq!(app.quizzes(), stored.as_slice());
        assert_eq!(stored[0].title, "Capitals");
        let status = app.status().unwrap();
        assert_eq!(status.kind, StatusKind::Info);
        assert_eq!(status.message, "Quiz \"Capitals\" created.");
    }

    #[tokio::test]
    async fn test_invalid_form_blocks_submission() {
        let (mut app, mut rx, _) = setup(Store::new(), Duration::from_secs(120));
        app.open_create();
        app.submit_form();

        assert!(matches!(app.screen, Screen::Form(FormScreen::Ready(_))));
        let status = app.status().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(
            status.message,
            ValidationError::MissingTitleOrQuestions.to_string()
        );

        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_update_of_deleted_quiz_reverts() {
        let (mut app, mut rx, store) = setup(Store::with_quizzes([two_question_quiz()]), Duration::from_secs(120));
        app.open_list();
        pump_until(&mut app, &mut rx, App::quizzes_loaded).await;
        let id = app.selected_quiz_id().unwrap();

        app.open_edit(id);
        pump_until(&mut app, &mut rx, |app| {
            matches!(app.screen, Screen::Form(FormScreen::Ready(_)))
        })
        .await;

        store.lock().await.delete_quiz(id);
        app.form_mut().unwrap().insert_char('!');
        app.submit_form();
        assert_eq!(app.quizzes()[0].title, "Pairs!");

        pump_until(&mut app, &mut rx, |app| app.status().is_some()).await;

        assert_eq!(app.status().unwrap().message, "Quiz no longer exists.");
        assert!(app.quizzes().iter().all(|q| q.title != "Pairs!"));
        assert!(!app.quizzes_pending());
    }

    struct RejectingApi;

    #[async_trait]
    impl QuizApi for RejectingApi {
        async fn fetch_quizzes(&self) -> ApiResult<Vec<Quiz>> {
            Ok(Vec::new())
        }
        async fn fetch_quiz(&self, _id: Uuid) -> ApiResult<Option<Quiz>> {
            Ok(None)
        }
        async fn add_quiz(&self, _draft: QuizDraft) -> ApiResult<Quiz> {
            Err(ApiError::Unavailable("offline".to_string()))
        }
        async fn update_quiz(&self, _id: Uuid, _draft: QuizDraft) -> ApiResult<Option<Quiz>> {
            Err(ApiError::Unavailable("offline".to_string()))
        }
        async fn delete_quiz(&self, _id: Uuid) -> ApiResult<()> {
            Err(ApiError::Unavailable("offline".to_string()))
        }
        async fn add_result(&self, _result: NewResult) -> ApiResult<QuizResult> {
            Err(ApiError::Unavailable("offline".to_string()))
        }
        async fn fetch_results(&self) -> ApiResult<Vec<QuizResult>> {
            Ok(Vec::new())
        }
        async fn fetch_results_for_quiz(&self, _quiz_id: Uuid) -> ApiResult<Vec<QuizResult>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_failed_create_reverts() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = App::new(Arc::new(RejectingApi), tx, Duration::from_secs(120));
        app.open_create();
        fill_form(&mut app);
        app.submit_form();
        assert_eq!(app.quizzes().len(), 1);

        pump_until(&mut app, &mut rx, |app| app.status().is_some()).await;

        assert!(app.quizzes().is_empty());
        assert_eq!(
            app.status().unwrap().message,
            "Backend unavailable: offline"
        );
    }

    #[tokio::test]
    async fn test_delete_needs_confirmation() {
        let (mut app, mut rx, store) = setup(Store::with_quizzes([two_question_quiz()]), Duration::from_secs(120));
        app.open_list();
        pump_until(&mut app, &mut rx, App::quizzes_loaded).await;

        app.list_request_delete();
        app.list_cancel_delete();
        assert_eq!(app.quizzes().len(), 1);

        app.list_request_delete();
        app.list_confirm_delete();
        assert!(app.quizzes().is_empty());

        pump_until(&mut app, &mut rx, |app| !app.quizzes_pending()).await;
        assert!(store.lock().await.quizzes().is_empty());
    }

    #[tokio::test]
    async fn test_solve_records_one_result() {
        let mut store = Store::new();
        let quiz = store.add_quiz(two_question_quiz());
        let (mut app, mut rx, store) = setup(store, Duration::from_secs(120));

        app.open_solve(quiz.id);
        pump_until(&mut app, &mut rx, |app| {
            matches!(&app.screen, Screen::Solve(s) if s.session().is_some())
        })
        .await;
        assert!(app.solve_mut().unwrap().countdown_running());

        app.solve_move(1);
        app.solve_answer();
        app.solve_answer();
        assert_eq!(session(&app).phase(), Phase::ConfirmingFinish);
        assert!(!app.solve_mut().unwrap().countdown_running());

        app.solve_cancel_finish();
        assert!(app.solve_mut().unwrap().countdown_running());
        app.solve_request_finish();
        app.solve_confirm_finish();
        assert_eq!(session(&app).score(), Some(100.0));
        assert!(!app.solve_mut().unwrap().countdown_running());

        pump_until(&mut app, &mut rx, |app| !app.results().is_empty()).await;
        assert_eq!(store.lock().await.results().len(), 1);
        assert_eq!(app.results()[0].quiz_id, quiz.id);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_finishes_and_records() {
        let mut store = Store::new();
        let quiz = store.add_quiz(two_question_quiz());
        let (mut app, mut rx, store) = setup(store, Duration::from_secs(2));

        app.open_solve(quiz.id);
        pump_until(&mut app, &mut rx, |app| !app.results().is_empty()).await;

        assert_eq!(session(&app).score(), Some(0.0));
        assert!(!app.solve_mut().unwrap().countdown_running());

        // Nothing else is recorded once the clock has run out.
        tokio::time::sleep(Duration::from_secs(5)).await;
        while let Ok(event) = rx.try_recv() {
            app.handle_event(event);
        }
        assert_eq!(store.lock().await.results().len(), 1);
        assert_eq!(store.lock().await.results()[0].score, 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tick_from_stopped_countdown_is_ignored() {
        let mut store = Store::new();
        let quiz = store.add_quiz(two_question_quiz());
        let (mut app, mut rx, _) = setup(store, Duration::from_secs(120));

        app.open_solve(quiz.id);
        pump_until(&mut app, &mut rx, |app| {
            matches!(&app.screen, Screen::Solve(s) if s.session().is_some())
        })
        .await;
        let ticket = app.ticket;
        let first = app.solve_mut().unwrap().countdown_generation;

        app.solve_answer();
        app.solve_answer();
        app.solve_cancel_finish();
        let second = app.solve_mut().unwrap().countdown_generation;
        assert_ne!(first, second);

        // A tick queued by the countdown stopped at the confirm prompt.
        app.handle_event(AppEvent::Tick {
            ticket,
            countdown: first,
        });
        assert_eq!(session(&app).remaining_secs(), 120);

        app.handle_event(AppEvent::Tick {
            ticket,
            countdown: second,
        });
        assert_eq!(session(&app).remaining_secs(), 119);
    }

    #[tokio::test]
    async fn test_missing_quiz_on_solver() {
        let (mut app, mut rx, _) = setup(Store::new(), Duration::from_secs(120));
        app.open_solve(Uuid::new_v4());
        pump_until(&mut app, &mut rx, |app| {
            matches!(&app.screen, Screen::Solve(s) if matches!(s.state, SolveState::Missing))
        })
        .await;
    }

    #[tokio::test]
    async fn test_leaving_a_screen_discards_its_response() {
        let mut store = Store::new();
        let quiz = store.add_quiz(two_question_quiz());
        let (mut app, mut rx, _) = setup(store, Duration::from_secs(120));

        app.open_solve(quiz.id);
        app.open_history();

        pump_until(&mut app, &mut rx, |app| {
            matches!(&app.screen, Screen::History(h) if !h.loading) && app.quizzes_loaded()
        })
        .await;

        // The solver's quiz load came back while on history and was dropped.
        tokio::task::yield_now().await;
        while let Ok(event) = rx.try_recv() {
            app.handle_event(event);
        }
        assert!(matches!(app.screen, Screen::History(_)));
        assert_eq!(app.quiz_title(quiz.id), Some("Pairs"));
    }
}
