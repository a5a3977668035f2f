//! TUI application state on top of a [`Session`].

use praonde_core::{Action, Buzz, ClickTarget, Filter, Outcome, PageKind, Session};
use ratatui::layout::Rect;

use crate::opener::open_link;

pub struct BrowseApp {
    pub session: Session,
    pub should_quit: bool,
    /// Highlighted row on the saved page.
    pub saved_selected: usize,
    /// One-line feedback for the last action.
    pub notice: Option<String>,
    pub last_error: Option<String>,
    /// Screen area of the last frame, used to place mouse clicks.
    pub viewport: Rect,
}

impl BrowseApp {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            should_quit: false,
            saved_selected: 0,
            notice: None,
            last_error: None,
            viewport: Rect::default(),
        }
    }

    pub fn modal_open(&self) -> bool {
        self.session.modal().is_open()
    }

    fn apply(&mut self, action: Action) -> Outcome {
        self.last_error = None;
        let outcome = self.session.apply(action);
        self.notice = notice_for(&self.session, outcome);
        outcome
    }

    pub fn navigate(&mut self, kind: PageKind) {
        self.apply(Action::Navigate(kind));
    }

    pub fn next_page(&mut self) {
        let next = self.session.page_kind().next();
        self.navigate(next);
    }

    pub fn next_filter(&mut self) {
        if let Some(view) = self.session.discovery() {
            let filter = view.filter().next();
            self.set_filter(filter);
        }
    }

    pub fn prev_filter(&mut self) {
        if let Some(view) = self.session.discovery() {
            let filter = view.filter().prev();
            self.set_filter(filter);
        }
    }

    fn set_filter(&mut self, filter: Filter) {
        self.apply(Action::SetFilter(filter));
    }

    pub fn pass(&mut self) {
        self.apply(Action::Pass);
    }

    pub fn like(&mut self) {
        self.apply(Action::Like);
    }

    pub fn super_like(&mut self) {
        self.apply(Action::SuperLike);
    }

    /// Open details for the top card or the highlighted saved event.
    pub fn open_current(&mut self) {
        let event = match self.session.page_kind() {
            PageKind::Discovery => self.session.discovery().and_then(|v| v.top()).cloned(),
            PageKind::Saved => self
                .session
                .liked()
                .get(self.saved_selected)
                .map(|liked| liked.event.clone()),
            PageKind::Profile => None,
        };
        if let Some(event) = event {
            self.apply(Action::Open(event));
        }
    }

    pub fn close_modal(&mut self) {
        self.apply(Action::Close);
    }

    pub fn click(&mut self, target: ClickTarget) {
        self.apply(Action::Click(target));
    }

    pub fn submit_vibe(&mut self, choice: Buzz) {
        self.apply(Action::SubmitVibe(choice));
    }

    pub fn open_ticket(&mut self) {
        let Some(ticket) = self.session.modal().event().and_then(|e| e.ticket.clone()) else {
            return;
        };
        match open_link(ticket.as_str()) {
            Ok(()) => self.notice = Some(format!("Abrindo {}", ticket)),
            Err(e) => self.last_error = Some(e.to_string()),
        }
    }

    pub fn saved_up(&mut self) {
        self.saved_selected = self.saved_selected.saturating_sub(1);
    }

    pub fn saved_down(&mut self) {
        let len = self.session.liked().len();
        if self.saved_selected + 1 < len {
            self.saved_selected += 1;
        }
    }
}

fn notice_for(session: &Session, outcome: Outcome) -> Option<String> {
    let name = |id| {
        session
            .seed()
            .get(id)
            .map(|e| e.name.clone())
            .unwrap_or_else(|| format!("#{}", id))
    };

    match outcome {
        Outcome::Passed(id) => Some(format!("Passou: {}", name(id))),
        Outcome::Liked {
            id,
            super_liked: false,
        } => Some(format!("Salvo: {}", name(id))),
        Outcome::Liked {
            id,
            super_liked: true,
        } => Some(format!(
            "Super Like: {} ({} restantes)",
            name(id),
            session.super_likes()
        )),
        Outcome::SuperLikeRefused => Some("Sem Super Likes restantes".to_string()),
        Outcome::FilterChanged(filter) => Some(format!("Filtro: {}", filter)),
        Outcome::EmptyDeck
        | Outcome::Navigated(_)
        | Outcome::Opened(_)
        | Outcome::Closed
        | Outcome::VibeSubmitted(_)
        | Outcome::Ignored => None,
    }
}
