//! Whole-app state and the single function that updates it.

use std::fmt;

use tracing::{debug, info};

use crate::deck::Deck;
use crate::event::{Buzz, Event, EventId, LikedEvent};
use crate::filter::Filter;
use crate::modal::{ClickTarget, Modal};
use crate::seed::Seed;

/// Super-likes a fresh session gets.
pub const DEFAULT_SUPER_LIKES: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Discovery,
    Saved,
    Profile,
}

impl PageKind {
    /// Bottom navigation entries, left to right.
    pub const NAV: [PageKind; 3] = [PageKind::Discovery, PageKind::Saved, PageKind::Profile];

    pub fn label(&self) -> &'static str {
        match self {
            PageKind::Discovery => "Descobrir",
            PageKind::Saved => "Meus Rolês",
            PageKind::Profile => "Perfil",
        }
    }

    pub fn next(&self) -> PageKind {
        match self {
            PageKind::Discovery => PageKind::Saved,
            PageKind::Saved => PageKind::Profile,
            PageKind::Profile => PageKind::Discovery,
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// State of one visit to the discovery page. Dropped on navigation away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryView {
    filter: Filter,
    deck: Deck,
}

impl DiscoveryView {
    pub fn new(seed: &Seed, filter: Filter) -> Self {
        Self {
            filter,
            deck: Deck::from_seed(seed),
        }
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn top(&self) -> Option<&Event> {
        self.deck.top(self.filter)
    }

    pub fn stack(&self, n: usize) -> Vec<&Event> {
        self.deck.stack(self.filter, n)
    }

    pub fn remaining(&self) -> usize {
        self.deck.count(self.filter)
    }

    fn take_top(&mut self) -> Option<Event> {
        let id = self.top()?.id;
        self.deck.remove(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Discovery(DiscoveryView),
    Saved,
    Profile,
}

impl Page {
    pub fn kind(&self) -> PageKind {
        match self {
            Page::Discovery(_) => PageKind::Discovery,
            Page::Saved => PageKind::Saved,
            Page::Profile => PageKind::Profile,
        }
    }
}

/// Everything the user can do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(PageKind),
    SetFilter(Filter),
    Pass,
    Like,
    SuperLike,
    Open(Event),
    Close,
    Click(ClickTarget),
    SubmitVibe(Buzz),
}

/// What an action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Navigated(PageKind),
    FilterChanged(Filter),
    Passed(EventId),
    Liked { id: EventId, super_liked: bool },
    /// Super-like asked for with none left. Nothing changed.
    SuperLikeRefused,
    /// Decision on an empty filtered deck. Nothing changed.
    EmptyDeck,
    Opened(EventId),
    Closed,
    VibeSubmitted(Buzz),
    /// The action does not apply to the current state. Nothing changed.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct Session {
    seed: Seed,
    page: Page,
    liked: Vec<LikedEvent>,
    super_likes: u32,
    allotment: u32,
    home_filter: Filter,
    modal: Modal,
}

impl Session {
    pub fn new(seed: Seed) -> Self {
        let page = Page::Discovery(DiscoveryView::new(&seed, Filter::All));
        Self {
            seed,
            page,
            liked: Vec::new(),
            super_likes: DEFAULT_SUPER_LIKES,
            allotment: DEFAULT_SUPER_LIKES,
            home_filter: Filter::All,
            modal: Modal::Closed,
        }
    }

    pub fn with_super_likes(mut self, allotment: u32) -> Self {
        self.super_likes = allotment;
        self.allotment = allotment;
        self
    }

    /// Filter each discovery visit starts with.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.home_filter = filter;
        if let Page::Discovery(view) = &mut self.page {
            view.filter = filter;
        }
        self
    }

    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_kind(&self) -> PageKind {
        self.page.kind()
    }

    pub fn discovery(&self) -> Option<&DiscoveryView> {
        match &self.page {
            Page::Discovery(view) => Some(view),
            _ => None,
        }
    }

    pub fn liked(&self) -> &[LikedEvent] {
        &self.liked
    }

    pub fn super_likes(&self) -> u32 {
        self.super_likes
    }

    pub fn super_like_allotment(&self) -> u32 {
        self.allotment
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    /// Apply one user action.
    pub fn apply(&mut self, action: Action) -> Outcome {
        let outcome = match action {
            Action::Navigate(kind) => self.navigate(kind),
            Action::SetFilter(filter) => self.set_filter(filter),
            Action::Pass => self.pass(),
            Action::Like => self.decide(false),
            Action::SuperLike => self.decide(true),
            Action::Open(event) => {
                let id = event.id;
                self.modal.open(event);
                Outcome::Opened(id)
            }
            Action::Close => {
                if self.modal.is_open() {
                    self.modal.close();
                    Outcome::Closed
                } else {
                    Outcome::Ignored
                }
            }
            Action::Click(target) => {
                if self.modal.click(target) {
                    Outcome::Closed
                } else {
                    Outcome::Ignored
                }
            }
            Action::SubmitVibe(choice) => {
                if self.modal.submit_vibe() {
                    if let Some(event) = self.modal.event() {
                        info!(event = event.id, vibe = %choice, "vibe reported");
                    }
                    Outcome::VibeSubmitted(choice)
                } else {
                    Outcome::Ignored
                }
            }
        };
        debug!(?outcome, "action applied");
        outcome
    }

    /// Append `event` to the liked list.
    ///
    /// A super-like with no super-likes left is refused and changes nothing.
    /// The same event may be recorded more than once.
    pub fn record_like(&mut self, event: Event, super_liked: bool) -> Outcome {
        if super_liked {
            if self.super_likes == 0 {
                return Outcome::SuperLikeRefused;
            }
            self.super_likes -= 1;
        }
        let id = event.id;
        self.liked.push(LikedEvent::new(event, super_liked));
        Outcome::Liked { id, super_liked }
    }

    fn navigate(&mut self, kind: PageKind) -> Outcome {
        if self.page.kind() != kind {
            self.page = match kind {
                PageKind::Discovery => {
                    Page::Discovery(DiscoveryView::new(&self.seed, self.home_filter))
                }
                PageKind::Saved => Page::Saved,
                PageKind::Profile => Page::Profile,
            };
        }
        Outcome::Navigated(kind)
    }

    fn set_filter(&mut self, filter: Filter) -> Outcome {
        match &mut self.page {
            Page::Discovery(view) => {
                view.filter = filter;
                Outcome::FilterChanged(filter)
            }
            _ => Outcome::Ignored,
        }
    }

    fn pass(&mut self) -> Outcome {
        let Page::Discovery(view) = &mut self.page else {
            return Outcome::Ignored;
        };
        match view.take_top() {
            Some(event) => Outcome::Passed(event.id),
            None => Outcome::EmptyDeck,
        }
    }

    fn decide(&mut self, super_liked: bool) -> Outcome {
        let Page::Discovery(view) = &mut self.page else {
            return Outcome::Ignored;
        };
        if view.top().is_none() {
            return Outcome::EmptyDeck;
        }
        if super_liked && self.super_likes == 0 {
            return Outcome::SuperLikeRefused;
        }
        match view.take_top() {
            Some(event) => self.record_like(event, super_liked),
            None => Outcome::EmptyDeck,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Seed::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Category;

    fn top_id(session: &Session) -> Option<EventId> {
        session.discovery().and_then(|v| v.top()).map(|e| e.id)
    }

    #[test]
    fn starts_on_discovery_with_everything() {
        let session = Session::default();
        assert_eq!(session.page_kind(), PageKind::Discovery);
        assert_eq!(session.super_likes(), DEFAULT_SUPER_LIKES);
        assert_eq!(session.discovery().unwrap().remaining(), 6);
        assert!(session.liked().is_empty());
        assert!(!session.modal().is_open());
    }

    #[test]
    fn pass_removes_top_without_liking() {
        let mut session = Session::default();
        assert_eq!(session.apply(Action::Pass), Outcome::Passed(1));
        assert_eq!(top_id(&session), Some(2));
        assert!(session.liked().is_empty());
    }

    #[test]
    fn super_like_decrements_until_refused() {
        let mut session = Session::default().with_super_likes(2);
        assert_eq!(
            session.apply(Action::SuperLike),
            Outcome::Liked { id: 1, super_liked: true }
        );
        assert_eq!(
            session.apply(Action::SuperLike),
            Outcome::Liked { id: 2, super_liked: true }
        );
        assert_eq!(session.super_likes(), 0);
        assert_eq!(session.super_like_allotment(), 2);

        let remaining = session.discovery().unwrap().remaining();
        assert_eq!(session.apply(Action::SuperLike), Outcome::SuperLikeRefused);
        assert_eq!(session.super_likes(), 0);
        assert_eq!(session.liked().len(), 2);
        assert_eq!(session.discovery().unwrap().remaining(), remaining);
        assert_eq!(top_id(&session), Some(3));
    }

    #[test]
    fn decisions_on_empty_deck_are_noops() {
        let mut session = Session::default().with_filter(Filter::Only(Category::Show));
        assert_eq!(
            session.apply(Action::Like),
            Outcome::Liked { id: 3, super_liked: false }
        );
        for action in [Action::Pass, Action::Like, Action::SuperLike] {
            assert_eq!(session.apply(action), Outcome::EmptyDeck);
        }
        assert_eq!(session.liked().len(), 1);
        assert_eq!(session.super_likes(), DEFAULT_SUPER_LIKES);
    }

    #[test]
    fn deck_actions_off_discovery_are_ignored() {
        let mut session = Session::default();
        session.apply(Action::Navigate(PageKind::Saved));
        for action in [
            Action::Pass,
            Action::Like,
            Action::SuperLike,
            Action::SetFilter(Filter::All),
        ] {
            assert_eq!(session.apply(action), Outcome::Ignored);
        }
        assert!(session.liked().is_empty());
    }

    #[test]
    fn revisiting_discovery_restores_deck_and_filter() {
        let mut session = Session::default();
        session.apply(Action::SetFilter(Filter::Only(Category::Bar)));
        session.apply(Action::Like);
        assert_eq!(session.discovery().unwrap().deck().len(), 5);

        // Same page: nothing is reset.
        session.apply(Action::Navigate(PageKind::Discovery));
        assert_eq!(session.discovery().unwrap().deck().len(), 5);

        session.apply(Action::Navigate(PageKind::Profile));
        assert_eq!(session.page(), &Page::Profile);
        assert!(session.discovery().is_none());
        session.apply(Action::Navigate(PageKind::Discovery));
        let view = session.discovery().unwrap();
        assert_eq!(view.filter(), Filter::All);
        assert_eq!(view.deck().len(), 6);
        assert_eq!(session.liked().len(), 1);
    }

    #[test]
    fn re_liking_records_a_duplicate() {
        let mut session = Session::default();
        session.apply(Action::Like);
        session.apply(Action::Navigate(PageKind::Saved));
        session.apply(Action::Navigate(PageKind::Discovery));
        session.apply(Action::Like);
        let ids: Vec<EventId> = session.liked().iter().map(LikedEvent::id).collect();
        assert_eq!(ids, vec![1, 1]);
    }

    #[test]
    fn record_like_follows_refusal_policy() {
        let mut session = Session::default().with_super_likes(0);
        let event = session.seed().get(6).cloned().unwrap();
        assert_eq!(
            session.record_like(event.clone(), true),
            Outcome::SuperLikeRefused
        );
        assert!(session.liked().is_empty());
        assert_eq!(
            session.record_like(event, false),
            Outcome::Liked { id: 6, super_liked: false }
        );
    }

    #[test]
    fn modal_transitions() {
        let mut session = Session::default();
        assert_eq!(session.apply(Action::Close), Outcome::Ignored);
        assert_eq!(session.apply(Action::SubmitVibe(Buzz::Fraco)), Outcome::Ignored);

        let event = session.discovery().unwrap().top().cloned().unwrap();
        assert_eq!(session.apply(Action::Open(event)), Outcome::Opened(1));
        assert_eq!(
            session.apply(Action::Click(ClickTarget::Content)),
            Outcome::Ignored
        );
        assert!(session.modal().is_open());
        assert_eq!(
            session.apply(Action::SubmitVibe(Buzz::Medio)),
            Outcome::VibeSubmitted(Buzz::Medio)
        );
        assert_eq!(session.apply(Action::Close), Outcome::Closed);
        assert!(!session.modal().is_open());
    }
}
