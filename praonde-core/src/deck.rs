//! The shrinking stack of cards a discovery visit works through.

use crate::event::{Event, EventId};
use crate::filter::Filter;
use crate::seed::Seed;

/// Remaining events, in seed order. Events are only ever removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    events: Vec<Event>,
}

impl Deck {
    pub fn from_seed(seed: &Seed) -> Self {
        Self {
            events: seed.events().to_vec(),
        }
    }

    /// Matching events in deck order.
    pub fn filtered(&self, filter: Filter) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |e| filter.matches(e))
    }

    /// The current card under `filter`.
    pub fn top(&self, filter: Filter) -> Option<&Event> {
        self.filtered(filter).next()
    }

    /// The first `n` matching events, top card first.
    pub fn stack(&self, filter: Filter, n: usize) -> Vec<&Event> {
        self.filtered(filter).take(n).collect()
    }

    pub fn count(&self, filter: Filter) -> usize {
        self.filtered(filter).count()
    }

    /// Remove the event with `id` from the whole deck, not just the filtered view.
    pub fn remove(&mut self, id: EventId) -> Option<Event> {
        let pos = self.events.iter().position(|e| e.id == id)?;
        Some(self.events.remove(pos))
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Category;

    fn ids<'a>(events: impl IntoIterator<Item = &'a Event>) -> Vec<EventId> {
        events.into_iter().map(|e| e.id).collect()
    }

    #[test]
    fn all_filter_keeps_everything_in_order() {
        let deck = Deck::from_seed(&Seed::builtin());
        assert_eq!(ids(deck.filtered(Filter::All)), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn category_filter_is_an_ordered_subsequence() {
        let deck = Deck::from_seed(&Seed::builtin());
        for filter in Filter::BAR {
            let filtered: Vec<&Event> = deck.filtered(filter).collect();
            assert!(filtered.iter().all(|e| filter.matches(e)));
            let dropped = deck.events().iter().filter(|e| !filter.matches(e)).count();
            assert_eq!(filtered.len() + dropped, deck.len());
            assert!(filtered.windows(2).all(|w| w[0].id < w[1].id));
        }
        assert_eq!(ids(deck.filtered(Filter::Only(Category::Bar))), vec![2, 6]);
    }

    #[test]
    fn remove_takes_exactly_one_event() {
        let mut deck = Deck::from_seed(&Seed::builtin());
        let removed = deck.remove(3).unwrap();
        assert_eq!(removed.id, 3);
        assert_eq!(deck.len(), 5);
        assert_eq!(ids(deck.events()), vec![1, 2, 4, 5, 6]);
        assert!(deck.remove(3).is_none());
        assert_eq!(deck.len(), 5);
    }

    #[test]
    fn remove_under_filter_affects_other_views() {
        let mut deck = Deck::from_seed(&Seed::builtin());
        let festa = Filter::Only(Category::Festa);
        let top = deck.top(festa).unwrap().id;
        assert_eq!(top, 1);
        deck.remove(top);
        assert_eq!(deck.top(Filter::All).unwrap().id, 2);
        assert_eq!(deck.top(festa).unwrap().id, 5);
    }

    #[test]
    fn stack_is_capped() {
        let deck = Deck::from_seed(&Seed::builtin());
        assert_eq!(ids(deck.stack(Filter::All, 3)), vec![1, 2, 3]);
        assert_eq!(ids(deck.stack(Filter::Only(Category::Show), 3)), vec![3]);
        assert!(deck.top(Filter::All).is_some());
    }
}
