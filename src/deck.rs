// src/deck.rs

use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use yew::Reducible;

use crate::catalog::Church;
use crate::gesture::SwipeDirection;

#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub church_id: String,
    pub swipe_action: SwipeDirection,
    /// ISO-8601
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    catalog: Vec<Church>,
    churches: Vec<Church>,
    index: usize,
    matches: Vec<Match>,
    animating: bool,
    notice: Option<Notice>,
    next_notice_id: u32,
}

pub enum DeckAction {
    Swipe {
        direction: SwipeDirection,
        timestamp: String,
    },
    /// Seed only matters when the deck wraps around.
    Advance { seed: u64 },
    DismissNotice(u32),
}

impl Deck {
    pub fn new(catalog: Vec<Church>) -> Self {
        Self {
            churches: catalog.clone(),
            catalog,
            index: 0,
            matches: Vec::new(),
            animating: false,
            notice: None,
            next_notice_id: 0,
        }
    }

    pub fn current(&self) -> Option<&Church> {
        self.churches.get(self.index)
    }

    pub fn is_empty(&self) -> bool {
        self.churches.is_empty()
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn is_saved(&self, church_id: &str) -> bool {
        self.matches
            .iter()
            .any(|m| m.church_id == church_id && m.swipe_action == SwipeDirection::Right)
    }

    pub fn saved_count(&self) -> usize {
        let mut ids: Vec<&str> = self
            .matches
            .iter()
            .filter(|m| m.swipe_action == SwipeDirection::Right)
            .map(|m| m.church_id.as_str())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }

    /// Records a decision for the top card. Ignored while a previous swipe is
    /// still animating out.
    pub fn swipe(&mut self, direction: SwipeDirection, timestamp: String) -> bool {
        if self.animating {
            return false;
        }
        let Some(church) = self.current() else {
            return false;
        };
        let church_id = church.id.clone();
        let name = church.name.clone();

        log::info!("swiped {} on {church_id} at {timestamp}", direction.as_str());
        self.matches.push(Match {
            church_id,
            swipe_action: direction,
            timestamp,
        });
        if direction == SwipeDirection::Right {
            self.raise_notice("Church Saved!", format!("You've matched with {name}."));
        }
        self.animating = true;
        true
    }

    /// Moves to the next card, reshuffling the catalog after the last one.
    pub fn advance(&mut self, seed: u64) {
        if self.index + 1 < self.churches.len() {
            self.index += 1;
        } else if !self.catalog.is_empty() {
            let mut shuffled = self.catalog.clone();
            shuffled.shuffle(&mut SmallRng::seed_from_u64(seed));
            self.churches = shuffled;
            self.index = 0;
            log::debug!("deck exhausted, reshuffled {} churches", self.churches.len());
            self.raise_notice("All churches viewed!", "We've reshuffled the deck for you.".into());
        }
        self.animating = false;
    }

    pub fn dismiss_notice(&mut self, id: u32) {
        if self.notice.as_ref().is_some_and(|n| n.id == id) {
            self.notice = None;
        }
    }

    fn raise_notice(&mut self, title: &str, description: String) {
        self.next_notice_id = self.next_notice_id.wrapping_add(1);
        self.notice = Some(Notice {
            id: self.next_notice_id,
            title: title.to_string(),
            description,
        });
    }
}

impl Reducible for Deck {
    type Action = DeckAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            DeckAction::Swipe {
                direction,
                timestamp,
            } => {
                if !next.swipe(direction, timestamp) {
                    return self;
                }
            }
            DeckAction::Advance { seed } => next.advance(seed),
            DeckAction::DismissNotice(id) => next.dismiss_notice(id),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::load_catalog;

    fn deck() -> Deck {
        Deck::new(load_catalog().unwrap())
    }

    fn ts() -> String {
        "2026-10-17T12:00:00.000Z".to_string()
    }

    #[test]
    fn test_right_swipe_saves_and_notifies() {
        let mut d = deck();
        assert!(d.swipe(SwipeDirection::Right, ts()));
        assert!(d.is_saved("1"));
        assert_eq!(d.saved_count(), 1);
        let n = d.notice().unwrap();
        assert_eq!(n.title, "Church Saved!");
        assert_eq!(n.description, "You've matched with Grace Community Church.");
        assert!(d.is_animating());
    }

    #[test]
    fn test_left_swipe_records_without_notice() {
        let mut d = deck();
        d.swipe(SwipeDirection::Left, ts());
        assert!(!d.is_saved("1"));
        assert_eq!(d.matches().len(), 1);
        assert_eq!(d.matches()[0].swipe_action, SwipeDirection::Left);
        assert!(d.notice().is_none());
    }

    #[test]
    fn test_swipe_while_animating_is_ignored() {
        let mut d = deck();
        d.swipe(SwipeDirection::Left, ts());
        assert!(!d.swipe(SwipeDirection::Right, ts()));
        assert_eq!(d.matches().len(), 1);

        d.advance(0);
        assert_eq!(d.current().unwrap().id, "2");
        assert!(d.swipe(SwipeDirection::Right, ts()));
    }

    #[test]
    fn test_last_card_reshuffles() {
        let mut d = deck();
        for _ in 0..4 {
            d.swipe(SwipeDirection::Left, ts());
            d.advance(7);
        }
        assert_eq!(d.current().unwrap().id, "5");
        assert!(d.notice().is_none());

        d.swipe(SwipeDirection::Left, ts());
        d.advance(7);
        let n = d.notice().unwrap();
        assert_eq!(n.title, "All churches viewed!");
        assert!(!d.is_animating());

        let mut ids: Vec<_> = d.churches.iter().map(|c| c.id.clone()).collect();
        ids.sort();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_reshuffle_is_seeded() {
        let mut a = deck();
        let mut b = deck();
        a.index = 4;
        b.index = 4;
        a.advance(42);
        b.advance(42);
        assert_eq!(a.churches, b.churches);
    }

    #[test]
    fn test_dismiss_only_matching_notice() {
        let mut d = deck();
        d.swipe(SwipeDirection::Right, ts());
        let first = d.notice().unwrap().id;
        d.advance(0);
        d.swipe(SwipeDirection::Right, ts());
        let second = d.notice().unwrap().id;
        assert_ne!(first, second);

        d.dismiss_notice(first);
        assert!(d.notice().is_some());
        d.dismiss_notice(second);
        assert!(d.notice().is_none());
    }

    #[test]
    fn test_empty_deck() {
        let mut d = Deck::new(Vec::new());
        assert!(d.is_empty());
        assert!(!d.swipe(SwipeDirection::Right, ts()));
        d.advance(1);
        assert!(d.current().is_none());
        assert!(d.notice().is_none());
    }

    #[test]
    fn test_reducer_keeps_state_on_ignored_swipe() {
        let d = Rc::new(deck());
        let d = d.reduce(DeckAction::Swipe {
            direction: SwipeDirection::Right,
            timestamp: ts(),
        });
        let before = d.clone();
        let after = d.reduce(DeckAction::Swipe {
            direction: SwipeDirection::Left,
            timestamp: ts(),
        });
        assert!(Rc::ptr_eq(&before, &after));

        let after = after.reduce(DeckAction::Advance { seed: 3 });
        assert_eq!(after.current().unwrap().id, "2");
    }
}
