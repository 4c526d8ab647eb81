use crate::models::{NavigationCard, Page};

pub fn get_navigation_cards() -> Vec<NavigationCard> {
    Page::CARDS.into_iter().map(NavigationCard::from).collect()
}
