use rand::seq::IndexedRandom;

use crate::rotation::{ContentItem, MediaRef};

const PORTRAIT_QUOTES: &[(&str, &str, &str)] = &[
    (
        "The future belongs to those who believe in the beauty of their dreams.",
        "Eleanor Roosevelt",
        "eleanor-roosevelt.jpg",
    ),
    (
        "Innovation distinguishes between a leader and a follower.",
        "Steve Jobs",
        "steve-jobs.jpg",
    ),
    (
        "Artificial intelligence is the new electricity.",
        "Andrew Ng",
        "andrew-ng.jpg",
    ),
    (
        "Intelligence is the ability to adapt to change.",
        "Stephen Hawking",
        "stephen-hawking.jpg",
    ),
    (
        "The best way to predict the future is to create it.",
        "Peter Drucker",
        "steve-jobs.jpg",
    ),
    (
        "Technology is nothing. What's important is that you have a faith in people.",
        "Steve Jobs",
        "steve-jobs.jpg",
    ),
];

const INSPIRATIONAL_QUOTES: &[&str] = &[
    "The future belongs to those who believe in the beauty of their dreams. - Eleanor Roosevelt",
    "Innovation distinguishes between a leader and a follower. - Steve Jobs",
    "The only way to make sense out of change is to plunge into it, move with it, and join the dance. - Alan Watts",
    "Artificial intelligence is the new electricity. - Andrew Ng",
    "The best way to predict the future is to create it. - Peter Drucker",
    "Technology is nothing. What's important is that you have a faith in people. - Steve Jobs",
    "Intelligence is the ability to adapt to change. - Stephen Hawking",
    "The science of today is the technology of tomorrow. - Edward Teller",
];

/// Quotes with an author and a portrait.
pub fn portrait_quotes() -> Vec<ContentItem> {
    PORTRAIT_QUOTES
        .iter()
        .map(|(body, author, portrait)| {
            ContentItem::new(*body)
                .with_attribution(*author)
                .with_media(MediaRef::new(*portrait))
        })
        .collect()
}

/// The plain "text - author" quote list.
pub fn inspirational_quotes() -> &'static [&'static str] {
    INSPIRATIONAL_QUOTES
}

/// The plain quote list normalized to content items.
pub fn plain_quotes() -> Vec<ContentItem> {
    INSPIRATIONAL_QUOTES
        .iter()
        .map(|line| parse_plain_quote(line))
        .collect()
}

/// Split `"text - author"` on the last separator. Lines without one become
/// an unattributed item.
pub fn parse_plain_quote(line: &str) -> ContentItem {
    match line.rsplit_once(" - ") {
        Some((body, author)) if !body.trim().is_empty() && !author.trim().is_empty() => {
            ContentItem::new(body.trim()).with_attribution(author.trim())
        }
        _ => ContentItem::new(line.trim()),
    }
}

pub fn random_quote() -> &'static str {
    INSPIRATIONAL_QUOTES
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(INSPIRATIONAL_QUOTES[0])
}
