use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quote {
    pub author: String,
    pub excerpt: String,
}

const SUN_TZU: &[&str] = &[
    "Appear weak when you are strong, and strong when you are weak.",
    "In the midst of chaos, there is also opportunity.",
    "Move swift as the Wind and closely-formed as the Wood. Attack like the Fire and be still as the Mountain.",
    "Treat your men as you would your own beloved sons. And they will follow you into the deepest valley.",
    "So in war, the way is to avoid what is strong, and strike at what is weak.",
    "One may know how to conquer without being able to do it. ",
    "If ignorant both of your enemy and yourself, you are certain to be in peril.",
    "If he sends reinforcements everywhere, he will everywhere be weak.",
    "Disorder came from order, fear came from courage, weakness came from strength.",
    "Therefore, just as water retains no constant shape, so in warfare there are no constant conditions.",
    "Plan for what it is difficult while it is easy, do what is great while it is small.",
];

/// Fixed set of quotes shown on the incident screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteBook {
    quotes: Vec<Quote>,
}

impl Default for QuoteBook {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteBook {
    pub fn new() -> Self {
        let quotes = SUN_TZU
            .iter()
            .map(|excerpt| Quote {
                author: "Sun Tzu".to_string(),
                excerpt: (*excerpt).to_string(),
            })
            .collect();
        Self { quotes }
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn random_quote(&self) -> &Quote {
        self.random_quote_with(&mut rand::thread_rng())
    }

    /// Uniform pick over the whole list using the caller's generator.
    pub fn random_quote_with<R: Rng>(&self, rng: &mut R) -> &Quote {
        let index = rng.gen_range(0..self.quotes.len());
        debug!(index, "picked quote");
        &self.quotes[index]
    }
}
