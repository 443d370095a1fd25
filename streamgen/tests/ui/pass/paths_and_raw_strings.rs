#![allow(non_snake_case)]

mod model {
    #[derive(Debug, Clone)]
    pub struct Quote {
        pub price: f64,
    }
}

#[streamgen::create_async_stream(of: model::Quote.self, named: r"quotes")]
#[streamgen::create_async_stream(of: Option<(u8, String)>.self, named: "pairs",)]
pub struct Feed<'a> {
    venue: &'a str,
}

impl<'a> Feed<'a> {
    pub fn new(venue: &'a str) -> Self {
        let (_quotes, quotesContinuation) = Self::make_quotes_stream();
        let (_pairs, pairsContinuation) = Self::make_pairs_stream();
        Self {
            venue,
            _quotes,
            quotesContinuation,
            _pairs,
            pairsContinuation,
        }
    }
}

fn main() {
    let feed = Feed::new("xnys");
    feed.quotesContinuation.send(model::Quote { price: 1.0 });
    let _ = feed.quotes();
    let _ = feed.pairs();
    let _ = feed.venue;
}
