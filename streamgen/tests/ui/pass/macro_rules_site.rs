#![allow(non_snake_case)]

macro_rules! stream_holder {
    ($holder:ident, $ty:ty, $name:literal) => {
        #[streamgen::create_async_stream(of: $ty.self, named: $name)]
        pub struct $holder {}
    };
}

stream_holder!(Ticker, u64, "ticks");

fn main() {
    let (_ticks, ticksContinuation) = Ticker::make_ticks_stream();
    let ticker = Ticker {
        _ticks,
        ticksContinuation,
    };
    let _ = ticker.ticks();
}
