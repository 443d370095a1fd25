#![allow(non_snake_case)]

use streamgen::create_async_stream;

#[create_async_stream(of: i32.self, named: "numbers")]
pub struct Counter {
    ticks: u64,
}

impl Counter {
    pub fn new() -> Self {
        let (_numbers, numbersContinuation) = Self::make_numbers_stream();
        Self {
            ticks: 0,
            _numbers,
            numbersContinuation,
        }
    }
}

fn main() {
    let counter = Counter::new();
    let _stream: &streamgen::AsyncStream<i32> = counter.numbers();
    let _ = counter.ticks;
}
