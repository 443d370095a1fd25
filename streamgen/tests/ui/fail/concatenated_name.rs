#![allow(dead_code)]

use streamgen::create_async_stream;

#[create_async_stream(of: i32.self, named: "num" + "bers")]
pub struct Counter {
    ticks: u64,
}

fn main() {
    let _ = Counter { ticks: 0 };
}
