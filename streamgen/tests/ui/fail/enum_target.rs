#![allow(dead_code)]

use streamgen::create_async_stream;

#[create_async_stream(of: i32.self, named: "numbers")]
pub enum Mode {
    A,
}

fn main() {
    let _ = Mode::A;
}
