// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod repos;
pub mod security;
pub mod time;

pub use repos::InMemoryBlog;
pub use security::{ALICE_TOKEN, BOB_TOKEN, DummyTokenManager, GHOST_TOKEN, alice, bob, ghost};
pub use time::{FixedClock, fixed_now};
