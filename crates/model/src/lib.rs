#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod error;
pub mod quiz;

pub use quiz::{Answer, Quiz, RawQuiz};
