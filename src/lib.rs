#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod dispatcher;
pub mod interpreter;
pub mod link;
