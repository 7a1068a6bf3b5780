//! A people counter: two persisted counts behind increment, decrement and
//! reset, rendered as a terminal screen.

pub mod cli;
pub mod config;
pub mod counter;
pub mod logging;
pub mod observable;
pub mod storage;
pub mod ui;
