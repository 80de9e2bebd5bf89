//! zcalc: a small arithmetic calculator with a recallable history.
//!
//! The [`calculator`] module holds the state machine and formatting rules,
//! [`history`] keeps the last calculations and [`ui`] adapts the engine to a
//! renderer such as the terminal front end.

pub mod calculator;
pub mod config;
pub mod history;
pub mod logging;
pub mod ui;
