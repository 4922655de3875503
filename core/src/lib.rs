//! Dream Story simulation core.
//!
//! A pure state-transition model: hosts dispatch `PlayerCommand`s and pump
//! real time into a `SimEngine`, then render from `SimSnapshot`s. The core
//! never touches a platform clock, a file, or a screen.

pub mod catalog;
pub mod clock;
pub mod command;
pub mod config;
pub mod cooldown;
pub mod engine;
pub mod error;
pub mod event;
pub mod notification;
pub mod resolver;
pub mod scheduler;
pub mod snapshot;
pub mod state;
pub mod stats;
pub mod subsystem;
pub mod types;
