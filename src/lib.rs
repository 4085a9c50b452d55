pub mod availability;
pub mod config;
pub mod content;
pub mod fixtures;
pub mod formation;
pub mod seed;
pub mod state;
pub mod training;
pub mod ui;
