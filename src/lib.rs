pub mod api;
pub mod config;
pub mod controller;
pub mod domain;
pub mod impact;
pub mod portfolio;
pub mod store;
pub mod telemetry;
