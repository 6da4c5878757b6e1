pub mod marketplace_controller;
pub mod quote_controller;
pub mod tracking_controller;
