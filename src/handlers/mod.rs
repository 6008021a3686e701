// src/handlers/mod.rs

pub mod dashboard;
pub mod notify;
pub mod quiz;
pub mod submission;
