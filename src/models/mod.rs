// src/models/mod.rs

pub mod notify;
pub mod quiz;
pub mod submission;
