pub mod application;
pub mod data;
pub mod domain;
pub mod harness;
pub mod infrastructure;
pub mod presentation;
