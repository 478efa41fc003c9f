//! Console page handlers

pub mod health;
pub mod home;
pub mod forms;
pub mod table;
pub mod campaigns;
pub mod lookups;
pub mod logs;
pub mod transfer;
