pub mod build;
pub mod catalog;
pub mod dispatch;
pub mod link;
pub mod reservations;
