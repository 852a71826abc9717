pub mod catalog;
pub mod page;
pub mod prefs;
pub mod sizes;
