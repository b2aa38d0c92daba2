pub mod error;
pub mod form;
pub mod menu;
pub mod notification;
pub mod theme;
