pub mod header;
pub mod layout;
pub mod modal;
pub mod notification;
pub mod page;
pub mod theme_toggle;

pub use header::Header;
pub use layout::Layout;
pub use modal::{ConfirmationModal, Modal};
pub use notification::{show_notice, NotificationStack};
pub use page::Page;
pub use theme_toggle::ThemeToggle;
