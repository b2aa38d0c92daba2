/// Which row action menu is open. At most one is open at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActionMenu {
    #[default]
    Closed,
    Open(i32),
}

impl ActionMenu {
    /// Opens the menu for `id`, or closes it if it was already open.
    pub fn toggle(&mut self, id: i32) {
        *self = match *self {
            ActionMenu::Open(open) if open == id => ActionMenu::Closed,
            _ => ActionMenu::Open(id),
        };
    }

    pub fn close(&mut self) {
        *self = ActionMenu::Closed;
    }

    pub fn is_open(&self, id: i32) -> bool {
        *self == ActionMenu::Open(id)
    }
}
