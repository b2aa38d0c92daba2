#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient banner message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Stack of visible notices, newest first.
///
/// Entries are removed by id so that an expiry timer never removes a notice pushed
/// after it.
#[derive(Clone, Debug, Default)]
pub struct Notifications {
    next_id: u64,
    items: Vec<(u64, Notice)>,
}

impl Notifications {
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.insert(0, (id, notice));
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|(item_id, _)| *item_id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &(u64, Notice)> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_notice_is_first() {
        let mut notifications = Notifications::default();
        notifications.push(Notice::success("first"));
        notifications.push(Notice::error("second"));

        let messages: Vec<&str> = notifications
            .iter()
            .map(|(_, n)| n.message.as_str())
            .collect();

        assert_eq!(messages, vec!["second", "first"]);
    }

    #[test]
    fn dismiss_removes_only_matching_id() {
        let mut notifications = Notifications::default();
        let first = notifications.push(Notice::success("first"));
        let second = notifications.push(Notice::success("second"));

        notifications.dismiss(first);

        assert_eq!(notifications.iter().count(), 1);
        assert_eq!(notifications.iter().next().map(|(id, _)| *id), Some(second));

        notifications.dismiss(first);
        assert_eq!(notifications.iter().count(), 1);
    }
}
