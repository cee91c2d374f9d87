use ratatui::style::Color;

use crate::config::NotificationSeed;

/// Closed set of notification categories. `Unknown` is the fallback for
/// labels we do not recognize when seeding from config; it is never offered
/// in the type filter picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    UserRegistered,
    ProfileUpdate,
    PendingApproval,
    SystemAlert,
    FeatureAnnouncement,
    Unknown,
}

impl NotificationKind {
    /// The five filterable kinds, in picker order.
    pub const ALL: [NotificationKind; 5] = [
        NotificationKind::UserRegistered,
        NotificationKind::ProfileUpdate,
        NotificationKind::PendingApproval,
        NotificationKind::SystemAlert,
        NotificationKind::FeatureAnnouncement,
    ];

    pub fn parse(label: &str) -> Self {
        match label {
            "user_registered" => NotificationKind::UserRegistered,
            "profile_update" => NotificationKind::ProfileUpdate,
            "pending_approval" => NotificationKind::PendingApproval,
            "system_alert" => NotificationKind::SystemAlert,
            "feature_announcement" => NotificationKind::FeatureAnnouncement,
            _ => NotificationKind::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::UserRegistered => "user_registered",
            NotificationKind::ProfileUpdate => "profile_update",
            NotificationKind::PendingApproval => "pending_approval",
            NotificationKind::SystemAlert => "system_alert",
            NotificationKind::FeatureAnnouncement => "feature_announcement",
            NotificationKind::Unknown => "unknown",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::UserRegistered => "👤",
            NotificationKind::ProfileUpdate => "✅",
            NotificationKind::PendingApproval => "🔒",
            NotificationKind::SystemAlert => "⚠️",
            NotificationKind::FeatureAnnouncement => "📣",
            NotificationKind::Unknown => "📢",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            NotificationKind::UserRegistered => Color::Blue,
            NotificationKind::ProfileUpdate => Color::Green,
            NotificationKind::PendingApproval => Color::Yellow,
            NotificationKind::SystemAlert => Color::Red,
            NotificationKind::FeatureAnnouncement => Color::Magenta,
            NotificationKind::Unknown => Color::Gray,
        }
    }

    /// Accent used for the left border marker of a row.
    pub fn accent(&self) -> Color {
        match self {
            NotificationKind::Unknown => Color::DarkGray,
            other => other.color(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NotificationRecord {
    pub id: u64,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub timestamp: String,
    pub read: bool,
}

/// In-memory notification collection, insertion-ordered. Mutations rebuild
/// the backing Vec and bump `revision`, so callers can detect change by
/// comparing revisions instead of diffing records.
pub struct NotificationStore {
    records: Vec<NotificationRecord>,
    revision: u64,
    next_id: u64,
}

impl NotificationStore {
    pub fn new(seeds: &[NotificationSeed]) -> Self {
        let mut store = Self {
            records: Vec::new(),
            revision: 0,
            next_id: 1,
        };
        if seeds.is_empty() {
            for (kind, title, message, timestamp, read) in SAMPLE_SET {
                store.push(kind, title, message, timestamp, read);
            }
        } else {
            for seed in seeds {
                store.push(
                    NotificationKind::parse(&seed.kind),
                    &seed.title,
                    &seed.message,
                    &seed.timestamp,
                    seed.read,
                );
            }
        }
        store
    }

    fn push(
        &mut self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        timestamp: impl Into<String>,
        read: bool,
    ) {
        self.records.push(NotificationRecord {
            id: self.next_id,
            kind,
            title: title.into(),
            message: message.into(),
            timestamp: timestamp.into(),
            read,
        });
        self.next_id += 1;
        self.revision += 1;
    }

    pub fn records(&self) -> &[NotificationRecord] {
        &self.records
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn unread_count(&self) -> usize {
        self.records.iter().filter(|r| !r.read).count()
    }

    /// The first `n` unread records in store order, for the bell menu.
    pub fn recent_unread(&self, n: usize) -> Vec<&NotificationRecord> {
        self.records.iter().filter(|r| !r.read).take(n).collect()
    }

    /// Silent no-op when `id` is absent.
    pub fn mark_as_read(&mut self, id: u64) {
        self.records = self
            .records
            .iter()
            .cloned()
            .map(|mut r| {
                if r.id == id {
                    r.read = true;
                }
                r
            })
            .collect();
        self.revision += 1;
    }

    pub fn mark_all_as_read(&mut self) {
        self.records = self
            .records
            .iter()
            .cloned()
            .map(|mut r| {
                r.read = true;
                r
            })
            .collect();
        self.revision += 1;
    }

    /// Removes the matching record. Ids are never reassigned; deleting an
    /// absent id is a silent no-op.
    pub fn delete(&mut self, id: u64) {
        self.records = self
            .records
            .iter()
            .filter(|r| r.id != id)
            .cloned()
            .collect();
        self.revision += 1;
    }
}

/// Built-in demo records used when config supplies no seed entries.
const SAMPLE_SET: [(NotificationKind, &str, &str, &str, bool); 5] = [
    (
        NotificationKind::UserRegistered,
        "New user registered",
        "James Smith (james.s@example.com) has just signed up.",
        "2 minutes ago",
        false,
    ),
    (
        NotificationKind::ProfileUpdate,
        "Profile update successful",
        "Your profile information has been successfully updated.",
        "1 hour ago",
        true,
    ),
    (
        NotificationKind::PendingApproval,
        "Pending approval",
        "Maria Garcia's request to change role to 'Administrator' needs your approval.",
        "3 hours ago",
        false,
    ),
    (
        NotificationKind::SystemAlert,
        "System alert: High CPU usage",
        "The server is experiencing high CPU usage. Please investigate.",
        "1 day ago",
        false,
    ),
    (
        NotificationKind::FeatureAnnouncement,
        "New feature announcement",
        "We've just launched a new feature! Check out the details.",
        "2 days ago",
        true,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> NotificationStore {
        NotificationStore::new(&[])
    }

    #[test]
    fn seeds_sample_set_with_sequential_ids() {
        let store = sample_store();
        assert_eq!(store.len(), 5);
        let ids: Vec<u64> = store.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(store.unread_count(), 3);
    }

    #[test]
    fn mark_as_read_flips_only_the_target() {
        let mut store = sample_store();
        store.mark_as_read(1);
        assert!(store.records()[0].read);
        assert!(!store.records()[2].read);
    }

    #[test]
    fn mark_as_read_on_absent_id_is_a_noop() {
        let mut store = sample_store();
        let before: Vec<bool> = store.records().iter().map(|r| r.read).collect();
        store.mark_as_read(999);
        let after: Vec<bool> = store.records().iter().map(|r| r.read).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn mark_all_as_read_covers_every_record() {
        let mut store = sample_store();
        store.mark_all_as_read();
        assert!(store.records().iter().all(|r| r.read));
        assert_eq!(store.unread_count(), 0);
    }

    #[test]
    fn delete_removes_exactly_one_record() {
        let mut store = sample_store();
        store.delete(3);
        assert_eq!(store.len(), 4);
        assert!(store.records().iter().all(|r| r.id != 3));
        // remaining order untouched
        let ids: Vec<u64> = store.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 4, 5]);
    }

    #[test]
    fn delete_absent_id_leaves_size_unchanged() {
        let mut store = sample_store();
        store.delete(42);
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn mutations_bump_the_revision() {
        let mut store = sample_store();
        let r0 = store.revision();
        store.mark_as_read(1);
        assert!(store.revision() > r0);
        let r1 = store.revision();
        store.delete(1);
        assert!(store.revision() > r1);
    }

    #[test]
    fn recent_unread_preserves_store_order() {
        let store = sample_store();
        let recent: Vec<u64> = store.recent_unread(2).iter().map(|r| r.id).collect();
        assert_eq!(recent, vec![1, 3]);
    }

    #[test]
    fn unrecognized_kind_label_falls_back_to_unknown() {
        assert_eq!(NotificationKind::parse("user_registered"), NotificationKind::UserRegistered);
        assert_eq!(NotificationKind::parse("billing_overdue"), NotificationKind::Unknown);
        assert_eq!(NotificationKind::parse(""), NotificationKind::Unknown);
        // the fallback still renders
        assert_eq!(NotificationKind::Unknown.icon(), "📢");
        assert_eq!(NotificationKind::Unknown.color(), Color::Gray);
    }
}
