use crate::modules::store::{NotificationKind, NotificationRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Read,
    Unread,
}

impl StatusFilter {
    pub const OPTIONS: [StatusFilter; 3] =
        [StatusFilter::All, StatusFilter::Read, StatusFilter::Unread];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Read => "Read",
            StatusFilter::Unread => "Unread",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindFilter {
    All,
    Kind(NotificationKind),
}

impl KindFilter {
    pub fn options() -> Vec<KindFilter> {
        let mut opts = vec![KindFilter::All];
        opts.extend(NotificationKind::ALL.iter().map(|k| KindFilter::Kind(*k)));
        opts
    }

    pub fn label(&self) -> &'static str {
        match self {
            KindFilter::All => "All",
            KindFilter::Kind(kind) => kind.label(),
        }
    }
}

/// The full set of active filters over the store.
#[derive(Debug, Clone)]
pub struct FilterState {
    pub search_term: String,
    pub status: StatusFilter,
    pub kind: KindFilter,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            status: StatusFilter::All,
            kind: KindFilter::All,
        }
    }
}

impl FilterState {
    pub fn is_default(&self) -> bool {
        self.search_term.is_empty()
            && self.status == StatusFilter::All
            && self.kind == KindFilter::All
    }
}

/// Stable filter over the store: every record is tested independently and
/// survivors keep their original relative order. A record passes only when
/// the search term, status filter, and kind filter all match.
pub fn visible<'a>(
    records: &'a [NotificationRecord],
    filter: &FilterState,
) -> Vec<&'a NotificationRecord> {
    let term = filter.search_term.to_lowercase();
    records
        .iter()
        .filter(|r| {
            let matches_search = term.is_empty()
                || r.title.to_lowercase().contains(&term)
                || r.message.to_lowercase().contains(&term);
            let matches_status = match filter.status {
                StatusFilter::All => true,
                StatusFilter::Read => r.read,
                StatusFilter::Unread => !r.read,
            };
            let matches_kind = match filter.kind {
                KindFilter::All => true,
                KindFilter::Kind(kind) => r.kind == kind,
            };
            matches_search && matches_status && matches_kind
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::store::NotificationStore;

    fn records() -> Vec<NotificationRecord> {
        NotificationStore::new(&[]).records().to_vec()
    }

    #[test]
    fn default_filter_returns_full_collection_in_order() {
        let records = records();
        let visible = visible(&records, &FilterState::default());
        assert_eq!(visible.len(), records.len());
        let ids: Vec<u64> = visible.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn search_matches_title_or_message_case_insensitively() {
        let records = records();
        let mut filter = FilterState::default();
        filter.search_term = "USER".to_string();
        let ids: Vec<u64> = visible(&records, &filter).iter().map(|r| r.id).collect();
        // id 1 matches on title, id 3 on message ("...role to 'Administrator'..."
        // does not contain "user"); id 4 matches neither.
        assert!(ids.contains(&1));
        assert!(!ids.contains(&4));
    }

    #[test]
    fn filters_combine_as_a_conjunction() {
        let records = records();
        let filter = FilterState {
            search_term: "user".to_string(),
            status: StatusFilter::Unread,
            kind: KindFilter::All,
        };
        let ids: Vec<u64> = visible(&records, &filter).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn status_filter_tracks_read_flag() {
        let mut store = NotificationStore::new(&[]);
        store.mark_as_read(1);
        let mut filter = FilterState::default();

        filter.status = StatusFilter::Unread;
        let unread: Vec<u64> = visible(store.records(), &filter).iter().map(|r| r.id).collect();
        assert!(!unread.contains(&1));

        filter.status = StatusFilter::Read;
        let read: Vec<u64> = visible(store.records(), &filter).iter().map(|r| r.id).collect();
        assert!(read.contains(&1));
    }

    #[test]
    fn kind_filter_selects_a_single_kind() {
        let records = records();
        let filter = FilterState {
            search_term: String::new(),
            status: StatusFilter::All,
            kind: KindFilter::Kind(NotificationKind::SystemAlert),
        };
        let ids: Vec<u64> = visible(&records, &filter).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4]);
    }

    #[test]
    fn result_is_always_a_subset_preserving_order() {
        let records = records();
        for status in StatusFilter::OPTIONS {
            for kind in KindFilter::options() {
                let filter = FilterState {
                    search_term: "e".to_string(),
                    status,
                    kind,
                };
                let ids: Vec<u64> = visible(&records, &filter).iter().map(|r| r.id).collect();
                let mut sorted = ids.clone();
                sorted.sort_unstable();
                assert_eq!(ids, sorted);
                assert!(ids.len() <= records.len());
            }
        }
    }

    #[test]
    fn no_match_yields_an_empty_visible_set() {
        let records = records();
        let mut filter = FilterState::default();
        filter.search_term = "zzz-not-present".to_string();
        assert!(visible(&records, &filter).is_empty());
    }
}
