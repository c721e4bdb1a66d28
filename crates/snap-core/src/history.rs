//! Download history.

use snap_models::DownloadHistoryItem;

/// Requests handed off during this session, oldest first.
#[derive(Debug, Clone, Default)]
pub struct DownloadHistory {
    items: Vec<DownloadHistoryItem>,
}

impl DownloadHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, item: DownloadHistoryItem) {
        self.items.push(item);
    }

    pub fn iter(&self) -> impl Iterator<Item = &DownloadHistoryItem> {
        self.items.iter()
    }

    pub fn latest(&self) -> Option<&DownloadHistoryItem> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
