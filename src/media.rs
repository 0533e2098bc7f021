//! Media Resolution
//!
//! Maps logical keys to playable URLs. Resolution never fails loudly: any
//! miss or error degrades the card to its fallback visual.

use std::collections::HashMap;
use std::sync::Arc;

use crate::api::Api;
use crate::config::StaticMediaTable;
use crate::keys::LogicalKey;
use crate::models::CategorizedDataset;
use crate::navigation::NavigationController;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Actions are shown as videos, every other level as images
    pub fn for_key(key: &LogicalKey) -> Self {
        match key {
            LogicalKey::Action(..) => MediaKind::Video,
            _ => MediaKind::Image,
        }
    }
}

/// What a card shows for its media
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaState {
    Loading,
    Ready(String),
    Fallback,
}

/// First, synchronous step of resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// URL known without a round trip
    Ready(String),
    /// Stored reference that must be exchanged with the backend
    Remote(String),
    Missing,
}

/// Where a browser screen gets its media from
#[derive(Debug, Clone)]
pub enum MediaSource {
    /// Bundled assets listed in the app config
    Static(Arc<StaticMediaTable>),
    /// References stored alongside the dataset, served by the backend
    Remote(Api),
}

impl MediaSource {
    pub fn lookup(&self, key: &LogicalKey, dataset: &CategorizedDataset) -> Lookup {
        let kind = MediaKind::for_key(key);
        let name = key.to_string();
        match self {
            MediaSource::Static(table) => {
                let map = match kind {
                    MediaKind::Image => &table.images,
                    MediaKind::Video => &table.videos,
                };
                found(map, &name).map(Lookup::Ready).unwrap_or(Lookup::Missing)
            }
            MediaSource::Remote(api) => match kind {
                MediaKind::Image => found(&dataset.images, &name)
                    .map(|reference| Lookup::Ready(api.image_url(&reference)))
                    .unwrap_or(Lookup::Missing),
                MediaKind::Video => found(&dataset.videos, &name).map(Lookup::Remote).unwrap_or(Lookup::Missing),
            },
        }
    }

    /// Complete a lookup, exchanging a stored reference if there is one
    pub async fn finish(&self, key: &LogicalKey, lookup: Lookup) -> MediaState {
        match lookup {
            Lookup::Ready(url) => MediaState::Ready(url),
            Lookup::Missing => {
                log::debug!("[MEDIA] No media for {}", key);
                MediaState::Fallback
            }
            Lookup::Remote(reference) => match self {
                MediaSource::Remote(api) => match api.media_url(&reference).await {
                    Ok(url) => MediaState::Ready(url),
                    Err(e) => {
                        log::warn!("[MEDIA] Could not resolve {}: {}", key, e);
                        MediaState::Fallback
                    }
                },
                MediaSource::Static(_) => MediaState::Fallback,
            },
        }
    }

    /// Audio for a spoken name; `None` when there is none
    pub async fn resolve_audio(&self, name: &str) -> Option<String> {
        match self {
            MediaSource::Static(table) => {
                let url = found(&table.audio, name);
                if url.is_none() {
                    log::warn!("[AUDIO] No audio file found for: {}", name);
                }
                url
            }
            MediaSource::Remote(api) => match api.audio_url(name).await {
                Ok(url) => url,
                Err(e) => {
                    log::warn!("[AUDIO] Error fetching audio for {}: {}", name, e);
                    None
                }
            },
        }
    }
}

fn found(map: &HashMap<String, String>, key: &str) -> Option<String> {
    map.get(key).filter(|value| !value.is_empty()).cloned()
}

/// Per-card media states for the cards currently on screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaSlots {
    epoch: u64,
    states: HashMap<LogicalKey, MediaState>,
}

impl MediaSlots {
    /// Start a new round for `epoch`, dropping every earlier state.
    pub fn begin(&mut self, epoch: u64) {
        self.epoch = epoch;
        self.states.clear();
    }

    /// Apply a resolution result unless the view has moved on since it was
    /// requested. Returns whether it was applied.
    pub fn commit(&mut self, epoch: u64, key: LogicalKey, state: MediaState, nav: &NavigationController) -> bool {
        if epoch != self.epoch || epoch != nav.epoch() || !nav.is_visible(&key) {
            log::debug!("[MEDIA] Dropping stale result for {}", key);
            return false;
        }
        self.states.insert(key, state);
        true
    }

    pub fn get(&self, key: &LogicalKey) -> MediaState {
        self.states.get(key).cloned().unwrap_or(MediaState::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::models::Item;

    fn bread() -> Item {
        Item {
            name: "bread".to_string(),
            category: "food".to_string(),
            subcategory: "baked goods".to_string(),
            requests: vec!["toast".to_string()],
        }
    }

    fn remote() -> MediaSource {
        MediaSource::Remote(Api::new(&AppConfig::default()))
    }

    #[test]
    fn test_missing_item_image_falls_back() {
        let dataset = CategorizedDataset { items: vec![bread()], ..Default::default() };
        assert_eq!(remote().lookup(&LogicalKey::item("bread"), &dataset), Lookup::Missing);

        let table = StaticMediaTable::default();
        let source = MediaSource::Static(Arc::new(table));
        assert_eq!(source.lookup(&LogicalKey::item("bread"), &dataset), Lookup::Missing);
    }

    #[test]
    fn test_remote_lookup() {
        let mut dataset = CategorizedDataset { items: vec![bread()], ..Default::default() };
        dataset.images.insert("item-bread".into(), "images/item_bread.png".into());
        dataset.videos.insert("bread-toast".into(), "bread_toast.mp4".into());

        assert_eq!(
            remote().lookup(&LogicalKey::item("bread"), &dataset),
            Lookup::Ready("/api/images/item_bread.png".to_string())
        );
        assert_eq!(
            remote().lookup(&LogicalKey::action("bread", "toast"), &dataset),
            Lookup::Remote("bread_toast.mp4".to_string())
        );
    }

    #[test]
    fn test_static_lookup_ignores_dataset() {
        let mut table = StaticMediaTable::default();
        table.images.insert("category-food".into(), "/assets/food.png".into());
        table.videos.insert("bread-toast".into(), "/assets/bread/toast.mp4".into());
        let source = MediaSource::Static(Arc::new(table));
        let dataset = CategorizedDataset::default();

        assert_eq!(source.lookup(&LogicalKey::category("food"), &dataset), Lookup::Ready("/assets/food.png".into()));
        assert_eq!(
            source.lookup(&LogicalKey::action("bread", "toast"), &dataset),
            Lookup::Ready("/assets/bread/toast.mp4".into())
        );
    }

    #[test]
    fn test_empty_reference_counts_as_missing() {
        let mut dataset = CategorizedDataset::default();
        dataset.images.insert("category-food".into(), String::new());
        assert_eq!(remote().lookup(&LogicalKey::category("food"), &dataset), Lookup::Missing);
    }

    #[test]
    fn test_commit_applies_for_current_view() {
        let nav = NavigationController::new(&[bread()]);
        let mut slots = MediaSlots::default();
        slots.begin(nav.epoch());

        let key = LogicalKey::category("food");
        assert!(slots.commit(nav.epoch(), key.clone(), MediaState::Fallback, &nav));
        assert_eq!(slots.get(&key), MediaState::Fallback);
    }

    #[test]
    fn test_commit_discards_after_navigation() {
        let mut nav = NavigationController::new(&[bread()]);
        let mut slots = MediaSlots::default();
        slots.begin(nav.epoch());
        let requested_at = nav.epoch();

        nav.enter("food").unwrap();
        let key = LogicalKey::category("food");
        assert!(!slots.commit(requested_at, key.clone(), MediaState::Ready("x".into()), &nav));
        assert_eq!(slots.get(&key), MediaState::Loading);

        // a key that is not on screen is rejected even with a fresh epoch
        slots.begin(nav.epoch());
        assert!(!slots.commit(nav.epoch(), LogicalKey::item("bread"), MediaState::Fallback, &nav));
    }

    #[test]
    fn test_kind_for_key() {
        assert_eq!(MediaKind::for_key(&LogicalKey::action("bread", "toast")), MediaKind::Video);
        assert_eq!(MediaKind::for_key(&LogicalKey::item("bread")), MediaKind::Image);
    }
}
