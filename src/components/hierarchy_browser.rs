//! Hierarchy Browser Component
//!
//! Drill-down grid over the current dataset. Both the caregiver's management
//! screen and the patient's preview are instances of this component; they
//! differ only in where media comes from and whether actions can be added.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{AddActionModal, MediaCard};
use crate::context::use_app_context;
use crate::keys::LogicalKey;
use crate::media::{Lookup, MediaKind, MediaSlots, MediaSource, MediaState};
use crate::navigation::{CurrentView, Depth, NavigationController};
use crate::selection::SelectionSet;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::text::title_case;

/// What one card in the grid shows and does
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSpec {
    pub key: LogicalKey,
    pub label: String,
    /// Levels above actions drill down on click; actions toggle selection
    pub drills_down: bool,
}

/// Cards for the current level
pub fn card_specs(view: &CurrentView<'_>) -> Vec<CardSpec> {
    match view {
        CurrentView::Categories { categories } => categories
            .iter()
            .map(|c| CardSpec { key: LogicalKey::category(c), label: c.to_string(), drills_down: true })
            .collect(),
        CurrentView::Subcategories { category, subcategories } => subcategories
            .iter()
            .map(|s| CardSpec { key: LogicalKey::subcategory(category, s), label: s.to_string(), drills_down: true })
            .collect(),
        CurrentView::Items { items, .. } => items
            .iter()
            .map(|item| CardSpec { key: LogicalKey::item(&item.name), label: item.name.clone(), drills_down: true })
            .collect(),
        CurrentView::Actions { item, .. } => item
            .requests
            .iter()
            .map(|action| CardSpec {
                key: LogicalKey::action(&item.name, action),
                label: action.clone(),
                drills_down: false,
            })
            .collect(),
    }
}

/// Heading for the current level
pub fn level_title(view: &CurrentView<'_>) -> String {
    match view {
        CurrentView::Categories { .. } => "Categories".to_string(),
        CurrentView::Subcategories { category, .. } => format!("{} - Subcategories", title_case(category)),
        CurrentView::Items { subcategory, .. } => format!("{} - Items", title_case(subcategory)),
        CurrentView::Actions { item, .. } => format!("{} - Actions", title_case(&item.name)),
    }
}

/// Line listing the picked actions, `None` when nothing is picked
pub fn selection_summary(selection: &SelectionSet) -> Option<String> {
    if selection.is_empty() {
        return None;
    }
    let picked = selection.iter().map(title_case).collect::<Vec<_>>().join(", ");
    Some(format!("{} selected: {}", selection.len(), picked))
}

#[component]
pub fn HierarchyBrowser(
    source: MediaSource,
    /// Show the "Add Action" card on the actions level
    #[prop(optional)]
    allow_add_action: bool,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let source = StoredValue::new(source);
    let placeholders = StoredValue::new(ctx.config().placeholders);

    let nav = RwSignal::new(NavigationController::new(&store.dataset().with_untracked(|d| d.items.clone())));
    let slots = RwSignal::new(MediaSlots::default());
    let (show_add, set_show_add) = signal(false);

    // Regroup whenever the cached dataset changes
    Effect::new(move |_| {
        let items = store.dataset().with(|d| d.items.clone());
        nav.update(|n| n.set_items(&items));
    });

    let epoch = Memo::new(move |_| nav.with(|n| n.epoch()));
    let visible = Memo::new(move |_| nav.with(|n| n.visible_keys()));

    // Resolve media for the cards on screen
    Effect::new(move |_| {
        let epoch = epoch.get();
        let keys = visible.get();
        let dataset = store.dataset().get();
        slots.update(|s| s.begin(epoch));

        for key in keys {
            let lookup = source.with_value(|src| src.lookup(&key, &dataset));
            match lookup {
                Lookup::Ready(url) => commit(slots, nav, epoch, key, MediaState::Ready(url)),
                Lookup::Missing => commit(slots, nav, epoch, key, MediaState::Fallback),
                remote @ Lookup::Remote(_) => {
                    let src = source.get_value();
                    spawn_local(async move {
                        let state = src.finish(&key, remote).await;
                        commit(slots, nav, epoch, key, state);
                    });
                }
            }
        }
    });

    let on_back = move |_| {
        ctx.audio.stop();
        set_show_add.set(false);
        nav.update(|n| {
            n.back();
        });
    };

    let title = move || nav.with(|n| level_title(&n.current()));
    let depth = move || nav.with(|n| n.depth());
    let cards = move || nav.with(|n| card_specs(&n.current()));

    let speak = move |name: String| {
        if ctx.audio.is_playing(&name) {
            ctx.audio.stop();
            return;
        }
        let src = source.get_value();
        spawn_local(async move {
            match src.resolve_audio(&name).await {
                Some(url) => ctx.audio.play_url(name, &url),
                None => {
                    if matches!(src, MediaSource::Remote(_)) {
                        ctx.toast_error("Audio Unavailable", &format!("No audio available for {}", name));
                    }
                }
            }
        });
    };

    let render_card = move |card: CardSpec| {
        let kind = MediaKind::for_key(&card.key);
        let key = card.key.clone();
        let media = Signal::derive(move || slots.with(|s| s.get(&key)));
        let placeholder = placeholders.with_value(|p| match &card.key {
            LogicalKey::Category(_) => Some(p.category.clone()),
            LogicalKey::Subcategory(..) => Some(p.subcategory.clone()),
            LogicalKey::Item(_) => Some(p.item.clone()),
            LogicalKey::Action(..) => None,
        });

        let name = card.label.clone();
        let selected = {
            let name = name.clone();
            let drills_down = card.drills_down;
            Signal::derive(move || !drills_down && nav.with(|n| n.selection().is_some_and(|s| s.contains(&name))))
        };

        let on_select = {
            let name = name.clone();
            Callback::new(move |_| {
                if card.drills_down {
                    ctx.audio.stop();
                    nav.update(|n| {
                        if let Err(e) = n.enter(&name) {
                            log::warn!("[NAV] {}", e);
                        }
                    });
                } else {
                    nav.update(|n| {
                        n.toggle(&name);
                    });
                }
            })
        };

        let spoken = card.key.spoken_name().to_string();
        let on_speak = card.drills_down.then(|| {
            let spoken = spoken.clone();
            Callback::new(move |_| speak(spoken.clone()))
        });
        let speaking = Signal::derive(move || ctx.audio.is_playing(&spoken));

        view! {
            <MediaCard
                label=card.label
                kind=kind
                media=media
                placeholder=placeholder
                selected=selected
                drills_down=card.drills_down
                on_select=on_select
                on_speak=on_speak
                speaking=speaking
            />
        }
    };

    let selected_item = move || nav.with(|n| n.state().selected_item().cloned());
    let summary = move || nav.with(|n| n.selection().and_then(selection_summary));

    view! {
        <div class="hierarchy-browser">
            <Show when=move || depth() != Depth::Categories>
                <button class="back-btn outline" on:click=on_back>"← Back"</button>
            </Show>
            <div class="panel">
                <h2 class="panel-title">{title}</h2>
                {move || summary().map(|line| view! { <p class="muted selection-summary">{line}</p> })}
                <Show
                    when=move || !store.dataset().with(|d| d.is_empty())
                    fallback=|| view! {
                        <p class="muted empty-state">"No data available. Please create categories first."</p>
                    }
                >
                    <div class=move || if depth() == Depth::Actions { "card-grid wide" } else { "card-grid" }>
                        <For
                            each=cards
                            key=|card| card.key.clone()
                            children=render_card
                        />
                        <Show when=move || allow_add_action && depth() == Depth::Actions>
                            <div class="media-card add-card" on:click=move |_| set_show_add.set(true)>
                                <div class="add-plus">"+"</div>
                                <h3>"Add Action"</h3>
                            </div>
                        </Show>
                    </div>
                </Show>
            </div>
            {move || {
                if !show_add.get() {
                    return None;
                }
                selected_item().map(|item| view! {
                    <AddActionModal item=item on_close=move |_| set_show_add.set(false) />
                })
            }}
        </div>
    }
}

fn commit(slots: RwSignal<MediaSlots>, nav: RwSignal<NavigationController>, epoch: u64, key: LogicalKey, state: MediaState) {
    nav.with_untracked(|n| {
        slots.update(|s| {
            s.commit(epoch, key, state, n);
        })
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;

    fn bread() -> Item {
        Item {
            name: "bread".to_string(),
            category: "food".to_string(),
            subcategory: "baked goods".to_string(),
            requests: vec!["spread butter".to_string(), "toast".to_string()],
        }
    }

    #[test]
    fn test_cards_per_level() {
        let mut nav = NavigationController::new(&[bread()]);
        let cards = card_specs(&nav.current());
        assert_eq!(cards, vec![CardSpec { key: LogicalKey::category("food"), label: "food".into(), drills_down: true }]);

        nav.enter("food").unwrap();
        nav.enter("baked goods").unwrap();
        nav.enter("bread").unwrap();
        let cards = card_specs(&nav.current());
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].key, LogicalKey::action("bread", "toast"));
        assert!(cards.iter().all(|c| !c.drills_down));
    }

    #[test]
    fn test_selection_summary() {
        let mut selection = SelectionSet::new();
        assert_eq!(selection_summary(&selection), None);

        selection.toggle("toast");
        selection.toggle("spread butter");
        assert_eq!(selection_summary(&selection).as_deref(), Some("2 selected: Toast, Spread Butter"));

        selection.toggle("toast");
        assert_eq!(selection_summary(&selection).as_deref(), Some("1 selected: Spread Butter"));
    }

    #[test]
    fn test_level_titles() {
        let mut nav = NavigationController::new(&[bread()]);
        assert_eq!(level_title(&nav.current()), "Categories");
        nav.enter("food").unwrap();
        assert_eq!(level_title(&nav.current()), "Food - Subcategories");
        nav.enter("baked goods").unwrap();
        assert_eq!(level_title(&nav.current()), "Baked Goods - Items");
        nav.enter("bread").unwrap();
        assert_eq!(level_title(&nav.current()), "Bread - Actions");
    }
}
