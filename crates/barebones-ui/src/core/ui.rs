//! Pure rendering rules for the data section, extracted for non-wasm testing.

use crate::core::store::ViewState;
use crate::core::text::{LOADING, NO_DATA};
use barebones_api_models::Item;

/// One rendered item card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemCard {
    /// List key derived from the item id.
    pub key: String,
    /// Card heading.
    pub name: String,
    /// Card body.
    pub description: String,
}

impl From<&Item> for ItemCard {
    fn from(item: &Item) -> Self {
        Self {
            key: item.id.key(),
            name: item.name.clone(),
            description: item.description.clone(),
        }
    }
}

/// Exactly one of these renders below the section head.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSection {
    /// Loading indicator text.
    Loading(&'static str),
    /// Error banner text.
    Banner(String),
    /// Placeholder text for an empty list.
    Empty(&'static str),
    /// Item cards in server order.
    Cards(Vec<ItemCard>),
}

/// Map a view state to the section that renders for it.
#[must_use]
pub fn data_section(view: &ViewState) -> DataSection {
    match view {
        ViewState::Loading => DataSection::Loading(LOADING),
        ViewState::Error(message) => DataSection::Banner(message.clone()),
        ViewState::Ready(items) if items.is_empty() => DataSection::Empty(NO_DATA),
        ViewState::Ready(items) => DataSection::Cards(items.iter().map(ItemCard::from).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ApiError;
    use crate::core::store::{AppStore, apply_health_probe, begin_fetch, complete_fetch};
    use barebones_api_models::{HealthResponse, ItemsPayload};
    use std::rc::Rc;

    fn items_from(body: &str) -> Vec<Item> {
        serde_json::from_str::<ItemsPayload>(body)
            .unwrap()
            .into_items()
    }

    #[test]
    fn cards_follow_payload_order_and_count() {
        let items = items_from(
            r#"{"items":[
                {"id":3,"name":"C","description":"third"},
                {"id":1,"name":"A","description":"first"},
                {"id":2,"name":"B","description":"second"}
            ]}"#,
        );
        let DataSection::Cards(cards) = data_section(&ViewState::Ready(Rc::new(items))) else {
            panic!("expected cards");
        };
        assert_eq!(cards.len(), 3);
        let keys: Vec<&str> = cards.iter().map(|card| card.key.as_str()).collect();
        assert_eq!(keys, ["n:3", "n:1", "n:2"]);
        assert_eq!(cards[1].name, "A");
        assert_eq!(cards[1].description, "first");
    }

    #[test]
    fn mixed_id_shapes_get_distinct_card_keys() {
        let items = items_from(
            r#"{"items":[
                {"id":1,"name":"num","description":"integer id"},
                {"id":"1","name":"text","description":"string id"},
                {"id":1.5,"name":"frac","description":"float id"},
                {"id":18446744073709551615,"name":"big","description":"u64 id"}
            ]}"#,
        );
        let DataSection::Cards(cards) = data_section(&ViewState::Ready(Rc::new(items))) else {
            panic!("expected cards");
        };
        let keys: Vec<&str> = cards.iter().map(|card| card.key.as_str()).collect();
        assert_eq!(keys, ["n:1", "s:1", "f:1.5", "n:18446744073709551615"]);
    }

    #[test]
    fn empty_list_shows_placeholder_not_banner() {
        let section = data_section(&ViewState::Ready(Rc::new(items_from(r#"{"items":[]}"#))));
        assert_eq!(section, DataSection::Empty("No data available"));
    }

    #[test]
    fn loading_suppresses_data() {
        assert_eq!(
            data_section(&ViewState::Loading),
            DataSection::Loading("Loading...")
        );
    }

    #[test]
    fn failure_renders_single_banner() {
        let mut store = AppStore::default();
        let first = begin_fetch(&mut store.items);
        let second = begin_fetch(&mut store.items);
        complete_fetch(&mut store.items, first, Err(ApiError::Status(500)));
        complete_fetch(
            &mut store.items,
            second,
            Err(ApiError::Transport("refused".into())),
        );
        assert_eq!(
            data_section(&store.items.view),
            DataSection::Banner("Failed to fetch data from API".to_string())
        );
        assert!(!store.items.is_loading());
    }

    #[test]
    fn ok_probe_and_single_item_settle_into_one_card() {
        let mut store = AppStore::default();
        let health: HealthResponse = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        apply_health_probe(&mut store, Ok(health));
        let seq = begin_fetch(&mut store.items);
        complete_fetch(
            &mut store.items,
            seq,
            Ok(items_from(
                r#"{"items":[{"id":1,"name":"A","description":"first"}]}"#,
            )),
        );

        assert_eq!(store.health.indicator.label(), "✅ ok");
        assert!(!store.items.is_loading());
        assert_eq!(
            data_section(&store.items.view),
            DataSection::Cards(vec![ItemCard {
                key: "n:1".into(),
                name: "A".into(),
                description: "first".into(),
            }])
        );
    }
}
