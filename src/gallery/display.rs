//! Derived list shown in the grid.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::api::nft::Nft;

/// Applies the floor-price toggle to the active list.
///
/// With the toggle off the list is returned as is (`None` stays `None`). With
/// it on, only entries whose floor price is strictly positive survive, ordered
/// from highest to lowest. The sort is stable, so ties keep the provider's order.
pub fn displayed_nfts(list: Option<&[Nft]>, filter_by_floor_price: bool) -> Option<Vec<Nft>> {
    let list = list?;
    if !filter_by_floor_price {
        return Some(list.to_vec());
    }

    let mut priced: Vec<Nft> = list.iter().filter(|nft| nft.floor_price() > 0.0).cloned().collect();
    priced.sort_by(|a, b| b.floor_price().partial_cmp(&a.floor_price()).unwrap_or(Ordering::Equal));
    Some(priced)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MemoKey {
    fetch_for_collection: bool,
    filter_by_floor_price: bool,
    generation: u64,
}

/// Caches [`displayed_nfts`] until the mode, the filter or the active result changes.
#[derive(Debug, Default)]
pub struct DisplayMemo {
    key: Option<MemoKey>,
    value: Option<Arc<Vec<Nft>>>,
    computations: u64,
}

impl DisplayMemo {
    pub fn get_or_compute(
        &mut self,
        fetch_for_collection: bool,
        filter_by_floor_price: bool,
        generation: u64,
        list: Option<&[Nft]>,
    ) -> Option<Arc<Vec<Nft>>> {
        let key = MemoKey { fetch_for_collection, filter_by_floor_price, generation };
        if self.key != Some(key) {
            self.value = displayed_nfts(list, filter_by_floor_price).map(Arc::new);
            self.key = Some(key);
            self.computations += 1;
        }
        self.value.clone()
    }

    /// Number of times the list was actually recomputed.
    pub fn computations(&self) -> u64 {
        self.computations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::nft::{ContractMetadata, OpenSeaMetadata};
    use pretty_assertions::assert_eq;

    fn nft(title: &str, floor: Option<f64>) -> Nft {
        Nft {
            title: title.to_string(),
            contract_metadata: ContractMetadata {
                open_sea: OpenSeaMetadata { floor_price: floor, ..Default::default() },
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn prices(list: &[Nft]) -> Vec<f64> {
        list.iter().map(Nft::floor_price).collect()
    }

    #[test]
    fn test_filter_off_passes_through() {
        let list = vec![nft("a", Some(0.0)), nft("b", Some(5.0)), nft("c", None)];
        let shown = displayed_nfts(Some(list.as_slice()), false).unwrap();
        assert_eq!(shown, list);
    }

    #[test]
    fn test_absent_list_stays_absent() {
        assert!(displayed_nfts(None, false).is_none());
        assert!(displayed_nfts(None, true).is_none());
    }

    #[test]
    fn test_filter_on_drops_zero_and_sorts_descending() {
        let list: Vec<Nft> = [0.0, 5.0, 2.0, 0.0, 8.0]
            .iter()
            .enumerate()
            .map(|(i, p)| nft(&i.to_string(), Some(*p)))
            .collect();

        let shown = displayed_nfts(Some(list.as_slice()), true).unwrap();
        assert_eq!(prices(&shown), vec![8.0, 5.0, 2.0]);

        let restored = displayed_nfts(Some(list.as_slice()), false).unwrap();
        assert_eq!(prices(&restored), vec![0.0, 5.0, 2.0, 0.0, 8.0]);
    }

    #[test]
    fn test_missing_floor_price_is_filtered_out() {
        let list = vec![nft("priced", Some(1.5)), nft("unpriced", None)];
        let shown = displayed_nfts(Some(list.as_slice()), true).unwrap();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].title, "priced");
    }

    #[test]
    fn test_ties_keep_original_order() {
        let list = vec![nft("first", Some(3.0)), nft("high", Some(9.0)), nft("second", Some(3.0))];
        let titles: Vec<String> = displayed_nfts(Some(list.as_slice()), true)
            .unwrap()
            .into_iter()
            .map(|n| n.title)
            .collect();
        assert_eq!(titles, vec!["high", "first", "second"]);
    }

    #[test]
    fn test_source_list_is_not_mutated() {
        let list = vec![nft("low", Some(1.0)), nft("high", Some(2.0))];
        let before = list.clone();
        let _ = displayed_nfts(Some(list.as_slice()), true);
        assert_eq!(list, before);
    }

    #[test]
    fn test_memo_recomputes_only_on_key_change() {
        let list = vec![nft("a", Some(1.0)), nft("b", Some(0.0))];
        let mut memo = DisplayMemo::default();

        memo.get_or_compute(false, false, 1, Some(list.as_slice()));
        memo.get_or_compute(false, false, 1, Some(list.as_slice()));
        assert_eq!(memo.computations(), 1);

        let filtered = memo.get_or_compute(false, true, 1, Some(list.as_slice())).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(memo.computations(), 2);

        memo.get_or_compute(false, true, 2, Some(list.as_slice()));
        memo.get_or_compute(true, true, 2, None);
        assert_eq!(memo.computations(), 4);
    }
}
