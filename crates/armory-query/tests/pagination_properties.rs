use armory_model::Character;
use armory_query::{query_characters, CharacterFilter, PageParams};
use proptest::prelude::*;

fn roster(total: usize) -> Vec<Character> {
    (0..total)
        .map(|i| {
            serde_json::from_value(serde_json::json!({
                "id": format!("entity-{i:04}"),
                "name": format!("Entity {i}")
            }))
            .expect("fixture")
        })
        .collect()
}

proptest! {
    #[test]
    fn page_length_is_bounded_by_total_limit_and_offset(
        total in 0usize..300,
        limit in 1usize..=200,
        offset in 0usize..400,
    ) {
        let all = roster(total);
        let page = query_characters(&all, &CharacterFilter::default(), PageParams { limit, offset });

        prop_assert_eq!(page.total, total);
        let expected = if offset < total {
            limit.min(total - offset)
        } else {
            0
        };
        prop_assert_eq!(page.items.len(), expected);
    }

    #[test]
    fn page_window_is_contiguous(
        total in 1usize..100,
        limit in 1usize..=50,
        offset in 0usize..100,
    ) {
        let all = roster(total);
        let page = query_characters(&all, &CharacterFilter::default(), PageParams { limit, offset });
        for (i, item) in page.items.iter().enumerate() {
            let expected = format!("entity-{:04}", offset + i);
            prop_assert_eq!(item.id.as_str(), expected.as_str());
        }
    }
}
