//! Property tests for field-by-name copying.

use chrono::DateTime;
use proptest::prelude::*;

use fieldmap::Mapper;

use crate::common::*;

fn order_strategy() -> impl Strategy<Value = Order> {
    (
        any::<i32>(),
        ".{0,32}",
        // Seconds within years 1970..2100
        0i64..4_102_444_800,
    )
        .prop_map(|(order_id, order_name, secs)| Order {
            order_id,
            order_name,
            order_date: DateTime::from_timestamp(secs, 0)
                .map(|dt| dt.naive_utc())
                .unwrap_or_default(),
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every shared, assignable field equals the source value.
    #[test]
    fn property_matching_fields_are_copied(order in order_strategy()) {
        let mapper = Mapper::new();
        let dto: OrderDto = mapper.map(&order).unwrap();

        prop_assert_eq!(dto.order_id, order.order_id);
        prop_assert_eq!(&dto.order_name, &order.order_name);
        prop_assert_eq!(dto.order_date, order.order_date);
    }

    /// PROPERTY: destination fields without a source counterpart stay at their default.
    #[test]
    fn property_unmatched_fields_keep_defaults(order in order_strategy()) {
        let mapper = Mapper::new();
        let noted: OrderWithNote = mapper.map(&order).unwrap();
        let wide: WideOrder = mapper.map(&order).unwrap();

        prop_assert_eq!(noted.note, String::new());
        prop_assert_eq!(wide.order_id, 0);
        prop_assert_eq!(wide.order_name, order.order_name);
    }

    /// PROPERTY: a shared mapper gives the same answer as a fresh one, and compiles once.
    #[test]
    fn property_cached_plan_matches_fresh_plan(
        orders in proptest::collection::vec(order_strategy(), 1..8)
    ) {
        let shared = Mapper::new();
        for order in &orders {
            let cached: OrderDto = shared.map(order).unwrap();
            let fresh: OrderDto = Mapper::new().map(order).unwrap();
            prop_assert_eq!(cached, fresh);
        }
        prop_assert_eq!(shared.stats().compilations, 1);
    }

    /// PROPERTY: the source is never modified by a conversion.
    #[test]
    fn property_source_is_untouched(order in order_strategy()) {
        let before = order.clone();
        let mapper = Mapper::new();
        let _: OptionalOrder = mapper.map(&order).unwrap();
        prop_assert_eq!(order, before);
    }
}
