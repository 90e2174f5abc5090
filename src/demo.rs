//! Sample types used by the `fieldmap` demo commands

use chrono::NaiveDateTime;
use serde::Serialize;

/// Source type
#[derive(Debug, Default, Clone, Serialize)]
pub struct Order {
    pub order_id: i32,
    pub order_name: String,
    pub order_date: NaiveDateTime,
}

/// Destination with the same fields
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct OrderDto {
    pub order_id: i32,
    pub order_name: String,
    pub order_date: NaiveDateTime,
}

/// Another destination with the same fields, cached as its own pair
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct OrderDto2 {
    pub order_id: i32,
    pub order_name: String,
    pub order_date: NaiveDateTime,
}

/// Destination with an extra field the source does not have
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct OrderNote {
    pub order_id: i32,
    pub order_name: String,
    pub order_date: NaiveDateTime,
    pub note: String,
}

fieldmap::mappable!(Order { order_id, order_name, order_date });
fieldmap::mappable!(OrderDto { order_id, order_name, order_date });
fieldmap::mappable!(OrderDto2 { order_id, order_name, order_date });
fieldmap::mappable!(OrderNote { order_id, order_name, order_date, note });

pub fn sample_order() -> Order {
    Order {
        order_id: 1,
        order_name: "OrderName".to_string(),
        order_date: chrono::Local::now().naive_local(),
    }
}
