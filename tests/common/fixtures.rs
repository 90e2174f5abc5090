//! Test fixtures - mappable types shared across integration tests.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use fieldmap::{mappable, Mappable, TypeDescriptor};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Order {
    pub order_id: i32,
    pub order_name: String,
    pub order_date: NaiveDateTime,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct OrderDto {
    pub order_id: i32,
    pub order_name: String,
    pub order_date: NaiveDateTime,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct OrderWithNote {
    pub order_id: i32,
    pub order_name: String,
    pub order_date: NaiveDateTime,
    pub note: String,
}

/// Same field names as `Order`, but `order_id` has a different type
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WideOrder {
    pub order_id: i64,
    pub order_name: String,
}

/// `order_id` is case-different from `Order::order_id`
#[allow(non_snake_case)]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ShoutyOrder {
    pub ORDER_ID: i32,
    pub order_name: String,
}

/// Optional fields accept plain source values
#[derive(Debug, Default, Clone, PartialEq)]
pub struct OptionalOrder {
    pub order_id: Option<i32>,
    pub order_name: Option<String>,
}

/// Has no parameterless constructor
#[derive(Debug, Clone, PartialEq)]
pub struct SealedOrder {
    pub order_id: i32,
}

/// Shares nothing with `Order`
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Telemetry {
    pub samples: u64,
}

/// Destination whose `order_name` is read-only and whose `audit` is write-only
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AuditedOrder {
    pub order_id: i32,
    pub order_name: String,
    pub audit: Vec<String>,
}

/// Carries a shared payload
#[derive(Debug, Default, Clone)]
pub struct Envelope {
    pub payload: Arc<Vec<u8>>,
}

#[derive(Debug, Default, Clone)]
pub struct EnvelopeCopy {
    pub payload: Arc<Vec<u8>>,
}

mappable!(Order { order_id, order_name, order_date });
mappable!(OrderDto { order_id, order_name, order_date });
mappable!(OrderWithNote { order_id, order_name, order_date, note });
mappable!(WideOrder { order_id, order_name });
mappable!(ShoutyOrder { ORDER_ID, order_name });
mappable!(OptionalOrder { order_id, order_name });
mappable!(SealedOrder no_default { order_id });
mappable!(Telemetry { samples });
mappable!(Envelope { payload });
mappable!(EnvelopeCopy { payload });

impl Mappable for AuditedOrder {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::builder::<AuditedOrder>()
            .default_constructor()
            .field(
                "order_id",
                |o: &AuditedOrder| &o.order_id,
                |o: &mut AuditedOrder| &mut o.order_id,
            )
            .read_only("order_name", |o: &AuditedOrder| &o.order_name)
            .write_only("order_date", |o: &mut AuditedOrder, date: NaiveDateTime| {
                o.audit.push(format!("dated {}", date.date()));
            })
            .build()
    }
}

pub fn order_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 15)
        .and_then(|d| d.and_hms_opt(9, 30, 0))
        .expect("valid fixture date")
}

pub fn sample_order() -> Order {
    Order {
        order_id: 1,
        order_name: "OrderName".to_string(),
        order_date: order_date(),
    }
}
