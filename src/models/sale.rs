use chrono::NaiveDate;
use diesel::prelude::*;

/// Insertable sale row. The API never creates sales; this exists for
/// seeding and test fixtures.
#[derive(Insertable)]
#[diesel(table_name = crate::schema::sales)]
pub struct NewSale {
    pub client_id: i32,
    pub value: f64,
    pub sale_date: NaiveDate,
}
