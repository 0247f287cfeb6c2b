//! Sale projections consumed when listing clients.
//!
//! Sales are read-only here; nothing in this service creates them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::client::Client;

/// The slice of a sale carried into the formatted list response.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SaleRecord {
    pub sale_date: NaiveDate,
    pub value: f64,
}

/// One flat record of the clients LEFT JOIN sales query. Clients without
/// sales appear once with `sale` unset; clients with several sales appear
/// once per sale.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientSaleRow {
    pub client: Client,
    pub sale: Option<SaleRecord>,
}
