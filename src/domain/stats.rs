//! Read-only sales aggregates served by the stats endpoints.

use chrono::NaiveDate;
use serde::Serialize;

/// Sales totals for a single calendar day.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct DailySales {
    pub sale_date: NaiveDate,
    pub total_sales: f64,
    pub total_transactions: i64,
}

/// Client with the highest total sales volume.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct VolumeLeader {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub total_volume: f64,
}

/// Client with the highest average value per sale.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct AverageLeader {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub average_value: f64,
    pub total_sales: i64,
}

/// Client with sales on the most distinct days.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct FrequencyLeader {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub unique_days: i64,
    pub total_sales: i64,
}

/// Per-metric client leaders; each is absent while the sales table is empty.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ClientLeaderboard {
    #[serde(rename = "topVolumeClient")]
    pub top_volume_client: Option<VolumeLeader>,
    #[serde(rename = "topAverageClient")]
    pub top_average_client: Option<AverageLeader>,
    #[serde(rename = "topFrequencyClient")]
    pub top_frequency_client: Option<FrequencyLeader>,
}

/// Store-wide counters.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct GeneralStats {
    #[serde(rename = "totalClients")]
    pub total_clients: i64,
    #[serde(rename = "totalSales")]
    pub total_sales: i64,
    #[serde(rename = "totalRevenue")]
    pub total_revenue: f64,
    #[serde(rename = "averageSaleValue")]
    pub average_sale_value: f64,
}
