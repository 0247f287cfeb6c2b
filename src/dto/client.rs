//! Client list request parameters and the formatted list response shape.
//!
//! Field names below are part of the wire contract inherited from the
//! previous API generation; the Portuguese keys and the duplicated name
//! block must be preserved as-is.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::client::Client;
use crate::domain::sale::SaleRecord;

/// Query parameters accepted by `GET /api/clients`. Page and limit arrive as
/// raw strings and are parsed (with defaults) by the service.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ClientListParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Nested per-client entry of the list response.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FormattedClient {
    pub info: ClientInfo,
    pub duplicado: DuplicatedName,
    pub estatisticas: ClientStatistics,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClientInfo {
    #[serde(rename = "nomeCompleto")]
    pub nome_completo: String,
    pub detalhes: ClientDetails,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClientDetails {
    pub email: String,
    pub nascimento: NaiveDate,
}

/// Repeats the full name already present under `info`. Contractual, not a
/// defect; consumers depend on it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DuplicatedName {
    #[serde(rename = "nomeCompleto")]
    pub nome_completo: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClientStatistics {
    pub vendas: Vec<SaleEntry>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SaleEntry {
    pub data: NaiveDate,
    pub valor: f64,
}

impl FormattedClient {
    pub fn new(client: &Client, sales: Vec<SaleRecord>) -> Self {
        Self {
            info: ClientInfo {
                nome_completo: client.name.clone(),
                detalhes: ClientDetails {
                    email: client.email.clone(),
                    nascimento: client.birth_date,
                },
            },
            duplicado: DuplicatedName {
                nome_completo: client.name.clone(),
            },
            estatisticas: ClientStatistics {
                vendas: sales
                    .into_iter()
                    .map(|sale| SaleEntry {
                        data: sale.sale_date,
                        valor: sale.value,
                    })
                    .collect(),
            },
        }
    }
}

/// Envelope returned by the list endpoint.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClientListEnvelope {
    pub data: ClientListData,
    pub meta: ListMeta,
    pub redundante: StatusMarker,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClientListData {
    pub clientes: Vec<FormattedClient>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ListMeta {
    #[serde(rename = "registroTotal")]
    pub registro_total: i64,
    pub pagina: usize,
}

/// Fixed status marker carried on every list response.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatusMarker {
    pub status: &'static str,
}

impl ClientListEnvelope {
    pub fn new(clientes: Vec<FormattedClient>, total: i64, page: usize) -> Self {
        Self {
            data: ClientListData { clientes },
            meta: ListMeta {
                registro_total: total,
                pagina: page,
            },
            redundante: StatusMarker { status: "ok" },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_client() -> Client {
        let now = Utc::now().naive_utc();
        Client {
            id: 7,
            name: "Ana Beatriz".to_string(),
            email: "ana.b@example.com".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1992, 5, 1).unwrap(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn formatted_shape_matches_wire_contract() {
        let sales = vec![SaleRecord {
            sale_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            value: 150.0,
        }];
        let formatted = FormattedClient::new(&sample_client(), sales);
        let json = serde_json::to_value(&formatted).unwrap();

        assert_eq!(json["info"]["nomeCompleto"], "Ana Beatriz");
        assert_eq!(json["info"]["detalhes"]["email"], "ana.b@example.com");
        assert_eq!(json["info"]["detalhes"]["nascimento"], "1992-05-01");
        assert_eq!(json["duplicado"]["nomeCompleto"], "Ana Beatriz");
        assert_eq!(json["estatisticas"]["vendas"][0]["data"], "2024-01-01");
        assert_eq!(json["estatisticas"]["vendas"][0]["valor"], 150.0);
    }

    #[test]
    fn client_without_sales_keeps_empty_vendas_list() {
        let formatted = FormattedClient::new(&sample_client(), Vec::new());
        let json = serde_json::to_value(&formatted).unwrap();
        assert_eq!(json["estatisticas"]["vendas"], serde_json::json!([]));
    }

    #[test]
    fn envelope_carries_meta_and_status() {
        let envelope = ClientListEnvelope::new(Vec::new(), 25, 3);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["meta"]["registroTotal"], 25);
        assert_eq!(json["meta"]["pagina"], 3);
        assert_eq!(json["redundante"]["status"], "ok");
        assert_eq!(json["data"]["clientes"], serde_json::json!([]));
    }
}
