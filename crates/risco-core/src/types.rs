use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5%). Never as percentages.
pub type Rate = Decimal;

/// One raw loan-contract row. Many records share a `client_id`.
///
/// Field renames match the column contract of the contracts CSV
/// (`id_cliente, valor_contrato, prazo_meses, score_risco, inadimplente,
/// data_contrato`), dates formatted `YYYY-MM-DD`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractRecord {
    #[serde(rename = "id_cliente")]
    pub client_id: String,
    #[serde(rename = "valor_contrato")]
    pub contract_value: Money,
    #[serde(rename = "prazo_meses")]
    pub term_months: u32,
    #[serde(rename = "score_risco")]
    pub risk_score: Decimal,
    /// 0 = in good standing, 1 = delinquent.
    #[serde(rename = "inadimplente")]
    pub is_delinquent: u8,
    #[serde(rename = "data_contrato")]
    pub contract_date: NaiveDate,
}

/// The rolled-up per-client row derived from that client's contracts.
///
/// Instances are computed fresh from the full record set on every
/// aggregation run (or reconstructed from a persisted table); they are
/// never incrementally updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientAggregate {
    #[serde(rename = "id_cliente")]
    pub client_id: String,
    /// Always > 0: a client only appears if at least one record grouped into it.
    #[serde(rename = "qtd_contratos")]
    pub contract_count: u64,
    #[serde(rename = "valor_total")]
    pub total_value: Money,
    #[serde(rename = "prazo_medio")]
    pub avg_term_months: Decimal,
    #[serde(rename = "score_medio")]
    pub avg_risk_score: Decimal,
    #[serde(rename = "faixa_risco")]
    pub risk_band: String,
    #[serde(rename = "inadimplencias")]
    pub delinquency_count: u64,
    /// delinquency_count / contract_count, in [0, 1].
    #[serde(rename = "percentual_inadimplencia")]
    pub delinquency_rate: Rate,
    /// Year-month (`YYYY-MM`) of the most recent contract date.
    #[serde(rename = "mes_ultimo_contrato")]
    pub last_contract_month: String,
}

/// Band-level portfolio statistics. Rates are contract-weighted: summed
/// numerators over summed denominators across the band's clients, not an
/// average of per-client rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskBandSummary {
    #[serde(rename = "faixa")]
    pub band: String,
    #[serde(rename = "n_clientes")]
    pub client_count: u64,
    #[serde(rename = "taxa_inadimplencia")]
    pub delinquency_rate: Rate,
    #[serde(rename = "valor_medio")]
    pub avg_contract_value: Money,
}
