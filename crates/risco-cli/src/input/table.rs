use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;

use risco_core::{ClientAggregate, RiskBands, RiscoError};

/// One persisted row of the aggregate-table export. The persisted format
/// drops the band and the raw delinquency count; both are reconstructed
/// on load.
#[derive(Debug, Deserialize)]
struct PersistedAggregate {
    #[serde(rename = "id_cliente")]
    client_id: String,
    #[serde(rename = "qtd_contratos")]
    contract_count: u64,
    #[serde(rename = "valor_total")]
    total_value: Decimal,
    #[serde(rename = "prazo_medio")]
    avg_term_months: Decimal,
    #[serde(rename = "score_medio")]
    avg_risk_score: Decimal,
    #[serde(rename = "percentual_inadimplencia")]
    delinquency_rate: Decimal,
    #[serde(rename = "mes_ultimo_contrato")]
    last_contract_month: String,
}

impl PersistedAggregate {
    fn restore(self, bands: &RiskBands) -> Result<ClientAggregate, RiscoError> {
        let risk_band = bands.classify(self.avg_risk_score)?.to_string();
        // rate * count is integral up to Decimal rounding of the persisted rate
        let delinquency_count = (self.delinquency_rate * Decimal::from(self.contract_count))
            .round()
            .to_u64()
            .unwrap_or(0);
        Ok(ClientAggregate {
            client_id: self.client_id,
            contract_count: self.contract_count,
            total_value: self.total_value,
            avg_term_months: self.avg_term_months,
            avg_risk_score: self.avg_risk_score,
            risk_band,
            delinquency_count,
            delinquency_rate: self.delinquency_rate,
            last_contract_month: self.last_contract_month,
        })
    }
}

/// Load a previously written aggregate table, re-deriving the band label
/// (via the current threshold policy) and the delinquency count.
pub fn read_table(
    path: &str,
    bands: &RiskBands,
) -> Result<Vec<ClientAggregate>, Box<dyn std::error::Error>> {
    let mut reader =
        csv::Reader::from_path(path).map_err(|e| format!("Falha ao ler '{}': {}", path, e))?;

    let mut table = Vec::new();
    for row in reader.deserialize() {
        let persisted: PersistedAggregate = row.map_err(|e| RiscoError::MalformedRecord {
            line: e.position().map(|p| p.line()).unwrap_or(0),
            reason: e.to_string(),
        })?;
        table.push(persisted.restore(bands)?);
    }

    if table.is_empty() {
        return Err(Box::new(RiscoError::EmptyResult));
    }

    log::debug!("tabela agregada com {} clientes lida de {}", table.len(), path);
    Ok(table)
}
