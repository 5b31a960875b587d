use risco_core::ClientAggregate;

/// Write the aggregate table in its persisted form: band label and raw
/// delinquency count are omitted (both are re-derivable on load).
pub fn write_aggregate_table(
    path: &str,
    table: &[ClientAggregate],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer =
        csv::Writer::from_path(path).map_err(|e| format!("Falha ao escrever '{}': {}", path, e))?;

    writer.write_record([
        "id_cliente",
        "qtd_contratos",
        "valor_total",
        "prazo_medio",
        "score_medio",
        "percentual_inadimplencia",
        "mes_ultimo_contrato",
    ])?;
    for row in table {
        writer.write_record([
            row.client_id.clone(),
            row.contract_count.to_string(),
            row.total_value.to_string(),
            row.avg_term_months.to_string(),
            row.avg_risk_score.to_string(),
            row.delinquency_rate.to_string(),
            row.last_contract_month.clone(),
        ])?;
    }
    writer.flush()?;

    log::debug!("tabela agregada com {} clientes escrita em {}", table.len(), path);
    Ok(())
}

/// Write the pre-processed dataset export: same table, but carrying the
/// band label and with the dataset column ordering.
pub fn write_dataset(
    path: &str,
    table: &[ClientAggregate],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer =
        csv::Writer::from_path(path).map_err(|e| format!("Falha ao escrever '{}': {}", path, e))?;

    writer.write_record([
        "id_cliente",
        "faixa_risco",
        "qtd_contratos",
        "valor_total",
        "percentual_inadimplencia",
        "prazo_medio",
        "mes_ultimo_contrato",
    ])?;
    for row in table {
        writer.write_record([
            row.client_id.clone(),
            row.risk_band.clone(),
            row.contract_count.to_string(),
            row.total_value.to_string(),
            row.delinquency_rate.to_string(),
            row.avg_term_months.to_string(),
            row.last_contract_month.clone(),
        ])?;
    }
    writer.flush()?;

    log::debug!("dataset com {} clientes escrito em {}", table.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::table::read_table;
    use risco_core::aggregate::aggregate;
    use risco_core::{ContractRecord, RiskBands};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn sample_table() -> Vec<ClientAggregate> {
        let record = |client_id: &str, value: Decimal, score: Decimal, delinquent: u8, date: &str| {
            ContractRecord {
                client_id: client_id.to_string(),
                contract_value: value,
                term_months: 24,
                risk_score: score,
                is_delinquent: delinquent,
                contract_date: date.parse().unwrap(),
            }
        };
        let records = vec![
            record("C1", dec!(1000.50), dec!(0.2), 0, "2023-01-10"),
            record("C1", dec!(2999.50), dec!(0.4), 1, "2023-04-25"),
            record("C2", dec!(7000), dec!(0.8), 1, "2023-06-05"),
        ];
        aggregate(&RiskBands::default(), &records).unwrap()
    }

    #[test]
    fn aggregate_table_round_trips_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tabela.csv");
        let path = path.to_str().unwrap();
        let original = sample_table();

        write_aggregate_table(path, &original).unwrap();
        let restored = read_table(path, &RiskBands::default()).unwrap();

        assert_eq!(restored.len(), original.len());
        for (a, b) in original.iter().zip(&restored) {
            assert_eq!(a.client_id, b.client_id);
            assert_eq!(a.contract_count, b.contract_count);
            assert_eq!(a.total_value, b.total_value);
            assert_eq!(a.avg_term_months, b.avg_term_months);
            assert_eq!(a.avg_risk_score, b.avg_risk_score);
            assert_eq!(a.risk_band, b.risk_band);
            assert_eq!(a.delinquency_count, b.delinquency_count);
            assert_eq!(a.delinquency_rate, b.delinquency_rate);
            assert_eq!(a.last_contract_month, b.last_contract_month);
        }
    }

    #[test]
    fn table_export_omits_the_band_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tabela.csv");
        write_aggregate_table(path.to_str().unwrap(), &sample_table()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let header = contents.lines().next().unwrap();
        assert_eq!(
            header,
            "id_cliente,qtd_contratos,valor_total,prazo_medio,score_medio,\
             percentual_inadimplencia,mes_ultimo_contrato"
        );
        assert!(!header.contains("faixa_risco"));
    }

    #[test]
    fn dataset_export_carries_the_band_in_its_own_column_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.csv");
        write_dataset(path.to_str().unwrap(), &sample_table()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next().unwrap(),
            "id_cliente,faixa_risco,qtd_contratos,valor_total,\
             percentual_inadimplencia,prazo_medio,mes_ultimo_contrato"
        );
        let first = lines.next().unwrap();
        assert!(first.starts_with("C1,BAIXO,2,4000"));
    }
}
