use risco_core::{ContractRecord, RiscoError};

/// Read the raw contracts CSV into typed records.
///
/// Columns: `id_cliente, valor_contrato, prazo_meses, score_risco,
/// inadimplente, data_contrato` with dates as `YYYY-MM-DD`. Any row that
/// fails to parse rejects the whole batch with the offending line number;
/// a partially parsed batch would silently corrupt every aggregate
/// derived from it.
pub fn read_records(path: &str) -> Result<Vec<ContractRecord>, Box<dyn std::error::Error>> {
    let mut reader =
        csv::Reader::from_path(path).map_err(|e| format!("Falha ao ler '{}': {}", path, e))?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: ContractRecord = row.map_err(|e| RiscoError::MalformedRecord {
            line: e.position().map(|p| p.line()).unwrap_or(0),
            reason: e.to_string(),
        })?;
        records.push(record);
    }

    log::debug!("{} registros lidos de {}", records.len(), path);
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    fn write_csv(dir: &tempfile::TempDir, name: &str, contents: &str) -> String {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn reads_well_formed_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "contratos.csv",
            "id_cliente,valor_contrato,prazo_meses,score_risco,inadimplente,data_contrato\n\
             C1,1500.50,24,0.35,0,2023-05-14\n\
             C1,800,12,0.45,1,2023-11-30\n",
        );
        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].client_id, "C1");
        assert_eq!(records[0].contract_value, dec!(1500.50));
        assert_eq!(records[1].is_delinquent, 1);
        assert_eq!(records[1].contract_date.to_string(), "2023-11-30");
    }

    #[test]
    fn malformed_date_rejects_the_whole_batch_with_line_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "contratos.csv",
            "id_cliente,valor_contrato,prazo_meses,score_risco,inadimplente,data_contrato\n\
             C1,1500,24,0.35,0,2023-05-14\n\
             C2,800,12,0.45,1,14/11/2023\n",
        );
        let err = read_records(&path).unwrap_err();
        let risco = err.downcast::<RiscoError>().unwrap();
        match *risco {
            RiscoError::MalformedRecord { line, .. } => assert_eq!(line, 3),
            other => panic!("expected MalformedRecord, got {other}"),
        }
    }

    #[test]
    fn non_numeric_field_rejects_the_whole_batch() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            &dir,
            "contratos.csv",
            "id_cliente,valor_contrato,prazo_meses,score_risco,inadimplente,data_contrato\n\
             C1,muito,24,0.35,0,2023-05-14\n",
        );
        let err = read_records(&path).unwrap_err();
        assert!(err.downcast_ref::<RiscoError>().is_some());
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = read_records("nao_existe.csv").unwrap_err();
        assert!(err.to_string().contains("nao_existe.csv"));
    }
}
