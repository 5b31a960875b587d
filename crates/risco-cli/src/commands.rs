//! Handlers for the interactive menu. Each handler takes the explicit
//! session state, reports its own success message, and bubbles failures
//! up to the loop, which reports them and keeps prior state untouched.

use risco_core::aggregate::aggregate;
use risco_core::summary::summarize;

use crate::input;
use crate::output;
use crate::session::Session;

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Operation 1: (re)compute the aggregate table from the loaded records.
pub fn recompute(session: &mut Session) -> CommandResult {
    if session.has_table() {
        println!("Recalculando tabela...");
    } else {
        println!("Calculando tabela...");
    }
    let table = aggregate(session.bands(), session.records())?;
    log::debug!("tabela agregada calculada com {} clientes", table.len());
    session.set_table(table);
    println!("Tabela agregada calculada!\n");
    Ok(())
}

/// Operation 2: load a previously written aggregate table.
pub fn load_table(session: &mut Session, path: &str) -> CommandResult {
    let table = input::table::read_table(path, session.bands())?;
    session.set_table(table);
    println!("Tabela agregada lida do arquivo!\n");
    Ok(())
}

/// Operation 3: persist the aggregate table (band column omitted).
pub fn save_table(session: &Session, path: &str) -> CommandResult {
    output::csv_out::write_aggregate_table(path, session.table()?)?;
    println!("Tabela agregada escrita no arquivo.\n");
    Ok(())
}

/// Operation 4: show band-level portfolio statistics on the console.
pub fn show_summary(session: &Session) -> CommandResult {
    let summary = summarize(session.bands(), session.table()?);
    println!();
    output::table::print_summary(&summary);
    println!();
    Ok(())
}

/// Operation 5: export the dataset variant, with band labels.
pub fn export_dataset(session: &Session, path: &str) -> CommandResult {
    output::csv_out::write_dataset(path, session.table()?)?;
    println!("Dataset final escrito no arquivo.\n");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use risco_core::{ContractRecord, RiskBands, RiscoError};
    use rust_decimal_macros::dec;

    fn session_with_records() -> Session {
        let records = vec![
            ContractRecord {
                client_id: "C1".to_string(),
                contract_value: dec!(1000),
                term_months: 12,
                risk_score: dec!(0.3),
                is_delinquent: 0,
                contract_date: "2023-02-11".parse().unwrap(),
            },
            ContractRecord {
                client_id: "C2".to_string(),
                contract_value: dec!(2000),
                term_months: 24,
                risk_score: dec!(0.9),
                is_delinquent: 1,
                contract_date: "2023-07-19".parse().unwrap(),
            },
        ];
        Session::new(RiskBands::default(), records)
    }

    #[test]
    fn recompute_fills_the_session_table() {
        let mut session = session_with_records();
        recompute(&mut session).unwrap();
        assert_eq!(session.table().unwrap().len(), 2);
    }

    #[test]
    fn recompute_on_empty_records_fails_and_leaves_state_untouched() {
        let mut session = Session::new(RiskBands::default(), vec![]);
        let err = recompute(&mut session).unwrap_err();
        let risco = err.downcast_ref::<RiscoError>().unwrap();
        assert!(matches!(risco, RiscoError::EmptyResult));
        assert!(!session.has_table());
    }

    #[test]
    fn table_operations_fail_before_any_table_exists() {
        let session = session_with_records();
        let err = show_summary(&session).unwrap_err();
        let risco = err.downcast_ref::<RiscoError>().unwrap();
        assert!(matches!(risco, RiscoError::MissingTable));
    }
}
