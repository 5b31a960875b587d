//! Per-client aggregation of raw contract records.
//!
//! Single pass: records fold into one accumulator per `client_id`, then
//! each accumulator finalizes into a `ClientAggregate`. A group exists
//! only if at least one record contributed, so the per-client averages
//! never divide by zero.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::classifier::RiskBands;
use crate::error::RiscoError;
use crate::types::{ClientAggregate, ContractRecord, Money};
use crate::RiscoResult;

struct Accumulator {
    contract_count: u64,
    total_value: Money,
    term_sum: u64,
    score_sum: Decimal,
    delinquency_count: u64,
    last_contract_date: NaiveDate,
}

impl Accumulator {
    fn open(record: &ContractRecord) -> Self {
        Accumulator {
            contract_count: 1,
            total_value: record.contract_value,
            term_sum: u64::from(record.term_months),
            score_sum: record.risk_score,
            delinquency_count: u64::from(record.is_delinquent),
            last_contract_date: record.contract_date,
        }
    }

    fn fold(&mut self, record: &ContractRecord) {
        self.contract_count += 1;
        self.total_value += record.contract_value;
        self.term_sum += u64::from(record.term_months);
        self.score_sum += record.risk_score;
        self.delinquency_count += u64::from(record.is_delinquent);
        if record.contract_date > self.last_contract_date {
            self.last_contract_date = record.contract_date;
        }
    }

    fn finalize(self, client_id: String, bands: &RiskBands) -> RiscoResult<ClientAggregate> {
        let count = Decimal::from(self.contract_count);
        let avg_risk_score = self.score_sum / count;
        let risk_band = bands.classify(avg_risk_score)?.to_string();
        Ok(ClientAggregate {
            client_id,
            contract_count: self.contract_count,
            total_value: self.total_value,
            avg_term_months: Decimal::from(self.term_sum) / count,
            avg_risk_score,
            risk_band,
            delinquency_count: self.delinquency_count,
            delinquency_rate: Decimal::from(self.delinquency_count) / count,
            last_contract_month: self.last_contract_date.format("%Y-%m").to_string(),
        })
    }
}

/// Group `records` by client and compute one `ClientAggregate` per
/// distinct client id, classified on the client's mean score.
///
/// Output is sorted by client id. The order carries no meaning; it is
/// just deterministic. Empty input is an error, not an empty table.
pub fn aggregate(
    bands: &RiskBands,
    records: &[ContractRecord],
) -> RiscoResult<Vec<ClientAggregate>> {
    if records.is_empty() {
        return Err(RiscoError::EmptyResult);
    }

    let mut groups: BTreeMap<&str, Accumulator> = BTreeMap::new();
    for record in records {
        match groups.get_mut(record.client_id.as_str()) {
            Some(acc) => acc.fold(record),
            None => {
                groups.insert(record.client_id.as_str(), Accumulator::open(record));
            }
        }
    }

    groups
        .into_iter()
        .map(|(client_id, acc)| acc.finalize(client_id.to_string(), bands))
        .collect()
}
