//! Band-level portfolio rollup of the per-client table.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::classifier::RiskBands;
use crate::types::{ClientAggregate, Money, RiskBandSummary};

#[derive(Default)]
struct BandAccumulator {
    client_count: u64,
    total_contracts: u64,
    total_delinquencies: u64,
    total_value: Money,
}

/// Roll the per-client table up into one `RiskBandSummary` per configured
/// band, in configuration order. Bands with no clients still appear, with
/// zeroed statistics.
///
/// The delinquency rate and average value are contract-weighted: summed
/// delinquencies and value over summed contracts across the band's
/// clients. Averaging each client's own rate instead would bias the band
/// toward clients with few contracts.
pub fn summarize(bands: &RiskBands, aggregates: &[ClientAggregate]) -> Vec<RiskBandSummary> {
    let mut per_band: HashMap<&str, BandAccumulator> = HashMap::new();
    for aggregate in aggregates {
        let acc = per_band.entry(aggregate.risk_band.as_str()).or_default();
        acc.client_count += 1;
        acc.total_contracts += aggregate.contract_count;
        acc.total_delinquencies += aggregate.delinquency_count;
        acc.total_value += aggregate.total_value;
    }

    bands
        .labels()
        .map(|label| {
            let acc = per_band.remove(label).unwrap_or_default();
            let (delinquency_rate, avg_contract_value) = if acc.total_contracts == 0 {
                (Decimal::ZERO, Decimal::ZERO)
            } else {
                let contracts = Decimal::from(acc.total_contracts);
                (
                    Decimal::from(acc.total_delinquencies) / contracts,
                    acc.total_value / contracts,
                )
            };
            RiskBandSummary {
                band: label.to_string(),
                client_count: acc.client_count,
                delinquency_rate,
                avg_contract_value,
            }
        })
        .collect()
}
