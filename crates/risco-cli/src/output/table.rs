use rust_decimal_macros::dec;
use tabled::{builder::Builder, Table};

use risco_core::RiskBandSummary;

/// Render the band summary as a console table, one row per configured
/// band in configuration order. Rate shown as a percentage, rate and
/// average value with two decimals.
pub fn render_summary(summary: &[RiskBandSummary]) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["FAIXA", "N_CLIENTES", "TAXA_INADIMP", "VALOR_MEDIO"]);
    for row in summary {
        builder.push_record([
            row.band.clone(),
            row.client_count.to_string(),
            format!("{:.2}%", row.delinquency_rate * dec!(100)),
            format!("{:.2}", row.avg_contract_value),
        ]);
    }
    Table::from(builder)
}

pub fn print_summary(summary: &[RiskBandSummary]) {
    println!("{}", render_summary(summary));
}
