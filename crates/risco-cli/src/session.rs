use risco_core::{ClientAggregate, ContractRecord, RiskBands, RiscoError, RiscoResult};

/// Explicit state for the command loop: the loaded raw records, the band
/// policy, and the aggregate table once one has been computed or loaded.
///
/// Operations that need the table go through [`Session::table`], which
/// turns its absence into a typed precondition failure instead of a
/// nullable global behind a boolean flag.
pub struct Session {
    bands: RiskBands,
    records: Vec<ContractRecord>,
    table: Option<Vec<ClientAggregate>>,
}

impl Session {
    pub fn new(bands: RiskBands, records: Vec<ContractRecord>) -> Self {
        Session {
            bands,
            records,
            table: None,
        }
    }

    pub fn bands(&self) -> &RiskBands {
        &self.bands
    }

    pub fn records(&self) -> &[ContractRecord] {
        &self.records
    }

    /// The aggregate table, or `MissingTable` if none exists yet.
    pub fn table(&self) -> RiscoResult<&[ClientAggregate]> {
        self.table.as_deref().ok_or(RiscoError::MissingTable)
    }

    /// Whether a table exists. Display-only; handlers use [`Session::table`].
    pub fn has_table(&self) -> bool {
        self.table.is_some()
    }

    pub fn set_table(&mut self, table: Vec<ClientAggregate>) {
        self.table = Some(table);
    }
}
