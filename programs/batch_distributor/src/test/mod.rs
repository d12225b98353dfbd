pub mod fixtures;
pub mod memory_ledger;
