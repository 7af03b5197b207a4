pub mod address;
pub mod keygen;
pub mod query_report;

pub use address::AddressSource;
pub use keygen::{run_keygen, KeygenPlan};
pub use query_report::{balance_target, QueryReport};
