use lazy_static::lazy_static;
use metrics::{counter, Counter};

lazy_static! {
    pub(crate) static ref GLOBAL_STATS: Stats = Stats::new();
}

/// Validation counters, recorded through the `metrics` facade. These are
/// no-ops unless the embedding application installs a recorder.
pub(crate) struct Stats {
    pub cpf_validations: Counter,
    pub cnpj_validations: Counter,

    // Inputs whose cleaned length was neither 11 nor 14; no arithmetic ran
    pub incomplete_inputs: Counter,
    pub checksum_failures: Counter,
}

impl Stats {
    fn new() -> Self {
        Self {
            cpf_validations: counter!("document.validations", "kind" => "cpf"),
            cnpj_validations: counter!("document.validations", "kind" => "cnpj"),
            incomplete_inputs: counter!("document.incomplete_inputs"),
            checksum_failures: counter!("document.checksum_failures"),
        }
    }
}
