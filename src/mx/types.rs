#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MxRecord {
    pub preference: u16,
    pub exchange: String,
}

impl MxRecord {
    pub fn new(preference: u16, exchange: impl Into<String>) -> Self {
        Self {
            preference,
            exchange: exchange.into(),
        }
    }
}

/// Échangeur à contacter en premier: plus petite préférence, puis nom.
pub(crate) fn preferred(records: &[MxRecord]) -> Option<&MxRecord> {
    records.iter().min()
}
