use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A puzzle word in the admin-curated word bank.
///
/// The word itself is stored uppercase; once created it is never updated,
/// only deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Word {
    pub id: String,
    pub word: String,
    pub category: String,
    pub hint: String,
}
