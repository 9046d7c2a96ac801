use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Reference entity enumerated from storage; no lifecycle beyond bulk reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Skill {
    pub name: String,
}
