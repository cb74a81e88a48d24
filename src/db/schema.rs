// App DB schema helpers
// Per-user score weight rows. Weights are stored as a JSON blob and
// validated before anything is persisted; the scoring engine itself
// never reads or writes this table.

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::Result;
use crate::weights::ScoreWeights;

/// Current weights for a user.
/// None when the user has no custom configuration (defaults apply).
pub fn get_weights(conn: &Connection, user_id: &str) -> Result<Option<ScoreWeights>> {
    let json: Option<String> = conn
        .query_row(
            "SELECT weights FROM score_weights WHERE user_id = ?1",
            [user_id],
            |row| row.get(0),
        )
        .optional()?;

    match json {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

/// Overwrite a user's weights wholesale.
/// Configurations whose groups do not sum to 1.0 are rejected and nothing
/// is persisted.
pub fn set_weights(conn: &Connection, user_id: &str, weights: &ScoreWeights) -> Result<()> {
    weights.validate()?;

    let json = serde_json::to_string(weights)?;
    conn.execute(
        "INSERT INTO score_weights (user_id, weights) VALUES (?1, ?2)
         ON CONFLICT(user_id) DO UPDATE SET
            weights = excluded.weights,
            updated_at = datetime('now')",
        params![user_id, json],
    )?;

    Ok(())
}

/// Drop a user's custom weights, reverting them to defaults.
/// Returns true if a row was removed.
pub fn reset_weights(conn: &Connection, user_id: &str) -> Result<bool> {
    let deleted = conn.execute("DELETE FROM score_weights WHERE user_id = ?1", [user_id])?;
    Ok(deleted > 0)
}
