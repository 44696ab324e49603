//! Node list parsing for enable/disable arguments.

use crate::engine::errors::NetError;

/// Splits a whitespace- or comma-separated node list.
pub fn split_node_list(list: &str) -> Vec<&str> {
    list.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect()
}

/// Converts FANTASI node references to graph identifiers.
///
/// FANTASI numbers nodes from zero; graphs name them with one-based,
/// zero-padded six-digit strings, so `"0"` becomes `"000001"`.
pub fn parse_fantasi_nodes<S: AsRef<str>>(indices: &[S]) -> Result<Vec<String>, NetError> {
    indices
        .iter()
        .enumerate()
        .map(|(pos, raw)| {
            let raw = raw.as_ref();
            let index = raw
                .parse::<u64>()
                .ok()
                .and_then(|i| i.checked_add(1))
                .ok_or_else(|| NetError::NodeList {
                    position: pos + 1,
                    message: format!("FANTASI node '{}' is not a valid node index", raw),
                })?;
            Ok(format!("{:06}", index))
        })
        .collect()
}
