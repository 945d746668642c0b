//! Simulated model decoding.
//!
//! Decodes a tiny plain-text manifest instead of a real mesh format:
//!
//! ```text
//! model pawn
//! mesh body
//! mesh base
//! ```
//!
//! Enough structure to exercise the decode-failure and multi-mesh paths
//! without shipping binary fixtures.

use tether_ar::asset::{DecodedModel, ModelDecoder};
use tether_ar::tether::{Error, Result};

/// Decoder for the text manifest format above.
pub struct SimModelDecoder;

impl ModelDecoder for SimModelDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<DecodedModel> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| Error::AssetDecode(format!("Manifest is not UTF-8: {}", e)))?;

        let mut lines = text.lines().filter(|line| !line.trim().is_empty());
        let name = match lines.next().and_then(|line| line.strip_prefix("model ")) {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => {
                return Err(Error::AssetDecode(
                    "Manifest must start with a 'model <name>' line".to_string(),
                ))
            }
        };

        let mut mesh_count = 0;
        for line in lines {
            match line.strip_prefix("mesh ") {
                Some(mesh) if !mesh.trim().is_empty() => mesh_count += 1,
                _ => {
                    return Err(Error::AssetDecode(format!(
                        "Unrecognized manifest line: '{}'",
                        line.trim()
                    )))
                }
            }
        }
        if mesh_count == 0 {
            return Err(Error::AssetDecode(format!(
                "Model '{}' declares no meshes",
                name
            )));
        }

        Ok(DecodedModel::new(name, mesh_count, bytes.to_vec()))
    }
}

#[cfg(test)]
#[path = "sim_asset_tests.rs"]
mod tests;
