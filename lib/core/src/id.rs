// Deterministic identifiers derived from qualified names
use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of `input`
pub fn digest(input: &str) -> String {
    format!("{:x}", Sha256::digest(input.as_bytes()))
}

/// Qualified model name, `"{app}.{model}"`
pub fn qualified_name(app_name: &str, model_name: &str) -> String {
    format!("{}.{}", app_name, model_name)
}

pub fn vertex_id(app_name: &str, model_name: &str) -> String {
    digest(&qualified_name(app_name, model_name))
}

/// Edge id over `"{kind}({source},{dest})"`, after any inheritance swap
pub fn edge_id(kind: &str, source_id: &str, dest_id: &str) -> String {
    digest(&format!("{}({},{})", kind, source_id, dest_id))
}
