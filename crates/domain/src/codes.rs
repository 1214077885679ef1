// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Generation of human-readable codes and login handles.
//!
//! Generated values are locally unique with high probability but are NOT
//! guaranteed collision-free. The local directory enforces uniqueness at
//! the schema level; a generation collision therefore surfaces as an
//! ordinary row-level persistence failure, never as a crash.

/// Policy controlling generated code and handle shape.
///
/// The defaults match the production format. Tests may narrow the suffix
/// range to force collisions deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePolicy {
    /// Inclusive upper bound of the random numeric suffix.
    pub suffix_max: u32,
}

impl CodePolicy {
    /// Creates a policy with an explicit suffix bound.
    #[must_use]
    pub const fn new(suffix_max: u32) -> Self {
        Self { suffix_max }
    }
}

impl Default for CodePolicy {
    fn default() -> Self {
        Self { suffix_max: 999_999 }
    }
}

fn random_suffix(policy: CodePolicy) -> u32 {
    // saturating_add keeps the modulus valid at `suffix_max == u32::MAX`.
    rand::random::<u32>() % policy.suffix_max.saturating_add(1)
}

/// Generates a human-readable member code, e.g. `MBR-048213`.
#[must_use]
pub fn generate_member_code(policy: CodePolicy) -> String {
    format!("MBR-{:06}", random_suffix(policy))
}

/// Generates a human-readable actor code, e.g. `ACT-048213`.
///
/// Used when self-healing a missing actor record for a caller.
#[must_use]
pub fn generate_actor_code(policy: CodePolicy) -> String {
    format!("ACT-{:06}", random_suffix(policy))
}

/// Generates a login handle from a display name, e.g. `jdoe4821`.
///
/// The handle is the lowercase alphanumeric compaction of the display name
/// (truncated to eight characters, `member` if nothing survives) plus a
/// random numeric suffix.
#[must_use]
pub fn generate_login_handle(display_name: &str, policy: CodePolicy) -> String {
    let base: String = display_name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .take(8)
        .collect();

    let base: &str = if base.is_empty() { "member" } else { &base };

    format!("{base}{:04}", random_suffix(policy) % 10_000)
}
