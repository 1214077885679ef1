// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod codes;
mod error;
mod import_row;
mod types;

#[cfg(test)]
mod tests;

pub use codes::{CodePolicy, generate_actor_code, generate_login_handle, generate_member_code};
pub use error::DomainError;
pub use import_row::{ImportRow, MemberDraft, validate_row};
pub use types::{Gender, MemberRole};
