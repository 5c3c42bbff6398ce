//! Move legality rules
//!
//! The only rule enforced at this layer is the forbidden-move rule for
//! Black. Board mutation itself never consults it; callers that want
//! strict play filter candidate moves through [`forbidden::forbidden_kind`].

pub mod forbidden;

pub use forbidden::{forbidden_kind, is_forbidden, ForbiddenKind};
