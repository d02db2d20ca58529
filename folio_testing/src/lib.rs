//! Stand-ins for the external services folio talks to.

pub mod resend;
