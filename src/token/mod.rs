// Internal modules
mod header;
mod parsed;
#[allow(clippy::module_inception)]
mod token;
mod trusted;
mod validated;

// Public API exports
pub use header::TokenHeader;
pub use parsed::ParsedToken;
pub use token::Token;

// Pipeline stages (used by the validator, not exposed in the public API)
pub(crate) use trusted::TrustedToken;
pub(crate) use validated::ValidatedToken;
