//! Exchange credential connection
//!
//! Takes API credentials from a form to a stored backend connection in two
//! strictly ordered phases:
//!
//! 1. **Validate** - the backend checks the key pair against the exchange
//!    without storing anything
//! 2. **Connect** - the validated pair is persisted
//!
//! A rejection in the validate phase ends the attempt; the connect endpoint
//! is never reached with credentials the backend has not accepted. The
//! connector also caches the list of already-connected credentials, refreshed
//! from the backend after every successful connect.

pub mod connector;
pub mod error;
pub mod form;

pub use connector::ExchangeConnector;
pub use error::{ConnectError, ConnectResult};
pub use form::CredentialForm;
