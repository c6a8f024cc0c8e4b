//! Platform-independent core of the portal frontend.
//!
//! Everything here builds natively and for WASM, so the session state
//! machine and the wire types can be tested without a browser.

// Auth request/response types and form validation
pub mod auth;
pub use auth::{
    HealthResponse, LoginRequest, MessageResponse, SignUpRequest, UserResponse, ValidationError,
};

// API client types and trait
pub mod api;
pub use api::{ApiClientConfig, ApiError, AuthApi};

// Constants shared by the store, the session and the API client
pub mod protocol;

// View state machine
pub mod session;
pub use session::{SessionController, Verification, View};

// Durable credential storage
pub mod store;
pub use store::{CredentialStore, MemoryStore, StoreError};
