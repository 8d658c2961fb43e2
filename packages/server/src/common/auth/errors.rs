use thiserror::Error;

/// Authorization errors for the EcoFinds marketplace
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authentication required")]
    AuthenticationRequired,
}
