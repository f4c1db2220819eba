use atrium_config::ConfigError;

use crate::platform::PlatformError;

/// Anything that can stop the binary before or during the tour.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),
}
