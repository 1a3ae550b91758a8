use std::sync::Arc;
use axum::http::StatusCode;
use crate::catalog::domain::model::SharedLibrary;
use crate::catalog::registry::LibraryRegistry;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::gateway::GatewayPublisherVia;

#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub(crate) config: Configuration,
    pub(crate) library: SharedLibrary,
    pub(crate) registry: Arc<LibraryRegistry>,
    pub(crate) publisher: GatewayPublisherVia,
}

impl AppState {
    pub fn new(config: Configuration, registry: Arc<LibraryRegistry>, publisher: GatewayPublisherVia) -> AppState {
        let library = registry.open_library(&config).shared();
        AppState {
            config,
            library,
            registry,
            publisher,
        }
    }
}

pub(crate) type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{:?}", err))
            }
            CommandError::DuplicateKey { .. } => {
                (StatusCode::CONFLICT, format!("{:?}", err))
            }
            CommandError::Unavailable { .. } => {
                (StatusCode::CONFLICT, format!("{:?}", err))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Arc;
    use axum::http::StatusCode;
    use crate::catalog::registry::LibraryRegistry;
    use crate::core::command::CommandError;
    use crate::core::controller::{AppState, ServerError};
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;

    pub(crate) fn test_state() -> AppState {
        AppState::new(Configuration::new("test"), Arc::new(LibraryRegistry::new()), GatewayPublisherVia::Memory)
    }

    #[tokio::test]
    async fn test_should_open_library_for_state() {
        let state = test_state();
        assert_eq!(1, state.registry.library_count());
        assert_eq!("test", state.library.lock().await.name());
    }

    #[tokio::test]
    async fn test_should_map_command_errors() {
        let cases = vec![
            (CommandError::NotFound { message: "m".to_string() }, StatusCode::NOT_FOUND),
            (CommandError::DuplicateKey { message: "m".to_string() }, StatusCode::CONFLICT),
            (CommandError::Unavailable { message: "m".to_string() }, StatusCode::CONFLICT),
            (CommandError::Validation { message: "m".to_string(), reason_code: None }, StatusCode::BAD_REQUEST),
            (CommandError::Serialization { message: "m".to_string() }, StatusCode::BAD_REQUEST),
            (CommandError::Runtime { message: "m".to_string(), reason_code: None }, StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            let (code, _): ServerError = err.into();
            assert_eq!(status, code);
        }
    }
}
