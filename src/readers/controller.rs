use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{Value};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::readers::command::add_reader_cmd::{AddReaderCommand, AddReaderCommandRequest, AddReaderCommandResponse};
use crate::readers::command::get_reader_cmd::{GetReaderCommand, GetReaderCommandRequest, GetReaderCommandResponse};
use crate::readers::command::list_readers_cmd::{ListReadersCommand, ListReadersCommandRequest, ListReadersCommandResponse};
use crate::readers::command::remove_reader_cmd::{RemoveReaderCommand, RemoveReaderCommandRequest, RemoveReaderCommandResponse};
use crate::readers::domain::ReaderService;
use crate::readers::factory;

fn build_service(state: AppState) -> Box<dyn ReaderService> {
    factory::create_reader_service(&state.config, state.library, state.publisher)
}

pub(crate) async fn add_reader(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddReaderCommandResponse>, ServerError> {
    let req: AddReaderCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state);
    let res = AddReaderCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn list_readers(
    State(state): State<AppState>) -> Result<Json<ListReadersCommandResponse>, ServerError> {
    let svc = build_service(state);
    let res = ListReadersCommand::new(svc).execute(ListReadersCommandRequest::default()).await?;
    Ok(Json(res))
}

pub(crate) async fn find_reader_by_id(
    State(state): State<AppState>,
    Path(reader_id): Path<String>) -> Result<Json<GetReaderCommandResponse>, ServerError> {
    let req = GetReaderCommandRequest { reader_id };
    let svc = build_service(state);
    let res = GetReaderCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_reader(
    State(state): State<AppState>,
    Path(reader_id): Path<String>) -> Result<Json<RemoveReaderCommandResponse>, ServerError> {
    let req = RemoveReaderCommandRequest { reader_id };
    let svc = build_service(state);
    let res = RemoveReaderCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

#[cfg(test)]
mod tests {
    use axum::extract::{Path, State};
    use axum::http::StatusCode;
    use axum::response::Json;
    use serde_json::json;
    use crate::core::controller::tests::test_state;
    use crate::readers::controller::{add_reader, find_reader_by_id, list_readers, remove_reader};

    #[tokio::test]
    async fn test_should_manage_readers() {
        let state = test_state();
        let body = json!({"reader_id": "12345", "first_name": "Ivan", "last_name": "Ivanov"});
        let added = add_reader(State(state.clone()), Json(body.clone())).await.expect("should add reader");
        assert_eq!("12345", added.0.reader.reader_id.as_str());

        let (code, _) = add_reader(State(state.clone()), Json(body)).await.expect_err("should fail");
        assert_eq!(StatusCode::CONFLICT, code);

        let _ = find_reader_by_id(State(state.clone()), Path("12345".to_string())).await.expect("should find reader");
        let listed = list_readers(State(state.clone())).await.expect("should list readers");
        assert_eq!(1, listed.0.readers.len());

        let _ = remove_reader(State(state.clone()), Path("12345".to_string())).await.expect("should remove reader");
        let (code, _) = remove_reader(State(state), Path("12345".to_string())).await.expect_err("should fail");
        assert_eq!(StatusCode::NOT_FOUND, code);
    }

    #[tokio::test]
    async fn test_should_reject_malformed_reader() {
        let state = test_state();
        let (code, _) = add_reader(State(state), Json(json!({"first_name": "Ivan"}))).await.expect_err("should fail");
        assert_eq!(StatusCode::BAD_REQUEST, code);
    }
}
