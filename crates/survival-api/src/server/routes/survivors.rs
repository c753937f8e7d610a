#[derive(Debug, Default, Deserialize)]
struct CreateSurvivorRequest {
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct DecisionRequest {
    decision: Option<String>,
}

async fn create_survivor(State(state): State<AppState>, body: Bytes) -> Response {
    let request = match parse_json_body::<CreateSurvivorRequest>(&body) {
        Ok(request) => request,
        Err(err) => return err.into_response(),
    };

    let created = {
        let mut api = state.inner.lock().await;
        api.create_survivor(request.name.as_deref())
    };

    (StatusCode::CREATED, Json(created)).into_response()
}

async fn get_survivor(
    Path(survivor_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<SurvivorView>, HttpApiError> {
    let id = parse_survivor_id(&survivor_id)?;
    let api = state.inner.lock().await;
    let survivor = api.survivor(id)?.clone();
    Ok(Json(SurvivorView { survivor }))
}

async fn submit_decision(
    Path(survivor_id): Path<String>,
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, HttpApiError> {
    let id = parse_survivor_id(&survivor_id)?;
    let request = parse_json_body::<DecisionRequest>(&body)?;

    let mut api = state.inner.lock().await;
    // Unknown and finished survivors are reported before a missing decision.
    if !api.survivor(id)?.status.is_alive() {
        return Err(GameError::InvalidState { id }.into());
    }
    let decision = request
        .decision
        .ok_or_else(|| GameError::missing("decision"))?;
    let outcome = api.decide(id, &decision)?;

    Ok(Json(outcome).into_response())
}
