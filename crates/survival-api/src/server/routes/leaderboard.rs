#[derive(Debug, Default, Deserialize)]
struct LeaderboardRequest {
    name: Option<Value>,
    score: Option<i64>,
    days: Option<Value>,
    survived: Option<Value>,
}

impl LeaderboardRequest {
    fn into_entry(self) -> Result<NewLeaderboardEntry, GameError> {
        let score = self.score.ok_or_else(|| GameError::missing("score"))?;
        Ok(NewLeaderboardEntry {
            name: self.name,
            score,
            days: self.days,
            survived: self.survived,
        })
    }
}

async fn get_leaderboard(State(state): State<AppState>) -> Response {
    let page = {
        let api = state.inner.lock().await;
        api.leaderboard()
    };
    Json(page).into_response()
}

async fn add_leaderboard_entry(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, HttpApiError> {
    let entry = parse_json_body::<LeaderboardRequest>(&body)?.into_entry()?;

    let added = {
        let mut api = state.inner.lock().await;
        api.submit_score(entry)
    };

    Ok(Json(added).into_response())
}
