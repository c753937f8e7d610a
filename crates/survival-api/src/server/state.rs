#[derive(Clone)]
struct AppState {
    // One lock for the whole world serializes every decision for a given survivor.
    inner: Arc<Mutex<GameApi>>,
}

impl AppState {
    fn new(api: GameApi) -> Self {
        Self {
            inner: Arc::new(Mutex::new(api)),
        }
    }
}
