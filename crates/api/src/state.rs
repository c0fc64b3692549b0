/// Shared state handed to every handler via `State<AppState>`.
///
/// Cloning is cheap; each request checks its own connection out of the pool.
#[derive(Clone)]
pub struct AppState {
    pub pool: survey_db::DbPool,
}
