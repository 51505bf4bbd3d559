use crate::errors::AppError;
use crate::models::{BoardSnapshot, SignupForm};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Form, Json,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    state.board.load().await;
    let snapshot = state.board.snapshot().await;
    Html(render_index(&snapshot))
}

pub async fn get_board(State(state): State<AppState>) -> Json<BoardSnapshot> {
    Json(state.board.snapshot().await)
}

pub async fn refresh(State(state): State<AppState>) -> Json<BoardSnapshot> {
    state.board.load().await;
    Json(state.board.snapshot().await)
}

pub async fn signup(
    State(state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> Result<Redirect, AppError> {
    let form = require_fields(form)?;
    state.board.signup(&form.activity, &form.email).await;
    Ok(Redirect::to("/"))
}

pub async fn unregister(
    State(state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> Result<Redirect, AppError> {
    let form = require_fields(form)?;
    state.board.unregister(&form.activity, &form.email).await;
    Ok(Redirect::to("/"))
}

fn require_fields(form: SignupForm) -> Result<SignupForm, AppError> {
    if form.activity.trim().is_empty() || form.email.trim().is_empty() {
        return Err(AppError::bad_request("activity and email are required"));
    }
    Ok(form)
}
