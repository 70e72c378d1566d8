use crate::clock::{DATE_TARGET, TIME_TARGET};
use crate::errors::AppError;
use crate::forms::{StudentForm, Submission, fill, submit};
use crate::models::{
    ClockDisplay, GraduationCheck, StudentDashboard, StudentGrades, StudentIdRequest,
    StudentLoans, UiSnapshot,
};
use crate::registry::UiRegistry;
use crate::state::AppState;
use crate::tabs::{PanelGroup, SUB_TABS, TABS, activate, active_panel, activator_key};
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Path, State},
    response::{Html, Redirect},
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let page = state.page.lock().await;
    Html(render_index(&*page))
}

pub async fn open_tab(State(state): State<AppState>, Path(key): Path<String>) -> Redirect {
    open_in_group(&state, &TABS, &key).await
}

pub async fn open_sub_tab(State(state): State<AppState>, Path(key): Path<String>) -> Redirect {
    open_in_group(&state, &SUB_TABS, &key).await
}

pub async fn get_ui(State(state): State<AppState>) -> Json<UiSnapshot> {
    let page = state.page.lock().await;
    Json(UiSnapshot {
        active_tab: active_panel(&*page, &TABS),
        active_sub_tab: active_panel(&*page, &SUB_TABS),
        clock: clock_display(&*page),
    })
}

pub async fn get_clock(State(state): State<AppState>) -> Json<ClockDisplay> {
    let page = state.page.lock().await;
    Json(clock_display(&*page))
}

pub async fn student_dashboard(
    State(state): State<AppState>,
    Json(payload): Json<StudentIdRequest>,
) -> Result<Json<StudentDashboard>, AppError> {
    let student_id = accept(&state, StudentForm::Dashboard, &payload.student_id).await?;
    Ok(Json(state.students.dashboard(&student_id)?))
}

pub async fn graduation_eligibility(
    State(state): State<AppState>,
    Json(payload): Json<StudentIdRequest>,
) -> Result<Json<GraduationCheck>, AppError> {
    let student_id = accept(&state, StudentForm::Graduation, &payload.student_id).await?;
    let today = today(&state)?;
    Ok(Json(state.students.graduation(&student_id, today)?))
}

pub async fn student_loans(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<StudentLoans>, AppError> {
    let today = today(&state)?;
    Ok(Json(state.students.loans(&student_id, today)?))
}

pub async fn student_grades(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<StudentGrades>, AppError> {
    Ok(Json(state.students.grades(&student_id)?))
}

fn today(state: &AppState) -> Result<chrono::NaiveDate, AppError> {
    Ok(state
        .time_source
        .now()
        .map_err(AppError::internal)?
        .date_naive())
}

async fn open_in_group(state: &AppState, group: &PanelGroup, key: &str) -> Redirect {
    let mut page = state.page.lock().await;
    activate(&mut *page, group, key, Some(&activator_key(key)));
    Redirect::to("/")
}

/// Puts `value` in the form's field and submits it, turning a rejection
/// into a 400 carrying the alert text.
async fn accept(state: &AppState, form: StudentForm, value: &str) -> Result<String, AppError> {
    let mut page = state.page.lock().await;
    fill(&mut *page, form, value);
    match submit(&*page, form) {
        Submission::Accepted { student_id } => Ok(student_id),
        Submission::Rejected { alert } => Err(AppError::bad_request(alert)),
    }
}

fn clock_display<R: UiRegistry + ?Sized>(page: &R) -> ClockDisplay {
    let text = |key: &str| {
        page.by_key(key)
            .map(|element| element.text.clone())
            .unwrap_or_default()
    };
    ClockDisplay {
        time: text(TIME_TARGET),
        date: text(DATE_TARGET),
    }
}
