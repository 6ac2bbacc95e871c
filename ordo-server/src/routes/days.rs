//! Calendar endpoints: day, month, year, feasts and season views.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use chrono::{Datelike, NaiveDate, Utc};
use serde::Serialize;

use ordo_core::calendar::{self, validate_year};
use ordo_core::day::{OrdoDay, Rank, Season};
use ordo_core::error::OrdoError;

use crate::routes::ApiError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/today", get(today))
        .route("/day/{date}", get(day))
        .route("/month/{year}/{month}", get(month))
        .route("/year/{year}", get(year))
        .route("/feasts/{year}", get(feasts))
        .route("/season/{year}/{season}", get(season))
}

/// Look up one date in the (cached) calendar of its year.
fn ordo_for_date(state: &AppState, date: NaiveDate) -> Result<OrdoDay, ApiError> {
    let days = state
        .cache
        .get_or_build(date.year(), &state.config.rite, &state.config.locale)?;
    Ok(calendar::find_day(&days, date)?.clone())
}

/// GET /today - Ordo for the current UTC date
async fn today(State(state): State<AppState>) -> Result<Json<OrdoDay>, ApiError> {
    let today = Utc::now().date_naive();
    Ok(Json(ordo_for_date(&state, today)?))
}

/// GET /day/:date - Ordo for a YYYY-MM-DD date
async fn day(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<OrdoDay>, ApiError> {
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| OrdoError::InvalidDate(date))?;
    Ok(Json(ordo_for_date(&state, date)?))
}

#[derive(Serialize)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub month_name: &'static str,
    pub days: Vec<OrdoDay>,
}

fn month_view(state: &AppState, year: i32, month: u32) -> Result<MonthView, ApiError> {
    let month_name = calendar::month_name(month)?;
    let days = state
        .cache
        .get_or_build(year, &state.config.rite, &state.config.locale)?;

    let days: Vec<OrdoDay> = days
        .iter()
        .filter(|d| d.date.month() == month)
        .cloned()
        .collect();

    Ok(MonthView {
        year,
        month,
        month_name,
        days,
    })
}

/// GET /month/:year/:month - One month of ordo days
async fn month(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<Json<MonthView>, ApiError> {
    Ok(Json(month_view(&state, year, month)?))
}

#[derive(Serialize)]
pub struct FeastSummary {
    pub date: NaiveDate,
    pub name: String,
    pub rank: Rank,
}

fn feast_summaries(days: &[OrdoDay]) -> Vec<FeastSummary> {
    calendar::major_feasts(days)
        .into_iter()
        .filter_map(|d| {
            Some(FeastSummary {
                date: d.date,
                name: d.feast_name.clone()?,
                rank: d.feast_rank?,
            })
        })
        .collect()
}

#[derive(Serialize)]
pub struct YearView {
    pub year: i32,
    pub liturgical_year: String,
    pub total_days: usize,
    pub months: Vec<MonthView>,
    pub major_feasts: Vec<FeastSummary>,
}

/// GET /year/:year - The full year, month by month
async fn year(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> Result<Json<YearView>, ApiError> {
    validate_year(year)?;

    let days = state
        .cache
        .get_or_build(year, &state.config.rite, &state.config.locale)?;
    let major_feasts = feast_summaries(&days);

    let months: Vec<MonthView> = (1..=12)
        .map(|m| month_view(&state, year, m))
        .collect::<Result<_, _>>()?;
    let total_days = months.iter().map(|m| m.days.len()).sum();

    Ok(Json(YearView {
        year,
        liturgical_year: calendar::liturgical_year(year),
        total_days,
        months,
        major_feasts,
    }))
}

#[derive(Serialize)]
pub struct FeastsView {
    pub year: i32,
    pub major_feasts: Vec<FeastSummary>,
    pub count: usize,
}

/// GET /feasts/:year - Solemnities and feasts of a year
async fn feasts(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> Result<Json<FeastsView>, ApiError> {
    let days = state
        .cache
        .get_or_build(year, &state.config.rite, &state.config.locale)?;

    let major_feasts = feast_summaries(&days);
    let count = major_feasts.len();

    Ok(Json(FeastsView {
        year,
        major_feasts,
        count,
    }))
}

#[derive(Serialize)]
pub struct SeasonView {
    pub year: i32,
    pub season: &'static str,
    pub days: Vec<OrdoDay>,
    pub count: usize,
}

/// GET /season/:year/:season - All days of a liturgical season
async fn season(
    State(state): State<AppState>,
    Path((year, season)): Path<(i32, String)>,
) -> Result<Json<SeasonView>, ApiError> {
    let season = Season::parse(&season)?;
    let days = state
        .cache
        .get_or_build(year, &state.config.rite, &state.config.locale)?;

    let days: Vec<OrdoDay> = calendar::season_days(&days, season)
        .into_iter()
        .cloned()
        .collect();
    let count = days.len();

    Ok(Json(SeasonView {
        year,
        season: season.name(),
        days,
        count,
    }))
}
