use axum::{
    extract::{rejection::FormRejection, State},
    response::{Html, Redirect},
    Form,
};
use chrono::{Datelike, Local};

use super::{render::render_page, AppState};
use crate::domain::model::OrderForm;
use crate::utils::error::OrderError;

pub async fn listing_handler(State(state): State<AppState>) -> Result<Html<String>, OrderError> {
    let orders = state.orders.list_orders().await?;
    let page = render_page(state.orders.catalog(), &orders, Local::now().year());
    Ok(Html(page))
}

pub async fn add_customer_handler(
    State(state): State<AppState>,
    form: Result<Form<OrderForm>, FormRejection>,
) -> Result<Redirect, OrderError> {
    let Form(form) = form.map_err(|rejection| OrderError::MalformedPayloadError {
        message: rejection.body_text(),
    })?;

    state.orders.place_order(form).await?;
    Ok(Redirect::to("/"))
}
