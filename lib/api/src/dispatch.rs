//! Mode dispatch: stage inputs, run a matcher, publish the output
//!
//! The dispatcher owns everything the matching core treats as external:
//! object-store transfer, temp-dir staging, per-mode CSV conventions, and
//! translating typed core errors into the status envelope. Its contract to
//! the binary is total: every outcome, including an unexpected failure,
//! becomes a [`Response`].

use crate::request::Request;
use crate::response::{Metrics, Response};
use agromatch_core::{composition, substance, Error as CoreError};
use agromatch_storage::{formats, read_table, write_records, write_table, HttpObjectStore, ObjectStore};
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use tracing::{error, info};

/// Run a request end to end, connecting to the store its envelope names
pub fn run(request: &Request) -> Response {
    match HttpObjectStore::new(&request.minio) {
        Ok(store) => run_with_store(request, &store),
        Err(e) => Response::failure(format!("{e:#}")),
    }
}

/// Run a request against a caller-supplied object store
pub fn run_with_store(request: &Request, store: &dyn ObjectStore) -> Response {
    let result = match request.parameters.mode.as_deref() {
        Some("fertilizers") => {
            info!("running in fertilizers mode");
            run_fertilizers(request, store)
        }
        Some("pesticides") => {
            info!("running in pesticides mode");
            run_pesticides(request, store)
        }
        _ => {
            return Response::invalid_mode(
                "Supported modes are 'fertilizers' and 'pesticides'. Include 'mode' in parameters.",
            )
        }
    };
    result.unwrap_or_else(translate)
}

fn run_fertilizers(request: &Request, store: &dyn ObjectStore) -> Result<Response> {
    let (Some(npk_remote), Some(fert_remote)) = (
        first_input(&request.input.npk_values),
        first_input(&request.input.fertilizer_dataset),
    ) else {
        return Ok(Response::invalid_inputs(
            "'npk_values' and 'fertilizer_dataset' are required inputs in fertilizers mode.",
        ));
    };

    let staging = tempfile::tempdir().context("failed to create staging directory")?;
    let local_npk = staging.path().join("npk.csv");
    let local_fert = staging.path().join("fert.csv");
    store.fetch(npk_remote, &local_npk)?;
    store.fetch(fert_remote, &local_fert)?;

    let users = read_table(&local_npk, formats::COMPOSITION)?;
    let references = read_table(&local_fert, formats::COMPOSITION)?;
    let annotated = composition::match_compositions(&users, &references)?;

    let local_out = staging.path().join("matched.csv");
    write_table(&local_out, &annotated, formats::COMPOSITION)?;
    store.store(&request.output.matched_products, &local_out)?;

    info!(
        records_in = users.len(),
        records_out = annotated.len(),
        "fertilizer matching complete"
    );
    Ok(Response::success(
        BTreeMap::from([(
            "matched_fertilizers".to_string(),
            request.output.matched_products.clone(),
        )]),
        Metrics {
            records_in: users.len(),
            records_out: annotated.len(),
        },
    ))
}

fn run_pesticides(request: &Request, store: &dyn ObjectStore) -> Result<Response> {
    let (Some(input_language), Some(db_language)) = (
        nonempty(request.parameters.input_language.as_deref()),
        nonempty(request.parameters.db_language.as_deref()),
    ) else {
        return Ok(Response::invalid_parameters(
            "'input_language' and 'db_language' parameters are required in pesticides mode.",
        ));
    };

    let (Some(subst_remote), Some(pest_remote)) = (
        first_input(&request.input.active_substances),
        first_input(&request.input.pesticides_dataset),
    ) else {
        return Ok(Response::invalid_inputs(
            "'pesticides_dataset' and 'active_substances' are required inputs in pesticides mode.",
        ));
    };

    let staging = tempfile::tempdir().context("failed to create staging directory")?;
    let local_subst = staging.path().join("subst.csv");
    let local_pest = staging.path().join("pest.csv");
    store.fetch(subst_remote, &local_subst)?;
    store.fetch(pest_remote, &local_pest)?;

    let queries = read_table(&local_subst, formats::SUBSTANCES)?;
    let products = read_table(&local_pest, formats::PRODUCT_DB)?;

    info!(input_language, db_language, "matching to reference language");
    let matches = substance::match_substances(&queries, &products, input_language, db_language)?;

    if matches.is_empty() {
        info!(records_in = queries.len(), "no matching products found");
        return Ok(Response::no_matches(queries.len()));
    }

    let local_out = staging.path().join("matched_pesticides.csv");
    write_records(&local_out, &matches, formats::MATCHED_PRODUCTS)?;
    store.store(&request.output.matched_products, &local_out)?;

    info!(
        records_in = queries.len(),
        records_out = matches.len(),
        "pesticide matching complete"
    );
    Ok(Response::success(
        BTreeMap::from([(
            "matched_pesticides".to_string(),
            request.output.matched_products.clone(),
        )]),
        Metrics {
            records_in: queries.len(),
            records_out: matches.len(),
        },
    ))
}

fn first_input(paths: &[String]) -> Option<&str> {
    paths.first().map(String::as_str).filter(|p| !p.is_empty())
}

fn nonempty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn translate(failure: anyhow::Error) -> Response {
    if let Some(CoreError::MissingColumn { .. }) = failure.downcast_ref::<CoreError>() {
        return Response::missing_column(failure.to_string());
    }
    error!(error = %failure, "request failed");
    Response::failure(format!("{failure:#}"))
}
