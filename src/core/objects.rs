//! Object (site) catalogue and header validation.
//!
//! The catalogue is a CSV file saved from the objects spreadsheet; columns
//! are found by header substring, like the staff roster. Several objects may
//! share one address, in which case a sheet must name its object id.

use crate::core::roster::{field, find_col, lowercase_headers};
use crate::errors::{AppError, AppResult};
use crate::models::site_object::SiteObject;
use std::path::Path;

const COL_ID: &[&str] = &["номер объекта", "object id"];
const COL_ADDRESS: &[&str] = &["адрес", "address"];
const COL_SHORT_NAME: &[&str] = &["сокращённое наименование", "сокращенное наименование", "short name"];
const COL_DEPARTMENT: &[&str] = &["подразделение", "department"];

/// Read the object catalogue at `path`. The id and address columns are
/// mandatory; rows with neither are skipped.
pub fn load_objects(path: &Path) -> AppResult<Vec<SiteObject>> {
    if !path.exists() {
        return Err(AppError::Objects(format!("file not found: {}", path.display())));
    }

    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = lowercase_headers(rdr.headers()?);
    let idx_id = find_col(&headers, COL_ID);
    let idx_addr = find_col(&headers, COL_ADDRESS);
    let idx_short = find_col(&headers, COL_SHORT_NAME);
    let idx_dep = find_col(&headers, COL_DEPARTMENT);

    if idx_id.is_none() || idx_addr.is_none() {
        return Err(AppError::Objects(
            "required columns 'ID (код) номер объекта' and/or 'Адрес' not found".into(),
        ));
    }

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;

        let object_id = field(&rec, idx_id);
        let address = field(&rec, idx_addr);
        if object_id.is_empty() && address.is_empty() {
            continue;
        }

        out.push(SiteObject {
            object_id,
            address,
            short_name: field(&rec, idx_short),
            department: field(&rec, idx_dep),
        });
    }

    tracing::info!(path = %path.display(), objects = out.len(), "object catalogue loaded");
    Ok(out)
}

/// Sorted, distinct non-blank object ids at `address`.
pub fn object_ids_at<'a>(catalogue: &'a [SiteObject], address: &str) -> Vec<&'a str> {
    let address = address.trim();
    let mut ids: Vec<&str> = catalogue
        .iter()
        .filter(|o| o.address == address && !o.object_id.is_empty())
        .map(|o| o.object_id.as_str())
        .collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

/// Check a sheet's address and object id against the catalogue and fill in
/// whichever one can be derived. Returns `(address, object_id)`.
///
/// - An id must exist; its address wins over a blank `address` and must
///   agree with a given one.
/// - Without an id the address must exist. Its single id is taken over;
///   an address with several ids is rejected.
pub fn resolve_object(
    catalogue: &[SiteObject],
    address: &str,
    object_id: Option<&str>,
) -> AppResult<(String, Option<String>)> {
    let address = address.trim();

    if let Some(id) = object_id.map(str::trim).filter(|id| !id.is_empty()) {
        let obj = catalogue
            .iter()
            .find(|o| o.object_id == id)
            .ok_or_else(|| AppError::InvalidObject(format!("object id '{id}' is not in the catalogue")))?;

        if !address.is_empty() && obj.address != address {
            return Err(AppError::InvalidObject(format!(
                "object id '{id}' is at '{}', not at '{address}'",
                obj.address
            )));
        }
        return Ok((obj.address.clone(), Some(id.to_string())));
    }

    if address.is_empty() {
        return Err(AppError::InvalidObject("an address or an object id is required".into()));
    }
    if !catalogue.iter().any(|o| o.address == address) {
        return Err(AppError::InvalidObject(format!(
            "address '{address}' is not in the catalogue"
        )));
    }

    match object_ids_at(catalogue, address).as_slice() {
        [] => Ok((address.to_string(), None)),
        [id] => Ok((address.to_string(), Some(id.to_string()))),
        ids => Err(AppError::InvalidObject(format!(
            "several objects at '{address}' ({}): pick one with --object-id",
            ids.join(", ")
        ))),
    }
}
