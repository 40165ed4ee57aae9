//! Loaders for the externally supplied reference catalogs: operators,
//! sites (with their client), and the equipment list. Each file is a
//! plain JSON array under the configured data directory.

use crate::errors::{AppError, AppResult};
use crate::models::reference::{EquipmentAsset, Operator, Site};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

fn load_array<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::Config(format!("cannot read reference file {}: {e}", path.display()))
    })?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn load_operators(data_dir: &Path) -> AppResult<Vec<Operator>> {
    load_array(&data_dir.join("operators.json"))
}

pub fn load_sites(data_dir: &Path) -> AppResult<Vec<Site>> {
    load_array(&data_dir.join("sites.json"))
}

pub fn load_equipment(data_dir: &Path) -> AppResult<Vec<EquipmentAsset>> {
    load_array(&data_dir.join("equipment.json"))
}
