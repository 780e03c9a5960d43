// SPDX-License-Identifier: MPL-2.0
//! Wire shapes of the image service responses.
//!
//! Unknown fields are ignored so the service can add metadata without
//! breaking the client.

use serde::Deserialize;

/// Body of `GET /api/v1/uploadImg`: `{ "data": { "urls": [...] } }`.
#[derive(Debug, Deserialize)]
pub struct ListingResponse {
    pub data: ListingData,
}

#[derive(Debug, Deserialize)]
pub struct ListingData {
    pub urls: Vec<String>,
}

/// Body of `POST /api/v1/uploadImg`: `{ "data": { "url": "..." } }`.
#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    pub data: UploadData,
}

#[derive(Debug, Deserialize)]
pub struct UploadData {
    pub url: String,
}
