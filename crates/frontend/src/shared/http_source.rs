//! `gloo-net` adapters for the list and selector capabilities.

use crate::shared::api_utils::put_json;
use async_trait::async_trait;
use contracts::domain::a006_location::{LocationLevel, LocationOption};
use contracts::shared::api_error::ApiError;
use contracts::shared::list_query::{
    ApiEnvelope, ListRequest, OptionsRequest, PagePayload, PageResult, PageSource,
};
use contracts::shared::selector_chain::OptionSource;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// Page source backed by a `PUT <endpoint>` list call answering
/// `{ data: { data: [...], total } }`
pub struct HttpPageSource<T> {
    endpoint: &'static str,
    _item: PhantomData<fn() -> T>,
}

impl<T> HttpPageSource<T> {
    pub fn new(endpoint: &'static str) -> Self {
        Self {
            endpoint,
            _item: PhantomData,
        }
    }
}

#[async_trait(?Send)]
impl<T> PageSource for HttpPageSource<T>
where
    T: DeserializeOwned + Clone + 'static,
{
    type Item = T;

    async fn fetch_page(&self, request: &ListRequest) -> Result<PageResult<T>, ApiError> {
        log::debug!("PUT {} page={} size={}", self.endpoint, request.page, request.size);
        let envelope: ApiEnvelope<PagePayload<T>> = put_json(self.endpoint, request).await?;
        Ok(envelope.into())
    }
}

/// Option source backed by the `location/*` endpoints
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpOptionSource;

#[async_trait(?Send)]
impl OptionSource for HttpOptionSource {
    async fn fetch_options(
        &self,
        level: LocationLevel,
        request: &OptionsRequest,
    ) -> Result<Vec<LocationOption>, ApiError> {
        let envelope: ApiEnvelope<PagePayload<LocationOption>> =
            put_json(level.endpoint(), request).await?;
        Ok(envelope.data.data)
    }
}
