//! CMS notification subscription endpoints.
//!
//! Only the subscriptions themselves are managed here. Delivering or
//! receiving the notifications is up to the subscriber's endpoint.

use reqwest::Method;
use serde_json::Value;
use tracing::instrument;

use crate::client::Client;
use crate::error::Error;
use crate::http::Params;
use crate::types::SubscriptionId;

/// Subscription endpoints. Obtained from [`Client::notifications`].
#[derive(Debug, Clone, Copy)]
pub struct Notifications<'a> {
    client: &'a Client,
}

impl<'a> Notifications<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List the notification subscriptions.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Value, Error> {
        let url = self.client.cms_endpoint("subscriptions");
        self.client.call(Method::GET, url, Params::new()).await
    }

    /// Subscribe an endpoint. `params` carries `endpoint` and `events`.
    #[instrument(skip(self, params))]
    pub async fn create(&self, params: Params) -> Result<Value, Error> {
        let url = self.client.cms_endpoint("subscriptions");
        self.client.call(Method::POST, url, params).await
    }

    /// Fetch one subscription.
    #[instrument(skip(self))]
    pub async fn get(&self, id: &SubscriptionId) -> Result<Value, Error> {
        let url = self.client.cms_endpoint(&format!("subscriptions/{}", id));
        self.client.call(Method::GET, url, Params::new()).await
    }

    /// Remove a subscription.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &SubscriptionId) -> Result<Value, Error> {
        let url = self.client.cms_endpoint(&format!("subscriptions/{}", id));
        self.client.call(Method::DELETE, url, Params::new()).await
    }
}
