use std::collections::HashMap;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::config::Region;
use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use snip_core::repository::{Repository, Result, UrlMapping};
use snip_core::{ShortCode, StorageError};
use tracing::{debug, trace};
use typed_builder::TypedBuilder;

/// Partition key of the mappings table.
pub const SHORT_CODE_ATTRIBUTE: &str = "ShortCode";
/// String attribute holding the original URL.
pub const LONG_URL_ATTRIBUTE: &str = "LongURL";

pub const DEFAULT_REGION: &str = "us-east-1";

/// Connection settings for [`DynamoDbRepository::connect`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct DynamoDbSettings {
    #[builder(setter(into))]
    pub table_name: String,
    #[builder(default = DEFAULT_REGION.to_string(), setter(into))]
    pub region: String,
    /// Overrides the service endpoint, e.g. to target DynamoDB Local.
    #[builder(default)]
    pub endpoint_url: Option<String>,
}

/// DynamoDB implementation of the repository contract.
///
/// One item per short code. Writes are unconditional `PutItem` calls, so a
/// second mapping hashed to the same code replaces the first.
#[derive(Debug, Clone)]
pub struct DynamoDbRepository {
    table_name: String,
    client: Client,
}

impl DynamoDbRepository {
    /// Creates a repository from an existing client.
    pub fn new(table_name: impl Into<String>, client: Client) -> Self {
        Self {
            table_name: table_name.into(),
            client,
        }
    }

    /// Loads the AWS configuration from the environment and creates a client
    /// for the configured region.
    pub async fn connect(settings: DynamoDbSettings) -> Self {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(settings.region));
        if let Some(endpoint_url) = settings.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        let config = loader.load().await;

        Self::new(settings.table_name, Client::new(&config))
    }

    /// Returns a reference to the underlying client.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

fn map_sdk_error<E, R>(err: SdkError<E, R>) -> StorageError
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let message = DisplayErrorContext(&err).to_string();

    match err {
        SdkError::TimeoutError(_) => StorageError::Timeout(message),
        SdkError::DispatchFailure(_) => StorageError::Unavailable(message),
        SdkError::ConstructionFailure(_) => StorageError::Operation(message),
        _ => StorageError::Query(message),
    }
}

fn mapping_from_item(
    code: &ShortCode,
    item: &HashMap<String, AttributeValue>,
) -> Result<UrlMapping> {
    let long_url = item
        .get(LONG_URL_ATTRIBUTE)
        .ok_or_else(|| {
            StorageError::InvalidData(format!(
                "item '{code}' has no {LONG_URL_ATTRIBUTE} attribute"
            ))
        })?
        .as_s()
        .map_err(|_| {
            StorageError::InvalidData(format!("{LONG_URL_ATTRIBUTE} of '{code}' is not a string"))
        })?;

    Ok(UrlMapping::new(code.clone(), long_url.clone()))
}

#[async_trait]
impl Repository for DynamoDbRepository {
    async fn put(&self, mapping: &UrlMapping) -> Result<()> {
        trace!(code = %mapping.short_code, table = %self.table_name, "putting mapping");

        self.client
            .put_item()
            .table_name(&self.table_name)
            .item(
                SHORT_CODE_ATTRIBUTE,
                AttributeValue::S(mapping.short_code.as_str().to_owned()),
            )
            .item(LONG_URL_ATTRIBUTE, AttributeValue::S(mapping.long_url.clone()))
            .send()
            .await
            .map_err(map_sdk_error)?;

        Ok(())
    }

    async fn get(&self, code: &ShortCode) -> Result<Option<UrlMapping>> {
        trace!(code = %code, table = %self.table_name, "getting mapping");

        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(SHORT_CODE_ATTRIBUTE, AttributeValue::S(code.as_str().to_owned()))
            .send()
            .await
            .map_err(map_sdk_error)?;

        match output.item {
            Some(item) if !item.is_empty() => mapping_from_item(code, &item).map(Some),
            _ => {
                debug!(code = %code, "no item for short code");
                Ok(None)
            }
        }
    }
}
