use crate::{
    core::{PublishResponse, TopicClient},
    error::TopicError,
};
use async_trait::async_trait;
use aws_sdk_sns::{error::DisplayErrorContext, operation::RequestId, Client};

#[derive(Debug)]
pub struct SnsTopicClient {
    sns_client: Client,
}

impl SnsTopicClient {
    pub fn new(sns_client: Client) -> Self {
        Self { sns_client }
    }
}

#[async_trait]
impl TopicClient for SnsTopicClient {
    #[tracing::instrument("list topics", skip(self), fields(
        messaging.operation.name = "list",
        messaging.destination = "aws_sns",
    ))]
    async fn list_topic_arns(&self) -> Result<Vec<String>, TopicError> {
        let result = self
            .sns_client
            .list_topics()
            .send()
            .await
            .map_err(|e| TopicError::List {
                reason: DisplayErrorContext(&e).to_string(),
            })?;

        if result.next_token().is_some() {
            tracing::warn!(
                "SNS returned more topics than fit in one page, only the first page is listed"
            );
        }

        // a topic without an ARN cannot be published to
        let arns: Vec<String> = result
            .topics()
            .iter()
            .filter_map(|topic| topic.topic_arn().map(str::to_string))
            .collect();
        tracing::debug!(count = arns.len(), "Listed SNS topics");

        Ok(arns)
    }

    #[tracing::instrument("publish", skip(self, message), fields(
        messaging.message.id = tracing::field::Empty,
        messaging.operation.name = "publish",
        messaging.destination = "aws_sns",
    ))]
    async fn publish(
        &self,
        topic_arn: &str,
        message: &str,
        subject: &str,
    ) -> Result<PublishResponse, TopicError> {
        let output = self
            .sns_client
            .publish()
            .topic_arn(topic_arn)
            .message(message)
            .subject(subject)
            .send()
            .await
            .map_err(|e| TopicError::Publish {
                topic_arn: topic_arn.to_string(),
                reason: DisplayErrorContext(&e).to_string(),
            })?;

        if let Some(message_id) = output.message_id() {
            tracing::Span::current().record("messaging.message.id", message_id);
        }
        tracing::info!("Message published");

        Ok(PublishResponse {
            message_id: output.message_id().map(str::to_string),
            sequence_number: output.sequence_number().map(str::to_string),
            request_id: output.request_id().map(str::to_string),
        })
    }
}
