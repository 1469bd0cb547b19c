use crate::error::TopicError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};

#[cfg(test)]
use mockall::automock;

/// Subject line attached to every published message.
pub const SUBJECT: &str = "Info: message from admin";

#[cfg_attr(test, automock)]
#[async_trait]
pub trait TopicClient: Debug {
    /// Topic ARNs visible in the configured region, in provider order.
    async fn list_topic_arns(&self) -> Result<Vec<String>, TopicError>;
    async fn publish(
        &self,
        topic_arn: &str,
        message: &str,
        subject: &str,
    ) -> Result<PublishResponse, TopicError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicRef {
    pub index: usize,
    pub topic_arn: String,
}

/// Topics numbered from 1 in the order the provider returned them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TopicListing {
    topics: Vec<TopicRef>,
}

impl TopicListing {
    pub fn from_arns(arns: Vec<String>) -> Self {
        let topics = arns
            .into_iter()
            .enumerate()
            .map(|(position, topic_arn)| TopicRef {
                index: position + 1,
                topic_arn,
            })
            .collect();

        Self { topics }
    }

    pub fn get(&self, index: usize) -> Option<&TopicRef> {
        index
            .checked_sub(1)
            .and_then(|position| self.topics.get(position))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TopicRef> {
        self.topics.iter()
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PublishResponse {
    pub message_id: Option<String>,
    pub sequence_number: Option<String>,
    pub request_id: Option<String>,
}

impl Display for PublishResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let json = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        write!(f, "{}", json)
    }
}

#[derive(Debug)]
pub struct TopicService<C: TopicClient> {
    client: C,
}

impl<C: TopicClient> TopicService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub async fn list_topics(&self) -> Result<TopicListing, TopicError> {
        let arns = self.client.list_topic_arns().await?;

        Ok(TopicListing::from_arns(arns))
    }

    pub async fn send_message(
        &self,
        topic_arn: &str,
        message: &str,
    ) -> Result<PublishResponse, TopicError> {
        self.client.publish(topic_arn, message, SUBJECT).await
    }
}
