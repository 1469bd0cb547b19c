use crate::{
    core::{PublishResponse, TopicClient, TopicListing, TopicRef, TopicService},
    error::{DriverError, SelectionError},
};
use std::io::{BufRead, Write};

/// A selection that passed validation: non-empty and ASCII digits only.
#[derive(Debug, PartialEq, Eq)]
pub struct Selection(String);

impl Selection {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Only ASCII `0-9` count as digits; other Unicode decimal digits such as
/// `٣` are rejected as [`SelectionError::NotAnInteger`].
pub fn parse_selection(input: &str) -> Result<Selection, SelectionError> {
    if input.is_empty() {
        return Err(SelectionError::Empty);
    }
    if !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SelectionError::NotAnInteger);
    }

    Ok(Selection(input.to_string()))
}

/// No bounds check is done first; a number that is not listed is a lookup failure.
pub fn resolve_selection<'a>(
    listing: &'a TopicListing,
    selection: &Selection,
) -> Result<&'a TopicRef, DriverError> {
    selection
        .as_str()
        .parse::<usize>()
        .ok()
        .and_then(|index| listing.get(index))
        .ok_or_else(|| DriverError::UnknownTopic(selection.as_str().to_string()))
}

pub struct SessionDeps<C: TopicClient> {
    pub topics: TopicService<C>,
    pub region: String,
}

/// Runs one interactive session: list, select, compose, publish.
pub async fn run_session<C, I, O>(
    deps: &SessionDeps<C>,
    input: &mut I,
    output: &mut O,
) -> Result<PublishResponse, DriverError>
where
    C: TopicClient,
    I: BufRead,
    O: Write,
{
    writeln!(
        output,
        "Listing the SNS topics in the configured AWS region ({}):\n",
        deps.region
    )?;
    let listing = deps.topics.list_topics().await?;
    for topic in listing.iter() {
        writeln!(output, "{}: {}", topic.index, topic.topic_arn)?;
    }

    write!(
        output,
        "\nWhich SNS topic do you want to post to (enter number): "
    )?;
    output.flush()?;
    let selection = parse_selection(&read_line(input)?)?;
    let topic = resolve_selection(&listing, &selection)?;
    tracing::debug!(index = topic.index, topic_arn = %topic.topic_arn, "Topic selected");

    write!(output, "Message to send to SNS topic ({}): ", topic.topic_arn)?;
    output.flush()?;
    let message = read_line(input)?;
    writeln!(output, "Sending '{}' to {}", message, topic.topic_arn)?;

    let response = deps.topics.send_message(&topic.topic_arn, &message).await?;
    writeln!(output, "\nSNS response: \n{}", response)?;
    output.flush()?;

    Ok(response)
}

/// Writes the outcome of a session and returns the process exit code.
///
/// Rejected selections are reported on `stdout`, every other failure on `stderr`.
pub fn report<O: Write, E: Write>(
    result: &Result<PublishResponse, DriverError>,
    stdout: &mut O,
    stderr: &mut E,
) -> u8 {
    match result {
        Ok(_) => 0,
        Err(DriverError::Selection(e)) => {
            let _ = writeln!(stdout, "Error: {}", e);
            1
        }
        Err(e) => {
            tracing::error!("Session failed: {:?}", e);
            let _ = writeln!(stderr, "Error: {}", e);
            1
        }
    }
}

fn read_line<I: BufRead>(input: &mut I) -> Result<String, DriverError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(DriverError::InputClosed);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}
