use std::io::{BufRead, Write};

use anyhow::Result;
use negotiation_llm::{ChatOutcome, GenerationConfig, NegotiationSession, TextGenerator};

/// Drive a chat from line-oriented input until the buyer ends it or input
/// runs out.
pub async fn run_chat<R, W>(
    session: &mut NegotiationSession,
    generator: &dyn TextGenerator,
    config: &GenerationConfig,
    input: R,
    mut output: W,
) -> Result<Option<ChatOutcome>>
where
    R: BufRead,
    W: Write,
{
    writeln!(
        output,
        "판매 상품: {}\n상품 설명: {}",
        session.scenario.title, session.scenario.description
    )?;

    for line in input.lines() {
        let line = line?;
        match session.submit(&line, generator, config).await? {
            ChatOutcome::Ignored => continue,
            ChatOutcome::Reply(reply) => {
                writeln!(output, "판매자: {}", reply)?;
                output.flush()?;
            }
            ended @ ChatOutcome::Ended { .. } => return Ok(Some(ended)),
        }
    }

    Ok(None)
}
