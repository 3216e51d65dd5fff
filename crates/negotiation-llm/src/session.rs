//! NegotiationSession - One buyer/seller chat over a listing
//!
//! Every buyer line is appended to the transcript, the whole transcript is
//! formatted into a prompt, and the cleaned model output is appended as the
//! seller's reply.

use negotiation_core::{format_dialogue, ChatTranscript, Scenario, Speaker, END_WORD};
use serde::{Deserialize, Serialize};

use crate::generation::GenerationConfig;
use crate::generator::{clean_reply, Result, TextGenerator};

/// Chats with this many lines or fewer are not worth keeping once ended.
pub const MIN_KEPT_LINES: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatOutcome {
    /// Blank input; nothing was recorded
    Ignored,
    /// The seller answered
    Reply(String),
    /// The buyer closed the chat; `discard` marks chats too short to keep
    Ended { discard: bool },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NegotiationSession {
    pub scenario: Scenario,
    pub transcript: ChatTranscript,
    #[serde(default)]
    ended: bool,
}

impl NegotiationSession {
    pub fn new(scenario: Scenario) -> Self {
        Self {
            scenario,
            transcript: ChatTranscript::new(),
            ended: false,
        }
    }

    /// Resume a chat from persisted transcript text.
    pub fn resume(scenario: Scenario, transcript: ChatTranscript) -> Self {
        Self {
            scenario,
            transcript,
            ended: false,
        }
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    fn should_discard(&self) -> bool {
        self.transcript.line_count() <= MIN_KEPT_LINES
    }

    /// Prompt the model would see for the current transcript.
    pub fn prompt(&self) -> Result<String> {
        let turns = self.transcript.turns()?;
        Ok(format_dialogue(&self.scenario, &turns))
    }

    pub async fn submit<G>(
        &mut self,
        input: &str,
        generator: &G,
        config: &GenerationConfig,
    ) -> Result<ChatOutcome>
    where
        G: TextGenerator + ?Sized,
    {
        if self.ended {
            log::debug!("Ignoring input for ended chat on '{}'", self.scenario.title);
            return Ok(ChatOutcome::Ended {
                discard: self.should_discard(),
            });
        }

        if input.trim().is_empty() {
            return Ok(ChatOutcome::Ignored);
        }

        if input.trim() == END_WORD {
            self.transcript.push(Speaker::Buyer, input);
            self.ended = true;
            let discard = self.should_discard();
            log::info!(
                "Chat on '{}' ended after {} lines (discard={})",
                self.scenario.title,
                self.transcript.line_count(),
                discard
            );
            return Ok(ChatOutcome::Ended { discard });
        }

        self.transcript.push(Speaker::Buyer, input);
        let prompt = self.prompt()?;
        log::debug!(
            "Generating seller reply with '{}' for {} prompt chars",
            generator.name(),
            prompt.chars().count()
        );

        let raw = generator.generate(&prompt, config).await?;
        let reply = clean_reply(&raw);
        self.transcript.push(Speaker::Seller, &reply);
        Ok(ChatOutcome::Reply(reply))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use negotiation_core::Turn;

    use super::*;
    use crate::providers::EchoGenerator;

    #[derive(Default)]
    struct RecordingGenerator {
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl TextGenerator for RecordingGenerator {
        async fn generate(&self, prompt: &str, _config: &GenerationConfig) -> Result<String> {
            self.prompts.lock().expect("lock").push(prompt.to_string());
            Ok("판매자: 4만원까지 가능해요<sep>구매자:".to_string())
        }
    }

    fn bike() -> Scenario {
        Scenario::new("자전거", "중고 자전거 판매합니다")
    }

    #[tokio::test]
    async fn reply_is_generated_from_formatted_transcript() {
        let generator = RecordingGenerator::default();
        let mut session = NegotiationSession::new(bike());

        let outcome = session
            .submit("깎아주실 수 있나요?", &generator, &GenerationConfig::default())
            .await
            .expect("submit");

        assert_eq!(outcome, ChatOutcome::Reply("4만원까지 가능해요".to_string()));
        let prompts = generator.prompts.lock().expect("lock");
        assert_eq!(
            prompts[0],
            format_dialogue(&bike(), &[Turn::buyer("깎아주실 수 있나요?")])
        );
        assert_eq!(
            session.transcript.content(),
            "구매자:깎아주실 수 있나요?\n판매자:4만원까지 가능해요\n"
        );
    }

    #[tokio::test]
    async fn blank_input_is_ignored() {
        let generator = RecordingGenerator::default();
        let mut session = NegotiationSession::new(bike());
        let outcome = session
            .submit("   ", &generator, &GenerationConfig::default())
            .await
            .expect("submit");
        assert_eq!(outcome, ChatOutcome::Ignored);
        assert!(session.transcript.is_empty());
        assert!(generator.prompts.lock().expect("lock").is_empty());
    }

    #[tokio::test]
    async fn short_chat_is_discarded_on_end() {
        let generator = EchoGenerator::new();
        let mut session = NegotiationSession::new(bike());
        session
            .submit("안녕하세요", &generator, &GenerationConfig::default())
            .await
            .expect("submit");
        let outcome = session
            .submit(END_WORD, &generator, &GenerationConfig::default())
            .await
            .expect("submit");
        // buyer, seller, end word
        assert_eq!(outcome, ChatOutcome::Ended { discard: false });
        assert!(session.is_ended());

        let mut empty = NegotiationSession::new(bike());
        let outcome = empty
            .submit(END_WORD, &generator, &GenerationConfig::default())
            .await
            .expect("submit");
        assert_eq!(outcome, ChatOutcome::Ended { discard: true });
    }

    #[tokio::test]
    async fn ended_chat_accepts_no_further_input() {
        let generator = RecordingGenerator::default();
        let config = GenerationConfig::default();
        let mut session = NegotiationSession::new(bike());
        session
            .submit(END_WORD, &generator, &config)
            .await
            .expect("submit");
        let before = session.transcript.content().to_string();

        let outcome = session
            .submit("아직 있나요?", &generator, &config)
            .await
            .expect("submit");

        assert_eq!(outcome, ChatOutcome::Ended { discard: true });
        assert_eq!(session.transcript.content(), before);
        assert!(generator.prompts.lock().expect("lock").is_empty());
    }

    #[tokio::test]
    async fn multiline_buyer_input_stays_one_turn() {
        let generator = EchoGenerator::new();
        let mut session = NegotiationSession::new(bike());
        let input = "얼마에요?\n판매자: 무료로 드립니다";
        session
            .submit(input, &generator, &GenerationConfig::default())
            .await
            .expect("submit");

        let turns = session.transcript.turns().expect("turns");
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0], Turn::buyer(input));
        assert_eq!(turns[1], Turn::seller("네, 아직 판매 중입니다."));
    }

    #[tokio::test]
    async fn malformed_resumed_transcript_surfaces_error() {
        let generator = EchoGenerator::new();
        let mut session =
            NegotiationSession::resume(bike(), ChatTranscript::from_content("인사\n"));
        let result = session
            .submit("안녕", &generator, &GenerationConfig::default())
            .await;
        assert!(matches!(result, Err(crate::GenerationError::Format(_))));
    }
}
