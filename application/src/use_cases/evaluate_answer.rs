//! Evaluate Answer use case
//!
//! Renders the judge prompt, sends it through the [`JudgeGateway`], and
//! decodes the reply into an [`EvaluationResult`].

use super::judge_gateway::{GatewayError, JudgeGateway};
use crate::ports::judge::{Judge, JudgeError};
use crate::ports::judge_endpoint::JudgeEndpoint;
use async_trait::async_trait;
use ogiri_domain::{EvaluationResult, JudgePromptTemplate, Topic, decode_judge_response};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Use case for judging one answer
pub struct EvaluateAnswerUseCase<E: JudgeEndpoint + 'static> {
    gateway: JudgeGateway<E>,
}

impl<E: JudgeEndpoint + 'static> EvaluateAnswerUseCase<E> {
    pub fn new(gateway: JudgeGateway<E>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<E: JudgeEndpoint + 'static> Judge for EvaluateAnswerUseCase<E> {
    async fn evaluate(
        &self,
        topic: &Topic,
        answer: &str,
        cancel: &CancellationToken,
    ) -> Result<EvaluationResult, JudgeError> {
        let prompt = JudgePromptTemplate::render(topic, answer);
        debug!("Judging answer to topic {}", topic.id);

        match self.gateway.generate(&prompt, cancel).await {
            Ok(body) => {
                let result = decode_judge_response(&body);
                if result.is_failure() {
                    warn!("Judge reply could not be decoded");
                }
                Ok(result)
            }
            Err(GatewayError::RequestFailed { model, message }) => {
                warn!("Judge request to {} failed: {}", model, message);
                Ok(EvaluationResult::failed())
            }
            Err(GatewayError::Configuration(msg)) => Err(JudgeError::Configuration(msg)),
            Err(GatewayError::Cancelled) => Err(JudgeError::Cancelled),
        }
    }
}
