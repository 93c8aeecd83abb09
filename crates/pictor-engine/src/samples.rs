// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Demo data seeding for an empty store.

use rand::Rng;
use tracing::{debug, info};

use pictor_core::{PictorError, Style};
use pictor_storage::RecordStore;

use crate::pipeline::GenerationPipeline;

/// One canned sample: a prompt and its intended style.
pub struct SamplePrompt {
    pub prompt: &'static str,
    pub style: Style,
}

/// Demo records seeded into an empty store, one per style.
pub const SAMPLE_PROMPTS: [SamplePrompt; 3] = [
    SamplePrompt {
        prompt: "a fantasy castle in the clouds",
        style: Style::Realistic,
    },
    SamplePrompt {
        prompt: "a futuristic robot chef in a kitchen",
        style: Style::Cyberpunk,
    },
    SamplePrompt {
        prompt: "a panda riding a bicycle in space",
        style: Style::Cartoon,
    },
];

/// Canned feedback attached to seeded records.
const FEEDBACK_OPTIONS: [&str; 3] = [
    "Great image, matches my expectation",
    "Nice style, but could use more detail",
    "Colors are perfect, composition is good",
];

/// Seeds demo records when the store is empty.
///
/// Each sample goes through the normal submission path and then gets a
/// random score in 6..=9 with canned feedback, so the gallery and the
/// report have something to show on first run. Returns how many records
/// were seeded; zero when the store already holds records.
pub async fn seed_samples(
    pipeline: &GenerationPipeline,
    store: &RecordStore,
) -> Result<u32, PictorError> {
    if store.count().await? > 0 {
        debug!("store is not empty, skipping sample seeding");
        return Ok(0);
    }

    let mut seeded = 0;
    for sample in &SAMPLE_PROMPTS {
        let record = pipeline.submit(sample.prompt, sample.style).await?;
        let (score, feedback) = {
            // ThreadRng is not Send; keep it out of scope across awaits.
            let mut rng = rand::thread_rng();
            let score = rng.gen_range(6..=9);
            let feedback = FEEDBACK_OPTIONS[rng.gen_range(0..FEEDBACK_OPTIONS.len())];
            (score, feedback)
        };
        store
            .update_evaluation(record.id, score, Some(feedback))
            .await?;
        seeded += 1;
        info!(id = record.id, style = %sample.style, "seeded sample record");
    }
    Ok(seeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pictor_config::LimitsConfig;
    use pictor_test_utils::TestHarness;

    use crate::limiter::RateLimiter;

    fn pipeline(harness: &TestHarness) -> GenerationPipeline {
        GenerationPipeline::new(
            harness.store.clone(),
            harness.generator.clone(),
            RateLimiter::new(&LimitsConfig::default()),
        )
    }

    #[tokio::test]
    async fn seeding_populates_an_empty_store() {
        let harness = TestHarness::builder().build().await.unwrap();
        let pipeline = pipeline(&harness);

        let seeded = seed_samples(&pipeline, &harness.store).await.unwrap();
        assert_eq!(seeded, 3);

        let records = harness.store.list_all().await.unwrap();
        assert_eq!(records.len(), 3);
        for record in &records {
            let score = record.score.unwrap();
            assert!((6..=9).contains(&score), "score out of range: {score}");
            let feedback = record.feedback.as_deref().unwrap();
            assert!(FEEDBACK_OPTIONS.contains(&feedback), "unexpected feedback: {feedback}");
        }

        let styles: Vec<Style> = records.iter().map(|r| r.style).collect();
        assert!(styles.contains(&Style::Realistic));
        assert!(styles.contains(&Style::Cyberpunk));
        assert!(styles.contains(&Style::Cartoon));
    }

    #[tokio::test]
    async fn seeding_is_a_noop_when_records_exist() {
        let harness = TestHarness::builder().build().await.unwrap();
        let pipeline = pipeline(&harness);

        pipeline.submit("already here", Style::Cartoon).await.unwrap();
        let seeded = seed_samples(&pipeline, &harness.store).await.unwrap();

        assert_eq!(seeded, 0);
        assert_eq!(harness.store.count().await.unwrap(), 1);
        assert_eq!(harness.generator.call_count().await, 1);
    }
}
