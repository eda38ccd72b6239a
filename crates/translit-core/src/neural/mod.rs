//! Correction oracle backed by a fine-tuned mT5 model.
//!
//! Loads a Hugging Face style model directory (`config.json`,
//! `tokenizer.json`, `model.safetensors`) and decodes on the CPU with beam
//! search, or greedily when `num_beams` is 1.


use std::cmp::Ordering;
use std::path::Path;
use std::sync::Mutex;

use candle_core::{DType, Device, Tensor, D};
use candle_nn::VarBuilder;
use candle_transformers::models::t5::{Config, T5ForConditionalGeneration};
use tokenizers::Tokenizer;
use tracing::{debug, debug_span};

use crate::resolver::{build_prompt, strip_prompt_echo, CorrectionOracle, OracleError};
use crate::settings::NeuralSettings;

pub struct Mt5Oracle {
    model: Mutex<T5ForConditionalGeneration>,
    tokenizer: Tokenizer,
    config: Config,
    device: Device,
    max_new_tokens: usize,
    num_beams: usize,
}

/// One partial decoder output, starting with the decoder start token.
#[derive(Debug, Clone, PartialEq)]
struct Hypothesis {
    tokens: Vec<u32>,
    /// Sum of token log-probabilities.
    score: f32,
}

impl Hypothesis {
    /// Score averaged over generated tokens, so short outputs are not favored.
    fn normalized_score(&self) -> f32 {
        let generated = self.tokens.len().saturating_sub(1).max(1);
        self.score / generated as f32
    }
}

impl Mt5Oracle {
    /// Load the model found in `model_dir`.
    pub fn open(model_dir: &Path, settings: &NeuralSettings) -> anyhow::Result<Self> {
        let device = Device::Cpu;

        let config_json = std::fs::read_to_string(model_dir.join("config.json"))?;
        let config: Config = serde_json::from_str(&config_json)?;
        let tokenizer = Tokenizer::from_file(model_dir.join("tokenizer.json"))
            .map_err(|e| anyhow::anyhow!("failed to load tokenizer: {e}"))?;

        let weights = model_dir.join("model.safetensors");
        // SAFETY: the weights file must not change while it is mapped.
        let vb = unsafe { VarBuilder::from_mmaped_safetensors(&[weights], DType::F32, &device)? };
        let model = T5ForConditionalGeneration::load(vb, &config)
            .map_err(|e| anyhow::anyhow!("failed to load mT5 weights: {e}"))?;

        Ok(Self {
            model: Mutex::new(model),
            tokenizer,
            config,
            device,
            max_new_tokens: settings.max_new_tokens,
            num_beams: settings.num_beams,
        })
    }

    /// Decode `prompt`, up to `max_new_tokens` tokens.
    ///
    /// Uses beam search when `num_beams > 1`, greedy decoding otherwise.
    pub fn generate(&self, prompt: &str) -> anyhow::Result<String> {
        let _span = debug_span!(
            "mt5_generate",
            prompt_len = prompt.len(),
            num_beams = self.num_beams
        )
        .entered();

        let encoding = self
            .tokenizer
            .encode(prompt, true)
            .map_err(|e| anyhow::anyhow!("tokenize failed: {e}"))?;
        let input_ids = Tensor::new(encoding.get_ids(), &self.device)?.unsqueeze(0)?;

        let mut model = self
            .model
            .lock()
            .map_err(|_| anyhow::anyhow!("model lock poisoned"))?;
        model.clear_kv_cache();
        let encoder_output = model.encode(&input_ids)?;

        let start = self
            .config
            .decoder_start_token_id
            .unwrap_or(self.config.pad_token_id) as u32;
        let output_ids = if self.num_beams > 1 {
            self.beam_search(&mut model, &encoder_output, start)?
        } else {
            self.greedy(&mut model, &encoder_output, start)?
        };
        debug!(tokens = output_ids.len(), "mT5 decode finished");

        self.tokenizer
            .decode(&output_ids, true)
            .map_err(|e| anyhow::anyhow!("detokenize failed: {e}"))
    }

    fn greedy(
        &self,
        model: &mut T5ForConditionalGeneration,
        encoder_output: &Tensor,
        start: u32,
    ) -> anyhow::Result<Vec<u32>> {
        let mut output_ids = vec![start];

        for step in 0..self.max_new_tokens {
            let decoder_ids = if step == 0 || !self.config.use_cache {
                Tensor::new(output_ids.as_slice(), &self.device)?.unsqueeze(0)?
            } else {
                let last = output_ids[output_ids.len() - 1];
                Tensor::new(&[last], &self.device)?.unsqueeze(0)?
            };
            let logits = model
                .decode(&decoder_ids, encoder_output)?
                .squeeze(0)?
                .to_dtype(DType::F32)?;

            let next = argmax(&logits)?;
            if next as usize == self.config.eos_token_id {
                break;
            }
            output_ids.push(next);
        }

        output_ids.remove(0);
        Ok(output_ids)
    }

    /// Each step re-decodes every beam from scratch, since the KV cache
    /// holds a single sequence.
    fn beam_search(
        &self,
        model: &mut T5ForConditionalGeneration,
        encoder_output: &Tensor,
        start: u32,
    ) -> anyhow::Result<Vec<u32>> {
        let eos = self.config.eos_token_id as u32;
        let mut beams = vec![Hypothesis {
            tokens: vec![start],
            score: 0.0,
        }];
        let mut finished = Vec::new();

        for _ in 0..self.max_new_tokens {
            let mut candidates = Vec::with_capacity(beams.len() * self.num_beams);
            for beam in &beams {
                model.clear_kv_cache();
                let decoder_ids = Tensor::new(beam.tokens.as_slice(), &self.device)?.unsqueeze(0)?;
                let logits = model
                    .decode(&decoder_ids, encoder_output)?
                    .squeeze(0)?
                    .to_dtype(DType::F32)?;
                let log_probs = candle_nn::ops::log_softmax(&logits, D::Minus1)?;
                for (token, log_prob) in top_k(&log_probs, self.num_beams)? {
                    let mut tokens = beam.tokens.clone();
                    tokens.push(token);
                    candidates.push(Hypothesis {
                        tokens,
                        score: beam.score + log_prob,
                    });
                }
            }

            beams = select_beams(candidates, eos, self.num_beams, &mut finished);
            if beams.is_empty() || finished.len() >= self.num_beams {
                break;
            }
        }

        let best = best_hypothesis(finished, beams)
            .ok_or_else(|| anyhow::anyhow!("beam search produced no hypothesis"))?;
        Ok(best.tokens[1..].to_vec())
    }
}

impl CorrectionOracle for Mt5Oracle {
    fn correct(&self, original: &str, heuristic: &str) -> Result<String, OracleError> {
        let output = self
            .generate(&build_prompt(original, heuristic))
            .map_err(|e| OracleError::Failed(e.to_string()))?;
        Ok(strip_prompt_echo(&output).to_string())
    }
}

/// Keep the `width` best candidates that continue, moving those that ended
/// with `eos` into `finished` without the `eos` token.
fn select_beams(
    mut candidates: Vec<Hypothesis>,
    eos: u32,
    width: usize,
    finished: &mut Vec<Hypothesis>,
) -> Vec<Hypothesis> {
    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let mut beams = Vec::with_capacity(width);
    for mut candidate in candidates {
        if beams.len() == width {
            break;
        }
        if candidate.tokens.last() == Some(&eos) {
            candidate.tokens.pop();
            finished.push(candidate);
        } else {
            beams.push(candidate);
        }
    }
    beams
}

/// Highest length-normalized score among finished and live hypotheses.
fn best_hypothesis(finished: Vec<Hypothesis>, live: Vec<Hypothesis>) -> Option<Hypothesis> {
    finished.into_iter().chain(live).max_by(|a, b| {
        a.normalized_score()
            .partial_cmp(&b.normalized_score())
            .unwrap_or(Ordering::Equal)
    })
}

/// The `k` largest entries of a 1-D tensor as `(index, value)`, best first.
fn top_k(values: &Tensor, k: usize) -> anyhow::Result<Vec<(u32, f32)>> {
    let values: Vec<f32> = values
        .to_vec1()
        .map_err(|e| anyhow::anyhow!("top_k to_vec1 failed: {e}"))?;
    let mut indexed: Vec<(u32, f32)> = values
        .into_iter()
        .enumerate()
        .map(|(i, v)| (i as u32, v))
        .collect();
    let by_value_desc =
        |a: &(u32, f32), b: &(u32, f32)| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal);
    if k < indexed.len() {
        indexed.select_nth_unstable_by(k, by_value_desc);
        indexed.truncate(k);
    }
    indexed.sort_by(by_value_desc);
    Ok(indexed)
}

/// Return the index of the maximum value in a 1-D logits tensor.
fn argmax(logits: &Tensor) -> anyhow::Result<u32> {
    let logits_vec: Vec<f32> = logits
        .to_vec1()
        .map_err(|e| anyhow::anyhow!("argmax to_vec1 failed: {e}"))?;
    let (max_idx, _) = logits_vec
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(Ordering::Equal))
        .ok_or_else(|| anyhow::anyhow!("empty logits tensor"))?;
    Ok(max_idx as u32)
}
