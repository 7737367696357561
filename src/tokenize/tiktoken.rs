//! tiktoken-backed tokenizers.

use super::{Tokenizer, TokenizeError, TokenizerProvider};

/// Example model ids for each vocabulary, shown by `--list-models`.
const KNOWN_MODELS: &[(&str, &str)] = &[
    ("gpt-4o", "o200k_base"),
    ("gpt-4", "cl100k_base"),
    ("gpt-3.5-turbo", "cl100k_base"),
    ("text-embedding-ada-002", "cl100k_base"),
    ("text-davinci-003", "p50k_base"),
    ("code-davinci-002", "p50k_base"),
    ("text-davinci-edit-001", "p50k_edit"),
    ("davinci", "r50k_base"),
    ("gpt2", "gpt2"),
];

pub fn known_models() -> &'static [(&'static str, &'static str)] {
    KNOWN_MODELS
}

/// Resolves model ids through tiktoken's model table (exact names and
/// dated/fine-tuned prefixes). Vocabularies are loaded once per process.
#[derive(Debug, Default, Clone, Copy)]
pub struct TiktokenProvider;

#[cfg(feature = "tiktoken")]
mod backend {
    use super::super::{Tokenizer, TokenizeError};
    use once_cell::sync::OnceCell;
    use tiktoken_rs::tokenizer::{get_tokenizer, Tokenizer as Vocab};
    use tiktoken_rs::{get_bpe_from_tokenizer, CoreBPE};

    static O200K: OnceCell<CoreBPE> = OnceCell::new();
    static CL100K: OnceCell<CoreBPE> = OnceCell::new();
    static P50K: OnceCell<CoreBPE> = OnceCell::new();
    static P50K_EDIT: OnceCell<CoreBPE> = OnceCell::new();
    static R50K: OnceCell<CoreBPE> = OnceCell::new();

    pub struct TiktokenTokenizer {
        encoding: &'static str,
        bpe: &'static CoreBPE,
    }

    impl Tokenizer for TiktokenTokenizer {
        fn encode(&self, text: &str) -> Vec<u32> {
            self.bpe.encode_with_special_tokens(text)
        }

        fn encoding_name(&self) -> &str {
            self.encoding
        }
    }

    pub fn load(model: &str) -> Result<TiktokenTokenizer, TokenizeError> {
        let vocab = get_tokenizer(model)
            .ok_or_else(|| TokenizeError::UnsupportedModel { model: model.to_string() })?;

        let (encoding, cell): (&'static str, &'static OnceCell<CoreBPE>) = match vocab {
            Vocab::O200kBase => ("o200k_base", &O200K),
            Vocab::Cl100kBase => ("cl100k_base", &CL100K),
            Vocab::P50kBase => ("p50k_base", &P50K),
            Vocab::P50kEdit => ("p50k_edit", &P50K_EDIT),
            Vocab::R50kBase => ("r50k_base", &R50K),
            Vocab::Gpt2 => ("gpt2", &R50K),
        };

        let bpe = cell.get_or_try_init(|| get_bpe_from_tokenizer(vocab)).map_err(|e| {
            TokenizeError::TokenizerUnavailable {
                reason: format!("failed to load {} vocabulary: {}", encoding, e),
            }
        })?;
        tracing::debug!(model, encoding, "resolved tokenizer");

        Ok(TiktokenTokenizer { encoding, bpe })
    }
}

impl TokenizerProvider for TiktokenProvider {
    #[cfg(feature = "tiktoken")]
    fn tokenizer_for(&self, model: &str) -> Result<Box<dyn Tokenizer>, TokenizeError> {
        Ok(Box::new(backend::load(model)?))
    }

    #[cfg(not(feature = "tiktoken"))]
    fn tokenizer_for(&self, model: &str) -> Result<Box<dyn Tokenizer>, TokenizeError> {
        tracing::debug!(model, "tiktoken feature disabled");
        Err(TokenizeError::TokenizerUnavailable {
            reason: "built without the `tiktoken` feature".to_string(),
        })
    }
}
