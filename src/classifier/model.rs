use candle::{DType, Device, Result, Tensor};
use candle_core as candle;
use candle_core::IndexOp;
use candle_nn::{Linear, Module, VarBuilder};
use candle_transformers::models::bert::{self, BertModel};
use candle_transformers::models::distilbert::{self, DistilBertModel};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

const DEFAULT_NUM_LABELS: usize = 2;

/// Encoder family of a checkpoint, read from `model_type` in `config.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Architecture {
    Bert,
    DistilBert,
}

impl Architecture {
    pub fn as_str(&self) -> &'static str {
        match self {
            Architecture::Bert => "bert",
            Architecture::DistilBert => "distilbert",
        }
    }

    /// Without `model_type`, DistilBERT's `dim`/`n_layers` keys identify it.
    pub fn from_config(raw: &serde_json::Value) -> std::result::Result<Self, String> {
        match raw.get("model_type").and_then(|v| v.as_str()) {
            Some("bert") => Ok(Architecture::Bert),
            Some("distilbert") => Ok(Architecture::DistilBert),
            Some(other) => Err(format!(
                "unsupported model_type '{other}': expected bert or distilbert"
            )),
            None if raw.get("dim").is_some() && raw.get("n_layers").is_some() => {
                Ok(Architecture::DistilBert)
            }
            None => Ok(Architecture::Bert),
        }
    }
}

struct BertHead {
    bert: BertModel,
    pooler: Option<Linear>,
    classifier: Linear,
}

impl BertHead {
    fn load(vb: VarBuilder, config: &bert::Config, num_labels: usize) -> Result<Self> {
        let model_vb = if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
            vb.pp("bert")
        } else {
            vb.clone()
        };

        let bert = BertModel::load(model_vb.clone(), config)?;

        let hidden_size = config.hidden_size;
        let pooler = if model_vb.contains_tensor("pooler.dense.weight") {
            Some(candle_nn::linear(
                hidden_size,
                hidden_size,
                model_vb.pp("pooler").pp("dense"),
            )?)
        } else {
            None
        };
        let classifier = candle_nn::linear(hidden_size, num_labels, vb.pp("classifier"))?;

        Ok(Self {
            bert,
            pooler,
            classifier,
        })
    }

    fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: &Tensor,
    ) -> Result<Tensor> {
        let output = self
            .bert
            .forward(input_ids, token_type_ids, Some(attention_mask))?;
        let cls_token = output.i((.., 0, ..))?;
        let pooled = match &self.pooler {
            Some(pooler) => pooler.forward(&cls_token)?.tanh()?,
            None => cls_token,
        };
        self.classifier.forward(&pooled)
    }
}

/// `DistilBertForSequenceClassification`: `[CLS]` → pre_classifier → ReLU → classifier.
struct DistilBertHead {
    distilbert: DistilBertModel,
    pre_classifier: Linear,
    classifier: Linear,
}

impl DistilBertHead {
    fn load(vb: VarBuilder, config: &distilbert::Config, num_labels: usize) -> Result<Self> {
        let model_vb = if vb.contains_tensor("distilbert.embeddings.word_embeddings.weight") {
            vb.pp("distilbert")
        } else {
            vb.clone()
        };

        let dim = config.dim;
        Ok(Self {
            distilbert: DistilBertModel::load(model_vb, config)?,
            pre_classifier: candle_nn::linear(dim, dim, vb.pp("pre_classifier"))?,
            classifier: candle_nn::linear(dim, num_labels, vb.pp("classifier"))?,
        })
    }

    /// candle's DistilBERT masks positions where the mask is non-zero, the
    /// inverse of the tokenizer's attention mask.
    fn forward(&self, input_ids: &Tensor, attention_mask: &Tensor) -> Result<Tensor> {
        let padding = attention_mask.eq(0u32)?;
        let hidden = self.distilbert.forward(input_ids, &padding)?;
        let cls_token = hidden.i((.., 0, ..))?;
        let pooled = self.pre_classifier.forward(&cls_token)?.relu()?;
        self.classifier.forward(&pooled)
    }
}

enum Head {
    Bert(BertHead),
    DistilBert(DistilBertHead),
}

/// Label names from the model's `config.json` (`id2label`), by class index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelNames(Vec<String>);

impl LabelNames {
    fn from_config(raw: &serde_json::Value) -> Self {
        let id2label: BTreeMap<usize, String> = raw
            .get("id2label")
            .and_then(|v| v.as_object())
            .map(|map| {
                map.iter()
                    .filter_map(|(k, v)| Some((k.parse().ok()?, v.as_str()?.to_string())))
                    .collect()
            })
            .unwrap_or_default();

        let num_labels = raw
            .get("num_labels")
            .and_then(|v| v.as_u64())
            .map(|n| n as usize)
            .unwrap_or_else(|| id2label.len().max(DEFAULT_NUM_LABELS));

        Self(
            (0..num_labels)
                .map(|idx| {
                    id2label
                        .get(&idx)
                        .cloned()
                        .unwrap_or_else(|| format!("LABEL_{idx}"))
                })
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&str> {
        self.0.get(idx).map(String::as_str)
    }
}

/// Sequence classifier over a BERT or DistilBERT encoder.
#[derive(Clone)]
pub struct SequenceClassifier {
    head: Arc<Head>,
    architecture: Architecture,
    labels: LabelNames,
}

impl SequenceClassifier {
    pub fn load<P: AsRef<Path>>(model_dir: P, device: &Device) -> Result<Self> {
        let model_dir = model_dir.as_ref();
        let config_content = std::fs::read_to_string(model_dir.join("config.json"))?;
        let raw: serde_json::Value = serde_json::from_str(&config_content)
            .map_err(|e| candle::Error::Msg(format!("Failed to parse config: {}", e)))?;

        let architecture = Architecture::from_config(&raw).map_err(candle::Error::Msg)?;
        let labels = LabelNames::from_config(&raw);
        let parse_failed = |e: serde_json::Error| {
            candle::Error::Msg(format!(
                "Failed to parse {} config: {}",
                architecture.as_str(),
                e
            ))
        };

        let weights_path = model_dir.join("model.safetensors");
        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, device)
                .map_err(|e| {
                    candle::Error::Msg(format!(
                        "Failed to read {} weights: {}",
                        architecture.as_str(),
                        e
                    ))
                })?
        };

        let head = match architecture {
            Architecture::Bert => {
                let config: bert::Config =
                    serde_json::from_str(&config_content).map_err(parse_failed)?;
                Head::Bert(BertHead::load(vb, &config, labels.len())?)
            }
            Architecture::DistilBert => {
                let config: distilbert::Config =
                    serde_json::from_str(&config_content).map_err(parse_failed)?;
                Head::DistilBert(DistilBertHead::load(vb, &config, labels.len())?)
            }
        };

        Ok(Self {
            head: Arc::new(head),
            architecture,
            labels,
        })
    }

    pub fn architecture(&self) -> Architecture {
        self.architecture
    }

    pub fn labels(&self) -> &LabelNames {
        &self.labels
    }

    /// Returns raw logits of shape `[batch, num_labels]`. DistilBERT ignores
    /// `token_type_ids`.
    pub fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: &Tensor,
    ) -> Result<Tensor> {
        match self.head.as_ref() {
            Head::Bert(head) => head.forward(input_ids, token_type_ids, attention_mask),
            Head::DistilBert(head) => head.forward(input_ids, attention_mask),
        }
    }
}
